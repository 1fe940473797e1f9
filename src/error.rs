//! Error types for the character build engine

#[cfg(feature = "python")]
use pyo3::exceptions::{PyIndexError, PyKeyError, PyRuntimeError, PyValueError};
#[cfg(feature = "python")]
use pyo3::PyErr;
use thiserror::Error;

/// Main error type for the character build engine
///
/// `BudgetExceeded` and `FloorViolation` are rejections: the caller keeps its
/// prior state and reports the reason. Everything else is a configuration or
/// caller bug, except `PersistenceUnavailable` which is absorbed by the
/// persistence boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Budget exceeded: total would be {attempted}, maximum is {max}")]
    BudgetExceeded { attempted: i32, max: i32 },

    #[error("Floor violation: {target} cannot go below 0")]
    FloorViolation { target: String },

    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("Unknown class: {0}")]
    UnknownClass(String),

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Index out of range: {index} (roster has {len} characters)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid delta: {0} (expected +1 or -1)")]
    InvalidDelta(i32),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),
}

impl BuildError {
    /// True for allocation-rule violations that leave state untouched
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            BuildError::BudgetExceeded { .. } | BuildError::FloorViolation { .. }
        )
    }
}

impl From<serde_json::Error> for BuildError {
    fn from(err: serde_json::Error) -> Self {
        BuildError::InvalidSnapshot(err.to_string())
    }
}

impl From<std::io::Error> for BuildError {
    fn from(err: std::io::Error) -> Self {
        BuildError::PersistenceUnavailable(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<BuildError> for PyErr {
    fn from(err: BuildError) -> PyErr {
        let msg = err.to_string();
        match err {
            BuildError::UnknownSkill(_)
            | BuildError::UnknownClass(_)
            | BuildError::UnknownAttribute(_) => PyKeyError::new_err(msg),
            BuildError::IndexOutOfRange { .. } => PyIndexError::new_err(msg),
            BuildError::InvalidDelta(_)
            | BuildError::InvalidConfig(_)
            | BuildError::InvalidSnapshot(_) => PyValueError::new_err(msg),
            BuildError::BudgetExceeded { .. }
            | BuildError::FloorViolation { .. }
            | BuildError::PersistenceUnavailable(_) => PyRuntimeError::new_err(msg),
        }
    }
}

/// Result type alias for the character build engine
pub type Result<T> = std::result::Result<T, BuildError>;
