//! Point allocation rules
//!
//! Both allocators take the character by reference and return a new one; a
//! rejection (`BudgetExceeded` / `FloorViolation`) leaves the caller's value
//! as it was.

mod attribute;
mod skill;

#[cfg(test)]
mod property_tests;

pub use attribute::*;
pub use skill::*;

use crate::error::BuildError;
use serde::{Deserialize, Serialize};

/// A single one-point adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    Increase,
    Decrease,
}

impl Step {
    #[inline]
    pub fn delta(self) -> i32 {
        match self {
            Step::Increase => 1,
            Step::Decrease => -1,
        }
    }
}

impl TryFrom<i32> for Step {
    type Error = BuildError;

    fn try_from(delta: i32) -> Result<Self, Self::Error> {
        match delta {
            1 => Ok(Step::Increase),
            -1 => Ok(Step::Decrease),
            other => Err(BuildError::InvalidDelta(other)),
        }
    }
}
