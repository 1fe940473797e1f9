//! Character Build Core - tabletop RPG character build and skill-check engine
//!
//! Attribute point-buy, Intelligence-driven skill budgets, class qualification
//! and d20 skill checks over a roster of characters. Every operation is a pure
//! transition from one roster to the next; persistence sits behind an async
//! store boundary. Optional Python bindings via PyO3 (`python` feature).

pub mod allocation;
pub mod character;
pub mod check;
pub mod config;
pub mod engine;
pub mod error;
pub mod modifier;
pub mod persistence;
pub mod qualification;
pub mod roster;

pub use crate::error::{BuildError, Result};

#[cfg(feature = "python")]
pub use python::cached_rules;

#[cfg(feature = "python")]
mod python {
    use crate::config::Rules;
    use crate::engine::CharacterBuilder;
    use crate::persistence::{JsonFileStore, SnapshotStore};
    use crate::roster::RosterSnapshot;
    use once_cell::sync::OnceCell;
    use parking_lot::RwLock;
    use pyo3::prelude::*;
    use std::sync::Arc;

    // ========================================================================
    // Cached Rules
    // ========================================================================

    /// Global rules, set once by `init_rules`
    static CACHED_RULES: OnceCell<RwLock<Arc<Rules>>> = OnceCell::new();

    /// Rules loaded by `init_rules`
    pub fn cached_rules() -> PyResult<Arc<Rules>> {
        CACHED_RULES
            .get()
            .map(|rules| rules.read().clone())
            .ok_or_else(|| {
                PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
                    "Rules not initialized. Call init_rules() first.",
                )
            })
    }

    // ========================================================================
    // Python Functions
    // ========================================================================

    /// Load the rules configuration (call once at startup)
    ///
    /// # Arguments
    /// * `config_json` - Rules as JSON; the standard tables when omitted
    ///
    /// # Raises
    /// ValueError if the configuration is malformed
    #[pyfunction]
    #[pyo3(signature = (config_json=None))]
    fn init_rules(config_json: Option<&str>) -> PyResult<()> {
        let rules = match config_json {
            Some(json) => Rules::from_json(json)?,
            None => Rules::default(),
        };
        let rules = Arc::new(rules);

        // Sessions already created keep the rules they were built with
        *CACHED_RULES
            .get_or_init(|| RwLock::new(Arc::clone(&rules)))
            .write() = rules;

        Ok(())
    }

    #[pyfunction]
    fn is_rules_initialized() -> bool {
        CACHED_RULES.get().is_some()
    }

    /// Save a roster snapshot to a JSON file without blocking the event loop
    ///
    /// Failures are logged, never raised.
    #[pyfunction]
    fn save_snapshot_async<'py>(
        py: Python<'py>,
        path: String,
        snapshot_json: String,
    ) -> PyResult<Bound<'py, PyAny>> {
        let snapshot = RosterSnapshot::from_json(&snapshot_json)?;
        pyo3_async_runtimes::tokio::future_into_py(py, async move {
            let store = JsonFileStore::new(path);
            if let Err(e) = store.save(&snapshot).await {
                tracing::warn!(error = %e, "Roster save failed");
            }
            Ok(())
        })
    }

    /// Load a roster snapshot JSON from a file
    ///
    /// # Returns
    /// Awaitable resolving to the snapshot JSON, or None when nothing usable
    /// was found
    #[pyfunction]
    fn load_snapshot_async<'py>(py: Python<'py>, path: String) -> PyResult<Bound<'py, PyAny>> {
        pyo3_async_runtimes::tokio::future_into_py(py, async move {
            let store = JsonFileStore::new(path);
            let json = match store.load().await {
                Ok(Some(snapshot)) => snapshot.to_json().ok(),
                Ok(None) => None,
                Err(e) => {
                    tracing::warn!(error = %e, "Roster load failed");
                    None
                }
            };
            Ok(json)
        })
    }

    // ========================================================================
    // Python Module Definition
    // ========================================================================

    #[pymodule]
    fn character_build_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(init_rules, m)?)?;
        m.add_function(wrap_pyfunction!(is_rules_initialized, m)?)?;
        m.add_function(wrap_pyfunction!(save_snapshot_async, m)?)?;
        m.add_function(wrap_pyfunction!(load_snapshot_async, m)?)?;
        m.add_class::<CharacterBuilder>()?;
        Ok(())
    }

}
