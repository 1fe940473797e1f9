//! CharacterBuilder - Python-facing roster session
//!
//! Holds the roster in Rust memory and routes every Python call through the
//! dispatcher, so the front end only ever sees plain values and rejection
//! messages.

use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::collections::HashMap;
use std::sync::Arc;

use super::{character_sheet, Action, BuildEngine};
use crate::allocation::{remaining_skill_points, skill_total, Step};
use crate::check::{CheckResult, RandRoller};
use crate::config::{Attribute, Rules};
use crate::error::BuildError;
use crate::qualification::{qualified_classes, qualifies};
use crate::roster::{Roster, RosterSnapshot};

// ============================================================================
// CharacterBuilder PyClass
// ============================================================================

#[pyclass]
pub struct CharacterBuilder {
    engine: BuildEngine,
    roster: Roster,
}

impl CharacterBuilder {
    pub fn new(rules: Arc<Rules>) -> Self {
        let engine = BuildEngine::new(rules);
        let roster = engine.new_roster();
        Self { engine, roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Dispatch and keep the resulting roster; returns the rejection text
    fn apply(&mut self, action: Action) -> PyResult<Option<String>> {
        let mut roller = RandRoller::thread();
        let dispatch = self.engine.dispatch(&self.roster, action, &mut roller)?;
        let rejection = dispatch.rejection().map(|reason| reason.to_string());
        self.roster = dispatch.roster;
        Ok(rejection)
    }

    fn check(&mut self, py: Python<'_>, action: Action) -> PyResult<Py<PyAny>> {
        let mut roller = RandRoller::thread();
        let dispatch = self.engine.dispatch(&self.roster, action, &mut roller)?;
        match dispatch.check() {
            Some(result) => Ok(check_to_dict(py, result)?.into_any().unbind()),
            None => Err(pyo3::exceptions::PyRuntimeError::new_err(
                "check produced no result",
            )),
        }
    }
}

fn check_to_dict<'py>(py: Python<'py>, result: &CheckResult) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("skill", &result.skill)?;
    dict.set_item("roll", result.roll)?;
    dict.set_item("skill_total", result.skill_total)?;
    dict.set_item("difficulty_class", result.difficulty_class)?;
    dict.set_item("success", result.is_success())?;
    Ok(dict)
}

// ============================================================================
// PyMethods Implementation
// ============================================================================

#[pymethods]
impl CharacterBuilder {
    /// Create a session with one default character
    ///
    /// # Raises
    /// RuntimeError if `init_rules` was not called first
    #[new]
    fn py_new() -> PyResult<Self> {
        Ok(Self::new(crate::cached_rules()?))
    }

    // ------------------------------------------------------------------------
    // Roster
    // ------------------------------------------------------------------------

    #[getter]
    fn active_index(&self) -> usize {
        self.roster.active_index()
    }

    #[getter]
    fn character_count(&self) -> usize {
        self.roster.len()
    }

    #[getter]
    fn character_names(&self) -> Vec<String> {
        self.roster
            .characters()
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }

    /// Append a default character and select it; returns its index
    fn add_character(&mut self) -> PyResult<usize> {
        self.apply(Action::AddCharacter)?;
        Ok(self.roster.active_index())
    }

    /// # Raises
    /// IndexError if `index` is outside the roster
    fn select_character(&mut self, index: usize) -> PyResult<()> {
        self.apply(Action::SelectCharacter { index })?;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Allocation
    // ------------------------------------------------------------------------

    /// Attribute scores of the active character
    fn attributes(&self) -> HashMap<String, i32> {
        self.roster
            .active()
            .attributes
            .iter()
            .map(|(attr, score)| (attr.to_string(), score))
            .collect()
    }

    fn modifier(&self, attribute: &str) -> PyResult<i32> {
        let attribute: Attribute = attribute.parse()?;
        Ok(self.roster.active().modifier(attribute))
    }

    /// Move an attribute by `delta` (+1 or -1)
    ///
    /// # Returns
    /// None when applied, otherwise the rejection reason
    fn adjust_attribute(&mut self, attribute: &str, delta: i32) -> PyResult<Option<String>> {
        let attribute: Attribute = attribute.parse()?;
        let step = Step::try_from(delta)?;
        self.apply(Action::AdjustAttribute { attribute, step })
    }

    fn skill_points(&self) -> HashMap<String, i32> {
        self.roster
            .active()
            .skill_points
            .iter()
            .map(|(skill, points)| (skill.clone(), *points))
            .collect()
    }

    /// Move a skill by `delta` (+1 or -1)
    ///
    /// # Returns
    /// None when applied, otherwise the rejection reason
    ///
    /// # Raises
    /// KeyError for an unknown skill
    fn adjust_skill(&mut self, skill: &str, delta: i32) -> PyResult<Option<String>> {
        let step = Step::try_from(delta)?;
        self.apply(Action::AdjustSkill {
            skill: skill.to_string(),
            step,
        })
    }

    fn skill_total(&self, skill: &str) -> PyResult<i32> {
        Ok(skill_total(self.engine.rules(), self.roster.active(), skill)?)
    }

    fn remaining_skill_points(&self) -> i32 {
        remaining_skill_points(self.engine.rules(), self.roster.active())
    }

    // ------------------------------------------------------------------------
    // Classes and checks
    // ------------------------------------------------------------------------

    fn qualifies(&self, class: &str) -> PyResult<bool> {
        Ok(qualifies(self.engine.rules(), self.roster.active(), class)?)
    }

    fn qualified_classes(&self) -> Vec<String> {
        qualified_classes(self.engine.rules(), self.roster.active())
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Roll a skill check for the active character
    ///
    /// # Returns
    /// Dict with `skill`, `roll`, `skill_total`, `difficulty_class`, `success`
    fn skill_check(&mut self, py: Python<'_>, skill: &str, difficulty_class: i32) -> PyResult<Py<PyAny>> {
        self.check(
            py,
            Action::SkillCheck {
                skill: skill.to_string(),
                difficulty_class,
            },
        )
    }

    /// Roll a party-wide skill check
    fn party_check(&mut self, py: Python<'_>, skill: &str, difficulty_class: i32) -> PyResult<Py<PyAny>> {
        self.check(
            py,
            Action::PartyCheck {
                skill: skill.to_string(),
                difficulty_class,
            },
        )
    }

    /// Full derived sheet of the active character as JSON
    fn sheet_json(&self) -> PyResult<String> {
        let sheet = character_sheet(self.engine.rules(), self.roster.active());
        Ok(serde_json::to_string(&sheet).map_err(BuildError::from)?)
    }

    // ------------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------------

    fn snapshot_json(&self) -> PyResult<String> {
        Ok(self.roster.snapshot().to_json()?)
    }

    /// Replace the roster from a saved snapshot
    ///
    /// An unreadable or invalid snapshot resets to the default roster.
    ///
    /// # Returns
    /// True when the snapshot was used
    fn restore_json(&mut self, json: &str) -> bool {
        let restored = RosterSnapshot::from_json(json)
            .and_then(|snapshot| Roster::restore(snapshot, self.engine.rules()));
        match restored {
            Ok(roster) => {
                self.roster = roster;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Snapshot rejected, starting fresh");
                self.roster = self.engine.new_roster();
                false
            }
        }
    }
}
