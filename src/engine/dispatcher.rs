//! Action dispatcher
//!
//! Maps one discrete user action onto the allocation, roster and check
//! operations. The engine keeps no state between calls: each dispatch takes
//! the current roster and hands back the next one.

use crate::allocation::{adjust_attribute, adjust_skill_points, Step};
use crate::check::{
    resolve_party_check, resolve_skill_check, ActiveStandIn, CheckResult, DieRoller,
    PartyAggregator,
};
use crate::config::{Attribute, Rules};
use crate::error::{BuildError, Result};
use crate::roster::Roster;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single user action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    AdjustAttribute { attribute: Attribute, step: Step },
    AdjustSkill { skill: String, step: Step },
    AddCharacter,
    SelectCharacter { index: usize },
    #[serde(rename_all = "camelCase")]
    SkillCheck { skill: String, difficulty_class: i32 },
    #[serde(rename_all = "camelCase")]
    PartyCheck { skill: String, difficulty_class: i32 },
}

/// What a dispatch did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchEvent {
    /// The roster changed
    Applied,
    /// An allocation rule refused the change; the roster is unchanged
    Rejected(BuildError),
    /// A check was rolled; the roster is unchanged
    Checked(CheckResult),
}

/// Next roster plus the event that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub roster: Roster,
    pub event: DispatchEvent,
}

impl Dispatch {
    fn applied(roster: Roster) -> Self {
        Self {
            roster,
            event: DispatchEvent::Applied,
        }
    }

    pub fn rejection(&self) -> Option<&BuildError> {
        match &self.event {
            DispatchEvent::Rejected(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn check(&self) -> Option<&CheckResult> {
        match &self.event {
            DispatchEvent::Checked(result) => Some(result),
            _ => None,
        }
    }
}

/// Character build engine bound to one set of rules
pub struct BuildEngine {
    rules: Arc<Rules>,
    party: Box<dyn PartyAggregator>,
}

impl BuildEngine {
    /// Engine using the active character for party checks
    pub fn new(rules: Arc<Rules>) -> Self {
        Self {
            rules,
            party: Box::new(ActiveStandIn),
        }
    }

    /// Replace the party-check aggregation
    pub fn with_party_aggregator(mut self, party: impl PartyAggregator + 'static) -> Self {
        self.party = Box::new(party);
        self
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn new_roster(&self) -> Roster {
        Roster::new(&self.rules)
    }

    /// Apply one action to `roster`
    ///
    /// Allocation rejections come back as `DispatchEvent::Rejected` with the
    /// roster unchanged. Unknown skills/classes and bad indices are errors.
    pub fn dispatch(
        &self,
        roster: &Roster,
        action: Action,
        roller: &mut dyn DieRoller,
    ) -> Result<Dispatch> {
        let rules = self.rules.as_ref();

        let outcome = match action {
            Action::AdjustAttribute { attribute, step } => {
                adjust_attribute(rules, roster.active(), attribute, step)
                    .map(|character| roster.replace_active(character))
            }
            Action::AdjustSkill { skill, step } => {
                adjust_skill_points(rules, roster.active(), &skill, step)
                    .map(|character| roster.replace_active(character))
            }
            Action::AddCharacter => Ok(roster.add_character(rules)),
            Action::SelectCharacter { index } => roster.select_active(index),
            Action::SkillCheck {
                skill,
                difficulty_class,
            } => {
                let result =
                    resolve_skill_check(rules, roster.active(), &skill, difficulty_class, roller)?;
                return Ok(self.checked(roster, result));
            }
            Action::PartyCheck {
                skill,
                difficulty_class,
            } => {
                let result = resolve_party_check(
                    rules,
                    roster,
                    &skill,
                    difficulty_class,
                    self.party.as_ref(),
                    roller,
                )?;
                return Ok(self.checked(roster, result));
            }
        };

        match outcome {
            Ok(next) => Ok(Dispatch::applied(next)),
            Err(reason) if reason.is_rejection() => {
                tracing::debug!(
                    character = %roster.active().name,
                    reason = %reason,
                    "Allocation rejected"
                );
                Ok(Dispatch {
                    roster: roster.clone(),
                    event: DispatchEvent::Rejected(reason),
                })
            }
            Err(e) => Err(e),
        }
    }

    fn checked(&self, roster: &Roster, result: CheckResult) -> Dispatch {
        tracing::debug!(
            skill = %result.skill,
            roll = result.roll,
            total = result.skill_total,
            dc = result.difficulty_class,
            "Check resolved"
        );
        Dispatch {
            roster: roster.clone(),
            event: DispatchEvent::Checked(result),
        }
    }
}
