//! Skill check resolution

use super::{DieRoller, PartyAggregator};
use crate::allocation::skill_total;
use crate::character::Character;
use crate::config::Rules;
use crate::error::Result;
use crate::roster::Roster;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckOutcome {
    Success,
    Failure,
}

/// Result of a single check; never stored on a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub skill: String,
    pub roll: i32,
    pub skill_total: i32,
    pub difficulty_class: i32,
    pub outcome: CheckOutcome,
}

impl CheckResult {
    #[inline]
    pub fn is_success(&self) -> bool {
        self.outcome == CheckOutcome::Success
    }
}

/// Roll once and compare `roll + skill_total` against the DC
pub fn resolve_check(
    skill: &str,
    skill_total: i32,
    difficulty_class: i32,
    roller: &mut dyn DieRoller,
) -> CheckResult {
    let roll = roller.roll_d20();
    let outcome = if roll + skill_total >= difficulty_class {
        CheckOutcome::Success
    } else {
        CheckOutcome::Failure
    };

    CheckResult {
        skill: skill.to_string(),
        roll,
        skill_total,
        difficulty_class,
        outcome,
    }
}

/// Skill check for one character
pub fn resolve_skill_check(
    rules: &Rules,
    character: &Character,
    skill: &str,
    difficulty_class: i32,
    roller: &mut dyn DieRoller,
) -> Result<CheckResult> {
    let total = skill_total(rules, character, skill)?;
    Ok(resolve_check(skill, total, difficulty_class, roller))
}

/// Party-wide check; `party` decides whose skill total is used
pub fn resolve_party_check(
    rules: &Rules,
    roster: &Roster,
    skill: &str,
    difficulty_class: i32,
    party: &dyn PartyAggregator,
    roller: &mut dyn DieRoller,
) -> Result<CheckResult> {
    let total = party.party_skill_total(rules, roster, skill)?;
    Ok(resolve_check(skill, total, difficulty_class, roller))
}
