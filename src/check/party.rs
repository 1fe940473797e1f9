//! Party skill aggregation

use crate::allocation::skill_total;
use crate::config::Rules;
use crate::error::Result;
use crate::roster::Roster;

/// Decides which skill total a party-wide check uses
pub trait PartyAggregator: Send + Sync {
    fn party_skill_total(&self, rules: &Rules, roster: &Roster, skill: &str) -> Result<i32>;
}

/// Uses the active character's total in place of the party's best.
///
/// This is the current party-check behavior; the party's real aggregation
/// rule is still undecided.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveStandIn;

impl PartyAggregator for ActiveStandIn {
    fn party_skill_total(&self, rules: &Rules, roster: &Roster, skill: &str) -> Result<i32> {
        skill_total(rules, roster.active(), skill)
    }
}

/// Highest skill total across the whole roster
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestSkillTotal;

impl PartyAggregator for HighestSkillTotal {
    fn party_skill_total(&self, rules: &Rules, roster: &Roster, skill: &str) -> Result<i32> {
        roster
            .characters()
            .iter()
            .try_fold(i32::MIN, |best, character| {
                Ok(best.max(skill_total(rules, character, skill)?))
            })
    }
}
