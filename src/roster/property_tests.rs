//! Property tests for roster module
//!
//! The active index always points at a character, and snapshots restore the
//! same characters.

use proptest::prelude::*;

use crate::allocation::{adjust_attribute, adjust_skill_points, Step};
use crate::config::{Attribute, Rules};
use crate::roster::{Roster, RosterSnapshot};

#[derive(Debug, Clone)]
enum RosterOp {
    Add,
    Select(usize),
    Attribute(usize, bool),
    Skill(usize, bool),
}

fn roster_op_strategy() -> impl Strategy<Value = RosterOp> {
    prop_oneof![
        1 => Just(RosterOp::Add),
        2 => (0..8usize).prop_map(RosterOp::Select),
        4 => (0..Attribute::COUNT, any::<bool>()).prop_map(|(a, up)| RosterOp::Attribute(a, up)),
        4 => (0..18usize, any::<bool>()).prop_map(|(s, up)| RosterOp::Skill(s, up)),
    ]
}

fn step(up: bool) -> Step {
    if up {
        Step::Increase
    } else {
        Step::Decrease
    }
}

fn apply(rules: &Rules, roster: Roster, op: RosterOp) -> Roster {
    match op {
        RosterOp::Add => roster.add_character(rules),
        RosterOp::Select(i) => roster.select_active(i).unwrap_or(roster),
        RosterOp::Attribute(a, up) => {
            match adjust_attribute(rules, roster.active(), Attribute::ALL[a], step(up)) {
                Ok(next) => roster.replace_active(next),
                Err(_) => roster,
            }
        }
        RosterOp::Skill(s, up) => {
            let skill = rules.skills()[s].name.clone();
            match adjust_skill_points(rules, roster.active(), &skill, step(up)) {
                Ok(next) => roster.replace_active(next),
                Err(_) => roster,
            }
        }
    }
}

proptest! {
    /// Active index stays within bounds through any sequence of operations
    #[test]
    fn prop_active_index_valid(ops in prop::collection::vec(roster_op_strategy(), 1..=60)) {
        let rules = Rules::default();
        let mut roster = Roster::new(&rules);

        for op in ops {
            let before = roster.len();
            let is_add = matches!(op, RosterOp::Add);
            roster = apply(&rules, roster, op);

            prop_assert!(roster.active_index() < roster.len());
            if is_add {
                prop_assert_eq!(roster.len(), before + 1);
                prop_assert_eq!(roster.active_index(), before);
                prop_assert_eq!(roster.active().name.clone(), format!("Character {}", before + 1));
            } else {
                prop_assert_eq!(roster.len(), before);
            }
        }
    }

    /// Snapshot then restore preserves every character
    #[test]
    fn prop_snapshot_round_trip(ops in prop::collection::vec(roster_op_strategy(), 1..=60)) {
        let rules = Rules::default();
        let mut roster = Roster::new(&rules);
        for op in ops {
            roster = apply(&rules, roster, op);
        }

        let json = roster.snapshot().to_json().unwrap();
        let snapshot = RosterSnapshot::from_json(&json).unwrap();
        let restored = Roster::restore(snapshot, &rules).unwrap();

        prop_assert_eq!(restored.characters(), roster.characters());
        prop_assert_eq!(restored.active_index(), 0);
    }
}
