//! Property tests for allocation module
//!
//! Attribute totals stay within the cap and above zero; skill totals stay
//! within the Intelligence-derived budget.

use proptest::prelude::*;

use crate::allocation::{adjust_attribute, adjust_skill_points, skill_budget, Step};
use crate::character::Character;
use crate::config::{Attribute, Rules};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![Just(Step::Increase), Just(Step::Decrease)]
}

fn attribute_strategy() -> impl Strategy<Value = Attribute> {
    (0..Attribute::COUNT).prop_map(|i| Attribute::ALL[i])
}

/// Sequence of attribute adjustments, biased toward increases
fn attribute_sequence_strategy() -> impl Strategy<Value = Vec<(Attribute, Step)>> {
    prop::collection::vec(
        (
            attribute_strategy(),
            prop_oneof![3 => Just(Step::Increase), 2 => Just(Step::Decrease)],
        ),
        1..=120,
    )
}

fn skill_strategy() -> impl Strategy<Value = String> {
    let names: Vec<String> = Rules::default()
        .skills()
        .iter()
        .map(|s| s.name.clone())
        .collect();
    prop::sample::select(names)
}

/// Interleaved skill and Intelligence adjustments
#[derive(Debug, Clone)]
enum Op {
    Skill(String, Step),
    Intelligence(Step),
}

fn mixed_sequence_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            4 => (skill_strategy(), step_strategy()).prop_map(|(s, st)| Op::Skill(s, st)),
            1 => step_strategy().prop_map(Op::Intelligence),
        ],
        1..=80,
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Attribute total never exceeds the cap and no score goes negative
    #[test]
    fn prop_attribute_budget_and_floor(changes in attribute_sequence_strategy()) {
        let rules = Rules::default();
        let mut character = Character::new("Character 1", &rules);

        for (attr, step) in changes {
            match adjust_attribute(&rules, &character, attr, step) {
                Ok(next) => {
                    prop_assert_eq!(
                        next.score(attr),
                        character.score(attr) + step.delta()
                    );
                    character = next;
                }
                Err(err) => prop_assert!(err.is_rejection()),
            }

            prop_assert!(character.attribute_total() <= rules.max_attribute_total());
            for (attr, score) in character.attributes.iter() {
                prop_assert!(score >= 0, "{} went negative: {}", attr, score);
            }
        }
    }

    /// Every adjustment that lands is within the budget evaluated at that moment
    #[test]
    fn prop_skill_budget_and_floor(ops in mixed_sequence_strategy()) {
        let rules = Rules::default();
        let mut character = Character::new("Character 1", &rules);

        for op in ops {
            match op {
                Op::Skill(skill, step) => {
                    let budget = skill_budget(&rules, &character);
                    match adjust_skill_points(&rules, &character, &skill, step) {
                        Ok(next) => {
                            prop_assert!(next.skill_point_total() <= budget);
                            prop_assert_eq!(
                                next.points_in(&skill),
                                character.points_in(&skill) + step.delta()
                            );
                            character = next;
                        }
                        Err(err) => prop_assert!(err.is_rejection()),
                    }
                }
                Op::Intelligence(step) => {
                    if let Ok(next) = adjust_attribute(&rules, &character, Attribute::Intelligence, step) {
                        character = next;
                    }
                }
            }

            for (skill, points) in &character.skill_points {
                prop_assert!(*points >= 0, "{} went negative: {}", skill, points);
            }
        }
    }

    /// Without Intelligence changes the skill total never exceeds the budget
    #[test]
    fn prop_skill_total_capped(
        int_score in 0..=20i32,
        changes in prop::collection::vec((skill_strategy(), step_strategy()), 1..=60)
    ) {
        let rules = Rules::default();
        let mut character = Character::new("Character 1", &rules);
        character.attributes = character.attributes.with(Attribute::Intelligence, int_score);
        let budget = skill_budget(&rules, &character);

        for (skill, step) in changes {
            if let Ok(next) = adjust_skill_points(&rules, &character, &skill, step) {
                character = next;
            }
            prop_assert!(character.skill_point_total() <= budget.max(0));
        }
    }
}
