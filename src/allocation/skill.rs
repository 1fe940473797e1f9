//! Skill point allocation

use super::Step;
use crate::character::Character;
use crate::config::{Attribute, Rules};
use crate::error::{BuildError, Result};

/// Skill-point budget for this character, from its current Intelligence
#[inline]
pub fn skill_budget(rules: &Rules, character: &Character) -> i32 {
    rules.skill_budget(character.score(Attribute::Intelligence))
}

/// Unspent skill points; negative when Intelligence dropped after spending
pub fn remaining_skill_points(rules: &Rules, character: &Character) -> i32 {
    skill_budget(rules, character) - character.skill_point_total()
}

/// Points invested plus the governing attribute's modifier
pub fn skill_total(rules: &Rules, character: &Character, skill: &str) -> Result<i32> {
    let attribute = rules.governing_attribute(skill)?;
    Ok(character.points_in(skill) + character.modifier(attribute))
}

/// Move one skill by one point
///
/// The budget is recomputed from Intelligence on every call and applies to
/// both directions: a character left over budget by a lower Intelligence
/// cannot move any skill until Intelligence comes back up.
pub fn adjust_skill_points(
    rules: &Rules,
    character: &Character,
    skill: &str,
    step: Step,
) -> Result<Character> {
    let definition = rules.skill(skill)?;

    let next = character.points_in(skill) + step.delta();
    if next < 0 {
        return Err(BuildError::FloorViolation {
            target: definition.name.clone(),
        });
    }

    let max = skill_budget(rules, character);
    let attempted = character.skill_point_total() + step.delta();
    if attempted > max {
        return Err(BuildError::BudgetExceeded { attempted, max });
    }

    let mut updated = character.clone();
    updated.skill_points.insert(definition.name.clone(), next);
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> (Rules, Character) {
        let rules = Rules::default();
        let character = Character::new("Character 1", &rules);
        (rules, character)
    }

    #[test]
    fn test_ten_points_then_reject() {
        let (rules, mut character) = baseline();
        assert_eq!(skill_budget(&rules, &character), 10);

        let skills = ["Arcana", "Stealth", "Athletics", "Insight", "Medicine"];
        for skill in skills {
            for _ in 0..2 {
                character = adjust_skill_points(&rules, &character, skill, Step::Increase).unwrap();
            }
        }
        assert_eq!(character.skill_point_total(), 10);
        assert_eq!(remaining_skill_points(&rules, &character), 0);

        for skill in ["Arcana", "Survival", "Religion"] {
            let err = adjust_skill_points(&rules, &character, skill, Step::Increase).unwrap_err();
            assert_eq!(err, BuildError::BudgetExceeded { attempted: 11, max: 10 });
        }
    }

    #[test]
    fn test_floor_violation_is_distinct() {
        let (rules, character) = baseline();
        let err = adjust_skill_points(&rules, &character, "Nature", Step::Decrease).unwrap_err();
        assert_eq!(
            err,
            BuildError::FloorViolation {
                target: "Nature".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_skill() {
        let (rules, character) = baseline();
        let err = adjust_skill_points(&rules, &character, "Flying", Step::Increase).unwrap_err();
        assert_eq!(err, BuildError::UnknownSkill("Flying".to_string()));
    }

    #[test]
    fn test_budget_follows_intelligence() {
        let (rules, mut character) = baseline();
        character.attributes = character.attributes.with(Attribute::Intelligence, 14);
        assert_eq!(skill_budget(&rules, &character), 18);

        character.attributes = character.attributes.with(Attribute::Intelligence, 8);
        assert_eq!(skill_budget(&rules, &character), 6);
    }

    #[test]
    fn test_over_budget_rejects_both_directions() {
        let (rules, mut character) = baseline();
        character.skill_points.insert("Arcana".to_string(), 10);
        character.attributes = character.attributes.with(Attribute::Intelligence, 8);
        assert_eq!(remaining_skill_points(&rules, &character), -4);

        let err = adjust_skill_points(&rules, &character, "Arcana", Step::Increase).unwrap_err();
        assert_eq!(err, BuildError::BudgetExceeded { attempted: 11, max: 6 });
        let err = adjust_skill_points(&rules, &character, "Arcana", Step::Decrease).unwrap_err();
        assert_eq!(err, BuildError::BudgetExceeded { attempted: 9, max: 6 });

        character.attributes = character.attributes.with(Attribute::Intelligence, 13);
        let next = adjust_skill_points(&rules, &character, "Arcana", Step::Decrease).unwrap();
        assert_eq!(next.points_in("Arcana"), 9);
    }

    #[test]
    fn test_skill_total() {
        let (rules, mut character) = baseline();
        character.attributes = character.attributes.with(Attribute::Dexterity, 15);
        character.skill_points.insert("Stealth".to_string(), 3);
        assert_eq!(skill_total(&rules, &character, "Stealth"), Ok(5));

        character.attributes = character.attributes.with(Attribute::Wisdom, 9);
        assert_eq!(skill_total(&rules, &character, "Perception"), Ok(-1));
    }
}
