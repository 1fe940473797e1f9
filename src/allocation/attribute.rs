//! Attribute point-buy

use super::Step;
use crate::character::Character;
use crate::config::{Attribute, Rules};
use crate::error::{BuildError, Result};

/// Move one attribute by one point
///
/// The budget is checked against the total of the character passed in, plus
/// the step, in either direction.
pub fn adjust_attribute(
    rules: &Rules,
    character: &Character,
    attribute: Attribute,
    step: Step,
) -> Result<Character> {
    let current = character.score(attribute);
    let next = current + step.delta();

    if next < 0 {
        return Err(BuildError::FloorViolation {
            target: attribute.to_string(),
        });
    }

    let attempted = character.attribute_total() + step.delta();
    if attempted > rules.max_attribute_total() {
        return Err(BuildError::BudgetExceeded {
            attempted,
            max: rules.max_attribute_total(),
        });
    }

    Ok(Character {
        attributes: character.attributes.with(attribute, next),
        ..character.clone()
    })
}

/// Attribute points still available under the global cap
pub fn remaining_attribute_points(rules: &Rules, character: &Character) -> i32 {
    rules.max_attribute_total() - character.attribute_total()
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
    fn test_increase_changes_only_target() {
        let (rules, character) = baseline();
        let next = adjust_attribute(&rules, &character, Attribute::Dexterity, Step::Increase).unwrap();
        assert_eq!(next.score(Attribute::Dexterity), 11);
        for attr in Attribute::ALL {
            if attr != Attribute::Dexterity {
                assert_eq!(next.score(attr), character.score(attr));
            }
        }
        assert_eq!(next.skill_points, character.skill_points);
        assert_eq!(next.name, character.name);
    }

    #[test]
    fn test_strength_to_fourteen_then_cap() {
        let (rules, mut character) = baseline();
        for _ in 0..4 {
            character = adjust_attribute(&rules, &character, Attribute::Strength, Step::Increase).unwrap();
        }
        assert_eq!(character.score(Attribute::Strength), 14);
        assert_eq!(character.attribute_total(), 64);

        for _ in 0..6 {
            character = adjust_attribute(&rules, &character, Attribute::Strength, Step::Increase).unwrap();
        }
        assert_eq!(character.attribute_total(), 70);
        assert_eq!(remaining_attribute_points(&rules, &character), 0);

        let before = character.clone();
        let err = adjust_attribute(&rules, &character, Attribute::Strength, Step::Increase).unwrap_err();
        assert_eq!(err, BuildError::BudgetExceeded { attempted: 71, max: 70 });
        assert_eq!(character, before);
    }

    #[test]
    fn test_decrease_at_cap_is_allowed() {
        let (rules, mut character) = baseline();
        character.attributes = character.attributes.with(Attribute::Wisdom, 20);
        assert_eq!(character.attribute_total(), 70);
        let next = adjust_attribute(&rules, &character, Attribute::Wisdom, Step::Decrease).unwrap();
        assert_eq!(next.score(Attribute::Wisdom), 19);
    }

    #[test]
    fn test_floor_violation() {
        let (rules, mut character) = baseline();
        character.attributes = character.attributes.with(Attribute::Charisma, 0);
        let err = adjust_attribute(&rules, &character, Attribute::Charisma, Step::Decrease).unwrap_err();
        assert_eq!(
            err,
            BuildError::FloorViolation {
                target: "Charisma".to_string()
            }
        );
    }
}
