//! Class qualification checks

use crate::character::Character;
use crate::config::{Attribute, ClassRequirement, Rules};
use crate::error::Result;
use serde::Serialize;

/// One attribute a character falls short on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnmetRequirement {
    pub attribute: Attribute,
    pub required: i32,
    pub actual: i32,
}

/// Qualification line for a class display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassStanding {
    pub class: String,
    pub qualified: bool,
}

fn meets(character: &Character, requirement: &ClassRequirement) -> bool {
    requirement
        .minimums
        .iter()
        .all(|(attr, min)| character.score(*attr) >= *min)
}

/// True iff every attribute the class names meets its minimum
pub fn qualifies(rules: &Rules, character: &Character, class: &str) -> Result<bool> {
    Ok(meets(character, rules.class(class)?))
}

/// Names of all classes the character currently qualifies for
pub fn qualified_classes<'r>(rules: &'r Rules, character: &Character) -> Vec<&'r str> {
    rules
        .classes()
        .iter()
        .filter(|class| meets(character, class))
        .map(|class| class.name.as_str())
        .collect()
}

/// Qualification status of every configured class, in configuration order
pub fn class_standings(rules: &Rules, character: &Character) -> Vec<ClassStanding> {
    rules
        .classes()
        .iter()
        .map(|class| ClassStanding {
            class: class.name.clone(),
            qualified: meets(character, class),
        })
        .collect()
}

/// Attributes below the class minimum
pub fn unmet_requirements(
    rules: &Rules,
    character: &Character,
    class: &str,
) -> Result<Vec<UnmetRequirement>> {
    let requirement = rules.class(class)?;
    Ok(requirement
        .minimums
        .iter()
        .filter_map(|&(attribute, required)| {
            let actual = character.score(attribute);
            (actual < required).then_some(UnmetRequirement {
                attribute,
                required,
                actual,
            })
        })
        .collect())
}
