//! Skill configuration structures

use super::Attribute;
use serde::{Deserialize, Serialize};

/// Skill definition: a named ability governed by one attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDefinition {
    pub name: String,
    /// Attribute whose modifier contributes to the skill total
    #[serde(rename = "attributeModifier")]
    pub attribute: Attribute,
}

impl SkillDefinition {
    pub fn new(name: impl Into<String>, attribute: Attribute) -> Self {
        Self {
            name: name.into(),
            attribute,
        }
    }
}

pub(crate) fn standard_skills() -> Vec<SkillDefinition> {
    use Attribute::*;

    [
        ("Acrobatics", Dexterity),
        ("Animal Handling", Wisdom),
        ("Arcana", Intelligence),
        ("Athletics", Strength),
        ("Deception", Charisma),
        ("History", Intelligence),
        ("Insight", Wisdom),
        ("Intimidation", Charisma),
        ("Investigation", Intelligence),
        ("Medicine", Wisdom),
        ("Nature", Intelligence),
        ("Perception", Wisdom),
        ("Performance", Charisma),
        ("Persuasion", Charisma),
        ("Religion", Intelligence),
        ("Sleight of Hand", Dexterity),
        ("Stealth", Dexterity),
        ("Survival", Wisdom),
    ]
    .into_iter()
    .map(|(name, attribute)| SkillDefinition::new(name, attribute))
    .collect()
}
