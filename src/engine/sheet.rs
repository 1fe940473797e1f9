//! Derived character sheet for display layers

use crate::allocation::skill_budget;
use crate::character::Character;
use crate::config::{Attribute, Rules};
use crate::qualification::{class_standings, ClassStanding};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeLine {
    pub attribute: Attribute,
    pub score: i32,
    pub modifier: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillLine {
    pub skill: String,
    pub attribute: Attribute,
    pub points: i32,
    pub modifier: i32,
    pub total: i32,
}

/// Everything a presentation layer renders for one character
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSheet {
    pub name: String,
    /// In configured display order
    pub attributes: Vec<AttributeLine>,
    pub attribute_total: i32,
    pub max_attribute_total: i32,
    pub skills: Vec<SkillLine>,
    pub skill_points_spent: i32,
    pub skill_point_budget: i32,
    pub classes: Vec<ClassStanding>,
}

pub fn character_sheet(rules: &Rules, character: &Character) -> CharacterSheet {
    let attributes = rules
        .attributes()
        .iter()
        .map(|&attribute| AttributeLine {
            attribute,
            score: character.score(attribute),
            modifier: character.modifier(attribute),
        })
        .collect();

    let skills = rules
        .skills()
        .iter()
        .map(|def| {
            let points = character.points_in(&def.name);
            let modifier = character.modifier(def.attribute);
            SkillLine {
                skill: def.name.clone(),
                attribute: def.attribute,
                points,
                modifier,
                total: points + modifier,
            }
        })
        .collect();

    CharacterSheet {
        name: character.name.clone(),
        attributes,
        attribute_total: character.attribute_total(),
        max_attribute_total: rules.max_attribute_total(),
        skills,
        skill_points_spent: character.skill_point_total(),
        skill_point_budget: skill_budget(rules, character),
        classes: class_standings(rules, character),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_for_baseline() {
        let rules = Rules::default();
        let character = Character::new("Character 1", &rules);
        let sheet = character_sheet(&rules, &character);

        assert_eq!(sheet.attributes.len(), 6);
        assert!(sheet.attributes.iter().all(|line| line.modifier == 0));
        assert_eq!(sheet.attribute_total, 60);
        assert_eq!(sheet.max_attribute_total, 70);
        assert_eq!(sheet.skills.len(), 18);
        assert_eq!(sheet.skill_point_budget, 10);
        assert!(sheet.classes.iter().all(|c| !c.qualified));
    }

    #[test]
    fn test_sheet_skill_totals() {
        let rules = Rules::default();
        let mut character = Character::new("Character 1", &rules);
        character.attributes = character.attributes.with(Attribute::Charisma, 8);
        character.skill_points.insert("Persuasion".to_string(), 2);
        let sheet = character_sheet(&rules, &character);

        let persuasion = sheet.skills.iter().find(|s| s.skill == "Persuasion").unwrap();
        assert_eq!(persuasion.modifier, -1);
        assert_eq!(persuasion.total, 1);
        assert_eq!(sheet.skill_points_spent, 2);
    }
}
