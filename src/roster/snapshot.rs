//! Plain-data roster snapshots for persistence

use super::Roster;
use crate::character::Character;
use crate::config::Rules;
use crate::error::{BuildError, Result};
use serde::{Deserialize, Serialize};

/// Wire shape: `{"characters": [{"name", "attributes", "skillPoints"}, ...]}`
///
/// The active selection is not part of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    pub characters: Vec<Character>,
}

impl RosterSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Roster {
    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            characters: self.characters().to_vec(),
        }
    }

    /// Rebuild a roster from a snapshot; the first character becomes active
    ///
    /// Skills missing from a saved character start at zero.
    pub fn restore(snapshot: RosterSnapshot, rules: &Rules) -> Result<Roster> {
        let characters = snapshot
            .characters
            .into_iter()
            .map(|character| normalize(character, rules))
            .collect::<Result<Vec<_>>>()?;
        Roster::from_characters(characters)
    }
}

fn normalize(mut character: Character, rules: &Rules) -> Result<Character> {
    let max_total = rules.max_attribute_total();
    if let Some((attr, score)) = character
        .attributes
        .iter()
        .find(|(_, s)| !(0..=max_total).contains(s))
    {
        return Err(BuildError::InvalidSnapshot(format!(
            "{}: {} is out of range ({})",
            character.name, attr, score
        )));
    }
    // Each score is within the cap, so the sum cannot overflow
    if character.attribute_total() > max_total {
        return Err(BuildError::InvalidSnapshot(format!(
            "{}: attribute total {} exceeds {}",
            character.name,
            character.attribute_total(),
            max_total
        )));
    }

    let ceiling = rules.skill_budget_ceiling();
    let mut spent = 0i32;
    for (skill, points) in &character.skill_points {
        rules
            .skill(skill)
            .map_err(|_| BuildError::InvalidSnapshot(format!("unknown skill: {}", skill)))?;
        if !(0..=ceiling).contains(points) {
            return Err(BuildError::InvalidSnapshot(format!(
                "{}: {} is out of range ({})",
                character.name, skill, points
            )));
        }
        spent = spent
            .checked_add(*points)
            .filter(|total| *total <= ceiling)
            .ok_or_else(|| {
                BuildError::InvalidSnapshot(format!(
                    "{}: skill points exceed {}",
                    character.name, ceiling
                ))
            })?;
    }

    for skill in rules.skills() {
        character.skill_points.entry(skill.name.clone()).or_insert(0);
    }
    Ok(character)
}
