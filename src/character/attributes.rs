//! Attribute score storage

use crate::config::Attribute;
use crate::error::BuildError;
use crate::modifier::modifier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Index;

/// Scores for all six attributes, stored in canonical order
///
/// Serializes as `{"Strength": 10, ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Attribute, i32>",
    into = "BTreeMap<Attribute, i32>"
)]
pub struct AttributeSet {
    scores: [i32; Attribute::COUNT],
}

impl AttributeSet {
    /// Every attribute at the same score
    pub fn uniform(score: i32) -> Self {
        Self {
            scores: [score; Attribute::COUNT],
        }
    }

    #[inline]
    pub fn get(&self, attribute: Attribute) -> i32 {
        self.scores[attribute.index()]
    }

    /// Copy with one score replaced
    #[inline]
    pub fn with(mut self, attribute: Attribute, score: i32) -> Self {
        self.scores[attribute.index()] = score;
        self
    }

    #[inline]
    pub fn total(&self) -> i32 {
        self.scores.iter().sum()
    }

    #[inline]
    pub fn modifier(&self, attribute: Attribute) -> i32 {
        modifier(self.get(attribute))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.into_iter().map(move |attr| (attr, self.get(attr)))
    }
}

impl Index<Attribute> for AttributeSet {
    type Output = i32;

    fn index(&self, attribute: Attribute) -> &i32 {
        &self.scores[attribute.index()]
    }
}

impl TryFrom<BTreeMap<Attribute, i32>> for AttributeSet {
    type Error = BuildError;

    fn try_from(map: BTreeMap<Attribute, i32>) -> Result<Self, Self::Error> {
        let mut scores = [0; Attribute::COUNT];
        for attr in Attribute::ALL {
            scores[attr.index()] = *map
                .get(&attr)
                .ok_or_else(|| BuildError::InvalidSnapshot(format!("missing attribute {}", attr)))?;
        }
        Ok(Self { scores })
    }
}

impl From<AttributeSet> for BTreeMap<Attribute, i32> {
    fn from(set: AttributeSet) -> Self {
        set.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_total() {
        let set = AttributeSet::uniform(10);
        assert_eq!(set.total(), 60);
        assert_eq!(set[Attribute::Wisdom], 10);
    }

    #[test]
    fn test_with_replaces_one_score() {
        let set = AttributeSet::uniform(10).with(Attribute::Strength, 14);
        assert_eq!(set.get(Attribute::Strength), 14);
        assert_eq!(set.get(Attribute::Dexterity), 10);
        assert_eq!(set.total(), 64);
        assert_eq!(set.modifier(Attribute::Strength), 2);
    }

    #[test]
    fn test_serializes_as_named_map() {
        let set = AttributeSet::uniform(10).with(Attribute::Charisma, 9);
        let value = serde_json::to_value(set).unwrap();
        assert_eq!(value["Charisma"], 9);
        assert_eq!(value["Strength"], 10);

        let back: AttributeSet = serde_json::from_value(value).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_missing_attribute_is_rejected() {
        let json = r#"{"Strength": 10, "Dexterity": 10}"#;
        assert!(serde_json::from_str::<AttributeSet>(json).is_err());
    }
}
