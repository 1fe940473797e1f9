//! Character state

use super::AttributeSet;
use crate::config::{Attribute, Rules};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single character build
///
/// Wire shape: `{"name": ..., "attributes": {...}, "skillPoints": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub name: String,
    pub attributes: AttributeSet,
    pub skill_points: BTreeMap<String, i32>,
}

impl Character {
    /// Baseline attributes and zero points in every configured skill
    pub fn new(name: impl Into<String>, rules: &Rules) -> Self {
        Self {
            name: name.into(),
            attributes: AttributeSet::uniform(rules.baseline_score()),
            skill_points: rules
                .skills()
                .iter()
                .map(|skill| (skill.name.clone(), 0))
                .collect(),
        }
    }

    #[inline]
    pub fn score(&self, attribute: Attribute) -> i32 {
        self.attributes.get(attribute)
    }

    #[inline]
    pub fn modifier(&self, attribute: Attribute) -> i32 {
        self.attributes.modifier(attribute)
    }

    pub fn attribute_total(&self) -> i32 {
        self.attributes.total()
    }

    /// Points invested in `skill`; unlisted skills hold none
    pub fn points_in(&self, skill: &str) -> i32 {
        self.skill_points.get(skill).copied().unwrap_or(0)
    }

    pub fn skill_point_total(&self) -> i32 {
        self.skill_points.values().sum()
    }
}
