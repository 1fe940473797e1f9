//! Rules configuration
//!
//! The attribute order, class requirement table and skill list are plain data
//! (`RulesConfig`, deserializable from JSON) compiled once into an immutable
//! `Rules` value that every engine operation reads from.

mod attribute;
mod class;
mod skill;

pub use attribute::*;
pub use class::*;
pub use skill::*;

use crate::error::{BuildError, Result};
use crate::modifier::modifier;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_MAX_ATTRIBUTE_TOTAL: i32 = 70;
pub const DEFAULT_BASELINE_SCORE: i32 = 10;
pub const DEFAULT_SKILL_POINT_BASE: i32 = 10;
pub const DEFAULT_SKILL_POINTS_PER_MODIFIER: i32 = 4;

/// Largest attribute total or skill budget a configuration may produce
pub const RULES_VALUE_LIMIT: i32 = 1_000_000;

fn default_attribute_order() -> Vec<Attribute> {
    Attribute::ALL.to_vec()
}

fn default_max_attribute_total() -> i32 {
    DEFAULT_MAX_ATTRIBUTE_TOTAL
}

fn default_baseline_score() -> i32 {
    DEFAULT_BASELINE_SCORE
}

fn default_skill_point_base() -> i32 {
    DEFAULT_SKILL_POINT_BASE
}

fn default_skill_points_per_modifier() -> i32 {
    DEFAULT_SKILL_POINTS_PER_MODIFIER
}

/// Rules configuration as supplied by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesConfig {
    /// Display order of the attributes
    #[serde(default = "default_attribute_order")]
    pub attributes: Vec<Attribute>,
    pub classes: BTreeMap<String, RequirementTable>,
    pub skills: Vec<SkillDefinition>,
    #[serde(default = "default_max_attribute_total")]
    pub max_attribute_total: i32,
    #[serde(default = "default_baseline_score")]
    pub baseline_score: i32,
    #[serde(default = "default_skill_point_base")]
    pub skill_point_base: i32,
    #[serde(default = "default_skill_points_per_modifier")]
    pub skill_points_per_modifier: i32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            attributes: default_attribute_order(),
            classes: standard_classes(),
            skills: standard_skills(),
            max_attribute_total: DEFAULT_MAX_ATTRIBUTE_TOTAL,
            baseline_score: DEFAULT_BASELINE_SCORE,
            skill_point_base: DEFAULT_SKILL_POINT_BASE,
            skill_points_per_modifier: DEFAULT_SKILL_POINTS_PER_MODIFIER,
        }
    }
}

impl RulesConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        let distinct: AHashSet<Attribute> = self.attributes.iter().copied().collect();
        if self.attributes.len() != Attribute::COUNT || distinct.len() != Attribute::COUNT {
            return Err(BuildError::InvalidConfig(
                "attributes must list each attribute exactly once".to_string(),
            ));
        }

        for (name, table) in &self.classes {
            if name.trim().is_empty() {
                return Err(BuildError::InvalidConfig("empty class name".to_string()));
            }
            if let Some((attr, min)) = table.iter().find(|(_, min)| **min < 0) {
                return Err(BuildError::InvalidConfig(format!(
                    "class {} requires negative {}: {}",
                    name, attr, min
                )));
            }
        }

        let mut seen = AHashSet::with_capacity(self.skills.len());
        for skill in &self.skills {
            if skill.name.trim().is_empty() {
                return Err(BuildError::InvalidConfig("empty skill name".to_string()));
            }
            if !seen.insert(skill.name.as_str()) {
                return Err(BuildError::InvalidConfig(format!(
                    "duplicate skill: {}",
                    skill.name
                )));
            }
        }

        if self.max_attribute_total > RULES_VALUE_LIMIT {
            return Err(BuildError::InvalidConfig(format!(
                "maximum attribute total {} exceeds {}",
                self.max_attribute_total, RULES_VALUE_LIMIT
            )));
        }
        if self.baseline_score < 0 {
            return Err(BuildError::InvalidConfig(
                "baseline score must be non-negative".to_string(),
            ));
        }
        let baseline_total = self.baseline_score.checked_mul(Attribute::COUNT as i32);
        if baseline_total.map_or(true, |total| total > self.max_attribute_total) {
            return Err(BuildError::InvalidConfig(format!(
                "baseline score {} over {} attributes exceeds maximum {}",
                self.baseline_score,
                Attribute::COUNT,
                self.max_attribute_total
            )));
        }

        // Intelligence ranges over 0..=max_attribute_total
        for intelligence in [0, self.max_attribute_total] {
            let budget = i64::from(self.skill_point_base)
                + i64::from(self.skill_points_per_modifier) * i64::from(modifier(intelligence));
            if budget.abs() > i64::from(RULES_VALUE_LIMIT) {
                return Err(BuildError::InvalidConfig(format!(
                    "skill budget {} at Intelligence {} is out of range",
                    budget, intelligence
                )));
            }
        }

        Ok(())
    }
}

/// Compiled, immutable rules
#[derive(Debug, Clone)]
pub struct Rules {
    attributes: Vec<Attribute>,
    classes: Vec<ClassRequirement>,
    class_index: AHashMap<String, usize>,
    skills: Vec<SkillDefinition>,
    skill_index: AHashMap<String, usize>,
    max_attribute_total: i32,
    baseline_score: i32,
    skill_point_base: i32,
    skill_points_per_modifier: i32,
}

impl Default for Rules {
    fn default() -> Self {
        Self::compile(RulesConfig::default())
    }
}

impl Rules {
    /// Validate and compile a configuration
    pub fn new(config: RulesConfig) -> Result<Self> {
        config.validate()?;
        let rules = Self::compile(config);
        tracing::info!(
            classes = rules.classes.len(),
            skills = rules.skills.len(),
            max_attribute_total = rules.max_attribute_total,
            "Loaded rules configuration"
        );
        Ok(rules)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(RulesConfig::from_json(json)?)
    }

    fn compile(config: RulesConfig) -> Self {
        let classes: Vec<ClassRequirement> = config
            .classes
            .iter()
            .map(|(name, table)| ClassRequirement::new(name.clone(), table))
            .collect();
        let class_index = classes
            .iter()
            .enumerate()
            .map(|(i, class)| (class.name.clone(), i))
            .collect();
        let skill_index = config
            .skills
            .iter()
            .enumerate()
            .map(|(i, skill)| (skill.name.clone(), i))
            .collect();

        Self {
            attributes: config.attributes,
            classes,
            class_index,
            skills: config.skills,
            skill_index,
            max_attribute_total: config.max_attribute_total,
            baseline_score: config.baseline_score,
            skill_point_base: config.skill_point_base,
            skill_points_per_modifier: config.skill_points_per_modifier,
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn classes(&self) -> &[ClassRequirement] {
        &self.classes
    }

    pub fn skills(&self) -> &[SkillDefinition] {
        &self.skills
    }

    pub fn max_attribute_total(&self) -> i32 {
        self.max_attribute_total
    }

    pub fn baseline_score(&self) -> i32 {
        self.baseline_score
    }

    /// Look up a skill definition by name
    pub fn skill(&self, name: &str) -> Result<&SkillDefinition> {
        self.skill_index
            .get(name)
            .map(|&i| &self.skills[i])
            .ok_or_else(|| BuildError::UnknownSkill(name.to_string()))
    }

    /// Look up a class requirement by name
    pub fn class(&self, name: &str) -> Result<&ClassRequirement> {
        self.class_index
            .get(name)
            .map(|&i| &self.classes[i])
            .ok_or_else(|| BuildError::UnknownClass(name.to_string()))
    }

    pub fn governing_attribute(&self, skill: &str) -> Result<Attribute> {
        self.skill(skill).map(|def| def.attribute)
    }

    /// Skill-point budget for a given Intelligence score:
    /// `base + per_modifier * modifier(intelligence)`
    pub fn skill_budget(&self, intelligence: i32) -> i32 {
        self.skill_point_base + self.skill_points_per_modifier * modifier(intelligence)
    }

    /// Budget at the highest Intelligence the attribute cap allows
    ///
    /// No reachable character holds more skill points than this.
    pub fn skill_budget_ceiling(&self) -> i32 {
        self.skill_budget(0)
            .max(self.skill_budget(self.max_attribute_total))
            .max(0)
    }
}
