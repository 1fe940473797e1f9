//! Class requirement structures

use super::Attribute;
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Minimum scores per attribute, as written in configuration
pub type RequirementTable = BTreeMap<Attribute, i32>;

/// Compiled class requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRequirement {
    pub name: String,
    /// Only constrained attributes appear here
    pub minimums: SmallVec<[(Attribute, i32); Attribute::COUNT]>,
}

impl ClassRequirement {
    pub fn new(name: impl Into<String>, table: &RequirementTable) -> Self {
        Self {
            name: name.into(),
            minimums: table.iter().map(|(attr, min)| (*attr, *min)).collect(),
        }
    }

    /// Minimum score for `attribute`, if the class constrains it
    pub fn minimum(&self, attribute: Attribute) -> Option<i32> {
        self.minimums
            .iter()
            .find(|(attr, _)| *attr == attribute)
            .map(|(_, min)| *min)
    }
}

pub(crate) fn standard_classes() -> BTreeMap<String, RequirementTable> {
    let table = |focus: Attribute| -> RequirementTable {
        Attribute::ALL
            .into_iter()
            .map(|attr| (attr, if attr == focus { 14 } else { 9 }))
            .collect()
    };

    let mut classes = BTreeMap::new();
    classes.insert("Barbarian".to_string(), table(Attribute::Strength));
    classes.insert("Wizard".to_string(), table(Attribute::Intelligence));
    classes.insert("Bard".to_string(), table(Attribute::Charisma));
    classes
}
