//! Roster state

use crate::character::Character;
use crate::config::Rules;
use crate::error::{BuildError, Result};

/// Ordered characters plus the active selection
///
/// Never empty; `active` always indexes a real character. Every operation
/// returns a new roster and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    characters: Vec<Character>,
    active: usize,
}

/// Default character for slot `index`: "Character {index + 1}"
pub fn create_character(rules: &Rules, index: usize) -> Character {
    Character::new(format!("Character {}", index + 1), rules)
}

impl Roster {
    /// Roster holding one default character
    pub fn new(rules: &Rules) -> Self {
        Self {
            characters: vec![create_character(rules, 0)],
            active: 0,
        }
    }

    /// Roster from existing characters, first one active
    pub(crate) fn from_characters(characters: Vec<Character>) -> Result<Self> {
        if characters.is_empty() {
            return Err(BuildError::InvalidSnapshot(
                "roster has no characters".to_string(),
            ));
        }
        Ok(Self {
            characters,
            active: 0,
        })
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// A roster always holds at least one character
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Character {
        &self.characters[self.active]
    }

    /// Append a default character and make it active
    pub fn add_character(&self, rules: &Rules) -> Roster {
        let mut characters = self.characters.clone();
        characters.push(create_character(rules, characters.len()));
        let active = characters.len() - 1;
        Roster { characters, active }
    }

    pub fn select_active(&self, index: usize) -> Result<Roster> {
        if index >= self.characters.len() {
            return Err(BuildError::IndexOutOfRange {
                index,
                len: self.characters.len(),
            });
        }
        Ok(Roster {
            characters: self.characters.clone(),
            active: index,
        })
    }

    /// Swap in a new version of the active character
    pub fn replace_active(&self, character: Character) -> Roster {
        let mut characters = self.characters.clone();
        characters[self.active] = character;
        Roster {
            characters,
            active: self.active,
        }
    }
}
