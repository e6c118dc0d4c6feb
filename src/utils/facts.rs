//! Lookup from a rolled number to the fact shown in the overlay.
use bevy::prelude::*;
use serde::Deserialize;

use dice_core::{ConfigError, RollResult};

/// One entry of the fact book.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fact {
    pub label: u8,
    /// Big word drawn behind the cube.
    pub banner: String,
    pub title: String,
    pub description: String,
}

impl Fact {
    fn new(label: u8, banner: &str, title: &str, description: &str) -> Self {
        Self {
            label,
            banner: banner.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// A resource mapping each face number to its fact.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct FactBook {
    // Indexed by label - 1.
    facts: Vec<Option<Fact>>,
}

impl FactBook {
    /// Builds the book, rejecting labels outside 1..=6 and duplicates.
    pub fn new(facts: Vec<Fact>) -> Result<Self, ConfigError> {
        let mut slots: Vec<Option<Fact>> = vec![None; 6];
        for fact in facts {
            let Some(label) = RollResult::new(fact.label) else {
                return Err(ConfigError::Invalid(format!(
                    "fact label must be in 1..=6, got {}",
                    fact.label
                )));
            };
            let slot = &mut slots[usize::from(label.value()) - 1];
            if slot.is_some() {
                return Err(ConfigError::Invalid(format!(
                    "fact label {} is defined twice",
                    fact.label
                )));
            }
            *slot = Some(fact);
        }
        Ok(Self { facts: slots })
    }

    pub fn get(&self, roll: RollResult) -> Option<&Fact> {
        self.facts
            .get(usize::from(roll.value()) - 1)
            .and_then(Option::as_ref)
    }

    /// Number of faces that have a fact.
    pub fn len(&self) -> usize {
        self.facts.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FactBook {
    fn default() -> Self {
        Self {
            facts: default_facts().into_iter().map(Some).collect(),
        }
    }
}

/// The built-in facts, one per face.
pub fn default_facts() -> Vec<Fact> {
    vec![
        Fact::new(
            1,
            "ONEE",
            "My First!",
            "This dice is the first three js component i made!",
        ),
        Fact::new(
            2,
            "TWOO",
            "Two-in-a-Row!",
            "I made it to the smart India Hackathon Finals twice!",
        ),
        Fact::new(
            3,
            "THREE",
            "The Trio!!",
            "I LOVE Messi, Xavi & Iniesta as a trio",
        ),
        Fact::new(
            4,
            "FOUR",
            "Family of Four",
            "My family is of 4, my parents and a brother",
        ),
        Fact::new(
            5,
            "FIVEE",
            "5 minute try",
            "I spend 5 minutes each day to design something random",
        ),
        Fact::new(
            6,
            "SIIIX",
            "Six days of bliss",
            "6-day Hyderabad trip with friends, was unforgettable",
        ),
    ]
}
