use serde::{Deserialize, Serialize};

use crate::core::predicate::Predicate;

/// The state change a choice applies when taken.
///
/// Only `UnlockEvent` and `AddTrait` are consumed by the journey tracker;
/// the remaining variants parse and serialize so authored content keeps
/// them, but they are inert at runtime. The content linter warns when they
/// appear so the gap stays visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Make the named event the next one, if it exists and is eligible.
    UnlockEvent(String),
    /// Grant the named trait to the journey, once.
    AddTrait(String),
    RemoveTrait(String),
    RewardItem(String),
    ApplyStatus(String),
    RemoveStatus(String),
}

/// A selectable option within a story event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    /// Display text shown on the choice button.
    pub text: String,
    /// Narrative text shown after the choice is taken.
    pub outcome: String,
    #[serde(default)]
    pub effects: Vec<Effect>,
    /// Display gate evaluated by the presenting UI. The tracker does NOT
    /// enforce this at selection time; a hidden choice submitted anyway
    /// still resolves.
    #[serde(default)]
    pub availability: Option<Predicate>,
}

impl Choice {
    /// The event id this choice unlocks, if any. First `UnlockEvent`
    /// effect wins.
    pub fn unlock_target(&self) -> Option<&str> {
        self.effects.iter().find_map(|e| match e {
            Effect::UnlockEvent(id) => Some(id.as_str()),
            _ => None,
        })
    }

    /// Trait ids granted by this choice, in effect order.
    pub fn added_traits(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().filter_map(|e| match e {
            Effect::AddTrait(id) => Some(id.as_str()),
            _ => None,
        })
    }
}

/// A node in the narrative graph: descriptive text plus an ordered list of
/// choices. Events are generated once at journey start and never mutated,
/// only referenced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Background image reference, opaque to the engine.
    pub background: String,
    pub choices: Vec<Choice>,
    /// Eligibility gate for random auto-selection and unlock targeting.
    #[serde(default)]
    pub condition: Option<Predicate>,
}

impl StoryEvent {
    /// Look up a choice by id.
    pub fn choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == choice_id)
    }
}
