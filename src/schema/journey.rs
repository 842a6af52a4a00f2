use serde::{Deserialize, Serialize};

/// The accumulated record of one playthrough. Mutated by exactly one
/// writer, the journey tracker's choice-resolution path; everything else
/// reads it.
///
/// Invariants, enforced by the mutator methods:
/// - `choices` is an append-only log; duplicates permitted, never reordered.
/// - `visited_events` and `traits` contain no duplicates.
/// - `fulfilled_prophecies` grows monotonically; an id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerJourney {
    pub choices: Vec<String>,
    pub visited_events: Vec<String>,
    pub fulfilled_prophecies: Vec<String>,
    pub traits: Vec<String>,
}

impl PlayerJourney {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a choice to the log. Always appends, even when the same id
    /// was taken before.
    pub fn log_choice(&mut self, choice_id: &str) {
        self.choices.push(choice_id.to_string());
    }

    /// Record an event visit. Returns true when this was the first visit.
    pub fn mark_visited(&mut self, event_id: &str) -> bool {
        if self.has_visited(event_id) {
            return false;
        }
        self.visited_events.push(event_id.to_string());
        true
    }

    /// Grant a trait. Returns true when the trait was newly gained.
    pub fn gain_trait(&mut self, trait_id: &str) -> bool {
        if self.has_trait(trait_id) {
            return false;
        }
        self.traits.push(trait_id.to_string());
        true
    }

    /// Record a prophecy fulfillment. Returns true when newly recorded.
    pub fn record_fulfilled(&mut self, prophecy_id: &str) -> bool {
        if self
            .fulfilled_prophecies
            .iter()
            .any(|id| id == prophecy_id)
        {
            return false;
        }
        self.fulfilled_prophecies.push(prophecy_id.to_string());
        true
    }

    pub fn chose(&self, choice_id: &str) -> bool {
        self.choices.iter().any(|id| id == choice_id)
    }

    pub fn has_visited(&self, event_id: &str) -> bool {
        self.visited_events.iter().any(|id| id == event_id)
    }

    pub fn has_trait(&self, trait_id: &str) -> bool {
        self.traits.iter().any(|id| id == trait_id)
    }
}

/// Phases of one journey session. `Complete` is terminal; a new journey
/// requires fresh state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JourneyPhase {
    /// Waiting for the player to pick a choice on the current event.
    InProgress,
    /// A choice has resolved; its outcome text is on display. The host
    /// calls `advance` once its pacing delay elapses.
    ShowingOutcome,
    Complete,
}
