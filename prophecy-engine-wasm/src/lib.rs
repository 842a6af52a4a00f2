//! WASM bindings for prophecy-engine: powers the browser game host.
//!
//! The boundary speaks JSON strings both ways. String-to-enum parsing with
//! fallbacks lives here at the edge; the core library types stay strict.

use wasm_bindgen::prelude::*;

use prophecy_engine::core::journey::{AdventureJourney, Step};
use prophecy_engine::schema::character::{CharacterClass, CharacterInfo, Realm};
use prophecy_engine::schema::event::{Choice, StoryEvent};
use prophecy_engine::schema::journey::JourneyPhase;
use prophecy_engine::schema::prophecy::Prophecy;

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------

/// Character payload as the browser form produces it: string-typed fields
/// with the form's own key names.
#[derive(serde::Deserialize)]
struct CharacterInput {
    name: String,
    #[serde(rename = "characterClass")]
    character_class: String,
    level: String,
    alignment: String,
    realm: String,
    #[serde(default, rename = "priorQuests")]
    prior_quests: String,
    #[serde(default, rename = "magicItems")]
    magic_items: Vec<String>,
    #[serde(default)]
    suggestions: Option<String>,
}

#[derive(serde::Serialize)]
struct ChoiceInfo {
    id: String,
    text: String,
    /// Availability predicate result for this character; the UI hides or
    /// disables unavailable choices.
    available: bool,
}

#[derive(serde::Serialize)]
struct EventInfo {
    id: String,
    title: String,
    description: String,
    background: String,
    choices: Vec<ChoiceInfo>,
}

#[derive(serde::Serialize)]
struct OutcomeInfo {
    outcome: String,
    newly_fulfilled: Vec<ProphecyInfo>,
}

#[derive(serde::Serialize)]
struct ProphecyInfo {
    id: String,
    title: String,
    outcome: String,
    reward: String,
    consequence: Option<String>,
    fulfilled: bool,
}

#[derive(serde::Serialize)]
struct StepInfo {
    complete: bool,
    event: Option<EventInfo>,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

fn parse_class(s: &str) -> CharacterClass {
    // The form sends lowercase class names; anything unrecognized falls
    // back to warrior rather than failing the session.
    CharacterClass::from_name(&s.to_lowercase()).unwrap_or(CharacterClass::Warrior)
}

fn phase_label(phase: JourneyPhase) -> &'static str {
    match phase {
        JourneyPhase::InProgress => "in_progress",
        JourneyPhase::ShowingOutcome => "showing_outcome",
        JourneyPhase::Complete => "complete",
    }
}

fn choice_info(character: &CharacterInfo, choice_log: &[String], choice: &Choice) -> ChoiceInfo {
    ChoiceInfo {
        id: choice.id.clone(),
        text: choice.text.clone(),
        available: choice
            .availability
            .as_ref()
            .map_or(true, |p| p.eval(character, choice_log)),
    }
}

fn event_info(character: &CharacterInfo, choice_log: &[String], event: &StoryEvent) -> EventInfo {
    EventInfo {
        id: event.id.clone(),
        title: event.title.clone(),
        description: event.description.clone(),
        background: event.background.clone(),
        choices: event
            .choices
            .iter()
            .map(|c| choice_info(character, choice_log, c))
            .collect(),
    }
}

fn prophecy_info(prophecy: &Prophecy) -> ProphecyInfo {
    ProphecyInfo {
        id: prophecy.id.clone(),
        title: prophecy.title.clone(),
        outcome: prophecy.outcome.clone(),
        reward: prophecy.reward.clone(),
        consequence: prophecy.consequence.clone(),
        fulfilled: prophecy.fulfilled,
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

// ---------------------------------------------------------------------------
// The journey session exposed to the host
// ---------------------------------------------------------------------------

#[wasm_bindgen]
pub struct WasmJourney {
    inner: AdventureJourney,
}

#[wasm_bindgen]
impl WasmJourney {
    /// Start a journey from a character JSON payload and an RNG seed.
    #[wasm_bindgen(constructor)]
    pub fn new(character_json: &str, seed: u64) -> Result<WasmJourney, JsValue> {
        let input: CharacterInput = serde_json::from_str(character_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let character = CharacterInfo {
            name: input.name,
            class: parse_class(&input.character_class),
            level: input.level,
            alignment: input.alignment,
            realm: Realm::from_name(&input.realm),
            prior_quests: input.prior_quests,
            magic_items: input.magic_items,
            suggestions: input.suggestions,
        };

        let inner = AdventureJourney::builder()
            .seed(seed)
            .build(character)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(WasmJourney { inner })
    }

    /// The current event as JSON, or "null" when the journey is complete.
    pub fn current_event(&self) -> String {
        match self.inner.current_event() {
            Some(event) if self.inner.phase() != JourneyPhase::Complete => to_json(&event_info(
                self.inner.character(),
                &self.inner.journey().choices,
                event,
            )),
            _ => "null".to_string(),
        }
    }

    /// Resolve a choice. Returns the outcome JSON, or "null" when the id
    /// is unknown or the journey is not waiting for a choice.
    pub fn choose(&mut self, choice_id: &str) -> String {
        match self.inner.choose(choice_id) {
            Some(outcome) => {
                let fulfilled: Vec<ProphecyInfo> = outcome
                    .newly_fulfilled
                    .iter()
                    .filter_map(|id| self.inner.prophecies().iter().find(|p| p.id == *id))
                    .map(prophecy_info)
                    .collect();
                to_json(&OutcomeInfo {
                    outcome: outcome.outcome,
                    newly_fulfilled: fulfilled,
                })
            }
            None => "null".to_string(),
        }
    }

    /// Advance past the outcome display. The host calls this after
    /// `outcome_delay_ms` of showing the outcome text.
    pub fn advance(&mut self) -> String {
        match self.inner.advance() {
            Step::Event(_) => {
                let event = self.inner.current_event().map(|e| {
                    event_info(self.inner.character(), &self.inner.journey().choices, e)
                });
                to_json(&StepInfo {
                    complete: false,
                    event,
                })
            }
            Step::Complete => to_json(&StepInfo {
                complete: true,
                event: None,
            }),
        }
    }

    /// The accumulated journey record as JSON.
    pub fn journey(&self) -> String {
        to_json(self.inner.journey())
    }

    /// The prophecy catalog with fulfillment state as JSON.
    pub fn prophecies(&self) -> String {
        let infos: Vec<ProphecyInfo> =
            self.inner.prophecies().iter().map(prophecy_info).collect();
        to_json(&infos)
    }

    pub fn phase(&self) -> String {
        phase_label(self.inner.phase()).to_string()
    }

    /// How long the host should display an outcome before calling
    /// `advance`, in milliseconds.
    pub fn outcome_delay_ms(&self) -> u32 {
        self.inner.config().outcome_delay.as_millis() as u32
    }
}
