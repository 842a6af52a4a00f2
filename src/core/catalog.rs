/// Event catalog: lookup, merging, and RON loading of authored content.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::core::predicate::Predicate;
use crate::schema::event::{Choice, StoryEvent};
use crate::schema::prophecy::Prophecy;

/// The designated journey entry point. Every catalog must contain it;
/// callers locate it by id, never by position.
pub const ENTRY_EVENT: &str = "crossroads";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("catalog has no 'crossroads' entry event")]
    MissingEntryEvent,
}

/// The full set of story events available to one journey. Order is
/// preserved from authoring and matters: random selection draws from the
/// eligible subset in catalog order, so a stable order keeps seeded runs
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventCatalog {
    events: Vec<StoryEvent>,
}

// RON files use a map of event id to event body; the id is injected from
// the map key on load.

#[derive(Debug, Deserialize)]
struct RonEvent {
    title: String,
    description: String,
    #[serde(default)]
    background: String,
    choices: Vec<Choice>,
    #[serde(default)]
    condition: Option<Predicate>,
}

impl EventCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events(events: Vec<StoryEvent>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StoryEvent> {
        self.events.iter()
    }

    pub fn get(&self, event_id: &str) -> Option<&StoryEvent> {
        self.events.iter().find(|e| e.id == event_id)
    }

    pub fn contains(&self, event_id: &str) -> bool {
        self.get(event_id).is_some()
    }

    /// Merge another catalog into this one. Events from `other` replace
    /// events with the same id in place; new ids append in `other`'s
    /// order. Custom content overrides the built-ins this way.
    pub fn merge(&mut self, other: EventCatalog) {
        for event in other.events {
            match self.events.iter_mut().find(|e| e.id == event.id) {
                Some(slot) => *slot = event,
                None => self.events.push(event),
            }
        }
    }

    /// Load a catalog from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<EventCatalog, ContentError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a catalog from a RON string: a map of event id to event body.
    /// A BTreeMap keeps the resulting order deterministic.
    pub fn parse_ron(input: &str) -> Result<EventCatalog, ContentError> {
        let raw: BTreeMap<String, RonEvent> = ron::from_str(input)?;
        let events = raw
            .into_iter()
            .map(|(id, body)| StoryEvent {
                id,
                title: body.title,
                description: body.description,
                background: body.background,
                choices: body.choices,
                condition: body.condition,
            })
            .collect();
        Ok(EventCatalog { events })
    }
}

/// Load a prophecy set from a RON file holding a sequence of prophecies.
pub fn load_prophecies_from_ron(path: &Path) -> Result<Vec<Prophecy>, ContentError> {
    let contents = std::fs::read_to_string(path)?;
    parse_prophecies_ron(&contents)
}

/// Parse a prophecy set from a RON string.
pub fn parse_prophecies_ron(input: &str) -> Result<Vec<Prophecy>, ContentError> {
    let prophecies: Vec<Prophecy> = ron::from_str(input)?;
    Ok(prophecies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::event::Effect;

    fn event(id: &str) -> StoryEvent {
        StoryEvent {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            background: String::new(),
            choices: Vec::new(),
            condition: None,
        }
    }

    #[test]
    fn lookup_by_id() {
        let catalog = EventCatalog::from_events(vec![event("crossroads"), event("battlefield")]);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("crossroads"));
        assert!(catalog.get("battlefield").is_some());
        assert!(catalog.get("moon_temple").is_none());
    }

    #[test]
    fn merge_replaces_by_id_and_appends_new() {
        let mut base = EventCatalog::from_events(vec![event("crossroads"), event("battlefield")]);
        let mut replacement = event("battlefield");
        replacement.title = "The Ashen Field, Revisited".to_string();
        let incoming = EventCatalog::from_events(vec![replacement, event("moon_temple")]);

        base.merge(incoming);

        assert_eq!(base.len(), 3);
        assert_eq!(
            base.get("battlefield").map(|e| e.title.as_str()),
            Some("The Ashen Field, Revisited")
        );
        // Replacement happens in place; order of existing events is kept.
        assert_eq!(base.iter().next().map(|e| e.id.as_str()), Some("crossroads"));
        assert!(base.contains("moon_temple"));
    }

    #[test]
    fn parse_ron_injects_ids_from_keys() {
        let input = r#"{
            "crossroads": (
                title: "The Crossroads",
                description: "Three roads diverge.",
                background: "backgrounds/crossroads.jpg",
                choices: [
                    (
                        id: "forest_path",
                        text: "Take the forest path",
                        outcome: "The canopy closes over you.",
                        effects: [UnlockEvent("forest_encounter")],
                    ),
                ],
            ),
            "forest_encounter": (
                title: "A Rustle in the Ferns",
                description: "Something moves beyond the treeline.",
                choices: [],
                condition: Some(ClassIs(ranger)),
            ),
        }"#;

        let catalog = EventCatalog::parse_ron(input).unwrap();
        assert_eq!(catalog.len(), 2);

        let crossroads = catalog.get("crossroads").unwrap();
        assert_eq!(crossroads.title, "The Crossroads");
        assert_eq!(
            crossroads.choices[0].effects,
            vec![Effect::UnlockEvent("forest_encounter".to_string())]
        );

        let forest = catalog.get("forest_encounter").unwrap();
        assert!(forest.condition.is_some());
        assert!(forest.background.is_empty());
    }

    #[test]
    fn parse_ron_rejects_malformed_input() {
        assert!(EventCatalog::parse_ron("not ron at all {{{").is_err());
    }

    #[test]
    fn parse_prophecies_from_sequence() {
        let input = r#"[
            (
                id: "destiny_awaits",
                title: "Destiny Awaits",
                description: "A great fate gathers.",
                outcome: "The threads converge.",
                reward: "Renown",
                requirements: (
                    events: ["crossroads", "tavern_gathering", "ruins_exploration"],
                ),
            ),
        ]"#;

        let prophecies = parse_prophecies_ron(input).unwrap();
        assert_eq!(prophecies.len(), 1);
        assert_eq!(prophecies[0].id, "destiny_awaits");
        assert_eq!(prophecies[0].requirements.events.len(), 3);
        assert!(!prophecies[0].fulfilled);
    }
}
