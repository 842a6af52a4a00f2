use serde::{Deserialize, Serialize};

use super::character::{CharacterClass, CharacterInfo, Realm};

/// Character attributes a prophecy can require. Each field is optional;
/// absent fields are vacuously satisfied. Comparisons are strict equality
/// against the character as created, including the free-text alignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitRequirements {
    #[serde(default)]
    pub class: Option<CharacterClass>,
    #[serde(default)]
    pub alignment: Option<String>,
    #[serde(default)]
    pub realm: Option<Realm>,
}

impl TraitRequirements {
    pub fn is_empty(&self) -> bool {
        self.class.is_none() && self.alignment.is_none() && self.realm.is_none()
    }

    /// True when every present requirement matches the character exactly.
    pub fn matches(&self, character: &CharacterInfo) -> bool {
        self.class.map_or(true, |c| c == character.class)
            && self
                .alignment
                .as_ref()
                .map_or(true, |a| *a == character.alignment)
            && self.realm.map_or(true, |r| r == character.realm)
    }
}

/// What must be true of a journey for a prophecy to fulfill. Choice and
/// event lists have set semantics: order does not matter and each id only
/// needs to appear once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProphecyRequirements {
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub traits: TraitRequirements,
}

impl ProphecyRequirements {
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty() && self.events.is_empty() && self.traits.is_empty()
    }
}

/// A long-term narrative goal. Fulfillment is one-shot: the flag is set by
/// the journey tracker when the requirements are first met and never
/// cleared within a journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prophecy {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Narrative text shown when the prophecy fulfills.
    pub outcome: String,
    pub reward: String,
    #[serde(default)]
    pub consequence: Option<String>,
    pub requirements: ProphecyRequirements,
    #[serde(default)]
    pub fulfilled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_character() -> CharacterInfo {
        CharacterInfo {
            name: "Garruk".to_string(),
            class: CharacterClass::Warrior,
            level: "3".to_string(),
            alignment: "Lawful Good".to_string(),
            realm: Realm::DwarvenMountains,
            prior_quests: String::new(),
            magic_items: Vec::new(),
            suggestions: None,
        }
    }

    #[test]
    fn empty_trait_requirements_match_anyone() {
        let reqs = TraitRequirements::default();
        assert!(reqs.is_empty());
        assert!(reqs.matches(&make_character()));
    }

    #[test]
    fn class_requirement_strict() {
        let reqs = TraitRequirements {
            class: Some(CharacterClass::Warrior),
            ..Default::default()
        };
        assert!(reqs.matches(&make_character()));

        let reqs = TraitRequirements {
            class: Some(CharacterClass::Mage),
            ..Default::default()
        };
        assert!(!reqs.matches(&make_character()));
    }

    #[test]
    fn alignment_requirement_is_exact_equality() {
        let reqs = TraitRequirements {
            alignment: Some("Lawful Good".to_string()),
            ..Default::default()
        };
        assert!(reqs.matches(&make_character()));

        // Substring is not enough here; this is full-string equality.
        let reqs = TraitRequirements {
            alignment: Some("Good".to_string()),
            ..Default::default()
        };
        assert!(!reqs.matches(&make_character()));
    }

    #[test]
    fn combined_requirements_are_conjunctive() {
        let reqs = TraitRequirements {
            class: Some(CharacterClass::Warrior),
            alignment: None,
            realm: Some(Realm::ElvenForests),
        };
        assert!(!reqs.matches(&make_character()));
    }

    #[test]
    fn prophecy_ron_round_trip() {
        let prophecy = Prophecy {
            id: "destiny_awaits".to_string(),
            title: "Destiny Awaits".to_string(),
            description: "A great fate gathers around you.".to_string(),
            outcome: "The threads of fate converge.".to_string(),
            reward: "Renown across the realms".to_string(),
            consequence: None,
            requirements: ProphecyRequirements {
                choices: Vec::new(),
                events: vec![
                    "crossroads".to_string(),
                    "tavern_gathering".to_string(),
                    "ruins_exploration".to_string(),
                ],
                traits: TraitRequirements::default(),
            },
            fulfilled: false,
        };

        let serialized = ron::to_string(&prophecy).unwrap();
        let deserialized: Prophecy = ron::from_str(&serialized).unwrap();
        assert_eq!(deserialized, prophecy);
        assert!(!deserialized.fulfilled);
    }
}
