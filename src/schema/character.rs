use serde::{Deserialize, Serialize};

/// The five playable character classes. A closed enumeration: content
/// branches on class both at generation time (unlock targets) and in
/// prophecy trait requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Warrior,
    Mage,
    Ranger,
    Bard,
    Rogue,
}

impl CharacterClass {
    /// Lowercase identifier as it appears in authored content.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Warrior => "warrior",
            Self::Mage => "mage",
            Self::Ranger => "ranger",
            Self::Bard => "bard",
            Self::Rogue => "rogue",
        }
    }

    /// Parse a lowercase class identifier. There is no fallback class;
    /// unknown strings are a caller-side input error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "warrior" => Some(Self::Warrior),
            "mage" => Some(Self::Mage),
            "ranger" => Some(Self::Ranger),
            "bard" => Some(Self::Bard),
            "rogue" => Some(Self::Rogue),
            _ => None,
        }
    }
}

/// The named regions a character can hail from, plus a catch-all for
/// everywhere else. Unrecognized realm names fall through to `Other`,
/// which selects the wanderer prophecy branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Realm {
    ElvenForests,
    DwarvenMountains,
    CoastalKingdoms,
    NorthernWastes,
    Other,
}

impl Realm {
    /// Display name as shown to players and used in authored content.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ElvenForests => "Elven Forests",
            Self::DwarvenMountains => "Dwarven Mountains",
            Self::CoastalKingdoms => "Coastal Kingdoms",
            Self::NorthernWastes => "Northern Wastes",
            Self::Other => "Distant Lands",
        }
    }

    /// Map a display name to a realm. Anything unrecognized is `Other`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Elven Forests" => Self::ElvenForests,
            "Dwarven Mountains" => Self::DwarvenMountains,
            "Coastal Kingdoms" => Self::CoastalKingdoms,
            "Northern Wastes" => Self::NorthernWastes,
            _ => Self::Other,
        }
    }
}

/// The static description of the player's chosen persona. Created once by
/// the character-creation flow; the engine only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterInfo {
    pub name: String,
    pub class: CharacterClass,
    /// Level as received from the character form. Stored string-encoded;
    /// the engine never interprets it numerically.
    pub level: String,
    /// Free-text alignment, e.g. "Lawful Good". See `is_good_aligned`.
    pub alignment: String,
    pub realm: Realm,
    /// Free-text prior quest experience.
    pub prior_quests: String,
    /// Identifiers of carried magic items.
    #[serde(default)]
    pub magic_items: Vec<String>,
    #[serde(default)]
    pub suggestions: Option<String>,
}

impl CharacterInfo {
    /// Case-sensitive substring test for a "Good" alignment.
    ///
    /// Deliberately matches the capitalized word only: a form value like
    /// "neutral-good" does NOT count as good-aligned. Known quirk of the
    /// upstream character form; kept to preserve observable behavior.
    pub fn is_good_aligned(&self) -> bool {
        self.alignment.contains("Good")
    }

    /// Case-sensitive substring test for an "Evil" alignment. Same caveat
    /// as `is_good_aligned`.
    pub fn is_evil_aligned(&self) -> bool {
        self.alignment.contains("Evil")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_character(alignment: &str) -> CharacterInfo {
        CharacterInfo {
            name: "Thalia".to_string(),
            class: CharacterClass::Ranger,
            level: "5".to_string(),
            alignment: alignment.to_string(),
            realm: Realm::ElvenForests,
            prior_quests: "Cleared the spider warrens".to_string(),
            magic_items: vec!["moonstone_amulet".to_string()],
            suggestions: None,
        }
    }

    #[test]
    fn class_names_round_trip() {
        for class in [
            CharacterClass::Warrior,
            CharacterClass::Mage,
            CharacterClass::Ranger,
            CharacterClass::Bard,
            CharacterClass::Rogue,
        ] {
            assert_eq!(CharacterClass::from_name(class.name()), Some(class));
        }
    }

    #[test]
    fn unknown_class_is_none() {
        assert_eq!(CharacterClass::from_name("paladin"), None);
        assert_eq!(CharacterClass::from_name("Warrior"), None);
    }

    #[test]
    fn realm_from_name_known() {
        assert_eq!(Realm::from_name("Elven Forests"), Realm::ElvenForests);
        assert_eq!(Realm::from_name("Northern Wastes"), Realm::NorthernWastes);
    }

    #[test]
    fn realm_from_name_fallback() {
        assert_eq!(Realm::from_name("The Shire"), Realm::Other);
        assert_eq!(Realm::from_name(""), Realm::Other);
        assert_eq!(Realm::from_name("elven forests"), Realm::Other);
    }

    #[test]
    fn alignment_substring_is_case_sensitive() {
        assert!(make_character("Lawful Good").is_good_aligned());
        assert!(make_character("Chaotic Evil").is_evil_aligned());
        // Lowercase form values do not match; preserved behavior.
        assert!(!make_character("neutral-good").is_good_aligned());
        assert!(!make_character("chaotic-evil").is_evil_aligned());
        assert!(!make_character("True Neutral").is_good_aligned());
        assert!(!make_character("True Neutral").is_evil_aligned());
    }
}
