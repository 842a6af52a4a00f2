/// Serializable content predicates and their interpreter.
use serde::{Deserialize, Serialize};

use crate::schema::character::{CharacterClass, CharacterInfo, Realm};

/// A condition over the character and the journey's choice log, stored as
/// data on events (`condition`) and choices (`availability`) so content can
/// be authored without code changes.
///
/// `All([])` is vacuously true; `Any([])` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
    Not(Box<Predicate>),
    ClassIs(CharacterClass),
    RealmIs(Realm),
    /// Case-sensitive substring test against the free-text alignment,
    /// the same test the content generator applies to "Good"/"Evil".
    AlignmentContains(String),
    /// The named choice appears anywhere in the journey's choice log.
    ChoiceMade(String),
}

impl Predicate {
    pub fn eval(&self, character: &CharacterInfo, choice_log: &[String]) -> bool {
        match self {
            Self::All(preds) => preds.iter().all(|p| p.eval(character, choice_log)),
            Self::Any(preds) => preds.iter().any(|p| p.eval(character, choice_log)),
            Self::Not(pred) => !pred.eval(character, choice_log),
            Self::ClassIs(class) => character.class == *class,
            Self::RealmIs(realm) => character.realm == *realm,
            Self::AlignmentContains(needle) => character.alignment.contains(needle.as_str()),
            Self::ChoiceMade(choice_id) => choice_log.iter().any(|c| c == choice_id),
        }
    }
}
