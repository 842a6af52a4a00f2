/// Strict authoring-time validation of static content.
///
/// The runtime journey path never fails on malformed content; dangling
/// references degrade into fallback selection there. This pass is the
/// opposite surface: it reports every dangling reference and suspicious
/// shape so authoring tools can refuse bad content before a player sees
/// it. It is never called from the runtime path.
use rustc_hash::FxHashSet;
use std::fmt;

use crate::core::catalog::{EventCatalog, ENTRY_EVENT};
use crate::schema::event::Effect;
use crate::schema::prophecy::Prophecy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// One finding from the validation pass.
#[derive(Debug, Clone)]
pub struct ContentIssue {
    pub severity: Severity,
    pub message: String,
}

impl ContentIssue {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "ERROR: {}", self.message),
            Severity::Warning => write!(f, "WARNING: {}", self.message),
        }
    }
}

/// Check the static content graph for authoring mistakes.
///
/// Errors are references the runtime would silently swallow: a missing
/// entry event, duplicate ids, unlock targets and prophecy requirements
/// that resolve to nothing. Warnings are shapes that are legal but almost
/// certainly unintended.
pub fn validate_content(events: &EventCatalog, prophecies: &[Prophecy]) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    let mut event_ids: FxHashSet<&str> = FxHashSet::default();
    let mut choice_ids: FxHashSet<&str> = FxHashSet::default();

    for event in events.iter() {
        if !event_ids.insert(&event.id) {
            issues.push(ContentIssue::error(format!(
                "duplicate event id '{}'",
                event.id
            )));
        }
        if event.choices.is_empty() {
            issues.push(ContentIssue::warning(format!(
                "event '{}' has no choices; reaching it strands the player",
                event.id
            )));
        }
        for choice in &event.choices {
            if !choice_ids.insert(&choice.id) {
                issues.push(ContentIssue::error(format!(
                    "duplicate choice id '{}' (event '{}')",
                    choice.id, event.id
                )));
            }
        }
    }

    if !event_ids.contains(ENTRY_EVENT) {
        issues.push(ContentIssue::error(format!(
            "catalog has no '{}' entry event",
            ENTRY_EVENT
        )));
    }

    for event in events.iter() {
        for choice in &event.choices {
            for effect in &choice.effects {
                match effect {
                    Effect::UnlockEvent(target) => {
                        if !event_ids.contains(target.as_str()) {
                            issues.push(ContentIssue::error(format!(
                                "choice '{}' (event '{}') unlocks unknown event '{}'",
                                choice.id, event.id, target
                            )));
                        }
                    }
                    Effect::AddTrait(_) => {}
                    Effect::RemoveTrait(id)
                    | Effect::RewardItem(id)
                    | Effect::ApplyStatus(id)
                    | Effect::RemoveStatus(id) => {
                        issues.push(ContentIssue::warning(format!(
                            "choice '{}' (event '{}') carries inert effect {}('{}'); \
                             the tracker does not consume it",
                            choice.id,
                            event.id,
                            effect_name(effect),
                            id
                        )));
                    }
                }
            }
        }
    }

    let mut prophecy_ids: FxHashSet<&str> = FxHashSet::default();
    for prophecy in prophecies {
        if prophecy.id.is_empty() {
            issues.push(ContentIssue::error("prophecy with empty id"));
            continue;
        }
        if !prophecy_ids.insert(&prophecy.id) {
            issues.push(ContentIssue::error(format!(
                "duplicate prophecy id '{}'",
                prophecy.id
            )));
        }
        if prophecy.requirements.is_empty() {
            issues.push(ContentIssue::warning(format!(
                "prophecy '{}' has no requirements; it fulfills on the first choice",
                prophecy.id
            )));
        }
        for choice_id in &prophecy.requirements.choices {
            if !choice_ids.contains(choice_id.as_str()) {
                issues.push(ContentIssue::error(format!(
                    "prophecy '{}' requires unknown choice '{}'",
                    prophecy.id, choice_id
                )));
            }
        }
        for event_id in &prophecy.requirements.events {
            if !event_ids.contains(event_id.as_str()) {
                issues.push(ContentIssue::error(format!(
                    "prophecy '{}' requires unknown event '{}'",
                    prophecy.id, event_id
                )));
            }
        }
    }

    issues
}

fn effect_name(effect: &Effect) -> &'static str {
    match effect {
        Effect::UnlockEvent(_) => "UnlockEvent",
        Effect::AddTrait(_) => "AddTrait",
        Effect::RemoveTrait(_) => "RemoveTrait",
        Effect::RewardItem(_) => "RewardItem",
        Effect::ApplyStatus(_) => "ApplyStatus",
        Effect::RemoveStatus(_) => "RemoveStatus",
    }
}
