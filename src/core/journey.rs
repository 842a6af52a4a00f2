/// Journey tracking: choice resolution, prophecy evaluation, and
/// next-event selection for one playthrough.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::content;
use crate::core::catalog::{ContentError, EventCatalog, ENTRY_EVENT};
use crate::schema::character::CharacterInfo;
use crate::schema::event::StoryEvent;
use crate::schema::journey::{JourneyPhase, PlayerJourney};
use crate::schema::prophecy::Prophecy;

/// Pacing knobs for one journey. Defaults preserve the original tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyConfig {
    /// Minimum visited-event count before the early-ending draw runs.
    pub early_end_threshold: usize,
    /// Probability per eligible step that the journey ends early.
    pub early_end_chance: f64,
    /// How long the host should display a choice outcome before calling
    /// `advance`. The engine never sleeps; this is advisory pacing, and a
    /// host that tears down mid-delay must cancel its own timer.
    pub outcome_delay: Duration,
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            early_end_threshold: 3,
            early_end_chance: 0.3,
            outcome_delay: Duration::from_secs(3),
        }
    }
}

/// What the player sees after a choice resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceOutcome {
    /// Narrative outcome text of the chosen option.
    pub outcome: String,
    /// Prophecy ids fulfilled by this choice, in catalog order.
    pub newly_fulfilled: Vec<String>,
}

/// Result of advancing past the outcome display.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// The journey continues at the named event.
    Event(String),
    /// The journey is over.
    Complete,
}

/// One journey session: the character, the static content catalogs, the
/// accumulated `PlayerJourney`, and the phase machine driving the
/// choose/advance loop. Dropping the value is the whole teardown story.
#[derive(Debug, Clone)]
pub struct AdventureJourney {
    character: CharacterInfo,
    events: EventCatalog,
    prophecies: Vec<Prophecy>,
    journey: PlayerJourney,
    phase: JourneyPhase,
    current: String,
    pending_choice: Option<String>,
    config: JourneyConfig,
    seed: u64,
    steps: u64,
}

/// Builder for constructing an `AdventureJourney`. Omitted catalogs are
/// generated from the character at build time.
pub struct AdventureJourneyBuilder {
    seed: u64,
    config: JourneyConfig,
    events: Option<EventCatalog>,
    prophecies: Option<Vec<Prophecy>>,
}

impl AdventureJourneyBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn config(mut self, config: JourneyConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide an event catalog directly instead of generating one.
    pub fn with_events(mut self, events: EventCatalog) -> Self {
        self.events = Some(events);
        self
    }

    /// Provide a prophecy set directly instead of generating one.
    pub fn with_prophecies(mut self, prophecies: Vec<Prophecy>) -> Self {
        self.prophecies = Some(prophecies);
        self
    }

    /// Build the journey, positioned at the entry event in `InProgress`.
    ///
    /// The one authoring error that cannot degrade gracefully is a catalog
    /// with no entry event; that fails construction rather than the
    /// running story.
    pub fn build(self, character: CharacterInfo) -> Result<AdventureJourney, ContentError> {
        let events = self
            .events
            .unwrap_or_else(|| content::generate_events(&character, &PlayerJourney::new()));
        let prophecies = self
            .prophecies
            .unwrap_or_else(|| content::generate_prophecies(&character));

        if !events.contains(ENTRY_EVENT) {
            return Err(ContentError::MissingEntryEvent);
        }

        Ok(AdventureJourney {
            character,
            events,
            prophecies,
            journey: PlayerJourney::new(),
            phase: JourneyPhase::InProgress,
            current: ENTRY_EVENT.to_string(),
            pending_choice: None,
            config: self.config,
            seed: self.seed,
            steps: 0,
        })
    }
}

impl AdventureJourney {
    pub fn builder() -> AdventureJourneyBuilder {
        AdventureJourneyBuilder {
            seed: 0,
            config: JourneyConfig::default(),
            events: None,
            prophecies: None,
        }
    }

    pub fn phase(&self) -> JourneyPhase {
        self.phase
    }

    pub fn character(&self) -> &CharacterInfo {
        &self.character
    }

    pub fn journey(&self) -> &PlayerJourney {
        &self.journey
    }

    pub fn prophecies(&self) -> &[Prophecy] {
        &self.prophecies
    }

    pub fn events(&self) -> &EventCatalog {
        &self.events
    }

    pub fn config(&self) -> &JourneyConfig {
        &self.config
    }

    /// The event the player is currently on. `None` only if the current id
    /// dangles, which a validated catalog never produces.
    pub fn current_event(&self) -> Option<&StoryEvent> {
        self.events.get(&self.current)
    }

    /// Resolve a choice on the current event.
    ///
    /// Returns `None` with no state change when the journey is not waiting
    /// for a choice or the id does not name a choice on the current event:
    /// malformed input never fails the narrative. On success the journey
    /// records the choice, the visit, and any granted traits, re-evaluates
    /// every unfulfilled prophecy, and moves to `ShowingOutcome`.
    pub fn choose(&mut self, choice_id: &str) -> Option<ChoiceOutcome> {
        if self.phase != JourneyPhase::InProgress {
            return None;
        }
        let event = self.events.get(&self.current)?;
        let choice = event.choice(choice_id)?;

        let outcome_text = choice.outcome.clone();
        let gained: Vec<String> = choice.added_traits().map(str::to_string).collect();
        let event_id = event.id.clone();

        self.journey.log_choice(choice_id);
        self.journey.mark_visited(&event_id);
        for trait_id in &gained {
            self.journey.gain_trait(trait_id);
        }

        let newly_fulfilled = self.evaluate_prophecies(choice_id, &event_id);

        self.pending_choice = Some(choice_id.to_string());
        self.phase = JourneyPhase::ShowingOutcome;

        Some(ChoiceOutcome {
            outcome: outcome_text,
            newly_fulfilled,
        })
    }

    /// Sweep every unfulfilled prophecy against the updated journey. A
    /// requirement id also counts when it equals the id being resolved
    /// right now, so evaluation order within the step cannot matter.
    fn evaluate_prophecies(&mut self, pending_choice: &str, pending_event: &str) -> Vec<String> {
        let journey = &self.journey;
        let character = &self.character;
        let mut newly = Vec::new();

        for prophecy in &mut self.prophecies {
            if prophecy.fulfilled {
                continue;
            }
            let reqs = &prophecy.requirements;
            let choices_met = reqs
                .choices
                .iter()
                .all(|id| journey.chose(id) || id == pending_choice);
            let events_met = reqs
                .events
                .iter()
                .all(|id| journey.has_visited(id) || id == pending_event);
            let traits_met = reqs.traits.matches(character);

            if choices_met && events_met && traits_met {
                prophecy.fulfilled = true;
                newly.push(prophecy.id.clone());
            }
        }

        for id in &newly {
            self.journey.record_fulfilled(id);
        }
        newly
    }

    /// Advance past the outcome display: pick the next event or end the
    /// journey. Outside `ShowingOutcome` this is a no-op report of the
    /// current position.
    ///
    /// The RNG for this step derives from the journey seed plus a step
    /// counter, so a given seed replays the same route.
    pub fn advance(&mut self) -> Step {
        if self.phase != JourneyPhase::ShowingOutcome {
            return match self.phase {
                JourneyPhase::Complete => Step::Complete,
                _ => Step::Event(self.current.clone()),
            };
        }

        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(self.steps));
        self.steps += 1;
        let pending = self.pending_choice.take();

        let step = self.select_next_event(pending.as_deref(), &mut rng);
        match &step {
            Step::Event(event_id) => {
                self.current = event_id.clone();
                self.phase = JourneyPhase::InProgress;
            }
            Step::Complete => {
                self.phase = JourneyPhase::Complete;
            }
        }
        step
    }

    /// Selection policy, in strict order:
    ///
    /// 1. The resolved choice names an `UnlockEvent` target that exists
    ///    and whose condition (if any) holds.
    /// 2. Enough events visited and the early-ending draw fires.
    /// 3. Uniform pick from unvisited events whose condition holds.
    /// 4. Nothing eligible: the journey ends.
    ///
    /// Every lookup is defensive; a dangling unlock target falls through
    /// to the next tier rather than erroring.
    fn select_next_event(&self, pending_choice: Option<&str>, rng: &mut impl Rng) -> Step {
        if let Some(choice_id) = pending_choice {
            let unlock = self
                .events
                .get(&self.current)
                .and_then(|e| e.choice(choice_id))
                .and_then(|c| c.unlock_target())
                .and_then(|target| self.events.get(target));
            if let Some(event) = unlock {
                if self.condition_holds(event) {
                    return Step::Event(event.id.clone());
                }
            }
        }

        if self.journey.visited_events.len() >= self.config.early_end_threshold
            && rng.gen::<f64>() < self.config.early_end_chance
        {
            return Step::Complete;
        }

        let eligible: Vec<&StoryEvent> = self
            .events
            .iter()
            .filter(|e| !self.journey.has_visited(&e.id))
            .filter(|e| self.condition_holds(e))
            .collect();

        if !eligible.is_empty() {
            let pick = rng.gen_range(0..eligible.len());
            return Step::Event(eligible[pick].id.clone());
        }

        Step::Complete
    }

    fn condition_holds(&self, event: &StoryEvent) -> bool {
        event
            .condition
            .as_ref()
            .map_or(true, |p| p.eval(&self.character, &self.journey.choices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::predicate::Predicate;
    use crate::schema::character::{CharacterClass, Realm};
    use crate::schema::event::{Choice, Effect};
    use rand::rngs::mock::StepRng;

    fn make_character() -> CharacterInfo {
        CharacterInfo {
            name: "Aldric".to_string(),
            class: CharacterClass::Warrior,
            level: "4".to_string(),
            alignment: "Lawful Good".to_string(),
            realm: Realm::NorthernWastes,
            prior_quests: String::new(),
            magic_items: Vec::new(),
            suggestions: None,
        }
    }

    fn choice(id: &str, effects: Vec<Effect>) -> Choice {
        Choice {
            id: id.to_string(),
            text: id.to_string(),
            outcome: format!("Outcome of {}.", id),
            effects,
            availability: None,
        }
    }

    fn event(id: &str, choices: Vec<Choice>) -> StoryEvent {
        StoryEvent {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            background: String::new(),
            choices,
            condition: None,
        }
    }

    fn small_catalog() -> EventCatalog {
        EventCatalog::from_events(vec![
            event(
                "crossroads",
                vec![
                    choice(
                        "forest_path",
                        vec![
                            Effect::UnlockEvent("forest_encounter".to_string()),
                            Effect::AddTrait("nature_affinity".to_string()),
                        ],
                    ),
                    choice("broken_signpost", vec![Effect::UnlockEvent("nowhere".to_string())]),
                    choice("wait_here", vec![]),
                ],
            ),
            event("forest_encounter", vec![choice("press_on", vec![])]),
            event("mountain_pass", vec![choice("climb", vec![])]),
        ])
    }

    fn make_journey() -> AdventureJourney {
        AdventureJourney::builder()
            .seed(7)
            .with_events(small_catalog())
            .with_prophecies(Vec::new())
            .build(make_character())
            .unwrap()
    }

    #[test]
    fn build_fails_without_entry_event() {
        let result = AdventureJourney::builder()
            .with_events(EventCatalog::from_events(vec![event("elsewhere", vec![])]))
            .build(make_character());
        assert!(matches!(result, Err(ContentError::MissingEntryEvent)));
    }

    #[test]
    fn choose_records_choice_visit_and_trait() {
        let mut journey = make_journey();
        let outcome = journey.choose("forest_path").unwrap();

        assert_eq!(outcome.outcome, "Outcome of forest_path.");
        assert_eq!(journey.journey().choices, vec!["forest_path"]);
        assert_eq!(journey.journey().visited_events, vec!["crossroads"]);
        assert_eq!(journey.journey().traits, vec!["nature_affinity"]);
        assert_eq!(journey.phase(), JourneyPhase::ShowingOutcome);
    }

    #[test]
    fn unknown_choice_is_a_no_op() {
        let mut journey = make_journey();
        assert!(journey.choose("nonexistent").is_none());
        assert!(journey.journey().choices.is_empty());
        assert!(journey.journey().visited_events.is_empty());
        assert_eq!(journey.phase(), JourneyPhase::InProgress);
    }

    #[test]
    fn choose_outside_in_progress_is_a_no_op() {
        let mut journey = make_journey();
        journey.choose("forest_path").unwrap();
        // Now in ShowingOutcome; a second choose must not resolve.
        assert!(journey.choose("wait_here").is_none());
        assert_eq!(journey.journey().choices, vec!["forest_path"]);
    }

    #[test]
    fn advance_follows_unlock_target() {
        let mut journey = make_journey();
        journey.choose("forest_path").unwrap();
        let step = journey.advance();
        assert_eq!(step, Step::Event("forest_encounter".to_string()));
        assert_eq!(journey.phase(), JourneyPhase::InProgress);
        assert_eq!(
            journey.current_event().map(|e| e.id.as_str()),
            Some("forest_encounter")
        );
    }

    #[test]
    fn dangling_unlock_falls_through_to_random_tier() {
        let journey = {
            let mut j = make_journey();
            j.choose("broken_signpost").unwrap();
            j
        };
        // Below the early-end threshold, so tier 2 cannot fire; the
        // dangling target must fall through to a random eligible event.
        let mut rng = StepRng::new(0, 0);
        let step = journey.select_next_event(Some("broken_signpost"), &mut rng);
        match step {
            Step::Event(id) => {
                assert_ne!(id, "nowhere");
                assert!(journey.events().contains(&id));
            }
            Step::Complete => panic!("expected fallthrough to an eligible event"),
        }
    }

    #[test]
    fn early_end_never_fires_below_threshold() {
        let mut journey = make_journey();
        journey.journey.mark_visited("crossroads");
        journey.journey.mark_visited("forest_encounter");
        // Two visited events, threshold is three. Even a draw of zero
        // (always below early_end_chance) must not end the journey.
        let mut rng = StepRng::new(0, 0);
        let step = journey.select_next_event(None, &mut rng);
        assert!(matches!(step, Step::Event(_)));
    }

    #[test]
    fn early_end_fires_at_threshold_with_low_draw() {
        let mut journey = make_journey();
        journey.journey.mark_visited("crossroads");
        journey.journey.mark_visited("forest_encounter");
        journey.journey.mark_visited("mountain_pass");
        // StepRng::new(0, 0) yields a 0.0 draw, below early_end_chance.
        let mut rng = StepRng::new(0, 0);
        let step = journey.select_next_event(None, &mut rng);
        assert_eq!(step, Step::Complete);
    }

    #[test]
    fn early_end_skipped_with_high_draw() {
        let mut journey = make_journey();
        journey.journey.mark_visited("forest_encounter");
        journey.journey.mark_visited("mountain_pass");
        journey.journey.mark_visited("crossroads");
        // A maximal draw never lands below early_end_chance, so the
        // journey terminates only because nothing is left to visit.
        let mut rng = StepRng::new(u64::MAX, 0);
        let step = journey.select_next_event(None, &mut rng);
        assert_eq!(step, Step::Complete);
    }

    #[test]
    fn exhausted_catalog_completes() {
        let mut journey = make_journey();
        journey.journey.mark_visited("crossroads");
        journey.journey.mark_visited("forest_encounter");
        journey.journey.mark_visited("mountain_pass");
        journey.phase = JourneyPhase::ShowingOutcome;
        // Force the early-end draw to miss; completion must still happen
        // because every event has been visited.
        journey.config.early_end_chance = 0.0;
        let step = journey.advance();
        assert_eq!(step, Step::Complete);
        assert_eq!(journey.phase(), JourneyPhase::Complete);
        // Terminal: further calls are no-ops.
        assert!(journey.choose("forest_path").is_none());
        assert_eq!(journey.advance(), Step::Complete);
    }

    #[test]
    fn conditioned_event_excluded_from_random_selection() {
        let mut catalog = small_catalog();
        let mut gated = event("spirit_conversation", vec![choice("listen", vec![])]);
        gated.condition = Some(Predicate::ClassIs(CharacterClass::Ranger));
        catalog.merge(EventCatalog::from_events(vec![gated]));

        let mut journey = AdventureJourney::builder()
            .with_events(catalog)
            .with_prophecies(Vec::new())
            .build(make_character())
            .unwrap();
        journey.journey.mark_visited("crossroads");
        journey.journey.mark_visited("forest_encounter");
        journey.journey.mark_visited("mountain_pass");
        journey.config.early_end_chance = 0.0;

        // The warrior fails the ranger gate; with everything else visited
        // the journey must complete instead of selecting the gated event.
        let mut rng = StepRng::new(0, 0);
        let step = journey.select_next_event(None, &mut rng);
        assert_eq!(step, Step::Complete);
    }

    #[test]
    fn same_seed_replays_same_route() {
        let route = |seed: u64| {
            let mut journey = AdventureJourney::builder()
                .seed(seed)
                .with_events(small_catalog())
                .with_prophecies(Vec::new())
                .build(make_character())
                .unwrap();
            let mut visited = Vec::new();
            loop {
                let Some(event) = journey.current_event() else { break };
                let first_choice = event.choices[0].id.clone();
                if journey.choose(&first_choice).is_none() {
                    break;
                }
                match journey.advance() {
                    Step::Event(id) => visited.push(id),
                    Step::Complete => break,
                }
            }
            visited
        };

        assert_eq!(route(99), route(99));
    }
}
