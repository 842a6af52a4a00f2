/// Sample Journey: a seeded, scripted playthrough printed to stdout.
///
/// A ranger of the Elven Forests walks the forest route: crossroads, the
/// stag, the glade spirit, and onward until the story decides to end.
///
/// Run with: cargo run --example sample_journey
use prophecy_engine::core::journey::{AdventureJourney, Step};
use prophecy_engine::schema::character::{CharacterClass, CharacterInfo, Realm};

fn main() {
    let character = CharacterInfo {
        name: "Thalia".to_string(),
        class: CharacterClass::Ranger,
        level: "5".to_string(),
        alignment: "Chaotic Good".to_string(),
        realm: Realm::ElvenForests,
        prior_quests: "Cleared the spider warrens of Thornholt".to_string(),
        magic_items: vec!["moonstone_amulet".to_string()],
        suggestions: None,
    };

    let mut journey = match AdventureJourney::builder().seed(2026).build(character) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Failed to start journey: {}", e);
            return;
        }
    };

    println!("=== {} sets out ===\n", journey.character().name);

    // Preferred choices per event; anything not listed takes the first
    // choice the character's availability allows.
    let script = [
        ("crossroads", "forest_path"),
        ("forest_encounter", "follow_white_stag"),
        ("spirit_conversation", "pledge_to_the_wild"),
        ("village_arrival", "trade_stories_at_well"),
        ("tavern_gathering", "listen_for_rumors"),
        ("ruins_exploration", "leave_offering"),
    ];

    let mut turns = 0;
    loop {
        turns += 1;
        if turns > 20 {
            break;
        }

        let Some(event) = journey.current_event() else {
            break;
        };
        println!("-- {} --", event.title);
        println!("{}\n", event.description);

        let scripted = script
            .iter()
            .find(|(event_id, _)| *event_id == event.id)
            .map(|(_, choice_id)| *choice_id);
        let choice_id = match scripted {
            Some(id) => id.to_string(),
            None => match event.choices.first() {
                Some(c) => c.id.clone(),
                None => break,
            },
        };

        let Some(outcome) = journey.choose(&choice_id) else {
            break;
        };
        println!("> {}\n", outcome.outcome);

        for id in &outcome.newly_fulfilled {
            if let Some(prophecy) = journey.prophecies().iter().find(|p| p.id == *id) {
                println!("*** PROPHECY FULFILLED: {} ***", prophecy.title);
                println!("{}\n", prophecy.outcome);
            }
        }

        match journey.advance() {
            Step::Event(_) => {}
            Step::Complete => break,
        }
    }

    println!("=== The journey ends ===\n");
    let record = journey.journey();
    println!("Events visited: {}", record.visited_events.join(", "));
    println!("Traits gained:  {}", record.traits.join(", "));
    println!(
        "Prophecies fulfilled: {} of {}",
        record.fulfilled_prophecies.len(),
        journey.prophecies().len()
    );
    for prophecy in journey.prophecies() {
        let mark = if prophecy.fulfilled { "*" } else { "." };
        println!("  {} {}", mark, prophecy.title);
    }
}
