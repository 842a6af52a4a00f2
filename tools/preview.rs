/// Preview: interactive terminal playthrough for testing content.
///
/// Usage: preview [--class <c>] [--alignment <a>] [--realm <r>] [--name <n>] [--seed <n>]
///
/// Commands at the prompt:
///   <number>     take the numbered choice
///   journey      show the accumulated journey record
///   prophecies   show the prophecy catalog and fulfillment state
///   help         list commands
///   quit         exit
use std::io::{self, BufRead, Write};
use std::process;

use prophecy_engine::core::journey::{AdventureJourney, Step};
use prophecy_engine::schema::character::{CharacterClass, CharacterInfo, Realm};
use prophecy_engine::schema::event::Choice;
use prophecy_engine::schema::journey::JourneyPhase;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut class = CharacterClass::Warrior;
    let mut alignment = "True Neutral".to_string();
    let mut realm = Realm::Other;
    let mut name = "Traveler".to_string();
    let mut seed: u64 = 42;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--class" if i + 1 < args.len() => {
                i += 1;
                class = CharacterClass::from_name(&args[i]).unwrap_or_else(|| {
                    eprintln!(
                        "Unknown class '{}': expected warrior, mage, ranger, bard, or rogue",
                        args[i]
                    );
                    process::exit(1);
                });
            }
            "--alignment" if i + 1 < args.len() => {
                i += 1;
                alignment = args[i].clone();
            }
            "--realm" if i + 1 < args.len() => {
                i += 1;
                realm = Realm::from_name(&args[i]);
            }
            "--name" if i + 1 < args.len() => {
                i += 1;
                name = args[i].clone();
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let character = CharacterInfo {
        name,
        class,
        level: "1".to_string(),
        alignment,
        realm,
        prior_quests: String::new(),
        magic_items: Vec::new(),
        suggestions: None,
    };

    let mut journey = match AdventureJourney::builder().seed(seed).build(character) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Failed to start journey: {}", e);
            process::exit(1);
        }
    };

    println!(
        "{} the {} of the {} sets out. Seed: {}",
        journey.character().name,
        journey.character().class.name(),
        journey.character().realm.name(),
        seed
    );
    println!("Type 'help' for commands.\n");

    render_current(&journey);
    print!("> ");
    let _ = io::stdout().flush();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let input = line.trim();

        match input {
            "" => {}
            "quit" | "exit" => break,
            "help" => print_help(),
            "journey" => render_journey(&journey),
            "prophecies" => render_prophecies(&journey),
            _ => match input.parse::<usize>() {
                Ok(n) if n >= 1 => {
                    take_choice(&mut journey, n - 1);
                    if journey.phase() == JourneyPhase::Complete {
                        break;
                    }
                }
                _ => println!("Unrecognized command. Type 'help' for commands."),
            },
        }

        print!("> ");
        let _ = io::stdout().flush();
    }

    println!("\nThe journey ends.");
    render_journey(&journey);
    render_prophecies(&journey);
}

fn take_choice(journey: &mut AdventureJourney, index: usize) {
    let choice_id = match journey.current_event() {
        Some(event) => match event.choices.get(index) {
            Some(choice) => choice.id.clone(),
            None => {
                println!("No choice numbered {}.", index + 1);
                return;
            }
        },
        None => return,
    };

    let Some(outcome) = journey.choose(&choice_id) else {
        println!("That choice cannot be taken right now.");
        return;
    };

    println!("\n{}\n", outcome.outcome);
    for id in &outcome.newly_fulfilled {
        if let Some(prophecy) = journey.prophecies().iter().find(|p| p.id == *id) {
            println!("*** Prophecy fulfilled: {} ***", prophecy.title);
            println!("    {}", prophecy.outcome);
            if let Some(consequence) = &prophecy.consequence {
                println!("    But: {}", consequence);
            }
        }
    }

    // The browser host paces this transition with config.outcome_delay;
    // a terminal session just advances.
    match journey.advance() {
        Step::Event(_) => render_current(journey),
        Step::Complete => {}
    }
}

fn render_current(journey: &AdventureJourney) {
    let Some(event) = journey.current_event() else {
        return;
    };
    println!("== {} ==", event.title);
    println!("{}\n", event.description);
    for (i, choice) in event.choices.iter().enumerate() {
        let marker = if choice_available(journey, choice) {
            " "
        } else {
            "x"
        };
        println!("  {} {}. {}", marker, i + 1, choice.text);
    }
}

fn choice_available(journey: &AdventureJourney, choice: &Choice) -> bool {
    choice
        .availability
        .as_ref()
        .map_or(true, |p| p.eval(journey.character(), &journey.journey().choices))
}

fn render_journey(journey: &AdventureJourney) {
    let record = journey.journey();
    println!("\nChoices taken: {}", record.choices.join(", "));
    println!("Events visited: {}", record.visited_events.join(", "));
    println!("Traits: {}", record.traits.join(", "));
    println!(
        "Prophecies fulfilled: {}\n",
        record.fulfilled_prophecies.join(", ")
    );
}

fn render_prophecies(journey: &AdventureJourney) {
    println!();
    for prophecy in journey.prophecies() {
        let mark = if prophecy.fulfilled { "*" } else { "." };
        println!("{} {} - {}", mark, prophecy.title, prophecy.description);
    }
    println!();
}

fn print_help() {
    println!("Commands:");
    println!("  <number>     take the numbered choice");
    println!("  journey      show the accumulated journey record");
    println!("  prophecies   show the prophecy catalog");
    println!("  help         this text");
    println!("  quit         exit");
}

fn print_usage() {
    println!(
        "Usage: preview [--class <c>] [--alignment <a>] [--realm <r>] [--name <n>] [--seed <n>]"
    );
    println!("Classes: warrior, mage, ranger, bard, rogue");
    println!("Realms: \"Elven Forests\", \"Dwarven Mountains\", \"Coastal Kingdoms\", \"Northern Wastes\"");
}
