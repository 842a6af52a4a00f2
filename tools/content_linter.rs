/// Content Linter: strict validation of narrative content.
///
/// Usage: content_linter [--events <file-or-dir>] [--prophecies <file>]
///
/// With no arguments, lints the built-in generated content across every
/// class/realm combination. The runtime engine swallows authoring
/// mistakes by design; this tool is where they surface.
use std::path::Path;
use std::process;

use prophecy_engine::content::{generate_events, generate_prophecies};
use prophecy_engine::core::catalog::{load_prophecies_from_ron, EventCatalog};
use prophecy_engine::core::validate::{validate_content, ContentIssue, Severity};
use prophecy_engine::schema::character::{CharacterClass, CharacterInfo, Realm};
use prophecy_engine::schema::journey::PlayerJourney;
use prophecy_engine::schema::prophecy::Prophecy;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        println!("Usage: content_linter [--events <file-or-dir>] [--prophecies <file>]");
        println!("With no arguments, lints the built-in content for every archetype.");
        process::exit(0);
    }

    let mut events_path = None;
    let mut prophecies_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--events" if i + 1 < args.len() => {
                i += 1;
                events_path = Some(args[i].clone());
            }
            "--prophecies" if i + 1 < args.len() => {
                i += 1;
                prophecies_path = Some(args[i].clone());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let issues = if events_path.is_none() && prophecies_path.is_none() {
        lint_builtin_content()
    } else {
        lint_authored_content(events_path.as_deref(), prophecies_path.as_deref())
    };

    println!("\n=== Content Lint Report ===\n");

    if issues.is_empty() {
        println!("All checks passed!");
    }

    let mut errors = 0usize;
    let mut warnings = 0usize;
    for issue in &issues {
        println!("{}", issue);
        match issue.severity {
            Severity::Error => errors += 1,
            Severity::Warning => warnings += 1,
        }
    }

    println!("\nSummary: {} errors, {} warnings", errors, warnings);

    if errors == 0 {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

/// Lint the generated catalogs for every class/realm pairing plus each
/// alignment branch; generation-time ternaries mean different archetypes
/// see different graphs.
fn lint_builtin_content() -> Vec<ContentIssue> {
    let classes = [
        CharacterClass::Warrior,
        CharacterClass::Mage,
        CharacterClass::Ranger,
        CharacterClass::Bard,
        CharacterClass::Rogue,
    ];
    let realms = [
        Realm::ElvenForests,
        Realm::DwarvenMountains,
        Realm::CoastalKingdoms,
        Realm::NorthernWastes,
        Realm::Other,
    ];
    let alignments = ["Lawful Good", "Neutral Evil", "True Neutral"];

    let mut all = Vec::new();
    let mut combos = 0usize;

    for class in classes {
        for realm in realms {
            for alignment in alignments {
                let character = CharacterInfo {
                    name: "lint".to_string(),
                    class,
                    level: "1".to_string(),
                    alignment: alignment.to_string(),
                    realm,
                    prior_quests: String::new(),
                    magic_items: Vec::new(),
                    suggestions: None,
                };
                let events = generate_events(&character, &PlayerJourney::new());
                let prophecies = generate_prophecies(&character);
                combos += 1;
                for issue in validate_content(&events, &prophecies) {
                    all.push(ContentIssue {
                        severity: issue.severity,
                        message: format!(
                            "[{} / {} / {}] {}",
                            class.name(),
                            realm.name(),
                            alignment,
                            issue.message
                        ),
                    });
                }
            }
        }
    }

    println!("Linted built-in content for {} archetypes", combos);
    all
}

fn lint_authored_content(
    events_path: Option<&str>,
    prophecies_path: Option<&str>,
) -> Vec<ContentIssue> {
    let mut catalog = EventCatalog::new();

    if let Some(path_str) = events_path {
        let path = Path::new(path_str);
        if path.is_file() {
            match EventCatalog::load_from_ron(path) {
                Ok(loaded) => catalog.merge(loaded),
                Err(e) => {
                    eprintln!("ERROR: failed to load events from {}: {}", path_str, e);
                    process::exit(1);
                }
            }
        } else if path.is_dir() {
            load_events_recursive(path, &mut catalog);
        } else {
            eprintln!("ERROR: path '{}' does not exist", path_str);
            process::exit(1);
        }
    }

    let prophecies: Vec<Prophecy> = match prophecies_path {
        Some(path_str) => match load_prophecies_from_ron(Path::new(path_str)) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("ERROR: failed to load prophecies from {}: {}", path_str, e);
                process::exit(1);
            }
        },
        None => Vec::new(),
    };

    println!(
        "Loaded {} events, {} prophecies",
        catalog.len(),
        prophecies.len()
    );
    validate_content(&catalog, &prophecies)
}

fn load_events_recursive(dir: &Path, catalog: &mut EventCatalog) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                load_events_recursive(&path, catalog);
            } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                match EventCatalog::load_from_ron(&path) {
                    Ok(loaded) => {
                        println!("  Loaded: {}", path.display());
                        catalog.merge(loaded);
                    }
                    Err(e) => {
                        eprintln!("  ERROR loading {}: {}", path.display(), e);
                    }
                }
            }
        }
    }
}
