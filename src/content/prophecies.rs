/// The built-in prophecy catalog, selected per character.
use crate::schema::character::{CharacterClass, CharacterInfo, Realm};
use crate::schema::prophecy::{Prophecy, ProphecyRequirements, TraitRequirements};

/// Generate the full prophecy catalog for a character: one universal
/// prophecy, one class prophecy, one alignment prophecy, one realm
/// prophecy, in that order. Pure; identical input yields structurally
/// identical output.
pub fn generate_prophecies(character: &CharacterInfo) -> Vec<Prophecy> {
    vec![
        universal_prophecy(),
        class_prophecy(character.class),
        alignment_prophecy(character),
        realm_prophecy(character.realm),
    ]
}

fn prophecy(
    id: &str,
    title: &str,
    description: &str,
    outcome: &str,
    reward: &str,
    requirements: ProphecyRequirements,
) -> Prophecy {
    Prophecy {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        outcome: outcome.to_string(),
        reward: reward.to_string(),
        consequence: None,
        requirements,
        fulfilled: false,
    }
}

fn strings(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn universal_prophecy() -> Prophecy {
    prophecy(
        "destiny_awaits",
        "Destiny Awaits",
        "The old woman at the well spoke true: your road runs through the \
         crossroads, the tavern's smoke, and the broken stones of Vel Andar.",
        "You have walked where the prophecy said you would walk. Whatever \
         comes next, the realms will remember you passed this way.",
        "Renown across the realms",
        ProphecyRequirements {
            choices: Vec::new(),
            events: strings(&["crossroads", "tavern_gathering", "ruins_exploration"]),
            traits: TraitRequirements::default(),
        },
    )
}

fn class_prophecy(class: CharacterClass) -> Prophecy {
    let traits = TraitRequirements {
        class: Some(class),
        ..Default::default()
    };
    match class {
        CharacterClass::Warrior => prophecy(
            "blade_of_heroes",
            "The Blade of Heroes",
            "A warrior who answers every challenge and holds the line when \
             others break will carry the blade the old songs promise.",
            "The duel answered, the line held. The blade sings in your grip \
             as if it had waited for your hand alone.",
            "The Blade of Heroes",
            ProphecyRequirements {
                choices: strings(&["accept_duel", "rally_the_line"]),
                events: Vec::new(),
                traits,
            },
        ),
        CharacterClass::Mage => prophecy(
            "arcane_convergence",
            "The Arcane Convergence",
            "When the runes of the ruins and the carvings beneath the earth \
             are read by one mind, the scattered lattice of the old magic \
             joins again.",
            "Two halves of a broken script, read by one mind. The lattice \
             closes, and the old magic acknowledges its new keeper.",
            "Mastery of the joined lattice",
            ProphecyRequirements {
                choices: strings(&["study_runes", "read_wall_carvings"]),
                events: Vec::new(),
                traits,
            },
        ),
        CharacterClass::Ranger => prophecy(
            "wildheart_pact",
            "The Wildheart Pact",
            "Follow the white stag past the treeline and swear yourself to \
             the wild, and the forest will count you among its wardens.",
            "The stag led; you followed; the oath is spoken. The forest's \
             paths will open for you where they close for all others.",
            "Warden's passage through any wood",
            ProphecyRequirements {
                choices: strings(&["follow_white_stag", "pledge_to_the_wild"]),
                events: Vec::new(),
                traits,
            },
        ),
        CharacterClass::Bard => prophecy(
            "songweaver_legacy",
            "The Songweaver's Legacy",
            "A song that silences a tavern and a tongue that turns smugglers \
             to friends: so the legacy passes to its next bearer.",
            "The room fell silent for your ballad, and hard men bargained \
             fair for your word. The legacy has found its voice.",
            "The Songweaver's mantle",
            ProphecyRequirements {
                choices: strings(&["perform_ballad", "bargain_with_smugglers"]),
                events: Vec::new(),
                traits,
            },
        ),
        CharacterClass::Rogue => prophecy(
            "shadow_dance",
            "The Shadow Dance",
            "A lock opened that none were meant to open, a departure that \
             none were meant to see. The dance has steps; few finish them.",
            "The vault gave up its secret and the cove never knew your name. \
             The dance is finished, and the shadows keep your secrets now.",
            "The shadows' lasting favor",
            ProphecyRequirements {
                choices: strings(&["pick_hidden_lock", "slip_away_unseen"]),
                events: Vec::new(),
                traits,
            },
        ),
    }
}

/// Alignment branch: substring match on the free-text alignment, in the
/// same case-sensitive form the character sheet uses. "Good" wins over
/// "Evil" when both appear; anything else keeps the balance.
fn alignment_prophecy(character: &CharacterInfo) -> Prophecy {
    if character.is_good_aligned() {
        prophecy(
            "light_bringer",
            "The Light Bringer",
            "Where the fighting has been worst, one will kneel among the \
             wounded instead of the spoils, and the light will follow them \
             out of the ash.",
            "You knelt in the ash and the light followed you out. Villages \
             that never learned your face will pray for you anyway.",
            "The blessing of the dawn shrines",
            ProphecyRequirements {
                choices: strings(&["tend_the_wounded"]),
                events: strings(&["battlefield"]),
                traits: TraitRequirements::default(),
            },
        )
    } else if character.is_evil_aligned() {
        let mut p = prophecy(
            "shadow_ascendant",
            "The Shadow Ascendant",
            "The ash of the battlefield hides rings on dead fingers. One \
             will come who takes them without flinching, and the dark will \
             take notice.",
            "You took what the dead no longer needed, and something in the \
             dark marked the taking. Doors will open for you that should \
             stay shut.",
            "Dominion promised in whispers",
            ProphecyRequirements {
                choices: strings(&["loot_the_fallen"]),
                events: strings(&["battlefield"]),
                traits: TraitRequirements::default(),
            },
        );
        p.consequence = Some(
            "The villages whisper your name with dread, and honest doors bar at your knock."
                .to_string(),
        );
        p
    } else {
        prophecy(
            "balance_keeper",
            "The Balance Keeper",
            "Neither crusader nor tyrant: one who breaks bread with \
             strangers and owes nothing to either side will keep the \
             scales level.",
            "You shared a meal and took no side, and the scales stayed \
             level because your hand was on neither pan.",
            "The gray pilgrims' protection",
            ProphecyRequirements {
                choices: strings(&["share_meal_with_strangers"]),
                events: strings(&["tavern_gathering"]),
                traits: TraitRequirements::default(),
            },
        )
    }
}

fn realm_prophecy(realm: Realm) -> Prophecy {
    let traits = TraitRequirements {
        realm: Some(realm),
        ..Default::default()
    };
    match realm {
        Realm::ElvenForests => prophecy(
            "elven_heritage",
            "The Elven Heritage",
            "A child of the Elven Forests will hear the ferns move and not \
             reach for steel, and the old kinship will wake.",
            "The forest knew its own. What the elves left sleeping in you \
             is sleeping no longer.",
            "The waking of elven blood",
            ProphecyRequirements {
                choices: Vec::new(),
                events: strings(&["forest_encounter"]),
                traits,
            },
        ),
        Realm::DwarvenMountains => prophecy(
            "mountain_crown",
            "The Mountain Crown",
            "Stone remembers. One born under the Dwarven Mountains will \
             cross the pass and stand at the shrine on the summit, and the \
             stone will speak.",
            "The bell on the summit rang for you, and under your boots the \
             mountain answered. The crown is not metal; it never was.",
            "The mountain's recognition",
            ProphecyRequirements {
                choices: Vec::new(),
                events: strings(&["mountain_pass", "summit_shrine"]),
                traits,
            },
        ),
        Realm::CoastalKingdoms => prophecy(
            "tide_caller",
            "The Tide Caller",
            "Salt in the blood tells. One from the Coastal Kingdoms will \
             find the sea's hidden doors far from any shore.",
            "A cave with tide-marks a hundred leagues inland, a cove that \
             knew your step. The sea has been keeping places for you.",
            "The sea's hidden doors",
            ProphecyRequirements {
                choices: Vec::new(),
                events: strings(&["cave_discovery", "smugglers_cove"]),
                traits,
            },
        ),
        Realm::NorthernWastes => prophecy(
            "frost_walker",
            "The Frost Walker",
            "The Wastes teach one lesson: endure. One of their children \
             will meet the storm on the pass and wait it out unbroken.",
            "The storm spent itself and you were still there. The north \
             writes its favorites in frost, and your name is in it now.",
            "The endurance of the north",
            ProphecyRequirements {
                choices: strings(&["shelter_from_storm"]),
                events: strings(&["mountain_pass"]),
                traits,
            },
        ),
        Realm::Other => prophecy(
            "wanderers_road",
            "The Wanderer's Road",
            "For those the maps do not claim, the road itself is a \
             homeland. Walk it from the crossroads to a stranger's gate \
             and it will claim you.",
            "No realm claims you, so the road did. Every crossroads is a \
             front door now.",
            "The road's own welcome",
            ProphecyRequirements {
                choices: Vec::new(),
                events: strings(&["crossroads", "village_arrival"]),
                traits,
            },
        ),
    }
}
