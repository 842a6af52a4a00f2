/// The built-in story event graph, generated per character.
use crate::core::catalog::EventCatalog;
use crate::core::predicate::Predicate;
use crate::schema::character::{CharacterClass, CharacterInfo, Realm};
use crate::schema::event::{Choice, Effect, StoryEvent};
use crate::schema::journey::PlayerJourney;

/// Generate the full event catalog for a character.
///
/// The catalog is static for the whole journey: a handful of unlock
/// targets are computed here from the character's class or realm, baked
/// into the graph, and never re-evaluated. The `journey` parameter is part
/// of the generator's interface but its mutable fields are deliberately
/// not read; it never filters which events are returned.
pub fn generate_events(character: &CharacterInfo, _journey: &PlayerJourney) -> EventCatalog {
    // Generation-time branches, fixed into the graph.
    let stag_target = if character.class == CharacterClass::Ranger {
        "spirit_conversation"
    } else {
        "forest_blessing"
    };
    let scree_target = if character.realm == Realm::DwarvenMountains {
        "summit_shrine"
    } else {
        "cave_discovery"
    };

    EventCatalog::from_events(vec![
        event(
            "crossroads",
            "The Crossroads",
            "Three roads diverge under a weathered signpost. Pilgrims pass \
             in twos and threes, and the forest to the west breathes cold \
             air across the junction.",
            vec![
                choice(
                    "forest_path",
                    "Take the overgrown forest path",
                    "The canopy closes over you, and something in the green \
                     quiet feels like a welcome.",
                    vec![
                        Effect::UnlockEvent("forest_encounter".to_string()),
                        Effect::AddTrait("nature_affinity".to_string()),
                    ],
                ),
                choice(
                    "mountain_road",
                    "Climb the switchback mountain road",
                    "The air thins and the signpost shrinks behind you as \
                     the road climbs into bare rock.",
                    vec![Effect::UnlockEvent("mountain_pass".to_string())],
                ),
                choice(
                    "follow_pilgrims",
                    "Fall in with the pilgrims",
                    "The pilgrims make room without a word. By dusk their \
                     road has become yours.",
                    vec![Effect::UnlockEvent("village_arrival".to_string())],
                ),
                choice(
                    "camp_at_signpost",
                    "Make camp and watch the roads",
                    "You spend a night reading the travelers the roads \
                     bring. Patience, too, is a way of choosing.",
                    vec![Effect::AddTrait("patient_mind".to_string())],
                ),
            ],
        ),
        event(
            "forest_encounter",
            "A Rustle in the Ferns",
            "The path narrows between old trees. A wounded stag watches \
             you from the ferns, and deeper in, something white moves \
             between the trunks.",
            vec![
                choice(
                    "tend_wounded_stag",
                    "Tend the wounded stag",
                    "The stag holds still under your hands. When it rises, \
                     it looks back once before vanishing into the green.",
                    vec![Effect::AddTrait("beast_friend".to_string())],
                ),
                choice(
                    "follow_white_stag",
                    "Follow the white shape deeper in",
                    "You leave the path. The white stag stays just in \
                     sight, always a few trunks ahead, leading.",
                    vec![Effect::UnlockEvent(stag_target.to_string())],
                ),
                choice(
                    "gather_moonherbs",
                    "Gather the moonherbs by the stream",
                    "You fill a pouch with the pale leaves. Their scent \
                     stays on your hands for days.",
                    vec![Effect::AddTrait("herbalist".to_string())],
                ),
                choice(
                    "press_on_to_village",
                    "Keep to the path toward the village",
                    "The trees thin, and woodsmoke on the wind promises \
                     roofs and company.",
                    vec![Effect::UnlockEvent("village_arrival".to_string())],
                ),
            ],
        ),
        event(
            "mountain_pass",
            "The Mountain Pass",
            "Wind scours the pass. A storm is building over the peaks, a \
             scree slope climbs toward a glinting point above, and a \
             miner's lantern bobs helplessly on the rockfall below.",
            vec![
                choice(
                    "scale_the_scree",
                    "Scale the scree toward the glint above",
                    "Loose rock slides underfoot, but handhold by handhold \
                     the glint above grows into something made, not born.",
                    vec![Effect::UnlockEvent(scree_target.to_string())],
                ),
                choice(
                    "shelter_from_storm",
                    "Wedge into the rocks and wait out the storm",
                    "The storm howls itself hoarse against your shelter. \
                     Dawn finds you stiff, cold, and unbroken.",
                    vec![Effect::AddTrait("iron_will".to_string())],
                ),
                choice(
                    "aid_stranded_miner",
                    "Climb down to the stranded miner",
                    "You haul the miner off the rockfall. He presses his \
                     lantern into your hands and will not take it back.",
                    vec![
                        Effect::AddTrait("miners_gratitude".to_string()),
                        Effect::RewardItem("lantern_of_deep".to_string()),
                    ],
                ),
                choice(
                    "descend_to_valley",
                    "Descend toward the valley lights",
                    "The path drops out of the wind, and the valley's \
                     lanterns rise to meet you.",
                    vec![Effect::UnlockEvent("village_arrival".to_string())],
                ),
            ],
        ),
        event(
            "village_arrival",
            "Gates of Briarwick",
            "Briarwick's palisade is scorched and half-mended. Villagers \
             eye your weapons from behind the gate, and an elder watches \
             from the steps of the moot hall.",
            vec![
                choice(
                    "defend_gate",
                    "Stand a watch at the gate",
                    "You take the night watch unasked. By morning the \
                     villagers have stopped watching your weapons and \
                     started watching the road.",
                    vec![Effect::AddTrait("village_friend".to_string())],
                ),
                Choice {
                    id: "intimidate_villagers".to_string(),
                    text: "Let them see what you are".to_string(),
                    outcome: "You say nothing and let your reputation walk \
                              ahead of you. The gate opens quickly after \
                              that."
                        .to_string(),
                    effects: vec![Effect::AddTrait("feared_name".to_string())],
                    availability: Some(Predicate::AlignmentContains("Evil".to_string())),
                },
                choice(
                    "trade_stories_at_well",
                    "Trade stories at the well",
                    "Stories buy more than coin here. By the second tale \
                     you have directions to the Gilded Flagon and a \
                     standing invitation.",
                    vec![Effect::UnlockEvent("tavern_gathering".to_string())],
                ),
                choice(
                    "seek_the_elder",
                    "Seek out the elder on the moot hall steps",
                    "The elder talks around your questions for an hour and \
                     answers all of them anyway.",
                    vec![Effect::AddTrait("elders_counsel".to_string())],
                ),
            ],
        ),
        event(
            "tavern_gathering",
            "The Gilded Flagon",
            "The Flagon is loud with mercenaries, drovers, and one \
             silence: a scarred duelist at the hearth table, waiting for \
             someone worth standing up for.",
            vec![
                choice(
                    "perform_ballad",
                    "Take the floor and perform",
                    "By the last verse the room is yours, and the barkeep \
                     has stopped charging you for anything.",
                    vec![Effect::AddTrait("crowd_favorite".to_string())],
                ),
                choice(
                    "listen_for_rumors",
                    "Buy a round and listen",
                    "The drovers talk of broken stones east of here: Vel \
                     Andar, where lights burn with no one to light them.",
                    vec![Effect::UnlockEvent("ruins_exploration".to_string())],
                ),
                choice(
                    "accept_duel",
                    "Meet the duelist's eye",
                    "The duelist smiles for the first time all night. The \
                     matter, it is agreed, will be settled on the old \
                     battlefield at dawn.",
                    vec![Effect::UnlockEvent("battlefield".to_string())],
                ),
                choice(
                    "share_meal_with_strangers",
                    "Share your table and your bread",
                    "Strangers at sundown, and by the end of the meal \
                     something that is not quite friendship but could \
                     grow into it.",
                    vec![Effect::AddTrait("open_heart".to_string())],
                ),
            ],
        ),
        event(
            "ruins_exploration",
            "Ruins of Vel Andar",
            "Broken towers lean over a drowned plaza. Runes crawl along \
             the standing stones, a vault door stands sealed beneath the \
             arch, and the wind through the colonnade almost has words.",
            vec![
                choice(
                    "study_runes",
                    "Study the runes on the standing stones",
                    "The script resolves slowly, like eyes adjusting to \
                     dark. Half a message; the other half is written \
                     somewhere else.",
                    vec![Effect::AddTrait("rune_scholar".to_string())],
                ),
                choice(
                    "pick_hidden_lock",
                    "Work the vault's hidden lock",
                    "The mechanism surrenders with a sigh a century in the \
                     making. Inside: dust, a dry ledger, and proof the \
                     vault was emptied from within.",
                    vec![Effect::AddTrait("deft_hands".to_string())],
                ),
                choice(
                    "consult_the_echoes",
                    "Stand in the colonnade and listen",
                    "The wind-words never become speech, but when you step \
                     out of the colonnade you know things you did not \
                     know walking in.",
                    vec![Effect::AddTrait("echo_touched".to_string())],
                ),
                choice(
                    "leave_offering",
                    "Leave an offering on the broken altar",
                    "You leave bread and a coin. Somewhere below your \
                     feet, stone grinds against stone, like a door \
                     deciding to be a door again.",
                    vec![
                        Effect::AddTrait("respectful_soul".to_string()),
                        Effect::UnlockEvent("cave_discovery".to_string()),
                    ],
                ),
            ],
        ),
        event(
            "battlefield",
            "The Ashen Field",
            "An old battle's leavings stretch to the horizon: burned \
             standards, a shield wall re-forming out of local levies, and \
             the wounded of last night's skirmish crying in the ditch.",
            vec![
                choice(
                    "rally_the_line",
                    "Step into the gap and rally the line",
                    "Your voice carries down the wall, and the levies \
                     stand because you are standing.",
                    vec![Effect::AddTrait("battle_leader".to_string())],
                ),
                choice(
                    "tend_the_wounded",
                    "Kneel with the wounded in the ditch",
                    "You work until your arms shake. Some of them will see \
                     morning who would not have.",
                    vec![Effect::AddTrait("mercy_shown".to_string())],
                ),
                Choice {
                    id: "loot_the_fallen".to_string(),
                    text: "Go through the fallen while no one watches".to_string(),
                    outcome: "The dead are not using any of it. Your purse \
                              is heavier and the field is very quiet."
                        .to_string(),
                    effects: vec![Effect::AddTrait("grave_robber".to_string())],
                    availability: Some(Predicate::AlignmentContains("Evil".to_string())),
                },
                choice(
                    "search_for_survivors",
                    "Search the collapsed trenchworks",
                    "Under the fallen timbers you find survivors, and \
                     behind them, a crack in the earth breathing cold air \
                     from somewhere deep.",
                    vec![Effect::UnlockEvent("cave_discovery".to_string())],
                ),
            ],
        ),
        event(
            "cave_discovery",
            "The Hollow Beneath",
            "The crack opens into a hollow the sun has never found. An \
             unlit brazier waits by the entrance, carvings crowd the \
             walls, and a passage spirals down past the reach of light.",
            vec![
                choice(
                    "light_the_old_brazier",
                    "Light the old brazier",
                    "The flame catches as if it remembered how. Shadows \
                     peel back from carvings no living eye has read.",
                    vec![Effect::AddTrait("flame_keeper".to_string())],
                ),
                choice(
                    "descend_into_dark",
                    "Take the spiral passage down",
                    "The passage bottoms out in salt air and lapping \
                     water: a hidden cove, and boats that are not \
                     fishing boats.",
                    vec![Effect::UnlockEvent("smugglers_cove".to_string())],
                ),
                choice(
                    "read_wall_carvings",
                    "Read the wall carvings",
                    "The carvings answer the ruins' runes line for line. \
                     Whoever wrote one wrote the other, and meant them to \
                     be read together.",
                    vec![Effect::AddTrait("deep_lore".to_string())],
                ),
                choice(
                    "turn_back",
                    "Turn back toward daylight",
                    "Some doors are better left shut. You climb back \
                     toward the gray light of the surface.",
                    vec![],
                ),
            ],
        ),
        StoryEvent {
            id: "spirit_conversation".to_string(),
            title: "The Glade Spirit".to_string(),
            description: "The white stag stops in a glade where no wind \
                          moves, and is not a stag any longer. The spirit \
                          regards you with the patience of forests."
                .to_string(),
            background: "backgrounds/spirit_conversation.jpg".to_string(),
            choices: vec![
                choice(
                    "pledge_to_the_wild",
                    "Kneel and pledge yourself to the wild",
                    "The words are old and you have never heard them, yet \
                     you speak them without stumbling. The glade exhales.",
                    vec![Effect::AddTrait("wardens_mark".to_string())],
                ),
                choice(
                    "ask_about_prophecy",
                    "Ask what the forest knows of your fate",
                    "\"Fate,\" says the spirit, \"is a road walked \
                     backward. I can tell you only where you have been.\" \
                     It tells you anyway, and it is more than you knew.",
                    vec![],
                ),
                choice(
                    "offer_silence",
                    "Offer the spirit your silence",
                    "You say nothing, and the spirit seems to find that \
                     the correct answer. The silence you share says more.",
                    vec![Effect::AddTrait("quiet_understanding".to_string())],
                ),
            ],
            condition: Some(Predicate::ClassIs(CharacterClass::Ranger)),
        },
        event(
            "forest_blessing",
            "The Mossy Shrine",
            "The white shape is gone, but the chase has led you to a \
             shrine swallowed by moss, its basin still full of clear \
             water that does not reflect the canopy above.",
            vec![
                choice(
                    "accept_blessing",
                    "Wash your hands in the basin",
                    "The water is cold past cold. When you lift your \
                     hands, the forest's sounds have gained a meaning \
                     they did not have.",
                    vec![Effect::AddTrait("forest_blessed".to_string())],
                ),
                choice(
                    "decline_politely",
                    "Bow to the shrine and touch nothing",
                    "Not every gift is yours to take. Something in the \
                     green approves of your restraint.",
                    vec![Effect::AddTrait("humble_spirit".to_string())],
                ),
                choice(
                    "ask_for_guidance",
                    "Ask the shrine for a road",
                    "The basin's surface tilts the light toward a gap in \
                     the trees, and through it, distant woodsmoke.",
                    vec![Effect::UnlockEvent("village_arrival".to_string())],
                ),
            ],
        ),
        StoryEvent {
            id: "summit_shrine".to_string(),
            title: "The Summit Shrine".to_string(),
            description: "The glint was a bronze bell, green with age, \
                          hung in a shrine cut from the living peak. \
                          Dwarven masons' marks ring the threshold."
                .to_string(),
            background: "backgrounds/summit_shrine.jpg".to_string(),
            choices: vec![
                choice(
                    "ring_the_bronze_bell",
                    "Ring the bronze bell",
                    "The note rolls down the mountainside and the \
                     mountainside rolls it back, doubled. You feel it in \
                     the rock under your boots for a long time after.",
                    vec![Effect::AddTrait("mountain_blessed".to_string())],
                ),
                choice(
                    "leave_ancestor_token",
                    "Leave a token for the ancestors",
                    "You set your token among a thousand years of others. \
                     The wind drops, just for a breath.",
                    vec![Effect::AddTrait("ancestor_bond".to_string())],
                ),
                choice(
                    "study_the_forge_marks",
                    "Study the masons' marks",
                    "The marks are a ledger of makers. Reading them, you \
                     understand the shrine was not built on the peak; the \
                     peak was finished into a shrine.",
                    vec![Effect::AddTrait("forge_wisdom".to_string())],
                ),
            ],
            condition: Some(Predicate::RealmIs(Realm::DwarvenMountains)),
        },
        event(
            "smugglers_cove",
            "The Smugglers' Cove",
            "Lanterns hooded, voices low: the cove below the hollow runs \
             a brisk trade in things the harbors tax and the temples \
             burn. Every eye finds you at once.",
            vec![
                choice(
                    "bargain_with_smugglers",
                    "Talk your way to their table",
                    "It takes three sentences to stop being a problem and \
                     one shared bottle to become a customer.",
                    vec![Effect::AddTrait("silver_tongue".to_string())],
                ),
                Choice {
                    id: "seize_the_contraband".to_string(),
                    text: "Take the cargo and dare them to object".to_string(),
                    outcome: "Nobody objects. That is its own kind of \
                              reputation, and it rows out with the tide."
                        .to_string(),
                    effects: vec![
                        Effect::AddTrait("ruthless_streak".to_string()),
                        Effect::RewardItem("contraband_cache".to_string()),
                    ],
                    availability: Some(Predicate::AlignmentContains("Evil".to_string())),
                },
                choice(
                    "slip_away_unseen",
                    "Be somewhere else before they decide",
                    "A shadow among shadows. By the time the lookout \
                     blinks, the cove has never held you.",
                    vec![Effect::AddTrait("shadow_step".to_string())],
                ),
            ],
        ),
    ])
}

fn choice(id: &str, text: &str, outcome: &str, effects: Vec<Effect>) -> Choice {
    Choice {
        id: id.to_string(),
        text: text.to_string(),
        outcome: outcome.to_string(),
        effects,
        availability: None,
    }
}

fn event(id: &str, title: &str, description: &str, choices: Vec<Choice>) -> StoryEvent {
    StoryEvent {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        background: format!("backgrounds/{}.jpg", id),
        choices,
        condition: None,
    }
}
