//! End-to-end block parsing over in-memory logs.

use ascent_types::{ChallengePath, ParsingConfig};

use crate::model::TurnVersion;
use crate::parse_session_text;
use crate::session::LogSession;

fn parse(text: &str) -> LogSession {
    parse_session_text(text.as_bytes(), &ParsingConfig::default())
}

#[test]
fn test_combat_block_end_to_end() {
    let session = parse(
        "[5] The Spooky Forest\n\
         Encounter: spooky vampire\n\
         Round 1: Beholder casts ENTANGLING NOODLES!\n\
         Round 2: spooky vampire takes 10 damage.\n\
         Round 3: Beholder wins the fight!\n\
         You gain 120 Meat.\n\
         You acquire an item: vampire fang\n\
         You gain 15 Strongness\n\
         You gain 8 Mana Points\n",
    );
    // turn 0 is the synthetic run start
    assert_eq!(session.turns().len(), 2);
    let turn = &session.turns()[1];
    assert_eq!(turn.number(), 5);
    assert_eq!(turn.area(), "The Spooky Forest");
    assert_eq!(turn.name(), "spooky vampire");
    assert_eq!(turn.version(), TurnVersion::Combat);
    assert_eq!(turn.meat().encounter, 120);
    assert_eq!(turn.stat_gain().muscle, 15);
    assert_eq!(turn.mp_gain().encounter, 8);
    assert_eq!(turn.items().count(), 1);
    assert_eq!(turn.skills().count(), 1);
    assert_eq!(session.total_turns(), 5);
}

#[test]
fn test_block_without_rounds_is_noncombat() {
    let session = parse("[9] The Haunted Pantry\nEncounter: The Singing Tree\nYou gain 6 Smarm\n");
    let turn = &session.turns()[1];
    assert_eq!(turn.version(), TurnVersion::Noncombat);
    assert_eq!(turn.stat_gain().moxie, 6);
}

#[test]
fn test_shore_trip_expands_to_three_turns_and_costs_meat() {
    let session = parse("[10] The Shore, Inc. Travel Agency\nYou acquire an item: Shore Inc. Ship Trip Scrip\n");
    let turns = session.turns();
    assert_eq!(turns.len(), 4);
    for (offset, turn) in turns[1..].iter().enumerate() {
        assert_eq!(turn.number(), 10 + offset as u32);
        assert_eq!(turn.version(), TurnVersion::Other);
    }
    assert_eq!(turns[1].meat().spent, 500);
    assert_eq!(turns[2].meat().spent, 0);
}

#[test]
fn test_plumber_shore_trip_is_five_free_turns() {
    let config = ParsingConfig {
        challenge_path: ChallengePath::Plumber,
        ..ParsingConfig::default()
    };
    let session = parse_session_text(
        b"[10] The Shore, Inc. Travel Agency\n",
        &config,
    );
    assert_eq!(session.turns().len(), 6);
    assert_eq!(session.turns()[1].meat().spent, 0);
    assert_eq!(session.total_turns(), 14);
}

#[test]
fn test_arcade_game_burns_five_turns() {
    let session = parse("[20] DemonStar\nYou acquire an item: game grid ticket\n");
    assert_eq!(session.turns().len(), 6);
    assert_eq!(session.turns()[5].number(), 24);
}

#[test]
fn test_crafting_logged_one_turn_ahead() {
    let session = parse("[31] Mix 1 bottle of gin + 1 olive\nYou acquire an item: martini\n");
    let turn = &session.turns()[1];
    assert_eq!(turn.number(), 30);
    assert_eq!(turn.version(), TurnVersion::Other);
    assert_eq!(turn.items().count(), 1);
}

#[test]
fn test_multiple_encounters_share_one_turn() {
    let session = parse(
        "[8] The Haunted Pantry\n\
         Encounter: possessed can of tomatoes\n\
         Round 1: Beholder wins the fight!\n\
         Encounter: undead elbow macaroni\n\
         Round 1: Beholder casts ENTANGLING NOODLES!\n\
         You gain 10 Cheek\n",
    );
    assert_eq!(session.turns().len(), 2);
    let turn = &session.turns()[1];
    assert_eq!(turn.encounters().len(), 2);
    assert_eq!(turn.encounters()[0].name, "possessed can of tomatoes");
    assert_eq!(turn.encounters()[1].name, "undead elbow macaroni");
    // aggregates flatten over sub-encounters
    assert_eq!(turn.stat_gain().moxie, 10);
}

#[test]
fn test_turn_numbers_never_regress() {
    let session = parse("[5] Noob Cave\n\n[3] The Spooky Forest\n\n[6] Noob Cave\n");
    let numbers: Vec<u32> = session.turns().iter().map(|t| t.number()).collect();
    assert_eq!(numbers, vec![0, 5, 5, 6]);
}

#[test]
fn test_lost_fight_noted() {
    let session = parse(
        "[7] The Spooky Forest\n\
         Encounter: spooky vampire\n\
         Round 1: You lose 12 hit points.\n",
    );
    let turn = &session.turns()[1];
    assert_eq!(turn.version(), TurnVersion::Combat);
    assert!(turn.first_encounter().notes.contains("Lost the fight"));

    let won = parse(
        "[7] The Spooky Forest\n\
         Encounter: spooky vampire\n\
         Round 1: You lose 12 hit points.\n\
         Round 2: Beholder wins the fight!\n",
    );
    assert!(won.turns()[1].first_encounter().notes.is_empty());
}

#[test]
fn test_semirare_and_bad_moon_encounters_noted() {
    let session = parse(
        "[12] The Limerick Dungeon\n\
         Encounter: Cornucopia?\n\
         You gain 11 Adventures.\n",
    );
    assert!(session.turns()[1].first_encounter().notes.contains("Semirare"));

    let session = parse(
        "[13] The Spooky Forest\n\
         Encounter: Getting Hammered\n",
    );
    assert!(session.turns()[1].first_encounter().notes.contains("Bad Moon"));
}

#[test]
fn test_disintegrate_and_banish_flags() {
    let session = parse(
        "[4] The Icy Peak\n\
         Encounter: knott yeti\n\
         Round 1: Beholder casts SNOKEBOMB!\n\
         The monster disintegrates into a fine yellow powder.\n",
    );
    let turn = &session.turns()[1];
    assert!(turn.banished());
    assert_eq!(turn.banish_info(), Some("SNOKEBOMB"));
    assert!(turn.disintegrated());
}

#[test]
fn test_free_runaway_counted() {
    let session = parse(
        "[4] The Icy Peak\n\
         Encounter: knott yeti\n\
         Round 1: Beholder casts RETURN!\n\
         You casually saunter away from the combat.\n",
    );
    assert_eq!(session.turns()[1].free_runaways(), 1);
}

#[test]
fn test_resting_mp_lands_in_resting_column() {
    let session = parse("[12] Rest in your dwelling\nYou gain 14 Mana Points\n");
    let turn = &session.turns()[1];
    assert_eq!(turn.mp_gain().resting, 14);
    assert_eq!(turn.mp_gain().encounter, 0);
}

#[test]
fn test_malformed_amounts_do_not_abort() {
    let session = parse(
        "[5] Noob Cave\n\
         Encounter: fleaman\n\
         You gain 1,2x4 Strongness\n\
         You gain 15 Strongness\n\
         You gain  Meat\n",
    );
    assert_eq!(session.turns().len(), 2);
    assert_eq!(session.turns()[1].stat_gain().muscle, 15);
}

#[test]
fn test_separator_formatted_amounts_round_trip() {
    let session = parse(
        "[5] Noob Cave\n\
         Encounter: fleaman\n\
         You gain 1,234 Muscleboundness\n\
         You lose 50 Chutzpah\n\
         You gain 2,500 Meat.\n",
    );
    let turn = &session.turns()[1];
    assert_eq!(turn.stat_gain().muscle, 1234);
    assert_eq!(turn.stat_gain().moxie, -50);
    assert_eq!(turn.meat().encounter, 2500);
}

#[test]
fn test_broken_area_encounter_joins_previous_turn() {
    let session = parse(
        "[5] The Sleazy Back Alley\nEncounter: fleaman\n\nEncounter: Cleesh\nYou gain 4 Magicalness\n",
    );
    assert_eq!(session.turns().len(), 2);
    let turn = &session.turns()[1];
    assert_eq!(turn.encounters().len(), 2);
    assert_eq!(turn.encounters()[1].name, "Cleesh");
    assert_eq!(turn.encounters()[1].area, "The Sleazy Back Alley");
}

#[test]
fn test_consumable_block_attaches_to_current_turn() {
    let session = parse(
        "[5] Noob Cave\nEncounter: fleaman\n\neat 1 hell ramen\nYou gain 22 Adventures.\nYou gain 31 Magicalness\n",
    );
    let turn = &session.turns()[1];
    let eaten: Vec<_> = turn.consumables().collect();
    assert_eq!(eaten.len(), 1);
    assert_eq!(eaten[0].adventure_gain, 22);
    assert_eq!(eaten[0].turn, 5);
}

#[test]
fn test_rainman_summon_tracked_as_own_area() {
    let session = parse(
        "[5] Noob Cave\nEncounter: fleaman\n\ncast 1 Rain Man\nEncounter: lobsterfrogman\nRound 1: Beholder wins the fight!\n",
    );
    assert_eq!(session.turns().len(), 3);
    let rainman = &session.turns()[2];
    assert_eq!(rainman.area(), "Rain Man");
    assert_eq!(rainman.number(), 5);
    assert_eq!(rainman.name(), "lobsterfrogman");
}

#[test]
fn test_pre_parsed_log_builds_intervals() {
    let session = parse(
        "[1] Noob Cave\n[2] Noob Cave\n+> [2] Got pail\n[3] The Spooky Forest\n@> [3] Day 2\n",
    );
    assert_eq!(session.turns().len(), 1);
    assert_eq!(session.intervals().len(), 2);
    assert_eq!(session.intervals()[0].area, "Noob Cave");
    assert_eq!(session.intervals()[0].turn_count(), 2);
    assert_eq!(session.day_changes().last().unwrap().day, 2);
    assert_eq!(session.total_turns(), 4);
}
