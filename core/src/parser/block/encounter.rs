//! Adventure blocks: one `[N] Area` header followed by encounter names,
//! combat rounds, and loose gain lines.
//!
//! Most blocks become exactly one [`Turn`]. The exceptions:
//! - shore trips and arcade games burn several adventures per block, so
//!   they expand into a run of synthetic turns;
//! - crafting pseudo-adventures are logged one turn ahead, so their
//!   number is pulled back by one;
//! - a block with several `Encounter:` markers stays one turn carrying
//!   several sub-encounters, since only the first consumed the adventure.

use crate::game_data::{
    remap_area_name, BAD_MOON_ENCOUNTERS, BROKEN_AREA_ENCOUNTERS, CRAFTING_VERBS,
    GAME_GRID_GAMES, RESTING_AREA_PREFIX, SEMIRARE_ENCOUNTERS, SHORE_TRIP_SUFFIX,
    WINS_FIGHT_MARKER,
};
use crate::model::{Turn, TurnVersion};
use crate::parser::line::combat::{
    CombatItemParser, DisintegrateParser, FreeRunawayParser, SkillCastParser,
};
use crate::parser::line::equipment::{
    EquipParser, FamiliarParser, OutfitParser, UnequipParser,
};
use crate::parser::line::gains::{
    BuyParser, EncounterMeatParser, MpContext, MpGainParser, StatGainParser,
};
use crate::parser::line::items::{
    ItemAcquisitionParser, ItemsListParser, MultiItemParser, PullParser,
};
use crate::parser::line::misc::{LevelParser, NoteParser};
use crate::parser::line::{dispatch, LineParser};
use crate::session::SessionState;

static ENCOUNTER_PARSERS: &[&dyn LineParser] = &[
    &SkillCastParser,
    &CombatItemParser,
    &FreeRunawayParser,
    &DisintegrateParser,
    &StatGainParser,
    &MpGainParser {
        context: MpContext::Encounter,
    },
    &EncounterMeatParser,
    &BuyParser,
    &ItemAcquisitionParser,
    &ItemsListParser,
    &MultiItemParser,
    &PullParser,
    &EquipParser,
    &UnequipParser,
    &OutfitParser,
    &FamiliarParser,
    &LevelParser,
    &NoteParser,
];

/// Same set with the MP column switched for resting areas.
static RESTING_PARSERS: &[&dyn LineParser] = &[
    &StatGainParser,
    &MpGainParser {
        context: MpContext::Resting,
    },
    &EncounterMeatParser,
    &ItemAcquisitionParser,
    &ItemsListParser,
    &MultiItemParser,
    &LevelParser,
    &NoteParser,
];

pub fn parse(lines: &[String], state: &mut SessionState) {
    let header = &lines[0];
    if BROKEN_AREA_ENCOUNTERS.contains(header.as_str()) {
        parse_broken(lines, state);
        return;
    }
    let Some((number, area)) = parse_header(header) else {
        tracing::debug!(%header, "unparseable adventure header");
        return;
    };
    let area = remap_area_name(area).to_string();

    if area.ends_with(SHORE_TRIP_SUFFIX) {
        expand_multi_turn(
            state,
            number,
            &area,
            state.path.shore_trip_turns(),
            state.path.shore_trip_cost(),
        );
    } else if GAME_GRID_GAMES.contains(area.as_str()) {
        expand_multi_turn(state, number, &area, 5, 0);
    } else if is_crafting(&area) {
        // Crafting is logged one turn ahead of the adventure counter
        let mut turn = new_turn(state, number.saturating_sub(1), &area);
        turn.first_encounter_mut().set_version(TurnVersion::Other);
        state.add_turn_spent(turn);
    } else {
        state.add_turn_spent(new_turn(state, number, &area));
        scan_lines(&lines[1..], state, &area);
        return;
    }
    scan_loose(&lines[1..], state, &area);
}

/// Rain Man summons a combat without an adventure header; it is tracked
/// as its own area against the current turn counter.
pub fn parse_rainman(lines: &[String], state: &mut SessionState) {
    let number = state.last_turn_number();
    state.add_turn_spent(new_turn(state, number, "Rain Man"));
    scan_lines(lines, state, "Rain Man");
}

/// Mislogged encounters with no adventure header attach to the previous
/// turn as an extra sub-encounter.
fn parse_broken(lines: &[String], state: &mut SessionState) {
    let name = lines[0]["Encounter: ".len()..].to_string();
    let area = {
        let Some(turn) = state.last_turn_spent_mut() else {
            return;
        };
        turn.push_encounter(name);
        turn.area().to_string()
    };
    scan_lines(&lines[1..], state, &area);
}

fn parse_header(line: &str) -> Option<(u32, &str)> {
    let rest = line.strip_prefix('[')?;
    let (digits, area) = rest.split_once("] ")?;
    let number = digits.parse::<u32>().ok()?;
    let area = area.trim();
    (!area.is_empty()).then_some((number, area))
}

fn is_crafting(area: &str) -> bool {
    area.split(' ')
        .next()
        .is_some_and(|verb| CRAFTING_VERBS.contains(&verb))
}

fn new_turn(state: &SessionState, number: u32, area: &str) -> Turn {
    Turn::new(
        number,
        state.current_day,
        area,
        "",
        state.current_equipment(),
        state.current_familiar(),
    )
}

/// Shore trips and arcade games: one block, several adventures. The cost
/// lands on the first synthetic turn.
fn expand_multi_turn(state: &mut SessionState, number: u32, area: &str, turns: u32, cost: i64) {
    for offset in 0..turns {
        let mut turn = new_turn(state, number + offset, area);
        let encounter = turn.first_encounter_mut();
        encounter.set_version(TurnVersion::Other);
        if offset == 0 {
            encounter.meat.spent += cost;
        }
        state.add_turn_spent(turn);
    }
}

/// Walk the block body, naming encounters and dispatching every other
/// line. The turn being built is always the session's last.
fn scan_lines(lines: &[String], state: &mut SessionState, area: &str) {
    let parsers = if area.starts_with(RESTING_AREA_PREFIX) {
        RESTING_PARSERS
    } else {
        ENCOUNTER_PARSERS
    };

    let mut last_hp_loss = None;
    let mut last_win = None;
    for (idx, line) in lines.iter().enumerate() {
        if let Some(name) = line.strip_prefix("Encounter: ") {
            name_encounter(state, name.trim());
            continue;
        }
        if line.starts_with("Round ") {
            if let Some(turn) = state.last_turn_spent_mut() {
                turn.current_encounter_mut().set_version(TurnVersion::Combat);
            }
            if is_hp_loss(line) {
                last_hp_loss = Some(idx);
            }
            if line.contains(WINS_FIGHT_MARKER) {
                last_win = Some(idx);
            }
        }
        if !dispatch(parsers, line, state) {
            tracing::trace!(%line, "unrecognized line in adventure block");
        }
    }

    let Some(turn) = state.last_turn_spent_mut() else {
        return;
    };
    let encounter = turn.current_encounter_mut();
    match encounter.version() {
        TurnVersion::Undefined => encounter.set_version(TurnVersion::Noncombat),
        TurnVersion::Combat if last_hp_loss.is_some() && last_win < last_hp_loss => {
            encounter.add_note("Lost the fight");
        }
        _ => {}
    }
}

/// Line scan for expanded multi-turn blocks, which stay version Other
/// and never name encounters.
fn scan_loose(lines: &[String], state: &mut SessionState, area: &str) {
    let parsers = if area.starts_with(RESTING_AREA_PREFIX) {
        RESTING_PARSERS
    } else {
        ENCOUNTER_PARSERS
    };
    for line in lines {
        if line.starts_with("Encounter: ") || line.starts_with("Round ") {
            continue;
        }
        dispatch(parsers, line, state);
    }
}

fn is_hp_loss(line: &str) -> bool {
    line.contains("You lose ") && line.trim_end_matches('.').ends_with("hit points")
}

fn name_encounter(state: &mut SessionState, name: &str) {
    let Some(turn) = state.last_turn_spent_mut() else {
        return;
    };
    let encounter = turn.current_encounter_mut();
    if encounter.name.is_empty() {
        encounter.name = name.to_string();
    } else {
        // Several encounters in one block share the single adventure
        turn.push_encounter(name);
    }
    let encounter = turn.current_encounter_mut();
    if SEMIRARE_ENCOUNTERS.contains(name) {
        encounter.add_note("Semirare");
    } else if BAD_MOON_ENCOUNTERS.contains(name) {
        encounter.add_note("Bad Moon");
    }
}
