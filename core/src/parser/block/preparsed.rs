//! Pre-parsed logs: output of older tooling that already collapsed turns
//! into one line each, with tagged prefixes for the data it kept.
//!
//! These logs carry intervals rather than full turns:
//!
//! ```text
//! [123] The Spooky Forest
//! +> [123] Got pail, hot buttered roll
//! o> Ate 2 hell ramen (44 adventures gained)
//! #> Turn [124] pulled 2 mojo filter
//! @> [130] Day 2
//! %> [135] Level 5
//! ```

use crate::game_data::remap_area_name;
use crate::model::{
    Consumable, ConsumableCategory, DayChange, Item, LevelReached, PullEntry, TurnInterval,
};
use crate::parser::line::parse_amount;
use crate::parser::reader::LogReader;
use crate::session::SessionState;

const TAG_PREFIXES: &[&str] = &["o> ", "+> ", "#> ", "@> ", "%> "];

/// Peek at the first few lines for tag prefixes without consuming input.
pub fn sniff(reader: &mut LogReader) -> bool {
    reader.mark();
    let mut found = false;
    for _ in 0..8 {
        let Some(line) = reader.next_line() else {
            break;
        };
        if TAG_PREFIXES.iter().any(|p| line.starts_with(p)) {
            found = true;
            break;
        }
    }
    reader.reset();
    found
}

pub fn parse(reader: &mut LogReader, state: &mut SessionState) {
    while let Some(line) = reader.next_line() {
        let line = line.to_string();
        if let Some(rest) = line.strip_prefix("o> ") {
            parse_consumption(rest, state);
        } else if let Some(rest) = line.strip_prefix("+> ") {
            parse_items(rest, state);
        } else if let Some(rest) = line.strip_prefix("#> Turn ") {
            parse_pull(rest, state);
        } else if let Some(rest) = line.strip_prefix("@> ") {
            parse_day(rest, state);
        } else if let Some(rest) = line.strip_prefix("%> ") {
            parse_level(rest, state);
        } else if let Some((turn, area)) = adventure_line(&line) {
            record_adventure(turn, area, state);
        } else if !line.trim().is_empty() {
            tracing::trace!(%line, "unrecognized pre-parsed line");
        }
    }
}

fn adventure_line(line: &str) -> Option<(u32, &str)> {
    let rest = line.strip_prefix('[')?;
    let (digits, area) = rest.split_once("] ")?;
    let turn = digits.parse::<u32>().ok()?;
    let area = area.trim();
    (!area.is_empty()).then_some((turn, area))
}

/// Consecutive turns in the same area fold into one interval.
fn record_adventure(turn: u32, area: &str, state: &mut SessionState) {
    let area = remap_area_name(area);
    if let Some(last) = state.last_interval_mut() {
        if last.area == area {
            last.extend_to(turn + 1);
            return;
        }
    }
    state.add_interval(TurnInterval::new(area, turn, turn + 1));
}

/// "[123] ..." tag payloads start with the turn in brackets.
fn bracketed_turn(rest: &str) -> Option<(u32, &str)> {
    let rest = rest.strip_prefix('[')?;
    let (digits, tail) = rest.split_once(']')?;
    let turn = digits.trim().parse::<u32>().ok()?;
    Some((turn, tail.trim_start()))
}

/// "Ate 2 hell ramen (44 adventures gained)"
fn parse_consumption(rest: &str, state: &mut SessionState) {
    let (verb, rest) = match rest.split_once(' ') {
        Some(split) => split,
        None => return,
    };
    let category = match verb {
        "Ate" => ConsumableCategory::Food,
        "Drank" => ConsumableCategory::Booze,
        "Chewed" => ConsumableCategory::Spleen,
        "Used" => ConsumableCategory::Other,
        _ => return,
    };
    let Some((amount_text, rest)) = rest.split_once(' ') else {
        return;
    };
    let Some(amount) = parse_amount(amount_text).filter(|n| *n > 0) else {
        return;
    };
    let (name, adventures) = match rest.rfind(" (") {
        Some(open) if rest.ends_with(" adventures gained)") => {
            let inner = &rest[open + 2..rest.len() - " adventures gained)".len()];
            (rest[..open].trim(), parse_amount(inner).unwrap_or(0))
        }
        _ => (rest.trim(), 0),
    };
    if name.is_empty() {
        return;
    }
    let turn = state
        .intervals()
        .last()
        .map(TurnInterval::end_turn)
        .unwrap_or(0);
    let mut consumable = Consumable::new(name, category, amount as u32, turn, state.current_day);
    consumable.adventure_gain = adventures;
    if let Some(interval) = state.last_interval_mut() {
        interval.consumables.push(consumable);
    }
}

/// "[123] Got pail, hot buttered roll"
fn parse_items(rest: &str, state: &mut SessionState) {
    let Some((turn, tail)) = bracketed_turn(rest) else {
        return;
    };
    let Some(names) = tail.strip_prefix("Got ") else {
        return;
    };
    for name in names.split(',') {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        if let Some(interval) = state.last_interval_mut() {
            interval.add_item(Item::new(name, 1, turn));
        }
    }
}

/// "[123] pulled 2 mojo filter"
fn parse_pull(rest: &str, state: &mut SessionState) {
    let Some((turn, tail)) = bracketed_turn(rest) else {
        return;
    };
    let Some(tail) = tail.strip_prefix("pulled ") else {
        return;
    };
    let Some((amount_text, name)) = tail.split_once(' ') else {
        return;
    };
    let Some(amount) = parse_amount(amount_text).filter(|n| *n > 0) else {
        return;
    };
    let name = name.trim();
    if name.is_empty() {
        return;
    }
    state.add_pull(PullEntry {
        name: name.to_string(),
        amount: amount as u32,
        turn,
        day: state.current_day,
    });
}

/// "[130] Day 2"
fn parse_day(rest: &str, state: &mut SessionState) {
    let Some((turn, tail)) = bracketed_turn(rest) else {
        return;
    };
    let Some(day) = tail.strip_prefix("Day ").and_then(|d| parse_amount(d.trim())) else {
        return;
    };
    if day <= 0 {
        return;
    }
    let day = day as u32;
    while state.current_day < day {
        let next = state.current_day + 1;
        state.day_changes.push(DayChange::new(next, turn));
        state.current_day = next;
    }
}

/// "[135] Level 5"
fn parse_level(rest: &str, state: &mut SessionState) {
    let Some((turn, tail)) = bracketed_turn(rest) else {
        return;
    };
    let Some(level) = tail
        .strip_prefix("Level ")
        .and_then(|l| parse_amount(l.trim()))
        .filter(|l| *l > 1)
    else {
        return;
    };
    state.add_level(LevelReached {
        level: level as u32,
        turn,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascent_types::ParsingConfig;

    fn run(text: &str) -> SessionState {
        let mut reader = LogReader::from_bytes(text.as_bytes());
        let mut state = SessionState::new("test", &ParsingConfig::default());
        parse(&mut reader, &mut state);
        state
    }

    #[test]
    fn test_sniff() {
        let mut tagged = LogReader::from_bytes(b"[1] Noob Cave\n+> [1] Got pail\n");
        assert!(sniff(&mut tagged));
        assert_eq!(tagged.peek(0), Some("[1] Noob Cave"));

        let mut raw = LogReader::from_bytes(b"[1] Noob Cave\nEncounter: fleaman\n");
        assert!(!sniff(&mut raw));
    }

    #[test]
    fn test_intervals_fold_consecutive_areas() {
        let st = run("[1] Noob Cave\n[2] Noob Cave\n[3] The Spooky Forest\n[4] Noob Cave\n");
        let intervals = st.intervals();
        assert_eq!(intervals.len(), 3);
        assert_eq!(intervals[0].area, "Noob Cave");
        assert_eq!(intervals[0].start_turn(), 1);
        assert_eq!(intervals[0].end_turn(), 3);
        assert_eq!(intervals[1].area, "The Spooky Forest");
        assert_eq!(intervals[2].start_turn(), 4);
    }

    #[test]
    fn test_tagged_payloads() {
        let st = run(
            "[1] Noob Cave\n+> [1] Got pail, hot buttered roll\no> Ate 1 hell ramen (22 adventures gained)\n#> Turn [2] pulled 2 mojo filter\n@> [5] Day 2\n%> [7] Level 3\n",
        );
        let interval = &st.intervals()[0];
        assert_eq!(interval.items.len(), 2);
        assert_eq!(interval.consumables.len(), 1);
        assert_eq!(interval.consumables[0].adventure_gain, 22);
        assert_eq!(st.pulls().len(), 1);
        assert_eq!(st.pulls()[0].turn, 2);
        assert_eq!(st.day_changes().last().unwrap().day, 2);
        assert_eq!(st.day_changes().last().unwrap().turn, 5);
        assert_eq!(st.levels().last().unwrap(), &LevelReached { level: 3, turn: 7 });
    }
}
