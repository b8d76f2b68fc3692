//! Player snapshot blocks: a ruled header followed by "Key: value" lines
//! dumping the character sheet.
//!
//! Snapshots are also a reconciliation point: a day or level the line
//! parsers missed (truncated log, manual edits) is recovered here.

use crate::model::{LevelReached, PlayerSnapshot};
use crate::parser::line::parse_amount;
use crate::session::SessionState;

pub fn parse(lines: &[String], state: &mut SessionState) {
    let mut snapshot = PlayerSnapshot {
        turn: state.last_turn_number(),
        day: state.current_day,
        ..PlayerSnapshot::default()
    };

    for line in lines {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "Level" => snapshot.level = parse_u32(value).unwrap_or(0),
            "Muscle" => snapshot.muscle = raw_substats(value).unwrap_or(0),
            "Mysticality" => snapshot.mysticality = raw_substats(value).unwrap_or(0),
            "Moxie" => snapshot.moxie = raw_substats(value).unwrap_or(0),
            "Meat" => snapshot.meat = parse_amount(value).unwrap_or(0),
            "Adventures" => snapshot.adventures_left = parse_u32(value).unwrap_or(0),
            "Day" => snapshot.day = parse_u32(value).unwrap_or(snapshot.day),
            _ => {}
        }
    }

    if snapshot.day > state.current_day {
        state.add_day_change(snapshot.day);
    }
    if snapshot.level > state.last_level() {
        state.add_level(LevelReached {
            level: snapshot.level,
            turn: snapshot.turn,
        });
    }
    state.add_snapshot(snapshot);
}

fn parse_u32(value: &str) -> Option<u32> {
    parse_amount(value).filter(|n| *n >= 0).map(|n| n as u32)
}

/// "Muscle: 40 (1,650)" carries the buffed stat first and the raw
/// substat total in parentheses; the raw value is the one tracked.
fn raw_substats(value: &str) -> Option<i64> {
    match value.split_once(" (") {
        Some((_, raw)) => parse_amount(raw.trim_end_matches(')')),
        None => parse_amount(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascent_types::ParsingConfig;

    #[test]
    fn test_snapshot_parsed_and_reconciled() {
        let mut st = SessionState::new("test", &ParsingConfig::default());
        let lines: Vec<String> = [
            "========================",
            "     Player Snapshot",
            "========================",
            "Level: 5",
            "Muscle: 40 (1,650)",
            "Mysticality: 38 (1500)",
            "Moxie: 33 (1100)",
            "Meat: 12,340",
            "Adventures: 41",
            "Day: 2",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        parse(&lines, &mut st);

        let snap = st.snapshots().last().unwrap();
        assert_eq!(snap.level, 5);
        assert_eq!(snap.muscle, 1650);
        assert_eq!(snap.meat, 12340);
        assert_eq!(snap.adventures_left, 41);
        assert_eq!(snap.day, 2);

        // missed boundaries recovered from the snapshot
        assert_eq!(st.current_day, 2);
        assert_eq!(st.last_level(), 5);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let mut st = SessionState::new("test", &ParsingConfig::default());
        let lines: Vec<String> = ["Level: soon", "Meat: lots"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        parse(&lines, &mut st);
        let snap = st.snapshots().last().unwrap();
        assert_eq!(snap.level, 0);
        assert_eq!(snap.meat, 0);
        assert_eq!(snap.day, 1);
    }
}
