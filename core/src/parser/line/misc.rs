//! Day boundaries, level-ups, and free-form note lines.

use crate::model::LevelReached;
use crate::session::SessionState;

use super::{parse_amount, LineParser};

/// "===== Day 2 ====="
pub struct DayChangeParser;

impl LineParser for DayChangeParser {
    fn matches(&self, line: &str) -> bool {
        line.starts_with("===== Day ")
    }

    fn parse(&self, line: &str, state: &mut SessionState) -> bool {
        let rest = &line["===== Day ".len()..];
        let digits = rest.trim_end_matches(['=', ' ']);
        let Some(day) = parse_amount(digits).filter(|d| *d > 0) else {
            return false;
        };
        state.add_day_change(day as u32);
        true
    }
}

/// "You gain a Level (now Level 5)."
pub struct LevelParser;

impl LineParser for LevelParser {
    fn matches(&self, line: &str) -> bool {
        line.starts_with("You gain a Level")
    }

    fn parse(&self, line: &str, state: &mut SessionState) -> bool {
        let Some(open) = line.find("(now Level ") else {
            return false;
        };
        let rest = &line[open + "(now Level ".len()..];
        let Some(close) = rest.find(')') else {
            return false;
        };
        let Some(level) = parse_amount(&rest[..close]).filter(|l| *l > 1) else {
            return false;
        };
        state.add_level(LevelReached {
            level: level as u32,
            turn: state.last_turn_number(),
        });
        true
    }
}

/// "> free-form player note". Notes written right after a day boundary
/// attach to the boundary itself, later ones to the current turn.
pub struct NoteParser;

impl LineParser for NoteParser {
    fn matches(&self, line: &str) -> bool {
        line.starts_with("> ")
    }

    fn parse(&self, line: &str, state: &mut SessionState) -> bool {
        let note = line[2..].trim();
        if note.is_empty() {
            return true;
        }
        if state.day_comment_pending() {
            state.add_day_comment(note);
        } else if let Some(turn) = state.last_turn_spent_mut() {
            turn.current_encounter_mut().add_note(note);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascent_types::ParsingConfig;

    fn state() -> SessionState {
        SessionState::new("test", &ParsingConfig::default())
    }

    #[test]
    fn test_day_boundary() {
        let mut st = state();
        assert!(DayChangeParser.try_parse("===== Day 2 =====", &mut st));
        assert_eq!(st.current_day, 2);
        assert_eq!(st.day_changes().len(), 2);
    }

    #[test]
    fn test_level_up() {
        let mut st = state();
        assert!(LevelParser.try_parse("You gain a Level (now Level 5).", &mut st));
        assert_eq!(st.levels().last().unwrap().level, 5);
        // regressions are dropped
        assert!(LevelParser.try_parse("You gain a Level (now Level 3).", &mut st));
        assert_eq!(st.levels().last().unwrap().level, 5);
    }

    #[test]
    fn test_note_routing() {
        let mut st = state();
        assert!(NoteParser.try_parse("> before anything", &mut st));
        assert_eq!(
            st.last_turn_spent().unwrap().current_encounter().notes,
            "before anything"
        );

        DayChangeParser.try_parse("===== Day 2 =====", &mut st);
        assert!(NoteParser.try_parse("> rollover plan", &mut st));
        assert_eq!(
            st.day_changes().last().unwrap().comments,
            vec!["rollover plan".to_string()]
        );
    }
}
