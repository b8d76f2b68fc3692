//! Service blocks: the ascension header and Grey Goo hybridizing notes.

use ascent_types::ChallengePath;

use crate::session::SessionState;

/// "Ascension #42:" blocks carry run metadata. The challenge path drives
/// shore-trip accounting, so it is picked up unless the config pinned
/// one; the player name narrows combat-round attribution.
pub fn parse_ascension_data(lines: &[String], state: &mut SessionState) {
    for line in lines {
        if let Some(path_name) = line.strip_prefix("Path: ") {
            let path = ChallengePath::from_name(path_name);
            tracing::debug!(path_name, ?path, "challenge path from log");
            state.set_path_from_log(path);
        } else if let Some(player) = line.strip_prefix("Player: ") {
            if state.player_name.is_none() {
                state.player_name = Some(player.trim().to_string());
            }
        }
    }
}

/// Hybridizing costs no adventure; the line is kept as a note on the
/// current turn so the timeline shows when it happened.
pub fn parse_hybrid(lines: &[String], state: &mut SessionState) {
    let Some(turn) = state.last_turn_spent_mut() else {
        return;
    };
    for line in lines {
        if line.contains("hybridizing") {
            turn.current_encounter_mut().add_note(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascent_types::ParsingConfig;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_path_from_log() {
        let mut st = SessionState::new("test", &ParsingConfig::default());
        parse_ascension_data(
            &lines(&["Ascension #42:", "Class: Pastamancer", "Path: Teetotaler"]),
            &mut st,
        );
        assert_eq!(st.path, ChallengePath::Teetotaler);
    }

    #[test]
    fn test_config_path_wins_over_log() {
        let config = ParsingConfig {
            challenge_path: ChallengePath::Oxygenarian,
            ..ParsingConfig::default()
        };
        let mut st = SessionState::new("test", &config);
        parse_ascension_data(&lines(&["Path: Teetotaler"]), &mut st);
        assert_eq!(st.path, ChallengePath::Oxygenarian);
    }

    #[test]
    fn test_player_name_from_log() {
        let mut st = SessionState::new("test", &ParsingConfig::default());
        parse_ascension_data(&lines(&["Player: Beholder"]), &mut st);
        assert_eq!(st.player_name.as_deref(), Some("Beholder"));
    }
}
