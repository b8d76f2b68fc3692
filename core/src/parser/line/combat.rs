//! Combat round lines: skill casts, combat item use, runaways, and the
//! flags that mark a monster as banished or disintegrated.

use crate::game_data::{
    BANISH_COMBAT_ITEMS, BANISH_SKILLS, DISINTEGRATE_MARKER, FREE_RUNAWAY_MARKERS,
};
use crate::model::{CombatItem, Skill};
use crate::session::SessionState;

use super::LineParser;

/// Strip "Round N: " and return the rest, or None for non-round lines.
fn round_payload(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("Round ")?;
    let (round, payload) = rest.split_once(": ")?;
    round.bytes().all(|b| b.is_ascii_digit()).then_some(payload)
}

/// The actor named at the start of a round payload is the player when no
/// name is configured, or when it matches the configured one.
fn is_player(actor: &str, state: &SessionState) -> bool {
    match &state.player_name {
        Some(name) => actor.eq_ignore_ascii_case(name),
        None => true,
    }
}

/// "Round 2: Beholder casts BANISHING SHOUT!"
pub struct SkillCastParser;

impl LineParser for SkillCastParser {
    fn matches(&self, line: &str) -> bool {
        round_payload(line).is_some_and(|p| p.contains(" casts "))
    }

    fn parse(&self, line: &str, state: &mut SessionState) -> bool {
        let Some(payload) = round_payload(line) else {
            return false;
        };
        let Some((actor, skill)) = payload.split_once(" casts ") else {
            return false;
        };
        if !is_player(actor, state) {
            return true;
        }
        // One bang is the log's own punctuation; more belong to the name
        let skill = skill.trim().strip_suffix('!').unwrap_or(skill).trim();
        if skill.is_empty() {
            return false;
        }
        let banish = BANISH_SKILLS.contains(skill);
        let Some(turn) = state.last_turn_spent_mut() else {
            return false;
        };
        let number = turn.number();
        let encounter = turn.current_encounter_mut();
        encounter.add_skill(Skill::new(skill, 1, number));
        if banish {
            encounter.set_banished(skill);
        }
        true
    }
}

/// "Round 3: Beholder uses the smoke grenade!"
pub struct CombatItemParser;

impl LineParser for CombatItemParser {
    fn matches(&self, line: &str) -> bool {
        round_payload(line).is_some_and(|p| p.contains(" uses the "))
    }

    fn parse(&self, line: &str, state: &mut SessionState) -> bool {
        let Some(payload) = round_payload(line) else {
            return false;
        };
        let Some((actor, item)) = payload.split_once(" uses the ") else {
            return false;
        };
        if !is_player(actor, state) {
            return true;
        }
        let item = item.trim().strip_suffix('!').unwrap_or(item).trim();
        if item.is_empty() {
            return false;
        }
        let banish = BANISH_COMBAT_ITEMS.contains(item);
        let Some(turn) = state.last_turn_spent_mut() else {
            return false;
        };
        let number = turn.number();
        let encounter = turn.current_encounter_mut();
        encounter.add_combat_item(CombatItem::new(item, 1, number));
        if banish {
            encounter.set_banished(item);
        }
        true
    }
}

/// A successful free runaway leaves the fight without spending the turn's
/// adventure; the flavor text is the only trace.
pub struct FreeRunawayParser;

impl LineParser for FreeRunawayParser {
    fn matches(&self, line: &str) -> bool {
        FREE_RUNAWAY_MARKERS.iter().any(|m| line.contains(m))
    }

    fn parse(&self, _line: &str, state: &mut SessionState) -> bool {
        let Some(turn) = state.last_turn_spent_mut() else {
            return false;
        };
        turn.current_encounter_mut().free_runaways += 1;
        true
    }
}

pub struct DisintegrateParser;

impl LineParser for DisintegrateParser {
    fn matches(&self, line: &str) -> bool {
        line.contains(DISINTEGRATE_MARKER)
    }

    fn parse(&self, _line: &str, state: &mut SessionState) -> bool {
        let Some(turn) = state.last_turn_spent_mut() else {
            return false;
        };
        turn.current_encounter_mut().set_disintegrated(true);
        true
    }
}
