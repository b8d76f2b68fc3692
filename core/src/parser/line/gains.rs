//! Stat, meat, and MP gain lines.

use crate::game_data::{
    MOXIE_SUBSTATS, MP_TOKENS, MUSCLE_SUBSTATS, MYST_SUBSTATS, STARFISH_FAMILIARS,
};
use crate::model::Statgain;
use crate::session::SessionState;

use super::{parse_amount, split_gain_line, LineParser};

/// Classify a substat gain line into its stat column, if it is one.
pub fn stat_gain_of(line: &str) -> Option<Statgain> {
    let (amount, name) = split_gain_line(line)?;
    if MUSCLE_SUBSTATS.contains(name) {
        Some(Statgain {
            muscle: amount,
            ..Statgain::ZERO
        })
    } else if MYST_SUBSTATS.contains(name) {
        Some(Statgain {
            mysticality: amount,
            ..Statgain::ZERO
        })
    } else if MOXIE_SUBSTATS.contains(name) {
        Some(Statgain {
            moxie: amount,
            ..Statgain::ZERO
        })
    } else {
        None
    }
}

/// Adventures granted by a consumable line, if it is one.
pub fn adventure_gain(line: &str) -> Option<i64> {
    let (amount, name) = split_gain_line(line)?;
    (name == "Adventures").then_some(amount)
}

fn mp_gain_of(line: &str) -> Option<i64> {
    let (amount, name) = split_gain_line(line)?;
    MP_TOKENS.contains(name).then_some(amount)
}

fn meat_gain_of(line: &str) -> Option<i64> {
    let (amount, name) = split_gain_line(line)?;
    (name == "Meat").then_some(amount)
}

// ─── Substats ────────────────────────────────────────────────────────────────

pub struct StatGainParser;

impl LineParser for StatGainParser {
    fn matches(&self, line: &str) -> bool {
        stat_gain_of(line).is_some()
    }

    fn parse(&self, line: &str, state: &mut SessionState) -> bool {
        let Some(gain) = stat_gain_of(line) else {
            return false;
        };
        let Some(turn) = state.last_turn_spent_mut() else {
            return false;
        };
        turn.current_encounter_mut().stat_gain += gain;
        true
    }
}

// ─── Meat ────────────────────────────────────────────────────────────────────

/// "You gain N Meat" inside an encounter block counts as drop meat;
/// losses are treated as spent.
pub struct EncounterMeatParser;

impl LineParser for EncounterMeatParser {
    fn matches(&self, line: &str) -> bool {
        meat_gain_of(line).is_some()
    }

    fn parse(&self, line: &str, state: &mut SessionState) -> bool {
        let Some(amount) = meat_gain_of(line) else {
            return false;
        };
        let Some(turn) = state.last_turn_spent_mut() else {
            return false;
        };
        let meat = &mut turn.current_encounter_mut().meat;
        if amount >= 0 {
            meat.encounter += amount;
        } else {
            meat.spent += -amount;
        }
        true
    }
}

/// Meat movement outside any encounter.
pub struct OtherMeatParser;

impl LineParser for OtherMeatParser {
    fn matches(&self, line: &str) -> bool {
        meat_gain_of(line).is_some()
    }

    fn parse(&self, line: &str, state: &mut SessionState) -> bool {
        let Some(amount) = meat_gain_of(line) else {
            return false;
        };
        let Some(turn) = state.last_turn_spent_mut() else {
            return false;
        };
        let meat = &mut turn.current_encounter_mut().meat;
        if amount >= 0 {
            meat.other += amount;
        } else {
            meat.spent += -amount;
        }
        true
    }
}

/// "buy N thing for M Meat each" lines record spent meat.
pub struct BuyParser;

impl LineParser for BuyParser {
    fn matches(&self, line: &str) -> bool {
        line.starts_with("buy ") && line.contains(" Meat each")
    }

    fn parse(&self, line: &str, state: &mut SessionState) -> bool {
        let rest = match line.strip_prefix("buy ") {
            Some(rest) => rest,
            None => return false,
        };
        let Some((count_text, rest)) = rest.split_once(' ') else {
            return false;
        };
        let Some(count) = parse_amount(count_text) else {
            return false;
        };
        let Some(pos) = rest.rfind(" for ") else {
            return false;
        };
        let tail = &rest[pos + 5..];
        let Some((price_text, _)) = tail.split_once(' ') else {
            return false;
        };
        let Some(price) = parse_amount(price_text) else {
            return false;
        };
        let Some(total) = count.checked_mul(price) else {
            tracing::debug!(line, "buy total overflows, skipping");
            return false;
        };
        let Some(turn) = state.last_turn_spent_mut() else {
            return false;
        };
        turn.current_encounter_mut().meat.spent += total;
        true
    }
}

/// "autosell: 5 useless powder". The client never logs the proceeds, so
/// the sale is claimed without touching the meat columns; a "You gain N
/// Meat" line, when one follows, is picked up on its own.
pub struct AutosellParser;

impl LineParser for AutosellParser {
    fn matches(&self, line: &str) -> bool {
        line.starts_with("autosell: ")
    }

    fn parse(&self, line: &str, _state: &mut SessionState) -> bool {
        let rest = &line["autosell: ".len()..];
        let Some((count_text, name)) = rest.split_once(' ') else {
            return false;
        };
        if parse_amount(count_text).is_none() || name.trim().is_empty() {
            return false;
        }
        tracing::trace!(line, "autosell with unlogged proceeds");
        true
    }
}

// ─── Mana ────────────────────────────────────────────────────────────────────

/// Where an MP gain came from, deciding which column it lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpContext {
    /// Inside a combat or noncombat. Upgraded to the starfish column when
    /// the active familiar is an MP-stealing one.
    Encounter,
    Resting,
    OutOfEncounter,
}

pub struct MpGainParser {
    pub context: MpContext,
}

impl LineParser for MpGainParser {
    fn matches(&self, line: &str) -> bool {
        mp_gain_of(line).is_some()
    }

    fn parse(&self, line: &str, state: &mut SessionState) -> bool {
        let Some(amount) = mp_gain_of(line) else {
            return false;
        };
        if amount <= 0 {
            // MP losses carry no tracking value
            return true;
        }
        let starfish = self.context == MpContext::Encounter
            && STARFISH_FAMILIARS.contains(state.current_familiar().name.as_str());
        let Some(turn) = state.last_turn_spent_mut() else {
            return false;
        };
        let mp = &mut turn.current_encounter_mut().mp_gain;
        match self.context {
            MpContext::Encounter if starfish => mp.starfish += amount,
            MpContext::Encounter => mp.encounter += amount,
            MpContext::Resting => mp.resting += amount,
            MpContext::OutOfEncounter => mp.out_of_encounter += amount,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FamiliarSnapshot;
    use ascent_types::ParsingConfig;

    fn state() -> SessionState {
        SessionState::new("test", &ParsingConfig::default())
    }

    #[test]
    fn test_stat_gain_columns() {
        assert_eq!(
            stat_gain_of("You gain 15 Strongness"),
            Some(Statgain::new(15, 0, 0))
        );
        assert_eq!(
            stat_gain_of("You gain 8 Wizardliness."),
            Some(Statgain::new(0, 8, 0))
        );
        assert_eq!(
            stat_gain_of("You lose 50 Chutzpah"),
            Some(Statgain::new(0, 0, -50))
        );
        assert_eq!(stat_gain_of("You gain 11 Mana Points"), None);
    }

    #[test]
    fn test_meat_gain_and_loss() {
        let mut st = state();
        let p = EncounterMeatParser;
        assert!(p.try_parse("You gain 120 Meat.", &mut st));
        assert!(p.try_parse("You lose 30 Meat", &mut st));
        let meat = st.last_turn_spent().unwrap().meat();
        assert_eq!(meat.encounter, 120);
        assert_eq!(meat.spent, 30);
    }

    #[test]
    fn test_buy_line() {
        let mut st = state();
        assert!(BuyParser.try_parse("buy 3 soda water for 70 Meat each", &mut st));
        assert_eq!(st.last_turn_spent().unwrap().meat().spent, 210);
    }

    #[test]
    fn test_autosell_claims_line_without_meat() {
        let mut st = state();
        assert!(AutosellParser.try_parse("autosell: 5 useless powder", &mut st));
        assert_eq!(st.last_turn_spent().unwrap().meat().spent, 0);
        assert_eq!(st.last_turn_spent().unwrap().meat().gained(), 0);
        assert!(AutosellParser.matches("autosell: junk"));
        assert!(!AutosellParser.parse("autosell: junk", &mut st));
    }

    #[test]
    fn test_buy_total_overflow_dropped() {
        let mut st = state();
        let line = format!("buy {} soda water for 9 Meat each", i64::MAX);
        assert!(BuyParser.matches(&line));
        assert!(!BuyParser.parse(&line, &mut st));
        assert_eq!(st.last_turn_spent().unwrap().meat().spent, 0);
    }

    #[test]
    fn test_mp_starfish_upgrade() {
        let mut st = state();
        st.set_current_familiar(FamiliarSnapshot::new("Star Starfish", 10));
        let p = MpGainParser {
            context: MpContext::Encounter,
        };
        assert!(p.try_parse("You gain 12 Mana Points", &mut st));
        let mp = st.last_turn_spent().unwrap().mp_gain();
        assert_eq!(mp.starfish, 12);
        assert_eq!(mp.encounter, 0);
    }

    #[test]
    fn test_adventure_gain() {
        assert_eq!(adventure_gain("You gain 11 Adventures."), Some(11));
        assert_eq!(adventure_gain("You gain 11 Mana Points"), None);
    }
}
