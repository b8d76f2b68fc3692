//! Equipment commands and familiar switches.
//!
//! Gear changes take effect the turn after the command is logged, so each
//! change is recorded against `last_turn_number() + 1`.

use crate::model::{EquipmentChange, EquipmentSlot, EquipmentSnapshot, FamiliarSnapshot};
use crate::session::SessionState;

use super::{parse_amount, LineParser};

/// Strip an ASCII command verb from the front of the line, ignoring the
/// case the client logged it in.
fn strip_verb<'a>(line: &'a str, verb: &str) -> Option<&'a str> {
    let head = line.get(..verb.len())?;
    head.eq_ignore_ascii_case(verb).then(|| &line[verb.len()..])
}

/// "equip hat beer helmet"
pub struct EquipParser;

impl LineParser for EquipParser {
    fn matches(&self, line: &str) -> bool {
        strip_verb(line, "equip ").is_some()
    }

    fn parse(&self, line: &str, state: &mut SessionState) -> bool {
        let Some(rest) = strip_verb(line, "equip ") else {
            return false;
        };
        let Some((slot_word, item)) = rest.split_once(' ') else {
            return false;
        };
        let Some(slot) = EquipmentSlot::from_command(&slot_word.to_lowercase()) else {
            return false;
        };
        let item = item.trim();
        if item.is_empty() {
            return false;
        }
        let mut snapshot = state.current_equipment();
        snapshot.set(slot, item);
        state.add_equipment_change(EquipmentChange::new(state.last_turn_number() + 1, snapshot));
        true
    }
}

/// "unequip acc2" (a bare "unequip" clears every slot)
pub struct UnequipParser;

impl LineParser for UnequipParser {
    fn matches(&self, line: &str) -> bool {
        line.eq_ignore_ascii_case("unequip") || strip_verb(line, "unequip ").is_some()
    }

    fn parse(&self, line: &str, state: &mut SessionState) -> bool {
        let mut snapshot = state.current_equipment();
        match strip_verb(line, "unequip ") {
            Some(slot_word) => {
                let Some(slot) = EquipmentSlot::from_command(&slot_word.trim().to_lowercase())
                else {
                    return false;
                };
                snapshot.clear(slot);
            }
            None => {
                for slot in EquipmentSlot::ALL {
                    snapshot.clear(slot);
                }
            }
        }
        state.add_equipment_change(EquipmentChange::new(state.last_turn_number() + 1, snapshot));
        true
    }
}

/// "outfit Furry Suit" / "custom outfit speed run" swap the whole
/// loadout; "custom outfit backup" and "outfit previous" restore the
/// loadout worn before the last change by popping the change stack. A
/// named swap does not itemize its pieces, so the snapshot resets to
/// empty until the next explicit equip (the per-turn rebuild repairs
/// the history afterwards).
pub struct OutfitParser;

impl LineParser for OutfitParser {
    fn matches(&self, line: &str) -> bool {
        outfit_name(line).is_some()
    }

    fn parse(&self, line: &str, state: &mut SessionState) -> bool {
        let Some(name) = outfit_name(line) else {
            return false;
        };
        if name.is_empty() {
            return false;
        }
        if name.eq_ignore_ascii_case("backup") || name.eq_ignore_ascii_case("previous") {
            state.pop_equipment_change();
            return true;
        }
        if name.eq_ignore_ascii_case("save") || strip_verb(name, "save ").is_some() {
            // Saving the current loadout under a name changes nothing
            return true;
        }
        state.add_equipment_change(EquipmentChange::new(
            state.last_turn_number() + 1,
            EquipmentSnapshot::default(),
        ));
        true
    }
}

fn outfit_name(line: &str) -> Option<&str> {
    strip_verb(line, "custom outfit ")
        .or_else(|| strip_verb(line, "outfit "))
        .map(str::trim)
}

/// "familiar Leprechaun (5 lbs)" or "familiar none"
pub struct FamiliarParser;

impl LineParser for FamiliarParser {
    fn matches(&self, line: &str) -> bool {
        strip_verb(line, "familiar ").is_some()
    }

    fn parse(&self, line: &str, state: &mut SessionState) -> bool {
        let Some(rest) = strip_verb(line, "familiar ") else {
            return false;
        };
        let rest = rest.trim();
        if rest == "none" {
            state.set_current_familiar(FamiliarSnapshot::default());
            return true;
        }
        let familiar = match rest.rfind(" (") {
            Some(open) if rest.ends_with(" lbs)") => {
                let pounds_text = &rest[open + 2..rest.len() - " lbs)".len()];
                let pounds = parse_amount(pounds_text).unwrap_or(0).max(0) as u32;
                FamiliarSnapshot::new(rest[..open].trim(), pounds)
            }
            _ => FamiliarSnapshot::new(rest, 0),
        };
        if familiar.name.is_empty() {
            return false;
        }
        state.set_current_familiar(familiar);
        true
    }
}
