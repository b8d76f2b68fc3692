//! Post-pass fixups over the fully accumulated session.
//!
//! The streaming parse records changes as it sees them; a final walk over
//! the turn list settles everything that is cheaper to derive than to
//! track: per-turn equipment MP regeneration, and change histories
//! rebuilt from the snapshots every turn carries.

use crate::game_data::equipment_mp_regen;
use crate::model::{DayChange, EquipmentChange, FamiliarChange, FamiliarSnapshot};
use crate::session::SessionState;

pub fn finalize(state: &mut SessionState) {
    inject_equipment_mp_regen(state);
    // Pre-parsed logs carry only the synthetic start turn; their
    // histories came straight from the tags and must not be rebuilt.
    if state.turns().len() > 1 {
        rebuild_day_changes(state);
        rebuild_equipment_history(state);
        rebuild_familiar_history(state);
    }
}

/// Worn regeneration gear feeds MP every turn; the log never prints it,
/// so it is credited here from the equipment each turn carries.
fn inject_equipment_mp_regen(state: &mut SessionState) {
    for turn in &mut state.turns {
        let regen: i64 = turn
            .equipment
            .iter()
            .map(|(_, item)| equipment_mp_regen(item))
            .sum();
        if regen > 0 {
            turn.first_encounter_mut().mp_gain.out_of_encounter += regen;
        }
    }
}

/// Re-derive the day-change list from the day number each turn carries,
/// keeping any comments collected against the original entries. Turns
/// are the authority: a boundary the line parsers missed but a snapshot
/// recovered shows up here.
fn rebuild_day_changes(state: &mut SessionState) {
    let mut rebuilt = vec![DayChange::new(1, 0)];
    for turn in &state.turns {
        let last = rebuilt.last().map(|d| d.day).unwrap_or(1);
        // fill gaps so days stay contiguous
        for day in last + 1..=turn.day {
            rebuilt.push(DayChange::new(day, turn.number()));
        }
    }
    for old in &state.day_changes {
        if let Some(entry) = rebuilt.iter_mut().find(|d| d.day == old.day) {
            entry.comments.extend(old.comments.iter().cloned());
        }
    }
    state.day_changes = rebuilt;
}

fn rebuild_equipment_history(state: &mut SessionState) {
    let mut rebuilt: Vec<EquipmentChange> = Vec::new();
    for turn in &state.turns {
        let changed = rebuilt
            .last()
            .map(|c| c.snapshot != turn.equipment)
            .unwrap_or(true);
        if changed {
            rebuilt.push(EquipmentChange::new(turn.number(), turn.equipment.clone()));
        }
    }
    state.equipment_stack = rebuilt;
}

fn rebuild_familiar_history(state: &mut SessionState) {
    let mut rebuilt: Vec<FamiliarChange> = Vec::new();
    let mut current: Option<&FamiliarSnapshot> = None;
    for turn in &state.turns {
        if current.map(|f| f.name != turn.familiar.name).unwrap_or(true) {
            rebuilt.push(FamiliarChange::new(turn.number(), turn.familiar.name.clone()));
            current = Some(&turn.familiar);
        }
    }
    state.familiar_changes = rebuilt;
}
