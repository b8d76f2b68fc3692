//! Read-only view of a fully parsed and corrected session.
//!
//! This is the only surface external consumers (summary calculators,
//! chart frontends, the CLI) see; nothing here is mutable.

use ascent_types::ChallengePath;
use serde::Serialize;

use crate::model::{
    DayChange, EquipmentChange, FamiliarChange, LevelReached, PlayerSnapshot, PullEntry, Turn,
    TurnInterval,
};

use super::SessionState;

#[derive(Debug, Clone, Serialize)]
pub struct LogSession {
    log_name: String,
    challenge_path: ChallengePath,
    turns: Vec<Turn>,
    intervals: Vec<TurnInterval>,
    day_changes: Vec<DayChange>,
    equipment_changes: Vec<EquipmentChange>,
    familiar_changes: Vec<FamiliarChange>,
    pulls: Vec<PullEntry>,
    levels: Vec<LevelReached>,
    snapshots: Vec<PlayerSnapshot>,
}

impl LogSession {
    pub(crate) fn from_state(state: SessionState) -> Self {
        Self {
            log_name: state.log_name,
            challenge_path: state.path,
            turns: state.turns,
            intervals: state.intervals,
            day_changes: state.day_changes,
            equipment_changes: state.equipment_stack,
            familiar_changes: state.familiar_changes,
            pulls: state.pulls,
            levels: state.levels,
            snapshots: state.snapshots,
        }
    }

    pub fn log_name(&self) -> &str {
        &self.log_name
    }

    pub fn challenge_path(&self) -> ChallengePath {
        self.challenge_path
    }

    /// The ordered turn timeline (turn 0 is the synthetic run start).
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Per-area turn ranges; populated for pre-parsed logs, empty for raw
    /// logs (use [`crate::summary::LogSummary`] for derived intervals).
    pub fn intervals(&self) -> &[TurnInterval] {
        &self.intervals
    }

    pub fn day_changes(&self) -> &[DayChange] {
        &self.day_changes
    }

    pub fn equipment_changes(&self) -> &[EquipmentChange] {
        &self.equipment_changes
    }

    pub fn familiar_changes(&self) -> &[FamiliarChange] {
        &self.familiar_changes
    }

    pub fn pulls(&self) -> &[PullEntry] {
        &self.pulls
    }

    pub fn levels(&self) -> &[LevelReached] {
        &self.levels
    }

    pub fn snapshots(&self) -> &[PlayerSnapshot] {
        &self.snapshots
    }

    /// Total adventures recorded, excluding the synthetic run start.
    pub fn total_turns(&self) -> u32 {
        let from_turns = self.turns.last().map(|t| t.number()).unwrap_or(0);
        let from_intervals = self
            .intervals
            .last()
            .map(|i| i.end_turn())
            .unwrap_or(0);
        from_turns.max(from_intervals)
    }
}
