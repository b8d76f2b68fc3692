//! Timeline change records: equipment, familiar, day and level boundaries,
//! storage pulls and player snapshots.

use serde::{Deserialize, Serialize};

use super::EquipmentSnapshot;

/// The full equipment loadout as of a given turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentChange {
    pub turn: u32,
    pub snapshot: EquipmentSnapshot,
}

impl EquipmentChange {
    pub fn new(turn: u32, snapshot: EquipmentSnapshot) -> Self {
        Self { turn, snapshot }
    }
}

/// Familiar switch effective from a given turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamiliarChange {
    pub turn: u32,
    pub familiar: String,
}

impl FamiliarChange {
    pub fn new(turn: u32, familiar: impl Into<String>) -> Self {
        Self {
            turn,
            familiar: familiar.into(),
        }
    }
}

/// Rollover to a new in-game day. The comment lines are free-form header
/// text the log attached around the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayChange {
    pub day: u32,
    pub turn: u32,
    pub comments: Vec<String>,
}

impl DayChange {
    pub fn new(day: u32, turn: u32) -> Self {
        Self {
            day,
            turn,
            comments: Vec::new(),
        }
    }
}

/// A level milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelReached {
    pub level: u32,
    pub turn: u32,
}

/// An item pulled from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullEntry {
    pub name: String,
    pub amount: u32,
    pub turn: u32,
    pub day: u32,
}

/// Player state captured by a snapshot block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub turn: u32,
    pub day: u32,
    pub level: u32,
    pub muscle: i64,
    pub mysticality: i64,
    pub moxie: i64,
    pub meat: i64,
    pub adventures_left: u32,
}
