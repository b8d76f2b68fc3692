//! The reconstructed-timeline data model.
//!
//! Everything here is created during block/line parsing, appended to the
//! session accumulator, and never mutated again except by the recorded
//! post-pass corrections (MP-regen injection and history rebuilds).

mod changes;
mod equipment;
mod gains;
mod interval;
mod possessions;
mod turn;

pub use changes::{
    DayChange, EquipmentChange, FamiliarChange, LevelReached, PlayerSnapshot, PullEntry,
};
pub use equipment::{EquipmentSlot, EquipmentSnapshot, FamiliarSnapshot, NO_EQUIP};
pub use gains::{MeatGain, MpGain, Statgain};
pub use interval::TurnInterval;
pub use possessions::{CombatItem, Consumable, ConsumableCategory, Item, Skill};
pub use turn::{Encounter, Turn, TurnVersion};
