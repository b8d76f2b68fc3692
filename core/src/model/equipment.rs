//! Equipment and familiar snapshots carried by every turn.

use serde::{Deserialize, Serialize};

/// Sentinel for an empty slot or no familiar.
pub const NO_EQUIP: &str = "none";

/// The nine equipment slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Hat,
    Weapon,
    Offhand,
    Shirt,
    Pants,
    Acc1,
    Acc2,
    Acc3,
    FamEquip,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 9] = [
        EquipmentSlot::Hat,
        EquipmentSlot::Weapon,
        EquipmentSlot::Offhand,
        EquipmentSlot::Shirt,
        EquipmentSlot::Pants,
        EquipmentSlot::Acc1,
        EquipmentSlot::Acc2,
        EquipmentSlot::Acc3,
        EquipmentSlot::FamEquip,
    ];

    /// Resolve a slot word as it appears in (lower-cased) equip commands.
    pub fn from_command(word: &str) -> Option<Self> {
        match word {
            "hat" => Some(EquipmentSlot::Hat),
            "weapon" => Some(EquipmentSlot::Weapon),
            "off-hand" | "offhand" => Some(EquipmentSlot::Offhand),
            "shirt" => Some(EquipmentSlot::Shirt),
            "pants" => Some(EquipmentSlot::Pants),
            "acc1" => Some(EquipmentSlot::Acc1),
            "acc2" => Some(EquipmentSlot::Acc2),
            "acc3" => Some(EquipmentSlot::Acc3),
            "familiar" => Some(EquipmentSlot::FamEquip),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            EquipmentSlot::Hat => 0,
            EquipmentSlot::Weapon => 1,
            EquipmentSlot::Offhand => 2,
            EquipmentSlot::Shirt => 3,
            EquipmentSlot::Pants => 4,
            EquipmentSlot::Acc1 => 5,
            EquipmentSlot::Acc2 => 6,
            EquipmentSlot::Acc3 => 7,
            EquipmentSlot::FamEquip => 8,
        }
    }
}

/// Immutable view of all nine slots at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentSnapshot {
    slots: [String; 9],
}

impl Default for EquipmentSnapshot {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| NO_EQUIP.to_string()),
        }
    }
}

impl EquipmentSnapshot {
    pub fn get(&self, slot: EquipmentSlot) -> &str {
        &self.slots[slot.index()]
    }

    pub fn set(&mut self, slot: EquipmentSlot, item: impl Into<String>) {
        let item = item.into();
        self.slots[slot.index()] = if item.is_empty() {
            NO_EQUIP.to_string()
        } else {
            item
        };
    }

    pub fn clear(&mut self, slot: EquipmentSlot) {
        self.slots[slot.index()] = NO_EQUIP.to_string();
    }

    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &str)> {
        EquipmentSlot::ALL
            .iter()
            .map(|&slot| (slot, self.get(slot)))
    }

    /// How many slots currently carry the given item (accessories can be
    /// worn in multiples).
    pub fn worn_count(&self, item: &str) -> usize {
        self.slots.iter().filter(|s| s.as_str() == item).count()
    }
}

/// The active familiar and its weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamiliarSnapshot {
    pub name: String,
    pub pounds: u32,
}

impl Default for FamiliarSnapshot {
    fn default() -> Self {
        Self {
            name: NO_EQUIP.to_string(),
            pounds: 0,
        }
    }
}

impl FamiliarSnapshot {
    pub fn new(name: impl Into<String>, pounds: u32) -> Self {
        Self {
            name: name.into(),
            pounds,
        }
    }

    pub fn is_none(&self) -> bool {
        self.name == NO_EQUIP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_all_none() {
        let snap = EquipmentSnapshot::default();
        for (_, item) in snap.iter() {
            assert_eq!(item, NO_EQUIP);
        }
    }

    #[test]
    fn test_set_and_clear() {
        let mut snap = EquipmentSnapshot::default();
        snap.set(EquipmentSlot::Hat, "beer helmet");
        assert_eq!(snap.get(EquipmentSlot::Hat), "beer helmet");
        snap.clear(EquipmentSlot::Hat);
        assert_eq!(snap.get(EquipmentSlot::Hat), NO_EQUIP);
    }

    #[test]
    fn test_worn_count_for_stacked_accessories() {
        let mut snap = EquipmentSnapshot::default();
        snap.set(EquipmentSlot::Acc1, "lucky rabbit's foot");
        snap.set(EquipmentSlot::Acc2, "lucky rabbit's foot");
        assert_eq!(snap.worn_count("lucky rabbit's foot"), 2);
    }

    #[test]
    fn test_slot_from_command() {
        assert_eq!(EquipmentSlot::from_command("acc2"), Some(EquipmentSlot::Acc2));
        assert_eq!(
            EquipmentSlot::from_command("off-hand"),
            Some(EquipmentSlot::Offhand)
        );
        assert_eq!(EquipmentSlot::from_command("hand"), None);
    }
}
