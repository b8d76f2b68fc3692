//! Items, skills, combat items and consumables.
//!
//! All four are immutable values tagged with the turn that owns them.
//! Reassigning one to a different turn goes through `with_turn`, which
//! clones and re-tags, so a record's turn number always equals the turn
//! that holds it.

use serde::{Deserialize, Serialize};

use super::Statgain;

/// An item found or otherwise acquired on a specific turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub amount: u32,
    pub found_turn: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, amount: u32, found_turn: u32) -> Self {
        Self {
            name: name.into(),
            amount,
            found_turn,
        }
    }

    pub fn with_turn(&self, turn: u32) -> Self {
        Self {
            found_turn: turn,
            ..self.clone()
        }
    }
}

/// A skill cast one or more times on a specific turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub casts: u32,
    pub turn: u32,
}

impl Skill {
    pub fn new(name: impl Into<String>, casts: u32, turn: u32) -> Self {
        Self {
            name: name.into(),
            casts,
            turn,
        }
    }

    pub fn with_turn(&self, turn: u32) -> Self {
        Self {
            turn,
            ..self.clone()
        }
    }
}

/// A combat item used during a fight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatItem {
    pub name: String,
    pub uses: u32,
    pub turn: u32,
}

impl CombatItem {
    pub fn new(name: impl Into<String>, uses: u32, turn: u32) -> Self {
        Self {
            name: name.into(),
            uses,
            turn,
        }
    }

    pub fn with_turn(&self, turn: u32) -> Self {
        Self {
            turn,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsumableCategory {
    Food,
    Booze,
    Spleen,
    #[default]
    Other,
}

/// Something eaten, drunk, chewed or used, with the gains it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumable {
    pub name: String,
    pub category: ConsumableCategory,
    pub adventure_gain: i64,
    pub amount: u32,
    pub turn: u32,
    pub day: u32,
    pub stat_gain: Statgain,
}

impl Consumable {
    pub fn new(
        name: impl Into<String>,
        category: ConsumableCategory,
        amount: u32,
        turn: u32,
        day: u32,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            adventure_gain: 0,
            amount,
            turn,
            day,
            stat_gain: Statgain::ZERO,
        }
    }

    pub fn with_turn(&self, turn: u32) -> Self {
        Self {
            turn,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_turn_retags_but_preserves_data() {
        let item = Item::new("spooky sapling", 2, 5);
        let moved = item.with_turn(9);
        assert_eq!(moved.found_turn, 9);
        assert_eq!(moved.name, "spooky sapling");
        assert_eq!(moved.amount, 2);
        // Original is untouched
        assert_eq!(item.found_turn, 5);
    }

    #[test]
    fn test_consumable_with_turn() {
        let mut food = Consumable::new("hell ramen", ConsumableCategory::Food, 1, 10, 2);
        food.adventure_gain = 20;
        food.stat_gain = Statgain::new(0, 30, 0);
        let moved = food.with_turn(12);
        assert_eq!(moved.turn, 12);
        assert_eq!(moved.adventure_gain, 20);
        assert_eq!(moved.day, 2);
    }
}
