//! Contiguous turn ranges sharing one area.
//!
//! Used when per-turn detail is unavailable (pre-parsed logs) and for
//! per-area aggregation in summaries. The range is half-open: an interval
//! covers turns `start_turn..end_turn`.

use serde::{Deserialize, Serialize};

use super::{Consumable, Item, MeatGain, MpGain, Skill, Statgain, Turn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnInterval {
    pub area: String,
    start_turn: u32,
    end_turn: u32,
    pub stat_gain: Statgain,
    pub mp_gain: MpGain,
    pub meat: MeatGain,
    pub free_runaways: u32,
    pub items: Vec<Item>,
    pub skills: Vec<Skill>,
    pub consumables: Vec<Consumable>,
    pub notes: String,
}

impl TurnInterval {
    pub fn new(area: impl Into<String>, start_turn: u32, end_turn: u32) -> Self {
        Self {
            area: area.into(),
            start_turn,
            end_turn: end_turn.max(start_turn),
            stat_gain: Statgain::ZERO,
            mp_gain: MpGain::default(),
            meat: MeatGain::default(),
            free_runaways: 0,
            items: Vec::new(),
            skills: Vec::new(),
            consumables: Vec::new(),
            notes: String::new(),
        }
    }

    pub fn start_turn(&self) -> u32 {
        self.start_turn
    }

    pub fn end_turn(&self) -> u32 {
        self.end_turn
    }

    pub fn turn_count(&self) -> u32 {
        self.end_turn - self.start_turn
    }

    pub fn contains(&self, turn: u32) -> bool {
        (self.start_turn..self.end_turn).contains(&turn)
    }

    /// Intervals are ordered by (start, end).
    pub fn ordering_key(&self) -> (u32, u32) {
        (self.start_turn, self.end_turn)
    }

    /// Push the end of the range forward. Never shrinks.
    pub fn extend_to(&mut self, end_turn: u32) {
        self.end_turn = self.end_turn.max(end_turn);
    }

    /// Fold a turn's deltas into this interval, extending the range to
    /// cover it.
    pub fn absorb_turn(&mut self, turn: &Turn) {
        self.extend_to(turn.number() + 1);
        self.stat_gain += turn.stat_gain();
        self.mp_gain += turn.mp_gain();
        self.meat += turn.meat();
        self.free_runaways += turn.free_runaways();
        for item in turn.items() {
            self.add_item(item.clone());
        }
        for skill in turn.skills() {
            self.add_skill(skill.clone());
        }
        for consumable in turn.consumables() {
            self.consumables.push(consumable.clone());
        }
    }

    pub fn add_item(&mut self, item: Item) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.name == item.name) {
            existing.amount += item.amount;
        } else {
            self.items.push(item);
        }
    }

    pub fn add_skill(&mut self, skill: Skill) {
        if let Some(existing) = self.skills.iter_mut().find(|s| s.name == skill.name) {
            existing.casts += skill.casts;
        } else {
            self.skills.push(skill);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EquipmentSnapshot, FamiliarSnapshot};

    #[test]
    fn test_half_open_range() {
        let interval = TurnInterval::new("The Spooky Forest", 5, 9);
        assert_eq!(interval.turn_count(), 4);
        assert!(interval.contains(5));
        assert!(interval.contains(8));
        assert!(!interval.contains(9));
    }

    #[test]
    fn test_absorb_extends_and_accumulates() {
        let mut interval = TurnInterval::new("The Spooky Forest", 5, 6);
        let mut turn = Turn::new(
            7,
            1,
            "The Spooky Forest",
            "spooky vampire",
            EquipmentSnapshot::default(),
            FamiliarSnapshot::default(),
        );
        turn.current_encounter_mut().stat_gain += Statgain::new(10, 0, 0);
        interval.absorb_turn(&turn);
        assert_eq!(interval.end_turn(), 8);
        assert_eq!(interval.stat_gain.muscle, 10);
    }

    #[test]
    fn test_ordering_key() {
        let a = TurnInterval::new("a", 1, 5);
        let b = TurnInterval::new("b", 1, 7);
        let c = TurnInterval::new("c", 2, 3);
        let mut v = vec![c.clone(), b.clone(), a.clone()];
        v.sort_by_key(TurnInterval::ordering_key);
        assert_eq!(v[0].area, "a");
        assert_eq!(v[1].area, "b");
        assert_eq!(v[2].area, "c");
    }
}
