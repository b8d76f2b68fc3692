//! Turns and the encounters they aggregate.

use serde::{Deserialize, Serialize};

use super::{
    CombatItem, Consumable, EquipmentSnapshot, FamiliarSnapshot, Item, MeatGain, MpGain, Skill,
    Statgain,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnVersion {
    Combat,
    Noncombat,
    Other,
    #[default]
    Undefined,
}

/// A single event inside a turn. Most turns have exactly one; multi-target
/// combats aggregate several, and by convention the first one is the
/// encounter that consumed the adventure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub turn_number: u32,
    pub area: String,
    pub name: String,
    version: TurnVersion,
    pub stat_gain: Statgain,
    pub mp_gain: MpGain,
    pub meat: MeatGain,
    pub free_runaways: u32,
    disintegrated: bool,
    banished: bool,
    banish_info: Option<String>,
    pub notes: String,
    items: Vec<Item>,
    skills: Vec<Skill>,
    combat_items: Vec<CombatItem>,
    consumables: Vec<Consumable>,
}

impl Encounter {
    pub fn new(turn_number: u32, area: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            turn_number,
            area: area.into(),
            name: name.into(),
            version: TurnVersion::Undefined,
            stat_gain: Statgain::ZERO,
            mp_gain: MpGain::default(),
            meat: MeatGain::default(),
            free_runaways: 0,
            disintegrated: false,
            banished: false,
            banish_info: None,
            notes: String::new(),
            items: Vec::new(),
            skills: Vec::new(),
            combat_items: Vec::new(),
            consumables: Vec::new(),
        }
    }

    pub fn version(&self) -> TurnVersion {
        self.version
    }

    /// Change the turn version. Disintegrated/banished only make sense for
    /// combats, so they are force-cleared on any other version.
    pub fn set_version(&mut self, version: TurnVersion) {
        self.version = version;
        if version != TurnVersion::Combat {
            self.disintegrated = false;
            self.banished = false;
            self.banish_info = None;
        }
    }

    pub fn disintegrated(&self) -> bool {
        self.disintegrated
    }

    pub fn set_disintegrated(&mut self, flag: bool) {
        self.disintegrated = flag && self.version == TurnVersion::Combat;
    }

    pub fn banished(&self) -> bool {
        self.banished
    }

    pub fn banish_info(&self) -> Option<&str> {
        self.banish_info.as_deref()
    }

    pub fn set_banished(&mut self, info: impl Into<String>) {
        if self.version == TurnVersion::Combat {
            self.banished = true;
            self.banish_info = Some(info.into());
        }
    }

    /// Add a dropped item, merging with an existing record of the same name.
    pub fn add_item(&mut self, item: Item) {
        let item = item.with_turn(self.turn_number);
        if let Some(existing) = self.items.iter_mut().find(|i| i.name == item.name) {
            existing.amount += item.amount;
        } else {
            self.items.push(item);
        }
    }

    pub fn add_skill(&mut self, skill: Skill) {
        let skill = skill.with_turn(self.turn_number);
        if let Some(existing) = self.skills.iter_mut().find(|s| s.name == skill.name) {
            existing.casts += skill.casts;
        } else {
            self.skills.push(skill);
        }
    }

    pub fn add_combat_item(&mut self, used: CombatItem) {
        let used = used.with_turn(self.turn_number);
        if let Some(existing) = self.combat_items.iter_mut().find(|c| c.name == used.name) {
            existing.uses += used.uses;
        } else {
            self.combat_items.push(used);
        }
    }

    pub fn add_consumable(&mut self, consumable: Consumable) {
        self.consumables.push(consumable.with_turn(self.turn_number));
    }

    pub fn add_note(&mut self, note: &str) {
        if !self.notes.is_empty() {
            self.notes.push('\n');
        }
        self.notes.push_str(note);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn combat_items(&self) -> &[CombatItem] {
        &self.combat_items
    }

    pub fn consumables(&self) -> &[Consumable] {
        &self.consumables
    }

    /// Re-tag this encounter (and everything it owns) to a new turn number.
    pub fn retag(&mut self, turn: u32) {
        self.turn_number = turn;
        self.items = self.items.iter().map(|i| i.with_turn(turn)).collect();
        self.skills = self.skills.iter().map(|s| s.with_turn(turn)).collect();
        self.combat_items = self
            .combat_items
            .iter()
            .map(|c| c.with_turn(turn))
            .collect();
        self.consumables = self
            .consumables
            .iter()
            .map(|c| c.with_turn(turn))
            .collect();
    }
}

/// One discrete adventure unit, annotated with the state it was taken in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    number: u32,
    pub day: u32,
    pub equipment: EquipmentSnapshot,
    pub familiar: FamiliarSnapshot,
    encounters: Vec<Encounter>,
}

impl Turn {
    pub fn new(
        number: u32,
        day: u32,
        area: impl Into<String>,
        name: impl Into<String>,
        equipment: EquipmentSnapshot,
        familiar: FamiliarSnapshot,
    ) -> Self {
        Self {
            number,
            day,
            equipment,
            familiar,
            encounters: vec![Encounter::new(number, area, name)],
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn area(&self) -> &str {
        &self.encounters[0].area
    }

    pub fn name(&self) -> &str {
        &self.encounters[0].name
    }

    pub fn version(&self) -> TurnVersion {
        self.encounters[0].version()
    }

    pub fn encounters(&self) -> &[Encounter] {
        &self.encounters
    }

    /// The encounter that consumed the adventure.
    pub fn first_encounter(&self) -> &Encounter {
        &self.encounters[0]
    }

    pub fn first_encounter_mut(&mut self) -> &mut Encounter {
        &mut self.encounters[0]
    }

    /// The encounter currently being parsed into (the most recent one).
    pub fn current_encounter(&self) -> &Encounter {
        self.encounters.last().unwrap_or(&self.encounters[0])
    }

    pub fn current_encounter_mut(&mut self) -> &mut Encounter {
        // The encounter list is never empty
        let idx = self.encounters.len() - 1;
        &mut self.encounters[idx]
    }

    /// Start a new sub-encounter within this turn (multi-target combat).
    pub fn push_encounter(&mut self, name: impl Into<String>) {
        let area = self.area().to_string();
        let mut encounter = Encounter::new(self.number, area, name);
        encounter.set_version(self.version());
        self.encounters.push(encounter);
    }

    pub fn stat_gain(&self) -> Statgain {
        let mut total = Statgain::ZERO;
        for e in &self.encounters {
            total += e.stat_gain;
        }
        total
    }

    pub fn mp_gain(&self) -> MpGain {
        let mut total = MpGain::default();
        for e in &self.encounters {
            total += e.mp_gain;
        }
        total
    }

    pub fn meat(&self) -> MeatGain {
        let mut total = MeatGain::default();
        for e in &self.encounters {
            total += e.meat;
        }
        total
    }

    pub fn free_runaways(&self) -> u32 {
        self.encounters.iter().map(|e| e.free_runaways).sum()
    }

    pub fn disintegrated(&self) -> bool {
        self.encounters.iter().any(|e| e.disintegrated())
    }

    pub fn banished(&self) -> bool {
        self.encounters.iter().any(|e| e.banished())
    }

    pub fn banish_info(&self) -> Option<&str> {
        self.encounters.iter().find_map(|e| e.banish_info())
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.encounters.iter().flat_map(|e| e.items().iter())
    }

    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.encounters.iter().flat_map(|e| e.skills().iter())
    }

    pub fn combat_items(&self) -> impl Iterator<Item = &CombatItem> {
        self.encounters.iter().flat_map(|e| e.combat_items().iter())
    }

    pub fn consumables(&self) -> impl Iterator<Item = &Consumable> {
        self.encounters.iter().flat_map(|e| e.consumables().iter())
    }

    /// Move the turn to a different number, re-tagging owned records so
    /// the clone-on-reassignment invariant holds.
    pub fn renumber(&mut self, number: u32) {
        self.number = number;
        for e in &mut self.encounters {
            e.retag(number);
        }
    }
}
