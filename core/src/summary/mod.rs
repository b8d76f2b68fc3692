//! Aggregates computed over a finished session: run-wide totals, per-area
//! intervals, the level curve, consumption accounting, and item/skill
//! leaderboards.

use hashbrown::HashMap;
use serde::Serialize;

use crate::game_data::{organ_hit, substats_for_level};
use crate::model::{
    Consumable, ConsumableCategory, MeatGain, MpGain, Statgain, TurnInterval,
};
use crate::session::LogSession;

#[derive(Debug, Clone, Serialize)]
pub struct LogSummary {
    pub log_name: String,
    pub total_turns: u32,
    pub stat_gain: Statgain,
    pub mp_gain: MpGain,
    pub meat: MeatGain,
    pub free_runaways: u32,
    /// Consecutive same-area turns folded into ranges, chronological.
    pub areas: Vec<TurnInterval>,
    pub levels: Vec<LevelSummary>,
    pub consumption: ConsumptionSummary,
    pub top_items: Vec<NameTally>,
    pub top_skills: Vec<NameTally>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelSummary {
    pub level: u32,
    pub reached_turn: u32,
    /// Turns spent on this level before the next one (or the end of the
    /// log for the last level).
    pub turns_on_level: u32,
    pub substats_to_next: i64,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ConsumptionSummary {
    pub food_adventures: i64,
    pub booze_adventures: i64,
    pub spleen_adventures: i64,
    pub other_adventures: i64,
    pub fullness_used: i64,
    pub drunkenness_used: i64,
    pub spleen_used: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameTally {
    pub name: String,
    pub count: u32,
}

impl LogSummary {
    pub fn compute(session: &LogSession) -> Self {
        let mut stat_gain = Statgain::ZERO;
        let mut mp_gain = MpGain::default();
        let mut meat = MeatGain::default();
        let mut free_runaways = 0;
        let mut consumption = ConsumptionSummary::default();
        let mut items: HashMap<String, u32> = HashMap::new();
        let mut skills: HashMap<String, u32> = HashMap::new();

        for turn in session.turns() {
            stat_gain += turn.stat_gain();
            mp_gain += turn.mp_gain();
            meat += turn.meat();
            free_runaways += turn.free_runaways();
            for item in turn.items() {
                *items.entry(item.name.clone()).or_default() += item.amount;
            }
            for skill in turn.skills() {
                *skills.entry(skill.name.clone()).or_default() += skill.casts;
            }
            for consumable in turn.consumables() {
                consumption.absorb(consumable);
            }
        }
        for interval in session.intervals() {
            stat_gain += interval.stat_gain;
            mp_gain += interval.mp_gain;
            meat += interval.meat;
            free_runaways += interval.free_runaways;
            for item in &interval.items {
                *items.entry(item.name.clone()).or_default() += item.amount;
            }
            for skill in &interval.skills {
                *skills.entry(skill.name.clone()).or_default() += skill.casts;
            }
            for consumable in &interval.consumables {
                consumption.absorb(consumable);
            }
        }

        Self {
            log_name: session.log_name().to_string(),
            total_turns: session.total_turns(),
            stat_gain,
            mp_gain,
            meat,
            free_runaways,
            areas: fold_areas(session),
            levels: level_curve(session),
            consumption,
            top_items: into_tallies(items),
            top_skills: into_tallies(skills),
        }
    }
}

impl ConsumptionSummary {
    fn absorb(&mut self, consumable: &Consumable) {
        let organ = organ_hit(&consumable.name) * i64::from(consumable.amount);
        match consumable.category {
            ConsumableCategory::Food => {
                self.food_adventures += consumable.adventure_gain;
                self.fullness_used += organ;
            }
            ConsumableCategory::Booze => {
                self.booze_adventures += consumable.adventure_gain;
                self.drunkenness_used += organ;
            }
            ConsumableCategory::Spleen => {
                self.spleen_adventures += consumable.adventure_gain;
                self.spleen_used += organ;
            }
            ConsumableCategory::Other => self.other_adventures += consumable.adventure_gain,
        }
    }
}

/// Fold the turn timeline into per-area ranges. Pre-parsed logs already
/// carry intervals; raw logs derive them from consecutive turns.
fn fold_areas(session: &LogSession) -> Vec<TurnInterval> {
    if !session.intervals().is_empty() {
        return session.intervals().to_vec();
    }
    let mut areas: Vec<TurnInterval> = Vec::new();
    // turn 0 is synthetic and carries no area worth listing
    for turn in session.turns().iter().skip(1) {
        match areas.last_mut() {
            Some(last) if last.area == turn.area() => last.absorb_turn(turn),
            _ => {
                let mut interval =
                    TurnInterval::new(turn.area(), turn.number(), turn.number());
                interval.absorb_turn(turn);
                areas.push(interval);
            }
        }
    }
    areas
}

fn level_curve(session: &LogSession) -> Vec<LevelSummary> {
    let end = session.total_turns();
    let levels = session.levels();
    let mut curve = Vec::with_capacity(levels.len() + 1);
    let mut previous_turn = 0;
    let mut previous_level = 1;
    for reached in levels {
        curve.push(LevelSummary {
            level: previous_level,
            reached_turn: previous_turn,
            turns_on_level: reached.turn.saturating_sub(previous_turn),
            substats_to_next: substats_for_level(previous_level + 1)
                - substats_for_level(previous_level),
        });
        previous_turn = reached.turn;
        previous_level = reached.level;
    }
    curve.push(LevelSummary {
        level: previous_level,
        reached_turn: previous_turn,
        turns_on_level: end.saturating_sub(previous_turn),
        substats_to_next: substats_for_level(previous_level + 1)
            - substats_for_level(previous_level),
    });
    curve
}

/// Leaderboard ordering: count descending, then name for stability.
fn into_tallies(map: HashMap<String, u32>) -> Vec<NameTally> {
    let mut tallies: Vec<NameTally> = map
        .into_iter()
        .map(|(name, count)| NameTally { name, count })
        .collect();
    tallies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    tallies
}
