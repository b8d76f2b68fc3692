//! Consumption blocks: "eat 2 hell ramen" and friends, followed by the
//! adventure, stat, and MP yields.

use crate::game_data::MP_TOKENS;
use crate::model::{Consumable, ConsumableCategory};
use crate::parser::line::gains::{adventure_gain, stat_gain_of};
use crate::parser::line::items::{ItemAcquisitionParser, ItemsListParser, MultiItemParser};
use crate::parser::line::misc::LevelParser;
use crate::parser::line::{dispatch, parse_amount, split_gain_line, LineParser};
use crate::session::SessionState;

static CONSUMABLE_PARSERS: &[&dyn LineParser] = &[
    &ItemAcquisitionParser,
    &ItemsListParser,
    &MultiItemParser,
    &LevelParser,
];

/// Recognize a consumption header and split it into category, amount,
/// and item name.
pub fn consumption_header(line: &str) -> Option<(ConsumableCategory, u32, &str)> {
    let (verb, rest) = line.split_once(' ')?;
    let category = match verb {
        "eat" => ConsumableCategory::Food,
        "drink" => ConsumableCategory::Booze,
        "chew" => ConsumableCategory::Spleen,
        "use" => ConsumableCategory::Other,
        _ => return None,
    };
    let (amount_text, name) = rest.split_once(' ')?;
    let amount = parse_amount(amount_text).filter(|n| *n > 0)?;
    let name = name.trim();
    (!name.is_empty()).then_some((category, amount as u32, name))
}

pub fn parse(lines: &[String], state: &mut SessionState) {
    let Some((category, amount, name)) = consumption_header(&lines[0]) else {
        tracing::debug!(header = %lines[0], "unparseable consumption header");
        return;
    };
    let mut consumable = Consumable::new(
        name,
        category,
        amount,
        state.last_turn_number(),
        state.current_day,
    );

    for line in &lines[1..] {
        if let Some(adv) = adventure_gain(line) {
            consumable.adventure_gain += adv;
        } else if let Some(gain) = stat_gain_of(line) {
            consumable.stat_gain += gain;
        } else if let Some(mp) = mp_gain(line) {
            if let Some(turn) = state.last_turn_spent_mut() {
                turn.current_encounter_mut().mp_gain.consumable += mp;
            }
        } else {
            dispatch(CONSUMABLE_PARSERS, line, state);
        }
    }

    if let Some(turn) = state.last_turn_spent_mut() {
        turn.current_encounter_mut().add_consumable(consumable);
    }
}

fn mp_gain(line: &str) -> Option<i64> {
    let (amount, name) = split_gain_line(line)?;
    (MP_TOKENS.contains(name) && amount > 0).then_some(amount)
}
