//! Item acquisition and storage-pull lines.

use crate::model::{Item, PullEntry};
use crate::session::SessionState;

use super::{parse_amount, LineParser};

const SINGLE_PREFIX: &str = "You acquire an item: ";
const MULTI_PREFIX: &str = "You acquire ";
const LIST_PREFIX: &str = "You acquire some items: ";
const PULL_PREFIX: &str = "pull: ";

fn add_item(state: &mut SessionState, name: &str, amount: u32) -> bool {
    let Some(turn) = state.last_turn_spent_mut() else {
        return false;
    };
    let number = turn.number();
    turn.current_encounter_mut()
        .add_item(Item::new(name, amount, number));
    true
}

/// "You acquire an item: seal-clubbing club"
pub struct ItemAcquisitionParser;

impl LineParser for ItemAcquisitionParser {
    fn matches(&self, line: &str) -> bool {
        line.starts_with(SINGLE_PREFIX)
    }

    fn parse(&self, line: &str, state: &mut SessionState) -> bool {
        let name = line[SINGLE_PREFIX.len()..].trim();
        !name.is_empty() && add_item(state, name, 1)
    }
}

/// "You acquire bottle of rum (3)". Effect acquisitions share the prefix
/// and are deliberately not claimed here.
pub struct MultiItemParser;

impl LineParser for MultiItemParser {
    fn matches(&self, line: &str) -> bool {
        line.starts_with(MULTI_PREFIX)
            && !line.starts_with(SINGLE_PREFIX)
            && !line.starts_with(LIST_PREFIX)
            && !line.starts_with("You acquire an effect")
            && line.ends_with(')')
            && line.contains(" (")
    }

    fn parse(&self, line: &str, state: &mut SessionState) -> bool {
        let rest = &line[MULTI_PREFIX.len()..];
        let Some(open) = rest.rfind(" (") else {
            return false;
        };
        let name = rest[..open].trim();
        let count_text = &rest[open + 2..rest.len() - 1];
        let Some(amount) = parse_amount(count_text).filter(|n| *n > 0) else {
            return false;
        };
        !name.is_empty() && add_item(state, name, amount as u32)
    }
}

/// "You acquire some items: pail, hot buttered roll, hot buttered roll"
pub struct ItemsListParser;

impl LineParser for ItemsListParser {
    fn matches(&self, line: &str) -> bool {
        line.starts_with(LIST_PREFIX)
    }

    fn parse(&self, line: &str, state: &mut SessionState) -> bool {
        let mut any = false;
        for name in line[LIST_PREFIX.len()..].split(',') {
            let name = name.trim();
            if !name.is_empty() {
                any |= add_item(state, name, 1);
            }
        }
        any
    }
}

/// "pull: 5 mojo filter, 1 tiny plastic sword"
pub struct PullParser;

impl LineParser for PullParser {
    fn matches(&self, line: &str) -> bool {
        line.starts_with(PULL_PREFIX)
    }

    fn parse(&self, line: &str, state: &mut SessionState) -> bool {
        let turn = state.last_turn_number();
        let day = state.current_day;
        let mut any = false;
        for entry in line[PULL_PREFIX.len()..].split(',') {
            let entry = entry.trim();
            let Some((amount_text, name)) = entry.split_once(' ') else {
                continue;
            };
            let Some(amount) = parse_amount(amount_text).filter(|n| *n > 0) else {
                continue;
            };
            state.add_pull(PullEntry {
                name: name.trim().to_string(),
                amount: amount as u32,
                turn,
                day,
            });
            any = true;
        }
        any
    }
}
