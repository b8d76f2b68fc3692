//! Block classification and per-kind parsers.
//!
//! The reader hands over runs of lines; the first line (sometimes with a
//! peek at the second) decides which parser owns the whole run.

pub mod consumable;
pub mod encounter;
pub mod other;
pub mod preparsed;
pub mod service;
pub mod snapshot;

use crate::game_data::BROKEN_AREA_ENCOUNTERS;
use crate::session::SessionState;

use super::reader::RawBlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// An adventure spent in an area, combat or noncombat.
    Encounter,
    /// "cast 1 Rain Man" summons a combat without an area header.
    Rainman,
    /// Eating, drinking, chewing, or using something.
    Consumable,
    /// A player snapshot dump.
    PlayerSnapshot,
    /// The "Ascension #N" header block with path and class data.
    AscensionData,
    /// A Grey Goo hybridizing block.
    Hybrid,
    /// Anything else; still scanned for loose single-line data.
    Other,
}

impl BlockKind {
    pub fn classify(first: &str, second: Option<&str>) -> Self {
        if is_adventure_header(first) || BROKEN_AREA_ENCOUNTERS.contains(first) {
            BlockKind::Encounter
        } else if first.contains("cast 1 Rain Man") {
            BlockKind::Rainman
        } else if consumable::consumption_header(first).is_some() {
            BlockKind::Consumable
        } else if is_snapshot_rule(first) && second.is_some_and(|s| s.contains("Player Snapshot")) {
            BlockKind::PlayerSnapshot
        } else if first.starts_with("Ascension #") {
            BlockKind::AscensionData
        } else if first.contains("hybridizing") {
            BlockKind::Hybrid
        } else {
            BlockKind::Other
        }
    }
}

/// "[123] The Spooky Forest"
fn is_adventure_header(line: &str) -> bool {
    let Some(rest) = line.strip_prefix('[') else {
        return false;
    };
    let Some(close) = rest.find(']') else {
        return false;
    };
    close > 0
        && rest[..close].bytes().all(|b| b.is_ascii_digit())
        && rest[close + 1..].starts_with(' ')
}

fn is_snapshot_rule(line: &str) -> bool {
    line.len() >= 20 && line.bytes().all(|b| b == b'=')
}

pub fn parse_block(block: &RawBlock, state: &mut SessionState) {
    match block.kind {
        BlockKind::Encounter => encounter::parse(&block.lines, state),
        BlockKind::Rainman => encounter::parse_rainman(&block.lines, state),
        BlockKind::Consumable => consumable::parse(&block.lines, state),
        BlockKind::PlayerSnapshot => snapshot::parse(&block.lines, state),
        BlockKind::AscensionData => service::parse_ascension_data(&block.lines, state),
        BlockKind::Hybrid => service::parse_hybrid(&block.lines, state),
        BlockKind::Other => other::parse(&block.lines, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(
            BlockKind::classify("[12] The Spooky Forest", None),
            BlockKind::Encounter
        );
        assert_eq!(
            BlockKind::classify("Encounter: Cleesh", None),
            BlockKind::Encounter
        );
        assert_eq!(
            BlockKind::classify("cast 1 Rain Man", None),
            BlockKind::Rainman
        );
        assert_eq!(
            BlockKind::classify("eat 2 hell ramen", None),
            BlockKind::Consumable
        );
        assert_eq!(
            BlockKind::classify(&"=".repeat(25), Some("Player Snapshot")),
            BlockKind::PlayerSnapshot
        );
        assert_eq!(
            BlockKind::classify("Ascension #42:", None),
            BlockKind::AscensionData
        );
        assert_eq!(
            BlockKind::classify("hybridizing yourself", None),
            BlockKind::Hybrid
        );
        assert_eq!(
            BlockKind::classify("Visiting the Council", None),
            BlockKind::Other
        );
    }

    #[test]
    fn test_adventure_header_shape() {
        assert!(is_adventure_header("[1] Noob Cave"));
        assert!(is_adventure_header("[1234] Noob Cave"));
        assert!(!is_adventure_header("[] Noob Cave"));
        assert!(!is_adventure_header("[ab] Noob Cave"));
        assert!(!is_adventure_header("[12]Noob Cave"));
        assert!(!is_adventure_header("12] Noob Cave"));
    }
}
