//! Fallback for blocks with no recognized header. No turn is created;
//! loose single-line data attaches to the current turn.

use crate::parser::line::equipment::{
    EquipParser, FamiliarParser, OutfitParser, UnequipParser,
};
use crate::parser::line::gains::{
    AutosellParser, BuyParser, MpContext, MpGainParser, OtherMeatParser, StatGainParser,
};
use crate::parser::line::items::{
    ItemAcquisitionParser, ItemsListParser, MultiItemParser, PullParser,
};
use crate::parser::line::misc::{DayChangeParser, LevelParser, NoteParser};
use crate::parser::line::{dispatch, LineParser};
use crate::session::SessionState;

static LOOSE_PARSERS: &[&dyn LineParser] = &[
    &DayChangeParser,
    &LevelParser,
    &NoteParser,
    &PullParser,
    &EquipParser,
    &UnequipParser,
    &OutfitParser,
    &FamiliarParser,
    &StatGainParser,
    &MpGainParser {
        context: MpContext::OutOfEncounter,
    },
    &OtherMeatParser,
    &BuyParser,
    &AutosellParser,
    &ItemAcquisitionParser,
    &ItemsListParser,
    &MultiItemParser,
];

pub fn parse(lines: &[String], state: &mut SessionState) {
    for line in lines {
        if !dispatch(LOOSE_PARSERS, line, state) {
            tracing::trace!(%line, "unrecognized loose line");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascent_types::ParsingConfig;

    #[test]
    fn test_loose_lines_attach_to_current_turn() {
        let mut st = SessionState::new("test", &ParsingConfig::default());
        let lines: Vec<String> = [
            "You gain 8 Mana Points",
            "You gain 100 Meat",
            "pull: 1 mojo filter",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        parse(&lines, &mut st);

        let turn = st.last_turn_spent().unwrap();
        assert_eq!(turn.mp_gain().out_of_encounter, 8);
        assert_eq!(turn.meat().other, 100);
        assert_eq!(st.pulls().len(), 1);
    }
}
