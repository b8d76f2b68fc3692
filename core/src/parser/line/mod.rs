//! Single-line recognizers.
//!
//! Each parser is a stateless unit struct implementing [`LineParser`];
//! block parsers hold static slices of them and dispatch first-match-wins.
//! A parser that matches but fails to extract its payload logs and keeps
//! going rather than aborting the session.

pub mod combat;
pub mod equipment;
pub mod gains;
pub mod items;
pub mod misc;

use crate::session::SessionState;

pub trait LineParser: Sync {
    /// Cheap shape test, no allocation.
    fn matches(&self, line: &str) -> bool;

    /// Extract the payload and apply it to the session. Returns false when
    /// the line matched in shape but the payload was malformed.
    fn parse(&self, line: &str, state: &mut SessionState) -> bool;

    fn try_parse(&self, line: &str, state: &mut SessionState) -> bool {
        self.matches(line) && self.parse(line, state)
    }
}

/// Run `line` through `parsers` in order, stopping at the first that
/// claims it. Returns whether anyone did.
pub fn dispatch(parsers: &[&dyn LineParser], line: &str, state: &mut SessionState) -> bool {
    for parser in parsers {
        if parser.matches(line) {
            if !parser.parse(line, state) {
                tracing::debug!(line, "matched line failed to parse, skipping");
            }
            return true;
        }
    }
    false
}

/// Parse a decimal amount that may carry thousands separators. Malformed
/// numbers are logged and dropped rather than propagated.
pub fn parse_amount(text: &str) -> Option<i64> {
    let cleaned: String = text.chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::debug!(text, "unparseable amount");
            None
        }
    }
}

/// Split a "You gain N thing" / "You lose N thing" line into a signed
/// amount and the thing's name (trailing punctuation stripped).
pub fn split_gain_line(line: &str) -> Option<(i64, &str)> {
    let (rest, sign) = if let Some(rest) = line.strip_prefix("You gain ") {
        (rest, 1)
    } else if let Some(rest) = line.strip_prefix("You lose ") {
        (rest, -1)
    } else {
        return None;
    };
    let (amount_text, name) = rest.split_once(' ')?;
    let amount = parse_amount(amount_text)?;
    Some((sign * amount, name.trim_end_matches(['.', '!'])))
}
