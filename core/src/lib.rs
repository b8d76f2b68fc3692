//! Session-log parsing engine.
//!
//! Consumes a plain-text game session log (either the client's native
//! notation or the condensed pre-parsed convention) and reconstructs an
//! ordered timeline of turns with equipment state, familiar state,
//! stat/meat/MP deltas, item drops, skill casts and consumable usage.
//!
//! The pipeline is strictly sequential: the [`parser::reader::LogReader`]
//! yields classified raw blocks, block parsers mutate the shared
//! [`session::SessionState`], and a single post-pass
//! ([`parser::corrector`]) normalizes day/equipment/familiar histories
//! once the whole log has been consumed.

pub mod error;
pub mod game_data;
pub mod model;
pub mod parser;
pub mod session;
pub mod summary;

pub use error::ParseError;
pub use parser::{parse_session_log, parse_session_text};
pub use session::{LogSession, SessionState};
pub use summary::LogSummary;
