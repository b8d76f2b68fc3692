//! The parsing pipeline: reader, line and block parsers, and the final
//! correction pass.
//!
//! Entry points are [`parse_session_log`] for files and
//! [`parse_session_text`] for in-memory logs. Both sniff for the
//! pre-parsed tagged format before falling back to the full block walk.

pub mod block;
pub mod corrector;
pub mod line;
pub mod reader;

#[cfg(test)]
mod encounter_tests;

use std::path::Path;

use ascent_types::ParsingConfig;

use crate::error::ParseError;
use crate::session::{LogSession, SessionState};

use block::preparsed;
use reader::LogReader;

pub fn parse_session_log(path: &Path, config: &ParsingConfig) -> Result<LogSession, ParseError> {
    let log_name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("session")
        .to_string();
    let reader = LogReader::from_path(path)?;
    Ok(run(reader, log_name, config))
}

pub fn parse_session_text(bytes: &[u8], config: &ParsingConfig) -> LogSession {
    run(LogReader::from_bytes(bytes), "session".to_string(), config)
}

fn run(mut reader: LogReader, log_name: String, config: &ParsingConfig) -> LogSession {
    let mut state = SessionState::new(log_name, config);
    if preparsed::sniff(&mut reader) {
        tracing::debug!(log = state.log_name(), "pre-parsed log detected");
        preparsed::parse(&mut reader, &mut state);
    } else {
        while let Some(block) = reader.next_block() {
            block::parse_block(&block, &mut state);
        }
    }
    corrector::finalize(&mut state);
    LogSession::from_state(state)
}
