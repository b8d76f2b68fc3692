use thiserror::Error;

/// Errors surfaced by a parse call.
///
/// Only stream failures cross the parsing boundary; malformed or
/// unrecognized content inside the log is absorbed (best-effort parsing).
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read session log: {0}")]
    Io(#[from] std::io::Error),
}
