pub mod log_session;
pub mod state;

pub use log_session::LogSession;
pub use state::SessionState;
