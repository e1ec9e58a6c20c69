//! Newline-delimited JSON surface for driving the engine from an external
//! detector process.

mod protocol;
mod session;

pub use protocol::{SessionCommand, SessionEvent};
pub use session::run_session;
