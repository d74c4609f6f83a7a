//! Operator console
//!
//! Menu-driven front end over the services. Everything the operator sees is
//! written to the session's output; log events never go there.

pub mod menu;
pub mod render;
pub mod session;

pub use menu::MenuChoice;
pub use session::{Session, SessionOutcome};
