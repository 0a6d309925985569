//! Input dispatch: keyboard commands and pointer dragging.

pub mod command;
pub mod drag;

pub use command::{dispatch_key, Command, CommandOutcome};
pub use drag::DragSession;
