//! UI module that shows the simulation state in a terminal
//!
//! This module is purely presentation. All simulation logic is in the
//! `simulation` module; the UI only calls `advance`/`retreat` and draws
//! what the timeline hands to its renderer.

mod input;
mod terminal;

pub use input::{run_interactive, Command};
pub use terminal::TerminalRenderer;
