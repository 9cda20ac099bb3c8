//! Console front end
//!
//! The `play` command speaks the line-based protocol (`start <x> <o>`,
//! `exit`, `column row` moves); `match` pits two computer players against
//! each other.

pub mod command;
pub mod commands;
pub mod config;
pub mod console;
pub mod output;

pub use command::{Command, parse_coordinates};
pub use config::SessionConfig;
pub use console::Console;
