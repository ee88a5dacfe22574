//! Host chat commands.
//!
//! A chat line goes through three stages:
//! - [`parse`]: text to [`LobbyCommand`], rejecting bad arguments
//! - [`execute`]: [`LobbyCommand`] to option mutations plus [`LobbyEffect`]s
//! - [`dispatch`]: precondition checks, per-game locking and effect delivery

mod dispatch;
mod execute;
mod parse;

pub use dispatch::{ChatOutcome, CommandDispatcher};
pub use execute::{LobbyEffect, execute};
pub use parse::{LobbyCommand, VisionTarget, parse};
