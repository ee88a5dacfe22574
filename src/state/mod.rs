//! Per-session lobby state.
//!
//! Contains the mode registry and the identifiers it is keyed by.

mod code;
mod registry;

pub use code::GameCode;
pub use registry::{GameMode, ModeRegistry, ModeState};
