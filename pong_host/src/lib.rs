//! Headless host for the Pong match core
//!
//! Owns the driver loop, reads preference and configuration files, and logs
//! every audio and UI call the match makes.

pub mod input;
pub mod prefs;
pub mod simulation;
pub mod sinks;

pub use input::{KeyAction, KeyScript, ScriptedKey};
pub use prefs::{load_config, load_preferences};
pub use simulation::{LocalGame, MatchResult, SessionOptions, Summary};
pub use sinks::{LogHost, SinkStats};
