//! Core framework: semantic commands and input event vocabulary.
//!
//! `command` is headless; `event` wraps terminal input types and is only
//! compiled with the `tui` feature.

pub mod command;
#[cfg(feature = "tui")]
pub mod event;

pub use command::Command;
#[cfg(feature = "tui")]
pub use event::{InputEvent, Key};
