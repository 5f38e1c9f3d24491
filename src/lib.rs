//! screenflow - a terminal screen-map organizer.
//!
//! Module structure:
//! - core: semantic commands + input vocabulary
//! - models: the board hierarchy and its pure mutation operations
//! - kernel: headless store (state/action/effect) + drag gesture interpreter
//! - services: settings and seed loading
//! - ui: hit-test tree + pointer/drag runtime
//! - app: the studio shell (rendering, drag rules, toasts)
//! - tui: terminal bootstrap and event loop

#[cfg(feature = "tui")]
pub mod app;
pub mod core;
pub mod kernel;
pub mod logging;
pub mod models;
pub mod services;
#[cfg(feature = "tui")]
pub mod tui;
#[cfg(feature = "tui")]
pub mod ui;
