//! UI hit-test layer.
//!
//! Keeps a retained tree of interactive rects (rebuilt every frame while
//! rendering) plus a pointer runtime that turns raw crossterm mouse events
//! into semantic events (click, drag start/move/end, drop). The kernel never
//! sees any of this; only finished gestures reach it.

pub mod core;
