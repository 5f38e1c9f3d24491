//! Side-effectful services at the edge of the app: configuration and seed
//! data loading. Everything here runs once at startup; the kernel never calls
//! back into it.

pub mod seed;
pub mod settings;

pub use seed::{load_board, sample_board, SeedError};
pub use settings::{load_settings, KeybindingRule, Settings};
