use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a screen or sub-screen.
///
/// Ids are allocated from the board's monotonic counter and are never reused
/// within a process lifetime, even across promote/demote conversions (a
/// converted entity always gets a fresh id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl EntityId {
    pub const fn raw(v: u64) -> Self {
        Self(v)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
