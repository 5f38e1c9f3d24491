//! Board hierarchy: ordered screens, each owning an ordered sub-screen list.
//!
//! Every mutation here is a pure transform: it reads `&self` and returns a new
//! `Board`, or `None` when the operation is rejected (unknown id, out-of-range
//! source index, invalid transition). The caller owns committing the returned
//! value; on `None` the current board stays untouched, so a rejected mutation
//! can never leave the hierarchy half-modified.
//!
//! Index policy: source indices must name an existing item (out of bounds
//! rejects), destination indices are clamped into range since drag feedback
//! can report transient overshoot positions.

use compact_str::{format_compact, CompactString};
use serde::{Deserialize, Serialize};

use super::entity::EntityId;

pub const DEFAULT_DESCRIPTION: &str = "Add description here...";
pub const DEFAULT_SCREEN_THUMBNAIL: &str =
    "https://images.unsplash.com/photo-1649972904349-6e44c42644a7";
pub const DEFAULT_SUB_SCREEN_THUMBNAIL: &str =
    "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b";

/// Leaf entity owned by exactly one [`Screen`] at any instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScreen {
    pub id: EntityId,
    pub title: CompactString,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
}

/// Top-level entity; owns its sub-screens exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    pub id: EntityId,
    pub title: CompactString,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub sub_screens: Vec<SubScreen>,
}

/// The whole hierarchy. Order of `screens` (and of each sub-screen list) is
/// display order and part of the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    screens: Vec<Screen>,
    next_id: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Splice-style reorder: remove at `from`, reinsert at `to` (clamped).
fn reorder<T>(list: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= list.len() {
        return false;
    }
    let item = list.remove(from);
    let to = to.min(list.len());
    list.insert(to, item);
    true
}

impl Board {
    pub fn new() -> Self {
        Self {
            screens: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a board around externally supplied screens (seed data), setting
    /// the id counter past every id already in use.
    pub fn with_screens(screens: Vec<Screen>) -> Self {
        let max_id = screens
            .iter()
            .flat_map(|s| {
                std::iter::once(s.id.0).chain(s.sub_screens.iter().map(|sub| sub.id.0))
            })
            .max()
            .unwrap_or(0);
        Self {
            screens,
            next_id: max_id + 1,
        }
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn screen(&self, id: EntityId) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id == id)
    }

    pub fn screen_index(&self, id: EntityId) -> Option<usize> {
        self.screens.iter().position(|s| s.id == id)
    }

    /// Locate a sub-screen anywhere on the board: owning screen, position
    /// within the owner's list, and the sub-screen itself.
    pub fn find_sub_screen(&self, id: EntityId) -> Option<(&Screen, usize, &SubScreen)> {
        self.screens.iter().find_map(|screen| {
            screen
                .sub_screens
                .iter()
                .position(|sub| sub.id == id)
                .map(|ix| (screen, ix, &screen.sub_screens[ix]))
        })
    }

    pub fn sub_screen_count(&self) -> usize {
        self.screens.iter().map(|s| s.sub_screens.len()).sum()
    }

    // ---- reorder / move ----

    /// Move the screen at `from` to position `to` in the top-level order.
    /// `from == to` is a valid idempotent commit (unchanged copy).
    pub fn reorder_screens(&self, from: usize, to: usize) -> Option<Board> {
        let mut next = self.clone();
        reorder(&mut next.screens, from, to).then_some(next)
    }

    /// Same reorder semantics scoped to one screen's sub-screen list.
    pub fn reorder_sub_screens(
        &self,
        screen_id: EntityId,
        from: usize,
        to: usize,
    ) -> Option<Board> {
        let mut next = self.clone();
        let ix = next.screen_index(screen_id)?;
        reorder(&mut next.screens[ix].sub_screens, from, to).then_some(next)
    }

    /// Move a sub-screen across containers, fields unchanged. With
    /// `source_id == dest_id` this is exactly [`Board::reorder_sub_screens`].
    pub fn move_sub_screen(
        &self,
        source_id: EntityId,
        dest_id: EntityId,
        from: usize,
        to: usize,
    ) -> Option<Board> {
        if source_id == dest_id {
            return self.reorder_sub_screens(source_id, from, to);
        }

        let mut next = self.clone();
        let src_ix = next.screen_index(source_id)?;
        let dst_ix = next.screen_index(dest_id)?;
        if from >= next.screens[src_ix].sub_screens.len() {
            return None;
        }

        let moved = next.screens[src_ix].sub_screens.remove(from);
        let dest = &mut next.screens[dst_ix];
        let to = to.min(dest.sub_screens.len());
        dest.sub_screens.insert(to, moved);
        Some(next)
    }

    // ---- promote / demote ----

    /// Convert a sub-screen into a new top-level screen (fresh id, empty
    /// sub-screen list, content fields carried over). Inserts at `insert_at`
    /// (clamped) when promotion comes from a drop, otherwise appends.
    pub fn promote_sub_screen(
        &self,
        screen_id: EntityId,
        sub_id: EntityId,
        insert_at: Option<usize>,
    ) -> Option<Board> {
        let mut next = self.clone();
        let owner_ix = next.screen_index(screen_id)?;
        let sub_ix = next.screens[owner_ix]
            .sub_screens
            .iter()
            .position(|sub| sub.id == sub_id)?;

        let sub = next.screens[owner_ix].sub_screens.remove(sub_ix);
        let id = next.allocate_id();
        let promoted = Screen {
            id,
            title: sub.title,
            description: sub.description,
            thumbnail: sub.thumbnail,
            sub_screens: Vec::new(),
        };
        let at = insert_at.unwrap_or(next.screens.len()).min(next.screens.len());
        next.screens.insert(at, promoted);
        Some(next)
    }

    /// Convert a screen into a sub-screen of `target_id` (fresh id), then
    /// re-parent the demoted screen's former sub-screens into the target right
    /// after it, order preserved.
    ///
    /// Rejected when the screen would become its own child, when it is the
    /// only screen left (no valid target can exist), or when either id is
    /// unknown.
    pub fn demote_screen(&self, screen_id: EntityId, target_id: EntityId) -> Option<Board> {
        if screen_id == target_id || self.screens.len() < 2 {
            return None;
        }

        let mut next = self.clone();
        let ix = next.screen_index(screen_id)?;
        next.screen_index(target_id)?;

        let removed = next.screens.remove(ix);
        let id = next.allocate_id();
        let target_ix = next.screen_index(target_id)?;
        let target = &mut next.screens[target_ix];
        target.sub_screens.push(SubScreen {
            id,
            title: removed.title,
            description: removed.description,
            thumbnail: removed.thumbnail,
        });
        target.sub_screens.extend(removed.sub_screens);
        Some(next)
    }

    // ---- CRUD ----

    pub fn add_screen(&self) -> Board {
        let mut next = self.clone();
        let id = next.allocate_id();
        let title = format_compact!("Screen {}", next.screens.len() + 1);
        next.screens.push(Screen {
            id,
            title,
            description: DEFAULT_DESCRIPTION.to_string(),
            thumbnail: DEFAULT_SCREEN_THUMBNAIL.to_string(),
            sub_screens: Vec::new(),
        });
        next
    }

    pub fn add_sub_screen(&self, screen_id: EntityId) -> Option<Board> {
        let mut next = self.clone();
        let ix = next.screen_index(screen_id)?;
        let id = next.allocate_id();
        let title = format_compact!("Sub-screen {}", next.screens[ix].sub_screens.len() + 1);
        next.screens[ix].sub_screens.push(SubScreen {
            id,
            title,
            description: DEFAULT_DESCRIPTION.to_string(),
            thumbnail: DEFAULT_SUB_SCREEN_THUMBNAIL.to_string(),
        });
        Some(next)
    }

    pub fn delete_screen(&self, id: EntityId) -> Option<Board> {
        let mut next = self.clone();
        let ix = next.screen_index(id)?;
        next.screens.remove(ix);
        Some(next)
    }

    pub fn delete_sub_screen(&self, screen_id: EntityId, id: EntityId) -> Option<Board> {
        let mut next = self.clone();
        let ix = next.screen_index(screen_id)?;
        let sub_ix = next.screens[ix].sub_screens.iter().position(|s| s.id == id)?;
        next.screens[ix].sub_screens.remove(sub_ix);
        Some(next)
    }

    pub fn rename_screen(&self, id: EntityId, title: &str) -> Option<Board> {
        let mut next = self.clone();
        let ix = next.screen_index(id)?;
        next.screens[ix].title = CompactString::from(title);
        Some(next)
    }

    pub fn rename_sub_screen(
        &self,
        screen_id: EntityId,
        id: EntityId,
        title: &str,
    ) -> Option<Board> {
        let mut next = self.clone();
        let ix = next.screen_index(screen_id)?;
        let sub = next.screens[ix].sub_screens.iter_mut().find(|s| s.id == id)?;
        sub.title = CompactString::from(title);
        Some(next)
    }

    pub fn set_screen_description(&self, id: EntityId, text: &str) -> Option<Board> {
        let mut next = self.clone();
        let ix = next.screen_index(id)?;
        next.screens[ix].description = text.to_string();
        Some(next)
    }

    pub fn set_sub_screen_description(
        &self,
        screen_id: EntityId,
        id: EntityId,
        text: &str,
    ) -> Option<Board> {
        let mut next = self.clone();
        let ix = next.screen_index(screen_id)?;
        let sub = next.screens[ix].sub_screens.iter_mut().find(|s| s.id == id)?;
        sub.description = text.to_string();
        Some(next)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/board.rs"]
mod tests;
