//! Selection of objects on the current slide.

use crate::objects::ObjectId;

/// Ordered set of selected object IDs.
///
/// Keeps selection order, so the first selected object can act as the
/// primary one in property panels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ObjectId>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with a single object.
    pub fn select(&mut self, id: ObjectId) {
        self.ids.clear();
        self.ids.push(id);
    }

    /// Replace the selection with the given objects (duplicates dropped).
    pub fn set(&mut self, ids: impl IntoIterator<Item = ObjectId>) {
        self.ids.clear();
        for id in ids {
            self.add(id);
        }
    }

    /// Add to selection. Returns false if already selected.
    pub fn add(&mut self, id: ObjectId) -> bool {
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove from selection. Returns false if it was not selected.
    pub fn remove(&mut self, id: ObjectId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|&s| s != id);
        self.ids.len() != before
    }

    /// Add if absent, remove if present.
    pub fn toggle(&mut self, id: ObjectId) {
        if !self.remove(id) {
            self.ids.push(id);
        }
    }

    /// Clear selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop IDs that fail the predicate (e.g. objects that no longer exist).
    pub fn retain(&mut self, mut keep: impl FnMut(ObjectId) -> bool) {
        self.ids.retain(|&id| keep(id));
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[ObjectId] {
        &self.ids
    }

    /// First selected object.
    pub fn primary(&self) -> Option<ObjectId> {
        self.ids.first().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
