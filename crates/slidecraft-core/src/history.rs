//! Bounded linear undo/redo history of full document snapshots.

/// Default number of snapshots kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Linear history with a cursor pointing at the snapshot that matches the
/// live document.
///
/// Committing after an undo discards the redo branch. When the stack grows
/// past its capacity the oldest snapshot is dropped.
#[derive(Debug, Clone)]
pub struct History<T: Clone> {
    entries: Vec<T>,
    cursor: Option<usize>,
    capacity: usize,
}

impl<T: Clone> Default for History<T> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl<T: Clone> History<T> {
    /// Create an empty history. A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            capacity: capacity.max(1),
        }
    }

    /// Record a copy of `doc` as the newest state.
    pub fn commit(&mut self, doc: &T) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);
        self.entries.push(doc.clone());

        if self.entries.len() > self.capacity {
            self.entries.remove(0);
        }
        self.cursor = Some(self.entries.len() - 1);
        log::debug!(
            "History commit: {} of {} entries",
            self.entries.len(),
            self.capacity
        );
    }

    /// Step back and overwrite `live` with the previous snapshot.
    ///
    /// Returns false if there is nothing to undo.
    pub fn undo(&mut self, live: &mut T) -> bool {
        let Some(cursor) = self.cursor.filter(|&c| c > 0) else {
            return false;
        };
        let target = cursor - 1;
        *live = self.entries[target].clone();
        self.cursor = Some(target);
        log::debug!("Undo to history entry {target}");
        true
    }

    /// Step forward and overwrite `live` with the next snapshot.
    ///
    /// Returns false if there is nothing to redo.
    pub fn redo(&mut self, live: &mut T) -> bool {
        if !self.can_redo() {
            return false;
        }
        let target = self.cursor.map_or(0, |c| c + 1);
        *live = self.entries[target].clone();
        self.cursor = Some(target);
        log::debug!("Redo to history entry {target}");
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        match self.cursor {
            Some(c) => c + 1 < self.entries.len(),
            None => false,
        }
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the current snapshot, `None` before the first commit.
    pub fn index(&self) -> Option<usize> {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> Option<&T> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let history: History<i32> = History::default();
        assert!(history.is_empty());
        assert_eq!(history.index(), None);
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo_restores_by_value() {
        let mut history = History::new(10);
        let mut live = vec![1];
        history.commit(&live);
        live.push(2);
        history.commit(&live);

        assert!(history.undo(&mut live));
        assert_eq!(live, vec![1]);
        assert!(history.redo(&mut live));
        assert_eq!(live, vec![1, 2]);
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut history = History::new(10);
        let mut live = 7;
        assert!(!history.undo(&mut live));
        assert!(!history.redo(&mut live));

        history.commit(&live);
        assert!(!history.undo(&mut live));
        assert!(!history.redo(&mut live));
        assert_eq!(live, 7);
        assert_eq!(history.index(), Some(0));
    }

    #[test]
    fn test_commit_after_undo_drops_redo_branch() {
        let mut history = History::new(10);
        let mut live = 1;
        history.commit(&live);
        live = 2;
        history.commit(&live);
        live = 3;
        history.commit(&live);

        history.undo(&mut live);
        history.undo(&mut live);
        assert_eq!(live, 1);

        live = 10;
        history.commit(&live);
        assert_eq!(history.len(), 2);
        assert!(!history.can_redo());
        history.undo(&mut live);
        assert_eq!(live, 1);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = History::new(3);
        let mut live = 0;
        for i in 0..10 {
            live = i;
            history.commit(&live);
            assert!(history.len() <= 3);
        }
        assert_eq!(history.index(), Some(2));
        assert_eq!(history.current(), Some(&9));

        while history.undo(&mut live) {}
        assert_eq!(live, 7);
    }

    #[test]
    fn test_snapshots_are_independent_of_live_value() {
        let mut history = History::new(5);
        let mut live = vec![String::from("a")];
        history.commit(&live);
        live[0].push('!');
        history.commit(&live);

        history.undo(&mut live);
        live[0].push('?');
        history.redo(&mut live);
        assert_eq!(live, vec![String::from("a!")]);
        history.undo(&mut live);
        assert_eq!(live, vec![String::from("a")]);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new(5);
        history.commit(&1);
        history.commit(&2);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.index(), None);
    }
}
