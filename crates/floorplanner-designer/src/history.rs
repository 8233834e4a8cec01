//! Linear undo/redo over floor plan snapshots.
//!
//! Every committed edit pushes a full [`FloorPlan`] snapshot. The entry
//! under the cursor is always the plan on screen. Committing after an undo
//! discards the redo tail, and the log never holds more than
//! [`MAX_HISTORY`] entries (oldest evicted first).

use floorplanner_core::constants::MAX_HISTORY;
use floorplanner_core::FloorPlan;
use floorplanner_settings::HistoryRecord;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryManager {
    entries: Vec<FloorPlan>,
    cursor: usize,
}

impl HistoryManager {
    /// A log holding only `initial`.
    pub fn new(initial: FloorPlan) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Restore from a persisted record. An empty record falls back to `fallback`.
    pub fn from_record(record: HistoryRecord, fallback: &FloorPlan) -> Self {
        match HistoryRecord::from_parts(record.entries, record.cursor) {
            Some(record) => Self {
                entries: record.entries,
                cursor: record.cursor,
            },
            None => Self::new(fallback.clone()),
        }
    }

    pub fn to_record(&self) -> HistoryRecord {
        HistoryRecord {
            entries: self.entries.clone(),
            cursor: self.cursor,
        }
    }

    /// Replace the log with whatever the volatile tier actually kept.
    pub fn adopt(&mut self, record: HistoryRecord) {
        if let Some(record) = HistoryRecord::from_parts(record.entries, record.cursor) {
            self.entries = record.entries;
            self.cursor = record.cursor;
        }
    }

    /// Record `plan` as the newest state.
    pub fn commit(&mut self, plan: FloorPlan) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(plan);
        if self.entries.len() > MAX_HISTORY {
            let excess = self.entries.len() - MAX_HISTORY;
            self.entries.drain(..excess);
            debug!(evicted = excess, "History full, dropped oldest entries");
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step back. Returns the plan to display, or `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&FloorPlan> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward. Returns the plan to display, or `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&FloorPlan> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn current(&self) -> Option<&FloorPlan> {
        self.entries.get(self.cursor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[FloorPlan] {
        &self.entries
    }

    /// Drop everything and restart from `plan`.
    pub fn reset(&mut self, plan: FloorPlan) {
        self.entries = vec![plan];
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(name: &str) -> FloorPlan {
        FloorPlan::named(name)
    }

    #[test]
    fn test_undo_redo_bounds() {
        let mut history = HistoryManager::new(plan("a"));
        assert!(!history.can_undo());
        assert!(history.undo().is_none());
        history.commit(plan("b"));
        assert_eq!(history.undo().map(|p| p.name.as_str()), Some("a"));
        assert!(history.undo().is_none());
        assert_eq!(history.redo().map(|p| p.name.as_str()), Some("b"));
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_from_record_clamps_cursor() {
        let record = HistoryRecord {
            entries: vec![plan("a"), plan("b")],
            cursor: 9,
        };
        let history = HistoryManager::from_record(record, &plan("x"));
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.len(), 2);

        let empty = HistoryRecord {
            entries: Vec::new(),
            cursor: 0,
        };
        let history = HistoryManager::from_record(empty, &plan("x"));
        assert_eq!(history.current().map(|p| p.name.as_str()), Some("x"));
    }

    #[test]
    fn test_adopt_ignores_empty_record() {
        let mut history = HistoryManager::new(plan("a"));
        history.commit(plan("b"));
        history.adopt(HistoryRecord {
            entries: Vec::new(),
            cursor: 0,
        });
        assert_eq!(history.len(), 2);
        history.adopt(HistoryRecord::seeded(plan("b")));
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
    }
}
