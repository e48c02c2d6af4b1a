use crate::history::clock;
use crate::history::entry::{EntryKind, HistoryEntry};
use serde_json::Value as JsonValue;
use std::collections::VecDeque;
use std::path::Path;
use tracing::{info, warn};

pub const DEFAULT_CAPACITY: usize = 50;

/// Newest-first log of committed results, capped at `capacity` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl History {
    /// A capacity of 0 is treated as 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stamp and record a committed result.
    pub fn record(
        &mut self,
        kind: EntryKind,
        expression: impl Into<String>,
        result: impl Into<String>,
    ) -> &HistoryEntry {
        self.push(HistoryEntry {
            kind,
            expression: expression.into(),
            result: result.into(),
            timestamp: clock::now(),
        })
    }

    /// Insert at the front, dropping the oldest entries past capacity.
    pub fn push(&mut self, entry: HistoryEntry) -> &HistoryEntry {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
        &self.entries[0]
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn calc_entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().filter(|e| !e.kind.is_gst())
    }

    pub fn gst_entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().filter(|e| e.kind.is_gst())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Read a persisted history array.
    ///
    /// Items that are not entries (older saves stored bare strings) are
    /// skipped; anything past `capacity` is dropped.
    pub fn from_json(json: &str, capacity: usize) -> Result<Self, serde_json::Error> {
        let capacity = capacity.max(1);
        let items: Vec<JsonValue> = serde_json::from_str(json)?;
        let total = items.len();

        let mut entries: VecDeque<HistoryEntry> = items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect();
        if entries.len() < total {
            warn!(
                skipped = total - entries.len(),
                "skipped unreadable history items"
            );
        }
        if entries.len() > capacity {
            warn!(
                dropped = entries.len() - capacity,
                capacity, "history exceeds capacity, dropping oldest"
            );
            entries.truncate(capacity);
        }

        Ok(Self { entries, capacity })
    }

    /// Load from a JSON file; a missing file is an empty history.
    pub fn load_from_file<P: AsRef<Path>>(
        path: P,
        capacity: usize,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::with_capacity(capacity));
        }
        let content = std::fs::read_to_string(path)?;
        let history = Self::from_json(&content, capacity)?;
        info!(path = %path.display(), entries = history.len(), "loaded history");
        Ok(history)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(kind: EntryKind, expression: &str) -> HistoryEntry {
        HistoryEntry {
            kind,
            expression: expression.to_string(),
            result: "0".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 4, 1, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_newest_first() {
        let mut history = History::default();
        history.record(EntryKind::Calc, "1+1", "2");
        history.record(EntryKind::Calc, "2+2", "4");
        let expressions: Vec<&str> = history.entries().map(|e| e.expression.as_str()).collect();
        assert_eq!(expressions, vec!["2+2", "1+1"]);
    }

    #[test]
    fn test_capped_at_capacity() {
        let mut history = History::default();
        for i in 0..60 {
            history.record(EntryKind::Calc, format!("{}+0", i), i.to_string());
        }
        assert_eq!(history.len(), DEFAULT_CAPACITY);
        assert_eq!(history.entries().next().unwrap().expression, "59+0");
        assert_eq!(history.entries().last().unwrap().expression, "10+0");
    }

    #[test]
    fn test_zero_capacity_keeps_newest_entry() {
        let mut history = History::with_capacity(0);
        history.record(EntryKind::Calc, "1+1", "2");
        history.record(EntryKind::Calc, "2+2", "4");
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.len(), 1);

        let reloaded = History::from_json(&history.to_json().unwrap(), 0).unwrap();
        assert_eq!(reloaded, history);
    }

    #[test]
    fn test_split_by_kind() {
        let mut history = History::default();
        history.push(entry(EntryKind::Calc, "a"));
        history.push(entry(EntryKind::Gst, "b"));
        history.push(entry(EntryKind::GstQuick, "c"));
        assert_eq!(history.calc_entries().count(), 1);
        assert_eq!(history.gst_entries().count(), 2);

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let mut history = History::default();
        history.push(entry(EntryKind::GstQuick, "100 + 18%"));
        let json: serde_json::Value = serde_json::from_str(&history.to_json().unwrap()).unwrap();
        assert_eq!(json[0]["type"], "GST_QUICK");
        assert_eq!(json[0]["expression"], "100 + 18%");
        assert_eq!(json[0]["timestamp"], "2024-04-01T10:30:00Z");
    }

    #[test]
    fn test_from_json_skips_legacy_items() {
        let json = r#"[
            "5+5 = 10",
            {"type": "CALC", "expression": "2+2", "result": "4", "timestamp": "2024-04-01T10:30:00.000Z"},
            {"type": "GST", "expression": "100 + 18%", "result": "118", "timestamp": "2024-04-01T10:31:00.000Z"}
        ]"#;
        let history = History::from_json(json, 50).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries().next().unwrap().result, "4");
    }

    #[test]
    fn test_from_json_truncates() {
        let mut history = History::with_capacity(10);
        for i in 0..10 {
            history.push(entry(EntryKind::Calc, &i.to_string()));
        }
        let loaded = History::from_json(&history.to_json().unwrap(), 3).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.entries().next().unwrap().expression, "9");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let empty = History::load_from_file(&path, 50).unwrap();
        assert!(empty.is_empty());

        let mut history = History::default();
        history.push(entry(EntryKind::Calc, "6×7"));
        history.save_to_file(&path).unwrap();

        let loaded = History::load_from_file(&path, 50).unwrap();
        assert_eq!(loaded, history);
    }
}
