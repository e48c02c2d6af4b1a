use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryKind {
    /// Committed calculator expression.
    Calc,
    /// GST computation.
    Gst,
    /// GST applied from a quick key on the calculator.
    GstQuick,
}

impl EntryKind {
    pub fn is_gst(&self) -> bool {
        matches!(self, EntryKind::Gst | EntryKind::GstQuick)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HistoryEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub expression: String,
    pub result: String,
    pub timestamp: DateTime<Utc>,
}
