//! Display labels for tile levels.

use serde::{Deserialize, Serialize};

use super::grid::{Level, MAX_LEVEL};

/// Level → display string table: `["", "2", "4", "8", …]`.
///
/// Grows lazily as merges produce higher levels. Entry 0 is always the empty
/// string and every later entry is twice the previous one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLabels {
    labels: Vec<String>,
}

impl Default for TileLabels {
    fn default() -> Self {
        Self {
            labels: vec![String::new(), "2".to_string(), "4".to_string()],
        }
    }
}

impl TileLabels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the table so that `level` has a label. Levels above
    /// [`MAX_LEVEL`] are treated as `MAX_LEVEL`.
    pub fn ensure(&mut self, level: Level) {
        let level = level.min(MAX_LEVEL);
        while self.labels.len() <= usize::from(level) {
            let next = 1u64 << self.labels.len();
            self.labels.push(next.to_string());
        }
    }

    /// Label for `level`; empty if the table has not grown that far.
    #[must_use]
    pub fn label(&self, level: Level) -> &str {
        self.labels
            .get(usize::from(level))
            .map_or("", String::as_str)
    }

    /// Number of levels with a label, including the empty level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
