//! Bounded undo history.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::powerups::Uses;
use super::state::GameStatus;

/// State captured right before a mutating operation.
///
/// The undo counter is not captured; undo never refunds undo uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: Grid,
    pub score: u64,
    pub moves: u32,
    pub swaps: Uses,
    pub deletes: Uses,
    pub status: GameStatus,
    pub lost_at: Option<DateTime<Utc>>,
}

/// Snapshots, oldest first, capped at `depth`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    snapshots: VecDeque<Snapshot>,
    depth: usize,
}

impl History {
    #[must_use]
    pub fn new(depth: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(depth),
            depth,
        }
    }

    /// Push a snapshot, discarding the oldest ones beyond the cap.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push_back(snapshot);
        while self.snapshots.len() > self.depth {
            self.snapshots.pop_front();
        }
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }


    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }
}
