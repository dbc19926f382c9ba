//! Slide-and-merge resolution.
//!
//! Every direction is resolved as a leftward slide: the grid is rotated so
//! the direction points left, each row is compacted and merged, and the
//! result is rotated back.
//!
//! Per row:
//! 1. Compact: drop empty cells
//! 2. Merge: equal neighbours combine pairwise, leftmost pair first, and a
//!    merged tile does not merge again in the same move
//! 3. Pad with empty cells back to the board width

use smallvec::SmallVec;

use crate::core::grid::{Direction, Grid, Level, MAX_LEVEL, SIZE};

/// What a directional slide would do to a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slide {
    /// No row has an empty cell and nothing can merge: the move is illegal.
    Blocked,
    /// The move is legal but nothing would move or merge.
    Unchanged,
    /// Tiles moved or merged.
    Moved(SlideOutcome),
}

impl Slide {
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        matches!(self, Slide::Blocked)
    }
}

/// Result of a slide that changed the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideOutcome {
    /// The grid after the slide, before any spawn.
    pub grid: Grid,
    /// Display value of every merged tile, summed.
    pub points: u64,
    /// Resulting level of every merge, in resolution order.
    pub merges: SmallVec<[Level; 8]>,
}

/// One row after a leftward slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RowSlide {
    pub row: [Level; SIZE],
    pub merges: SmallVec<[Level; 2]>,
    /// The row had an empty cell before compaction.
    pub had_empty: bool,
    pub changed: bool,
}

/// Display value of a tile.
#[must_use]
pub fn tile_value(level: Level) -> u64 {
    if level == 0 {
        0
    } else {
        1u64 << level.min(MAX_LEVEL)
    }
}

/// Slide one row towards index 0.
pub(crate) fn slide_row(row: [Level; SIZE]) -> RowSlide {
    let had_empty = row.contains(&0);
    // A gap followed by a tile means compaction moves something.
    let compacts = row
        .iter()
        .position(|&level| level == 0)
        .is_some_and(|gap| row[gap..].iter().any(|&level| level != 0));

    let tiles: SmallVec<[Level; SIZE]> = row.iter().copied().filter(|&level| level != 0).collect();

    let mut out = [0; SIZE];
    let mut merges = SmallVec::new();
    let mut write = 0;
    let mut read = 0;
    while read < tiles.len() {
        let level = tiles[read];
        if level < MAX_LEVEL && tiles.get(read + 1) == Some(&level) {
            out[write] = level + 1;
            merges.push(level + 1);
            read += 2;
        } else {
            out[write] = level;
            read += 1;
        }
        write += 1;
    }

    RowSlide {
        row: out,
        changed: compacts || !merges.is_empty(),
        had_empty,
        merges,
    }
}

/// Resolve a slide of `grid` towards `direction` without mutating anything.
#[must_use]
pub fn resolve(grid: &Grid, direction: Direction) -> Slide {
    let turns = direction.quarter_turns();
    let rotated = grid.rotated_ccw(turns);

    let mut rows = [[0; SIZE]; SIZE];
    let mut merges = SmallVec::new();
    let mut had_empty = false;
    let mut changed = false;

    for (out, row) in rows.iter_mut().zip(rotated.rows()) {
        let slid = slide_row(*row);
        *out = slid.row;
        had_empty |= slid.had_empty;
        changed |= slid.changed;
        merges.extend(slid.merges);
    }

    if !had_empty && merges.is_empty() {
        return Slide::Blocked;
    }
    if !changed {
        return Slide::Unchanged;
    }

    let points = merges
        .iter()
        .fold(0u64, |sum, &level| sum.saturating_add(tile_value(level)));

    Slide::Moved(SlideOutcome {
        grid: Grid::from_rows_unchecked(rows).rotated_cw(turns),
        points,
        merges,
    })
}

/// Whether no direction can be played on `grid`.
#[must_use]
pub fn is_stuck(grid: &Grid) -> bool {
    Direction::ALL
        .iter()
        .all(|&direction| resolve(grid, direction).is_blocked())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: [[Level; SIZE]; SIZE]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn moved(slide: Slide) -> SlideOutcome {
        match slide {
            Slide::Moved(outcome) => outcome,
            other => panic!("expected a move, got {other:?}"),
        }
    }

    // -------------------------------------------------------------------------
    // Row resolution
    // -------------------------------------------------------------------------

    #[test]
    fn test_compact_only() {
        let slid = slide_row([0, 1, 0, 2]);
        assert_eq!(slid.row, [1, 2, 0, 0]);
        assert!(slid.merges.is_empty());
        assert!(slid.changed);
        assert!(slid.had_empty);
    }

    #[test]
    fn test_already_packed_left() {
        let slid = slide_row([1, 2, 0, 0]);
        assert_eq!(slid.row, [1, 2, 0, 0]);
        assert!(!slid.changed);
        assert!(slid.had_empty);
    }

    #[test]
    fn test_merge_simple() {
        let slid = slide_row([1, 1, 0, 0]);
        assert_eq!(slid.row, [2, 0, 0, 0]);
        assert_eq!(slid.merges.as_slice(), &[2]);
    }

    #[test]
    fn test_merge_two_pairs() {
        let slid = slide_row([1, 1, 2, 2]);
        assert_eq!(slid.row, [2, 3, 0, 0]);
        assert_eq!(slid.merges.as_slice(), &[2, 3]);
        assert!(!slid.had_empty);
    }

    #[test]
    fn test_no_double_merge() {
        // [4, 2, 2, _] becomes [4, 4, _, _], not [8, _, _, _]
        let slid = slide_row([2, 1, 1, 0]);
        assert_eq!(slid.row, [2, 2, 0, 0]);
        assert_eq!(slid.merges.as_slice(), &[2]);
    }

    #[test]
    fn test_three_in_a_row() {
        let slid = slide_row([1, 1, 1, 0]);
        assert_eq!(slid.row, [2, 1, 0, 0]);
        assert_eq!(slid.merges.len(), 1);
    }

    #[test]
    fn test_merge_with_gaps() {
        let slid = slide_row([1, 0, 1, 0]);
        assert_eq!(slid.row, [2, 0, 0, 0]);
    }

    #[test]
    fn test_max_level_does_not_merge() {
        let slid = slide_row([MAX_LEVEL, MAX_LEVEL, 0, 0]);
        assert_eq!(slid.row, [MAX_LEVEL, MAX_LEVEL, 0, 0]);
        assert!(!slid.changed);
    }

    // -------------------------------------------------------------------------
    // Whole-grid resolution
    // -------------------------------------------------------------------------

    #[test]
    fn test_move_left() {
        let g = grid([[1, 1, 0, 0], [0, 2, 2, 0], [1, 0, 1, 0], [3, 3, 3, 3]]);
        let outcome = moved(resolve(&g, Direction::Left));
        assert_eq!(
            outcome.grid.rows(),
            &[[2, 0, 0, 0], [3, 0, 0, 0], [2, 0, 0, 0], [4, 4, 0, 0]]
        );
        assert_eq!(outcome.points, 4 + 8 + 4 + 16 + 16);
    }

    #[test]
    fn test_move_right() {
        let g = grid([[1, 1, 0, 0], [0, 2, 2, 0], [1, 0, 1, 0], [3, 3, 3, 3]]);
        let outcome = moved(resolve(&g, Direction::Right));
        assert_eq!(
            outcome.grid.rows(),
            &[[0, 0, 0, 2], [0, 0, 0, 3], [0, 0, 0, 2], [0, 0, 4, 4]]
        );
    }

    #[test]
    fn test_move_up() {
        let g = grid([[1, 0, 1, 3], [1, 2, 0, 3], [0, 2, 1, 3], [0, 0, 0, 3]]);
        let outcome = moved(resolve(&g, Direction::Up));
        assert_eq!(
            outcome.grid.rows(),
            &[[2, 3, 2, 4], [0, 0, 0, 4], [0, 0, 0, 0], [0, 0, 0, 0]]
        );
        assert_eq!(outcome.points, 4 + 8 + 4 + 16 + 16);
    }

    #[test]
    fn test_move_down() {
        let g = grid([[1, 0, 1, 3], [1, 2, 0, 3], [0, 2, 1, 3], [0, 0, 0, 3]]);
        let outcome = moved(resolve(&g, Direction::Down));
        assert_eq!(
            outcome.grid.rows(),
            &[[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 4], [2, 3, 2, 4]]
        );
    }

    #[test]
    fn test_unchanged_is_not_blocked() {
        let g = grid([[1, 0, 0, 0], [2, 0, 0, 0], [3, 0, 0, 0], [4, 0, 0, 0]]);
        assert_eq!(resolve(&g, Direction::Left), Slide::Unchanged);
        assert!(matches!(resolve(&g, Direction::Right), Slide::Moved(_)));
    }

    #[test]
    fn test_packed_rows_block_horizontally_only() {
        // Full board, no horizontal pairs, vertical pairs in column 0.
        let g = grid([[1, 2, 1, 2], [1, 3, 4, 3], [2, 1, 2, 1], [3, 2, 3, 2]]);
        assert!(resolve(&g, Direction::Left).is_blocked());
        assert!(resolve(&g, Direction::Right).is_blocked());
        assert!(matches!(resolve(&g, Direction::Up), Slide::Moved(_)));
        assert!(!is_stuck(&g));
    }

    #[test]
    fn test_checkerboard_is_stuck() {
        let g = grid([[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [2, 1, 2, 1]]);
        assert!(is_stuck(&g));
    }

    #[test]
    fn test_empty_grid_is_not_stuck() {
        assert!(!is_stuck(&Grid::empty()));
        assert_eq!(resolve(&Grid::empty(), Direction::Down), Slide::Unchanged);
    }

    #[test]
    fn test_tile_value() {
        assert_eq!(tile_value(0), 0);
        assert_eq!(tile_value(1), 2);
        assert_eq!(tile_value(11), 2048);
        assert_eq!(tile_value(63), 1u64 << 63);
    }
}
