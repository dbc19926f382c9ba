//! Board and status text.
//!
//! ```text
//! Score: 12, Moves: 3 Powerups used: 0
//!  2 | 4  |   |
//!    | 16 |   |
//!    |    |   |
//!    |    | 2 |
//! Undos left: 2, swaps left: 1, deletes left: 0
//! ```

use std::fmt;

use crate::core::{GameSession, SIZE};

use super::playtime::format_playtime;

/// Display adapter that renders a session as the terminal game shows it.
#[derive(Clone, Copy, Debug)]
pub struct Board<'a>(pub &'a GameSession);

/// Render `session` as text.
#[must_use]
pub fn render(session: &GameSession) -> String {
    Board(session).to_string()
}

impl Board<'_> {
    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let powerups = session.powerups();
        let status = session.status();

        write!(f, "Score: {}, Moves: {}", session.score(), session.moves())?;
        if powerups.enabled() {
            write!(f, " Powerups used: {}", powerups.used)?;
        }
        if powerups.practice() {
            write!(f, " (PRACTICE MODE)")?;
        }
        if status.won {
            write!(f, " (GAME WON)")?;
        }
        if status.custom_grid {
            write!(f, " (CUSTOM GRID USED)")?;
        }
        Ok(())
    }

    fn write_grid(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let grid = session.grid();
        let labels = session.tiles();

        let widths: [usize; SIZE] = std::array::from_fn(|col| {
            grid.column(col)
                .iter()
                .map(|&level| labels.label(level).len())
                .max()
                .unwrap_or(0)
        });

        for row in grid.rows() {
            writeln!(f)?;
            for (col, (&level, width)) in row.iter().zip(widths).enumerate() {
                let label = labels.label(level);
                if col > 0 {
                    write!(f, "|")?;
                }
                if col == SIZE - 1 {
                    // The last cell keeps its leading pad only.
                    let front = (width - label.len()) / 2 + 1;
                    write!(f, "{:front$}{label}", "")?;
                } else {
                    write!(f, " {label:^width$} ")?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let powerups = session.powerups();

        self.write_header(f)?;
        self.write_grid(f)?;

        if powerups.enabled() {
            write!(
                f,
                "\nUndos left: {}, swaps left: {}, deletes left: {}",
                powerups.undo, powerups.swap, powerups.delete
            )?;
        }
        if session.status().is_lost() {
            let seconds = session.playtime().map_or(0, |elapsed| elapsed.num_seconds());
            write!(f, "\nGAME OVER, PLAYTIME: {}", format_playtime(seconds))?;
        }
        Ok(())
    }
}
