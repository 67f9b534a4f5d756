use serde::{Deserialize, Serialize};

use crate::error::OutOfRange;
use crate::symbols::Symbol;

pub const REELS: usize = 3;
pub const ROWS: usize = 3;

/// The visible 3x3 symbol window. Column-major: one column per reel, so a
/// redraw while a reel spins replaces exactly one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    columns: [[Symbol; ROWS]; REELS],
}

impl Grid {
    pub fn from_columns(columns: [[Symbol; ROWS]; REELS]) -> Self {
        Self { columns }
    }

    /// Row-major constructor; handy for writing layouts the way they are
    /// displayed.
    pub fn from_rows(rows: [[Symbol; REELS]; ROWS]) -> Self {
        let mut columns = [[rows[0][0]; ROWS]; REELS];
        for (r, row) in rows.iter().enumerate() {
            for (c, symbol) in row.iter().enumerate() {
                columns[c][r] = *symbol;
            }
        }
        Self { columns }
    }

    pub fn filled(symbol: Symbol) -> Self {
        Self {
            columns: [[symbol; ROWS]; REELS],
        }
    }

    pub fn fill_column(&mut self, col: usize, symbols: [Symbol; ROWS]) -> Result<(), OutOfRange> {
        if col >= REELS {
            return Err(OutOfRange {
                axis: "reel",
                index: col,
                max: REELS - 1,
            });
        }
        self.columns[col] = symbols;
        Ok(())
    }

    pub fn get(&self, col: usize, row: usize) -> Result<Symbol, OutOfRange> {
        if col >= REELS {
            return Err(OutOfRange {
                axis: "reel",
                index: col,
                max: REELS - 1,
            });
        }
        if row >= ROWS {
            return Err(OutOfRange {
                axis: "row",
                index: row,
                max: ROWS - 1,
            });
        }
        Ok(self.columns[col][row])
    }

    /// Immutable copy of the window, indexed `[column][row]`.
    pub fn snapshot(&self) -> [[Symbol; ROWS]; REELS] {
        self.columns
    }
}
