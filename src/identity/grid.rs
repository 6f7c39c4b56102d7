use crate::foundation::core::CellCoord;
use crate::foundation::error::{IdentimorphError, IdentimorphResult};
use crate::identity::digest::{DIGEST_LEN, Digest};

/// Largest `blocks` whose half-grid fits in one digest (`7 * 4 = 28 <= 32`).
pub const MAX_BLOCKS: usize = 7;

/// Number of digest-driven columns per row: `blocks / 2 + 1`.
pub fn half_width(blocks: usize) -> usize {
    blocks / 2 + 1
}

/// Left-right symmetric `blocks x blocks` map of which cells are drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivationGrid {
    blocks: usize,
    cells: Vec<bool>,
}

impl ActivationGrid {
    /// Side length in cells.
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// `(height, width)`; always square.
    pub fn shape(&self) -> (usize, usize) {
        (self.blocks, self.blocks)
    }

    /// Whether the cell at `(row, col)` is active. Out-of-range cells are inactive.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.blocks || col >= self.blocks {
            return false;
        }
        self.cells[row * self.blocks + col]
    }

    /// Whether `cell` is active.
    pub fn is_active(&self, cell: CellCoord) -> bool {
        self.get(cell.row, cell.col)
    }

    /// Active cells in row-major order.
    pub fn active_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let blocks = self.blocks;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(move |(i, _)| CellCoord::new(i / blocks, i % blocks))
    }

    /// Number of active cells.
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|on| **on).count()
    }

    /// Row `row` as a slice.
    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row * self.blocks..(row + 1) * self.blocks]
    }

    /// `true` when every row reads the same left-to-right and right-to-left.
    pub fn is_symmetric(&self) -> bool {
        (0..self.blocks).all(|r| {
            let row = self.row(r);
            row.iter().eq(row.iter().rev())
        })
    }

    /// Text rendering, one line per row: `#` active, `.` inactive.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.blocks * (self.blocks + 1));
        for r in 0..self.blocks {
            for &on in self.row(r) {
                out.push(if on { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}

/// Build the activation grid for `digest`.
///
/// The first `blocks * half_width` digest bytes, reduced mod 2 and read row-major, form the
/// left half (center column included for odd `blocks`). Column `c` of the full grid takes
/// half-column `min(c, blocks - 1 - c)`, which mirrors the half without duplicating the
/// center column for odd sizes.
pub fn build_grid(digest: &Digest, blocks: usize) -> IdentimorphResult<ActivationGrid> {
    if blocks == 0 {
        return Err(IdentimorphError::empty_frame_sequence(
            "activation grid needs at least one block",
        ));
    }
    let hw = half_width(blocks);
    let needed = blocks * hw;
    if needed > DIGEST_LEN {
        return Err(IdentimorphError::invalid_parameter(format!(
            "blocks={blocks} needs {needed} digest bytes but only {DIGEST_LEN} exist (max blocks is {MAX_BLOCKS})"
        )));
    }

    let bytes = digest.as_bytes();
    let mut cells = Vec::with_capacity(blocks * blocks);
    for row in 0..blocks {
        for col in 0..blocks {
            let half_col = col.min(blocks - 1 - col);
            cells.push(bytes[row * hw + half_col] % 2 == 1);
        }
    }

    Ok(ActivationGrid { blocks, cells })
}

#[cfg(test)]
#[path = "../../tests/unit/identity/grid.rs"]
mod tests;
