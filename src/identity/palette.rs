use crate::foundation::core::{CellCoord, Rgb8};
use crate::identity::digest::Digest;

/// Color of `cell`: three consecutive digest bytes starting at `(row + col) mod 32`.
///
/// Reads past the last byte wrap to the start of the digest. Grids of at most
/// [`MAX_BLOCKS`](crate::MAX_BLOCKS) never reach the wrap, but the rule keeps every
/// coordinate well defined.
pub fn cell_color(digest: &Digest, cell: CellCoord) -> Rgb8 {
    let base = cell.row + cell.col;
    Rgb8::new(
        digest.byte_wrapping(base),
        digest.byte_wrapping(base + 1),
        digest.byte_wrapping(base + 2),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/identity/palette.rs"]
mod tests;
