use crate::foundation::core::CellCoord;
use crate::identity::grid::ActivationGrid;

/// Clockwise, outside-in traversal of every cell of a `height x width` rectangle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpiralOrder {
    height: usize,
    width: usize,
    cells: Vec<CellCoord>,
}

impl SpiralOrder {
    /// `(height, width)` of the traversed rectangle.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Number of steps, always `height * width`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` for a zero-area rectangle.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in traversal order.
    pub fn as_slice(&self) -> &[CellCoord] {
        &self.cells
    }

    /// Iterate cells in traversal order.
    pub fn iter(&self) -> std::slice::Iter<'_, CellCoord> {
        self.cells.iter()
    }

    /// Step index of every cell, laid out row-major (`ranks[row * width + col]`).
    pub fn ranks(&self) -> Vec<usize> {
        let mut ranks = vec![0; self.cells.len()];
        for (step, cell) in self.cells.iter().enumerate() {
            ranks[cell.row * self.width + cell.col] = step;
        }
        ranks
    }
}

impl<'a> IntoIterator for &'a SpiralOrder {
    type Item = &'a CellCoord;
    type IntoIter = std::slice::Iter<'a, CellCoord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Peel concentric rings: top row left to right, right column downwards, bottom row right to
/// left, left column upwards, shrinking the bounds after each side.
pub fn spiral_order(height: usize, width: usize) -> SpiralOrder {
    let mut cells = Vec::with_capacity(height * width);
    if height == 0 || width == 0 {
        return SpiralOrder {
            height,
            width,
            cells,
        };
    }

    // Signed bounds: `bottom`/`right` drop below `top`/`left` once the rectangle is consumed.
    let (mut top, mut left) = (0isize, 0isize);
    let (mut bottom, mut right) = (height as isize - 1, width as isize - 1);
    let at = |row: isize, col: isize| CellCoord::new(row as usize, col as usize);

    while top <= bottom && left <= right {
        for col in left..=right {
            cells.push(at(top, col));
        }
        top += 1;

        for row in top..=bottom {
            cells.push(at(row, right));
        }
        right -= 1;

        if top <= bottom {
            for col in (left..=right).rev() {
                cells.push(at(bottom, col));
            }
            bottom -= 1;
        }

        if left <= right {
            for row in (top..=bottom).rev() {
                cells.push(at(row, left));
            }
            left += 1;
        }
    }

    SpiralOrder {
        height,
        width,
        cells,
    }
}

/// Active cells among the first `step_limit + 1` spiral steps, in spiral order.
pub fn revealed_cells<'a>(
    order: &'a SpiralOrder,
    grid: &'a ActivationGrid,
    step_limit: usize,
) -> impl Iterator<Item = CellCoord> + 'a {
    order
        .iter()
        .take(step_limit.saturating_add(1))
        .copied()
        .filter(|cell| grid.is_active(*cell))
}

#[cfg(test)]
#[path = "../../tests/unit/identity/spiral.rs"]
mod tests;
