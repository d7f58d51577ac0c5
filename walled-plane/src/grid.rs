use bitvec::prelude::*;

use crate::compress::AxisMap;
use crate::config::{Configuration, Segment};

/// Grid value of a point, line or cell covered by a wall.
pub const BLOCKED: i64 = -1;

/// A dense 2D grid wrapper for flattened row-major vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid2D<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid2D<T> {
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            None
        } else {
            Some(&self.data[row * self.cols + col])
        }
    }

    #[inline(always)]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row >= self.rows || col >= self.cols {
            None
        } else {
            Some(&mut self.data[row * self.cols + col])
        }
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.data[row * self.cols..(row + 1) * self.cols]
    }
}

impl<T: Clone + Default> Grid2D<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::default())
    }
}

/// The plane reduced to its distinct wall coordinates.
///
/// Rows follow the x axis and columns the y axis. By parity of `(row, col)`:
/// (even, even) is a point, (even, odd) and (odd, even) are zero-width lines,
/// and (odd, odd) is a cell with real area.
#[derive(Debug, Clone)]
pub struct CompressedGrid {
    x_axis: AxisMap,
    y_axis: AxisMap,
    rows: usize,
    cols: usize,
    blocked: BitVec<u64, Lsb0>,
    dx: Vec<i64>,
    dy: Vec<i64>,
}

impl CompressedGrid {
    #[tracing::instrument(skip_all, fields(segments = cfg.len()))]
    pub fn build(cfg: &Configuration) -> Self {
        let walls = cfg.walls().collect::<Vec<_>>();

        let x_axis = AxisMap::new(walls.iter().flat_map(|s| [s.start.x, s.end.x]));
        let y_axis = AxisMap::new(walls.iter().flat_map(|s| [s.start.y, s.end.y]));
        let rows = x_axis.grid_len();
        let cols = y_axis.grid_len();

        tracing::debug!(
            distinct_x = x_axis.len(),
            distinct_y = y_axis.len(),
            rows,
            cols,
            "compressed plane"
        );

        let mut grid = Self {
            dx: x_axis.widths(),
            dy: y_axis.widths(),
            x_axis,
            y_axis,
            rows,
            cols,
            blocked: bitvec![u64, Lsb0; 0; rows * cols],
        };

        for wall in &walls {
            grid.paint(wall);
        }
        grid
    }

    /// Marks every point, line and cell in the wall's footprint as blocked.
    /// Painting is idempotent, so overlapping walls are harmless.
    fn paint(&mut self, wall: &Segment) {
        if self.rows == 0 || self.cols == 0 {
            return;
        }
        let r0 = self.x_axis.grid_index_of(wall.start.x);
        let r1 = self.x_axis.grid_index_of(wall.end.x).min(self.rows - 1);
        let c0 = self.y_axis.grid_index_of(wall.start.y);
        let c1 = self.y_axis.grid_index_of(wall.end.y).min(self.cols - 1);

        for row in r0..=r1 {
            let base = row * self.cols;
            self.blocked[base + c0..=base + c1].fill(true);
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn is_blocked(&self, row: usize, col: usize) -> bool {
        self.blocked[row * self.cols + col]
    }

    /// The grid as values: [`BLOCKED`] where a wall lies, 0 elsewhere.
    pub fn values(&self) -> Grid2D<i64> {
        let mut values = Grid2D::new(self.rows, self.cols);
        for idx in self.blocked.iter_ones() {
            if let Some(v) = values.get_mut(idx / self.cols, idx % self.cols) {
                *v = BLOCKED;
            }
        }
        values
    }

    /// Physical height of each grid row.
    pub fn dx(&self) -> &[i64] {
        &self.dx
    }

    /// Physical width of each grid column.
    pub fn dy(&self) -> &[i64] {
        &self.dy
    }

    pub fn x_axis(&self) -> &AxisMap {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &AxisMap {
        &self.y_axis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use miette::Result;

    fn render(grid: &CompressedGrid) -> Vec<String> {
        (0..grid.rows())
            .map(|r| {
                (0..grid.cols())
                    .map(|c| if grid.is_blocked(r, c) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn empty_plane_is_one_walled_cell() -> Result<()> {
        let cfg = Configuration::from_segments(4, 7, std::iter::empty())?;
        let grid = CompressedGrid::build(&cfg);
        assert_eq!((grid.rows(), grid.cols()), (3, 3));
        assert_eq!(render(&grid), vec!["###", "#.#", "###"]);
        assert_eq!(grid.dx(), &[0, 4, 0]);
        assert_eq!(grid.dy(), &[0, 7, 0]);
        Ok(())
    }

    #[test]
    fn paints_interior_walls() -> Result<()> {
        // A vertical wall from (1,0) to (1,2) on a 3x5 plane.
        let cfg = Configuration::from_segments(3, 5, [Segment::new(1, 0, 1, 2)])?;
        let grid = CompressedGrid::build(&cfg);
        assert_eq!(grid.x_axis().coords(), &[0, 1, 3]);
        assert_eq!(grid.y_axis().coords(), &[0, 2, 5]);
        assert_eq!(
            render(&grid),
            vec![
                "#####", //
                "#...#",
                "###.#",
                "#...#",
                "#####",
            ]
        );
        assert_eq!(grid.dx(), &[0, 1, 0, 2, 0]);
        assert_eq!(grid.dy(), &[0, 2, 0, 3, 0]);
        Ok(())
    }

    #[test]
    fn reversed_and_duplicate_walls_paint_the_same() -> Result<()> {
        let forward = Configuration::from_segments(3, 5, [Segment::new(1, 0, 1, 2)])?;
        let noisy = Configuration::from_segments(
            3,
            5,
            [
                Segment::new(1, 2, 1, 0),
                Segment::new(1, 0, 1, 2),
                Segment::new(1, 0, 1, 2),
            ],
        )?;
        assert_eq!(
            render(&CompressedGrid::build(&forward)),
            render(&CompressedGrid::build(&noisy))
        );
        Ok(())
    }

    #[test]
    fn values_mark_blocked_with_sentinel() -> Result<()> {
        let cfg = Configuration::from_segments(2, 2, [Segment::new(1, 1, 1, 1)])?;
        let grid = CompressedGrid::build(&cfg);
        let values = grid.values();
        assert_eq!(values.get(2, 2), Some(&BLOCKED));
        assert_eq!(values.get(1, 1), Some(&0));
        assert_eq!(values.get(0, 3), Some(&BLOCKED));
        assert_eq!(values.get(5, 0), None);
        assert_eq!(values.row(1), &[BLOCKED, 0, 0, 0, BLOCKED]);
        Ok(())
    }
}
