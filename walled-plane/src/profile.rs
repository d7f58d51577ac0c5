use crate::grid::{CompressedGrid, Grid2D, BLOCKED};

/// For each grid position, the physical distance a rectangle resting on that
/// row can reach upward without touching a wall.
///
/// Blocked positions hold [`BLOCKED`]. Lines add no height of their own, so
/// crossing a free line between two cells only continues the run.
#[derive(Debug, Clone)]
pub struct HeightProfile {
    heights: Grid2D<i64>,
}

impl HeightProfile {
    #[tracing::instrument(skip_all, fields(rows = grid.rows(), cols = grid.cols()))]
    pub fn compute(grid: &CompressedGrid) -> Self {
        let mut heights = grid.values();
        let dx = grid.dx();

        for i in 1..grid.rows() {
            for j in 0..grid.cols() {
                if grid.is_blocked(i, j) {
                    continue;
                }
                // A wall right above starts a fresh run.
                let above = if grid.is_blocked(i - 1, j) {
                    0
                } else {
                    heights.get(i - 1, j).copied().unwrap_or(0)
                };
                if let Some(h) = heights.get_mut(i, j) {
                    *h = above + dx[i];
                }
            }
        }

        Self { heights }
    }

    pub fn rows(&self) -> usize {
        self.heights.rows()
    }

    pub fn row(&self, row: usize) -> &[i64] {
        self.heights.row(row)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        self.heights.get(row, col).copied()
    }

    pub fn is_blocked(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(BLOCKED)
    }
}
