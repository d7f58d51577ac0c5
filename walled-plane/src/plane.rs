use miette::*;

use crate::config::Configuration;
use crate::grid::CompressedGrid;
use crate::histogram::Histogram;
use crate::profile::HeightProfile;

/// A plane compressed to its wall coordinates, with the upward reach of
/// every grid position already computed.
#[derive(Debug, Clone)]
pub struct CompressedPlane {
    grid: CompressedGrid,
    profile: HeightProfile,
    bound: i64,
}

impl CompressedPlane {
    pub fn build(cfg: &Configuration) -> Self {
        let grid = CompressedGrid::build(cfg);
        let profile = HeightProfile::compute(&grid);
        Self {
            grid,
            profile,
            bound: cfg.area(),
        }
    }

    pub fn grid(&self) -> &CompressedGrid {
        &self.grid
    }

    pub fn profile(&self) -> &HeightProfile {
        &self.profile
    }

    /// Largest wall-free rectangle, found by treating every cell row as the
    /// base of a histogram. Line rows have no height and are skipped.
    #[tracing::instrument(skip_all)]
    pub fn max_area(&self) -> Result<i64> {
        let mut histogram = Histogram::new(self.grid.dy());
        let mut max_area = 0;

        for row in (1..self.profile.rows()).step_by(2) {
            histogram.set_heights(self.profile.row(row))?;
            let area = histogram.max_area();
            tracing::trace!(row, area, "row maximum");
            max_area = max_area.max(area);
        }

        debug_assert!(
            (0..=self.bound).contains(&max_area),
            "area {max_area} outside 0..={}",
            self.bound
        );
        Ok(max_area)
    }
}

/// Area of the largest axis-aligned rectangle inside the plane whose interior
/// touches no wall.
#[tracing::instrument(skip_all, fields(rows = cfg.rows(), cols = cfg.cols(), segments = cfg.len()))]
pub fn solve(cfg: &Configuration) -> Result<i64> {
    let area = CompressedPlane::build(cfg).max_area()?;
    tracing::debug!(area, "solved");
    Ok(area)
}
