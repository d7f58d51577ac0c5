use glam::I64Vec2;
use miette::*;

/// An axis-aligned, zero-width wall from `start` to `end`.
///
/// `x` runs along the plane's vertical extent (`0..=R`) and `y` along its
/// horizontal extent (`0..=C`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: I64Vec2,
    pub end: I64Vec2,
}

impl Segment {
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self {
            start: I64Vec2::new(x1, y1),
            end: I64Vec2::new(x2, y2),
        }
    }

    pub fn is_axis_aligned(&self) -> bool {
        self.start.x == self.end.x || self.start.y == self.end.y
    }

    /// Returns the same wall with `start <= end` on both axes.
    pub fn normalized(&self) -> Self {
        Self {
            start: self.start.min(self.end),
            end: self.start.max(self.end),
        }
    }
}

/// The plane dimensions and its walls, stored as four parallel coordinate
/// columns (one entry per segment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    rows: i64,
    cols: i64,
    x1: Vec<i64>,
    y1: Vec<i64>,
    x2: Vec<i64>,
    y2: Vec<i64>,
}

impl Configuration {
    /// Builds a validated configuration.
    ///
    /// Fails when the coordinate columns differ in length, when the plane is
    /// empty or its area does not fit in an `i64`, or when any segment is
    /// diagonal or leaves the `R x C` plane.
    pub fn new(
        rows: i64,
        cols: i64,
        x1: Vec<i64>,
        y1: Vec<i64>,
        x2: Vec<i64>,
        y2: Vec<i64>,
    ) -> Result<Self> {
        let n = x1.len();
        ensure!(
            y1.len() == n && x2.len() == n && y2.len() == n,
            "Coordinate columns differ in length: x1={}, y1={}, x2={}, y2={}",
            n,
            y1.len(),
            x2.len(),
            y2.len()
        );
        ensure!(
            rows >= 1 && cols >= 1,
            "Plane must be at least 1x1, got {}x{}",
            rows,
            cols
        );
        ensure!(
            rows.checked_mul(cols).is_some(),
            "Plane area {}x{} overflows a 64-bit integer",
            rows,
            cols
        );

        let cfg = Self {
            rows,
            cols,
            x1,
            y1,
            x2,
            y2,
        };

        for (i, segment) in cfg.segments().enumerate() {
            let (s, e) = (segment.start, segment.end);
            ensure!(
                segment.is_axis_aligned(),
                "Segment {} ({},{})-({},{}) is not axis-aligned",
                i,
                s.x,
                s.y,
                e.x,
                e.y
            );
            let inside = |p: I64Vec2| (0..=rows).contains(&p.x) && (0..=cols).contains(&p.y);
            ensure!(
                inside(s) && inside(e),
                "Segment {} ({},{})-({},{}) leaves the {}x{} plane",
                i,
                s.x,
                s.y,
                e.x,
                e.y,
                rows,
                cols
            );
        }

        Ok(cfg)
    }

    pub fn from_segments(
        rows: i64,
        cols: i64,
        segments: impl IntoIterator<Item = Segment>,
    ) -> Result<Self> {
        let (mut x1, mut y1, mut x2, mut y2) = (Vec::new(), Vec::new(), Vec::new(), Vec::new());
        for s in segments {
            x1.push(s.start.x);
            y1.push(s.start.y);
            x2.push(s.end.x);
            y2.push(s.end.y);
        }
        Self::new(rows, cols, x1, y1, x2, y2)
    }

    /// Vertical extent `R`.
    pub fn rows(&self) -> i64 {
        self.rows
    }

    /// Horizontal extent `C`.
    pub fn cols(&self) -> i64 {
        self.cols
    }

    /// Area of the whole plane, the upper bound of any answer.
    pub fn area(&self) -> i64 {
        self.rows * self.cols
    }

    pub fn len(&self) -> usize {
        self.x1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x1.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.len()).map(|i| Segment::new(self.x1[i], self.y1[i], self.x2[i], self.y2[i]))
    }

    /// The four sides of the plane as walls: left, right, top, bottom.
    pub fn sides(&self) -> [Segment; 4] {
        let (r, c) = (self.rows, self.cols);
        [
            Segment::new(0, 0, r, 0),
            Segment::new(0, c, r, c),
            Segment::new(0, 0, 0, c),
            Segment::new(r, 0, r, c),
        ]
    }

    /// Every wall to paint, the plane's own sides included, with endpoints
    /// normalized.
    pub fn walls(&self) -> impl Iterator<Item = Segment> + '_ {
        self.segments()
            .chain(self.sides())
            .map(|s| s.normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn walls_include_plane_sides() -> Result<()> {
        let cfg = Configuration::from_segments(3, 5, [Segment::new(1, 0, 1, 2)])?;
        let walls = cfg.walls().collect::<Vec<_>>();
        assert_eq!(walls.len(), 5);
        assert_eq!(walls[0], Segment::new(1, 0, 1, 2));
        assert!(walls.contains(&Segment::new(3, 0, 3, 5)));
        assert!(walls.contains(&Segment::new(0, 5, 3, 5)));
        assert_eq!(cfg.area(), 15);
        Ok(())
    }

    #[test]
    fn reversed_endpoints_are_normalized() {
        let s = Segment::new(2, 5, 2, 3).normalized();
        assert_eq!(s, Segment::new(2, 3, 2, 5));
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let err = Configuration::new(3, 3, vec![1, 2], vec![0], vec![1], vec![1]).unwrap_err();
        assert!(err.to_string().contains("differ in length"));
    }

    #[rstest]
    #[case::diagonal(Segment::new(0, 0, 1, 1), "not axis-aligned")]
    #[case::past_bottom(Segment::new(4, 0, 4, 2), "leaves")]
    #[case::negative(Segment::new(1, -1, 1, 2), "leaves")]
    #[case::past_right(Segment::new(0, 1, 0, 6), "leaves")]
    fn invalid_segments_are_rejected(#[case] segment: Segment, #[case] message: &str) {
        let err = Configuration::from_segments(3, 5, [segment]).unwrap_err();
        assert!(err.to_string().contains(message), "{err}");
    }

    #[rstest]
    #[case(0, 5)]
    #[case(3, 0)]
    #[case(i64::MAX, 2)]
    fn degenerate_planes_are_rejected(#[case] rows: i64, #[case] cols: i64) {
        assert!(Configuration::from_segments(rows, cols, std::iter::empty()).is_err());
    }

    #[test]
    fn point_segments_are_accepted() -> Result<()> {
        let cfg = Configuration::from_segments(2, 2, [Segment::new(1, 1, 1, 1)])?;
        assert_eq!(cfg.len(), 1);
        Ok(())
    }
}
