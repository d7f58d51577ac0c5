use itertools::Itertools;

/// Sorted, duplicate-free coordinates of one axis.
///
/// Coordinate `coords[p]` lands on grid index `2 * p`; the odd grid index
/// `2 * p + 1` is the band between `coords[p]` and `coords[p + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisMap {
    coords: Vec<i64>,
}

impl AxisMap {
    pub fn new(coords: impl IntoIterator<Item = i64>) -> Self {
        let coords = coords.into_iter().sorted_unstable().dedup().collect();
        Self { coords }
    }

    /// Rank of a coordinate that is a member of this axis.
    ///
    /// # Panics
    ///
    /// When `val` was never added to the axis; its cell boundaries would be
    /// undefined.
    #[inline]
    pub fn index_of(&self, val: i64) -> usize {
        let idx = self.coords.partition_point(|&c| c < val);
        assert!(
            self.coords.get(idx) == Some(&val),
            "Coordinate {val} not found in axis map"
        );
        idx
    }

    /// Grid index of a member coordinate (always even).
    #[inline]
    pub fn grid_index_of(&self, val: i64) -> usize {
        self.index_of(val) * 2
    }

    /// Number of distinct coordinates.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Number of grid indices along this axis, `2 * len - 1`.
    pub fn grid_len(&self) -> usize {
        (self.coords.len() * 2).saturating_sub(1)
    }

    pub fn coords(&self) -> &[i64] {
        &self.coords
    }

    /// Physical extent of every grid index: 0 for the lines at even indices,
    /// the gap between neighbouring coordinates for the bands at odd ones.
    /// The last line closes the sequence with a trailing 0.
    pub fn widths(&self) -> Vec<i64> {
        let mut widths = Vec::with_capacity(self.grid_len());
        for (lo, hi) in self.coords.iter().tuple_windows() {
            widths.push(0);
            widths.push(hi - lo);
        }
        if !self.coords.is_empty() {
            widths.push(0);
        }
        widths
    }
}
