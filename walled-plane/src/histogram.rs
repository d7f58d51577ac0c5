use miette::*;

/// A bar that is still open during the scan: its height and the leftmost
/// column it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub height: i64,
    pub start: usize,
}

impl Bar {
    /// Physical length of the bar's base when it closes right before `end`.
    #[inline]
    pub fn bottom(&self, end: usize, cum_widths: &[i64]) -> i64 {
        cum_widths[end] - cum_widths[self.start]
    }

    #[inline]
    pub fn area(&self, end: usize, cum_widths: &[i64]) -> i64 {
        self.height * self.bottom(end, cum_widths)
    }
}

/// A skyline of bars with individual widths.
///
/// Widths are fixed at construction; heights can be swapped row after row
/// so the prefix sums are built only once. Negative heights (blocked
/// positions) count as 0.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// One entry per bar plus a trailing 0 that flushes the stack.
    heights: Vec<i64>,
    /// `cum_widths[i]` is the total width of bars `0..i`.
    cum_widths: Vec<i64>,
}

impl Histogram {
    pub fn new(widths: &[i64]) -> Self {
        let mut cum_widths = Vec::with_capacity(widths.len() + 2);
        cum_widths.push(0);
        let mut total = 0;
        for &w in widths.iter().chain(std::iter::once(&0)) {
            total += w;
            cum_widths.push(total);
        }

        Self {
            heights: vec![0; widths.len() + 1],
            cum_widths,
        }
    }

    /// A histogram where every bar is one unit wide.
    pub fn with_unit_widths(len: usize) -> Self {
        Self::new(&vec![1; len])
    }

    /// Number of bars, not counting the sentinel.
    pub fn len(&self) -> usize {
        self.heights.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn set_heights(&mut self, heights: &[i64]) -> Result<()> {
        ensure!(
            heights.len() == self.len(),
            "The length of heights and widths must be the same: heights={}, widths={}",
            heights.len(),
            self.len()
        );
        for (dst, &h) in self.heights.iter_mut().zip(heights) {
            *dst = h.max(0);
        }
        Ok(())
    }

    /// Largest rectangle under the skyline, measured with the bar widths.
    ///
    /// The stack holds bars of strictly increasing height. A bar of equal
    /// height keeps the one already open; a lower bar closes every open bar
    /// at least as tall and takes over the leftmost start among them.
    pub fn max_area(&self) -> i64 {
        let mut max_area = 0;
        let mut stack: Vec<Bar> = Vec::with_capacity(self.heights.len());

        for (pos, &height) in self.heights.iter().enumerate() {
            match stack.last() {
                Some(top) if top.height == height => {}
                Some(top) if top.height > height => {
                    let mut start = pos;
                    while let Some(&bar) = stack.last() {
                        if bar.height < height {
                            break;
                        }
                        stack.pop();
                        max_area = max_area.max(bar.area(pos, &self.cum_widths));
                        start = bar.start;
                    }
                    stack.push(Bar { height, start });
                }
                _ => stack.push(Bar { height, start: pos }),
            }
        }

        max_area
    }
}
