/// Represents a range of integer scalar samples.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ScalarRange {
    /// Lower bound
    pub low: i32,
    /// Upper bound
    pub high: i32,
}

impl ScalarRange {
    /// Constructs new, empty range.
    /// Bounds are inverted, so the first `extend` snaps to its value.
    pub fn empty() -> ScalarRange {
        ScalarRange {
            low: i32::MAX,
            high: i32::MIN,
        }
    }

    /// Constructs new range with one element, `val`.
    pub fn seed(val: i32) -> ScalarRange {
        ScalarRange {
            low: val,
            high: val,
        }
    }

    /// Constructs minimal range, where all samples are inside the range.
    pub fn from_samples(samples: &[i32]) -> ScalarRange {
        let mut range = ScalarRange::empty();
        for &val in samples {
            range.extend(val);
        }
        range
    }

    /// Extend the range with new value.
    pub fn extend(&mut self, val: i32) {
        if val > self.high {
            self.high = val;
        }

        if val < self.low {
            self.low = val;
        }
    }

    /// Check if value is inside the range.
    pub fn contains(&self, val: i32) -> bool {
        self.low <= val && val <= self.high
    }

    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }

    /// Distance between the bounds. Empty ranges have zero width.
    pub fn width(&self) -> u32 {
        if self.is_empty() {
            return 0;
        }
        (self.high as i64 - self.low as i64) as u32
    }
}

impl Default for ScalarRange {
    fn default() -> Self {
        Self::empty()
    }
}
