use crate::error::DiagonalLineError;
use crate::line::{Line, Orientation};

/// A closed integer interval `[min, max]` on a single axis.
///
/// Callers pass ordered bounds; `min <= max` is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    min: i64,
    max: i64,
}

impl Range {
    pub fn of(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// The span of `line` along the axis it varies on: Y for vertical
    /// lines, X for horizontal ones.
    pub fn of_line(line: &Line) -> Result<Self, DiagonalLineError> {
        Ok(Self::along(line, line.orientation()?))
    }

    /// Same as [`Range::of_line`] for a line whose orientation is known.
    pub(crate) fn along(line: &Line, orientation: Orientation) -> Self {
        let (a, b) = (line.point_a(), line.point_b());
        match orientation {
            Orientation::Vertical => Self::of(a.y, b.y),
            Orientation::Horizontal => Self::of(a.x, b.x),
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// `min <= value <= max`
    pub fn contains_inclusive(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// `min < value < max`
    pub fn contains_exclusive(&self, value: i64) -> bool {
        self.min < value && value < self.max
    }

    /// Whether `other` nests strictly inside this range, touching
    /// neither bound.
    pub fn contains_all_exclusive(&self, other: &Range) -> bool {
        other.min > self.min && other.max < self.max
    }

    pub fn distance(&self) -> i64 {
        self.max - self.min
    }

    /// The integers shared by both ranges, or `None` when they are disjoint.
    ///
    /// A result with `distance() == 0` means the ranges touch at a single
    /// coordinate.
    pub fn overlap(&self, other: &Range) -> Option<Range> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min <= max).then(|| Range::of(min, max))
    }
}
