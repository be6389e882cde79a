//! Axis-aligned line segments and line-level adjacency.
//!
//! A line is only meaningful when its endpoints share an X coordinate
//! (vertical) or a Y coordinate (horizontal). Operations that depend on
//! the orientation return [`DiagonalLineError`] for anything else.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Adjacency, DiagonalLineError, Point, Range};

/// The axis a line runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A segment from `point_a` to `point_b`.
///
/// Equality compares the ordered endpoint pair, so `a -> b` and `b -> a`
/// are different lines. Callers are expected to pass the endpoints in
/// increasing order; [`Line::length`] is negative otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    point_a: Point,
    point_b: Point,
}

impl Line {
    pub fn new(point_a: Point, point_b: Point) -> Self {
        Self { point_a, point_b }
    }

    pub fn point_a(&self) -> Point {
        self.point_a
    }

    pub fn point_b(&self) -> Point {
        self.point_b
    }

    pub fn points(&self) -> [Point; 2] {
        [self.point_a, self.point_b]
    }

    /// Same X means vertical, otherwise same Y means horizontal.
    pub fn orientation(&self) -> Result<Orientation, DiagonalLineError> {
        if self.point_a.x == self.point_b.x {
            Ok(Orientation::Vertical)
        } else if self.point_a.y == self.point_b.y {
            Ok(Orientation::Horizontal)
        } else {
            Err(DiagonalLineError { line: *self })
        }
    }

    /// Signed distance from `point_a` to `point_b` along the varying axis.
    pub fn length(&self) -> Result<i64, DiagonalLineError> {
        Ok(self.length_along(self.orientation()?))
    }

    /// Distinct X coordinates of the two endpoints.
    pub fn distinct_x(&self) -> Vec<i64> {
        distinct(self.point_a.x, self.point_b.x)
    }

    /// Distinct Y coordinates of the two endpoints.
    pub fn distinct_y(&self) -> Vec<i64> {
        distinct(self.point_a.y, self.point_b.y)
    }

    /// Classifies how this line sits against `other`.
    ///
    /// Identical lines are [`Adjacency::Proper`]. Lines of different
    /// orientation, or parallel lines that do not share their fixed
    /// coordinate, are [`Adjacency::None`]. Parallel lines on the same
    /// coordinate are compared by the overlap of their spans:
    ///
    /// - no overlap, or a single shared coordinate: `None`
    /// - `other` is shorter and the overlap sits strictly inside this
    ///   line's span: [`Adjacency::SubLine`]
    /// - any other overlap: [`Adjacency::Partial`]
    ///
    /// Never returns [`Adjacency::SinglePoint`]; shared corners are a
    /// rectangle-level concern.
    pub fn adjacency_with(&self, other: &Line) -> Result<Adjacency, DiagonalLineError> {
        if self == other {
            return Ok(Adjacency::Proper);
        }

        let orientation = self.orientation()?;
        if orientation != other.orientation()? {
            return Ok(Adjacency::None);
        }

        Ok(self.adjacency_along(other, orientation))
    }

    /// [`Line::adjacency_with`] for two lines already known to share
    /// `orientation`.
    pub(crate) fn adjacency_along(&self, other: &Line, orientation: Orientation) -> Adjacency {
        if self == other {
            return Adjacency::Proper;
        }

        let (ours, theirs) = match orientation {
            Orientation::Vertical => (self.distinct_x(), other.distinct_x()),
            Orientation::Horizontal => (self.distinct_y(), other.distinct_y()),
        };
        if !ours.iter().any(|c| theirs.contains(c)) {
            return Adjacency::None;
        }

        let span = Range::along(self, orientation);
        let Some(overlap) = span.overlap(&Range::along(other, orientation)) else {
            return Adjacency::None;
        };

        if overlap.distance() == 0 {
            return Adjacency::None;
        }

        if other.length_along(orientation) < self.length_along(orientation)
            && span.contains_all_exclusive(&overlap)
        {
            Adjacency::SubLine
        } else {
            Adjacency::Partial
        }
    }

    fn length_along(&self, orientation: Orientation) -> i64 {
        match orientation {
            Orientation::Vertical => self.point_b.y - self.point_a.y,
            Orientation::Horizontal => self.point_b.x - self.point_a.x,
        }
    }
}

fn distinct(a: i64, b: i64) -> Vec<i64> {
    if a == b { vec![a] } else { vec![a, b] }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.point_a, self.point_b)
    }
}
