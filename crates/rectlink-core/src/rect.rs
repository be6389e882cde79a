//! Axis-aligned rectangles and their pairwise relationships.
//!
//! A rectangle is defined by its lower-left corner, its `length` along X
//! and its `width` along Y. Corners, sides and axis ranges are derived:
//!
//! ```text
//! top_left ──── top ───── top_right
//!    │                        │
//!  left                     right
//!    │                        │
//! lower_left ── bottom ── lower_right
//! ```
//!
//! Comparisons are pure functions of the two rectangles, so any number of
//! pairs can be compared concurrently.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Adjacency, Line, Orientation, Point, Range};

/// An axis-aligned rectangle on the integer plane.
///
/// `length` and `width` are expected to be positive; non-positive values
/// produce an inverted rectangle whose comparisons are meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    length: i64,
    width: i64,
    lower_left: Point,
}

impl Rectangle {
    pub fn new(length: i64, width: i64, lower_left: Point) -> Self {
        Self {
            length,
            width,
            lower_left,
        }
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn area(&self) -> i64 {
        self.length * self.width
    }

    // ── Derived geometry ─────────────────────────────────────────

    pub fn lower_left(&self) -> Point {
        self.lower_left
    }

    pub fn lower_right(&self) -> Point {
        Point::new(self.lower_left.x + self.length, self.lower_left.y)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.lower_left.x, self.lower_left.y + self.width)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.lower_right().x, self.top_left().y)
    }

    /// Corners in the order lower-left, lower-right, top-left, top-right.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.lower_left(),
            self.lower_right(),
            self.top_left(),
            self.top_right(),
        ]
    }

    pub fn left_side(&self) -> Line {
        Line::new(self.lower_left(), self.top_left())
    }

    pub fn right_side(&self) -> Line {
        Line::new(self.lower_right(), self.top_right())
    }

    pub fn top_side(&self) -> Line {
        Line::new(self.top_left(), self.top_right())
    }

    pub fn bottom_side(&self) -> Line {
        Line::new(self.lower_left(), self.lower_right())
    }

    /// Sides in the order left, right, top, bottom.
    pub fn sides(&self) -> [Line; 4] {
        [
            self.left_side(),
            self.right_side(),
            self.top_side(),
            self.bottom_side(),
        ]
    }

    /// Bottom then top. This order drives the adjacency scan.
    pub fn horizontal_sides(&self) -> [Line; 2] {
        [self.bottom_side(), self.top_side()]
    }

    /// Left then right. This order drives the adjacency scan.
    pub fn vertical_sides(&self) -> [Line; 2] {
        [self.left_side(), self.right_side()]
    }

    pub fn range_x(&self) -> Range {
        Range::of(self.lower_left.x, self.lower_right().x)
    }

    pub fn range_y(&self) -> Range {
        Range::of(self.lower_left.y, self.top_left().y)
    }

    // ── Comparisons ──────────────────────────────────────────────

    /// Returns whether every corner of `other` lies within this rectangle,
    /// boundary included.
    ///
    /// A rectangle never contains itself, nor anything with a larger area.
    pub fn contains(&self, other: &Rectangle) -> bool {
        if self == other || other.area() > self.area() {
            return false;
        }

        let (range_x, range_y) = (self.range_x(), self.range_y());
        other
            .corners()
            .iter()
            .all(|corner| {
                range_x.contains_inclusive(corner.x) && range_y.contains_inclusive(corner.y)
            })
    }

    /// Points where the boundaries of the two rectangles cross.
    ///
    /// Edges that merely coincide are not crossings, so only coordinates
    /// strictly inside the other rectangle's range are considered. Empty
    /// for identical rectangles and when this one contains `other`.
    pub fn intersection_points(&self, other: &Rectangle) -> HashSet<Point> {
        if self == other || self.contains(other) {
            return HashSet::new();
        }

        let mut points = crossings(self, other);
        points.extend(crossings(other, self));
        points
    }

    /// Returns whether the rectangles touch at exactly one opposite corner.
    pub fn is_corner_adjacent(&self, other: &Rectangle) -> bool {
        self.lower_left() == other.top_right()
            || self.lower_right() == other.top_left()
            || self.top_right() == other.lower_left()
            || self.top_left() == other.lower_right()
    }

    /// Classifies how this rectangle sits against `other`.
    ///
    /// Evaluated in order, first match wins:
    ///
    /// 1. identical, either contains the other, or boundaries cross:
    ///    [`Adjacency::None`]
    /// 2. a shared opposite corner: [`Adjacency::SinglePoint`]
    /// 3. the first non-`None` classification among horizontal side pairs
    ///    (this rectangle's sides outer, the other's inner)
    /// 4. the same scan over vertical side pairs
    /// 5. otherwise [`Adjacency::None`]
    pub fn adjacency_with(&self, other: &Rectangle) -> Adjacency {
        if self == other
            || self.contains(other)
            || other.contains(self)
            || !self.intersection_points(other).is_empty()
        {
            return Adjacency::None;
        }

        if self.is_corner_adjacent(other) {
            return Adjacency::SinglePoint;
        }

        first_adjacent(
            &self.horizontal_sides(),
            &other.horizontal_sides(),
            Orientation::Horizontal,
        )
        .or_else(|| {
            first_adjacent(
                &self.vertical_sides(),
                &other.vertical_sides(),
                Orientation::Vertical,
            )
        })
        .unwrap_or(Adjacency::None)
    }
}

/// Crossings driven by `a`'s vertical edges meeting `b`'s horizontal edges.
///
/// Call twice with the arguments swapped to collect every crossing.
fn crossings(a: &Rectangle, b: &Rectangle) -> HashSet<Point> {
    let (a_x, a_y) = (a.range_x(), a.range_y());
    let (b_x, b_y) = (b.range_x(), b.range_y());

    let xs: Vec<i64> = [a_x.min(), a_x.max()]
        .into_iter()
        .filter(|&x| b_x.contains_exclusive(x))
        .collect();
    let ys: Vec<i64> = [b_y.min(), b_y.max()]
        .into_iter()
        .filter(|&y| a_y.contains_exclusive(y))
        .collect();

    xs.iter()
        .flat_map(|&x| ys.iter().map(move |&y| Point::new(x, y)))
        .collect()
}

/// The first non-`None` side classification in scan order, if any.
fn first_adjacent(ours: &[Line], theirs: &[Line], orientation: Orientation) -> Option<Adjacency> {
    ours.iter()
        .flat_map(|line| {
            theirs
                .iter()
                .map(move |other| line.adjacency_along(other, orientation))
        })
        .find(|adjacency| !adjacency.is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(length: i64, width: i64, x: i64, y: i64) -> Rectangle {
        Rectangle::new(length, width, Point::new(x, y))
    }

    fn points(pairs: &[(i64, i64)]) -> HashSet<Point> {
        pairs.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    // ── Derived geometry ─────────────────────────────────────────

    #[test]
    fn corners_and_ranges_are_derived_from_lower_left() {
        // Arrange
        let r = rect(4, 5, 1, 2);

        // Act / Assert
        assert_eq!(r.lower_right(), Point::new(5, 2));
        assert_eq!(r.top_left(), Point::new(1, 7));
        assert_eq!(r.top_right(), Point::new(5, 7));
        assert_eq!(r.range_x(), Range::of(1, 5));
        assert_eq!(r.range_y(), Range::of(2, 7));
        assert_eq!(r.area(), 20);
    }

    #[test]
    fn sides_are_axis_aligned() {
        let r = rect(4, 5, 1, 2);

        for side in r.horizontal_sides() {
            assert_eq!(side.orientation(), Ok(Orientation::Horizontal));
        }
        for side in r.vertical_sides() {
            assert_eq!(side.orientation(), Ok(Orientation::Vertical));
        }
        assert_eq!(r.left_side().length(), Ok(5));
        assert_eq!(r.bottom_side().length(), Ok(4));
    }

    #[test]
    fn sides_run_left_right_top_bottom() {
        // Arrange
        let r = rect(4, 5, 1, 2);

        // Act
        let [left, right, top, bottom] = r.sides();

        // Assert
        assert_eq!(left, Line::new(Point::new(1, 2), Point::new(1, 7)));
        assert_eq!(right, Line::new(Point::new(5, 2), Point::new(5, 7)));
        assert_eq!(top, Line::new(Point::new(1, 7), Point::new(5, 7)));
        assert_eq!(bottom, Line::new(Point::new(1, 2), Point::new(5, 2)));
    }

    #[test]
    fn equality_compares_defining_fields() {
        assert_eq!(rect(4, 5, 1, 2), rect(4, 5, 1, 2));
        assert_ne!(rect(4, 5, 1, 2), rect(5, 4, 1, 2));
        assert_ne!(rect(4, 5, 1, 2), rect(4, 5, 1, 3));
    }

    // ── Containment ──────────────────────────────────────────────

    #[test]
    fn contains_smaller_rectangle_inside() {
        let a = rect(4, 5, 1, 2);
        let b = rect(2, 3, 2, 3);

        assert!(a.contains(&b));
        assert!(!b.contains(&a));
    }

    #[test]
    fn does_not_contain_disjoint_rectangle() {
        assert!(!rect(4, 5, 1, 2).contains(&rect(5, 8, 7, 1)));
    }

    #[test]
    fn does_not_contain_itself() {
        let r = rect(4, 5, 1, 2);
        assert!(!r.contains(&r));
    }

    #[test]
    fn does_not_contain_crossing_rectangle() {
        assert!(!rect(4, 5, 1, 2).contains(&rect(3, 8, 4, 3)));
    }

    #[test]
    fn containment_includes_shared_boundary() {
        // Arrange: b's right edge lies on a's right edge
        let a = rect(7, 5, 2, 2);
        let b = rect(2, 1, 7, 3);

        // Act / Assert
        assert!(a.contains(&b));
    }

    #[test]
    fn larger_area_is_never_contained() {
        // Same footprint on X, taller on Y
        assert!(!rect(4, 4, 0, 0).contains(&rect(4, 5, 0, 0)));
    }

    // ── Intersection points ──────────────────────────────────────

    #[test]
    fn four_crossings_when_rectangles_form_a_cross() {
        // Arrange
        let a = rect(3, 5, 3, 2);
        let b = rect(5, 3, 2, 3);

        // Act
        let actual = a.intersection_points(&b);

        // Assert
        assert_eq!(actual, points(&[(3, 3), (3, 6), (6, 3), (6, 6)]));
    }

    #[test]
    fn two_crossings_on_one_vertical_edge() {
        let a = rect(4, 5, 1, 2);
        let b = rect(4, 2, 4, 3);

        assert_eq!(a.intersection_points(&b), points(&[(5, 3), (5, 5)]));
    }

    #[test]
    fn crossings_on_both_axes() {
        let a = rect(6, 5, 1, 1);
        let b = rect(3, 2, 6, 5);

        assert_eq!(a.intersection_points(&b), points(&[(7, 5), (6, 6)]));
    }

    #[test]
    fn intersection_is_symmetric() {
        let a = rect(6, 5, 1, 1);
        let b = rect(3, 2, 6, 5);

        assert_eq!(a.intersection_points(&b), b.intersection_points(&a));
    }

    #[test]
    fn contained_rectangle_has_no_crossings() {
        assert!(rect(4, 5, 1, 2).intersection_points(&rect(2, 3, 2, 3)).is_empty());
    }

    #[test]
    fn disjoint_rectangles_have_no_crossings() {
        assert!(rect(6, 5, 1, 1).intersection_points(&rect(3, 2, 8, 5)).is_empty());
        assert!(rect(2, 2, 0, 0).intersection_points(&rect(2, 2, 10, 10)).is_empty());
    }

    #[test]
    fn identical_rectangles_have_no_crossings() {
        let r = rect(6, 5, 1, 1);
        assert!(r.intersection_points(&r).is_empty());
    }

    #[test]
    fn coincident_edges_are_not_crossings() {
        assert!(rect(5, 4, 2, 2).intersection_points(&rect(7, 4, 7, 2)).is_empty());
    }

    // ── Adjacency ────────────────────────────────────────────────

    #[test]
    fn shared_full_edge_is_proper() {
        let a = rect(5, 4, 2, 2);
        let b = rect(7, 4, 7, 2);

        assert_eq!(a.adjacency_with(&b), Adjacency::Proper);
        assert_eq!(b.adjacency_with(&a), Adjacency::Proper);
    }

    #[test]
    fn short_edge_inside_long_edge_is_sub_line() {
        // Arrange: b sits on a's top edge without reaching its corners
        let a = rect(6, 6, 2, 2);
        let b = rect(2, 1, 4, 8);

        // Act
        let adjacency = a.adjacency_with(&b);

        // Assert
        assert_eq!(adjacency, Adjacency::SubLine);
    }

    #[test]
    fn sub_line_is_partial_from_the_shorter_side() {
        let a = rect(6, 6, 2, 2);
        let b = rect(2, 1, 4, 8);

        assert_eq!(b.adjacency_with(&a), Adjacency::Partial);
    }

    #[test]
    fn staggered_edges_are_partial() {
        let a = rect(5, 8, 3, 0);
        let b = rect(5, 5, 8, 5);

        assert_eq!(a.adjacency_with(&b), Adjacency::Partial);
    }

    #[test]
    fn shared_corner_is_single_point() {
        let a = rect(4, 3, 3, 3);
        let b = rect(3, 1, 7, 2);

        assert!(a.is_corner_adjacent(&b));
        assert_eq!(a.adjacency_with(&b), Adjacency::SinglePoint);
        assert_eq!(b.adjacency_with(&a), Adjacency::SinglePoint);
    }

    #[test]
    fn diagonal_corner_touch_is_single_point() {
        let a = rect(2, 2, 0, 0);
        let b = rect(2, 2, 2, 2);

        assert_eq!(a.adjacency_with(&b), Adjacency::SinglePoint);
    }

    #[test]
    fn rectangle_is_not_adjacent_to_itself() {
        let r = rect(5, 4, 2, 2);
        assert_eq!(r.adjacency_with(&r), Adjacency::None);
    }

    #[test]
    fn container_and_contained_are_not_adjacent() {
        // Arrange: b touches a's right edge from the inside
        let a = rect(7, 5, 2, 2);
        let b = rect(2, 1, 7, 3);

        // Act / Assert: checked in both directions
        assert_eq!(a.adjacency_with(&b), Adjacency::None);
        assert_eq!(b.adjacency_with(&a), Adjacency::None);
    }

    #[test]
    fn crossing_rectangles_are_not_adjacent() {
        assert_eq!(
            rect(6, 5, 1, 1).adjacency_with(&rect(3, 2, 6, 5)),
            Adjacency::None
        );
    }

    #[test]
    fn separated_rectangles_are_not_adjacent() {
        assert_eq!(
            rect(2, 2, 0, 0).adjacency_with(&rect(2, 2, 5, 0)),
            Adjacency::None
        );
    }

    #[test]
    fn edges_meeting_end_to_end_are_not_adjacent() {
        // b's left edge is collinear with a's right edge, but the spans never meet
        let a = rect(3, 3, 0, 0);
        let b = rect(3, 3, 3, -5);

        assert_eq!(a.adjacency_with(&b), Adjacency::None);
    }

    #[test]
    fn stacked_rectangles_use_horizontal_sides() {
        // Arrange: b sits on top of a sharing the full width
        let a = rect(4, 2, 0, 0);
        let b = rect(4, 3, 0, 2);

        // Act / Assert
        assert_eq!(a.adjacency_with(&b), Adjacency::Proper);
        assert_eq!(
            a.top_side().adjacency_with(&b.bottom_side()),
            Ok(Adjacency::Proper)
        );
    }

    // ── Properties ───────────────────────────────────────────────

    #[test]
    fn containment_is_never_mutual() {
        let pairs = [
            (rect(4, 5, 1, 2), rect(2, 3, 2, 3)),
            (rect(7, 5, 2, 2), rect(2, 1, 7, 3)),
            (rect(4, 4, 0, 0), rect(4, 4, 0, 0)),
            (rect(6, 5, 1, 1), rect(3, 2, 6, 5)),
        ];

        for (a, b) in pairs {
            assert!(!(a.contains(&b) && b.contains(&a)), "{a:?} / {b:?}");
        }
    }

    #[test]
    fn rectangles_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Rectangle>();
        assert_send_sync::<Adjacency>();
    }

    #[test]
    fn serializes_as_defining_triple() {
        // Arrange
        let r = rect(4, 5, 1, 2);

        // Act
        let json = serde_json::to_string(&r).unwrap();
        let back: Rectangle = serde_json::from_str(&json).unwrap();

        // Assert
        assert_eq!(json, r#"{"length":4,"width":5,"lower_left":{"x":1,"y":2}}"#);
        assert_eq!(back.top_right(), Point::new(5, 7));
    }
}
