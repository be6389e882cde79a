//! A full comparison of two labelled rectangles.
//!
//! The report bundles every relationship the core can compute for a pair
//! so front-ends only need a single call, and renders it either as the
//! boxed text block or as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Adjacency, Point, Rectangle};

const RULE_WIDTH: usize = 67;

/// Every relationship between a first and a second rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub first_label: String,
    pub second_label: String,
    pub first: Rectangle,
    pub second: Rectangle,
    pub first_area: i64,
    pub second_area: i64,
    pub identical: bool,
    /// Whether the first rectangle contains the second.
    pub contains: bool,
    /// Crossing points, sorted by `(x, y)`.
    pub intersection_points: Vec<Point>,
    /// Adjacency of the first rectangle with the second.
    pub adjacency: Adjacency,
}

impl Comparison {
    /// Runs every comparison of `first` against `second`.
    pub fn between(labels: [&str; 2], first: &Rectangle, second: &Rectangle) -> Self {
        let mut intersection_points: Vec<Point> =
            first.intersection_points(second).into_iter().collect();
        intersection_points.sort();

        Self {
            first_label: labels[0].to_string(),
            second_label: labels[1].to_string(),
            first: *first,
            second: *second,
            first_area: first.area(),
            second_area: second.area(),
            identical: first == second,
            contains: first.contains(second),
            intersection_points,
            adjacency: first.adjacency_with(second),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn points_list(&self) -> String {
        if self.intersection_points.is_empty() {
            return "none".into();
        }
        self.intersection_points
            .iter()
            .map(Point::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        let (a, b) = (&self.first_label, &self.second_label);

        writeln!(f, "{rule}")?;
        writeln!(f, "| {:<width$} |", "Results", width = RULE_WIDTH - 4)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "  Rectangle {a} Area: {}", self.first_area)?;
        writeln!(f, "  Rectangle {b} Area: {}", self.second_area)?;
        writeln!(f, "  Rectangles are Identical: {}", self.identical)?;
        writeln!(f, "  Rectangle {a} CONTAINS Rectangle {b}: {}", self.contains)?;
        writeln!(
            f,
            "  Rectangle {a} INTERSECTS with Rectangle {b} at points: {}",
            self.points_list()
        )?;
        writeln!(f, "  Rectangle Adjacency status: {}", self.adjacency)?;
        write!(f, "{rule}")
    }
}
