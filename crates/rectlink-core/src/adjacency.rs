use std::fmt;

use serde::{Deserialize, Serialize};

/// How two lines, or two rectangles, sit against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Adjacency {
    /// The lines are identical.
    Proper,
    /// The lines overlap across more than one point.
    Partial,
    /// One line is a strictly shorter segment of the other that touches
    /// neither of the longer line's endpoints.
    SubLine,
    /// The rectangles share exactly one corner. Never produced by
    /// line-level classification.
    SinglePoint,
    /// No qualifying relationship.
    None,
}

impl Adjacency {
    /// The upper-case name used in reports (e.g. `SUB_LINE`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Proper => "PROPER",
            Self::Partial => "PARTIAL",
            Self::SubLine => "SUB_LINE",
            Self::SinglePoint => "SINGLE_POINT",
            Self::None => "NONE",
        }
    }

    pub fn is_none(self) -> bool {
        self == Self::None
    }
}

impl fmt::Display for Adjacency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serialized_name() {
        for adjacency in [
            Adjacency::Proper,
            Adjacency::Partial,
            Adjacency::SubLine,
            Adjacency::SinglePoint,
            Adjacency::None,
        ] {
            let json = serde_json::to_string(&adjacency).unwrap();
            assert_eq!(json, format!("\"{adjacency}\""));
        }
    }

    #[test]
    fn sub_line_prints_with_underscore() {
        assert_eq!(Adjacency::SubLine.to_string(), "SUB_LINE");
    }
}
