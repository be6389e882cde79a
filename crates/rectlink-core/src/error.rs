use thiserror::Error;

use crate::Line;

/// Raised when a line's endpoints share neither an X nor a Y coordinate.
///
/// Rectangle sides are axis-aligned by construction, so this can only
/// come from a [`Line`] built directly from two arbitrary points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected vertical/horizontal line; got diagonal line: {line}")]
pub struct DiagonalLineError {
    /// The offending line.
    pub line: Line,
}
