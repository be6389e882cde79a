pub mod adjacency;
pub mod config;
pub mod error;
pub mod line;
pub mod log;
pub mod point;
pub mod range;
pub mod rect;
pub mod report;

pub use adjacency::Adjacency;
pub use error::DiagonalLineError;
pub use line::{Line, Orientation};
pub use point::Point;
pub use range::Range;
pub use rect::Rectangle;
pub use report::Comparison;
