pub mod compare;
pub mod init;
pub mod interactive;

use rectlink_core::config::ReportFormat;
use rectlink_core::{Comparison, Rectangle};

/// Renders a comparison in the requested format.
pub fn render(comparison: &Comparison, format: ReportFormat) -> Result<String, String> {
    match format {
        ReportFormat::Text => Ok(comparison.to_string()),
        ReportFormat::Json => comparison.to_json_pretty().map_err(|e| e.to_string()),
    }
}

/// Runs and logs a single comparison.
pub fn run_comparison(labels: [&str; 2], first: &Rectangle, second: &Rectangle) -> Comparison {
    let comparison = Comparison::between(labels, first, second);
    rectlink_core::log_info!(
        "{} {:?} vs {} {:?}: adjacency {}, {} crossing(s)",
        labels[0],
        first,
        labels[1],
        second,
        comparison.adjacency,
        comparison.intersection_points.len()
    );
    comparison
}
