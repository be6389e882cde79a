mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Labels used when the configured ones are unusable.
pub const DEFAULT_LABELS: [&str; 2] = ["A", "B"];

/// Top-level configuration for rectlink.
///
/// Loaded from `~/.config/rectlink/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How comparison reports are rendered.
    pub report: ReportConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Report rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format for comparison reports.
    pub format: ReportFormat,
    /// Names of the first and second rectangle.
    pub labels: [String; 2],
}

/// Output format for comparison reports.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// The boxed, human-readable results block.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            labels: DEFAULT_LABELS.map(String::from),
        }
    }
}

impl ReportConfig {
    pub fn labels(&self) -> [&str; 2] {
        [self.labels[0].as_str(), self.labels[1].as_str()]
    }
}

impl Config {
    /// Clamps values to usable ranges.
    ///
    /// Blank or duplicate labels are replaced by [`DEFAULT_LABELS`], and
    /// the log size limit is kept between 1 and 1024 MB.
    pub fn validate(&mut self) {
        for label in &mut self.report.labels {
            *label = label.trim().to_string();
        }
        let [first, second] = &self.report.labels;
        if first.is_empty() || second.is_empty() || first == second {
            self.report.labels = DEFAULT_LABELS.map(String::from);
        }
        self.logging.max_file_mb = self.logging.max_file_mb.clamp(1, 1024);
    }
}
