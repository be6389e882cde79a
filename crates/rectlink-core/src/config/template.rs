/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `rectlink init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# rectlink configuration
# Location: ~/.config/rectlink/config.toml

[report]
# Output format for comparison reports: "text" or "json".
format = "text"
# Names used for the first and second rectangle in prompts and reports.
labels = ["A", "B"]

[logging]
# Enable file logging to ~/.config/rectlink/logs/rectlink.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn template_parses_to_defaults() {
        // Act
        let config: Config = toml::from_str(&generate_config()).unwrap();

        // Assert
        assert_eq!(config, Config::default());
    }

    #[test]
    fn template_documents_every_section() {
        let text = generate_config();

        assert!(text.contains("[report]"));
        assert!(text.contains("[logging]"));
    }
}
