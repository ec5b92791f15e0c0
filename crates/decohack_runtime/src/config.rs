//! Writer settings.

/// Line ending used by DeHackEd itself.
pub const DEFAULT_LINE_ENDING: &str = "\r\n";

/// Settings for one patch export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportConfig {
    /// Appended to every line.
    pub line_ending: String,
    /// Whether the `Patch File for DeHackEd` preamble is written.
    pub write_header: bool,
    /// Written as a `#` comment line after the preamble's first line.
    pub comment: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            line_ending: DEFAULT_LINE_ENDING.to_string(),
            write_header: true,
            comment: None,
        }
    }
}

impl ExportConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line ending.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: impl Into<String>) -> Self {
        self.line_ending = line_ending.into();
        self
    }

    /// Enables or disables the preamble.
    #[must_use]
    pub fn with_header(mut self, enabled: bool) -> Self {
        self.write_header = enabled;
        self
    }

    /// Sets the comment line.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.line_ending, "\r\n");
        assert!(config.write_header);
        assert_eq!(config.comment, None);
    }

    #[test]
    fn builder() {
        let config = ExportConfig::new()
            .with_line_ending("\n")
            .with_header(false)
            .with_comment("built by hand");
        assert_eq!(config.line_ending, "\n");
        assert!(!config.write_header);
        assert_eq!(config.comment.as_deref(), Some("built by hand"));
    }
}
