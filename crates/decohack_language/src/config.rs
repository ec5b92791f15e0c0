//! Compiler settings.

use std::path::PathBuf;

use crate::lexer::DEFAULT_STREAM_NAME;

/// Default limit on nested `#include` directives.
pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 16;

/// Settings for one compile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Whether `#include` directives are honored.
    pub includes_enabled: bool,
    /// Deepest nesting of included files allowed.
    pub max_include_depth: usize,
    /// Directories searched after the including file's own directory.
    pub include_paths: Vec<PathBuf>,
    /// Name reported for source text that has no file behind it.
    pub stream_name: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            includes_enabled: true,
            max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH,
            include_paths: Vec::new(),
            stream_name: DEFAULT_STREAM_NAME.to_string(),
        }
    }
}

impl CompilerConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables `#include`.
    #[must_use]
    pub fn with_includes(mut self, enabled: bool) -> Self {
        self.includes_enabled = enabled;
        self
    }

    /// Sets the include nesting limit.
    #[must_use]
    pub fn with_max_include_depth(mut self, depth: usize) -> Self {
        self.max_include_depth = depth;
        self
    }

    /// Appends a directory to the include search path.
    #[must_use]
    pub fn with_include_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.include_paths.push(path.into());
        self
    }

    /// Sets the stream name used for in-memory source.
    #[must_use]
    pub fn with_stream_name(mut self, name: impl Into<String>) -> Self {
        self.stream_name = name.into();
        self
    }
}
