//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Whether to annotate the background and each item with XML comments
    pub comments: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            comments: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set whether to emit XML comments
    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }
}
