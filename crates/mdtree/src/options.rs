//! Configuration for the built-in inline transformation units

/// Selects which built-in units a pipeline is assembled from.
///
/// Code spans, autolinks and raw HTML are recognized together by one
/// left-to-right unit; line breaks always run after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineOptions {
    /// Recognize backtick code spans
    pub code_spans: bool,

    /// Recognize `<scheme:...>` and `<user@host>` autolinks
    pub autolinks: bool,

    /// Recognize inline HTML tags and comments
    pub raw_html: bool,

    /// Turn line endings into soft and hard breaks
    pub line_breaks: bool,
}

impl Default for InlineOptions {
    fn default() -> Self {
        Self {
            code_spans: true,
            autolinks: true,
            raw_html: true,
            line_breaks: true,
        }
    }
}

impl InlineOptions {
    /// Options with every built-in unit disabled
    pub fn none() -> Self {
        Self {
            code_spans: false,
            autolinks: false,
            raw_html: false,
            line_breaks: false,
        }
    }
}
