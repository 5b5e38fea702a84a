//! Inline text
//!
//! Text-bearing blocks hold a `Text`: an ordered sequence of inline fragments.
//! A block parser produces a single raw fragment per leaf; inline
//! transformation units then split raw fragments into structured ones.

/// Kind of an autolink target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutolinkKind {
    Uri,
    Email,
}

/// An inline Markdown fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Raw text not yet claimed by any transformation unit
    Text(String),

    /// Code span
    Code(String),

    /// Emphasis (italic)
    Emphasis(Vec<Inline>),

    /// Strong emphasis (bold)
    Strong(Vec<Inline>),

    /// Link with content, destination, and optional title
    Link {
        content: Vec<Inline>,
        destination: String,
        title: Option<String>,
    },

    /// Image with alt text, destination, and optional title
    Image {
        alt: String,
        destination: String,
        title: Option<String>,
    },

    /// Autolink (`<https://...>` or `<me@example.com>`)
    Autolink { kind: AutolinkKind, target: String },

    /// Raw inline HTML
    Html(String),

    /// Line ending inside a paragraph
    SoftBreak,

    /// Hard line break
    LineBreak,
}

impl Inline {
    /// Check if this is a raw, unprocessed fragment
    pub fn is_raw(&self) -> bool {
        matches!(self, Inline::Text(_))
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            Inline::Text(text) | Inline::Code(text) | Inline::Html(text) => out.push_str(text),
            Inline::Emphasis(content) | Inline::Strong(content) => {
                content.iter().for_each(|i| i.push_plain_text(out))
            }
            Inline::Link { content, .. } => content.iter().for_each(|i| i.push_plain_text(out)),
            Inline::Image { alt, .. } => out.push_str(alt),
            Inline::Autolink { target, .. } => out.push_str(target),
            Inline::SoftBreak | Inline::LineBreak => out.push('\n'),
        }
    }
}

/// Ordered inline content of a paragraph or heading
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text(Vec<Inline>);

impl Text {
    /// Text consisting of a single raw fragment
    pub fn raw(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self(vec![Inline::Text(text)])
    }

    pub fn fragments(&self) -> &[Inline] {
        &self.0
    }

    pub fn into_fragments(self) -> Vec<Inline> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenated textual content, ignoring markup
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for inline in &self.0 {
            inline.push_plain_text(&mut out);
        }
        out
    }

    /// Replace every raw fragment with the fragments produced by `f`.
    ///
    /// Raw fragments nested in emphasis, strong emphasis and link content are
    /// visited too. All other fragments are kept as they are, so content
    /// claimed by an earlier unit is never handed to `f`. Empty raw fragments
    /// are dropped and adjacent raw fragments are merged.
    pub fn rewrite_raw<F>(self, mut f: F) -> Self
    where
        F: FnMut(&str) -> Vec<Inline>,
    {
        Self(rewrite_inlines(self.0, &mut f))
    }
}

fn rewrite_inlines<F>(inlines: Vec<Inline>, f: &mut F) -> Vec<Inline>
where
    F: FnMut(&str) -> Vec<Inline>,
{
    let mut result = Vec::with_capacity(inlines.len());
    for inline in inlines {
        match inline {
            Inline::Text(text) => {
                for produced in f(&text) {
                    push_merged(&mut result, produced);
                }
            }
            Inline::Emphasis(content) => result.push(Inline::Emphasis(rewrite_inlines(content, f))),
            Inline::Strong(content) => result.push(Inline::Strong(rewrite_inlines(content, f))),
            Inline::Link {
                content,
                destination,
                title,
            } => result.push(Inline::Link {
                content: rewrite_inlines(content, f),
                destination,
                title,
            }),
            other => result.push(other),
        }
    }
    result
}

fn push_merged(result: &mut Vec<Inline>, inline: Inline) {
    match inline {
        Inline::Text(text) if text.is_empty() => {}
        Inline::Text(text) => match result.last_mut() {
            Some(Inline::Text(last)) => last.push_str(&text),
            _ => result.push(Inline::Text(text)),
        },
        other => result.push(other),
    }
}

impl From<Vec<Inline>> for Text {
    fn from(inlines: Vec<Inline>) -> Self {
        Self(inlines)
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Self::raw(text)
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Self::raw(text)
    }
}

impl FromIterator<Inline> for Text {
    fn from_iter<I: IntoIterator<Item = Inline>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
