//! Canonical textual form of the model
//!
//! Every node renders as `name(field, field, ...)`, with child blocks, lines
//! and fragments joined by `", "`. The output is deterministic and is used by
//! diagnostics and golden tests, so its grammar must stay stable.

use std::fmt::{self, Display, Formatter, Write};

use crate::ast::Block;
use crate::list_type::ListType;
use crate::text::{AutolinkKind, Inline, Text};

impl Block {
    /// Render this tree in its canonical textual form
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Block::Document(children) => {
                f.write_str("document(")?;
                write_joined(f, children)?;
            }

            Block::Blockquote(children) => {
                f.write_str("blockquote(")?;
                write_joined(f, children)?;
            }

            Block::List {
                start,
                tight,
                children,
            } => {
                f.write_str("list(")?;
                if let Some(start) = start {
                    write!(f, "{}, ", start)?;
                }
                write!(f, "{}, ", tightness(*tight))?;
                write_joined(f, children)?;
            }

            Block::ListItem {
                marker,
                tight,
                children,
            } => {
                write!(f, "listItem({}, {}, ", marker, tightness(*tight))?;
                write_joined(f, children)?;
            }

            Block::Paragraph(text) => write!(f, "paragraph({}", text)?,

            Block::Heading { level, text } => write!(f, "heading({}, {}", level, text)?,

            Block::IndentedCode(lines) => {
                f.write_str("indentedCode(")?;
                write_lines(f, lines)?;
            }

            Block::FencedCode { info, lines } => {
                f.write_str("fencedCode(")?;
                if let Some(info) = info {
                    write!(f, "{}, ", info)?;
                }
                write_lines(f, lines)?;
            }

            Block::HtmlBlock(lines) => {
                f.write_str("htmlBlock(")?;
                write_lines(f, lines)?;
            }

            Block::ReferenceDef {
                label,
                destination,
                title,
            } => {
                write!(f, "referenceDef({}, {}", label, destination)?;
                if !title.is_empty() {
                    f.write_str(", ")?;
                    write_lines(f, title)?;
                }
            }

            Block::ThematicBreak => return f.write_str("thematicBreak"),
        }
        f.write_char(')')
    }
}

impl Display for ListType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ListType::Bullet(marker) => write!(f, "bullet({})", marker),
            ListType::Ordered(start, delimiter) => write!(f, "ordered({}, {})", start, delimiter),
        }
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, self.fragments())
    }
}

impl Display for Inline {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Inline::Text(text) => write!(f, "text({})", text),
            Inline::Code(code) => write!(f, "code({})", code),
            Inline::Emphasis(content) => {
                f.write_str("emph(")?;
                write_joined(f, content)?;
                f.write_char(')')
            }
            Inline::Strong(content) => {
                f.write_str("strong(")?;
                write_joined(f, content)?;
                f.write_char(')')
            }
            Inline::Link {
                content,
                destination,
                title,
            } => {
                f.write_str("link(")?;
                write_joined(f, content)?;
                write!(f, ", {}", destination)?;
                write_title(f, title.as_deref())
            }
            Inline::Image {
                alt,
                destination,
                title,
            } => {
                write!(f, "image({}, {}", alt, destination)?;
                write_title(f, title.as_deref())
            }
            Inline::Autolink { kind, target } => {
                let kind = match kind {
                    AutolinkKind::Uri => "uri",
                    AutolinkKind::Email => "email",
                };
                write!(f, "autolink({}, {})", kind, target)
            }
            Inline::Html(html) => write!(f, "html({})", html),
            Inline::SoftBreak => f.write_str("softbreak"),
            Inline::LineBreak => f.write_str("linebreak"),
        }
    }
}

fn tightness(tight: bool) -> &'static str {
    if tight {
        "tight"
    } else {
        "loose"
    }
}

fn write_title(f: &mut Formatter<'_>, title: Option<&str>) -> fmt::Result {
    if let Some(title) = title {
        write!(f, ", {}", title)?;
    }
    f.write_char(')')
}

fn write_joined<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Raw lines render as escaped string literals
fn write_lines(f: &mut Formatter<'_>, lines: &[String]) -> fmt::Result {
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{:?}", line)?;
    }
    Ok(())
}
