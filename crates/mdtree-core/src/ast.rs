//! Markdown block tree
//!
//! This module defines the block-level nodes of a Markdown document. Trees are
//! plain values: they are built by a block parser, rewritten by the inline
//! pipeline into new trees, and finally handed to a renderer.

use crate::list_type::ListType;
use crate::text::Text;
use crate::{Error, Result};

/// Ordered child blocks, in document order
pub type Blocks = Vec<Block>;

/// Raw source lines of a preformatted block
pub type Lines = Vec<String>;

/// A block-level Markdown node
///
/// Equality is structural and deep: two trees are equal when their variants
/// match and every field, including the full sequence of children, is equal.
///
/// `Document` is expected only at the root of a tree. This is a convention of
/// the producer and is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Root document container
    Document(Blocks),

    /// Block quote containing nested blocks
    Blockquote(Blocks),

    /// List of items; `start` is only present for ordered lists
    List {
        start: Option<u32>,
        tight: bool,
        children: Blocks,
    },

    /// A single list item, tagged with the marker that opened it
    ListItem {
        marker: ListType,
        tight: bool,
        children: Blocks,
    },

    /// Paragraph containing inline text
    Paragraph(Text),

    /// Heading with level (1-6) and inline text
    Heading { level: u8, text: Text },

    /// Indented code block; lines are never inline-processed
    IndentedCode(Lines),

    /// Fenced code block with optional info string
    FencedCode { info: Option<String>, lines: Lines },

    /// Raw HTML block
    HtmlBlock(Lines),

    /// Link reference definition; `title` is empty when there is no title
    ReferenceDef {
        label: String,
        destination: String,
        title: Lines,
    },

    /// Thematic break (horizontal rule)
    ThematicBreak,
}

impl Block {
    /// Build a heading, rejecting levels outside 1-6
    pub fn heading(level: u8, text: impl Into<Text>) -> Result<Self> {
        if !(1..=6).contains(&level) {
            return Err(Error::InvalidHeadingLevel(level));
        }
        Ok(Block::Heading {
            level,
            text: text.into(),
        })
    }

    /// Build a paragraph from raw or structured text
    pub fn paragraph(text: impl Into<Text>) -> Self {
        Block::Paragraph(text.into())
    }

    /// Child blocks of a container, `None` for leaves
    pub fn children(&self) -> Option<&[Block]> {
        match self {
            Block::Document(children)
            | Block::Blockquote(children)
            | Block::List { children, .. }
            | Block::ListItem { children, .. } => Some(children),
            Block::Paragraph(_)
            | Block::Heading { .. }
            | Block::IndentedCode(_)
            | Block::FencedCode { .. }
            | Block::HtmlBlock(_)
            | Block::ReferenceDef { .. }
            | Block::ThematicBreak => None,
        }
    }

    /// Inline text of a paragraph or heading
    pub fn text(&self) -> Option<&Text> {
        match self {
            Block::Paragraph(text) | Block::Heading { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Check if this block holds child blocks
    pub fn is_container(&self) -> bool {
        self.children().is_some()
    }

    /// Check if this block carries inline text
    pub fn is_text_leaf(&self) -> bool {
        self.text().is_some()
    }
}
