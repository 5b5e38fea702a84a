//! mdtree-core - Markdown block tree and inline text model
//!
//! This crate provides the data structures shared by the block parser, the
//! inline rewrite pipeline (`mdtree`) and renderers.
//!
//! # Architecture
//!
//! ```text
//! Markdown source ──block parser──▶ ┌────────────┐
//!                                   │ Block tree │ ──inline pipeline──▶ Block tree ──▶ renderer
//!        ListType::is_compatible ──▶│ (raw Text) │                      (structured Text)
//!                                   └────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use mdtree_core::{Block, ListType, Text};
//!
//! let tree = Block::Document(vec![
//!     Block::Heading { level: 1, text: Text::raw("Title") },
//!     Block::List {
//!         start: None,
//!         tight: true,
//!         children: vec![Block::ListItem {
//!             marker: ListType::Bullet('-'),
//!             tight: true,
//!             children: vec![Block::Paragraph(Text::raw("item"))],
//!         }],
//!     },
//!     Block::ThematicBreak,
//! ]);
//!
//! assert_eq!(
//!     tree.render(),
//!     "document(heading(1, text(Title)), list(tight, listItem(bullet(-), tight, paragraph(text(item)))), thematicBreak)"
//! );
//! ```

mod ast;
mod list_type;
mod render;
mod text;

pub use ast::{Block, Blocks, Lines};
pub use list_type::ListType;
pub use text::{AutolinkKind, Inline, Text};

/// Error type for model construction helpers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid heading level: {0} (expected 1-6)")]
    InvalidHeadingLevel(u8),

    #[error("Invalid list marker: {0:?}")]
    InvalidListMarker(String),
}

pub type Result<T> = std::result::Result<T, Error>;
