//! # mdtree
//!
//! Inline post-processing for Markdown block trees.
//!
//! A block parser produces a tree of [`Block`]s whose paragraphs and headings
//! still hold raw text. [`InlineParser`] walks such a tree once and threads the
//! text of every leaf through an ordered chain of [`Transform`] units, each
//! claiming the syntax it recognizes. Code, HTML and reference definitions are
//! never touched.
//!
//! ## Design
//!
//! - **Ordered chain**: unit order is inline precedence. Constructs of equal
//!   precedence (code spans, autolinks, raw HTML) share one unit that scans
//!   left to right, so whichever starts first wins; line breaks run after it.
//! - **Stateless**: the chain is fixed at construction, so a parser can be
//!   reused across documents and shared between threads.
//! - **Pluggable**: units are plain trait objects or closures; the built-in
//!   CommonMark units are optional.
//!
//! ## Example
//!
//! ```rust
//! use mdtree::{Block, Inline, InlineParser, Text};
//!
//! let parser = InlineParser::default();
//!
//! let tree = Block::Document(vec![Block::Paragraph(Text::raw("call `f()`"))]);
//! let parsed = parser.parse(&tree);
//!
//! assert_eq!(
//!     parsed,
//!     Block::Document(vec![Block::Paragraph(Text::from(vec![
//!         Inline::Text("call ".to_string()),
//!         Inline::Code("f()".to_string()),
//!     ]))])
//! );
//! assert_eq!(parsed.render(), "document(paragraph(text(call ), code(f())))");
//! ```

mod options;
mod pipeline;
mod transforms;
mod utilities;

pub use mdtree_core::{
    AutolinkKind, Block, Blocks, Error, Inline, Lines, ListType, Result, Text,
};
pub use options::InlineOptions;
pub use pipeline::InlineParser;
pub use transforms::{
    autolink_transform, code_autolink_html_transform, code_span_transform, commonmark_transforms,
    line_break_transform, raw_html_transform, Transform, TransformConstructor, TransformFn,
    TransformFnBox,
};
