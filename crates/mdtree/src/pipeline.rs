//! InlineParser - rewrites the text leaves of a block tree.

use log::{debug, trace};
use mdtree_core::{Block, Blocks, Text};

use crate::options::InlineOptions;
use crate::transforms::{commonmark_transforms, Transform, TransformConstructor};

/// Applies an ordered chain of transformation units to every paragraph and
/// heading of a block tree.
///
/// The chain is fixed at construction, so one parser can be reused for any
/// number of documents and shared between threads.
///
/// The tree walk recurses once per level of container nesting (block quotes,
/// lists and list items). Producers accepting untrusted input should cap that
/// nesting before handing the tree over.
pub struct InlineParser {
    transforms: Vec<Box<dyn Transform>>,
}

impl InlineParser {
    /// Create a parser from already constructed units, applied in order
    pub fn new(transforms: Vec<Box<dyn Transform>>) -> Self {
        debug!(
            "inline parser with {} transforms: {:?}",
            transforms.len(),
            transforms.iter().map(|t| t.name()).collect::<Vec<_>>()
        );
        Self { transforms }
    }

    /// Create a parser that leaves all text unchanged
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Create a parser by invoking each constructor once, in order
    pub fn from_constructors(constructors: &[TransformConstructor]) -> Self {
        Self::new(constructors.iter().map(|construct| construct()).collect())
    }

    /// Create a parser from the built-in units selected by `options`
    pub fn with_options(options: InlineOptions) -> Self {
        Self::new(commonmark_transforms(&options))
    }

    /// Number of configured units
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Names of the configured units, in application order
    pub fn transform_names(&self) -> Vec<&str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }

    /// Rewrite every text leaf of `block`, returning a new tree.
    ///
    /// Containers are rebuilt with rewritten children and unchanged fields.
    /// Code, HTML, reference definitions and thematic breaks are copied as is.
    pub fn parse(&self, block: &Block) -> Block {
        match block {
            Block::Document(children) => Block::Document(self.parse_blocks(children)),

            Block::Blockquote(children) => Block::Blockquote(self.parse_blocks(children)),

            Block::List {
                start,
                tight,
                children,
            } => Block::List {
                start: *start,
                tight: *tight,
                children: self.parse_blocks(children),
            },

            Block::ListItem {
                marker,
                tight,
                children,
            } => Block::ListItem {
                marker: *marker,
                tight: *tight,
                children: self.parse_blocks(children),
            },

            Block::Paragraph(text) => {
                trace!("rewriting paragraph with {} fragments", text.fragments().len());
                Block::Paragraph(self.transform(text.clone()))
            }

            Block::Heading { level, text } => {
                trace!("rewriting heading {} with {} fragments", level, text.fragments().len());
                Block::Heading {
                    level: *level,
                    text: self.transform(text.clone()),
                }
            }

            Block::IndentedCode(lines) => Block::IndentedCode(lines.clone()),

            Block::FencedCode { info, lines } => Block::FencedCode {
                info: info.clone(),
                lines: lines.clone(),
            },

            Block::HtmlBlock(lines) => Block::HtmlBlock(lines.clone()),

            Block::ReferenceDef {
                label,
                destination,
                title,
            } => Block::ReferenceDef {
                label: label.clone(),
                destination: destination.clone(),
                title: title.clone(),
            },

            Block::ThematicBreak => Block::ThematicBreak,
        }
    }

    fn parse_blocks(&self, blocks: &[Block]) -> Blocks {
        blocks.iter().map(|block| self.parse(block)).collect()
    }

    /// Fold the configured units over `text`, first unit first
    pub fn transform(&self, text: Text) -> Text {
        self.transforms
            .iter()
            .fold(text, |text, unit| unit.transform(text))
    }
}

impl Default for InlineParser {
    fn default() -> Self {
        Self::with_options(InlineOptions::default())
    }
}

impl std::fmt::Debug for InlineParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InlineParser")
            .field("transforms", &self.transform_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::TransformFn;
    use mdtree_core::{Inline, ListType};
    use pretty_assertions::assert_eq;

    fn append(suffix: &'static str) -> Box<dyn Transform> {
        TransformFn::raw(suffix, move |s| vec![Inline::Text(format!("{}{}", s, suffix))]).boxed()
    }

    fn upper() -> Box<dyn Transform> {
        TransformFn::raw("upper", |s| vec![Inline::Text(s.to_uppercase())]).boxed()
    }

    #[test]
    fn test_empty_parser_is_identity() {
        let parser = InlineParser::empty();
        assert!(parser.is_empty());
        assert_eq!(parser.transform(Text::raw("a *b*")), Text::raw("a *b*"));
    }

    #[test]
    fn test_fold_applies_in_order() {
        let parser = InlineParser::new(vec![append("a"), append("b")]);
        assert_eq!(parser.transform(Text::raw("x")), Text::raw("xab"));

        let reversed = InlineParser::new(vec![append("b"), append("a")]);
        assert_eq!(reversed.transform(Text::raw("x")), Text::raw("xba"));
    }

    #[test]
    fn test_fold_feeds_previous_output() {
        let parser = InlineParser::new(vec![append("a"), upper()]);
        assert_eq!(parser.transform(Text::raw("x")), Text::raw("XA"));

        let reversed = InlineParser::new(vec![upper(), append("a")]);
        assert_eq!(reversed.transform(Text::raw("x")), Text::raw("Xa"));
    }

    #[test]
    fn test_from_constructors() {
        fn first() -> Box<dyn Transform> {
            append("1")
        }
        fn second() -> Box<dyn Transform> {
            append("2")
        }
        let parser = InlineParser::from_constructors(&[first, second]);
        assert_eq!(parser.len(), 2);
        assert_eq!(parser.transform_names(), ["1", "2"]);
        assert_eq!(parser.transform(Text::raw("x")), Text::raw("x12"));
    }

    #[test]
    fn test_parse_keeps_fields() {
        let parser = InlineParser::new(vec![upper()]);
        let tree = Block::List {
            start: Some(7),
            tight: false,
            children: vec![Block::ListItem {
                marker: ListType::Ordered(7, ')'),
                tight: false,
                children: vec![Block::Heading {
                    level: 4,
                    text: Text::raw("h"),
                }],
            }],
        };
        assert_eq!(
            parser.parse(&tree),
            Block::List {
                start: Some(7),
                tight: false,
                children: vec![Block::ListItem {
                    marker: ListType::Ordered(7, ')'),
                    tight: false,
                    children: vec![Block::Heading {
                        level: 4,
                        text: Text::raw("H"),
                    }],
                }],
            }
        );
    }

    #[test]
    fn test_parse_leaves_original_untouched() {
        let parser = InlineParser::new(vec![upper()]);
        let tree = Block::Document(vec![Block::Paragraph(Text::raw("p"))]);
        let parsed = parser.parse(&tree);
        assert_eq!(tree, Block::Document(vec![Block::Paragraph(Text::raw("p"))]));
        assert_eq!(parsed, Block::Document(vec![Block::Paragraph(Text::raw("P"))]));
    }

    #[test]
    fn test_debug_lists_names() {
        let parser = InlineParser::default();
        assert_eq!(
            format!("{:?}", parser),
            r#"InlineParser { transforms: ["code_autolinks_html", "line_breaks"] }"#
        );
    }
}
