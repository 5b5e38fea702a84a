use std::sync::Arc;
use std::thread;

use mdtree::{
    autolink_transform, code_span_transform, AutolinkKind, Block, Inline, InlineOptions,
    InlineParser, ListType, Text, Transform, TransformFn,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn shout() -> Box<dyn Transform> {
    TransformFn::raw("shout", |s| vec![Inline::Text(s.to_uppercase())]).boxed()
}

fn nested(text: Text) -> Block {
    Block::Document(vec![Block::Blockquote(vec![Block::List {
        start: None,
        tight: true,
        children: vec![Block::ListItem {
            marker: ListType::Bullet('*'),
            tight: true,
            children: vec![Block::Paragraph(text)],
        }],
    }])])
}

fn full_document() -> Block {
    Block::Document(vec![
        Block::Heading {
            level: 1,
            text: Text::raw("Intro to `code`"),
        },
        Block::Paragraph(Text::raw("see <https://example.com>\nand <b>more</b>  \nend")),
        Block::IndentedCode(lines(&["`not code`"])),
        Block::FencedCode {
            info: Some("md".to_string()),
            lines: lines(&["<https://example.com>"]),
        },
        Block::HtmlBlock(lines(&["<div>", "`x`", "</div>"])),
        Block::ReferenceDef {
            label: "ref".to_string(),
            destination: "/url".to_string(),
            title: lines(&["`title`"]),
        },
        Block::ThematicBreak,
        nested(Text::raw("deep `one`")),
    ])
}

#[test]
fn test_recursive_coverage() {
    let parser = InlineParser::new(vec![shout()]);
    let parsed = parser.parse(&nested(Text::raw("inner")));
    assert_eq!(parsed, nested(Text::raw("INNER")));
}

#[test]
fn test_empty_parser_returns_equal_tree() {
    let tree = full_document();
    assert_eq!(InlineParser::empty().parse(&tree), tree);
    assert_eq!(
        InlineParser::with_options(InlineOptions::none()).parse(&tree),
        tree
    );
}

#[rstest]
#[case(Block::IndentedCode(lines(&["  `a`  ", "b  "])))]
#[case(Block::FencedCode { info: Some("rust".to_string()), lines: lines(&["<http://x>"]) })]
#[case(Block::FencedCode { info: None, lines: Vec::new() })]
#[case(Block::HtmlBlock(lines(&["<p>", "line  ", "</p>"])))]
#[case(Block::ReferenceDef {
    label: "a".to_string(),
    destination: "<b>".to_string(),
    title: lines(&["`t`"]),
})]
#[case(Block::ReferenceDef {
    label: "a".to_string(),
    destination: "/b".to_string(),
    title: Vec::new(),
})]
#[case(Block::ThematicBreak)]
fn test_opaque_blocks_pass_through(#[case] block: Block) {
    assert_eq!(InlineParser::default().parse(&block), block);
    assert_eq!(InlineParser::new(vec![shout()]).parse(&block), block);
}

#[test]
fn test_default_parser_on_document() {
    let parsed = InlineParser::default().parse(&full_document());
    assert_eq!(
        parsed.render(),
        concat!(
            "document(",
            "heading(1, text(Intro to ), code(code)), ",
            "paragraph(text(see ), autolink(uri, https://example.com), softbreak, ",
            "text(and ), html(<b>), text(more), html(</b>), linebreak, text(end)), ",
            r#"indentedCode("`not code`"), "#,
            r#"fencedCode(md, "<https://example.com>"), "#,
            r#"htmlBlock("<div>", "`x`", "</div>"), "#,
            r#"referenceDef(ref, /url, "`title`"), "#,
            "thematicBreak, ",
            "blockquote(list(tight, listItem(bullet(*), tight, ",
            "paragraph(text(deep ), code(one))))))",
        )
    );
}

#[test]
fn test_unit_order_is_precedence() {
    let input = Text::raw("`<http://x>`");

    let code_first = InlineParser::new(vec![
        code_span_transform().boxed(),
        autolink_transform().boxed(),
    ]);
    assert_eq!(
        code_first.transform(input.clone()),
        Text::from(vec![Inline::Code("<http://x>".to_string())])
    );

    let links_first = InlineParser::new(vec![
        autolink_transform().boxed(),
        code_span_transform().boxed(),
    ]);
    assert_eq!(
        links_first.transform(input),
        Text::from(vec![
            Inline::Text("`".to_string()),
            Inline::Autolink {
                kind: AutolinkKind::Uri,
                target: "http://x".to_string(),
            },
            Inline::Text("`".to_string()),
        ])
    );
}

#[test]
fn test_parser_is_reusable() {
    let parser = InlineParser::default();
    let tree = full_document();
    let first = parser.parse(&tree);
    let second = parser.parse(&tree);
    assert_eq!(first, second);
    assert_eq!(
        parser.parse(&nested(Text::raw("`a`"))),
        nested(Text::from(vec![Inline::Code("a".to_string())]))
    );
}

#[test]
fn test_parser_shared_between_threads() {
    let parser = Arc::new(InlineParser::default());
    let expected = parser.parse(&full_document());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let parser = Arc::clone(&parser);
            thread::spawn(move || parser.parse(&full_document()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_heading_and_paragraph_equal_text_differ() {
    let parser = InlineParser::default();
    let text = Text::raw("same");
    let heading = parser.parse(&Block::Heading {
        level: 1,
        text: text.clone(),
    });
    let paragraph = parser.parse(&Block::Paragraph(text));
    assert_ne!(heading, paragraph);
}

#[rstest]
#[case("\\`not code`", r"paragraph(text(\`not code`))")]
#[case("a\\\\\nb", r"paragraph(text(a\\), softbreak, text(b))")]
#[case("a\\\nb", r"paragraph(text(a), linebreak, text(b))")]
#[case(r#"`<a href="`">`"#, r#"paragraph(code(<a href="), text(">`))"#)]
#[case("<http://foo.bar.`baz>`", "paragraph(autolink(uri, http://foo.bar.`baz), text(`))")]
fn test_default_parser_escapes_and_leftmost_construct(#[case] input: &str, #[case] expected: &str) {
    let parsed = InlineParser::default().parse(&Block::Paragraph(Text::raw(input)));
    assert_eq!(parsed.render(), expected);
}
