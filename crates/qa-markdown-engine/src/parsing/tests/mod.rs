//! Whole-document tests for the parsing module.
//!
//! Block- and inline-level cases live next to their code; these cover how
//! the two passes combine.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    Document,
    blocks::{Block, HeadingLevel},
    inline::Inline,
    invariants, parse_document,
};

fn text(s: &str) -> Inline {
    Inline::Text(s.into())
}

fn parse(src: &str) -> Document {
    let doc = parse_document(src);
    invariants::check(&doc);
    doc
}

#[test]
fn empty_document() {
    assert!(parse("").is_empty());
}

#[test]
fn heading_with_space() {
    assert_eq!(
        parse("# Title").blocks,
        vec![Block::Heading {
            level: HeadingLevel::H1,
            content: vec![text("Title")]
        }]
    );
}

#[test]
fn heading_without_space_is_paragraph() {
    assert_eq!(
        parse("#Title").blocks,
        vec![Block::Paragraph {
            content: vec![text("#Title")]
        }]
    );
}

#[test]
fn three_item_list() {
    assert_eq!(
        parse("- a\n- b\n- c").blocks,
        vec![Block::List {
            items: vec![vec![text("a")], vec![text("b")], vec![text("c")]]
        }]
    );
}

#[test]
fn bold_and_italic_paragraph() {
    assert_eq!(
        parse("**bold** and *italic*").blocks,
        vec![Block::Paragraph {
            content: vec![
                Inline::Bold("bold".into()),
                text(" and "),
                Inline::Italic("italic".into())
            ]
        }]
    );
}

#[test]
fn unterminated_bold_paragraph() {
    assert_eq!(
        parse("**unterminated").blocks,
        vec![Block::Paragraph {
            content: vec![text("**unterminated")]
        }]
    );
}

#[test]
fn fenced_code_block() {
    assert_eq!(
        parse("```\ncode\nmore\n```").blocks,
        vec![Block::CodeBlock {
            literal_text: "code\nmore".into()
        }]
    );
}

#[test]
fn link_paragraph() {
    assert_eq!(
        parse("[link](http://x)").blocks,
        vec![Block::Paragraph {
            content: vec![Inline::Link {
                text: "link".into(),
                url: "http://x".into()
            }]
        }]
    );
}

#[test]
fn inline_markup_in_every_textual_block() {
    let doc = parse("## *a*\n- `b`\n> [c](d)");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Heading {
                level: HeadingLevel::H2,
                content: vec![Inline::Italic("a".into())]
            },
            Block::List {
                items: vec![vec![Inline::Code("b".into())]]
            },
            Block::Blockquote {
                content: vec![Inline::Link {
                    text: "c".into(),
                    url: "d".into()
                }]
            },
        ]
    );
}

#[test]
fn trailing_newline_adds_no_block() {
    assert_eq!(parse("para\n").len(), 1);
    assert_eq!(parse("para\n\n").len(), 2);
}

#[test]
fn crlf_input() {
    assert_eq!(
        parse("- a\r\n- b\r\n").blocks,
        vec![Block::List {
            items: vec![vec![text("a")], vec![text("b")]]
        }]
    );
}

/// Without inline markup, stripping block markers is all the parser does.
#[rstest]
#[case("plain words", "plain words")]
#[case("# one\n## two\n### three", "one\ntwo\nthree")]
#[case("- x\n- y\n\n> z", "x\ny\n\nz")]
#[case("```sh\nls -la\n```\nend", "ls -la\nend")]
#[case("a\n\n\nb", "a\n\n\nb")]
fn content_round_trip(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(parse(src).plain_text(), expected);
}

/// Reparsing the plain text of marker-free output yields no new spans.
#[rstest]
#[case("just text")]
#[case("# heading\n- item one\n- item two")]
#[case("> quote\n\nparagraph (with parens)")]
fn plain_text_reparse_is_stable(#[case] src: &str) {
    let first = parse(src).plain_text();
    let second = parse(&first);
    assert!(second.blocks.iter().flat_map(Block::inlines).all(Inline::is_text));
    assert_eq!(second.plain_text(), first);
}

#[test]
fn delimiters_are_the_only_characters_removed() {
    let src = "*é* **ü** `ß` [ñ](x) tail";
    let doc = parse(src);
    assert_eq!(doc.plain_text(), "é ü ß ñ tail");
}

#[test]
fn whitespace_only_line_is_blank() {
    assert_eq!(parse("  \t").blocks, vec![Block::Blank]);
}

#[test]
fn documents_are_independent_values() {
    let a = parse("# a");
    let b = parse("# a");
    assert_eq!(a, b);
    let shared = std::thread::spawn(|| parse_document("- from another thread"))
        .join()
        .unwrap();
    assert_eq!(shared.len(), 1);
}
