//! Unit tests for span markup parsing and rendering

use chromatext::markup::{self, WELCOME_MARKUP};
use chromatext::models::{AnsiColor, Document, Node, StyleTag};
use chromatext::Error;

#[cfg(test)]
mod markup_tests {
    use super::*;

    #[test]
    fn test_parse_plain_text() {
        assert_eq!(markup::parse("just text").unwrap(), Document::plain("just text"));
    }

    #[test]
    fn test_parse_spans() {
        let doc = markup::parse(r#"Hello <span class="ansi-31">World</span>"#).unwrap();
        assert_eq!(
            doc.nodes(),
            &[
                Node::text("Hello "),
                Node::span(StyleTag::Foreground(AnsiColor::Red), vec![Node::text("World")]),
            ]
        );
    }

    #[test]
    fn test_parse_nested_spans() {
        let doc = markup::parse(r#"<span class="ansi-1"><span class="ansi-44">x</span>y</span>"#)
            .unwrap();
        assert_eq!(
            doc.nodes(),
            &[Node::span(
                StyleTag::Bold,
                vec![
                    Node::span(StyleTag::Background(AnsiColor::Blue), vec![Node::text("x")]),
                    Node::text("y"),
                ]
            )]
        );
    }

    #[test]
    fn test_parse_line_breaks() {
        let expected = Document::plain("a\nb\nc\nd");
        assert_eq!(markup::parse("a<br>b<br/>c\nd").unwrap(), expected);
        assert_eq!(markup::parse("a<br />b<br>c<br>d").unwrap(), expected);
    }

    #[test]
    fn test_parse_entities() {
        let doc = markup::parse("a&nbsp;&amp;&lt;&gt;&quot;&#39;").unwrap();
        assert_eq!(doc.plain_text(), "a\u{a0}&<>\"'");
    }

    #[test]
    fn test_empty_span_disappears() {
        let doc = markup::parse(r#"a<span class="ansi-1"></span>b"#).unwrap();
        assert_eq!(doc, Document::plain("ab"));
    }

    #[test]
    fn test_unclosed_span_is_rejected() {
        let result = markup::parse(r#"ok <span class="ansi-31">open"#);
        assert!(matches!(result, Err(Error::Markup { position: 3, .. })));
    }

    #[test]
    fn test_stray_closing_tag_is_rejected() {
        let result = markup::parse("text</span>");
        assert!(matches!(result, Err(Error::Markup { position: 4, .. })));
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!(matches!(
            markup::parse(r#"<span class="ansi-99">x</span>"#),
            Err(Error::Markup { .. })
        ));
    }

    #[test]
    fn test_unsupported_markup_is_rejected() {
        assert!(matches!(markup::parse("a < b"), Err(Error::Markup { position: 2, .. })));
        assert!(matches!(markup::parse("<b>bold</b>"), Err(Error::Markup { .. })));
        assert!(matches!(markup::parse("fish & chips"), Err(Error::Markup { .. })));
    }

    #[test]
    fn test_render_escapes_text() {
        let doc = Document::plain("a<b & c>\u{a0}");
        assert_eq!(markup::render(&doc), "a&lt;b &amp; c&gt;&nbsp;");
    }

    #[test]
    fn test_render_spans_and_breaks() {
        let doc = Document::from_nodes(vec![
            Node::span(StyleTag::Underline, vec![Node::text("u")]),
            Node::LineBreak,
            Node::text("x"),
        ]);
        assert_eq!(
            markup::render(&doc),
            r#"<span class="ansi-4">u</span><br>x"#
        );
    }

    #[test]
    fn test_welcome_round_trip() {
        let welcome = markup::welcome_document();
        assert!(welcome.is_styled());
        assert!(welcome.plain_text().starts_with("Welcome to Rebane's Discord"));
        assert_eq!(markup::render(&welcome), WELCOME_MARKUP);
        assert_eq!(markup::parse(&markup::render(&welcome)).unwrap(), welcome);
    }
}
