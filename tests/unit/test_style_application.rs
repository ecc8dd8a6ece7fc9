//! Unit tests for style application and text editing

use chromatext::editor::{apply_style, Editor, Selection};
use chromatext::models::{AnsiColor, Document, Node, StyleSet, StyleTag};
use chromatext::{AnsiEncoder, Error};

#[cfg(test)]
mod style_application_tests {
    use super::*;

    fn red() -> StyleTag {
        StyleTag::Foreground(AnsiColor::Red)
    }

    fn green() -> StyleTag {
        StyleTag::Foreground(AnsiColor::Green)
    }

    fn hello_world() -> Document {
        Document::from_nodes(vec![
            Node::text("Hello "),
            Node::span(red(), vec![Node::text("World")]),
        ])
    }

    #[test]
    fn test_wrap_selection_in_plain_text() {
        let doc = apply_style(&Document::plain("Hello World"), Selection::new(6, 11), red()).unwrap();
        assert_eq!(doc, hello_world());
    }

    #[test]
    fn test_backwards_selection() {
        let doc = apply_style(&Document::plain("Hello World"), Selection::new(11, 6), red()).unwrap();
        assert_eq!(doc, hello_world());
    }

    #[test]
    fn test_middle_of_text() {
        let doc = apply_style(&Document::plain("abcde"), Selection::new(1, 3), StyleTag::Bold).unwrap();
        assert_eq!(
            doc.nodes(),
            &[
                Node::text("a"),
                Node::span(StyleTag::Bold, vec![Node::text("bc")]),
                Node::text("de"),
            ]
        );
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let result = apply_style(&hello_world(), Selection::caret(3), StyleTag::Bold);
        assert!(matches!(result, Err(Error::EmptySelection)));
    }

    #[test]
    fn test_selection_past_end_is_rejected() {
        let result = apply_style(&hello_world(), Selection::new(3, 50), StyleTag::Bold);
        assert!(matches!(
            result,
            Err(Error::SelectionOutOfBounds { start: 3, end: 50, len: 11 })
        ));
    }

    #[test]
    fn test_reset_ignores_selection() {
        let doc = apply_style(&hello_world(), Selection::caret(0), StyleTag::Reset).unwrap();
        assert_eq!(doc, Document::plain("Hello World"));
        assert!(!doc.is_styled());
    }

    #[test]
    fn test_exact_cover_wraps_inside_span() {
        let doc = apply_style(&hello_world(), Selection::new(6, 11), StyleTag::Bold).unwrap();
        assert_eq!(
            doc.nodes()[1],
            Node::span(red(), vec![Node::span(StyleTag::Bold, vec![Node::text("World")])])
        );
    }

    #[test]
    fn test_recoloring_styled_word_takes_new_color() {
        let blue = StyleTag::Foreground(AnsiColor::Blue);
        let doc = apply_style(&hello_world(), Selection::new(6, 11), blue).unwrap();
        let runs = doc.runs();
        assert_eq!(runs[1].text, "World");
        assert_eq!(runs[1].style.foreground, Some(AnsiColor::Blue));
        assert_eq!(
            AnsiEncoder::new().encode_document(&doc),
            "```ansi\nHello \x1b[31m\x1b[34mWorld\x1b[0m\x1b[0m\n```"
        );
    }

    #[test]
    fn test_selection_inside_span_nests() {
        let doc = apply_style(&hello_world(), Selection::new(7, 9), StyleTag::Underline).unwrap();
        assert_eq!(
            doc.nodes()[1],
            Node::span(
                red(),
                vec![
                    Node::text("W"),
                    Node::span(StyleTag::Underline, vec![Node::text("or")]),
                    Node::text("ld"),
                ]
            )
        );
        assert_eq!(doc.plain_text(), "Hello World");
    }

    #[test]
    fn test_selection_covering_text_and_whole_span() {
        let doc = apply_style(&hello_world(), Selection::new(3, 11), StyleTag::Bold).unwrap();
        assert_eq!(
            doc.nodes(),
            &[
                Node::text("Hel"),
                Node::span(
                    StyleTag::Bold,
                    vec![Node::text("lo "), Node::span(red(), vec![Node::text("World")])]
                ),
            ]
        );
    }

    #[test]
    fn test_partial_span_overlap_is_rejected() {
        let result = apply_style(&hello_world(), Selection::new(3, 8), StyleTag::Bold);
        assert!(matches!(result, Err(Error::PartialSpan { offset: 8 })));

        let doc = Document::from_nodes(vec![
            Node::span(red(), vec![Node::text("ab")]),
            Node::text("cd"),
        ]);
        let result = apply_style(&doc, Selection::new(1, 3), StyleTag::Bold);
        assert!(matches!(result, Err(Error::PartialSpan { offset: 1 })));
    }

    #[test]
    fn test_applying_twice_nests_spans() {
        let doc = Document::plain("hi");
        let doc = apply_style(&doc, Selection::new(0, 2), green()).unwrap();
        let doc = apply_style(&doc, Selection::new(0, 2), StyleTag::Bold).unwrap();
        assert_eq!(
            AnsiEncoder::new().encode_document(&doc),
            "```ansi\n\x1b[32m\x1b[1mhi\x1b[0m\x1b[0m\n```"
        );
    }

    #[test]
    fn test_innermost_color_wins_in_runs() {
        let doc = Document::plain("abc");
        let doc = apply_style(&doc, Selection::new(0, 3), red()).unwrap();
        let doc = apply_style(&doc, Selection::new(1, 2), green()).unwrap();
        let runs = doc.runs();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[1].text, "b");
        assert_eq!(runs[1].style, StyleSet::from_tags([green()]));
        assert_eq!(runs[2].style, StyleSet::from_tags([red()]));
    }

    #[test]
    fn test_selection_spanning_line_break() {
        let doc = Document::plain("ab\ncd");
        let doc = apply_style(&doc, Selection::new(1, 4), red()).unwrap();
        assert_eq!(doc.plain_text(), "ab\ncd");
        assert_eq!(
            AnsiEncoder::new().encode_document(&doc),
            "```ansi\na\x1b[31mb\nc\x1b[0md\n```"
        );
    }

    #[test]
    fn test_editor_keeps_document_on_failure() {
        let mut editor = Editor::new(hello_world());
        assert!(editor.apply(Selection::caret(2), StyleTag::Bold).is_err());
        assert!(editor.apply(Selection::new(3, 8), StyleTag::Bold).is_err());
        assert_eq!(editor.document(), &hello_world());

        editor.apply(Selection::new(0, 5), StyleTag::Bold).unwrap();
        assert_ne!(editor.document(), &hello_world());

        editor.reset();
        assert_eq!(editor.document(), &Document::plain("Hello World"));
    }

    #[test]
    fn test_typing_at_end_of_span_extends_it() {
        let mut editor = Editor::new(hello_world());
        assert!(editor.sync_text("Hello Worlds").unwrap());
        assert_eq!(
            editor.document().nodes(),
            &[
                Node::text("Hello "),
                Node::span(red(), vec![Node::text("Worlds")]),
            ]
        );
    }

    #[test]
    fn test_typing_at_start_stays_plain() {
        let mut editor = Editor::new(hello_world());
        editor.sync_text(">Hello World").unwrap();
        assert_eq!(editor.document().nodes()[0], Node::text(">Hello "));
    }

    #[test]
    fn test_typing_repeated_letter_before_span_stays_plain() {
        let mut editor = Editor::new(hello_world());
        assert!(editor.sync_text_at("Hello WWorld", Some(7)).unwrap());
        assert_eq!(
            editor.document().nodes(),
            &[
                Node::text("Hello W"),
                Node::span(red(), vec![Node::text("World")]),
            ]
        );
    }

    #[test]
    fn test_deleting_span_text_removes_span() {
        let mut editor = Editor::new(hello_world());
        editor.sync_text("Hello ").unwrap();
        assert_eq!(editor.document(), &Document::plain("Hello "));
    }

    #[test]
    fn test_replacing_inside_span_keeps_style() {
        let mut editor = Editor::new(hello_world());
        editor.sync_text("Hello Wxyzd").unwrap();
        assert_eq!(
            editor.document().nodes()[1],
            Node::span(red(), vec![Node::text("Wxyzd")])
        );
    }

    #[test]
    fn test_typing_newline_inserts_line_break() {
        let mut editor = Editor::new(Document::plain("ab"));
        editor.sync_text("a\nb").unwrap();
        assert_eq!(
            editor.document().nodes(),
            &[Node::text("a"), Node::LineBreak, Node::text("b")]
        );
    }

    #[test]
    fn test_unchanged_text_is_noop() {
        let mut editor = Editor::new(hello_world());
        assert!(!editor.sync_text("Hello World").unwrap());
        assert_eq!(editor.document(), &hello_world());
    }
}
