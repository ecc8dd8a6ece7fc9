//! Property-based tests for style application and editing
//!
//! Whatever the selection, applying a style must never change the text,
//! and typing must always leave the document holding exactly what was typed.

use std::time::{Duration, Instant};

use chromatext::editor::{apply_style, Editor, Selection};
use chromatext::models::{Document, StyleTag};
use chromatext::state::{CopyEvent, CopyStatusStore};
use chromatext::Error;
use proptest::prelude::*;

fn arb_tag() -> impl Strategy<Value = StyleTag> {
    (1usize..19).prop_map(|index| StyleTag::ALL[index])
}

fn arb_document() -> impl Strategy<Value = Document> {
    (
        "[a-z \n]{0,40}",
        prop::collection::vec((0usize..50, 0usize..50, arb_tag()), 0..6),
    )
        .prop_map(|(text, ops)| {
            let mut editor = Editor::new(Document::plain(&text));
            for (a, b, tag) in ops {
                let len = editor.document().char_len() + 1;
                let _ = editor.apply(Selection::new(a % len, b % len), tag);
            }
            editor.document().clone()
        })
}

proptest! {
    #[test]
    fn test_apply_preserves_text(
        doc in arb_document(),
        a in 0usize..50,
        b in 0usize..50,
        tag in arb_tag(),
    ) {
        let len = doc.char_len() + 1;
        let selection = Selection::new(a % len, b % len);
        match apply_style(&doc, selection, tag) {
            Ok(next) => {
                prop_assert_eq!(next.plain_text(), doc.plain_text());
                prop_assert!(next.is_styled());
            }
            Err(Error::EmptySelection) => prop_assert!(selection.is_empty()),
            Err(Error::PartialSpan { offset }) => {
                let range = selection.range();
                prop_assert!(offset == range.start || offset == range.end);
            }
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    #[test]
    fn test_empty_selection_is_noop(doc in arb_document(), at in 0usize..50, tag in arb_tag()) {
        let mut editor = Editor::new(doc.clone());
        let caret = Selection::caret(at % (doc.char_len() + 1));
        prop_assert!(editor.apply(caret, tag).is_err());
        prop_assert_eq!(editor.document(), &doc);
    }

    #[test]
    fn test_reset_strips_everything(doc in arb_document(), a in 0usize..50, b in 0usize..50) {
        let reset = apply_style(&doc, Selection::new(a, b), StyleTag::Reset).unwrap();
        prop_assert!(!reset.is_styled());
        prop_assert_eq!(reset.plain_text(), doc.plain_text());
    }

    #[test]
    fn test_whole_plain_document_always_wraps(text in "[a-z ]{1,40}", tag in arb_tag()) {
        let doc = Document::plain(&text);
        let styled = apply_style(&doc, Selection::new(0, doc.char_len()), tag).unwrap();
        prop_assert_eq!(styled.nodes().len(), 1);
        prop_assert_eq!(styled.runs().len(), 1);
    }

    #[test]
    fn test_sync_text_matches_edit(doc in arb_document(), edited in "[a-z \n]{0,40}") {
        let mut editor = Editor::new(doc.clone());
        let changed = editor.sync_text(&edited).unwrap();
        prop_assert_eq!(changed, edited != doc.plain_text());
        prop_assert_eq!(editor.document().plain_text(), edited);
    }

    #[test]
    fn test_sync_text_at_any_caret_matches_edit(
        doc in arb_document(),
        edited in "[a-z \n]{0,40}",
        caret in 0usize..50,
    ) {
        let mut editor = Editor::new(doc.clone());
        editor.sync_text_at(&edited, Some(caret)).unwrap();
        prop_assert_eq!(editor.document().plain_text(), edited);
    }

    #[test]
    fn test_status_deadline_follows_last_copy(
        offsets in prop::collection::vec(0u64..5000, 1..10),
    ) {
        let start = Instant::now();
        let duration = Duration::from_millis(2000);
        let mut store = CopyStatusStore::new(duration);

        let mut now = start;
        for (i, offset) in offsets.iter().enumerate() {
            now += Duration::from_millis(*offset);
            let event = if i % 3 == 2 {
                CopyEvent::Failed("denied".to_string())
            } else {
                CopyEvent::Succeeded
            };
            store.dispatch(event, now);
        }

        prop_assert_eq!(store.revert_at(), Some(now + duration));
        prop_assert!(!store.tick(now + duration - Duration::from_millis(1)));
        prop_assert!(store.tick(now + duration));
        prop_assert!(store.status().is_idle());
    }
}
