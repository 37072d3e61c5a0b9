use tracing::debug;

use crate::document::{Disposer, Document, DomEvent};

/// Character budget each output line is truncated to.
pub const LINE_BUDGET: usize = 14;

/// Greedily keep leading whole words of `line` while they fit the budget.
///
/// Each accepted word consumes its length plus one from the remaining quota
/// (the one pays for the joining space), so the quota may legitimately end at
/// -1. The first word that does not fit stops the scan: nothing after it is
/// kept, even if a later word would still fit. Kept words are re-joined with
/// single spaces.
pub fn truncate_line(line: &str, budget: usize) -> String {
    let mut quota = budget as i64;
    let mut kept = Vec::new();
    for word in line.split(' ') {
        let len = word.chars().count() as i64;
        if len > quota {
            break;
        }
        quota -= len + 1;
        kept.push(word);
    }
    kept.join(" ")
}

/// Word-wrap every line of `text` to `LINE_BUDGET` characters.
pub fn render(text: &str) -> String {
    text.split('\n')
        .map(|line| truncate_line(line, LINE_BUDGET))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Register the selection-changed handler that renders the selected file's
/// text into the designated output element.
pub fn install(doc: &mut dyn Document) -> Disposer {
    let id = doc.add_listener(
        DomEvent::SelectionChanged,
        Box::new(|doc| {
            if let Some(text) = doc.selected_text() {
                let rendered = render(&text);
                debug!(lines = rendered.lines().count(), "reader output updated");
                doc.write_output(&rendered);
            }
        }),
    );
    Disposer::new(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::StaticDocument;

    #[test]
    fn truncates_at_word_boundary() {
        // quota 14: "the"=3 fits leaving 10, "quick"=5 fits leaving 4,
        // "brown"=5 does not fit in 4 -> stop.
        assert_eq!(truncate_line("the quick brown fox", 14), "the quick");
    }

    #[test]
    fn keeps_whole_line_that_fits() {
        assert_eq!(truncate_line("abcd efghij", 14), "abcd efghij");
    }

    #[test]
    fn word_consuming_exact_quota_is_kept() {
        // "abcdefghijklmn" = 14 chars, 14 <= 14.
        assert_eq!(truncate_line("abcdefghijklmn", 14), "abcdefghijklmn");
    }

    #[test]
    fn oversized_first_word_yields_empty() {
        assert_eq!(truncate_line("extraordinarily long", 14), "");
    }

    #[test]
    fn rejection_is_terminal() {
        // "cc" would fit the remaining quota, but a word was already
        // rejected on this line.
        assert_eq!(truncate_line("aaaaa bbbbbbbbbb cc", 14), "aaaaa");
    }

    #[test]
    fn empty_line_stays_empty() {
        assert_eq!(truncate_line("", 14), "");
    }

    #[test]
    fn consecutive_spaces_yield_empty_words() {
        // split(' ') yields "a", "", "b"; the empty word costs 1.
        assert_eq!(truncate_line("a  b", 3), "a ");
    }

    #[test]
    fn zero_budget_keeps_nothing() {
        assert_eq!(truncate_line("a b", 0), "");
    }

    #[test]
    fn render_truncates_each_line() {
        let text = "the quick brown fox\nhello mighty world";
        assert_eq!(render(text), "the quick\nhello mighty");
    }

    #[test]
    fn render_preserves_line_count() {
        let text = "one\n\nthree";
        assert_eq!(render(text), "one\n\nthree");
    }

    #[test]
    fn install_renders_selection_into_output() {
        let mut doc = StaticDocument::new();
        let _disposer = install(&mut doc);
        doc.select_text("the quick brown fox\nhello mighty world");
        assert_eq!(doc.output(), "the quick\nhello mighty");
    }

    #[test]
    fn disposed_reader_ignores_later_selections() {
        let mut doc = StaticDocument::new();
        let disposer = install(&mut doc);
        doc.select_text("the quick brown fox");
        assert_eq!(doc.output(), "the quick");

        assert!(disposer.dispose(&mut doc));
        doc.select_text("something entirely different");
        assert_eq!(doc.output(), "the quick");
    }
}
