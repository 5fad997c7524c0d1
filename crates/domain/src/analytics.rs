use crate::classify::{LineKind, classify};
use crate::measure;
use crate::model::{AnalysisResult, SectionCounts, TextCounts};

/// Fixed policy threshold: a section strictly above this many words flags the
/// whole document as over limit.
pub const WORD_LIMIT_PER_SECTION: usize = 1500;

/// Accumulator threaded through the fold over document lines.
#[derive(Debug, Default)]
struct ScanState {
    sections: SectionCounts,
    current: Option<usize>,
}

impl ScanState {
    fn step(mut self, line: &str) -> Self {
        match classify(line) {
            LineKind::Marker => self,
            LineKind::Header(name) => {
                self.current = Some(self.sections.open(&name));
                self
            }
            LineKind::Content => {
                // Preamble lines carry no section, so they are discarded.
                if let Some(index) = self.current {
                    self.sections.add_words(index, measure::count(line).words);
                }
                self
            }
        }
    }
}

/// Analyze a document given as individual lines, together with the text
/// fragments of the current selection.
///
/// The scan is a single forward pass: markers are skipped, a header opens its
/// section with a zeroed counter (reopening resets, the position stays at
/// first appearance), and content lines add their word count to the open
/// section. Selection fragments are aggregated field-wise, independently of
/// section boundaries.
pub fn analyze<'a, I, S>(lines: I, selections: &[S]) -> AnalysisResult
where
    I: IntoIterator<Item = &'a str>,
    S: AsRef<str>,
{
    let state = lines.into_iter().fold(ScanState::default(), ScanState::step);
    let is_over_limit = state
        .sections
        .iter()
        .any(|(_, words)| words.value() > WORD_LIMIT_PER_SECTION);
    let (selection, has_selection) = aggregate_selections(selections);
    AnalysisResult {
        section_counts: state.sections,
        is_over_limit,
        selection,
        has_selection,
    }
}

/// Analyze a whole document passed as one string, split on `\n`.
pub fn analyze_text<S: AsRef<str>>(text: &str, selections: &[S]) -> AnalysisResult {
    analyze(text.split('\n'), selections)
}

fn aggregate_selections<S: AsRef<str>>(fragments: &[S]) -> (TextCounts, bool) {
    let mut total = TextCounts::zero();
    let mut has_selection = false;
    for fragment in fragments.iter().map(AsRef::as_ref).filter(|f| !f.is_empty()) {
        has_selection = true;
        total += &measure::count(fragment);
    }
    (total, has_selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use readme_count_shared_kernel::WordCount;

    const NO_SELECTION: &[&str] = &[];

    #[test]
    fn preamble_lines_are_discarded() {
        let result = analyze(["title", "== Intro ==", "hello world"], NO_SELECTION);
        assert_eq!(result.section_counts.len(), 1);
        assert_eq!(result.section_counts.get("Intro"), Some(WordCount::new(2)));
    }

    #[test]
    fn markers_never_open_or_feed_a_section() {
        let result = analyze(
            ["=== Doc ===", "== Intro ==", "one two three", "=== break ==="],
            NO_SELECTION,
        );
        assert_eq!(result.section_counts.len(), 1);
        assert_eq!(result.section_counts.get("Intro"), Some(WordCount::new(3)));
    }

    #[test]
    fn repeated_header_resets_instead_of_accumulating() {
        let result = analyze(["== A ==", "x y", "== A ==", "z"], NO_SELECTION);
        assert_eq!(result.section_counts.len(), 1);
        assert_eq!(result.section_counts.get("A"), Some(WordCount::new(1)));
    }

    #[test]
    fn sections_keep_document_order() {
        let result = analyze(
            ["== B ==", "b", "== A ==", "a", "== B ==", "bb bb"],
            NO_SELECTION,
        );
        let names: Vec<_> = result.section_counts.iter().map(|(n, _)| n.to_string()).collect();
        assert_eq!(names, ["B", "A"]);
        assert_eq!(result.section_counts.get("B"), Some(WordCount::new(2)));
    }

    #[test]
    fn over_limit_is_strictly_greater_than_the_threshold() {
        let at_limit = "word ".repeat(WORD_LIMIT_PER_SECTION);
        let result = analyze(["== Body ==", at_limit.as_str()], NO_SELECTION);
        assert_eq!(
            result.section_counts.get("Body"),
            Some(WordCount::new(WORD_LIMIT_PER_SECTION))
        );
        assert!(!result.is_over_limit);

        let over = format!("{at_limit} extra");
        let result = analyze(["== Body ==", over.as_str()], NO_SELECTION);
        assert!(result.is_over_limit);
    }

    #[test]
    fn document_without_headers_yields_empty_sections() {
        let result = analyze(["just", "prose", "=== marker ==="], NO_SELECTION);
        assert!(result.section_counts.is_empty());
        assert!(!result.is_over_limit);
    }

    #[test]
    fn selections_aggregate_across_fragments() {
        let result = analyze(["== A ==", "body"], &["a b", "c"]);
        assert!(result.has_selection);
        assert_eq!(result.selection.words, 3usize);
        assert_eq!(result.selection.lines, 2usize);
        assert_eq!(result.selection.characters, 3usize);
        assert_eq!(result.selection.characters_with_spaces, 4usize);
    }

    #[test]
    fn empty_fragments_do_not_count_as_a_selection() {
        let result = analyze(["== A ==", "body"], &["", ""]);
        assert!(!result.has_selection);
        assert_eq!(result.selection, TextCounts::zero());

        let result = analyze(["== A ==", "body"], NO_SELECTION);
        assert!(!result.has_selection);
        assert_eq!(result.selection, TextCounts::zero());
    }

    #[test]
    fn selection_is_independent_of_section_boundaries() {
        // The fragment spans what would be two sections in the document.
        let result = analyze(["== A ==", "a", "== B ==", "b"], &["a\n== B ==\nb"]);
        assert!(result.has_selection);
        assert_eq!(result.selection.words, 5usize);
        assert_eq!(result.selection.lines, 3usize);
    }

    #[test]
    fn analyze_is_idempotent() {
        let lines = ["title", "== A ==", "x y", "== B ==", "z"];
        let selections = ["pick me"];
        assert_eq!(analyze(lines, &selections), analyze(lines, &selections));
    }

    #[test]
    fn analyze_text_splits_on_newlines() {
        let from_text = analyze_text("title\n== A ==\nx y\n", NO_SELECTION);
        let from_lines = analyze(["title", "== A ==", "x y", ""], NO_SELECTION);
        assert_eq!(from_text, from_lines);
    }
}
