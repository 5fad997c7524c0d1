/// Classification of a single document line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Document-level delimiter: three or more leading `=`. Never opens a
    /// section and never contributes to any count.
    Marker,
    /// Section header: exactly two leading `=` (the marker case is checked
    /// first). Carries the section name, the line stripped of every `=` and
    /// trimmed.
    Header(String),
    /// Anything else.
    Content,
}

/// Classify one line of the document.
pub fn classify(line: &str) -> LineKind {
    if line.starts_with("===") {
        LineKind::Marker
    } else if line.starts_with("==") {
        let stripped = line.replace('=', "");
        LineKind::Header(stripped.trim().to_string())
    } else {
        LineKind::Content
    }
}
