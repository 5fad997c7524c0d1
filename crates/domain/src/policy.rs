/// Content types the analyzer accepts, as editors tag text buffers.
const TEXTUAL_KINDS: [&str; 2] = ["markdown", "plaintext"];

/// Filename suffix of a conventional readme text file, matched
/// case-insensitively.
const README_SUFFIX: &str = "readme.txt";

/// Whether a document qualifies for analysis at all.
///
/// Both conditions must hold: the declared content type is one of the textual
/// kinds, and the filename ends with the readme suffix. Callers are expected
/// to suppress their output entirely for ineligible documents.
pub fn is_eligible(content_type: &str, filename: &str) -> bool {
    TEXTUAL_KINDS.contains(&content_type) && filename.to_lowercase().ends_with(README_SUFFIX)
}
