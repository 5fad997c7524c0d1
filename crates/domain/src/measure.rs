use readme_count_shared_kernel::{CharCount, LineCount, WordCount};

use crate::model::TextCounts;

/// Count words, lines and characters in a piece of text.
///
/// Words are maximal runs of non-whitespace. Lines follow the
/// newline-count-plus-one convention: the empty string is one line, and a
/// trailing newline contributes a final empty line. `characters` excludes
/// whitespace, `characters_with_spaces` is the full character count.
pub fn count(text: &str) -> TextCounts {
    let newlines = bytecount::count(text.as_bytes(), b'\n');
    let characters_with_spaces = text.chars().count();
    let whitespace = text.chars().filter(|c| c.is_whitespace()).count();
    TextCounts {
        words: WordCount::new(text.split_whitespace().count()),
        lines: LineCount::new(newlines + 1),
        characters: CharCount::new(characters_with_spaces - whitespace),
        characters_with_spaces: CharCount::new(characters_with_spaces),
    }
}
