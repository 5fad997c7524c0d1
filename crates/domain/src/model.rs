use std::ops::AddAssign;

use readme_count_shared_kernel::{CharCount, LineCount, WordCount};
use serde::{Deserialize, Serialize};

/// Word, line and character tallies for a piece of text.
///
/// Every field defaults to zero when deserialized from a partial shape, so
/// aggregation over externally supplied counts never fails on missing fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCounts {
    #[serde(default)]
    pub words: WordCount,
    #[serde(default)]
    pub lines: LineCount,
    #[serde(default)]
    pub characters: CharCount,
    #[serde(default)]
    pub characters_with_spaces: CharCount,
}

impl TextCounts {
    pub const fn zero() -> Self {
        Self {
            words: WordCount::zero(),
            lines: LineCount::zero(),
            characters: CharCount::zero(),
            characters_with_spaces: CharCount::zero(),
        }
    }
}

impl AddAssign<&TextCounts> for TextCounts {
    // Field list is deliberately spelled out; adding a field to the struct
    // must be mirrored here.
    fn add_assign(&mut self, rhs: &TextCounts) {
        self.words += rhs.words;
        self.lines += rhs.lines;
        self.characters += rhs.characters;
        self.characters_with_spaces += rhs.characters_with_spaces;
    }
}

/// Ordered mapping from section name to accumulated word count.
///
/// Insertion order is the order sections first appear in the document. Names
/// are unique: reopening a section resets its counter in place rather than
/// appending a second entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SectionCounts {
    entries: Vec<SectionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionEntry {
    pub name: String,
    pub words: WordCount,
}

impl SectionCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the section named `name` with a zeroed counter and return its
    /// index. An already known name keeps its original position.
    pub fn open(&mut self, name: &str) -> usize {
        match self.entries.iter().position(|e| e.name == name) {
            Some(index) => {
                self.entries[index].words = WordCount::zero();
                index
            }
            None => {
                self.entries.push(SectionEntry {
                    name: name.to_string(),
                    words: WordCount::zero(),
                });
                self.entries.len() - 1
            }
        }
    }

    pub fn add_words(&mut self, index: usize, words: WordCount) {
        self.entries[index].words += words;
    }

    pub fn get(&self, name: &str) -> Option<WordCount> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.words)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, WordCount)> {
        self.entries.iter().map(|e| (e.name.as_str(), e.words))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of analyzing one document together with its selection fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub section_counts: SectionCounts,
    pub is_over_limit: bool,
    pub selection: TextCounts,
    pub has_selection: bool,
}
