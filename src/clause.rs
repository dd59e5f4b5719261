use std::cell::OnceCell;

use tracing::debug;

use crate::syllable::SyllableCounter;

/// Punctuation characters that terminate a clause.
pub const CLAUSE_PUNCTUATION: &[char] = &['.', '!', '(', ')', ':', ',', '?', ';'];

/// A punctuation-delimited span of text, the atomic unit over which syllable
/// counts are computed and matched. The raw text is trimmed and never empty.
#[derive(Debug, Clone)]
pub struct Clause {
    text: String,
    ending_punctuation: String,
    cached_syllables: OnceCell<Option<u32>>,
}

impl Clause {
    fn new(text: &str, ending_punctuation: String) -> Self {
        Self {
            text: text.to_string(),
            ending_punctuation,
            cached_syllables: OnceCell::new(),
        }
    }

    /// Trimmed clause text without its terminator.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The punctuation mark that closed this clause; empty for a paragraph
    /// tail with no trailing punctuation.
    pub fn ending_punctuation(&self) -> &str {
        &self.ending_punctuation
    }

    /// Clause text with its terminating punctuation reattached.
    pub fn full_text(&self) -> String {
        format!("{}{}", self.text, self.ending_punctuation)
    }

    /// Total syllables across this clause's words, or `None` if any word is
    /// unknown. Computed once and cached; the text never mutates after
    /// construction, so the cache needs no invalidation.
    pub fn syllables(&self, counter: &SyllableCounter) -> Option<u32> {
        *self
            .cached_syllables
            .get_or_init(|| counter.clause_syllables(&self.text))
    }
}

/// Split a paragraph into clauses with a single left-to-right pass.
///
/// Each punctuation mark closes the pending span; spans that trim to empty
/// are dropped, but the cursor advances past the mark regardless, so
/// consecutive marks produce no intermediate clause. A non-empty tail after
/// the last mark becomes a final clause with no terminator.
pub fn split_into_clauses(paragraph: &str) -> Vec<Clause> {
    let mut clauses = Vec::new();
    let mut clause_start = 0;

    for (i, ch) in paragraph.char_indices() {
        if CLAUSE_PUNCTUATION.contains(&ch) {
            let span = paragraph[clause_start..i].trim();
            if !span.is_empty() {
                clauses.push(Clause::new(span, ch.to_string()));
            }
            clause_start = i + ch.len_utf8();
        }
    }

    let tail = paragraph[clause_start..].trim();
    if !tail.is_empty() {
        clauses.push(Clause::new(tail, String::new()));
    }

    debug!("Split paragraph into {} clauses", clauses.len());
    clauses
}
