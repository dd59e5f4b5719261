use std::collections::HashMap;

use tracing::debug;

use crate::pronounce::PronunciationSource;

/// Callback invoked with the original text of a word no source could resolve.
/// Observability only; the word still counts as unknown.
pub type UnknownWordCallback<'a> = dyn Fn(&str) + 'a;

/// Counts syllables for words and clauses against a pronunciation source,
/// with an optional override dictionary and unknown-word callback.
///
/// An unknown word is `None`, distinct from a successful count of zero.
pub struct SyllableCounter<'a> {
    source: &'a dyn PronunciationSource,
    custom_dictionary: Option<&'a HashMap<String, u32>>,
    unknown_word_callback: Option<&'a UnknownWordCallback<'a>>,
}

impl<'a> SyllableCounter<'a> {
    pub fn new(
        source: &'a dyn PronunciationSource,
        custom_dictionary: Option<&'a HashMap<String, u32>>,
        unknown_word_callback: Option<&'a UnknownWordCallback<'a>>,
    ) -> Self {
        Self {
            source,
            custom_dictionary,
            unknown_word_callback,
        }
    }

    /// Syllable count for a single word, or `None` when no source resolves it.
    ///
    /// Resolution order: hyphenated words sum their segments (pronunciation
    /// source only — segments never consult the override dictionary or fire
    /// the callback); otherwise the source is queried first, then the override
    /// dictionary, then the callback fires and the word stays unknown.
    pub fn count(&self, word: &str) -> Option<u32> {
        debug_assert!(!word.is_empty(), "empty word reached the counter");

        if word.contains('-') {
            let mut total = 0;
            for segment in word.split('-').filter(|s| !s.is_empty()) {
                total += self.source_count(segment)?;
            }
            return Some(total);
        }

        if let Some(count) = self.source_count(word) {
            return Some(count);
        }

        if let Some(dictionary) = self.custom_dictionary {
            if let Some(&count) = dictionary.get(&word.to_lowercase()) {
                return Some(count);
            }
        }

        debug!("No syllable count for word: {word}");
        if let Some(callback) = self.unknown_word_callback {
            callback(word);
        }
        None
    }

    /// Total syllables across a clause's whitespace-separated words.
    /// One unknown word makes the whole clause unknown, never a partial sum.
    pub fn clause_syllables(&self, text: &str) -> Option<u32> {
        let mut total = 0;
        for word in text.split_whitespace() {
            total += self.count(word)?;
        }
        Some(total)
    }

    /// Vowel-marker count of the word's first transcription, if the
    /// pronunciation source has an entry. First transcription always wins.
    fn source_count(&self, word: &str) -> Option<u32> {
        let transcriptions = self.source.lookup(&word.to_lowercase())?;
        let first = transcriptions.first()?;
        Some(first.iter().filter(|phone| is_vowel_sound(phone)).count() as u32)
    }
}

/// A phoneme symbol is a vowel sound if it ends in a stress digit.
fn is_vowel_sound(phone: &str) -> bool {
    phone.ends_with(|c: char| c.is_ascii_digit())
}
