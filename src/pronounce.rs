// WHY: Pronunciation lookup is an injected, read-only collaborator so the
// counting logic can be exercised with small in-memory dictionaries in tests

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// One phonetic transcription: an ordered sequence of phoneme symbols.
///
/// A symbol whose final character is an ASCII digit carries a stress marker,
/// which identifies it as a vowel sound and therefore one syllable.
pub type Transcription = Vec<String>;

/// Read-only source of phonetic transcriptions for lowercase words.
pub trait PronunciationSource {
    /// Transcriptions for `word`, or `None` if the word is absent.
    /// Callers are expected to pass the word already lowercased.
    fn lookup(&self, word: &str) -> Option<&[Transcription]>;
}

impl PronunciationSource for HashMap<String, Vec<Transcription>> {
    fn lookup(&self, word: &str) -> Option<&[Transcription]> {
        self.get(word).map(Vec::as_slice)
    }
}

/// The CMU pronouncing dictionary, parsed from its standard text format.
pub struct CmuDict {
    entries: HashMap<String, Vec<Transcription>>,
}

impl CmuDict {
    /// Load a dictionary file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!(
                "Failed to read pronunciation dictionary: {}",
                path.display()
            )
        })?;

        let dict = Self::parse(&contents);
        info!(
            "Loaded pronunciation dictionary: {} words from {}",
            dict.len(),
            path.display()
        );
        Ok(dict)
    }

    /// Parse cmudict-format text.
    ///
    /// Lines starting with `;;;` are file comments; `#` begins a trailing
    /// per-line comment. A head token like `word(2)` marks an alternate
    /// pronunciation, collected under the base word in file order so the
    /// primary transcription stays first.
    pub fn parse(contents: &str) -> Self {
        let mut entries: HashMap<String, Vec<Transcription>> = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }

            let line = line.split('#').next().unwrap_or_default();
            let mut fields = line.split_whitespace();
            let Some(head) = fields.next() else {
                continue;
            };

            let phones: Transcription = fields.map(str::to_string).collect();
            if phones.is_empty() {
                continue;
            }

            let word = strip_variant_marker(head).to_lowercase();
            entries.entry(word).or_default().push(phones);
        }

        Self { entries }
    }

    /// Number of distinct words in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PronunciationSource for CmuDict {
    fn lookup(&self, word: &str) -> Option<&[Transcription]> {
        self.entries.lookup(word)
    }
}

/// Strip the `(n)` alternate-pronunciation suffix from a cmudict head token.
fn strip_variant_marker(head: &str) -> &str {
    match head.find('(') {
        Some(open) if open > 0 && head.ends_with(')') => &head[..open],
        _ => head,
    }
}
