use std::collections::HashMap;

use tracing::{debug, info};

use crate::clause::{split_into_clauses, Clause};
use crate::pronounce::PronunciationSource;
use crate::syllable::SyllableCounter;

/// The clause syllable pattern that makes a haiku.
const HAIKU_PATTERN: [Option<u32>; 3] = [Some(5), Some(7), Some(5)];

/// Caller-supplied options for a finder.
#[derive(Default)]
pub struct FinderConfig {
    /// Fallback syllable counts for words the pronunciation source lacks,
    /// keyed by lowercase word.
    pub custom_dictionary: Option<HashMap<String, u32>>,
    /// Invoked with the original text of each word no source could resolve.
    pub unknown_word_callback: Option<Box<dyn Fn(&str)>>,
}

/// Scans text for runs of three clauses whose syllable counts are 5-7-5.
pub struct HaikuFinder<S> {
    source: S,
    config: FinderConfig,
}

impl<S: PronunciationSource> HaikuFinder<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, FinderConfig::default())
    }

    pub fn with_config(source: S, config: FinderConfig) -> Self {
        Self { source, config }
    }

    /// Find every haiku in `text`, in paragraph order.
    ///
    /// Paragraphs are the line-break splits of the input, segmented into
    /// clauses and scanned independently; clause windows never span lines.
    /// Unresolved words never fail the call, they only exclude their clause
    /// from matching.
    pub fn find_haiku(&self, text: &str) -> Vec<String> {
        let counter = SyllableCounter::new(
            &self.source,
            self.config.custom_dictionary.as_ref(),
            self.config.unknown_word_callback.as_deref(),
        );

        let mut found = Vec::new();
        for paragraph in text.split('\n') {
            let clauses = split_into_clauses(paragraph);
            find_in_paragraph(&clauses, &counter, &mut found);
        }

        info!("Found {} haiku", found.len());
        found
    }
}

/// Slide a window of 3 over the paragraph's clause syllable counts and emit
/// the space-joined full text of every 5-7-5 window. A match does not consume
/// its clauses; overlapping matches are all reported.
fn find_in_paragraph(clauses: &[Clause], counter: &SyllableCounter, found: &mut Vec<String>) {
    let counts: Vec<Option<u32>> = clauses.iter().map(|c| c.syllables(counter)).collect();
    debug!(?counts, "Scanning paragraph clauses");

    for (i, window) in counts.windows(3).enumerate() {
        if window == HAIKU_PATTERN {
            let haiku = clauses[i..i + 3]
                .iter()
                .map(Clause::full_text)
                .collect::<Vec<_>>()
                .join(" ");
            debug!("Matched haiku at clause {i}: {haiku}");
            found.push(haiku);
        }
    }
}
