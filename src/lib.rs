pub mod clause;
pub mod finder;
pub mod pronounce;
pub mod syllable;

// Re-export main types for convenient access
pub use clause::{split_into_clauses, Clause, CLAUSE_PUNCTUATION};
pub use finder::{FinderConfig, HaikuFinder};
pub use pronounce::{CmuDict, PronunciationSource, Transcription};
pub use syllable::SyllableCounter;
