// End-to-end coverage of the public HaikuFinder API against an in-memory
// pronunciation source with real ARPAbet transcriptions.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use haikuscan::{FinderConfig, HaikuFinder, SyllableCounter, Transcription};

const HAIKU: &str = "Greedy yellow birds. Sing the muddy riverbank. On a window sill.";
const HAIKU_WITHOUT_ENDING_PUNCTUATION: &str =
    "Greedy yellow birds. Sing the muddy riverbank. On a window sill";
const HAIKU_WITH_NONSTANDARD_SPACING: &str =
    "Greedy yellow birds.  Sing the muddy riverbank.  On a window sill.";
const SEVEN_SYLLABLE_SENTENCE: &str = "This is a random sentence. ";
const FIVE_SYLLABLE_SENTENCE: &str = "Refrigerator.";
const UNKNOWN_WORD: &str = "thisIsNotAWord. ";

fn test_dictionary() -> HashMap<String, Vec<Transcription>> {
    let mut dict: HashMap<String, Vec<Transcription>> = HashMap::new();
    for (word, phones) in [
        ("greedy", "G R IY1 D IY0"),
        ("yellow", "Y EH1 L OW0"),
        ("birds", "B ER1 D Z"),
        ("sing", "S IH1 NG"),
        ("the", "DH AH0"),
        ("muddy", "M AH1 D IY0"),
        ("riverbank", "R IH1 V ER0 B AE2 NG K"),
        ("on", "AA1 N"),
        ("a", "AH0"),
        ("window", "W IH1 N D OW2"),
        ("sill", "S IH1 L"),
        ("this", "DH IH1 S"),
        ("is", "IH1 Z"),
        ("random", "R AE1 N D AH0 M"),
        ("sentence", "S EH1 N T AH0 N S"),
        ("refrigerator", "R AH0 F R IH1 JH ER0 EY2 T ER0"),
        ("boom", "B UW1 M"),
        ("box", "B AA1 K S"),
    ] {
        dict.entry(word.to_string())
            .or_default()
            .push(phones.split_whitespace().map(str::to_string).collect());
    }
    dict
}

fn finder() -> HaikuFinder<HashMap<String, Vec<Transcription>>> {
    HaikuFinder::new(test_dictionary())
}

#[test]
fn test_finds_haiku() {
    assert_eq!(finder().find_haiku(HAIKU), vec![HAIKU.to_string()]);
}

#[test]
fn test_each_paragraph_scanned_independently() {
    let two_paragraphs = format!("{HAIKU}\n{HAIKU}");
    assert_eq!(
        finder().find_haiku(&two_paragraphs),
        vec![HAIKU.to_string(), HAIKU.to_string()]
    );
}

#[test]
fn test_no_haiku() {
    let text = format!("{SEVEN_SYLLABLE_SENTENCE}{UNKNOWN_WORD}");
    assert!(finder().find_haiku(&text).is_empty());
}

#[test]
fn test_finds_three_haikus_with_overlap() {
    let text = format!(
        "{HAIKU} {SEVEN_SYLLABLE_SENTENCE}{FIVE_SYLLABLE_SENTENCE} {UNKNOWN_WORD}{HAIKU}"
    );
    let expected_middle =
        "On a window sill. This is a random sentence. Refrigerator.".to_string();
    assert_eq!(
        finder().find_haiku(&text),
        vec![HAIKU.to_string(), expected_middle, HAIKU.to_string()]
    );
}

#[test]
fn test_finds_haiku_without_ending_punctuation() {
    assert_eq!(
        finder().find_haiku(HAIKU_WITHOUT_ENDING_PUNCTUATION),
        vec![HAIKU_WITHOUT_ENDING_PUNCTUATION.to_string()]
    );
}

#[test]
fn test_nonstandard_spacing_is_normalized_in_match() {
    // Clause trimming plus single-space joining canonicalizes the spacing
    assert_eq!(
        finder().find_haiku(HAIKU_WITH_NONSTANDARD_SPACING),
        vec![HAIKU.to_string()]
    );
}

#[test]
fn test_unknown_word_is_ignored_at_beginning() {
    let text = format!("{UNKNOWN_WORD}{HAIKU}");
    assert_eq!(finder().find_haiku(&text), vec![HAIKU.to_string()]);
}

#[test]
fn test_unknown_word_is_ignored_at_end() {
    let text = format!("{HAIKU} {UNKNOWN_WORD}");
    assert_eq!(finder().find_haiku(&text), vec![HAIKU.to_string()]);
}

#[test]
fn test_unknown_word_triggers_callback() {
    let captured = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&captured);
    let config = FinderConfig {
        custom_dictionary: None,
        unknown_word_callback: Some(Box::new(move |word: &str| {
            sink.borrow_mut().push(word.to_string());
        })),
    };

    let finder = HaikuFinder::with_config(test_dictionary(), config);
    assert!(finder.find_haiku("unknownword").is_empty());
    assert_eq!(*captured.borrow(), vec!["unknownword".to_string()]);
}

#[test]
fn test_custom_dictionary() {
    let source = test_dictionary();
    let custom: HashMap<String, u32> = [("customword".to_string(), 6)].into_iter().collect();
    let counter = SyllableCounter::new(&source, Some(&custom), None);
    assert_eq!(counter.count("customword"), Some(6));
}

#[test]
fn test_custom_dictionary_completes_a_haiku() {
    let custom: HashMap<String, u32> = [("vrrm".to_string(), 1)].into_iter().collect();
    let config = FinderConfig {
        custom_dictionary: Some(custom),
        unknown_word_callback: None,
    };
    let finder = HaikuFinder::with_config(test_dictionary(), config);

    let text = "Greedy yellow birds. Sing the muddy riverbank. On a vrrm window sill.";
    assert!(finder.find_haiku(text).is_empty());

    let text = "Greedy yellow birds. Sing the muddy riverbank. On a window vrrm.";
    assert_eq!(finder.find_haiku(text), vec![text.to_string()]);
}

#[test]
fn test_hyphenation() {
    let source = test_dictionary();
    let counter = SyllableCounter::new(&source, None, None);
    assert_eq!(counter.count("boom-box"), Some(2));
    assert_eq!(
        counter.count("boom-box"),
        counter.count("boom").and_then(|b| counter.count("box").map(|x| b + x))
    );
}

#[test]
fn test_empty_input() {
    assert!(finder().find_haiku("").is_empty());
    assert!(finder().find_haiku("\n\n\n").is_empty());
}
