use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use haikuscan::{CmuDict, FinderConfig, HaikuFinder};

#[derive(Parser, Debug)]
#[command(name = "haikuscan")]
#[command(about = "Finds accidental 5-7-5 haiku hiding in free-form text")]
#[command(version)]
struct Args {
    /// Text file to scan; reads stdin when omitted
    input: Option<PathBuf>,

    /// Path to a CMU pronouncing dictionary file
    #[arg(long)]
    dict: PathBuf,

    /// JSON file mapping lowercase words to syllable counts, consulted when
    /// the pronunciation dictionary has no entry
    #[arg(long)]
    custom_dictionary: Option<PathBuf>,

    /// Stats output file path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[derive(Serialize)]
struct RunStats {
    paragraphs: usize,
    haiku_found: usize,
    unknown_words: usize,
}

fn main() -> Result<()> {
    // WHY: structured JSON logging enables observability and debugging in production
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    // WHY: validate the dictionary path early to fail fast with a clear error
    if !args.dict.exists() {
        anyhow::bail!(
            "Pronunciation dictionary does not exist: {}",
            args.dict.display()
        );
    }

    let dictionary = CmuDict::load(&args.dict)?;

    let mut config = FinderConfig::default();
    if let Some(path) = &args.custom_dictionary {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read custom dictionary: {}", path.display()))?;
        let custom: HashMap<String, u32> = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid custom dictionary JSON: {}", path.display()))?;
        info!("Loaded custom dictionary: {} words", custom.len());
        config.custom_dictionary = Some(custom);
    }

    // Collect unresolved words through the callback hook for the summary
    let unknown_words = Rc::new(RefCell::new(HashSet::new()));
    let captured = Rc::clone(&unknown_words);
    config.unknown_word_callback = Some(Box::new(move |word: &str| {
        captured.borrow_mut().insert(word.to_string());
    }));

    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let finder = HaikuFinder::with_config(dictionary, config);
    let haiku = finder.find_haiku(&text);

    for found in &haiku {
        println!("{found}");
    }

    let stats = RunStats {
        paragraphs: text.split('\n').count(),
        haiku_found: haiku.len(),
        unknown_words: unknown_words.borrow().len(),
    };

    if let Some(path) = &args.stats_out {
        let json = serde_json::to_string_pretty(&stats).context("Failed to serialize stats")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write stats: {}", path.display()))?;
        info!("Wrote run stats to {}", path.display());
    }

    println!("haikuscan v{} - scan complete", env!("CARGO_PKG_VERSION"));
    println!("  Paragraphs scanned: {}", stats.paragraphs);
    println!("  Haiku found: {}", stats.haiku_found);
    println!("  Unresolved words: {}", stats.unknown_words);

    Ok(())
}
