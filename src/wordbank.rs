use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

// Roots of 3 letters or fewer admit no legal guess.
fn is_playable_root(word: &str) -> bool {
    word.len() > 3 && word.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| is_playable_root(word))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(&path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if is_playable_root(&word) {
            words.push(word);
        }
    }
    debug!(
        "loaded {} root words from {}",
        words.len(),
        path.as_ref().display()
    );
    Ok(words)
}

/// Per-user override for the embedded bank. Consulted at startup when
/// no bank path is given on the command line.
#[must_use]
pub fn user_wordbank_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("word-scramble").join("wordbank.txt"))
}
