use log::info;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

/// Boolean oracle deciding whether a candidate is a recognized word.
/// Any backend works: the bundled word list, a file the player
/// supplies, or something else entirely.
pub trait Dictionary {
    fn is_recognized(&self, word: &str) -> bool;
}

/// Dictionary backed by a set of lowercased words.
pub struct WordListDictionary {
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Build from newline-delimited text. Entries are trimmed and
    /// lowercased; blank or non-alphabetic lines are skipped.
    #[must_use]
    pub fn from_lines(data: &str) -> Self {
        let words = data
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
            .collect();
        Self { words }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut words = HashSet::new();
        for line in reader.lines() {
            let word = line?.trim().to_lowercase();
            if !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) {
                words.insert(word);
            }
        }
        Ok(Self { words })
    }

    #[must_use]
    pub fn embedded() -> Self {
        let dictionary = Self::from_lines(EMBEDDED_DICTIONARY);
        info!("loaded {} dictionary words", dictionary.len());
        dictionary
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_recognized(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
