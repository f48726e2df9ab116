use crate::game::{Accepted, GameInterface, RejectionReason, UserAction};
use clap::Parser;
use std::io::BufRead;

/// Word Scramble CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited root-word bank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Path to a newline-delimited dictionary file
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum GuessInput {
    Valid(String),
    Invalid,
    Exit,
    NewGame,
}

pub fn display_session_start(root_word: &str, bank_size: usize) {
    println!("\nYour root word is: {root_word}");
    println!("Spell as many words as you can from its letters.");
    println!("1 point for each word, 1 point per letter. ({bank_size} root words loaded.)");
}

pub fn read_guess<R: BufRead>(reader: &mut R) -> GuessInput {
    println!("\nEnter a word (or 'exit' to quit, or 'next' to start a new game):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        // end of input means the player is done
        Ok(0) | Err(_) => return GuessInput::Exit,
        Ok(_) => {}
    }
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "exit" => GuessInput::Exit,
        "next" => GuessInput::NewGame,
        "" => GuessInput::Invalid,
        _ => GuessInput::Valid(input),
    }
}

pub fn display_accepted(accepted: &Accepted, score: u32, used_words: &[String]) {
    println!(
        "'{}' accepted for {} points. Score: {score}",
        accepted.word, accepted.score_delta
    );
    println!("Words used so far ({}):", used_words.len());
    for word in used_words {
        println!("  {word}");
    }
}

pub fn display_rejection(reason: &RejectionReason) {
    println!("{}: {reason}.", reason.title());
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the GameInterface trait, wrapping any BufRead
/// so tests can drive it with canned input.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_session_start(&mut self, root_word: &str, bank_size: usize) {
        display_session_start(root_word, bank_size);
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        match read_guess(&mut self.reader) {
            GuessInput::Valid(guess) => Some(UserAction::Guess(guess)),
            GuessInput::Exit => Some(UserAction::Exit),
            GuessInput::NewGame => Some(UserAction::NewGame),
            GuessInput::Invalid => None,
        }
    }

    fn display_accepted(&mut self, accepted: &Accepted, score: u32, used_words: &[String]) {
        display_accepted(accepted, score, used_words);
    }

    fn display_rejection(&mut self, reason: &RejectionReason) {
        display_rejection(reason);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
