// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod game;
pub mod rules;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use dictionary::{Dictionary, WordListDictionary};
pub use game::{Accepted, GameSession, RejectionReason, game_loop};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};
