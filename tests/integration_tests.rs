// Integration tests for the word-scramble application
// These tests verify that all modules work together correctly

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;
use word_scramble::cli::CliInterface;
use word_scramble::game::FALLBACK_ROOT;
use word_scramble::wordbank::EMBEDDED_WORDBANK;
use word_scramble::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn bank(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| (*s).to_string()).collect()
}

fn dictionary(words: &[&str]) -> WordListDictionary {
    WordListDictionary::from_lines(&words.join("\n"))
}

#[test]
fn test_full_game_accumulates_score() {
    // Single-word bank makes the drawn root deterministic
    let word_list = bank(&["silkworm"]);
    let mut session = GameSession::new(dictionary(&["silk", "worm"]));
    let mut interface = CliInterface::new(Cursor::new("silk\nworm\nexit\n"));

    game_loop(&mut session, &word_list, &mut interface, &mut rng());

    assert_eq!(session.root_word(), "silkworm");
    // silk: 4 letters at rank 1, worm: 4 letters at rank 2
    assert_eq!(session.score(), 11);
    assert_eq!(session.used_words(), ["worm", "silk"]);
}

#[test]
fn test_rejected_guesses_leave_session_untouched() {
    let word_list = bank(&["silkworm"]);
    let mut session = GameSession::new(dictionary(&["silk", "mill"]));
    // root word itself, unformable letters, insufficient multiplicity, too short
    let mut interface = CliInterface::new(Cursor::new("silkworm\nzzzz\nmill\nilk\nexit\n"));

    game_loop(&mut session, &word_list, &mut interface, &mut rng());

    assert_eq!(session.score(), 0);
    assert!(session.used_words().is_empty());
}

#[test]
fn test_duplicate_word_only_counts_once() {
    let word_list = bank(&["silkworm"]);
    let mut session = GameSession::new(dictionary(&["silk"]));
    let mut interface = CliInterface::new(Cursor::new("silk\nsilk\nexit\n"));

    game_loop(&mut session, &word_list, &mut interface, &mut rng());

    assert_eq!(session.score(), 5);
    assert_eq!(session.used_words().len(), 1);
}

#[test]
fn test_new_game_resets_score_and_used_words() {
    let word_list = bank(&["silkworm"]);
    let mut session = GameSession::new(dictionary(&["silk"]));
    let mut interface = CliInterface::new(Cursor::new("silk\nnext\nexit\n"));

    game_loop(&mut session, &word_list, &mut interface, &mut rng());

    assert_eq!(session.root_word(), "silkworm");
    assert_eq!(session.score(), 0);
    assert!(session.used_words().is_empty());
}

#[test]
fn test_word_accepted_again_after_new_game() {
    let word_list = bank(&["silkworm"]);
    let mut session = GameSession::new(dictionary(&["silk", "worm"]));
    let mut interface = CliInterface::new(Cursor::new("silk\nnext\nworm\nexit\n"));

    game_loop(&mut session, &word_list, &mut interface, &mut rng());

    // only the second game's word survives the reset
    assert_eq!(session.score(), 5);
    assert_eq!(session.used_words(), ["worm"]);
}

#[test]
fn test_end_of_input_ends_the_game() {
    let word_list = bank(&["silkworm"]);
    let mut session = GameSession::new(dictionary(&["silk"]));
    // no explicit exit command
    let mut interface = CliInterface::new(Cursor::new("silk\n"));

    game_loop(&mut session, &word_list, &mut interface, &mut rng());

    assert_eq!(session.score(), 5);
}

#[test]
fn test_blank_lines_reprompt_without_state_change() {
    let word_list = bank(&["silkworm"]);
    let mut session = GameSession::new(dictionary(&["silk"]));
    let mut interface = CliInterface::new(Cursor::new("\n   \nsilk\nexit\n"));

    game_loop(&mut session, &word_list, &mut interface, &mut rng());

    assert_eq!(session.score(), 5);
    assert_eq!(session.used_words(), ["silk"]);
}

#[test]
fn test_case_and_whitespace_normalized_end_to_end() {
    let word_list = bank(&["silkworm"]);
    let mut session = GameSession::new(dictionary(&["silk"]));
    let mut interface = CliInterface::new(Cursor::new("  SILK  \nexit\n"));

    game_loop(&mut session, &word_list, &mut interface, &mut rng());

    assert_eq!(session.used_words(), ["silk"]);
}

#[test]
fn test_empty_bank_falls_back_to_default_root() {
    let word_list: Vec<String> = Vec::new();
    let mut session = GameSession::new(dictionary(&["silk"]));
    let mut interface = CliInterface::new(Cursor::new("exit\n"));

    game_loop(&mut session, &word_list, &mut interface, &mut rng());

    assert_eq!(session.root_word(), FALLBACK_ROOT);
}

#[test]
fn test_custom_wordbank_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let wordbank_path = std::env::temp_dir().join("test_scramble_wordbank.txt");
    {
        let mut file = File::create(&wordbank_path).unwrap();
        writeln!(file, "Silkworm").unwrap();
        writeln!(file, "cat").unwrap();
        writeln!(file, "note-book").unwrap();
    }

    let word_list = load_wordbank_from_file(&wordbank_path).unwrap();
    // short and non-alphabetic entries are filtered, the rest lowercased
    assert_eq!(word_list, ["silkworm"]);

    let mut session = GameSession::new(dictionary(&["silk"]));
    let mut interface = CliInterface::new(Cursor::new("silk\nexit\n"));
    game_loop(&mut session, &word_list, &mut interface, &mut rng());

    assert_eq!(session.root_word(), "silkworm");
    assert_eq!(session.score(), 5);

    std::fs::remove_file(&wordbank_path).unwrap();
}

#[test]
fn test_embedded_resources_are_playable_together() {
    let word_list = load_wordbank_from_str(EMBEDDED_WORDBANK);
    assert!(word_list.contains(&"silkworm".to_string()));

    let mut session = GameSession::new(WordListDictionary::embedded());
    session.start(&bank(&["silkworm"]), &mut rng());

    let accepted = session.submit("silk").unwrap();
    assert_eq!(accepted.score_delta, 5);
    assert!(session.submit("worm").is_ok());
}

#[test]
fn test_root_word_varies_with_the_bank() {
    let word_list = bank(&["notebook", "keyboard", "mountain", "computer"]);
    let mut session = GameSession::new(dictionary(&[]));
    let mut interface = CliInterface::new(Cursor::new("exit\n"));

    game_loop(&mut session, &word_list, &mut interface, &mut rng());

    assert!(word_list.contains(&session.root_word().to_string()));
}

#[test]
fn test_scoring_sequence_matches_rank_formula() {
    let mut session = GameSession::new(dictionary(&["worms", "silk", "milk"]));
    session.start(&bank(&["silkworm"]), &mut rng());

    assert_eq!(session.submit("worms").unwrap().score_delta, 6); // 5 + 1
    assert_eq!(session.submit("silk").unwrap().score_delta, 6); // 4 + 2
    assert_eq!(session.submit("milk").unwrap().score_delta, 7); // 4 + 3
    assert_eq!(session.score(), 19);
}
