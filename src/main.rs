use anyhow::{Context, Result};
use log::info;
use std::io;
use word_scramble::cli::{CliInterface, parse_cli};
use word_scramble::dictionary::WordListDictionary;
use word_scramble::game::{GameSession, game_loop};
use word_scramble::wordbank::{
    EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str, user_wordbank_path,
};

fn main() -> Result<()> {
    env_logger::init();
    let cli = parse_cli();

    let word_list = match &cli.wordbank_path {
        Some(path) => load_wordbank_from_file(path)
            .with_context(|| format!("failed to load word bank from '{path}'"))?,
        None => match user_wordbank_path().filter(|path| path.exists()) {
            Some(path) => load_wordbank_from_file(&path).with_context(|| {
                format!("failed to load word bank from '{}'", path.display())
            })?,
            None => load_wordbank_from_str(EMBEDDED_WORDBANK),
        },
    };
    info!("loaded {} root words", word_list.len());

    let dictionary = match &cli.dictionary_path {
        Some(path) => WordListDictionary::from_file(path)
            .with_context(|| format!("failed to load dictionary from '{path}'"))?,
        None => WordListDictionary::embedded(),
    };

    let mut rng = rand::rng();
    let mut session = GameSession::new(dictionary);
    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock());
    game_loop(&mut session, &word_list, &mut interface, &mut rng);
    Ok(())
}
