use crate::dictionary::Dictionary;
use crate::rules::{is_formable, normalize, word_score};
use log::{debug, info, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Root word used when the word bank has no candidates.
pub const FALLBACK_ROOT: &str = "silkworm";

/// A guess that passed every check, with the points it earned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub word: String,
    pub score_delta: u32,
}

/// Why a guess was not accepted. Checks run in declaration order and
/// the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    TooShort,
    SameAsRoot,
    AlreadyUsed,
    NotPossible,
    NotRecognized,
}

impl RejectionReason {
    /// Short heading for the rejection, suitable as an alert title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Word too short",
            Self::SameAsRoot => "Word same as root word",
            Self::AlreadyUsed => "Word used already",
            Self::NotPossible => "Word not possible",
            Self::NotRecognized => "Word not recognized",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "word must be greater than 3 letters"),
            Self::SameAsRoot => write!(f, "word can't be the same as the root word"),
            Self::AlreadyUsed => write!(f, "be more original"),
            Self::NotPossible => write!(f, "that word can't be spelled from the root word"),
            Self::NotRecognized => write!(f, "you can't just make them up, you know"),
        }
    }
}

impl std::error::Error for RejectionReason {}

/// One game of word scramble: a root word, the words accepted so far
/// (newest first) and the running score. Owned by a single caller;
/// every operation is synchronous.
pub struct GameSession<D> {
    dictionary: D,
    root_word: String,
    used_words: Vec<String>,
    score: u32,
}

impl<D: Dictionary> GameSession<D> {
    pub fn new(dictionary: D) -> Self {
        Self {
            dictionary,
            root_word: FALLBACK_ROOT.to_string(),
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// Reset score and used words and draw a fresh root uniformly at
    /// random from `word_list`. An empty list falls back to
    /// [`FALLBACK_ROOT`] rather than aborting.
    pub fn start<R: Rng + ?Sized>(&mut self, word_list: &[String], rng: &mut R) {
        self.score = 0;
        self.used_words.clear();
        self.root_word = match word_list.choose(rng) {
            Some(word) => word.clone(),
            None => {
                warn!("word bank is empty, falling back to '{FALLBACK_ROOT}'");
                FALLBACK_ROOT.to_string()
            }
        };
        info!("session started with root word '{}'", self.root_word);
    }

    /// Validate a raw guess. A rejection leaves score and used words
    /// untouched; an accepted word is stored newest-first and its
    /// points added to the score.
    pub fn submit(&mut self, raw_guess: &str) -> Result<Accepted, RejectionReason> {
        let candidate = normalize(raw_guess);

        if candidate.chars().count() <= 3 {
            return Err(RejectionReason::TooShort);
        }
        if candidate == self.root_word {
            return Err(RejectionReason::SameAsRoot);
        }
        if self.used_words.contains(&candidate) {
            return Err(RejectionReason::AlreadyUsed);
        }
        if !is_formable(&candidate, &self.root_word) {
            return Err(RejectionReason::NotPossible);
        }
        if !self.dictionary.is_recognized(&candidate) {
            debug!("dictionary does not recognize '{candidate}'");
            return Err(RejectionReason::NotRecognized);
        }

        let score_delta = word_score(candidate.chars().count(), self.used_words.len() + 1);
        self.used_words.insert(0, candidate.clone());
        self.score += score_delta;
        debug!("accepted '{candidate}' for {score_delta} points");
        Ok(Accepted {
            word: candidate,
            score_delta,
        })
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, newest first.
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }
}

/// What the player asked for on one input line.
pub enum UserAction {
    Guess(String),
    NewGame,
    Exit,
}

/// Surface the host UI implements to drive a game. The CLI implements
/// this over stdin/stdout; tests implement it over canned input.
pub trait GameInterface {
    fn display_session_start(&mut self, root_word: &str, bank_size: usize);

    /// Read the next action. `None` means the input line was unusable
    /// and the player should be prompted again.
    fn read_guess(&mut self) -> Option<UserAction>;

    fn display_accepted(&mut self, accepted: &Accepted, score: u32, used_words: &[String]);

    fn display_rejection(&mut self, reason: &RejectionReason);

    fn display_exit_message(&mut self);
}

/// Drive a session until the player exits: start a game, then feed
/// guesses through [`GameSession::submit`], restarting on request.
pub fn game_loop<D, I, R>(
    session: &mut GameSession<D>,
    word_list: &[String],
    interface: &mut I,
    rng: &mut R,
) where
    D: Dictionary,
    I: GameInterface,
    R: Rng + ?Sized,
{
    session.start(word_list, rng);
    interface.display_session_start(session.root_word(), word_list.len());

    loop {
        let Some(action) = interface.read_guess() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                session.start(word_list, rng);
                interface.display_session_start(session.root_word(), word_list.len());
            }
            UserAction::Guess(guess) => match session.submit(&guess) {
                Ok(accepted) => {
                    interface.display_accepted(&accepted, session.score(), session.used_words());
                }
                Err(reason) => interface.display_rejection(&reason),
            },
        }
    }
}
