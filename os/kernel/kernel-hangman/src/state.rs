use crate::{GameError, LetterBuf};
use log::info;

/// Misses that complete the gallows figure and lose the game.
pub const MAX_ERRORS: u8 = 6;

/// Longest supported secret word.
pub const MAX_WORD_LEN: usize = 32;

/// Capacity of the tried-letters record.
pub const ALPHABET_LEN: usize = 26;

/// Shown in place of a letter that has not been guessed yet.
pub const PLACEHOLDER: u8 = b'_';

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// What a single guess did to the game.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter was guessed before; nothing changed.
    AlreadyTried,
    /// The letter occurs in the word and was uncovered everywhere.
    Hit,
    /// The letter does not occur in the word; one more error.
    Miss,
}

/// Folds ASCII lowercase letters to uppercase. Every other byte passes through.
#[inline]
#[must_use]
pub const fn normalize(byte: u8) -> u8 {
    byte.to_ascii_uppercase()
}

/// Rules and progress of one hangman round.
#[derive(Debug, Clone)]
pub struct GameState {
    secret: LetterBuf<MAX_WORD_LEN>,
    discovered: LetterBuf<MAX_WORD_LEN>,
    tried: LetterBuf<ALPHABET_LEN>,
    errors: u8,
}

impl GameState {
    /// Starts a round for `secret`, which must be 1 to [`MAX_WORD_LEN`]
    /// letters `A`–`Z`.
    ///
    /// # Errors
    /// [`GameError::EmptySecret`], [`GameError::SecretTooLong`] or
    /// [`GameError::InvalidSecretLetter`] if `secret` breaks these rules.
    pub fn new(secret: &str) -> Result<Self, GameError> {
        if secret.is_empty() {
            return Err(GameError::EmptySecret);
        }
        if secret.len() > MAX_WORD_LEN {
            return Err(GameError::SecretTooLong {
                len: secret.len(),
                max: MAX_WORD_LEN,
            });
        }
        if let Some(c) = secret.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(GameError::InvalidSecretLetter(c));
        }

        Ok(Self {
            secret: LetterBuf::try_from_bytes(secret.as_bytes())?,
            discovered: LetterBuf::filled(secret.len(), PLACEHOLDER)?,
            tried: LetterBuf::new(),
            errors: 0,
        })
    }

    #[must_use]
    pub fn secret(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    /// The word as far as it is uncovered, [`PLACEHOLDER`] for the rest.
    #[must_use]
    pub fn discovered(&self) -> &[u8] {
        self.discovered.as_bytes()
    }

    /// Every distinct guess in the order it was made.
    #[must_use]
    pub fn tried(&self) -> &[u8] {
        self.tried.as_bytes()
    }

    #[must_use]
    pub const fn errors(&self) -> u8 {
        self.errors
    }

    /// A completed word wins even if the same guess also used up the last error.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.discovered == self.secret {
            Phase::Won
        } else if self.errors >= MAX_ERRORS {
            Phase::Lost
        } else {
            Phase::Playing
        }
    }

    /// Applies one guess.
    ///
    /// `byte` is [normalized](normalize) first. A repeated guess changes
    /// nothing. A new one is recorded, uncovered at every matching position, and
    /// charged as an error if it matched none.
    ///
    /// # Errors
    /// * [`GameError::GameOver`] once the round is won or lost.
    /// * [`GameError::Capacity`] if the tried-letters record is full.
    pub fn guess(&mut self, byte: u8) -> Result<GuessOutcome, GameError> {
        let phase = self.phase();
        if phase.is_terminal() {
            return Err(GameError::GameOver(phase));
        }

        let letter = normalize(byte);
        if self.tried.contains(letter) {
            info!("Guess {:?} was already tried", char::from(letter));
            return Ok(GuessOutcome::AlreadyTried);
        }
        self.tried.push(letter)?;

        let mut matched = false;
        for (slot, &expected) in self
            .discovered
            .as_mut_bytes()
            .iter_mut()
            .zip(self.secret.as_bytes())
        {
            if expected == letter {
                *slot = letter;
                matched = true;
            }
        }

        let outcome = if matched {
            GuessOutcome::Hit
        } else {
            self.errors += 1;
            GuessOutcome::Miss
        };
        info!(
            "Guess {:?}: {outcome:?}, {}/{MAX_ERRORS} errors",
            char::from(letter),
            self.errors
        );
        Ok(outcome)
    }
}
