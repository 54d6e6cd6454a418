use crate::{CapacityExceeded, Phase};

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the secret word is empty")]
    EmptySecret,
    #[error("the secret word has {len} letters, at most {max} are supported")]
    SecretTooLong { len: usize, max: usize },
    #[error("the secret word contains {0:?}; only A-Z are allowed")]
    InvalidSecretLetter(char),
    #[error("the game is over ({0:?}), no more guesses are accepted")]
    GameOver(Phase),
    #[error(transparent)]
    Capacity(#[from] CapacityExceeded),
}
