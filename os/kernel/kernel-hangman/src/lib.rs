//! # Hangman
//!
//! A hangman round played directly on the text console. The player types one
//! letter per line; every letter that does not occur in the secret word adds a
//! part to the gallows figure. Six misses lose the game, uncovering every
//! letter wins it.
//!
//! ```text
//!            ┌──────────── miss, errors < 6 ───────────┐
//!            │  ┌───────── hit, word incomplete ─────┐ │
//!            ▼  ▼                                    │ │
//!         ┌─────────┐  word complete   ┌─────┐       │ │
//! start ─►│ Playing │─────────────────►│ Won │       │ │
//!         └─────────┘                  └─────┘       │ │
//!            │  │ │  errors == 6       ┌──────┐      │ │
//!            │  │ └───────────────────►│ Lost │      │ │
//!            │  │                      └──────┘      │ │
//!            │  └────────────────────────────────────┘ │
//!            └─────────────────────────────────────────┘
//! ```
//!
//! [`GameState`] holds the rules and nothing else. [`GameSession`] borrows the
//! [`VgaConsole`](kernel_vga::VgaConsole) and [`Keyboard`](kernel_ps2::Keyboard),
//! draws the board and feeds key presses into the state.
//!
//! Any mapped key counts as a guess, digits and punctuation included. They are
//! recorded like letters and charged as a miss.

#![cfg_attr(not(any(test, doctest)), no_std)]

mod error;
pub mod gallows;
mod letters;
mod session;
mod state;

pub use error::GameError;
pub use letters::{CapacityExceeded, LetterBuf};
pub use session::GameSession;
pub use state::{
    ALPHABET_LEN, GameState, GuessOutcome, MAX_ERRORS, MAX_WORD_LEN, PLACEHOLDER, Phase,
    normalize,
};

/// The word compiled into the kernel.
pub const DEFAULT_SECRET_WORD: &str = "KERNEL";
