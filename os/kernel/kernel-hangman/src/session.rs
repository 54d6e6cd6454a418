use crate::{GameError, GameState, GuessOutcome, MAX_ERRORS, Phase, gallows};
use core::fmt::Write;
use kernel_ps2::{Keyboard, Ps2Port};
use kernel_vga::{TextBuffer, VgaConsole};
use log::{debug, info};

const BANNER_RULE: &str = "===================================\n";

/// One round of hangman on a console and keyboard.
///
/// The session borrows both devices for its whole lifetime and owns the
/// [`GameState`]. Every turn redraws the board below the previous output; the
/// console wipes itself once the text reaches the bottom row.
pub struct GameSession<'a, B, P> {
    console: &'a mut VgaConsole<B>,
    keyboard: &'a mut Keyboard<P>,
    state: GameState,
}

impl<'a, B: TextBuffer, P: Ps2Port> GameSession<'a, B, P> {
    /// Clears the screen and greets the player.
    ///
    /// # Errors
    /// Whatever [`GameState::new`] rejects about `secret`.
    pub fn new(
        console: &'a mut VgaConsole<B>,
        keyboard: &'a mut Keyboard<P>,
        secret: &str,
    ) -> Result<Self, GameError> {
        let state = GameState::new(secret)?;
        info!("Starting hangman with a {}-letter word", state.secret().len());

        console.clear();
        console.print("Welcome to Hangman, running straight on the kernel!\n\n");
        Ok(Self {
            console,
            keyboard,
            state,
        })
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays turns until the round is won or lost.
    ///
    /// # Errors
    /// See [`play_turn`](Self::play_turn).
    pub fn run(&mut self) -> Result<Phase, GameError> {
        loop {
            let phase = self.play_turn()?;
            if phase.is_terminal() {
                return Ok(phase);
            }
        }
    }

    /// Draws the board, waits for one guess and applies it.
    ///
    /// Returns the phase after the guess. On a transition to [`Phase::Won`] or
    /// [`Phase::Lost`] the closing screen is already drawn.
    ///
    /// # Errors
    /// [`GameError::GameOver`] when called after the round ended, and
    /// [`GameError::Capacity`] if the tried-letters record overflows.
    pub fn play_turn(&mut self) -> Result<Phase, GameError> {
        self.render_board();
        let letter = self.read_guess();

        match self.state.guess(letter)? {
            GuessOutcome::AlreadyTried => {
                self.console.print("\nYou already tried that letter!\n\n");
            }
            GuessOutcome::Hit => {
                self.console.print("\nNice! The letter is in the word.\n\n");
            }
            GuessOutcome::Miss => {
                self.console.print("\nToo bad! The letter is not in the word.\n\n");
            }
        }

        let phase = self.state.phase();
        match phase {
            Phase::Playing => {}
            Phase::Won => {
                info!("Word uncovered with {} errors", self.state.errors());
                self.render_victory();
            }
            Phase::Lost => {
                info!("Gallows complete, the round is lost");
                self.render_defeat();
            }
        }
        Ok(phase)
    }

    /// Gallows, uncovered word, tried letters, error count and the prompt.
    pub fn render_board(&mut self) {
        debug!(
            "Rendering board at row {} ({} errors)",
            self.console.cursor().y,
            self.state.errors()
        );
        gallows::draw(self.console, self.state.errors());

        self.console.print("Word: ");
        print_spaced(self.console, self.state.discovered());
        self.console.print("\nTried: ");
        print_spaced(self.console, self.state.tried());
        // Writing to the console cannot fail.
        let _ = writeln!(
            self.console,
            "\nErrors: {}/{MAX_ERRORS}",
            self.state.errors()
        );
        self.console.print("Type a letter and press Enter: ");
    }

    /// Waits for the first key of a line, skipping empty lines, then drops the
    /// rest of that line.
    fn read_guess(&mut self) -> u8 {
        let letter = loop {
            let c = self.keyboard.read_char(self.console);
            if c != b'\n' {
                break c;
            }
        };
        self.keyboard.read_line(self.console);
        letter
    }

    fn render_victory(&mut self) {
        self.console.clear();
        self.console.print(BANNER_RULE);
        self.console.print(" Congratulations! You won!\n");
        self.console.print(" The word was: ");
        self.console.print_bytes(self.state.secret());
        self.console.put_char(b'\n');
        self.console.print(BANNER_RULE);
    }

    fn render_defeat(&mut self) {
        self.console.clear();
        gallows::draw(self.console, self.state.errors());
        self.console.print("\n\nGAME OVER! You lost!\n");
        self.console.print("The word was: ");
        self.console.print_bytes(self.state.secret());
        self.console.put_char(b'\n');
    }
}

fn print_spaced<B: TextBuffer>(console: &mut VgaConsole<B>, letters: &[u8]) {
    for (i, &letter) in letters.iter().enumerate() {
        if i > 0 {
            console.put_char(b' ');
        }
        console.put_char(letter);
    }
}
