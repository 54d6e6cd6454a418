use kernel_hangman::{
    DEFAULT_SECRET_WORD, GameError, GameSession, MAX_ERRORS, PLACEHOLDER, Phase,
};
use kernel_ps2::{Keyboard, RELEASE_BIT, ReplayPort, ScancodeMap};
use kernel_vga::{HEIGHT, MemoryTextBuffer, VgaConsole};

/// Press and release codes for every byte of every line, each line closed by Enter.
fn keystrokes(lines: &[&str]) -> Vec<u8> {
    let map = ScancodeMap::US_SET1;
    let mut script = Vec::new();
    for line in lines {
        for byte in line.bytes().chain(std::iter::once(b'\n')) {
            let code = map
                .press_code(byte)
                .unwrap_or_else(|| panic!("no key for {byte:#04x}"));
            script.push(code);
            script.push(code | RELEASE_BIT);
        }
    }
    script
}

fn screen(console: &VgaConsole<MemoryTextBuffer>) -> Vec<String> {
    (0..HEIGHT)
        .map(|row| {
            String::from_utf8_lossy(&console.buffer().row_bytes(row))
                .trim_end()
                .to_owned()
        })
        .collect()
}

fn on_screen(console: &VgaConsole<MemoryTextBuffer>, needle: &str) -> bool {
    screen(console).iter().any(|row| row.contains(needle))
}

fn devices() -> VgaConsole<MemoryTextBuffer> {
    VgaConsole::new(MemoryTextBuffer::new())
}

#[test]
fn welcome_screen() {
    let mut console = devices();
    let mut keyboard = Keyboard::new(ReplayPort::new(&[]));
    let session = GameSession::new(&mut console, &mut keyboard, DEFAULT_SECRET_WORD).unwrap();
    assert_eq!(session.state().phase(), Phase::Playing);
    drop(session);

    assert!(screen(&console)[0].starts_with("Welcome to Hangman"));
    assert_eq!(console.cursor().y, 2);
}

#[test]
fn invalid_secret_is_rejected_before_drawing() {
    let mut console = devices();
    let mut keyboard = Keyboard::new(ReplayPort::new(&[]));
    let result = GameSession::new(&mut console, &mut keyboard, "kernel");
    assert!(matches!(result, Err(GameError::InvalidSecretLetter('k'))));
}

#[test]
fn win_after_two_misses() {
    let script = keystrokes(&["K", "Z", "X", "E", "R", "N", "L"]);
    let mut console = devices();
    let mut keyboard = Keyboard::new(ReplayPort::new(&script).with_idle_polls(3));
    let mut session = GameSession::new(&mut console, &mut keyboard, "KERNEL").unwrap();

    let mut errors = Vec::new();
    loop {
        let phase = session.play_turn().unwrap();
        errors.push(session.state().errors());
        if phase.is_terminal() {
            assert_eq!(phase, Phase::Won);
            break;
        }
    }

    assert_eq!(errors, [0, 1, 2, 2, 2, 2, 2]);
    assert_eq!(session.state().discovered(), b"KERNEL");
    assert_eq!(session.state().tried(), b"KZXERNL");
    drop(session);

    // Only the release of the final Enter is left unread.
    assert_eq!(keyboard.port().remaining(), 1);
    let rows = screen(&console);
    assert_eq!(rows[0], "===================================");
    assert_eq!(rows[1], " Congratulations! You won!");
    assert_eq!(rows[2], " The word was: KERNEL");
    assert_eq!(rows[3], "===================================");
    assert!(rows[4..].iter().all(String::is_empty));
}

#[test]
fn six_misses_lose() {
    let script = keystrokes(&["B", "C", "F", "G", "J", "Q"]);
    let mut console = devices();
    let mut keyboard = Keyboard::new(ReplayPort::new(&script));
    let mut session = GameSession::new(&mut console, &mut keyboard, "KERNEL").unwrap();

    assert_eq!(session.run().unwrap(), Phase::Lost);
    assert_eq!(session.state().errors(), MAX_ERRORS);
    assert!(session.state().discovered().iter().all(|&b| b == PLACEHOLDER));
    drop(session);

    let rows = screen(&console);
    assert_eq!(rows[2], "  |   O");
    assert_eq!(rows[3], "  |  /|\\");
    assert_eq!(rows[4], "  |  / \\");
    assert_eq!(rows[6], "=========");
    assert_eq!(rows[9], "GAME OVER! You lost!");
    assert_eq!(rows[10], "The word was: KERNEL");
}

#[test]
fn repeated_letter_is_reported_without_cost() {
    let script = keystrokes(&["Z", "Z"]);
    let mut console = devices();
    let mut keyboard = Keyboard::new(ReplayPort::new(&script));
    let mut session = GameSession::new(&mut console, &mut keyboard, "KERNEL").unwrap();

    assert_eq!(session.play_turn().unwrap(), Phase::Playing);
    assert_eq!(session.state().errors(), 1);
    assert_eq!(session.play_turn().unwrap(), Phase::Playing);
    assert_eq!(session.state().errors(), 1);
    assert_eq!(session.state().tried().len(), 1);
    drop(session);

    assert!(on_screen(&console, "You already tried that letter!"));
}

#[test]
fn only_the_first_key_of_a_line_counts() {
    let script = keystrokes(&["", "", "KZ", "E"]);
    let mut console = devices();
    let mut keyboard = Keyboard::new(ReplayPort::new(&script));
    let mut session = GameSession::new(&mut console, &mut keyboard, "KERNEL").unwrap();

    session.play_turn().unwrap();
    assert_eq!(session.state().tried(), b"K");
    session.play_turn().unwrap();
    assert_eq!(session.state().tried(), b"KE");
    assert_eq!(session.state().errors(), 0);
}

#[test]
fn board_shows_progress() {
    let script = keystrokes(&["E", "7"]);
    let mut console = devices();
    let mut keyboard = Keyboard::new(ReplayPort::new(&script));
    let mut session = GameSession::new(&mut console, &mut keyboard, "KERNEL").unwrap();

    session.play_turn().unwrap();
    session.play_turn().unwrap();
    session.render_board();
    drop(session);

    assert!(on_screen(&console, "Word: _ E _ _ E _"));
    assert!(on_screen(&console, "Tried: E 7"));
    assert!(on_screen(&console, "Errors: 1/6"));
    assert!(on_screen(&console, "Type a letter and press Enter:"));
    assert!(on_screen(&console, "Too bad! The letter is not in the word."));
}

#[test]
fn long_games_wrap_the_screen() {
    // Each turn takes over a dozen rows, so the console wipes itself repeatedly.
    let script = keystrokes(&["K", "K", "K", "K", "K", "K", "K", "K", "E"]);
    let mut console = devices();
    let mut keyboard = Keyboard::new(ReplayPort::new(&script));
    let mut session = GameSession::new(&mut console, &mut keyboard, "KERNEL").unwrap();

    for _ in 0..9 {
        assert_eq!(session.play_turn().unwrap(), Phase::Playing);
    }
    assert_eq!(session.state().tried(), b"KE");
    assert_eq!(session.state().errors(), 0);
    drop(session);

    assert!(console.cursor().y < HEIGHT);
    assert!(on_screen(&console, "Nice! The letter is in the word."));
}
