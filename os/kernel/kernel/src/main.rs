//! # Kernel Entry Point
//!
//! The boot environment jumps to [`kernel_main`] with interrupts disabled, a
//! valid stack and the legacy VGA and i8042 devices identity mapped. From here
//! on there is a single thread of control and nothing but the game to run.

#![no_std]
#![no_main]
#![allow(unsafe_code)]

use core::fmt::Write;
use core::hint::spin_loop;
use kernel_hangman::{DEFAULT_SECRET_WORD, GameError, GameSession, Phase};
use kernel_ps2::{Keyboard, Ps2Controller};
use kernel_vga::{MmioTextBuffer, TextBuffer, VgaAttribute, VgaConsole};
use log::{error, info};

#[cfg(feature = "qemu")]
static LOGGER: kernel_qemu::QemuLogger = kernel_qemu::QemuLogger::new(log::LevelFilter::Debug);

/// Paints the panic message in white on red over whatever is on screen, then
/// spins. The game's console may be mid-write; the handler takes the display
/// memory over regardless.
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    error!("Kernel panic: {info}");

    // SAFETY: the game's console may still hold the text buffer. Aliasing it here
    // is fine because nothing resumes after a panic and this handler never returns.
    let mut console =
        VgaConsole::with_attribute(unsafe { MmioTextBuffer::vga() }, VgaAttribute::WHITE_ON_RED);
    console.clear();
    let _ = write!(console, "KERNEL PANIC\n\n{info}\n");

    loop {
        spin_loop();
    }
}

/// The kernel entry point.
///
/// Takes no arguments and never returns. Once the round is decided the CPU is
/// halted with the final screen left standing.
#[unsafe(no_mangle)]
pub extern "C" fn kernel_main() -> ! {
    #[cfg(feature = "qemu")]
    {
        kernel_qemu::qemu_trace!("Kernel reporting to QEMU!\n");
        if LOGGER.install().is_err() {
            kernel_qemu::qemu_trace!("A logger was already installed\n");
        }
    }

    // SAFETY: the boot environment leaves the text buffer identity mapped, we run
    // at CPL0, and nothing else touches either device.
    let mut console = VgaConsole::new(unsafe { MmioTextBuffer::vga() });
    let mut keyboard = Keyboard::new(unsafe { Ps2Controller::new() });

    match play(&mut console, &mut keyboard) {
        Ok(phase) => info!("Round finished: {phase:?}"),
        Err(e) => {
            error!("Round aborted: {e}");
            show_error(&mut console, &e);
        }
    }

    halt()
}

fn play(
    console: &mut VgaConsole<MmioTextBuffer>,
    keyboard: &mut Keyboard<Ps2Controller>,
) -> Result<Phase, GameError> {
    let mut session = GameSession::new(console, keyboard, DEFAULT_SECRET_WORD)?;
    session.run()
}

fn show_error<B: TextBuffer>(console: &mut VgaConsole<B>, e: &GameError) {
    console.print("\n\nThe game stopped: ");
    let _ = writeln!(console, "{e}");
}

fn halt() -> ! {
    loop {
        // SAFETY: interrupts stay disabled, so this parks the CPU for good.
        unsafe { core::arch::asm!("cli", "hlt", options(nomem, nostack)) };
    }
}
