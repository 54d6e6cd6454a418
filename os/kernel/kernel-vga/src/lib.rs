//! # VGA Text-Mode Console
//!
//! Drives the legacy 80×25 text-mode grid that PC firmware leaves mapped at
//! physical address `0xB8000`. Every cell is a 16-bit word: the low byte is the
//! code page 437 character, the high byte the display attribute.
//!
//! ```text
//!  15  14 13 12  11 10 9 8  7 6 5 4 3 2 1 0
//! ┌───┬────────┬──────────┬────────────────┐
//! │ B │   BG   │    FG    │   character    │
//! └───┴────────┴──────────┴────────────────┘
//! ```
//!
//! ## Components
//! * [`VgaAttribute`] / [`Color`]: typed model of the attribute byte.
//! * [`VgaCell`]: a character and its attribute, convertible to the raw cell word.
//! * [`TextBuffer`]: the storage seam. [`MmioTextBuffer`] writes the real display
//!   memory with volatile accesses, [`MemoryTextBuffer`] keeps the grid in RAM for
//!   hosted runs and tests.
//! * [`VgaConsole`]: the console context. It owns the buffer and the cursor, and
//!   is passed explicitly to whoever wants to print.
//!
//! ## Cursor rules
//! * `\n` moves to column 0 of the next row.
//! * Any other byte is written at the cursor, which then advances one column.
//! * Reaching column 80 wraps to the next row.
//! * Reaching row 25 wipes the whole screen and restarts at the origin. There is
//!   no scroll-back; the previous content is lost.
//!
//! ## Usage
//! ```rust
//! use kernel_vga::{MemoryTextBuffer, VgaConsole};
//!
//! let mut console = VgaConsole::new(MemoryTextBuffer::new());
//! console.clear();
//! console.print("HELLO\n");
//! assert_eq!(console.cursor().y, 1);
//! assert_eq!(&console.buffer().row_bytes(0)[..5], b"HELLO");
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

mod attribute;
mod buffer;
mod cell;
mod console;

pub use attribute::{Color, VgaAttribute};
pub use buffer::{MemoryTextBuffer, MmioTextBuffer, TextBuffer};
pub use cell::VgaCell;
pub use console::{Cursor, VgaConsole};

/// Number of character columns in the text-mode grid.
pub const WIDTH: usize = 80;

/// Number of character rows in the text-mode grid.
pub const HEIGHT: usize = 25;

/// Physical (and identity-mapped) address of the color text-mode buffer.
pub const VGA_TEXT_BUFFER: usize = 0x000B_8000;
