use crate::{HEIGHT, TextBuffer, VgaAttribute, VgaCell, WIDTH};
use core::fmt;
use log::trace;

/// Glyph printed for characters outside of ASCII (`■` in code page 437).
const REPLACEMENT_GLYPH: u8 = 0xfe;

/// Position of the next write.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Cursor {
    /// Column, `0..WIDTH`.
    pub x: usize,
    /// Row, `0..HEIGHT`.
    pub y: usize,
}

/// The console context: display storage, cursor and the attribute used for
/// every write.
///
/// There is exactly one of these per screen. It is handed by `&mut` to
/// whatever needs to print, which keeps all mutation of the cursor and the
/// grid in one place.
pub struct VgaConsole<B> {
    buffer: B,
    cursor: Cursor,
    attribute: VgaAttribute,
}

impl<B: TextBuffer> VgaConsole<B> {
    /// Takes over `buffer` with the cursor at the origin. The existing screen
    /// content is left alone until the first [`clear`](Self::clear).
    pub const fn new(buffer: B) -> Self {
        Self::with_attribute(buffer, VgaAttribute::WHITE_ON_BLACK)
    }

    pub const fn with_attribute(buffer: B, attribute: VgaAttribute) -> Self {
        Self {
            buffer,
            cursor: Cursor { x: 0, y: 0 },
            attribute,
        }
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn attribute(&self) -> VgaAttribute {
        self.attribute
    }

    #[must_use]
    pub const fn buffer(&self) -> &B {
        &self.buffer
    }

    #[must_use]
    pub fn into_inner(self) -> B {
        self.buffer
    }

    /// Blanks every cell and moves the cursor to the origin.
    pub fn clear(&mut self) {
        let blank = VgaCell::blank(self.attribute);
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                self.buffer.write_cell(row, col, blank);
            }
        }
        self.cursor = Cursor::default();
    }

    pub fn put_char(&mut self, byte: u8) {
        if byte == b'\n' {
            self.cursor.x = 0;
            self.cursor.y += 1;
        } else {
            let Cursor { x, y } = self.cursor;
            self.buffer.write_cell(y, x, VgaCell::new(byte, self.attribute));
            self.cursor.x += 1;
        }

        if self.cursor.x >= WIDTH {
            self.cursor.x = 0;
            self.cursor.y += 1;
        }

        if self.cursor.y >= HEIGHT {
            trace!("Cursor ran past the last row; wiping the screen");
            self.clear();
        }
    }

    pub fn print_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.put_char(byte);
        }
    }

    /// Prints `text`, showing every non-ASCII character as a single block glyph.
    pub fn print(&mut self, text: &str) {
        for c in text.chars() {
            self.put_char(u8::try_from(c).ok().filter(u8::is_ascii).unwrap_or(REPLACEMENT_GLYPH));
        }
    }
}

impl<B: TextBuffer> fmt::Write for VgaConsole<B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s);
        Ok(())
    }
}
