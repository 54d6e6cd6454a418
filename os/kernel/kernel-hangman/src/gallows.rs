//! The gallows figure, one body part per error.
//!
//! ```text
//!   +---+
//!   |   |
//!   |   O      1: head
//!   |  /|\     2: torso, 3: left arm, 4: right arm
//!   |  / \     5: left leg, 6: right leg
//!   |
//! =========
//! ```

use kernel_vga::{TextBuffer, VgaConsole};

pub const FIGURE_ROWS: usize = 7;
pub const FIGURE_WIDTH: usize = 9;

pub type Figure = [[u8; FIGURE_WIDTH]; FIGURE_ROWS];

const FRAME: Figure = [
    *b"  +---+  ",
    *b"  |   |  ",
    *b"  |      ",
    *b"  |      ",
    *b"  |      ",
    *b"  |      ",
    *b"=========",
];

/// `(errors needed, row, column, glyph)` in the order the parts appear.
const PARTS: [(u8, usize, usize, u8); 6] = [
    (1, 2, 6, b'O'),
    (2, 3, 6, b'|'),
    (3, 3, 5, b'/'),
    (4, 3, 7, b'\\'),
    (5, 4, 5, b'/'),
    (6, 4, 7, b'\\'),
];

/// The figure for `errors` misses. Anything above six draws the full figure.
#[must_use]
pub fn figure(errors: u8) -> Figure {
    let mut figure = FRAME;
    for &(threshold, row, col, glyph) in &PARTS {
        if errors >= threshold {
            figure[row][col] = glyph;
        }
    }
    figure
}

/// Prints the figure for `errors` at the cursor, one line per row.
pub fn draw<B: TextBuffer>(console: &mut VgaConsole<B>, errors: u8) {
    for row in &figure(errors) {
        console.print_bytes(row.trim_ascii_end());
        console.put_char(b'\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel_vga::MemoryTextBuffer;

    fn glyphs(figure: &Figure) -> usize {
        figure
            .iter()
            .zip(&FRAME)
            .flat_map(|(a, b)| a.iter().zip(b))
            .filter(|(a, b)| a != b)
            .count()
    }

    #[test]
    fn empty_gallows() {
        assert_eq!(figure(0), FRAME);
    }

    #[test]
    fn each_error_adds_one_part() {
        for errors in 0..=6 {
            assert_eq!(glyphs(&figure(errors)), usize::from(errors));
        }
        assert_eq!(figure(7), figure(6));
    }

    #[test]
    fn complete_figure() {
        let full = figure(6);
        assert_eq!(&full[2], b"  |   O  ");
        assert_eq!(&full[3], b"  |  /|\\ ");
        assert_eq!(&full[4], b"  |  / \\ ");
    }

    #[test]
    fn head_comes_first() {
        let one = figure(1);
        assert_eq!(&one[2], b"  |   O  ");
        assert_eq!(&one[3], b"  |      ");
    }

    #[test]
    fn draw_prints_trimmed_rows() {
        let mut console = VgaConsole::new(MemoryTextBuffer::new());
        console.clear();
        draw(&mut console, 3);

        let row = |r: usize| console.buffer().row_bytes(r);
        assert_eq!(&row(0)[..9], b"  +---+  ");
        assert_eq!(&row(3)[..9], b"  |  /|  ");
        assert_eq!(&row(6)[..9], b"=========");
        assert_eq!(console.cursor().y, FIGURE_ROWS);
    }
}
