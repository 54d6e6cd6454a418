use bitfield_struct::bitfield;

/// The 16 entries of the default VGA text-mode palette.
///
/// Only the first eight can be used as a background color; bit 7 of the
/// attribute byte is the blink flag.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

impl Color {
    #[inline]
    #[must_use]
    pub const fn into_bits(self) -> u8 {
        self as u8
    }

    #[inline]
    #[must_use]
    pub const fn from_bits(v: u8) -> Self {
        match v & 0x0f {
            0 => Self::Black,
            1 => Self::Blue,
            2 => Self::Green,
            3 => Self::Cyan,
            4 => Self::Red,
            5 => Self::Magenta,
            6 => Self::Brown,
            7 => Self::LightGray,
            8 => Self::DarkGray,
            9 => Self::LightBlue,
            10 => Self::LightGreen,
            11 => Self::LightCyan,
            12 => Self::LightRed,
            13 => Self::Pink,
            14 => Self::Yellow,
            _ => Self::White,
        }
    }
}

/// The high byte of a text-mode cell.
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
pub struct VgaAttribute {
    /// Bits 0–3: glyph color.
    #[bits(4, default = Color::White)]
    pub foreground: Color,

    /// Bits 4–6: cell color. Limited to the dark half of the palette.
    #[bits(3, default = Color::Black)]
    pub background: Color,

    /// Bit 7: blink (or bright background, depending on the mode control register).
    pub blink: bool,
}

impl VgaAttribute {
    /// White on black; the attribute the console writes with unless told otherwise.
    pub const WHITE_ON_BLACK: Self = Self::from_colors(Color::White, Color::Black);

    /// White on red, used for fatal error screens.
    pub const WHITE_ON_RED: Self = Self::from_colors(Color::White, Color::Red);

    #[inline]
    #[must_use]
    pub const fn from_colors(foreground: Color, background: Color) -> Self {
        Self::new()
            .with_foreground(foreground)
            .with_background(background)
    }
}
