/// Bit 7 of a set 1 scancode marks a break (key release) code.
pub const RELEASE_BIT: u8 = 0x80;

/// Number of make codes in scancode set 1.
const MAKE_CODES: usize = RELEASE_BIT as usize;

/// Partial translation from scancode set 1 make codes to ASCII.
///
/// Keys without a printable meaning (escape, tab, modifiers, function keys, the
/// extended block) have no entry, which is a distinct `None` rather than a NUL
/// sentinel.
pub struct ScancodeMap {
    entries: [Option<u8>; MAKE_CODES],
}

impl ScancodeMap {
    /// Simplified US layout without shift: digits and punctuation as printed on
    /// the unshifted keys, letters in uppercase, Enter as `\n`, Backspace as `0x08`.
    pub const US_SET1: Self = Self::new()
        .with_row(0x02, b"1234567890-=\x08")
        .with_row(0x10, b"QWERTYUIOP[]\n")
        .with_row(0x1e, b"ASDFGHJKL;'`")
        .with_row(0x2b, b"\\ZXCVBNM,./")
        .with_row(0x37, b"*")
        .with_row(0x39, b" ");

    /// A map without any entries.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: [None; MAKE_CODES],
        }
    }

    /// Assigns `keys` to consecutive make codes starting at `first`.
    #[must_use]
    pub const fn with_row(mut self, first: u8, keys: &[u8]) -> Self {
        let mut i = 0;
        while i < keys.len() {
            self.entries[first as usize + i] = Some(keys[i]);
            i += 1;
        }
        self
    }

    /// The character for `code`, or `None` for break codes and unmapped keys.
    #[inline]
    #[must_use]
    pub const fn translate(&self, code: u8) -> Option<u8> {
        if code & RELEASE_BIT != 0 {
            return None;
        }
        self.entries[code as usize]
    }

    /// The make code producing `byte`, if any key does.
    #[must_use]
    pub const fn press_code(&self, byte: u8) -> Option<u8> {
        let mut code = 0;
        while code < MAKE_CODES {
            if let Some(mapped) = self.entries[code]
                && mapped == byte
            {
                #[allow(clippy::cast_possible_truncation)]
                return Some(code as u8);
            }
            code += 1;
        }
        None
    }
}

impl Default for ScancodeMap {
    fn default() -> Self {
        Self::US_SET1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn break_codes_are_always_ignored() {
        let map = ScancodeMap::US_SET1;
        for code in 0x80..=0xff_u8 {
            assert_eq!(map.translate(code), None, "code {code:#04x}");
        }
    }

    #[test]
    fn letters_and_control_keys() {
        let map = ScancodeMap::US_SET1;
        assert_eq!(map.translate(0x25), Some(b'K'));
        assert_eq!(map.translate(0x12), Some(b'E'));
        assert_eq!(map.translate(0x13), Some(b'R'));
        assert_eq!(map.translate(0x31), Some(b'N'));
        assert_eq!(map.translate(0x26), Some(b'L'));
        assert_eq!(map.translate(0x1c), Some(b'\n'));
        assert_eq!(map.translate(0x0e), Some(0x08));
        assert_eq!(map.translate(0x39), Some(b' '));
        assert_eq!(map.translate(0x0b), Some(b'0'));
        assert_eq!(map.translate(0x35), Some(b'/'));
    }

    #[test]
    fn unmapped_make_codes() {
        let map = ScancodeMap::US_SET1;
        // escape, tab, left ctrl, left shift, right shift, left alt, caps lock, F1
        for code in [0x00, 0x01, 0x0f, 0x1d, 0x2a, 0x36, 0x38, 0x3a, 0x3b, 0x7f] {
            assert_eq!(map.translate(code), None, "code {code:#04x}");
        }
    }

    #[test]
    fn every_mapped_byte_has_a_press_code() {
        let map = ScancodeMap::US_SET1;
        for code in 0..0x80_u8 {
            if let Some(byte) = map.translate(code) {
                assert_eq!(map.press_code(byte), Some(code));
            }
        }
        assert_eq!(map.press_code(b'a'), None);
    }

    #[test]
    fn empty_map_translates_nothing() {
        let map = ScancodeMap::new();
        assert!((0..=0xff_u8).all(|code| map.translate(code).is_none()));
    }
}
