use crate::VgaAttribute;

/// One character position of the text-mode grid.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct VgaCell {
    pub character: u8,
    pub attribute: VgaAttribute,
}

impl VgaCell {
    #[inline]
    #[must_use]
    pub const fn new(character: u8, attribute: VgaAttribute) -> Self {
        Self {
            character,
            attribute,
        }
    }

    /// A space in the given attribute.
    #[inline]
    #[must_use]
    pub const fn blank(attribute: VgaAttribute) -> Self {
        Self::new(b' ', attribute)
    }

    /// The raw 16-bit word as stored in display memory.
    #[inline]
    #[must_use]
    pub const fn into_word(self) -> u16 {
        u16::from_le_bytes([self.character, self.attribute.into_bits()])
    }

    #[inline]
    #[must_use]
    pub const fn from_word(word: u16) -> Self {
        let [character, attribute] = word.to_le_bytes();
        Self::new(character, VgaAttribute::from_bits(attribute))
    }
}
