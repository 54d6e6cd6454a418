use core::fmt;

/// A [`LetterBuf`] ran out of room.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("letter buffer is full ({capacity} letters)")]
pub struct CapacityExceeded {
    pub capacity: usize,
}

/// A sequence of at most `N` bytes kept inline.
///
/// Growing past `N` is reported as [`CapacityExceeded`]; nothing is truncated.
#[derive(Clone)]
pub struct LetterBuf<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> LetterBuf<N> {
    pub const CAPACITY: usize = N;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    /// `len` copies of `byte`.
    ///
    /// # Errors
    /// [`CapacityExceeded`] if `len > N`.
    pub fn filled(len: usize, byte: u8) -> Result<Self, CapacityExceeded> {
        if len > N {
            return Err(CapacityExceeded { capacity: N });
        }
        let mut buf = Self::new();
        buf.bytes[..len].fill(byte);
        buf.len = len;
        Ok(buf)
    }

    /// # Errors
    /// [`CapacityExceeded`] if `bytes` is longer than `N`.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, CapacityExceeded> {
        let mut buf = Self::new();
        for &byte in bytes {
            buf.push(byte)?;
        }
        Ok(buf)
    }

    /// Appends `byte`.
    ///
    /// # Errors
    /// [`CapacityExceeded`] if the buffer already holds `N` bytes; the buffer
    /// is left unchanged.
    pub fn push(&mut self, byte: u8) -> Result<(), CapacityExceeded> {
        let slot = self
            .bytes
            .get_mut(self.len)
            .ok_or(CapacityExceeded { capacity: N })?;
        *slot = byte;
        self.len += 1;
        Ok(())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes[..self.len]
    }

    #[must_use]
    pub fn contains(&self, byte: u8) -> bool {
        self.as_bytes().contains(&byte)
    }
}

impl<const N: usize> Default for LetterBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for LetterBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match core::str::from_utf8(self.as_bytes()) {
            Ok(text) => write!(f, "{text:?}"),
            Err(_) => write!(f, "{:?}", self.as_bytes()),
        }
    }
}

impl<const N: usize> PartialEq for LetterBuf<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for LetterBuf<N> {}

impl<const N: usize> PartialEq<[u8]> for LetterBuf<N> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_until_full_then_fail() {
        let mut buf = LetterBuf::<3>::new();
        buf.push(b'A').unwrap();
        buf.push(b'B').unwrap();
        buf.push(b'C').unwrap();

        assert_eq!(buf.push(b'D'), Err(CapacityExceeded { capacity: 3 }));
        assert_eq!(buf.as_bytes(), b"ABC");
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn filled_respects_capacity() {
        let buf = LetterBuf::<8>::filled(6, b'_').unwrap();
        assert_eq!(buf.as_bytes(), b"______");
        assert!(LetterBuf::<4>::filled(5, b'_').is_err());
    }

    #[test]
    fn try_from_bytes_and_contains() {
        let buf = LetterBuf::<6>::try_from_bytes(b"KERNEL").unwrap();
        assert!(buf.contains(b'N'));
        assert!(!buf.contains(b'Z'));
        assert_eq!(format!("{buf:?}"), "\"KERNEL\"");
        assert!(LetterBuf::<5>::try_from_bytes(b"KERNEL").is_err());
    }

    #[test]
    fn empty_buffer() {
        let buf = LetterBuf::<26>::default();
        assert!(buf.is_empty());
        assert_eq!(LetterBuf::<26>::CAPACITY, 26);
        assert_eq!(buf.as_bytes(), b"");
    }
}
