use bitfield_struct::bitfield;

/// The i8042 status byte, read from [`STATUS_PORT`](crate::STATUS_PORT).
///
/// "Output" and "input" are named from the controller's point of view: the
/// output buffer holds data for the CPU, the input buffer data from it.
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
pub struct StatusRegister {
    /// Bit 0 — Output buffer full. A byte is waiting in the data register.
    pub output_full: bool,

    /// Bit 1 — Input buffer full. The controller has not consumed the last
    /// byte written to it.
    pub input_full: bool,

    /// Bit 2 — System flag, set by firmware once the power-on self test passed.
    pub system_flag: bool,

    /// Bit 3 — Last write went to the command (1) or data (0) register.
    pub command_data: bool,

    /// Bit 4 — Keyboard not inhibited by the lock switch.
    pub keyboard_enabled: bool,

    /// Bit 5 — The waiting byte came from the auxiliary (mouse) device.
    pub aux_output_full: bool,

    /// Bit 6 — Time-out error.
    pub timeout_error: bool,

    /// Bit 7 — Parity error.
    pub parity_error: bool,
}

impl StatusRegister {
    /// Status with only the "data ready" bit set.
    pub const DATA_READY: Self = Self::new().with_output_full(true);

    /// Whether the controller flagged a transmission error for the waiting byte.
    #[inline]
    #[must_use]
    pub const fn has_error(self) -> bool {
        self.timeout_error() || self.parity_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_bit_is_bit_zero() {
        assert!(StatusRegister::from_bits(0x1d).output_full());
        assert!(!StatusRegister::from_bits(0x1c).output_full());
        assert_eq!(StatusRegister::DATA_READY.into_bits(), 0x01);
    }

    #[test]
    fn error_bits() {
        assert!(!StatusRegister::from_bits(0x3f).has_error());
        assert!(StatusRegister::from_bits(0x41).has_error());
        assert!(StatusRegister::from_bits(0x81).has_error());
    }
}
