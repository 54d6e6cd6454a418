use crate::StatusRegister;

/// Data register of the i8042 controller.
pub const DATA_PORT: u16 = 0x60;

/// Status register of the i8042 controller.
pub const STATUS_PORT: u16 = 0x64;

/// Register-level access to a PS/2 controller.
///
/// [`read_data`](Self::read_data) is only meaningful after
/// [`read_status`](Self::read_status) reported [`StatusRegister::output_full`].
pub trait Ps2Port {
    fn read_status(&mut self) -> StatusRegister;

    fn read_data(&mut self) -> u8;
}

/// The on-board i8042 controller.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub struct Ps2Controller {
    _private: (),
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
impl Ps2Controller {
    /// # Safety
    /// Must run with I/O privilege for ports [`DATA_PORT`] and [`STATUS_PORT`],
    /// and no other code (interrupt handlers included) may consume bytes from
    /// the controller while this value exists.
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
impl Ps2Port for Ps2Controller {
    #[inline]
    fn read_status(&mut self) -> StatusRegister {
        StatusRegister::from_bits(unsafe { crate::ports::inb(STATUS_PORT) })
    }

    #[inline]
    fn read_data(&mut self) -> u8 {
        unsafe { crate::ports::inb(DATA_PORT) }
    }
}
