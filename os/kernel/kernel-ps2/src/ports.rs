//! # i8042 Port Access
//!
//! The keyboard controller lives in the x86 I/O port space, not in memory, so
//! it is reached with the `in` instruction instead of loads:
//!
//! ```text
//! 0x0060   data register    (read: next scancode byte)
//! 0x0064   status register  (read: controller state, bit 0 = data waiting)
//! ```
//!
//! Reading the data register consumes the byte; reading the status register
//! has no side effects.

/// Read one byte from an I/O port (x86).
///
/// Uses `in al, dx`.
///
/// # Safety
/// - **Privilege:** Execute at CPL0 **or** have I/O permission (IOPL/IO bitmap)
///   that allows access to `port`; otherwise the CPU raises `#GP`.
/// - **Correct port:** `port` must be a readable register of the intended
///   device. Reading a data register consumes whatever byte it held.
/// - **Device presence:** The target device must exist and decode the address.
///   Accesses to nonexistent ports may fault or hang on some systems.
/// - **Ordering:** `in` orders with other I/O instructions but is **not** a
///   general memory fence.
#[inline]
pub unsafe fn inb(port: u16) -> u8 {
    let mut v: u8;
    unsafe {
        core::arch::asm!("in al, dx", in("dx") port, out("al") v, options(nomem, nostack, preserves_flags));
    }
    v
}
