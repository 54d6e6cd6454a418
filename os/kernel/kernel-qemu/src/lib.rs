//! # QEMU Debug Console Logging
//!
//! Diagnostics for the console kernel while it runs under QEMU. Text written to
//! I/O port `0x402` shows up on the host when QEMU is started with `-debugcon`:
//!
//! ```bash
//! qemu-system-x86_64 ... -debugcon stdio
//! qemu-system-x86_64 ... -debugcon file:debug.log
//! ```
//!
//! The VGA screen belongs to the game, so everything the kernel wants to say
//! about itself (ignored scancodes, guesses, phase changes, panics) goes here
//! instead.
//!
//! * [`QemuLogger`] is a [`log::Log`] backend. Install it once at entry and use
//!   the regular `log` macros everywhere else.
//! * [`qemu_trace!`] writes formatted text to the port directly, bypassing `log`.
//!
//! Without the `enabled` feature (or on a non-x86 target) both compile to no-ops,
//! so a hardware build without the debug device pays nothing for them.
//!
//! ```rust,no_run
//! use kernel_qemu::QemuLogger;
//! use log::{LevelFilter, info};
//!
//! static LOGGER: QemuLogger = QemuLogger::new(LevelFilter::Debug);
//!
//! LOGGER.install().expect("logger installed twice");
//! info!("Console ready");
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

mod logger;

pub use logger::QemuLogger;

#[cfg(all(feature = "enabled", any(target_arch = "x86", target_arch = "x86_64")))]
#[doc(hidden)]
pub mod qemu_fmt {
    use core::fmt::{self, Write};

    /// The port number for QEMU's debug port.
    const QEMU_DEBUG_PORT: u16 = 0x402;

    /// Write a single byte to QEMU's debug port.
    #[allow(clippy::inline_always)]
    #[inline(always)]
    pub fn dbg_putc(c: u8) {
        unsafe { outb(QEMU_DEBUG_PORT, c) }
    }

    #[allow(clippy::inline_always)]
    #[inline(always)]
    unsafe fn outb(port: u16, val: u8) {
        unsafe {
            core::arch::asm!(
            "out dx, al",
            in("dx") port,
            in("al") val,
            options(nomem, nostack, preserves_flags)
            );
        }
    }

    pub struct QemuSink;

    impl Write for QemuSink {
        #[inline]
        fn write_str(&mut self, s: &str) -> fmt::Result {
            for b in s.bytes() {
                dbg_putc(b);
            }
            Ok(())
        }
    }

    #[doc(hidden)]
    #[inline]
    pub fn qemu_write(args: fmt::Arguments) {
        // Best-effort; the sink never fails.
        let _ = fmt::write(&mut QemuSink, args);
    }
}

#[cfg(not(all(feature = "enabled", any(target_arch = "x86", target_arch = "x86_64"))))]
#[doc(hidden)]
pub mod qemu_fmt {
    use core::fmt;

    #[doc(hidden)]
    #[inline(always)]
    #[allow(clippy::inline_always)]
    pub fn qemu_write(_: fmt::Arguments) {}
}

/// Formats straight to the QEMU debug port, without going through `log`.
#[macro_export]
macro_rules! qemu_trace {
    ($($arg:tt)*) => {{
        $crate::qemu_fmt::qemu_write(core::format_args!($($arg)*));
    }};
}
