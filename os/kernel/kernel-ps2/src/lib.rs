//! # Polled PS/2 Keyboard
//!
//! Reads key presses from the legacy i8042 keyboard controller without
//! interrupts: the CPU spins on the status register until a byte is waiting,
//! then pulls the scancode from the data register.
//!
//! ```text
//! status 0x64 ──(bit 0 set?)──► data 0x60 ──► ScancodeMap ──► echo ──► caller
//!      ▲             │ no
//!      └─────────────┘ spin
//! ```
//!
//! Only scancode set 1 *make* codes below `0x80` are translated. Break codes
//! (key releases, bit 7 set) and keys without a mapping are dropped silently.
//! There is no modifier tracking; letters always come out uppercase.
//!
//! The hardware sits behind the [`Ps2Port`] trait. [`Ps2Controller`] talks to
//! the real ports, [`ReplayPort`] plays back a fixed list of scancodes so the
//! same input pipeline runs on a host.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

mod controller;
mod keyboard;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod ports;
mod replay;
mod scancode;
mod status;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use controller::Ps2Controller;
pub use controller::{DATA_PORT, Ps2Port, STATUS_PORT};
pub use keyboard::Keyboard;
pub use replay::ReplayPort;
pub use scancode::{RELEASE_BIT, ScancodeMap};
pub use status::StatusRegister;
