use crate::{Ps2Port, ScancodeMap};
use core::hint::spin_loop;
use kernel_vga::{TextBuffer, VgaConsole};
use log::{debug, trace, warn};

/// Blocking, echoing character input on top of a [`Ps2Port`].
pub struct Keyboard<P> {
    port: P,
    map: &'static ScancodeMap,
}

impl<P: Ps2Port> Keyboard<P> {
    /// A keyboard with the [US layout](ScancodeMap::US_SET1).
    pub const fn new(port: P) -> Self {
        Self::with_map(port, &ScancodeMap::US_SET1)
    }

    pub const fn with_map(port: P, map: &'static ScancodeMap) -> Self {
        Self { port, map }
    }

    #[must_use]
    pub const fn port(&self) -> &P {
        &self.port
    }

    #[must_use]
    pub fn into_inner(self) -> P {
        self.port
    }

    /// Spins until the controller holds a byte, then returns it.
    ///
    /// There is no timeout; without a key press this never returns.
    pub fn poll_raw(&mut self) -> u8 {
        loop {
            let status = self.port.read_status();
            if status.output_full() {
                if status.has_error() {
                    warn!("PS/2 controller flagged the next byte: {status:?}");
                }
                return self.port.read_data();
            }
            spin_loop();
        }
    }

    /// The character for `code`, or `None` if the code must be skipped.
    #[inline]
    #[must_use]
    pub const fn translate(&self, code: u8) -> Option<u8> {
        self.map.translate(code)
    }

    /// Blocks until a mapped key is pressed, echoes it to `console` and
    /// returns it.
    pub fn read_char<B: TextBuffer>(&mut self, console: &mut VgaConsole<B>) -> u8 {
        loop {
            let code = self.poll_raw();
            if let Some(c) = self.translate(code) {
                debug!("Key {code:#04x} -> {:?}", char::from(c));
                console.put_char(c);
                return c;
            }
            trace!("Ignoring scancode {code:#04x}");
        }
    }

    /// Consumes input up to and including the next newline.
    pub fn read_line<B: TextBuffer>(&mut self, console: &mut VgaConsole<B>) {
        while self.read_char(console) != b'\n' {}
    }
}
