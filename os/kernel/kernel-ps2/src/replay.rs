use crate::{Ps2Port, StatusRegister};

/// A [`Ps2Port`] that plays back a fixed list of raw scancodes.
///
/// Before each byte the port reports "no data" for a configurable number of
/// status reads, so callers exercise their polling loop the same way they do on
/// hardware. Polling past the end of the script panics: on a host nothing would
/// ever press another key.
#[derive(Debug, Clone)]
pub struct ReplayPort<'a> {
    script: &'a [u8],
    position: usize,
    idle_polls: usize,
    pending_idle: usize,
    status_reads: usize,
}

impl<'a> ReplayPort<'a> {
    #[must_use]
    pub const fn new(script: &'a [u8]) -> Self {
        Self {
            script,
            position: 0,
            idle_polls: 0,
            pending_idle: 0,
            status_reads: 0,
        }
    }

    /// Report "no data" `polls` times before every byte.
    #[must_use]
    pub const fn with_idle_polls(mut self, polls: usize) -> Self {
        self.idle_polls = polls;
        self.pending_idle = polls;
        self
    }

    /// Scancodes not yet consumed.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.script.len() - self.position
    }

    /// Number of status register reads so far.
    #[must_use]
    pub const fn status_reads(&self) -> usize {
        self.status_reads
    }
}

impl Ps2Port for ReplayPort<'_> {
    fn read_status(&mut self) -> StatusRegister {
        self.status_reads += 1;
        assert!(
            self.position < self.script.len(),
            "replay script exhausted after {} scancodes",
            self.script.len()
        );

        if self.pending_idle > 0 {
            self.pending_idle -= 1;
            return StatusRegister::new();
        }
        StatusRegister::DATA_READY
    }

    fn read_data(&mut self) -> u8 {
        // Like the real data register, an empty port keeps returning stale data.
        let Some(&code) = self.script.get(self.position) else {
            return 0;
        };
        self.position += 1;
        self.pending_idle = self.idle_polls;
        code
    }
}
