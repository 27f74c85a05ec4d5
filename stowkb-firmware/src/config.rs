use stowkb_common::keymap::Locale;

pub const READY_TIMEOUT_MS: u64 = 200;
pub const POWER_SETTLE_MS: u64 = 20;
pub const POLL_INTERVAL_MS: u64 = 20;
pub const RETRY_DELAY_MS: u64 = 100;

/// Timing and locale for a [crate::reader::ReaderSession].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReaderConfig {
    /// How long `start()` waits for the ready signature after power-up.
    pub ready_timeout_ms: u64,
    /// Time the power line is held at each level while power cycling.
    pub power_settle_ms: u64,
    /// Pause between polls in [crate::reader::ReaderSession::run].
    pub poll_interval_ms: u64,
    /// Pause before `run()` retries a failed handshake.
    pub retry_delay_ms: u64,
    pub locale: Locale,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderConfig {
    pub const fn new() -> Self {
        Self {
            ready_timeout_ms: READY_TIMEOUT_MS,
            power_settle_ms: POWER_SETTLE_MS,
            poll_interval_ms: POLL_INTERVAL_MS,
            retry_delay_ms: RETRY_DELAY_MS,
            locale: Locale::Us,
        }
    }

    pub const fn ready_timeout_ms(mut self, ms: u64) -> Self {
        self.ready_timeout_ms = ms;
        self
    }

    pub const fn power_settle_ms(mut self, ms: u64) -> Self {
        self.power_settle_ms = ms;
        self
    }

    pub const fn poll_interval_ms(mut self, ms: u64) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    pub const fn retry_delay_ms(mut self, ms: u64) -> Self {
        self.retry_delay_ms = ms;
        self
    }

    pub const fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod test;
