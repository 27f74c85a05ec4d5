use embassy_futures::yield_now;
use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::OutputPin;
use embedded_hal_nb::{
    nb,
    serial::{self, Error as _},
};
use heapless::Vec;
use stowkb_common::keymap;

use crate::{
    config::ReaderConfig,
    decoder::{Decoded, Decoder, ModifierState},
    emitter::{self, KeyboardReport},
    handshake::Handshake,
    scan_buffer::{ScanBuffer, DEFAULT_BUFFER_SIZE},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionError {
    /// The power enable line could not be driven.
    PowerControl,
    /// The serial receiver reported an error.
    Serial,
}

/// One byte taken off the buffer by [ReaderSession::process_one].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanEvent {
    /// The byte as it came off the wire, release bit included.
    pub raw: u8,
    /// What was sent to the host. `None` for unknown keys, Fn and the all-released signal.
    pub keycode: Option<u8>,
}

/// Owns one attached Stowaway: its power line, its serial receiver and the HID transport the
/// decoded keys go to.
///
/// Nothing happens on its own; call [Self::start] then poll, or hand the session to [Self::run].
pub struct ReaderSession<S, P, H, const C: usize = DEFAULT_BUFFER_SIZE>
where
    S: serial::Read<u8>,
    P: OutputPin,
    H: KeyboardReport,
{
    serial: S,
    power: P,
    hid: H,
    config: ReaderConfig,
    handshake: Handshake,
    buffer: ScanBuffer<C>,
    decoder: Decoder,
}

impl<S, P, H, const C: usize> ReaderSession<S, P, H, C>
where
    S: serial::Read<u8>,
    P: OutputPin,
    H: KeyboardReport,
{
    /// Takes ownership of the hardware with the keyboard powered down and any stale input
    /// discarded.
    pub fn new(serial: S, mut power: P, hid: H, config: ReaderConfig) -> Result<Self, SessionError> {
        if power.set_low().is_err() {
            crate::warn!("keyboard power line not responding");
            return Err(SessionError::PowerControl);
        }

        let mut session = Self {
            serial,
            power,
            hid,
            config,
            handshake: Handshake::new(),
            buffer: ScanBuffer::new(),
            decoder: Decoder::new(config.locale),
        };
        session.discard_stale()?;

        Ok(session)
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn is_ready(&self) -> bool {
        self.handshake.is_ready()
    }

    pub fn modifiers(&self) -> ModifierState {
        self.decoder.modifiers()
    }

    /// Power cycle the keyboard and wait up to `ready_timeout_ms` for its ready signature.
    ///
    /// Any earlier session state is thrown away first. Bytes that follow the signature in the
    /// same burst are kept as scancodes.
    pub async fn start(&mut self) -> bool {
        self.handshake.reset();
        self.buffer.clear();
        self.decoder.reset();

        self.power_cycle().await;

        crate::debug!("waiting for keyboard handshake");
        let start = Instant::now();
        let timeout = Duration::from_millis(self.config.ready_timeout_ms);
        loop {
            self.receive();
            if self.handshake.is_ready() {
                crate::info!("keyboard ready; {} bytes buffered", self.buffer.len());
                return true;
            }

            let elapsed = Instant::now() - start;
            if elapsed > timeout {
                crate::warn!(
                    "keyboard handshake timeout: {} ms (limit {} ms)",
                    elapsed.as_millis(),
                    self.config.ready_timeout_ms
                );
                return false;
            }

            Timer::after_millis(1).await;
        }
    }

    /// Power the keyboard down. The handshake is not forgotten; call [Self::start] to bring it
    /// back.
    pub fn stop(&mut self) {
        if self.power.set_low().is_err() {
            crate::warn!("keyboard power line not responding");
        }
        crate::debug!("keyboard powered down");
    }

    /// Bytes waiting to be decoded, after picking up anything the receiver holds.
    pub fn pending_count(&mut self) -> usize {
        if self.is_ready() {
            self.receive();
        }
        self.buffer.len()
    }

    /// Take every buffered byte without decoding it.
    pub fn read_raw(&mut self) -> Option<Vec<u8, C>> {
        if self.is_ready() {
            self.receive();
        }
        if self.buffer.is_empty() {
            None
        } else {
            Some(self.buffer.drain_all())
        }
    }

    /// Decode the oldest buffered byte and send the result to the host.
    ///
    /// Returns `None` only when there was nothing to decode.
    pub async fn process_one(&mut self) -> Option<ScanEvent> {
        if self.is_ready() {
            self.receive();
        }

        let raw = self.buffer.peek_front()?;
        let keycode = match self.decoder.decode(&mut self.buffer)? {
            Decoded::Key {
                keycode, is_up, ..
            } => {
                emitter::emit(&mut self.hid, keycode, is_up).await;
                Some(keycode)
            }
            Decoded::AllReleased => {
                emitter::emit_release_all(&mut self.hid).await;
                None
            }
            Decoded::Unknown { .. } | Decoded::Fn { .. } => None,
        };

        Some(ScanEvent { raw, keycode })
    }

    /// The locale label for a raw byte and whether it is a release.
    pub fn lookup(&self, raw: u8) -> (Option<&'static str>, bool) {
        let (scancode, is_up) = keymap::split(raw);
        (self.decoder.locale().label(scancode), is_up)
    }

    /// Keep the keyboard alive forever: retry [Self::start] until the module answers, then poll
    /// every `poll_interval_ms`, decoding everything that has arrived.
    pub async fn run(&mut self) -> ! {
        loop {
            while !self.is_ready() {
                if !self.start().await {
                    Timer::after_millis(self.config.retry_delay_ms).await;
                }
            }

            while let Some(event) = self.process_one().await {
                match event.keycode {
                    Some(keycode) => crate::info!("scan {:#x} key {:#x}", event.raw, keycode),
                    None => crate::debug!("scan {:#x}", event.raw),
                }
                yield_now().await;
            }

            Timer::after_millis(self.config.poll_interval_ms).await;
        }
    }

    async fn power_cycle(&mut self) {
        crate::debug!("power cycling keyboard");
        let settle = self.config.power_settle_ms;

        if self.power.set_low().is_err() {
            crate::warn!("keyboard power line not responding");
        }
        Timer::after_millis(settle).await;
        if self.power.set_high().is_err() {
            crate::warn!("keyboard power line not responding");
        }
        Timer::after_millis(settle).await;
    }

    /// Read until the receiver runs dry. Before the handshake completes the bytes go to the
    /// [Handshake]; after it (including the rest of the completing burst) to the buffer.
    fn receive(&mut self) {
        loop {
            match self.serial.read() {
                Ok(byte) => {
                    if self.handshake.is_ready() {
                        self.buffer.push(byte);
                    } else {
                        self.handshake.feed(byte);
                    }
                }
                Err(nb::Error::WouldBlock) => return,
                Err(nb::Error::Other(err)) => {
                    crate::warn!("serial receive error: {}", error_name(err.kind()));
                    return;
                }
            }
        }
    }

    fn discard_stale(&mut self) -> Result<(), SessionError> {
        let mut dropped = 0usize;
        loop {
            match self.serial.read() {
                Ok(_) => dropped += 1,
                Err(nb::Error::WouldBlock) => break,
                Err(nb::Error::Other(err)) => {
                    crate::warn!("serial receive error: {}", error_name(err.kind()));
                    return Err(SessionError::Serial);
                }
            }
        }
        if dropped != 0 {
            crate::debug!("discarded {} stale bytes", dropped);
        }
        Ok(())
    }
}

fn error_name(kind: serial::ErrorKind) -> &'static str {
    match kind {
        serial::ErrorKind::Overrun => "overrun",
        serial::ErrorKind::FrameFormat => "framing",
        serial::ErrorKind::Parity => "parity",
        serial::ErrorKind::Noise => "noise",
        _ => "other",
    }
}

#[cfg(test)]
#[path = "reader_test.rs"]
mod test;
