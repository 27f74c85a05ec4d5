extern crate std;

use embassy_time::{Duration, Instant};
use embedded_hal::digital::{self, OutputPin};
use embedded_hal_nb::{nb, serial};
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Mutex;
use std::vec::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestError(pub serial::ErrorKind);

impl serial::Error for TestError {
    fn kind(&self) -> serial::ErrorKind {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
enum Rx {
    Byte(u8),
    Error(serial::ErrorKind),
}

#[derive(Debug, Default)]
struct SerialInner {
    script: VecDeque<(Instant, Rx)>,
    reads: usize,
}

/// A receive-only UART whose bytes show up at scripted (virtual) times.
///
/// Clones share the same line so a test can keep feeding it after handing one to the session.
#[derive(Clone, Default)]
pub struct ScriptedSerial(Rc<Mutex<SerialInner>>);

impl ScriptedSerial {
    /// Bytes readable right away.
    pub fn send(&self, bytes: &[u8]) {
        self.send_after(0, bytes);
    }

    /// Bytes that become readable `ms` from now.
    pub fn send_after(&self, ms: u64, bytes: &[u8]) {
        let at = Instant::now() + Duration::from_millis(ms);
        let mut inner = self.inner();
        for b in bytes {
            inner.script.push_back((at, Rx::Byte(*b)));
        }
    }

    /// A receive error at this point in the stream, readable `ms` from now.
    pub fn error_after(&self, ms: u64, kind: serial::ErrorKind) {
        let at = Instant::now() + Duration::from_millis(ms);
        self.inner().script.push_back((at, Rx::Error(kind)));
    }

    /// Scripted items not yet read, whether due or not.
    pub fn unread(&self) -> usize {
        self.inner().script.len()
    }

    /// Bytes successfully read so far.
    pub fn reads(&self) -> usize {
        self.inner().reads
    }

    fn inner(&self) -> std::sync::MutexGuard<'_, SerialInner> {
        self.0.lock().unwrap()
    }
}

impl serial::ErrorType for ScriptedSerial {
    type Error = TestError;
}

impl serial::Read<u8> for ScriptedSerial {
    fn read(&mut self) -> nb::Result<u8, Self::Error> {
        let mut inner = self.inner();
        match inner.script.front() {
            Some((at, _)) if *at <= Instant::now() => {}
            _ => return Err(nb::Error::WouldBlock),
        }
        match inner.script.pop_front() {
            Some((_, Rx::Byte(b))) => {
                inner.reads += 1;
                Ok(b)
            }
            Some((_, Rx::Error(kind))) => Err(nb::Error::Other(TestError(kind))),
            None => Err(nb::Error::WouldBlock),
        }
    }
}

#[derive(Debug)]
pub struct PinError;

impl digital::Error for PinError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

#[derive(Debug, Default)]
struct PinInner {
    levels: Vec<(bool, Instant)>,
    fail: bool,
}

/// Power enable line that remembers every level it was driven to, and when.
#[derive(Clone, Default)]
pub struct PowerPin(Rc<Mutex<PinInner>>);

impl PowerPin {
    /// `(is_high, when)` for every successful set, oldest first.
    pub fn levels(&self) -> Vec<(bool, Instant)> {
        self.inner().levels.clone()
    }

    pub fn is_high(&self) -> Option<bool> {
        self.inner().levels.last().map(|(level, _)| *level)
    }

    /// Make every following set fail until cleared.
    pub fn set_fail(&self, fail: bool) {
        self.inner().fail = fail;
    }

    fn set(&self, level: bool) -> Result<(), PinError> {
        let mut inner = self.inner();
        if inner.fail {
            return Err(PinError);
        }
        inner.levels.push((level, Instant::now()));
        Ok(())
    }

    fn inner(&self) -> std::sync::MutexGuard<'_, PinInner> {
        self.0.lock().unwrap()
    }
}

impl digital::ErrorType for PowerPin {
    type Error = PinError;
}

impl OutputPin for PowerPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true)
    }
}
