extern crate std;

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use crate::emitter::{HidError, KeyboardReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HidCall {
    Press(u8),
    Release(u8),
}

#[derive(Default)]
struct Inner {
    calls: Vec<HidCall>,
    held: Vec<u8>,
    release_alls: usize,
    fail_next: usize,
    failed: usize,
}

/// Records every press/release and which keys the host would see held. Clones share the same log so a test can keep a handle while the
/// session owns the keyboard.
#[derive(Clone, Default)]
pub struct RecordingKeyboard(Rc<RefCell<Inner>>);

impl RecordingKeyboard {
    /// Successful calls so far.
    pub fn calls(&self) -> Vec<HidCall> {
        self.0.borrow().calls.clone()
    }

    pub fn take_calls(&self) -> Vec<HidCall> {
        core::mem::take(&mut self.0.borrow_mut().calls)
    }

    /// Make the next `n` calls fail with [HidError::Disabled].
    pub fn fail_next(&self, n: usize) {
        self.0.borrow_mut().fail_next = n;
    }

    pub fn failed(&self) -> usize {
        self.0.borrow().failed
    }

    /// Keys pressed and not yet released, in press order.
    pub fn held(&self) -> Vec<u8> {
        self.0.borrow().held.clone()
    }

    /// Successful [KeyboardReport::release_all] calls.
    pub fn release_alls(&self) -> usize {
        self.0.borrow().release_alls
    }

    fn check_failure(inner: &mut Inner) -> Result<(), HidError> {
        if inner.fail_next > 0 {
            inner.fail_next -= 1;
            inner.failed += 1;
            return Err(HidError::Disabled);
        }
        Ok(())
    }

    fn record(&self, call: HidCall) -> Result<(), HidError> {
        let mut inner = self.0.borrow_mut();
        Self::check_failure(&mut inner)?;
        match call {
            HidCall::Press(kc) => {
                if !inner.held.contains(&kc) {
                    inner.held.push(kc);
                }
            }
            HidCall::Release(kc) => inner.held.retain(|k| *k != kc),
        }
        inner.calls.push(call);
        Ok(())
    }
}

impl KeyboardReport for RecordingKeyboard {
    async fn press(&mut self, keycode: u8) -> Result<(), HidError> {
        self.record(HidCall::Press(keycode))
    }

    async fn release(&mut self, keycode: u8) -> Result<(), HidError> {
        self.record(HidCall::Release(keycode))
    }

    async fn release_all(&mut self) -> Result<(), HidError> {
        let mut inner = self.0.borrow_mut();
        Self::check_failure(&mut inner)?;
        inner.held.clear();
        inner.release_alls += 1;
        Ok(())
    }
}
