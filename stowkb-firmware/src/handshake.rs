use stowkb_common::{READY_FIRST, READY_SECOND};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandshakeState {
    #[default]
    AwaitingFirstByte,
    AwaitingSecondByte,
    Ready,
}

/// Tracks the `0xF9 0xFB` ready signature the module sends once after power-up.
///
/// Bytes before the first `0xF9` are ignored. Anything other than `0xFB` right after an `0xF9`
/// restarts the search. Once [HandshakeState::Ready] is reached it stays there until [Self::reset].
#[derive(Debug, Default)]
pub struct Handshake {
    state: HandshakeState,
}

impl Handshake {
    pub const fn new() -> Self {
        Self {
            state: HandshakeState::AwaitingFirstByte,
        }
    }

    pub fn state(&self) -> HandshakeState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == HandshakeState::Ready
    }

    pub fn reset(&mut self) {
        self.state = HandshakeState::AwaitingFirstByte;
    }

    /// Feed one received byte. Returns `true` only for the byte that completes the signature.
    pub fn feed(&mut self, byte: u8) -> bool {
        match self.state {
            HandshakeState::AwaitingFirstByte => {
                if byte == READY_FIRST {
                    crate::debug!("handshake: got {:#x}", byte);
                    self.state = HandshakeState::AwaitingSecondByte;
                }
                false
            }
            HandshakeState::AwaitingSecondByte => {
                if byte == READY_SECOND {
                    crate::info!("handshake: got {:#x}, keyboard ready", byte);
                    self.state = HandshakeState::Ready;
                    true
                } else {
                    crate::debug!("handshake: expected {:#x} not {:#x}, restarting", READY_SECOND, byte);
                    self.state = HandshakeState::AwaitingFirstByte;
                    false
                }
            }
            HandshakeState::Ready => false,
        }
    }
}

#[cfg(test)]
#[path = "handshake_test.rs"]
mod test;
