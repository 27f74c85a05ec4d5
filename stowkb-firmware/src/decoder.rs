use stowkb_common::{
    keycodes::{key_range, usage},
    keymap::{self, Locale, FN_CARRIER, RELEASE_BIT},
};

use crate::scan_buffer::ScanBuffer;

/// Modifier keys as last reported by the keyboard module.
///
/// Only the [Decoder] changes these. Fn never reaches the host; Ctrl, Shift and Alt are tracked
/// here and also forwarded as ordinary HID modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModifierState {
    fn_key: bool,
    ctrl: bool,
    shift: bool,
    alt: bool,
}

impl ModifierState {
    pub fn fn_key(&self) -> bool {
        self.fn_key
    }

    pub fn ctrl(&self) -> bool {
        self.ctrl
    }

    pub fn shift(&self) -> bool {
        self.shift
    }

    pub fn alt(&self) -> bool {
        self.alt
    }

    pub fn any(&self) -> bool {
        self.fn_key || self.ctrl || self.shift || self.alt
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn track(&mut self, keycode: u8, is_down: bool) {
        match keycode {
            usage::LEFT_CTRL | usage::RIGHT_CTRL => self.ctrl = is_down,
            usage::LEFT_SHIFT | usage::RIGHT_SHIFT => self.shift = is_down,
            usage::LEFT_ALT => self.alt = is_down,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Decoded {
    /// The module repeated a release byte: every key is up.
    AllReleased,
    /// The Fn key changed state. Consumed; nothing goes to the host.
    Fn { is_down: bool },
    /// No table entry for this key index.
    Unknown { raw: u8 },
    /// A key to send to the host; `keycode` already has the Fn remap applied.
    Key { raw: u8, keycode: u8, is_up: bool },
}

pub struct Decoder {
    locale: Locale,
    modifiers: ModifierState,
}

impl Decoder {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            modifiers: ModifierState::default(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    pub fn reset(&mut self) {
        self.modifiers.clear();
    }

    /// Consume the oldest byte in `buf` (two when it is a repeated release) and decode it.
    ///
    /// The repeated release check only looks at what is already buffered; a duplicate that has
    /// not arrived yet is decoded as an ordinary key release when it does.
    ///
    /// The Fn remap is decided per byte, so a digit released after Fn goes up is released as the
    /// digit and the function key stays down on the host until the next all-released signal.
    pub fn decode<const C: usize>(&mut self, buf: &mut ScanBuffer<C>) -> Option<Decoded> {
        let raw = buf.pop_front()?;
        crate::debug!("scancode {:#x}", raw);

        if raw & RELEASE_BIT != 0 && buf.peek_front() == Some(raw) {
            buf.pop_front();
            self.modifiers.clear();
            crate::debug!("all keys released");
            return Some(Decoded::AllReleased);
        }

        let (scancode, is_up) = keymap::split(raw);

        let Some(keycode) = self.locale.keycode(scancode) else {
            crate::warn!("unknown scancode {:#x}", scancode);
            return Some(Decoded::Unknown { raw });
        };

        if keycode == FN_CARRIER {
            self.modifiers.fn_key = !is_up;
            crate::debug!("Fn {}", if is_up { "released" } else { "pressed" });
            return Some(Decoded::Fn { is_down: !is_up });
        }

        self.modifiers.track(keycode, !is_up);

        let keycode = if self.modifiers.fn_key && key_range::is_digit(keycode) {
            let fkey = key_range::digit_to_function(keycode);
            crate::debug!("Fn remap {:#x} -> {:#x}", keycode, fkey);
            fkey
        } else {
            keycode
        };

        Some(Decoded::Key {
            raw,
            keycode,
            is_up,
        })
    }
}

#[cfg(test)]
#[path = "decoder_test.rs"]
mod test;
