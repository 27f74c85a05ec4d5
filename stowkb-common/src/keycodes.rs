/// USB HID keyboard/keypad page usages (HID Usage Tables, section 10).
pub mod usage {
    pub const A: u8 = 0x04;
    pub const B: u8 = 0x05;
    pub const C: u8 = 0x06;
    pub const D: u8 = 0x07;
    pub const E: u8 = 0x08;
    pub const F: u8 = 0x09;
    pub const G: u8 = 0x0a;
    pub const H: u8 = 0x0b;
    pub const I: u8 = 0x0c;
    pub const J: u8 = 0x0d;
    pub const K: u8 = 0x0e;
    pub const L: u8 = 0x0f;
    pub const M: u8 = 0x10;
    pub const N: u8 = 0x11;
    pub const O: u8 = 0x12;
    pub const P: u8 = 0x13;
    pub const Q: u8 = 0x14;
    pub const R: u8 = 0x15;
    pub const S: u8 = 0x16;
    pub const T: u8 = 0x17;
    pub const U: u8 = 0x18;
    pub const V: u8 = 0x19;
    pub const W: u8 = 0x1a;
    pub const X: u8 = 0x1b;
    pub const Y: u8 = 0x1c;
    pub const Z: u8 = 0x1d;

    pub const ONE: u8 = 0x1e;
    pub const TWO: u8 = 0x1f;
    pub const THREE: u8 = 0x20;
    pub const FOUR: u8 = 0x21;
    pub const FIVE: u8 = 0x22;
    pub const SIX: u8 = 0x23;
    pub const SEVEN: u8 = 0x24;
    pub const EIGHT: u8 = 0x25;
    pub const NINE: u8 = 0x26;
    pub const ZERO: u8 = 0x27;

    pub const ENTER: u8 = 0x28;
    pub const ESCAPE: u8 = 0x29;
    pub const BACKSPACE: u8 = 0x2a;
    pub const TAB: u8 = 0x2b;
    pub const SPACE: u8 = 0x2c;
    pub const MINUS: u8 = 0x2d;
    pub const EQUALS: u8 = 0x2e;
    pub const LEFT_BRACKET: u8 = 0x2f;
    pub const RIGHT_BRACKET: u8 = 0x30;
    pub const BACKSLASH: u8 = 0x31;
    pub const SEMICOLON: u8 = 0x33;
    pub const QUOTE: u8 = 0x34;
    pub const GRAVE_ACCENT: u8 = 0x35;
    pub const COMMA: u8 = 0x36;
    pub const PERIOD: u8 = 0x37;
    pub const SLASH: u8 = 0x38;
    pub const CAPS_LOCK: u8 = 0x39;

    pub const F1: u8 = 0x3a;
    pub const F2: u8 = 0x3b;
    pub const F3: u8 = 0x3c;
    pub const F4: u8 = 0x3d;
    pub const F5: u8 = 0x3e;
    pub const F6: u8 = 0x3f;
    pub const F7: u8 = 0x40;
    pub const F8: u8 = 0x41;
    pub const F9: u8 = 0x42;
    pub const F10: u8 = 0x43;

    pub const DELETE: u8 = 0x4c;
    pub const RIGHT_ARROW: u8 = 0x4f;
    pub const LEFT_ARROW: u8 = 0x50;
    pub const DOWN_ARROW: u8 = 0x51;
    pub const UP_ARROW: u8 = 0x52;

    /// Non-US `\|`; the key left of `1` on ISO layouts.
    pub const NON_US_BACKSLASH: u8 = 0x64;

    pub const F13: u8 = 0x68;
    pub const F14: u8 = 0x69;
    pub const F15: u8 = 0x6a;
    pub const F16: u8 = 0x6b;

    pub const LEFT_CTRL: u8 = 0xe0;
    pub const LEFT_SHIFT: u8 = 0xe1;
    pub const LEFT_ALT: u8 = 0xe2;
    pub const LEFT_GUI: u8 = 0xe3;
    pub const RIGHT_CTRL: u8 = 0xe4;
    pub const RIGHT_SHIFT: u8 = 0xe5;
    pub const RIGHT_ALT: u8 = 0xe6;
    pub const RIGHT_GUI: u8 = 0xe7;
}

pub mod key_range {
    use super::usage;

    pub const BASIC_MIN: u8 = 0x4;
    pub const BASIC_1: u8 = usage::ONE;
    pub const BASIC_9: u8 = usage::NINE;
    pub const BASIC_0: u8 = usage::ZERO;
    pub const BASIC_F1: u8 = usage::F1;
    pub const BASIC_F10: u8 = usage::F10;
    pub const BASIC_MAX: u8 = 0xa4;
    pub const MODIFIER_MIN: u8 = usage::LEFT_CTRL;
    pub const MODIFIER_MAX: u8 = usage::RIGHT_GUI;

    /// Keys reported through the key bitmap.
    pub fn is_basic(code: u8) -> bool {
        (BASIC_MIN..=BASIC_MAX).contains(&code)
    }

    pub fn is_modifier(code: u8) -> bool {
        (MODIFIER_MIN..=MODIFIER_MAX).contains(&code)
    }

    pub fn is_digit(code: u8) -> bool {
        (BASIC_1..=BASIC_0).contains(&code)
    }

    /// Bit for `code` in the modifier byte of a keyboard report. `code` must be a modifier.
    pub fn modifier_bit(code: u8) -> u8 {
        1 << (code - MODIFIER_MIN)
    }

    /// Maps a digit usage to its function key: `1`..`9` to `F1`..`F9` and `0` to `F10`.
    /// Any other usage is returned unchanged.
    pub fn digit_to_function(code: u8) -> u8 {
        match code {
            BASIC_0 => BASIC_F10,
            BASIC_1..=BASIC_9 => BASIC_F1 + (code - BASIC_1),
            _ => code,
        }
    }
}

#[cfg(test)]
#[path = "keycodes_test.rs"]
mod test;
