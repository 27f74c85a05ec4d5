//! Stowaway scancode tables.
//!
//! The keyboard module reports a 7-bit key index per switch. Each locale table maps that index to
//! the label printed on the key and to the USB usage sent to the host. All locales share the same
//! usages; only the labels differ, so the host layout decides what a key finally types.

use crate::keycodes::usage::*;

/// Bit 7 of a scancode byte; set when the key is released.
pub const RELEASE_BIT: u8 = 0x80;
pub const SCANCODE_MASK: u8 = 0x7f;

/// Number of key positions the module reports (12 rows of 8 columns).
pub const KEYMAP_LEN: usize = 96;

/// There is no Fn usage on USB keyboards. The Fn switch carries `RIGHT_ALT` in the tables and is
/// consumed by the decoder instead of being forwarded.
pub const FN_CARRIER: u8 = RIGHT_ALT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEntry {
    pub label: &'static str,
    pub keycode: u8,
}

pub type Keymap = [Option<KeyEntry>; KEYMAP_LEN];

/// Split a raw scancode byte into its key index and release flag.
pub const fn split(raw: u8) -> (u8, bool) {
    (raw & SCANCODE_MASK, raw & RELEASE_BIT != 0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Locale {
    #[default]
    Us,
    De,
}

impl Locale {
    pub fn keymap(self) -> &'static Keymap {
        match self {
            Locale::Us => &KEYMAP_US,
            Locale::De => &KEYMAP_DE,
        }
    }

    /// The table entry for key index `scancode`, or `None` when the index is past the end of the
    /// table or there is no switch at that position.
    pub fn entry(self, scancode: u8) -> Option<KeyEntry> {
        self.keymap().get(scancode as usize).copied().flatten()
    }

    pub fn keycode(self, scancode: u8) -> Option<u8> {
        self.entry(scancode).map(|e| e.keycode)
    }

    pub fn label(self, scancode: u8) -> Option<&'static str> {
        self.entry(scancode).map(|e| e.label)
    }
}

const fn key(label: &'static str, keycode: u8) -> Option<KeyEntry> {
    Some(KeyEntry { label, keycode })
}

const NO: Option<KeyEntry> = None;

#[rustfmt::skip]
pub static KEYMAP_US: Keymap = [
    // Y0
    key("1", ONE), key("2", TWO), key("3", THREE), key("Z", Z),
    key("4", FOUR), key("5", FIVE), key("6", SIX), key("7", SEVEN),
    // Y1
    key("CMMD", LEFT_GUI), key("Q", Q), key("W", W), key("E", E),
    key("R", R), key("T", T), key("Y", Y), key("~", GRAVE_ACCENT),
    // Y2
    key("X", X), key("A", A), key("S", S), key("D", D),
    key("F", F), key("G", G), key("H", H), key("Space1", SPACE),
    // Y3
    key("CapsLock", CAPS_LOCK), key("Tab", TAB), key("Ctrl", LEFT_CTRL), NO,
    NO, NO, NO, NO,
    // Y4
    NO, NO, key("FN", FN_CARRIER), key("Alt", LEFT_ALT),
    NO, NO, NO, NO,
    // Y5
    NO, NO, NO, NO,
    key("C", C), key("V", V), key("B", B), key("N", N),
    // Y6
    key("-", MINUS), key("+", EQUALS), key("Backspace", BACKSPACE), key("Special1", F13),
    key("8", EIGHT), key("9", NINE), key("0", ZERO), key("Space2", NON_US_BACKSLASH),
    // Y7
    key("[", LEFT_BRACKET), key("]", RIGHT_BRACKET), key("\\", BACKSLASH), key("Special2", F14),
    key("U", U), key("I", I), key("O", O), key("P", P),
    // Y8
    key("'", QUOTE), key("Enter", ENTER), key("Special3", F15), NO,
    key("J", J), key("K", K), key("L", L), key(";", SEMICOLON),
    // Y9
    key("/", SLASH), key("Up", UP_ARROW), key("Special4", F16), NO,
    key("M", M), key(",", COMMA), key(".", PERIOD), key("Done", ESCAPE),
    // Y10
    key("DEL", DELETE), key("Left", LEFT_ARROW), key("Down", DOWN_ARROW), key("Right", RIGHT_ARROW),
    NO, NO, NO, NO,
    // Y11
    key("ShiftL", LEFT_SHIFT), key("ShiftR", RIGHT_SHIFT), NO, NO,
    NO, NO, NO, NO,
];

#[rustfmt::skip]
pub static KEYMAP_DE: Keymap = [
    // Y0
    key("1", ONE), key("2", TWO), key("3", THREE), key("Y", Z),
    key("4", FOUR), key("5", FIVE), key("6", SIX), key("7", SEVEN),
    // Y1
    key("Cmd", LEFT_GUI), key("Q", Q), key("W", W), key("E", E),
    key("R", R), key("T", T), key("Z", Y), key("<", GRAVE_ACCENT),
    // Y2
    key("X", X), key("A", A), key("S", S), key("D", D),
    key("F", F), key("G", G), key("H", H), key("Leer1", SPACE),
    // Y3
    key("CapsLock", CAPS_LOCK), key("Tab", TAB), key("Strg", LEFT_CTRL), NO,
    NO, NO, NO, NO,
    // Y4
    NO, NO, key("Fn", FN_CARRIER), key("Alt", LEFT_ALT),
    NO, NO, NO, NO,
    // Y5
    NO, NO, NO, NO,
    key("C", C), key("V", V), key("B", B), key("N", N),
    // Y6
    key("Sz", MINUS), key("'", EQUALS), key("Backspace", BACKSPACE), key("KALEND", F13),
    key("8", EIGHT), key("9", NINE), key("0", ZERO), key("^", NON_US_BACKSLASH),
    // Y7
    key("Ue", LEFT_BRACKET), key("+", RIGHT_BRACKET), key("#", BACKSLASH), key("ADRESS", F14),
    key("U", U), key("I", I), key("O", O), key("P", P),
    // Y8
    key("Ae", QUOTE), key("Eingabe", ENTER), key("AUFGAB", F15), NO,
    key("J", J), key("K", K), key("L", L), key("Oe", SEMICOLON),
    // Y9
    key("-", SLASH), key("Up", UP_ARROW), key("MEMO", F16), NO,
    key("M", M), key(",", COMMA), key(".", PERIOD), key("Fertig", ESCAPE),
    // Y10
    key("DEL", DELETE), key("Left", LEFT_ARROW), key("Down", DOWN_ARROW), key("Right", RIGHT_ARROW),
    NO, NO, NO, NO,
    // Y11
    key("ShiftL", LEFT_SHIFT), key("ShiftR", RIGHT_SHIFT), NO, NO,
    NO, NO, NO, NO,
];

#[cfg(test)]
#[path = "keymap_test.rs"]
mod test;
