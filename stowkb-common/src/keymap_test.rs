use crate::keycodes::{key_range, usage};

use super::*;

extern crate std;

#[test]
fn locales_share_keycodes() {
    for (i, (us, de)) in KEYMAP_US.iter().zip(KEYMAP_DE.iter()).enumerate() {
        assert_eq!(
            us.map(|e| e.keycode),
            de.map(|e| e.keycode),
            "keycode mismatch at index {i}"
        );
    }
}

#[test]
fn lookup_known_keys() {
    assert_eq!(Locale::Us.keycode(0), Some(usage::ONE));
    assert_eq!(Locale::Us.keycode(3), Some(usage::Z));
    assert_eq!(Locale::Us.keycode(0x15), Some(usage::G));
    assert_eq!(Locale::Us.keycode(0x36), Some(usage::ZERO));
    assert_eq!(Locale::Us.keycode(0x4f), Some(usage::ESCAPE));
    assert_eq!(Locale::Us.keycode(0x58), Some(usage::LEFT_SHIFT));

    assert_eq!(Locale::Us.label(3), Some("Z"));
    assert_eq!(Locale::De.label(3), Some("Y"));
    assert_eq!(Locale::De.label(0x4f), Some("Fertig"));
}

#[test]
fn vendor_keys_are_f13_to_f16() {
    let specials: std::vec::Vec<u8> = (0..KEYMAP_LEN as u8)
        .filter(|i| Locale::Us.label(*i).is_some_and(|l| l.starts_with("Special")))
        .map(|i| Locale::Us.keycode(i).unwrap())
        .collect();

    assert_eq!(specials, [usage::F13, usage::F14, usage::F15, usage::F16]);
}

#[test]
fn fn_carrier_is_single_slot() {
    let slots: std::vec::Vec<usize> = KEYMAP_US
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_some_and(|e| e.keycode == FN_CARRIER))
        .map(|(i, _)| i)
        .collect();

    assert_eq!(slots, [34]);
    assert_eq!(Locale::Us.label(34), Some("FN"));
}

#[test]
fn missing_entries() {
    assert_eq!(Locale::Us.entry(27), None);
    assert_eq!(Locale::Us.entry(95), None);
    assert_eq!(Locale::Us.entry(KEYMAP_LEN as u8), None);
    assert_eq!(Locale::Us.entry(0x7f), None);
    assert_eq!(Locale::De.entry(0x7f), None);
}

#[test]
fn ten_digit_keys() {
    let digits = KEYMAP_US
        .iter()
        .flatten()
        .filter(|e| key_range::is_digit(e.keycode))
        .count();
    assert_eq!(digits, 10);
}

#[test]
fn split_raw() {
    assert_eq!(split(0x15), (0x15, false));
    assert_eq!(split(0x95), (0x15, true));
    assert_eq!(split(0xff), (0x7f, true));
    assert_eq!(split(0x00), (0x00, false));
}
