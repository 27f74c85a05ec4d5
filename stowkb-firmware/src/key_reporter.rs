use embassy_usb::driver::Driver;
use stowkb_common::keycodes::key_range;

use crate::{
    add_key_bit, del_key_bit,
    emitter::{HidError, KeyboardReport},
    hid::HidWriter,
};

pub const NKRO_REPORT_ID: u8 = 6;
pub const NKRO_REPORT_SIZE: usize = crate::KEY_BITS_SIZE + 2;

/// Keeps the NKRO report (`[id, modifiers, key bitmap]`) and sends it whenever a key changes.
pub struct Reporter<'d, D: Driver<'d>> {
    hid_writer: HidWriter<'d, D, NKRO_REPORT_SIZE>,
    keyboard_report: [u8; NKRO_REPORT_SIZE],
}

impl<'d, D: Driver<'d>> Reporter<'d, D> {
    pub fn new(hid_writer: HidWriter<'d, D, NKRO_REPORT_SIZE>) -> Self {
        let mut keyboard_report = [0; NKRO_REPORT_SIZE];
        keyboard_report[0] = NKRO_REPORT_ID;
        Self {
            hid_writer,
            keyboard_report,
        }
    }

    pub fn report(&self) -> &[u8; NKRO_REPORT_SIZE] {
        &self.keyboard_report
    }

    async fn write_keyboard_report(&mut self) -> Result<(), HidError> {
        Ok(self.hid_writer.write(&self.keyboard_report).await?)
    }

    fn add_key(&mut self, key: u8) -> bool {
        if key_range::is_modifier(key) {
            let bit = key_range::modifier_bit(key);
            let old = self.keyboard_report[1];
            self.keyboard_report[1] |= bit;
            return old & bit == 0;
        }
        if key_range::is_basic(key) {
            add_key_bit(&mut self.keyboard_report[2..], key)
        } else {
            true
        }
    }

    fn remove_key(&mut self, key: u8) {
        if key_range::is_modifier(key) {
            self.keyboard_report[1] &= !key_range::modifier_bit(key);
            return;
        }
        if key_range::is_basic(key) {
            del_key_bit(&mut self.keyboard_report[2..], key);
        }
    }
}

impl<'d, D: Driver<'d>> KeyboardReport for Reporter<'d, D> {
    async fn press(&mut self, keycode: u8) -> Result<(), HidError> {
        if !self.add_key(keycode) {
            // already down: let the host see it go up first so the repeat registers
            self.remove_key(keycode);
            self.write_keyboard_report().await?;
            self.add_key(keycode);
        }
        self.write_keyboard_report().await
    }

    async fn release(&mut self, keycode: u8) -> Result<(), HidError> {
        self.remove_key(keycode);
        self.write_keyboard_report().await
    }

    async fn release_all(&mut self) -> Result<(), HidError> {
        self.keyboard_report.iter_mut().skip(1).for_each(|b| *b = 0);
        self.write_keyboard_report().await
    }
}

#[cfg(test)]
#[path = "key_reporter_test.rs"]
mod test;
