//! Tables and constants shared between the Stowaway firmware and its board builder.
//!
//! ```
//! use stowkb_common::{keycodes::usage, keymap::{self, Locale}};
//!
//! let (scancode, is_up) = keymap::split(0x95);
//! assert_eq!((scancode, is_up), (0x15, true));
//! assert_eq!(Locale::Us.keycode(scancode), Some(usage::G));
//! ```
#![no_std]

pub mod keycodes;
pub mod keymap;

pub const SERIAL_BAUDRATE: u32 = 9600;

/// First byte of the ready signature the module sends after power-up.
pub const READY_FIRST: u8 = 0xf9;
/// Second byte of the ready signature.
pub const READY_SECOND: u8 = 0xfb;
