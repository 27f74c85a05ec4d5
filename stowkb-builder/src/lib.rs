#![no_std]

#[cfg(feature = "rp")]
pub mod rp;
pub mod usb;

#[cfg(feature = "defmt")]
use defmt_rtt as _;

pub use static_cell::StaticCell;
pub use stowkb_common::{keymap::Locale, SERIAL_BAUDRATE};
pub use stowkb_firmware::*;

pub use stowkb_firmware::key_reporter::Reporter;
pub use stowkb_firmware::usb::{
    Configurator as UsbConfigurator, State as UsbState, UsbBuffers,
};
