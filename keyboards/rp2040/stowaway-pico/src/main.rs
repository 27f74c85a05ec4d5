#![no_std]
#![no_main]

use panic_probe as _;

use stowkb_builder::{usb::ConfigBuilder, Locale, ReaderConfig};

// ---------------- User Config ------------------

// USB config
const CONFIG_BUILDER: ConfigBuilder = ConfigBuilder {
    vendor_id: 0x1209,
    product_id: 0x5757,
    manufacturer: "stowkb",
    product: "Stowaway Pico",
    serial_number: "stowkb:0001",
    max_power: 100,
};

// Keyboard module
const READER_CONFIG: ReaderConfig = ReaderConfig::new()
    .ready_timeout_ms(1000)
    .locale(Locale::Us);

// Pins: TX must be assigned even though nothing is sent
stowkb_builder::rp_run_stowaway! {
    uart: UART0, tx: PIN_0, rx: PIN_17, power: PIN_16,
}

// ----------- End of user config ----------------
