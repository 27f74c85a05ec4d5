pub use embassy_rp::{bind_interrupts, gpio, init, peripherals, uart, usb};

/// Run a Stowaway keyboard on an RP2040.
///
/// This macro adds a `main` function that powers up the keyboard module, exposes a USB keyboard
/// and forwards every key. The calling crate must define two constants:
///
/// * `CONFIG_BUILDER: stowkb_builder::usb::ConfigBuilder`: the USB identity.
/// * `READER_CONFIG: stowkb_builder::ReaderConfig`: handshake timing and locale.
///
/// The module talks 9600 baud 8N1 on `rx`. `tx` is claimed by the UART but never written.
///
/// # Example `main.rs`
///
/// ```rust
/// #![no_std]
/// #![no_main]
///
/// use stowkb_builder::{usb::ConfigBuilder, ReaderConfig};
///
/// const CONFIG_BUILDER: ConfigBuilder = ConfigBuilder { /* ... */ };
/// const READER_CONFIG: ReaderConfig = ReaderConfig::new().ready_timeout_ms(1000);
///
/// stowkb_builder::rp_run_stowaway! {
///     uart: UART0, tx: PIN_0, rx: PIN_17, power: PIN_16,
/// }
/// ```
#[macro_export]
macro_rules! rp_run_stowaway {
    (uart: $uart:ident, tx: $tx:ident, rx: $rx:ident, power: $power:ident $(,)?) => {
        use stowkb_builder::rp;
        use rp::{
            bind_interrupts,
            gpio::{Level, Output},
            peripherals::{$uart, USB},
            uart::{self, Blocking, Uart, UartRx},
            usb::{Driver, InterruptHandler},
        };
        use stowkb_builder::StaticCell;
        use stowkb_builder::{ReaderSession, Reporter, UsbBuffers, UsbConfigurator, UsbState};

        type Session = ReaderSession<
            UartRx<'static, $uart, Blocking>,
            Output<'static>,
            Reporter<'static, Driver<'static, USB>>,
        >;

        static USB_BUFFERS: StaticCell<UsbBuffers> = StaticCell::new();
        static USB_CONFIG: StaticCell<UsbConfigurator> = StaticCell::new();
        static KEYBOARD_STATE: StaticCell<UsbState> = StaticCell::new();

        bind_interrupts!(struct Irqs {
            USBCTRL_IRQ => InterruptHandler<USB>;
        });

        #[embassy_executor::task]
        async fn reader(mut session: Session) {
            session.run().await
        }

        #[embassy_executor::main]
        async fn main(spawner: embassy_executor::Spawner) -> ! {
            let p = rp::init(Default::default());

            let mut uart_config = uart::Config::default();
            uart_config.baudrate = stowkb_builder::SERIAL_BAUDRATE;
            let serial = Uart::new_blocking(p.$uart, p.$tx, p.$rx, uart_config);
            let (_tx, rx) = serial.split();
            let power = Output::new(p.$power, Level::Low);

            let keyboard_state: &'static mut UsbState<'static> = KEYBOARD_STATE.init(UsbState::default());
            let driver = Driver::new(p.USB, Irqs);

            let usb_buffers: &'static mut UsbBuffers = USB_BUFFERS.init(UsbBuffers::default());
            let usb_config: &'static mut UsbConfigurator =
                USB_CONFIG.init(CONFIG_BUILDER.usb_configurator());

            let usb_builder = usb_config.usb_builder(driver, usb_buffers).unwrap();

            let (reporter, usb_builder) =
                CONFIG_BUILDER.keyboard_hid_iface(usb_config, keyboard_state, usb_builder);

            let mut usb = usb_builder.build();

            let session = Session::new(rx, power, reporter, READER_CONFIG).unwrap();

            spawner.spawn(reader(session)).unwrap();

            usb.run().await
        }
    };
}
