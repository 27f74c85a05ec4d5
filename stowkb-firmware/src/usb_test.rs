extern crate std;
use std::boxed::Box;

use embassy_futures::block_on;
use stowkb_common::keycodes::usage;

use crate::{emitter::KeyboardReport, usb_test_stub::MyDriver};

use super::*;

fn control() -> Control<'static> {
    Control::new(InterfaceNumber(0), &NKRO_REPORT_DESC)
}

fn req(bytes: [u8; 8]) -> Request {
    Request::parse(&bytes)
}

#[test]
fn report_descriptor() {
    let mut control = control();
    let mut buf = [0; 64];
    let resp = control.control_in(req([0x81, 6, 0, 0x22, 0, 0, 59, 0]), &mut buf);
    assert!(matches!(resp, Some(InResponse::Accepted(d)) if d == &NKRO_REPORT_DESC[..]));

    let resp = control.control_in(req([0x81, 6, 0, 0x21, 0, 0, 9, 0]), &mut buf);
    assert!(matches!(resp, Some(InResponse::Accepted(d)) if d.len() == 9 && d[7] == 59));
}

#[test]
fn idle_rate_round_trips() {
    let mut control = control();
    let resp = control.control_out(req([0x21, HID_REQ_SET_IDLE, 0, 125, 0, 0, 0, 0]), &[]);
    assert!(matches!(resp, Some(OutResponse::Accepted)));

    let mut buf = [0; 8];
    let resp = control.control_in(req([0xa1, HID_REQ_GET_IDLE, 0, 0, 0, 0, 1, 0]), &mut buf);
    assert!(matches!(resp, Some(InResponse::Accepted(&[125]))));
}

#[test]
fn boot_protocol_rejected() {
    let mut control = control();
    let resp = control.control_out(req([0x21, HID_REQ_SET_PROTOCOL, 0, 0, 0, 0, 0, 0]), &[]);
    assert!(matches!(resp, Some(OutResponse::Rejected)));
    let resp = control.control_out(req([0x21, HID_REQ_SET_PROTOCOL, 1, 0, 0, 0, 0, 0]), &[]);
    assert!(matches!(resp, Some(OutResponse::Accepted)));
}

#[test]
fn other_interface_ignored() {
    let mut control = control();
    let resp = control.control_out(req([0x21, HID_REQ_SET_IDLE, 0, 0, 1, 0, 0, 0]), &[]);
    assert!(resp.is_none());
}

#[test]
fn keyboard_iface() {
    let mut configurator = Configurator::new(Config::new(0x1209, 0x0001));
    assert_eq!(configurator.max_packet_size(), 64);

    let driver = MyDriver::default();
    let packets = driver.packets.clone();
    let buffers = Box::leak(Box::new(UsbBuffers::default()));
    let state = Box::leak(Box::new(State::new()));

    let mut builder = configurator.usb_builder(driver, buffers).unwrap();
    let mut reporter = configurator.add_keyboard_iface(&mut builder, state);
    let _usb = builder.build();

    assert!(configurator.usb_builder(MyDriver::default(), Box::leak(Box::default())).is_none());

    block_on(async {
        reporter.press(usage::ESCAPE).await.unwrap();
    });
    assert_eq!(packets.len(), 1);
    assert_eq!(packets.get(0)[0], 6);
}
