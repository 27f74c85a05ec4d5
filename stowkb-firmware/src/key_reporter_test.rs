use embassy_futures::block_on;
use stowkb_common::keycodes::usage;

use crate::usb_test_stub::{MyDriver, MyEndpointIn};

use super::*;

extern crate std;
use std::vec;

macro_rules! setup {
    ($packets:ident, $rep:ident, $x:tt) => {
        block_on(async {
            let ep_in = MyEndpointIn::default();
            let $packets = ep_in.packets.clone();
            let hid_writer = HidWriter::<'_, MyDriver, NKRO_REPORT_SIZE>::new(ep_in);
            let mut $rep = Reporter::new(hid_writer);

            $x
        });
    };
}

#[test]
fn basic_report() {
    setup!(packets, reporter, {
        reporter.press(usage::B).await.unwrap();
        reporter.press(usage::A).await.unwrap();
        reporter.press(usage::LEFT_ALT).await.unwrap();
        reporter.release(usage::A).await.unwrap();

        assert_eq!(packets.len(), 4);
        assert_eq!(packets.get(0).len(), NKRO_REPORT_SIZE);
        assert_eq!(&packets.get(0)[..5], &vec![6, 0, 32, 0, 0]);
        assert_eq!(&packets.get(1)[..5], &vec![6, 0, 48, 0, 0]);
        assert_eq!(&packets.get(2)[..5], &vec![6, 4, 48, 0, 0]);
        assert_eq!(&packets.get(3)[..5], &vec![6, 4, 32, 0, 0]);
    });
}

#[test]
fn repeated_press_is_retriggered() {
    setup!(packets, reporter, {
        reporter.press(usage::A).await.unwrap();
        reporter.press(usage::A).await.unwrap();

        assert_eq!(packets.len(), 3);
        assert_eq!(&packets.get(1)[..3], &vec![6, 0, 0]);
        assert_eq!(&packets.get(2)[..3], &vec![6, 0, 16]);
    });
}

#[test]
fn function_keys() {
    setup!(packets, reporter, {
        reporter.press(usage::F1).await.unwrap();
        reporter.press(usage::F10).await.unwrap();

        // F1 = 0x3a, F10 = 0x43
        let report = packets.get(1);
        assert_eq!(report[2 + 7], 1 << 2);
        assert_eq!(report[2 + 8], 1 << 3);
        assert_eq!(reporter.report()[..], report[..]);
    });
}

#[test]
fn release_all() {
    setup!(packets, reporter, {
        reporter.press(usage::LEFT_SHIFT).await.unwrap();
        reporter.press(usage::Z).await.unwrap();
        reporter.release_all().await.unwrap();

        let last = packets.get(2);
        assert_eq!(last[0], NKRO_REPORT_ID);
        assert!(last[1..].iter().all(|b| *b == 0));
    });
}

#[test]
fn endpoint_failure() {
    block_on(async {
        let ep_in = MyEndpointIn::default();
        let disabled = ep_in.disabled.clone();
        let packets = ep_in.packets.clone();
        let mut reporter = Reporter::new(HidWriter::<'_, MyDriver, NKRO_REPORT_SIZE>::new(ep_in));

        *disabled.borrow_mut() = true;
        assert_eq!(reporter.press(usage::A).await, Err(HidError::Disabled));
        *disabled.borrow_mut() = false;

        // state still tracked; the next report carries it
        reporter.press(usage::B).await.unwrap();
        assert_eq!(&packets.get(0)[..3], &vec![6, 0, 48]);
    });
}
