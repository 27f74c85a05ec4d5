use embassy_futures::block_on;

use crate::usb_test_stub::{MyDriver, MyEndpointIn};

use super::*;

#[test]
fn short_report_is_one_packet() {
    block_on(async {
        let ep_in = MyEndpointIn::default();
        let packets = ep_in.packets.clone();
        let mut writer = HidWriter::<'_, MyDriver, 34>::new(ep_in);

        writer.write(&[6, 1, 2]).await.unwrap();

        assert_eq!(packets.len(), 1);
        assert_eq!(packets.get(0), [6, 1, 2]);
    });
}

#[test]
fn long_report_is_chunked() {
    block_on(async {
        let ep_in = MyEndpointIn::with_max_packet_size(16);
        let packets = ep_in.packets.clone();
        let mut writer = HidWriter::<'_, MyDriver, 34>::new(ep_in);

        writer.write(&[7; 34]).await.unwrap();

        let sizes: std::vec::Vec<usize> = packets.take().iter().map(|p| p.len()).collect();
        assert_eq!(sizes, [16, 16, 2]);
    });
}

#[test]
fn short_multiple_of_packet_needs_zlp() {
    block_on(async {
        let ep_in = MyEndpointIn::with_max_packet_size(16);
        let packets = ep_in.packets.clone();
        let mut writer = HidWriter::<'_, MyDriver, 34>::new(ep_in);

        writer.write(&[1; 16]).await.unwrap();

        assert_eq!(packets.len(), 2);
        assert!(packets.get(1).is_empty());
    });
}

#[test]
fn oversized_report_rejected() {
    block_on(async {
        let ep_in = MyEndpointIn::default();
        let packets = ep_in.packets.clone();
        let mut writer = HidWriter::<'_, MyDriver, 4>::new(ep_in);

        assert_eq!(
            writer.write(&[0; 5]).await,
            Err(EndpointError::BufferOverflow)
        );
        assert!(packets.is_empty());
    });
}

#[test]
fn disabled_endpoint() {
    block_on(async {
        let ep_in = MyEndpointIn::default();
        *ep_in.disabled.borrow_mut() = true;
        let mut writer = HidWriter::<'_, MyDriver, 34>::new(ep_in);

        assert_eq!(writer.write(&[6]).await, Err(EndpointError::Disabled));
    });
}

extern crate std;
