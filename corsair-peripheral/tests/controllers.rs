//! Controller behaviour against simulated devices.

use corsair_peripheral::protocol::{self, device, REPORT_SIZE};
use corsair_peripheral::{
    CorsairK100Controller, CorsairK55RgbProController, CorsairPeripheralController, DeviceType,
    KeyboardLayout, KeyboardType, PeripheralError, RgbColor, K100_LED_COUNT,
};
use corsair_transport::mock::{MockBackend, MockDevice};
use corsair_transport::{HidBackend, HidCandidate};

/// Firmware info response as the legacy devices send it
fn firmware_info(class: u8, layout: u8, major: u8, minor: u8) -> Vec<u8> {
    let mut buf = vec![0u8; 64];
    buf[0x08] = minor;
    buf[0x09] = major;
    buf[0x14] = class;
    buf[0x17] = layout;
    buf
}

fn open(pid: u16) -> (MockBackend, MockDevice) {
    let mut backend = MockBackend::new();
    let dev = backend.add_device(HidCandidate::new(
        "/dev/hidraw7",
        device::VENDOR_ID,
        pid,
        1,
        device::USAGE_PAGE_LEGACY,
    ));
    (backend, dev)
}

fn peripheral(pid: u16, response: Option<Vec<u8>>) -> (CorsairPeripheralController, MockDevice) {
    let (backend, dev) = open(pid);
    if let Some(resp) = response {
        dev.push_response(resp);
    }
    let handle = backend.open_path("/dev/hidraw7").unwrap();
    (CorsairPeripheralController::new(handle, pid), dev)
}

#[test]
fn keyboard_is_classified_with_layout_and_firmware() {
    let (ctrl, dev) = peripheral(
        device::PID_K70_RGB_MK2,
        Some(firmware_info(0xC0, 0x01, 3, 5)),
    );

    assert_eq!(ctrl.device_type(), DeviceType::Keyboard);
    assert_eq!(ctrl.logical_layout(), KeyboardLayout::Iso);
    assert_eq!(ctrl.firmware_version(), "3.5");
    assert_eq!(ctrl.location(), "HID: /dev/hidraw7");
    assert_eq!(ctrl.led_count(), 144);

    let writes = dev.writes();
    assert_eq!(writes.len(), 3, "firmware query + special function + lighting control");
    assert_eq!(writes[0].len(), REPORT_SIZE);
    assert_eq!(&writes[0][..3], &[0x00, 0x0E, 0x01]);
    assert_eq!(&writes[1][..4], &[0x00, 0x07, 0x04, 0x02]);
    assert_eq!(&writes[2][..6], &[0x00, 0x07, 0x05, 0x02, 0x00, 0x03]);
}

#[test]
fn mousemat_class_on_st100_is_headset_stand() {
    let (ctrl, _dev) = peripheral(device::PID_ST100, Some(firmware_info(0xC2, 0, 1, 0)));
    assert_eq!(ctrl.device_type(), DeviceType::HeadsetStand);
    assert_eq!(ctrl.led_count(), 9);

    let (ctrl, _dev) = peripheral(
        device::PID_MM800_RGB_POLARIS,
        Some(firmware_info(0xC2, 0, 1, 0)),
    );
    assert_eq!(ctrl.device_type(), DeviceType::Mousemat);
    assert_eq!(ctrl.led_count(), 15);
}

#[test]
fn unknown_class_is_not_initialised() {
    let (ctrl, dev) = peripheral(device::PID_M65, Some(firmware_info(0x42, 0, 1, 0)));
    assert_eq!(ctrl.device_type(), DeviceType::Unknown);
    assert_eq!(ctrl.led_count(), 0);
    assert_eq!(dev.writes().len(), 1, "only the firmware query");
}

#[test]
fn silent_device_is_unknown() {
    let (ctrl, _dev) = peripheral(device::PID_M65, None);
    assert_eq!(ctrl.device_type(), DeviceType::Unknown);
    assert_eq!(ctrl.firmware_version(), "");
    assert!(matches!(
        ctrl.set_leds(&[RgbColor::RED]),
        Err(PeripheralError::TooManyLeds { max: 0, got: 1 })
    ));
}

#[test]
fn mouse_colors_are_indexed_from_one() {
    let (ctrl, dev) = peripheral(device::PID_HARPOON_RGB, Some(firmware_info(0xC1, 0, 2, 1)));
    assert_eq!(ctrl.device_type(), DeviceType::Mouse);
    assert_eq!(ctrl.led_count(), 2);

    ctrl.set_leds(&[RgbColor::new(1, 2, 3), RgbColor::new(4, 5, 6)])
        .unwrap();
    let last = dev.writes().pop().unwrap();
    assert_eq!(
        &last[..13],
        &[0x00, 0x07, 0x22, 2, 0x01, 1, 1, 2, 3, 2, 4, 5, 6]
    );
}

#[test]
fn keyboard_update_streams_three_planes() {
    let (ctrl, dev) = peripheral(device::PID_K95_RGB, Some(firmware_info(0xC0, 0, 1, 0)));
    let before = dev.writes().len();

    ctrl.set_leds(&[RgbColor::new(10, 20, 30)]).unwrap();
    let writes: Vec<_> = dev.writes().into_iter().skip(before).collect();

    // 144 bytes per plane = 60 + 60 + 24, then one submit per plane
    assert_eq!(writes.len(), 12);
    assert_eq!(&writes[0][..6], &[0x00, 0x7F, 1, 60, 0x00, 10]);
    assert_eq!(&writes[2][..4], &[0x00, 0x7F, 3, 24]);
    assert_eq!(&writes[3][..6], &[0x00, 0x07, 0x28, 0x01, 3, 0x02]);
    assert_eq!(writes[4][5], 20);
    assert_eq!(writes[8][5], 30);
    assert_eq!(&writes[11][..6], &[0x00, 0x07, 0x28, 0x03, 3, 0x01]);
}

#[test]
fn dropping_controller_closes_handle_once() {
    let (ctrl, dev) = peripheral(device::PID_M65, Some(firmware_info(0xC1, 0, 1, 0)));
    assert_eq!(dev.open_handles(), 1);
    drop(ctrl);
    assert_eq!(dev.close_count(), 1);
    assert_eq!(dev.open_handles(), 0);
}

#[test]
fn serial_comes_from_handle() {
    let mut backend = MockBackend::new();
    let dev = MockDevice::new().with_serial("0C02A012AF2D98A6");
    backend.add_device_with(
        HidCandidate::new("p", device::VENDOR_ID, device::PID_K55_RGB_PRO, 1, 0xFF42),
        dev,
    );
    let ctrl = CorsairK55RgbProController::new(backend.open_path("p").unwrap());
    assert_eq!(ctrl.serial(), "0C02A012AF2D98A6");
}

fn k100(pid_response: [u8; 2]) -> (CorsairK100Controller, MockDevice) {
    let (backend, dev) = open(device::PID_K100);
    dev.push_response(vec![0x00, 0x02, 0x00, pid_response[0], pid_response[1], 0, 0]);
    dev.push_response(vec![0x00, 0x02, 0x00, 0x0A, 0x01, 0x03, 0x00]);
    let ctrl = CorsairK100Controller::new(backend.open_path("/dev/hidraw7").unwrap());
    (ctrl, dev)
}

#[test]
fn k100_type_register_matches() {
    let (ctrl, dev) = k100(device::PID_K100.to_le_bytes());
    assert_eq!(ctrl.keyboard_type(), KeyboardType::K100);
    assert_eq!(ctrl.firmware_version(), "1.10.3");

    let writes = dev.writes();
    assert_eq!(&writes[0][..4], &[0x00, 0x08, 0x02, 0x12]);
    assert_eq!(&writes[1][..4], &[0x00, 0x08, 0x02, 0x13]);
    let init = protocol::framed_software_mode_reports();
    assert_eq!(writes[2], init[0].to_vec());
    assert_eq!(writes[3], init[1].to_vec());
}

#[test]
fn k100_foreign_product_id_is_unknown() {
    let (ctrl, dev) = k100([0x11, 0x22]);
    assert_eq!(ctrl.keyboard_type(), KeyboardType::Unknown);
    assert_eq!(dev.writes().len(), 1);
}

#[test]
fn k100_update_spans_continuation_packets() {
    let (ctrl, dev) = k100(device::PID_K100.to_le_bytes());
    let before = dev.writes().len();

    let colors = vec![RgbColor::WHITE; K100_LED_COUNT];
    ctrl.set_leds(&colors).unwrap();
    let writes: Vec<_> = dev.writes().into_iter().skip(before).collect();

    // 579 payload bytes: 57 in the first packet, 61 per continuation
    assert_eq!(writes.len(), 10);
    assert_eq!(&writes[0][..6], &[0x00, 0x08, 0x06, 0x01, 0x43, 0x02]);
    assert!(writes[1..].iter().all(|w| w[2] == 0x07));

    let too_many = vec![RgbColor::BLACK; K100_LED_COUNT + 1];
    assert!(ctrl.set_leds(&too_many).is_err());
}

#[test]
fn k55_rgb_pro_single_packet_update() {
    let (backend, dev) = open(device::PID_K55_RGB_PRO);
    let ctrl = CorsairK55RgbProController::new(backend.open_path("/dev/hidraw7").unwrap());
    assert_eq!(ctrl.firmware_version(), "");
    let init: Vec<Vec<u8>> = protocol::framed_software_mode_reports()
        .iter()
        .map(|r| r.to_vec())
        .collect();
    assert_eq!(dev.writes(), init);

    let colors: Vec<_> = (0..6).map(|i| RgbColor::new(i, 0x10 + i, 0x20 + i)).collect();
    ctrl.set_leds(&colors).unwrap();

    let last = dev.writes().pop().unwrap();
    assert_eq!(&last[..8], &[0x00, 0x08, 0x06, 0x01, 18, 0, 0, 0]);
    assert_eq!(&last[8..14], &[0, 1, 2, 3, 4, 5]);
    assert_eq!(&last[14..20], &[0x10, 0x11, 0x12, 0x13, 0x14, 0x15]);
    assert_eq!(&last[20..26], &[0x20, 0x21, 0x22, 0x23, 0x24, 0x25]);
}
