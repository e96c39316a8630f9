//! Protocol constants and packet builders for Corsair peripherals
//!
//! Two wire formats are in use:
//!
//! - the legacy protocol (`0x07` write / `0x0E` read / `0x7F` stream) spoken by
//!   the K55..K95 keyboards, mice, mousepads and headset stands on usage page
//!   `0xFFC2`
//! - the framed protocol (`0x08` prefix) spoken by the K100 and K55 RGB PRO on
//!   usage page `0xFF42`
//!
//! All reports are 65 bytes including the leading report ID (always 0).

/// Output report size including report ID
pub const REPORT_SIZE: usize = 65;

/// Input report size (report ID is not returned on reads)
pub const RESPONSE_SIZE: usize = 64;

/// USB identifiers
pub mod device {
    pub const VENDOR_ID: u16 = 0x1B1C;

    // Keyboards
    pub const PID_K55_RGB: u16 = 0x1B3D;
    pub const PID_K65_RGB: u16 = 0x1B17;
    pub const PID_K65_LUX_RGB: u16 = 0x1B37;
    pub const PID_K65_RGB_RAPIDFIRE: u16 = 0x1B39;
    pub const PID_K68_RGB: u16 = 0x1B4F;
    pub const PID_K70_RGB: u16 = 0x1B13;
    pub const PID_K70_LUX_RGB: u16 = 0x1B33;
    pub const PID_K70_RGB_RAPIDFIRE: u16 = 0x1B38;
    pub const PID_K70_RGB_MK2: u16 = 0x1B49;
    pub const PID_K70_RGB_MK2_SE: u16 = 0x1B6B;
    pub const PID_K70_RGB_MK2_LP: u16 = 0x1B55;
    pub const PID_K95_RGB: u16 = 0x1B11;
    pub const PID_K95_PLATINUM: u16 = 0x1B2D;
    pub const PID_STRAFE: u16 = 0x1B20;
    pub const PID_STRAFE_RED: u16 = 0x1B44;
    pub const PID_STRAFE_MK2: u16 = 0x1B48;

    // Mice
    pub const PID_GLAIVE_RGB: u16 = 0x1B34;
    pub const PID_GLAIVE_RGB_PRO: u16 = 0x1B74;
    pub const PID_HARPOON_RGB: u16 = 0x1B3C;
    pub const PID_HARPOON_RGB_PRO: u16 = 0x1B75;
    pub const PID_IRONCLAW_RGB: u16 = 0x1B5D;
    pub const PID_M65: u16 = 0x1B12;
    pub const PID_M65_PRO: u16 = 0x1B2E;
    pub const PID_M65_RGB_ELITE: u16 = 0x1B5A;
    pub const PID_NIGHTSWORD: u16 = 0x1B5C;
    pub const PID_SCIMITAR_PRO_RGB: u16 = 0x1B3E;
    pub const PID_SABRE_RGB: u16 = 0x1B2F;

    // Mousemat / headset stand
    pub const PID_MM800_RGB_POLARIS: u16 = 0x1B3B;
    pub const PID_ST100: u16 = 0x0A34;

    // Framed-protocol keyboards (separate drivers)
    pub const PID_K100: u16 = 0x1B7C;
    pub const PID_K55_RGB_PRO: u16 = 0x1BA4;

    /// Vendor usage page of the legacy lighting interface
    pub const USAGE_PAGE_LEGACY: u16 = 0xFFC2;

    /// Vendor usage page of the framed-protocol lighting interface
    pub const USAGE_PAGE_FRAMED: u16 = 0xFF42;

    /// Lighting interface number on keyboards and mice
    pub const INTERFACE_LIGHTING: i32 = 1;

    /// Lighting interface number on single-interface devices
    pub const INTERFACE_PRIMARY: i32 = 0;

    /// Number of LEDs on a legacy-protocol mouse, by PID
    pub fn mouse_led_count(pid: u16) -> usize {
        match pid {
            PID_HARPOON_RGB | PID_HARPOON_RGB_PRO | PID_NIGHTSWORD => 2,
            PID_SCIMITAR_PRO_RGB | PID_SABRE_RGB => 4,
            PID_M65 | PID_M65_PRO | PID_M65_RGB_ELITE => 2,
            _ => 3,
        }
    }
}

/// Legacy protocol command bytes
pub mod cmd {
    pub const WRITE: u8 = 0x07;
    pub const READ: u8 = 0x0E;
    pub const STREAM: u8 = 0x7F;
}

/// Legacy protocol properties (second byte after the command)
pub mod property {
    pub const FIRMWARE_INFO: u8 = 0x01;
    pub const SPECIAL_FUNCTION: u8 = 0x04;
    pub const LIGHTING_CONTROL: u8 = 0x05;
    pub const SUBMIT_MOUSE_COLOR: u8 = 0x22;
    pub const SUBMIT_KEYBOARD_COLOR_24: u8 = 0x28;
}

/// Lighting / special function control values
pub mod control {
    pub const SOFTWARE: u8 = 0x02;
}

/// Color planes for 24-bit keyboard updates
pub mod color_channel {
    pub const RED: u8 = 0x01;
    pub const GREEN: u8 = 0x02;
    pub const BLUE: u8 = 0x03;
}

/// Offsets and values in the firmware info response
pub mod firmware_info {
    pub const VERSION_MINOR: usize = 0x08;
    pub const VERSION_MAJOR: usize = 0x09;
    pub const DEVICE_CLASS: usize = 0x14;
    pub const LAYOUT: usize = 0x17;

    pub const CLASS_KEYBOARD: u8 = 0xC0;
    pub const CLASS_MOUSE: u8 = 0xC1;
    pub const CLASS_MOUSEMAT: u8 = 0xC2;
}

/// Framed protocol constants
pub mod framed {
    pub const PREFIX: u8 = 0x08;

    pub const SET: u8 = 0x01;
    pub const GET: u8 = 0x02;
    pub const WRITE_DATA: u8 = 0x06;
    pub const CONTINUE_DATA: u8 = 0x07;
    pub const OPEN_ENDPOINT: u8 = 0x0D;

    pub const PROP_MODE: u8 = 0x03;
    pub const PROP_PRODUCT_ID: u8 = 0x12;
    pub const PROP_FIRMWARE: u8 = 0x13;

    pub const MODE_SOFTWARE: u8 = 0x02;

    pub const ENDPOINT_LIGHTING: u8 = 0x01;

    /// Payload bytes in the first WRITE_DATA packet
    pub const FIRST_CHUNK: usize = super::REPORT_SIZE - 8;
    /// Payload bytes in each CONTINUE_DATA packet
    pub const NEXT_CHUNK: usize = super::REPORT_SIZE - 4;
}

/// Timing constants
pub mod timing {
    /// Upper bound for a classification read
    pub const READ_TIMEOUT_MS: i32 = 1000;
}

/// Build a 65-byte output report: report ID 0 followed by `bytes`
///
/// `bytes` longer than the report are truncated.
pub fn build_report(bytes: &[u8]) -> [u8; REPORT_SIZE] {
    let mut buf = [0u8; REPORT_SIZE];
    let n = bytes.len().min(REPORT_SIZE - 1);
    buf[1..=n].copy_from_slice(&bytes[..n]);
    buf
}

/// Framed-protocol reports switching the device to software control and
/// opening the lighting endpoint
pub fn framed_software_mode_reports() -> [[u8; REPORT_SIZE]; 2] {
    [
        build_report(&[
            framed::PREFIX,
            framed::SET,
            framed::PROP_MODE,
            0x00,
            framed::MODE_SOFTWARE,
        ]),
        build_report(&[
            framed::PREFIX,
            framed::OPEN_ENDPOINT,
            framed::ENDPOINT_LIGHTING,
            0x01,
        ]),
    ]
}

/// Split a color payload into framed WRITE_DATA / CONTINUE_DATA reports
pub fn framed_data_reports(endpoint: u8, payload: &[u8]) -> Vec<[u8; REPORT_SIZE]> {
    let len = payload.len() as u16;
    let first_len = payload.len().min(framed::FIRST_CHUNK);
    let (first, rest) = payload.split_at(first_len);

    let mut header = vec![
        framed::PREFIX,
        framed::WRITE_DATA,
        endpoint,
        (len & 0xFF) as u8,
        (len >> 8) as u8,
        0x00,
        0x00,
    ];
    header.extend_from_slice(first);

    let mut reports = vec![build_report(&header)];
    for chunk in rest.chunks(framed::NEXT_CHUNK) {
        let mut packet = vec![framed::PREFIX, framed::CONTINUE_DATA, endpoint];
        packet.extend_from_slice(chunk);
        reports.push(build_report(&packet));
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_report_prefixes_report_id() {
        let buf = build_report(&[cmd::READ, property::FIRMWARE_INFO]);
        assert_eq!(buf.len(), REPORT_SIZE);
        assert_eq!(&buf[..3], &[0x00, 0x0E, 0x01]);
        assert!(buf[3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_build_report_truncates() {
        let buf = build_report(&[0xAB; 100]);
        assert_eq!(buf[0], 0);
        assert_eq!(buf[64], 0xAB);
    }

    #[test]
    fn test_framed_software_mode_reports() {
        let [mode, open] = framed_software_mode_reports();
        assert_eq!(&mode[..6], &[0x00, 0x08, 0x01, 0x03, 0x00, 0x02]);
        assert_eq!(&open[..5], &[0x00, 0x08, 0x0D, 0x01, 0x01]);
    }

    #[test]
    fn test_framed_single_packet() {
        let payload = [0x11u8; 18];
        let reports = framed_data_reports(framed::ENDPOINT_LIGHTING, &payload);
        assert_eq!(reports.len(), 1);
        assert_eq!(&reports[0][..8], &[0x00, 0x08, 0x06, 0x01, 18, 0, 0, 0]);
        assert_eq!(&reports[0][8..26], &payload);
        assert_eq!(reports[0][26], 0);
    }

    #[test]
    fn test_framed_continuation_packets() {
        // 57 in the first packet, then 61 per continuation
        let payload: Vec<u8> = (0..200u16).map(|i| i as u8).collect();
        let reports = framed_data_reports(framed::ENDPOINT_LIGHTING, &payload);
        assert_eq!(reports.len(), 4);
        assert_eq!(reports[0][4], 200);
        assert_eq!(reports[0][5], 0);
        assert_eq!(reports[0][8], 0);
        assert_eq!(reports[0][64], 56);
        assert_eq!(&reports[1][..4], &[0x00, 0x08, 0x07, 0x01]);
        assert_eq!(reports[1][4], 57);
        assert_eq!(reports[3][4], 57 + 61 * 2);
    }

    #[test]
    fn test_mouse_led_counts() {
        assert_eq!(device::mouse_led_count(device::PID_HARPOON_RGB), 2);
        assert_eq!(device::mouse_led_count(device::PID_SCIMITAR_PRO_RGB), 4);
        assert_eq!(device::mouse_led_count(device::PID_GLAIVE_RGB), 3);
    }
}
