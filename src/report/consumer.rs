//!Consumer control report capture views

use heapless::Vec;
use log::error;
use packed_struct::prelude::*;

use crate::page::Consumer;
use crate::report::{DecodeError, ReportId};

///Consumer control report descriptor - four `u16` consumer control usage
///codes as an array, prefixed with report ID 4
#[rustfmt::skip]
pub const CONSUMER_CONTROL_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x0C,       // Usage Page (Consumer),
    0x09, 0x01,       // Usage (Consumer Control),
    0xA1, 0x01,       // Collection (Application),
    0x85, 0x04,       //     Report ID (4),
    0x75, 0x10,       //     Report Size (16),
    0x95, 0x04,       //     Report Count (4),
    0x15, 0x00,       //     Logical Minimum (0),
    0x26, 0x9C, 0x02, //     Logical Maximum (0x029C),
    0x19, 0x00,       //     Usage Minimum (0),
    0x2A, 0x9C, 0x02, //     Usage Maximum (0x029C),
    0x81, 0x00,       //     Input (Array, Data, Variable),
    0xC0,             // End Collection
];

const REPORT_BYTES: usize = 8;

/// Binary layout of the consumer control report payload
///
/// Eight bytes: four little-endian `u16` slots, each holding one consumer
/// usage code or 0 when the slot is empty. This table is the wire contract
/// shared with the firmware encoding the report:
///
/// | offset | width | field |
/// |--------|-------|-------|
/// | 0      | 2     | key1  |
/// | 2      | 2     | key2  |
/// | 4      | 2     | key3  |
/// | 6      | 2     | key4  |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, PackedStruct)]
#[packed_struct(bit_numbering = "msb0", endian = "lsb", size_bytes = "8")]
pub struct ConsumerControlReportData {
    #[packed_field(bytes = "0..=1")]
    pub key1: u16,
    #[packed_field(bytes = "2..=3")]
    pub key2: u16,
    #[packed_field(bytes = "4..=5")]
    pub key3: u16,
    #[packed_field(bytes = "6..=7")]
    pub key4: u16,
}

/// Immutable view of one captured consumer control report
///
/// Pairs the raw payload, copied out of the capture buffer at construction,
/// with the timestamp the capture was taken at. Key state is derived from
/// the stored payload on every accessor call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsumerControlReport {
    timestamp: u32,
    data: ConsumerControlReportData,
}

impl ConsumerControlReport {
    /// Report ID dispatch code matches against the leading byte of a raw
    /// report to route it to this decoder
    pub const REPORT_ID: ReportId = ReportId::ConsumerControl;

    /// Decode a captured report payload
    ///
    /// `data` is the report payload with the report ID byte already
    /// stripped. The first eight bytes are copied; surplus bytes are
    /// ignored. Byte content is never rejected - usage codes outside the
    /// consumer page pass through to [`Self::active_keycodes`] unchanged.
    pub fn decode(timestamp: u32, data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() < REPORT_BYTES {
            error!(
                "Consumer control report too short: {} of {} bytes",
                data.len(),
                REPORT_BYTES
            );
            return Err(DecodeError::ReportTooShort {
                expected: REPORT_BYTES,
                actual: data.len(),
            });
        }
        let data = ConsumerControlReportData::unpack_from_slice(&data[..REPORT_BYTES]).map_err(
            |e| {
                error!("Error unpacking ConsumerControlReportData: {:?}", e);
                DecodeError::Data(e)
            },
        )?;
        Ok(Self { timestamp, data })
    }

    /// Capture timestamp supplied at construction, unchanged
    pub fn timestamp(&self) -> u32 {
        self.timestamp
    }

    pub fn data(&self) -> &ConsumerControlReportData {
        &self.data
    }

    /// Usage codes of the currently held keys, in slot order
    ///
    /// Non-zero slots only; an all-zero report (no keys held) yields an
    /// empty vec. Slot order is the fixed field order of the layout, not
    /// sorted by code value.
    pub fn active_keycodes(&self) -> Vec<u16, 4> {
        [
            self.data.key1,
            self.data.key2,
            self.data.key3,
            self.data.key4,
        ]
        .into_iter()
        .filter(|&k| k != 0)
        .collect()
    }

    /// Active keycodes resolved to [`Consumer`] usages, in slot order
    ///
    /// Codes in reserved ranges of the consumer page have no usage and are
    /// omitted here; [`Self::active_keycodes`] retains them.
    pub fn active_usages(&self) -> Vec<Consumer, 4> {
        self.active_keycodes()
            .into_iter()
            .filter_map(Consumer::from_primitive)
            .collect()
    }

    /// True if any slot holds `usage`
    pub fn pressed(&self, usage: Consumer) -> bool {
        let code = usage.to_primitive();
        code != 0 && self.active_keycodes().contains(&code)
    }
}

#[cfg(test)]
mod test {
    use env_logger::Env;

    use super::*;

    fn init_logging() {
        let _ = env_logger::Builder::from_env(Env::default().default_filter_or("trace"))
            .is_test(true)
            .try_init();
    }

    const NO_KEYS: [u8; 8] = [0; 8];

    #[test]
    fn timestamp_returned_unchanged() {
        let report = ConsumerControlReport::decode(0x1234_5678, &NO_KEYS).unwrap();
        assert_eq!(report.timestamp(), 0x1234_5678);
    }

    #[test]
    fn all_zero_report_has_no_active_keycodes() {
        let report = ConsumerControlReport::decode(0, &NO_KEYS).unwrap();
        assert!(report.active_keycodes().is_empty());
        assert!(report.active_usages().is_empty());
        assert_eq!(report.data(), &ConsumerControlReportData::default());
    }

    #[test]
    fn single_keycode_in_first_slot() {
        let report = ConsumerControlReport::decode(0, &[0xE9, 0x00, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(report.active_keycodes(), &[0x00E9]);
        assert_eq!(report.active_usages(), &[Consumer::VolumeIncrement]);
        assert!(report.pressed(Consumer::VolumeIncrement));
        assert!(!report.pressed(Consumer::VolumeDecrement));
    }

    #[test]
    fn keycodes_wider_than_one_byte_decode_little_endian() {
        let report = ConsumerControlReport::decode(0, &[0xB4, 0x01, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(report.active_keycodes(), &[0x01B4]);
        assert_eq!(report.active_usages(), &[Consumer::ALFileBrowser]);
    }

    #[test]
    fn keycodes_follow_slot_order_not_code_order() {
        let report = ConsumerControlReport::decode(
            0,
            &[0xE9, 0x00, 0xB5, 0x00, 0xCD, 0x00, 0xE2, 0x00],
        )
        .unwrap();
        assert_eq!(report.active_keycodes(), &[0x00E9, 0x00B5, 0x00CD, 0x00E2]);
        assert_eq!(
            report.active_usages(),
            &[
                Consumer::VolumeIncrement,
                Consumer::ScanNextTrack,
                Consumer::PlayPause,
                Consumer::Mute,
            ]
        );
    }

    #[test]
    fn empty_slots_between_keys_are_skipped() {
        let report = ConsumerControlReport::decode(
            0,
            &[0xCD, 0x00, 0x00, 0x00, 0xE2, 0x00, 0x00, 0x00],
        )
        .unwrap();
        assert_eq!(report.active_keycodes(), &[0x00CD, 0x00E2]);
    }

    #[test]
    fn keycodes_and_timestamp_are_independent() {
        let first_buffer = [0xCD, 0x00, 0, 0, 0, 0, 0, 0];
        let second_buffer = [0xCD, 0x00, 0, 0, 0, 0, 0, 0];
        let first = ConsumerControlReport::decode(100, &first_buffer).unwrap();
        let second = ConsumerControlReport::decode(200, &second_buffer).unwrap();
        assert_eq!(first.active_keycodes(), second.active_keycodes());
        assert_ne!(first.timestamp(), second.timestamp());
    }

    #[test]
    fn repeated_reads_agree() {
        let report = ConsumerControlReport::decode(0, &[0xB6, 0x00, 0xB7, 0x00, 0, 0, 0, 0]).unwrap();
        assert_eq!(report.active_keycodes(), report.active_keycodes());
        assert_eq!(report.active_usages(), report.active_usages());
    }

    #[test]
    fn short_buffer_is_rejected() {
        init_logging();
        assert_eq!(
            ConsumerControlReport::decode(0, &[0xE9, 0x00]),
            Err(DecodeError::ReportTooShort {
                expected: 8,
                actual: 2,
            })
        );
        assert_eq!(
            ConsumerControlReport::decode(0, &[]),
            Err(DecodeError::ReportTooShort {
                expected: 8,
                actual: 0,
            })
        );
    }

    #[test]
    fn surplus_bytes_are_ignored() {
        let exact = ConsumerControlReport::decode(7, &[0xEA, 0x00, 0, 0, 0, 0, 0, 0]).unwrap();
        let padded =
            ConsumerControlReport::decode(7, &[0xEA, 0x00, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF]).unwrap();
        assert_eq!(exact, padded);
    }

    #[test]
    fn reserved_codes_pass_through_raw() {
        // 0x0110 sits in a reserved range of the consumer page
        let report = ConsumerControlReport::decode(0, &[0x10, 0x01, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(report.active_keycodes(), &[0x0110]);
        assert!(report.active_usages().is_empty());
        assert!(!report.pressed(Consumer::Unassigned));
    }

    #[test]
    fn report_id_matches_descriptor() {
        assert_eq!(u8::from(ConsumerControlReport::REPORT_ID), 0x04);
        // the descriptor declares the same ID after its 0x85 tag
        let report_id_tag = CONSUMER_CONTROL_REPORT_DESCRIPTOR
            .windows(2)
            .find(|w| w[0] == 0x85)
            .unwrap();
        assert_eq!(report_id_tag[1], 0x04);
    }
}
