//!Decoding of captured HID input reports

use num_enum::{IntoPrimitive, TryFromPrimitive};
use packed_struct::PackingError;

pub mod consumer;

/// Report IDs of the multi-report descriptor family emitted by the firmware
///
/// Each raw report on the wire leads with one of these bytes; dispatch code
/// matches it against a decoder's `REPORT_ID` to select the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ReportId {
    Mouse = 0x01,
    Keyboard = 0x02,
    RawHid = 0x03,
    ConsumerControl = 0x04,
    SystemControl = 0x05,
    Gamepad = 0x06,
    AbsoluteMouse = 0x07,
    NkroKeyboard = 0x08,
}

/// Failure while decoding a captured report buffer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DecodeError {
    /// The buffer holds fewer bytes than the report layout occupies
    ReportTooShort { expected: usize, actual: usize },
    /// The fixed layout rejected the buffer
    Data(PackingError),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn report_id_round_trip() {
        assert_eq!(u8::from(ReportId::ConsumerControl), 0x04);
        assert_eq!(ReportId::try_from(0x04).unwrap(), ReportId::ConsumerControl);
        assert_eq!(ReportId::try_from(0x08).unwrap(), ReportId::NkroKeyboard);
    }

    #[test]
    fn unknown_report_id_rejected() {
        assert!(ReportId::try_from(0x00).is_err());
        assert!(ReportId::try_from(0x09).is_err());
        assert!(ReportId::try_from(0xFF).is_err());
    }
}
