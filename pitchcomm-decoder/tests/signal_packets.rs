// Packet-level properties of the PitchSignal wire format
use pitchcomm_decoder::{decode_hex, decode_signal, format_signal, DecoderError, PitchSignal};

#[test]
fn number_bytes_follow_little_endian() {
    for number in [0u16, 1, 10, 255, 256, 0x1234, 0xFFFE, u16::MAX] {
        let signal = PitchSignal {
            signal_type: 0,
            pitch: 1,
            zone: 4,
            pickoff: 0,
            third_sign: 2,
            number,
        };
        let bytes = signal.to_bytes();
        assert_eq!(bytes[5], (number & 0xFF) as u8);
        assert_eq!(bytes[6], ((number >> 8) & 0xFF) as u8);
        assert_eq!(decode_signal(&bytes).unwrap(), signal);
    }
}

#[test]
fn any_seven_byte_prefix_round_trips() {
    let packets: [[u8; 7]; 4] = [
        [0x00, 0x02, 0x05, 0x00, 0x00, 0x0A, 0x00],
        [0x01, 0x04, 0x00, 0x02, 0x03, 0x01, 0x00],
        [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
        [0x07, 0xC8, 0x0C, 0x09, 0x11, 0x80, 0x7F],
    ];
    for packet in packets {
        assert_eq!(decode_signal(&packet).unwrap().to_bytes(), packet);
    }
}

#[test]
fn trailing_bytes_do_not_change_output() {
    let reference = decode_hex("00 02 05 00 00 0A 00").unwrap();
    let padded = decode_hex("00 02 05 00 00 0A 00 FF EE DD").unwrap();
    assert_eq!(reference, padded);
    assert_eq!(format_signal(&reference), format_signal(&padded));
}

#[test]
fn short_and_malformed_input() {
    assert!(matches!(
        decode_hex(""),
        Err(DecoderError::LengthError { actual: 0, .. })
    ));
    assert!(matches!(
        decode_hex("00 02 05 00 00 0A"),
        Err(DecoderError::LengthError { actual: 6, .. })
    ));
    assert!(matches!(
        decode_hex("00 02 05 00 00 0A 0"),
        Err(DecoderError::FormatError(_))
    ));
    assert!(matches!(
        decode_hex("00 02 05 00 00 0A GG"),
        Err(DecoderError::FormatError(_))
    ));
}

#[test]
fn unknown_pitch_renders_fallback() {
    let signal = decode_hex("00 C8 00 00 00 00 00").unwrap();
    assert_eq!(signal.pitch, 200);
    let report = format_signal(&signal);
    assert!(report.contains("Unknown (200)"));
    assert!(report.contains("Color:      N/A"));
}

#[test]
fn description_serializes_to_json() {
    let signal = decode_hex("01 04 00 02 03 01 00").unwrap();
    let json = serde_json::to_value(signal.describe()).unwrap();
    assert_eq!(json["signal_type"], "Reset Signal");
    assert_eq!(json["pickoff"], 2);
    assert_eq!(json["third_sign"], "3C");
    assert_eq!(json["grid"], false);
    assert_eq!(json["raw"]["number"], 1);
}
