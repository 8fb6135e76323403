//! PitchSignal packet decoding and encoding
//!
//! Layout (7 bytes, no header, no checksum):
//!
//! | Offset | Field       | Width |
//! |--------|-------------|-------|
//! | 0      | type        | u8    |
//! | 1      | pitch       | u8    |
//! | 2      | zone        | u8    |
//! | 3      | pickoff     | u8    |
//! | 4      | thirdSign   | u8    |
//! | 5-6    | number      | u16 LE|

use crate::hex::parse_hex_string;
use crate::types::{DecoderError, PitchSignal, Result, SIGNAL_SIZE};
use byteorder::{ByteOrder, LittleEndian};

/// Decode a PitchSignal from raw packet bytes
///
/// Any byte value is accepted. Bytes past the seventh are ignored.
///
/// # Example
/// ```
/// use pitchcomm_decoder::decode_signal;
///
/// let signal = decode_signal(&[0x00, 0x02, 0x05, 0x00, 0x00, 0x0A, 0x00]).unwrap();
/// assert_eq!(signal.zone, 5);
/// assert_eq!(signal.number, 10);
/// ```
pub fn decode_signal(data: &[u8]) -> Result<PitchSignal> {
    if data.len() < SIGNAL_SIZE {
        return Err(DecoderError::LengthError {
            expected: SIGNAL_SIZE,
            actual: data.len(),
        });
    }

    if data.len() > SIGNAL_SIZE {
        log::debug!(
            "Ignoring {} trailing byte(s) after PitchSignal",
            data.len() - SIGNAL_SIZE
        );
    }

    let signal = PitchSignal {
        signal_type: data[0],
        pitch: data[1],
        zone: data[2],
        pickoff: data[3],
        third_sign: data[4],
        number: LittleEndian::read_u16(&data[5..7]),
    };

    log::debug!("Decoded signal: {:?}", signal);
    Ok(signal)
}

/// Parse a hex string and decode it as a PitchSignal
pub fn decode_hex(input: &str) -> Result<PitchSignal> {
    let bytes = parse_hex_string(input)?;
    decode_signal(&bytes)
}

impl PitchSignal {
    /// Decode from raw bytes (see [`decode_signal`])
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        decode_signal(data)
    }

    /// Encode into the 7-byte wire representation
    pub fn to_bytes(&self) -> [u8; SIGNAL_SIZE] {
        let mut buf = [0u8; SIGNAL_SIZE];
        buf[0] = self.signal_type;
        buf[1] = self.pitch;
        buf[2] = self.zone;
        buf[3] = self.pickoff;
        buf[4] = self.third_sign;
        LittleEndian::write_u16(&mut buf[5..7], self.number);
        buf
    }
}
