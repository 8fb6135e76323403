//! Display name tables for PitchSignal field codes
//!
//! Each table maps a raw code to its display string. Codes missing from a
//! table are not errors: [`lookup`] falls back to `Unknown (<code>)`.

use std::borrow::Cow;

/// Signal category names (byte 0)
pub const SIGNAL_TYPES: &[(u8, &str)] = &[(0, "Pitch Signal"), (1, "Reset Signal")];

/// Pitch call names (byte 1)
pub const PITCH_NAMES: &[(u8, &str)] = &[
    (0, "Fastball (FB)"),
    (1, "Curveball (CB)"),
    (2, "Changeup (CH)"),
    (3, "Slider (SL)"),
    (4, "Pickoff (PO)"),
    (255, "None"),
];

/// Receiver display color per pitch call
pub const PITCH_COLORS: &[(u8, &str)] = &[
    (0, "Red"),
    (1, "Yellow"),
    (2, "Green"),
    (3, "Cyan"),
    (4, "Magenta"),
];

/// Third sign names (byte 4)
pub const THIRD_SIGN_NAMES: &[(u8, &str)] = &[
    (0, "None"),
    (1, "3A"),
    (2, "3B"),
    (3, "3C"),
    (4, "3D"),
];

/// Look up a code, returning `None` on a miss
pub fn find(table: &[(u8, &'static str)], code: u8) -> Option<&'static str> {
    table
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Look up a code, falling back to `Unknown (<code>)`
pub fn lookup(table: &[(u8, &'static str)], code: u8) -> Cow<'static, str> {
    match find(table, code) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("Unknown ({})", code)),
    }
}

pub fn signal_type_name(code: u8) -> Cow<'static, str> {
    lookup(SIGNAL_TYPES, code)
}

pub fn pitch_name(code: u8) -> Cow<'static, str> {
    lookup(PITCH_NAMES, code)
}

/// Pitch color, or "N/A" when the pitch has no assigned color
pub fn pitch_color(code: u8) -> &'static str {
    find(PITCH_COLORS, code).unwrap_or("N/A")
}

pub fn third_sign_name(code: u8) -> Cow<'static, str> {
    lookup(THIRD_SIGN_NAMES, code)
}
