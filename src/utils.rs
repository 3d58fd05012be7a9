use crate::register::AngleRegister;

/// Counts per revolution of the 12-bit angle field
pub const ANGLE_RESOLUTION: u16 = 0x0FFF + 1;

/// Combine the two response bytes, first byte most significant
pub const fn assemble_response(high: u8, low: u8) -> u16 {
    u16::from_be_bytes([high, low])
}

/// Keep only the 12-bit angle field of a raw reading
pub fn mask_angle(raw: u16) -> u16 {
    AngleRegister::new(raw).angle()
}

/// Convert a 12-bit angle count to degrees in `[0, 360)`
pub fn counts_to_degrees(counts: u16) -> f32 {
    360.0 * f32::from(counts) / f32::from(ANGLE_RESOLUTION)
}
