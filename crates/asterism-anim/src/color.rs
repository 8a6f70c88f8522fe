//! Hex star colors.

use asterism_types::Star;
use palette::Srgb;

use crate::AnimError;

/// Decode `rrggbb` or `rgb` hex, with or without a leading `#`.
pub fn decode_hex(hex: &str) -> Result<Srgb<u8>, AnimError> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    // Byte-sliced by palette, so reject non-ASCII up front.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AnimError::InvalidColor(hex.to_string()));
    }
    digits
        .parse::<Srgb<u8>>()
        .map_err(|_| AnimError::InvalidColor(hex.to_string()))
}

/// A star's display color, or `fallback` if its hex does not decode.
pub fn star_color(star: &Star, fallback: Srgb<u8>) -> Srgb<u8> {
    match decode_hex(&star.color) {
        Ok(color) => color,
        Err(e) => {
            tracing::warn!(star = %star.id, "{e}, using fallback");
            fallback
        }
    }
}
