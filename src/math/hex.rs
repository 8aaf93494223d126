use crate::error::{EngineError, Result};

/// An sRGB triple, one byte per channel.
pub type Rgb = [u8; 3];

/// Parse a 6-digit hex string (optional leading '#', any case) to RGB channels.
/// Anything else is `InvalidColorFormat`; malformed input never becomes black.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(EngineError::InvalidColorFormat(hex.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&raw[range], 16)
            .map_err(|_| EngineError::InvalidColorFormat(hex.to_string()))
    };
    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Format RGB channels as lowercase `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Build an RGB triple from exactly three integer channels in 0..=255.
pub fn rgb_from_channels(channels: &[u32]) -> Result<Rgb> {
    let invalid = || EngineError::InvalidColorFormat(format!("{channels:?}"));
    match channels {
        [r, g, b] => {
            let byte = |c: u32| u8::try_from(c).map_err(|_| invalid());
            Ok([byte(*r)?, byte(*g)?, byte(*b)?])
        }
        _ => Err(invalid()),
    }
}

/// Round a computed channel to the nearest integer and clamp it to [0, 255].
pub(crate) fn channel_from_f64(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}
