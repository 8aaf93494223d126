use csscolorparser::Color as CssColor;

use super::composite::composite_over;
use super::hex::Rgb;
use crate::error::{EngineError, Result};

/// Convert any CSS color value to RGB channels.
/// Handles: hex (3/4/6/8 digits), rgb(), hsl(), named colors, and whatever
/// else csscolorparser understands. Translucent colors are composited over
/// `backdrop` so the result is always opaque.
///
/// Keywords without a concrete color (transparent, inherit, currentColor,
/// initial, unset) are rejected.
pub fn parse_css_color(value: &str, backdrop: Rgb) -> Result<Rgb> {
    let trimmed = value.trim();

    match trimmed.to_lowercase().as_str() {
        "" | "transparent" | "inherit" | "currentcolor" | "initial" | "unset" => {
            return Err(EngineError::InvalidColorFormat(value.to_string()));
        }
        _ => {}
    }

    let color = trimmed
        .parse::<CssColor>()
        .map_err(|_| EngineError::InvalidColorFormat(value.to_string()))?;
    let [r, g, b, a] = color.to_rgba8();
    if a == 255 {
        Ok([r, g, b])
    } else {
        Ok(composite_over([r, g, b], backdrop, a as f64 / 255.0))
    }
}
