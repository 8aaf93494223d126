use super::hex::{channel_from_f64, Rgb};

/// Alpha-composite a foreground color over an opaque backdrop.
/// formula per channel: result = fg * alpha + bg * (1 - alpha)
pub fn composite_over(fg: Rgb, backdrop: Rgb, alpha: f64) -> Rgb {
    let alpha = alpha.clamp(0.0, 1.0);
    let blend = |f: u8, b: u8| channel_from_f64(f as f64 * alpha + b as f64 * (1.0 - alpha));
    [
        blend(fg[0], backdrop[0]),
        blend(fg[1], backdrop[1]),
        blend(fg[2], backdrop[2]),
    ]
}
