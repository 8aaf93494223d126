pub mod hex;
pub mod hsl;
pub mod wcag;
pub mod vision;
pub mod composite;
pub mod color_parse;

pub use hex::{hex_to_rgb, rgb_from_channels, rgb_to_hex, Rgb};
pub use hsl::{hsl_to_rgb, rgb_to_hsl, Hsl};
pub use vision::{grayscale_luma, simulate_vision, VisionType};
pub use wcag::{contrast_ratio, relative_luminance, wcag_compliance, Compliance, WcagCompliance};
