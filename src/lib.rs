pub mod audit;
pub mod engine;
pub mod error;
pub mod logging;
pub mod math;
pub mod options;
pub mod palette;
pub mod remediate;
pub mod roles;
pub mod variations;

#[cfg(feature = "node")]
pub mod binding;
#[cfg(feature = "node")]
pub mod types;

pub use error::{EngineError, Result};
pub use math::{
    contrast_ratio, hex_to_rgb, hsl_to_rgb, relative_luminance, rgb_to_hex, rgb_to_hsl,
    simulate_vision, wcag_compliance, Hsl, Rgb, VisionType, WcagCompliance,
};
pub use options::{RemediationOptions, VariationOptions};
pub use palette::{Color, Palette};
pub use remediate::{remediate_contrast, remediate_contrast_with, Remediation, RemediationStatus};
pub use roles::{suggest_roles, RoleSuggestion};
pub use variations::{generate_variations, generate_variations_with};
