use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::hex::{channel_from_f64, rgb_to_hex, Rgb};
use crate::error::EngineError;

/// Color-vision deficiency types the simulator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisionType {
    Normal,
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Achromatopsia,
}

enum Transform {
    Identity,
    Matrix([[f64; 3]; 3]),
    /// Collapse to one gray value with the given channel weights.
    Grayscale([f64; 3]),
}

/// Indexed by `VisionType as usize`; adding a type is a table entry.
const TRANSFORMS: [Transform; 5] = [
    Transform::Identity,
    // Protanopia: reds are weak
    Transform::Matrix([
        [0.567, 0.433, 0.0],
        [0.558, 0.442, 0.0],
        [0.0, 0.242, 0.758],
    ]),
    // Deuteranopia: greens are weak
    Transform::Matrix([
        [0.625, 0.375, 0.0],
        [0.7, 0.3, 0.0],
        [0.0, 0.3, 0.7],
    ]),
    // Tritanopia: blues are weak
    Transform::Matrix([
        [0.95, 0.05, 0.0],
        [0.0, 0.433, 0.567],
        [0.0, 0.475, 0.525],
    ]),
    Transform::Grayscale(GRAYSCALE_WEIGHTS),
];

/// Rec. 601 luma weights. Not the WCAG luminance; only used for the
/// achromatopsia appearance.
const GRAYSCALE_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

impl VisionType {
    pub const ALL: [VisionType; 5] = [
        VisionType::Normal,
        VisionType::Protanopia,
        VisionType::Deuteranopia,
        VisionType::Tritanopia,
        VisionType::Achromatopsia,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VisionType::Normal => "Normal",
            VisionType::Protanopia => "Protanopia",
            VisionType::Deuteranopia => "Deuteranopia",
            VisionType::Tritanopia => "Tritanopia",
            VisionType::Achromatopsia => "Achromatopsia",
        }
    }

    fn transform(self) -> &'static Transform {
        &TRANSFORMS[self as usize]
    }
}

impl fmt::Display for VisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VisionType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        VisionType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EngineError::UnknownVisionType(s.to_string()))
    }
}

/// Gray level with the Rec. 601 weights, unrounded.
pub fn grayscale_luma(rgb: Rgb) -> f64 {
    weighted(GRAYSCALE_WEIGHTS, rgb)
}

fn weighted(weights: [f64; 3], rgb: Rgb) -> f64 {
    weights
        .iter()
        .zip(rgb.iter())
        .map(|(w, c)| w * *c as f64)
        .sum()
}

/// Simulated channels, each rounded and clamped to [0, 255].
pub fn simulate_vision_rgb(rgb: Rgb, vision: VisionType) -> Rgb {
    match vision.transform() {
        Transform::Identity => rgb,
        Transform::Matrix(rows) => rows.map(|row| channel_from_f64(weighted(row, rgb))),
        Transform::Grayscale(weights) => [channel_from_f64(weighted(*weights, rgb)); 3],
    }
}

/// Simulate how `rgb` appears under the given deficiency, as lowercase hex.
pub fn simulate_vision(rgb: Rgb, vision: VisionType) -> String {
    rgb_to_hex(simulate_vision_rgb(rgb, vision))
}
