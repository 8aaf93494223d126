//! Batch entry points. Every item is computed independently with Rayon's
//! `par_iter()`; results keep input order.

use rayon::prelude::*;
use serde::Serialize;

use crate::audit::{audit_palette, AuditReport, ConformanceLevel};
use crate::error::{EngineError, Result};
use crate::math::vision::simulate_vision_rgb;
use crate::math::{contrast_ratio, VisionType};
use crate::options::VariationOptions;
use crate::palette::{Color, Palette};
use crate::variations::generate_variations_with;

/// New palette with every color replaced by its simulated appearance.
/// Roles, names and locks are kept; rgb is recomputed alongside hex.
pub fn simulate_palette(palette: &Palette, vision: VisionType) -> Palette {
    palette.map_colors(|c| c.with_rgb(simulate_vision_rgb(c.rgb(), vision)))
}

/// One simulated palette per vision type, in `VisionType::ALL` order.
pub fn simulation_sheet(palette: &Palette) -> Vec<(VisionType, Palette)> {
    VisionType::ALL
        .par_iter()
        .map(|&vision| (vision, simulate_palette(palette, vision)))
        .collect()
}

/// Tint/shade ladder for every color of a palette.
pub fn palette_ladders(palette: &Palette, options: &VariationOptions) -> Result<Vec<Vec<Color>>> {
    if palette.is_empty() {
        return Err(EngineError::EmptyPalette);
    }
    options.validate()?;
    palette
        .colors()
        .par_iter()
        .map(|c| generate_variations_with(c, options))
        .collect()
}

/// Audit many palettes at once.
pub fn audit_palettes(palettes: &[Palette], level: ConformanceLevel) -> Vec<AuditReport> {
    palettes
        .par_iter()
        .map(|p| audit_palette(p, level))
        .collect()
}

/// Which use a color is best suited for, judged from its contrast with the
/// rest of the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContrastHint {
    Text,
    Background,
}

/// All-pairs contrast ratios. `ratios[i][j]` is `None` on the diagonal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastMatrix {
    pub ratios: Vec<Vec<Option<f64>>>,
    pub hints: Vec<Option<ContrastHint>>,
}

pub fn contrast_matrix(colors: &[Color]) -> ContrastMatrix {
    let ratios: Vec<Vec<Option<f64>>> = colors
        .par_iter()
        .enumerate()
        .map(|(i, row)| {
            colors
                .iter()
                .enumerate()
                .map(|(j, col)| (i != j).then(|| contrast_ratio(row.rgb(), col.rgb())))
                .collect()
        })
        .collect();

    let hints = colors.iter().map(|c| contrast_hint(c, colors)).collect();

    ContrastMatrix { ratios, hints }
}

/// Text when the color reaches 4.5 against at least 60% of the other
/// distinct colors; background when it stays under 3.0 against at least half.
fn contrast_hint(color: &Color, all: &[Color]) -> Option<ContrastHint> {
    let others: Vec<&Color> = all.iter().filter(|c| c.hex() != color.hex()).collect();
    if others.is_empty() {
        return None;
    }
    let (mut high, mut low) = (0usize, 0usize);
    for other in &others {
        let ratio = contrast_ratio(color.rgb(), other.rgb());
        if ratio >= 4.5 {
            high += 1;
        }
        if ratio < 3.0 {
            low += 1;
        }
    }
    let n = others.len() as f64;
    if high as f64 >= (n * 0.6).ceil() {
        Some(ContrastHint::Text)
    } else if low as f64 >= (n * 0.5).ceil() {
        Some(ContrastHint::Background)
    } else {
        None
    }
}
