//! JS-facing functions. Argument conversion happens here; the engine
//! modules stay free of napi types.

use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::audit::{self, ConformanceLevel};
use crate::engine;
use crate::error::EngineError;
use crate::math::{self, hex::channel_from_f64, Hsl, VisionType};
use crate::options::{RemediationOptions, VariationOptions};
use crate::palette::{self, Palette};
use crate::remediate;
use crate::roles;
use crate::types::{
    colors_from_js, colors_to_js, AuditReportJs, ColorData, ContrastMatrixJs, HslTriple,
    PaletteIdentityJs, PaletteRemediationJs, RemediationJs, RemediationOptionsJs, RoleSuggestionJs,
    WcagReport,
};
use crate::variations;

fn channels(r: f64, g: f64, b: f64) -> math::Rgb {
    [r, g, b].map(channel_from_f64)
}

fn palette_from_value(value: serde_json::Value) -> Result<Palette> {
    Ok(Palette::from_json_value(value)?)
}

fn palette_to_value(palette: &Palette) -> Result<serde_json::Value> {
    serde_json::to_value(palette).map_err(|e| EngineError::from(e).into())
}

#[napi]
pub fn health_check() -> String {
    "palette-a11y-native ok".to_string()
}

#[napi]
pub fn init_logging(filter: Option<String>) -> Result<bool> {
    Ok(crate::logging::init_logging(filter.as_deref())?)
}

#[napi]
pub fn hex_to_rgb(hex: String) -> Result<Vec<u32>> {
    let rgb = math::hex_to_rgb(&hex)?;
    Ok(rgb.iter().map(|&c| c as u32).collect())
}

#[napi]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    math::rgb_to_hex(channels(r, g, b))
}

#[napi]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> HslTriple {
    math::rgb_to_hsl(channels(r, g, b)).into()
}

#[napi]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Vec<u32> {
    math::hsl_to_rgb(Hsl::new(h, s, l))
        .iter()
        .map(|&c| c as u32)
        .collect()
}

/// Both colors are `[r, g, b]` triples with channels in 0..=255.
#[napi]
pub fn contrast_ratio(first: Vec<u32>, second: Vec<u32>) -> Result<f64> {
    let a = math::rgb_from_channels(&first)?;
    let b = math::rgb_from_channels(&second)?;
    Ok(math::contrast_ratio(a, b))
}

#[napi]
pub fn wcag_compliance(ratio: f64) -> WcagReport {
    math::wcag_compliance(ratio).into()
}

#[napi]
pub fn simulate_vision(hex: String, vision_type: String) -> Result<String> {
    let rgb = math::hex_to_rgb(&hex)?;
    let vision: VisionType = vision_type.parse()?;
    Ok(math::simulate_vision(rgb, vision))
}

/// `target_ratio` defaults to 4.5. Extra knobs in `options` override it.
#[napi]
pub fn remediate_contrast(
    text: ColorData,
    background: ColorData,
    target_ratio: Option<f64>,
    options: Option<RemediationOptionsJs>,
) -> Result<RemediationJs> {
    let text = text.to_color()?;
    let background = background.to_color()?;
    let mut opts: RemediationOptions = options.unwrap_or_default().into();
    if let Some(target) = target_ratio {
        opts.target_ratio = target;
    }
    let result = remediate::remediate_contrast_with(&text, &background, &opts)?;
    Ok((&result).into())
}

#[napi]
pub fn suggest_roles(colors: Vec<ColorData>) -> Result<RoleSuggestionJs> {
    let colors = colors_from_js(&colors)?;
    Ok(roles::suggest_roles(&colors)?.into())
}

#[napi]
pub fn generate_variations(color: ColorData, steps: Option<u32>) -> Result<Vec<ColorData>> {
    let color = color.to_color()?;
    let options = VariationOptions::with_steps(steps.unwrap_or(5) as usize);
    let ladder = variations::generate_variations_with(&color, &options)?;
    Ok(colors_to_js(&ladder))
}

#[napi]
pub fn parse_css_color(value: String, backdrop: Option<String>) -> Result<String> {
    let backdrop = match backdrop {
        Some(hex) => math::hex_to_rgb(&hex)?,
        None => [255, 255, 255],
    };
    let rgb = math::color_parse::parse_css_color(&value, backdrop)?;
    Ok(math::rgb_to_hex(rgb))
}

#[napi]
pub fn palette_identity(colors: Vec<ColorData>) -> Result<PaletteIdentityJs> {
    let colors = colors_from_js(&colors)?;
    let id = palette::identity(&colors)?;
    Ok(PaletteIdentityJs {
        generated_name: id.name,
        brand_mood: id.mood,
    })
}

#[napi]
pub fn contrast_matrix(colors: Vec<ColorData>) -> Result<ContrastMatrixJs> {
    let colors = colors_from_js(&colors)?;
    Ok(engine::contrast_matrix(&colors).into())
}

/// `level` is "AA" (default) or "AAA".
#[napi]
pub fn audit_palette(palette: serde_json::Value, level: Option<String>) -> Result<AuditReportJs> {
    let palette = palette_from_value(palette)?;
    let level: ConformanceLevel = match level {
        Some(name) => name.parse()?,
        None => ConformanceLevel::AA,
    };
    Ok(audit::audit_palette(&palette, level).into())
}

#[napi]
pub fn simulate_palette(palette: serde_json::Value, vision_type: String) -> Result<serde_json::Value> {
    let palette = palette_from_value(palette)?;
    let vision: VisionType = vision_type.parse()?;
    palette_to_value(&engine::simulate_palette(&palette, vision))
}

/// Returns the adjusted palette document together with the pair's
/// remediation; an `Incomplete` status means the target was not reached.
#[napi]
pub fn remediate_palette_pair(
    palette: serde_json::Value,
    text_index: u32,
    bg_index: u32,
    options: Option<RemediationOptionsJs>,
) -> Result<PaletteRemediationJs> {
    let palette = palette_from_value(palette)?;
    let opts: RemediationOptions = options.unwrap_or_default().into();
    let (next, remediation) =
        remediate::remediate_palette_pair(&palette, text_index as usize, bg_index as usize, &opts)?;
    Ok(PaletteRemediationJs {
        palette: palette_to_value(&next)?,
        remediation: (&remediation).into(),
    })
}

#[napi]
pub fn palette_ladders(palette: serde_json::Value, steps: Option<u32>) -> Result<Vec<Vec<ColorData>>> {
    let palette = palette_from_value(palette)?;
    let options = VariationOptions::with_steps(steps.unwrap_or(5) as usize);
    let ladders = engine::palette_ladders(&palette, &options)?;
    Ok(ladders.iter().map(|l| colors_to_js(l)).collect())
}
