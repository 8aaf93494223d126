use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::math::color_parse::parse_css_color;
use crate::math::{hex_to_rgb, hsl_to_rgb, relative_luminance, rgb_to_hex, rgb_to_hsl, Hsl, Rgb};

/// A named palette color. `hex` and `rgb` are private so they can only change
/// together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub role: String,
    hex: String,
    rgb: Rgb,
    pub description: String,
}

impl Color {
    pub fn from_rgb(role: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            role: role.into(),
            hex: rgb_to_hex(rgb),
            rgb,
            description: String::new(),
        }
    }

    pub fn from_hex(role: impl Into<String>, hex: &str) -> Result<Self> {
        Ok(Self::from_rgb(role, hex_to_rgb(hex)?))
    }

    /// Lenient constructor for colors produced outside the engine (rgb(),
    /// hsl(), named colors). Translucent values are flattened onto white.
    pub fn from_css(role: impl Into<String>, value: &str) -> Result<Self> {
        Ok(Self::from_rgb(role, parse_css_color(value, [255, 255, 255])?))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        rgb_to_hsl(self.rgb)
    }

    pub fn luminance(&self) -> f64 {
        relative_luminance(self.rgb)
    }

    /// Same role and description, different channels.
    pub fn with_rgb(&self, rgb: Rgb) -> Self {
        Self {
            role: self.role.clone(),
            hex: rgb_to_hex(rgb),
            rgb,
            description: self.description.clone(),
        }
    }

    pub fn with_hsl(&self, hsl: Hsl) -> Self {
        self.with_rgb(hsl_to_rgb(hsl))
    }

    /// Text used to describe this color in generated names: the description,
    /// or the role when the description is empty.
    pub fn label(&self) -> &str {
        if self.description.is_empty() {
            &self.role
        } else {
            &self.description
        }
    }
}

/// Positions of locked colors. Kept beside the colors rather than on them so
/// color values stay plain data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockSet(BTreeSet<usize>);

impl LockSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn set(&mut self, index: usize, locked: bool) {
        if locked {
            self.0.insert(index);
        } else {
            self.0.remove(&index);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An ordered set of colors. Index 0 is conventionally the primary color.
/// Every edit returns a new palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PaletteRecord", into = "PaletteRecord")]
pub struct Palette {
    pub name: String,
    colors: Vec<Color>,
    locks: LockSet,
    pub generated_name: Option<String>,
    pub brand_mood: Option<String>,
}

impl Palette {
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Self {
        Self {
            name: name.into(),
            colors,
            locks: LockSet::new(),
            generated_name: None,
            brand_mood: None,
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn locks(&self) -> &LockSet {
        &self.locks
    }

    pub fn is_locked(&self, index: usize) -> bool {
        self.locks.is_locked(index)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.colors.len() {
            Ok(())
        } else {
            Err(EngineError::IndexOutOfRange {
                index,
                len: self.colors.len(),
            })
        }
    }

    /// New palette with the color at `index` replaced. Lock state is kept.
    pub fn with_color(&self, index: usize, color: Color) -> Result<Palette> {
        self.check_index(index)?;
        let mut next = self.clone();
        next.colors[index] = color;
        Ok(next)
    }

    pub fn with_locked(&self, index: usize, locked: bool) -> Result<Palette> {
        self.check_index(index)?;
        let mut next = self.clone();
        next.locks.set(index, locked);
        Ok(next)
    }

    /// New palette with every color mapped through `f`. Names and locks are kept.
    pub fn map_colors(&self, f: impl FnMut(&Color) -> Color) -> Palette {
        Palette {
            colors: self.colors.iter().map(f).collect(),
            ..self.clone()
        }
    }

    /// New palette with `generated_name` and `brand_mood` filled from the colors.
    pub fn with_identity(&self) -> Result<Palette> {
        let id = identity(&self.colors)?;
        Ok(Palette {
            generated_name: Some(id.name),
            brand_mood: Some(id.mood),
            ..self.clone()
        })
    }

    /// Parse an interchange document. Shape errors are `Json`; a color whose
    /// hex does not parse is `InvalidColorFormat`.
    pub fn from_json(json: &str) -> Result<Palette> {
        let record: PaletteRecord = serde_json::from_str(json)?;
        Palette::try_from(record)
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Palette> {
        let record: PaletteRecord = serde_json::from_value(value)?;
        Palette::try_from(record)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Generated display name and brand mood for a set of colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteIdentity {
    pub name: String,
    pub mood: String,
}

/// Derive a name and mood from average WCAG luminance.
pub fn identity(colors: &[Color]) -> Result<PaletteIdentity> {
    let first = colors.first().ok_or(EngineError::EmptyPalette)?;
    let avg = colors.iter().map(Color::luminance).sum::<f64>() / colors.len() as f64;

    let mood = if avg > 0.7 {
        "Bright, uplifting, energetic"
    } else if avg > 0.4 {
        "Balanced, modern, friendly"
    } else {
        "Bold, dramatic, sophisticated"
    };
    let keyword = mood.split(',').next().unwrap_or(mood);
    let labels: Vec<&str> = colors.iter().map(Color::label).collect();

    Ok(PaletteIdentity {
        name: format!("{} {}", first.label(), keyword),
        mood: format!("{} \u{2014} {}", mood, labels.join(", ")),
    })
}

// --- interchange shape ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColorRecord {
    role: String,
    hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rgb: Option<Rgb>,
    #[serde(default)]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    locked: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaletteRecord {
    palette_name: String,
    colors: Vec<ColorRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generated_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    brand_mood: Option<String>,
}

impl TryFrom<PaletteRecord> for Palette {
    type Error = EngineError;

    fn try_from(record: PaletteRecord) -> Result<Self> {
        let mut locks = LockSet::new();
        let mut colors = Vec::with_capacity(record.colors.len());

        for (index, c) in record.colors.into_iter().enumerate() {
            let rgb = hex_to_rgb(&c.hex)?;
            if let Some(given) = c.rgb {
                if given != rgb {
                    tracing::warn!(
                        role = %c.role,
                        hex = %c.hex,
                        ?given,
                        "rgb disagrees with hex; recomputing from hex"
                    );
                }
            }
            locks.set(index, c.locked.unwrap_or(false));
            colors.push(Color::from_rgb(c.role, rgb).with_description(c.description));
        }

        Ok(Palette {
            name: record.palette_name,
            colors,
            locks,
            generated_name: record.generated_name,
            brand_mood: record.brand_mood,
        })
    }
}

impl From<Palette> for PaletteRecord {
    fn from(palette: Palette) -> Self {
        let locks = palette.locks;
        PaletteRecord {
            palette_name: palette.name,
            colors: palette
                .colors
                .into_iter()
                .enumerate()
                .map(|(index, c)| ColorRecord {
                    role: c.role,
                    hex: c.hex,
                    rgb: Some(c.rgb),
                    description: c.description,
                    locked: locks.is_locked(index).then_some(true),
                })
                .collect(),
            generated_name: palette.generated_name,
            brand_mood: palette.brand_mood,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Palette {
        Palette::new(
            "Sunset",
            vec![
                Color::from_hex("Primary", "#FF6B6B").unwrap().with_description("Coral"),
                Color::from_hex("Background", "#F7FFF7").unwrap(),
            ],
        )
    }

    #[test]
    fn hex_is_normalized_and_matches_rgb() {
        let c = Color::from_hex("Primary", "FF6B6B").unwrap();
        assert_eq!(c.hex(), "#ff6b6b");
        assert_eq!(c.rgb(), [255, 107, 107]);
        let moved = c.with_rgb([0, 0, 0]);
        assert_eq!(moved.hex(), "#000000");
        assert_eq!(moved.role, "Primary");
    }

    #[test]
    fn invalid_hex_is_reported() {
        assert!(matches!(
            Color::from_hex("x", "#12"),
            Err(EngineError::InvalidColorFormat(_))
        ));
    }

    #[test]
    fn css_colors_accepted() {
        let c = Color::from_css("Accent", "rgb(78, 205, 196)").unwrap();
        assert_eq!(c.hex(), "#4ecdc4");
    }

    #[test]
    fn edits_return_new_palettes() {
        let original = sample();
        let edited = original
            .with_color(0, Color::from_hex("Primary", "#000000").unwrap())
            .unwrap()
            .with_locked(1, true)
            .unwrap();
        assert_eq!(original.colors()[0].hex(), "#ff6b6b");
        assert!(!original.is_locked(1));
        assert_eq!(edited.colors()[0].hex(), "#000000");
        assert!(edited.is_locked(1));
    }

    #[test]
    fn edits_out_of_range() {
        let p = sample();
        assert!(matches!(
            p.with_locked(5, true),
            Err(EngineError::IndexOutOfRange { index: 5, len: 2 })
        ));
        assert!(p.with_color(2, p.colors()[0].clone()).is_err());
    }

    #[test]
    fn json_round_trip_keeps_locks() {
        let p = sample().with_locked(0, true).unwrap();
        let json = p.to_json().unwrap();
        assert!(json.contains(r#""paletteName":"Sunset""#));
        assert!(json.contains(r#""rgb":[255,107,107]"#));
        assert_eq!(json.matches("locked").count(), 1);
        let back = Palette::from_json(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn json_recomputes_missing_or_wrong_rgb() {
        let json = r##"{
            "paletteName": "Imported",
            "colors": [
                {"role": "Primary", "hex": "#4ECDC4", "description": "Teal"},
                {"role": "Text", "hex": "#1a1a1a", "rgb": [0, 0, 0], "description": "", "locked": true}
            ],
            "brandMood": "Calm"
        }"##;
        let p = Palette::from_json(json).unwrap();
        assert_eq!(p.colors()[0].rgb(), [78, 205, 196]);
        assert_eq!(p.colors()[1].rgb(), [26, 26, 26]);
        assert!(p.is_locked(1));
        assert!(!p.is_locked(0));
        assert_eq!(p.brand_mood.as_deref(), Some("Calm"));
        assert_eq!(p.generated_name, None);
    }

    #[test]
    fn json_with_bad_hex_is_invalid_color() {
        let json = r#"{"paletteName": "x", "colors": [{"role": "a", "hex": "nope"}]}"#;
        assert!(matches!(
            Palette::from_json(json),
            Err(EngineError::InvalidColorFormat(hex)) if hex == "nope"
        ));
        let value = serde_json::json!({"paletteName": "x", "colors": [{"role": "a", "hex": "#12"}]});
        assert!(matches!(
            Palette::from_json_value(value),
            Err(EngineError::InvalidColorFormat(_))
        ));
    }

    #[test]
    fn json_with_bad_shape_is_json_error() {
        let json = r#"{"paletteName": "x", "colors": "not a list"}"#;
        assert!(matches!(Palette::from_json(json), Err(EngineError::Json(_))));
    }

    #[test]
    fn identity_dark_palette() {
        let colors = vec![
            Color::from_hex("Primary", "#1a1a1a").unwrap().with_description("Charcoal"),
            Color::from_hex("Secondary", "#333333").unwrap(),
        ];
        let id = identity(&colors).unwrap();
        assert_eq!(id.name, "Charcoal Bold");
        assert_eq!(id.mood, "Bold, dramatic, sophisticated \u{2014} Charcoal, Secondary");
    }

    #[test]
    fn identity_bright_and_balanced() {
        let bright = vec![Color::from_hex("Paper", "#ffffff").unwrap()];
        assert_eq!(identity(&bright).unwrap().name, "Paper Bright");

        // #b4b4b4 has luminance ~0.456
        let mid = vec![Color::from_hex("Mist", "#b4b4b4").unwrap()];
        assert_eq!(identity(&mid).unwrap().name, "Mist Balanced");
    }

    #[test]
    fn identity_requires_colors() {
        assert!(matches!(identity(&[]), Err(EngineError::EmptyPalette)));
        let empty = Palette::new("Empty", vec![]);
        assert!(empty.with_identity().is_err());
    }

    #[test]
    fn with_identity_fills_fields() {
        let p = sample().with_identity().unwrap();
        assert_eq!(p.generated_name.as_deref(), Some("Coral Balanced"));
        assert!(p.brand_mood.unwrap().ends_with("Coral, Background"));
    }
}
