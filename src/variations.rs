use crate::error::Result;
use crate::options::VariationOptions;
use crate::palette::Color;

/// Tints, the original, then shades: `2 * steps + 1` colors ordered lightest
/// to darkest at constant hue and saturation. Tints add 8 lightness points
/// per step (capped at 95), shades remove 8 (floored at 5).
pub fn generate_variations(color: &Color, steps: usize) -> Vec<Color> {
    ladder(color, &VariationOptions::with_steps(steps))
}

pub fn generate_variations_with(color: &Color, options: &VariationOptions) -> Result<Vec<Color>> {
    options.validate()?;
    Ok(ladder(color, options))
}

fn ladder(color: &Color, options: &VariationOptions) -> Vec<Color> {
    let hsl = color.hsl();
    let steps = options.steps;
    // A color already outside the bounds keeps its own lightness as the cap/floor
    // so the ladder never reverses direction.
    let ceiling = options.max_lightness.max(hsl.l);
    let floor = options.min_lightness.min(hsl.l);

    let mut out = Vec::with_capacity(2 * steps + 1);

    for i in (1..=steps).rev() {
        let l = (hsl.l + i as f64 * options.lightness_step).min(ceiling);
        out.push(
            color
                .with_hsl(hsl.with_lightness(l))
                .with_description(format!("Lighter variation of {}", color.role))
                .with_role(format!("{} Tint {}", color.role, i)),
        );
    }

    out.push(color.clone().with_role(format!("{} (Original)", color.role)));

    for i in 1..=steps {
        let l = (hsl.l - i as f64 * options.lightness_step).max(floor);
        out.push(
            color
                .with_hsl(hsl.with_lightness(l))
                .with_description(format!("Darker variation of {}", color.role))
                .with_role(format!("{} Shade {}", color.role, i)),
        );
    }

    out
}
