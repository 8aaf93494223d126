use crate::error::{EngineError, Result};
use crate::math::{contrast_ratio, Hsl, Rgb};
use crate::options::RemediationOptions;
use crate::palette::{Color, Palette};

/// How a remediation attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemediationStatus {
    /// The pair already met the target; nothing was touched.
    AlreadyCompliant,
    /// Lightness was adjusted and the target was reached.
    Remediated,
    /// The step budget ran out (or the bounds were hit) below target.
    Incomplete,
}

/// Result of a bounded remediation search. Below-target results are normal
/// values: check `status()` or `achieved_ratio` before relying on the pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Remediation {
    pub text: Color,
    pub background: Color,
    pub achieved_ratio: f64,
    pub target_ratio: f64,
    pub text_steps: u32,
    pub background_steps: u32,
}

impl Remediation {
    pub fn status(&self) -> RemediationStatus {
        if self.achieved_ratio < self.target_ratio || self.achieved_ratio.is_nan() {
            RemediationStatus::Incomplete
        } else if self.text_steps == 0 && self.background_steps == 0 {
            RemediationStatus::AlreadyCompliant
        } else {
            RemediationStatus::Remediated
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status() != RemediationStatus::Incomplete
    }
}

/// Which side of the pair may be changed.
#[derive(Debug, Clone, Copy)]
struct Adjustable {
    text: bool,
    background: bool,
}

const BOTH: Adjustable = Adjustable {
    text: true,
    background: true,
};

/// Nudge lightness of `text`, then `background`, until `target_ratio` is met
/// or each side has used its 20-step budget. Never fails; inspect the result.
pub fn remediate_contrast(text: &Color, background: &Color, target_ratio: f64) -> Remediation {
    run(text, background, &RemediationOptions::with_target(target_ratio), BOTH)
}

/// Same search with caller-supplied step size, budget and bounds.
pub fn remediate_contrast_with(
    text: &Color,
    background: &Color,
    options: &RemediationOptions,
) -> Result<Remediation> {
    options.validate()?;
    Ok(run(text, background, options, BOTH))
}

/// Remediate two positions of a palette and return a new palette with the
/// adjusted colors substituted. Locked positions are never adjusted.
pub fn remediate_palette_pair(
    palette: &Palette,
    text_index: usize,
    background_index: usize,
    options: &RemediationOptions,
) -> Result<(Palette, Remediation)> {
    options.validate()?;
    if text_index == background_index {
        return Err(EngineError::InvalidOptions(format!(
            "text and background must be different positions, both were {text_index}"
        )));
    }
    let color_at = |index: usize| {
        palette.colors().get(index).ok_or(EngineError::IndexOutOfRange {
            index,
            len: palette.len(),
        })
    };
    let text = color_at(text_index)?;
    let background = color_at(background_index)?;

    let adjustable = Adjustable {
        text: !palette.is_locked(text_index),
        background: !palette.is_locked(background_index),
    };
    let result = run(text, background, options, adjustable);

    let next = palette
        .with_color(text_index, result.text.clone())?
        .with_color(background_index, result.background.clone())?;
    Ok((next, result))
}

fn run(
    text: &Color,
    background: &Color,
    options: &RemediationOptions,
    adjustable: Adjustable,
) -> Remediation {
    let initial = contrast_ratio(text.rgb(), background.rgb());
    let mut result = Remediation {
        text: text.clone(),
        background: background.clone(),
        achieved_ratio: initial,
        target_ratio: options.target_ratio,
        text_steps: 0,
        background_steps: 0,
    };
    if initial >= options.target_ratio {
        return result;
    }

    let text_hsl = text.hsl();
    let bg_hsl = background.hsl();
    let mut text_lightness = text_hsl.l;

    if adjustable.text {
        let bg_rgb = background.rgb();
        let walk = walk_lightness(text, text_hsl, bg_hsl.l > 50.0, options, initial, |rgb| {
            contrast_ratio(rgb, bg_rgb)
        });
        text_lightness = walk.lightness;
        result.text = walk.color;
        result.text_steps = walk.steps;
        result.achieved_ratio = walk.ratio;
    }

    if result.achieved_ratio < options.target_ratio && adjustable.background {
        let text_rgb = result.text.rgb();
        let walk = walk_lightness(
            background,
            bg_hsl,
            text_lightness > 50.0,
            options,
            result.achieved_ratio,
            |rgb| contrast_ratio(text_rgb, rgb),
        );
        result.background = walk.color;
        result.background_steps = walk.steps;
        result.achieved_ratio = walk.ratio;
    }

    tracing::debug!(
        text = %text.hex(),
        background = %background.hex(),
        initial,
        achieved = result.achieved_ratio,
        target = options.target_ratio,
        text_steps = result.text_steps,
        background_steps = result.background_steps,
        status = ?result.status(),
        "contrast remediation finished"
    );
    result
}

struct Walk {
    color: Color,
    lightness: f64,
    steps: u32,
    ratio: f64,
}

/// Step one color's lightness (hue and saturation fixed) until `measure`
/// reaches the target, the budget is spent, or the bound stops movement.
fn walk_lightness(
    color: &Color,
    start: Hsl,
    darken: bool,
    options: &RemediationOptions,
    mut ratio: f64,
    measure: impl Fn(Rgb) -> f64,
) -> Walk {
    let mut current = color.clone();
    let mut lightness = start.l;
    let mut steps = 0;

    while ratio < options.target_ratio && steps < options.max_steps {
        let next = if darken {
            (lightness - options.lightness_step).max(options.min_lightness)
        } else {
            (lightness + options.lightness_step).min(options.max_lightness)
        };
        if next == lightness {
            break;
        }
        lightness = next;
        steps += 1;
        current = color.with_hsl(start.with_lightness(lightness));
        ratio = measure(current.rgb());
    }

    Walk {
        color: current,
        lightness,
        steps,
        ratio,
    }
}
