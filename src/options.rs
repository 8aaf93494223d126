use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Knobs for the contrast remediator. Defaults match the WCAG AA normal-text
/// target with 5-point lightness steps and a 20-step budget per color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemediationOptions {
    pub target_ratio: f64,
    pub lightness_step: f64,
    pub max_steps: u32,
    pub min_lightness: f64,
    pub max_lightness: f64,
}

impl Default for RemediationOptions {
    fn default() -> Self {
        Self {
            target_ratio: 4.5,
            lightness_step: 5.0,
            max_steps: 20,
            min_lightness: 5.0,
            max_lightness: 95.0,
        }
    }
}

impl RemediationOptions {
    pub fn with_target(target_ratio: f64) -> Self {
        Self {
            target_ratio,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1.0..=21.0).contains(&self.target_ratio) {
            return Err(EngineError::InvalidOptions(format!(
                "targetRatio must be within [1, 21], got {}",
                self.target_ratio
            )));
        }
        if self.max_steps == 0 {
            return Err(EngineError::InvalidOptions("maxSteps must be at least 1".into()));
        }
        validate_ladder(self.lightness_step, self.min_lightness, self.max_lightness)
    }
}

/// Knobs for the tint/shade ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariationOptions {
    pub steps: usize,
    pub lightness_step: f64,
    pub min_lightness: f64,
    pub max_lightness: f64,
}

impl Default for VariationOptions {
    fn default() -> Self {
        Self {
            steps: 5,
            lightness_step: 8.0,
            min_lightness: 5.0,
            max_lightness: 95.0,
        }
    }
}

impl VariationOptions {
    pub fn with_steps(steps: usize) -> Self {
        Self {
            steps,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_ladder(self.lightness_step, self.min_lightness, self.max_lightness)
    }
}

fn validate_ladder(step: f64, min: f64, max: f64) -> Result<()> {
    if !(step > 0.0) || !step.is_finite() {
        return Err(EngineError::InvalidOptions(format!(
            "lightnessStep must be positive, got {step}"
        )));
    }
    if !(0.0 <= min && min < max && max <= 100.0) {
        return Err(EngineError::InvalidOptions(format!(
            "lightness bounds must satisfy 0 <= min < max <= 100, got [{min}, {max}]"
        )));
    }
    Ok(())
}
