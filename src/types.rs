use napi_derive::napi;

use crate::audit::{AuditReport, PairCheck};
use crate::engine::{ContrastHint, ContrastMatrix};
use crate::error::{EngineError, Result};
use crate::math::{Compliance, Hsl, WcagCompliance};
use crate::palette::Color;
use crate::remediate::{Remediation, RemediationStatus};
use crate::roles::RoleSuggestion;

/// Equivalent of TypeScript ColorData
#[napi(object)]
#[derive(Debug, Clone)]
pub struct ColorData {
    pub role: String,
    pub hex: String,
    /// [r, g, b]; recomputed from `hex` on the way in
    pub rgb: Vec<u32>,
    pub description: String,
    pub locked: Option<bool>,
}

impl ColorData {
    pub fn from_color(color: &Color, locked: Option<bool>) -> Self {
        ColorData {
            role: color.role.clone(),
            hex: color.hex().to_string(),
            rgb: color.rgb().iter().map(|&c| c as u32).collect(),
            description: color.description.clone(),
            locked,
        }
    }

    pub fn to_color(&self) -> Result<Color> {
        Ok(Color::from_hex(self.role.clone(), &self.hex)?.with_description(self.description.clone()))
    }
}

pub(crate) fn colors_from_js(colors: &[ColorData]) -> Result<Vec<Color>> {
    colors.iter().map(ColorData::to_color).collect()
}

pub(crate) fn colors_to_js(colors: &[Color]) -> Vec<ColorData> {
    colors.iter().map(|c| ColorData::from_color(c, None)).collect()
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct HslTriple {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl From<Hsl> for HslTriple {
    fn from(hsl: Hsl) -> Self {
        HslTriple {
            h: hsl.h,
            s: hsl.s,
            l: hsl.l,
        }
    }
}

/// Equivalent of TypeScript WCAGCompliance
#[napi(object)]
#[derive(Debug, Clone)]
pub struct WcagLevels {
    pub aa: bool,
    pub aaa: bool,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct WcagReport {
    pub normal: WcagLevels,
    pub large: WcagLevels,
}

impl From<Compliance> for WcagLevels {
    fn from(c: Compliance) -> Self {
        WcagLevels { aa: c.aa, aaa: c.aaa }
    }
}

impl From<WcagCompliance> for WcagReport {
    fn from(c: WcagCompliance) -> Self {
        WcagReport {
            normal: c.normal.into(),
            large: c.large.into(),
        }
    }
}

/// Optional knobs for remediateContrast; missing fields use the defaults.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct RemediationOptionsJs {
    pub target_ratio: Option<f64>,
    pub lightness_step: Option<f64>,
    pub max_steps: Option<u32>,
    pub min_lightness: Option<f64>,
    pub max_lightness: Option<f64>,
}

impl From<RemediationOptionsJs> for crate::options::RemediationOptions {
    fn from(js: RemediationOptionsJs) -> Self {
        let d = Self::default();
        Self {
            target_ratio: js.target_ratio.unwrap_or(d.target_ratio),
            lightness_step: js.lightness_step.unwrap_or(d.lightness_step),
            max_steps: js.max_steps.unwrap_or(d.max_steps),
            min_lightness: js.min_lightness.unwrap_or(d.min_lightness),
            max_lightness: js.max_lightness.unwrap_or(d.max_lightness),
        }
    }
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct RemediationJs {
    pub text_color: ColorData,
    pub bg_color: ColorData,
    pub achieved_ratio: f64,
    pub target_ratio: f64,
    /// "AlreadyCompliant" | "Remediated" | "Incomplete"
    pub status: String,
    pub text_steps: u32,
    pub background_steps: u32,
}

impl From<&Remediation> for RemediationJs {
    fn from(r: &Remediation) -> Self {
        let status = match r.status() {
            RemediationStatus::AlreadyCompliant => "AlreadyCompliant",
            RemediationStatus::Remediated => "Remediated",
            RemediationStatus::Incomplete => "Incomplete",
        };
        RemediationJs {
            text_color: ColorData::from_color(&r.text, None),
            bg_color: ColorData::from_color(&r.background, None),
            achieved_ratio: r.achieved_ratio,
            target_ratio: r.target_ratio,
            status: status.to_string(),
            text_steps: r.text_steps,
            background_steps: r.background_steps,
        }
    }
}

/// Adjusted palette document plus the outcome of the pair it was fixed for.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct PaletteRemediationJs {
    pub palette: serde_json::Value,
    pub remediation: RemediationJs,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct RoleSuggestionJs {
    pub background: ColorData,
    pub text: ColorData,
    pub borders: Vec<ColorData>,
    pub accents: Vec<ColorData>,
}

impl From<RoleSuggestion> for RoleSuggestionJs {
    fn from(s: RoleSuggestion) -> Self {
        RoleSuggestionJs {
            background: ColorData::from_color(&s.background, None),
            text: ColorData::from_color(&s.text, None),
            borders: colors_to_js(&s.borders),
            accents: colors_to_js(&s.accents),
        }
    }
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct ContrastMatrixJs {
    /// Row-major; `null` on the diagonal
    pub ratios: Vec<Vec<Option<f64>>>,
    /// "text" | "background" | null per color
    pub hints: Vec<Option<String>>,
}

impl From<ContrastMatrix> for ContrastMatrixJs {
    fn from(m: ContrastMatrix) -> Self {
        ContrastMatrixJs {
            ratios: m.ratios,
            hints: m
                .hints
                .into_iter()
                .map(|h| {
                    h.map(|h| match h {
                        ContrastHint::Text => "text".to_string(),
                        ContrastHint::Background => "background".to_string(),
                    })
                })
                .collect(),
        }
    }
}

/// Equivalent of the accessibility checker's per-pair result
#[napi(object)]
#[derive(Debug, Clone)]
pub struct PairCheckJs {
    pub foreground: String,
    pub background: String,
    pub foreground_role: String,
    pub background_role: String,
    pub ratio: f64,
    pub wcag: WcagReport,
}

impl From<PairCheck> for PairCheckJs {
    fn from(c: PairCheck) -> Self {
        PairCheckJs {
            foreground: c.foreground,
            background: c.background,
            foreground_role: c.foreground_role,
            background_role: c.background_role,
            ratio: c.ratio,
            wcag: c.compliance.into(),
        }
    }
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct AuditReportJs {
    pub violations: Vec<PairCheckJs>,
    pub passed: Vec<PairCheckJs>,
    /// "AAA" | "AA" | "Fail" | "N/A"
    pub score: String,
    pub recommendations: Vec<String>,
}

impl From<AuditReport> for AuditReportJs {
    fn from(r: AuditReport) -> Self {
        AuditReportJs {
            violations: r.violations.into_iter().map(Into::into).collect(),
            passed: r.passed.into_iter().map(Into::into).collect(),
            score: r.score.to_string(),
            recommendations: r.recommendations,
        }
    }
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct PaletteIdentityJs {
    pub generated_name: String,
    pub brand_mood: String,
}

impl From<EngineError> for napi::Error {
    fn from(e: EngineError) -> Self {
        napi::Error::new(napi::Status::InvalidArg, e.to_string())
    }
}
