use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::math::{contrast_ratio, wcag_compliance, WcagCompliance};
use crate::palette::{Color, Palette};

/// Conformance level a palette audit checks against (normal-size text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConformanceLevel {
    AA,
    AAA,
}

impl FromStr for ConformanceLevel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AA" => Ok(ConformanceLevel::AA),
            "AAA" => Ok(ConformanceLevel::AAA),
            _ => Err(EngineError::InvalidOptions(format!(
                "conformance level must be AA or AAA, got {s:?}"
            ))),
        }
    }
}

/// Overall verdict across every foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallScore {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    Fail,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl fmt::Display for OverallScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OverallScore::Aaa => "AAA",
            OverallScore::Aa => "AA",
            OverallScore::Fail => "Fail",
            OverallScore::NotApplicable => "N/A",
        })
    }
}

/// One foreground color measured on one background color.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairCheck {
    pub foreground: String,
    pub background: String,
    pub foreground_role: String,
    pub background_role: String,
    /// Rounded to 2 decimals for display; compliance uses the exact ratio.
    pub ratio: f64,
    pub compliance: WcagCompliance,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub level: ConformanceLevel,
    pub violations: Vec<PairCheck>,
    pub passed: Vec<PairCheck>,
    pub score: OverallScore,
    pub recommendations: Vec<String>,
}

/// Roles containing "background" or "surface" act as backgrounds.
fn is_background_role(role: &str) -> bool {
    let role = role.to_lowercase();
    role.contains("background") || role.contains("surface")
}

fn check_pair(fg: &Color, bg: &Color) -> PairCheck {
    let ratio_raw = contrast_ratio(fg.rgb(), bg.rgb());
    PairCheck {
        foreground: fg.hex().to_string(),
        background: bg.hex().to_string(),
        foreground_role: fg.role.clone(),
        background_role: bg.role.clone(),
        ratio: (ratio_raw * 100.0).round() / 100.0,
        compliance: wcag_compliance(ratio_raw),
    }
}

/// Check every foreground color against every background color of a palette
/// and categorize the pairs into violations/passed for `level`.
pub fn audit_palette(palette: &Palette, level: ConformanceLevel) -> AuditReport {
    let (backgrounds, foregrounds): (Vec<&Color>, Vec<&Color>) = palette
        .colors()
        .iter()
        .partition(|c| is_background_role(&c.role));

    let mut violations = Vec::new();
    let mut passed = Vec::new();

    for bg in &backgrounds {
        for fg in &foregrounds {
            let check = check_pair(fg, bg);
            let ok = match level {
                ConformanceLevel::AA => check.compliance.normal.aa,
                ConformanceLevel::AAA => check.compliance.normal.aaa,
            };
            if ok {
                passed.push(check);
            } else {
                violations.push(check);
            }
        }
    }

    let all: Vec<&PairCheck> = violations.iter().chain(passed.iter()).collect();
    let score = if all.is_empty() {
        OverallScore::NotApplicable
    } else if all.iter().all(|c| c.compliance.normal.aaa) {
        OverallScore::Aaa
    } else if all.iter().all(|c| c.compliance.normal.aa) {
        OverallScore::Aa
    } else {
        OverallScore::Fail
    };

    let mut recommendations = Vec::new();
    if all.iter().any(|c| !c.compliance.normal.aa) {
        recommendations.push("Some color combinations fail WCAG AA standards".to_string());
    }
    if all
        .iter()
        .any(|c| c.compliance.normal.aa && !c.compliance.normal.aaa)
    {
        recommendations.push("Consider increasing contrast for AAA compliance".to_string());
    }
    if score == OverallScore::Aaa {
        recommendations.push("Excellent! All combinations meet AAA standards".to_string());
    }

    tracing::debug!(
        palette = %palette.name,
        pairs = all.len(),
        violations = violations.len(),
        %score,
        "palette audit"
    );

    AuditReport {
        level,
        violations,
        passed,
        score,
        recommendations,
    }
}
