use serde::{Deserialize, Serialize};

use super::hex::Rgb;

/// Convert an sRGB channel (0-255) to linear light.
/// Uses the WCAG 2.x breakpoint: c <= 0.03928 ? c/12.92 : ((c+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
///
/// This is the only luminance used for accessibility decisions.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb;
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// WCAG contrast ratio between two colors.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pass/fail for one text size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compliance {
    pub aa: bool,
    pub aaa: bool,
}

/// Pass/fail for normal and large text. Always derived from a ratio, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WcagCompliance {
    pub normal: Compliance,
    pub large: Compliance,
}

impl WcagCompliance {
    pub fn passes_all(&self) -> bool {
        self.normal.aa && self.normal.aaa && self.large.aa && self.large.aaa
    }
}

pub const AA_NORMAL: f64 = 4.5;
pub const AAA_NORMAL: f64 = 7.0;
pub const AA_LARGE: f64 = 3.0;
pub const AAA_LARGE: f64 = 4.5;

/// Classify a ratio against the fixed WCAG thresholds.
pub fn wcag_compliance(ratio: f64) -> WcagCompliance {
    WcagCompliance {
        normal: Compliance {
            aa: ratio >= AA_NORMAL,
            aaa: ratio >= AAA_NORMAL,
        },
        large: Compliance {
            aa: ratio >= AA_LARGE,
            aaa: ratio >= AAA_LARGE,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::hex::hex_to_rgb;
    use proptest::prelude::*;

    fn ratio(a: &str, b: &str) -> f64 {
        contrast_ratio(hex_to_rgb(a).unwrap(), hex_to_rgb(b).unwrap())
    }

    #[test]
    fn black_on_white_is_21() {
        assert!((ratio("#000000", "#ffffff") - 21.0).abs() < 0.01);
    }

    #[test]
    fn white_on_white_is_1() {
        assert_eq!(ratio("#ffffff", "#ffffff"), 1.0);
    }

    #[test]
    fn gray_on_white() {
        // colord: 4.54
        assert!((ratio("#767676", "#ffffff") - 4.54).abs() < 0.1);
    }

    #[test]
    fn red_on_white() {
        // colord: 3.99
        assert!((ratio("#ff0000", "#ffffff") - 3.99).abs() < 0.1);
    }

    #[test]
    fn slate_on_white() {
        // colord: 14.62
        assert!((ratio("#1e293b", "#ffffff") - 14.62).abs() < 0.1);
    }

    #[test]
    fn zinc_400_on_zinc_950() {
        // colord: 7.76
        assert!((ratio("#a1a1aa", "#09090b") - 7.76).abs() < 0.1);
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(relative_luminance([0, 0, 0]), 0.0);
        assert!((relative_luminance([255, 255, 255]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn aa_normal_boundary() {
        assert!(wcag_compliance(4.5).normal.aa);
        assert!(!wcag_compliance(4.49).normal.aa);
        assert!(!wcag_compliance(4.5).normal.aaa);
    }

    #[test]
    fn large_text_thresholds() {
        let r = wcag_compliance(3.0);
        assert!(r.large.aa);
        assert!(!r.large.aaa);
        assert!(!r.normal.aa);
        assert!(wcag_compliance(4.5).large.aaa);
    }

    #[test]
    fn aaa_normal_requires_7() {
        let r = wcag_compliance(7.0);
        assert!(r.normal.aa);
        assert!(r.normal.aaa);
        assert!(!wcag_compliance(6.99).normal.aaa);
    }

    #[test]
    fn black_on_white_passes_everything() {
        let r = wcag_compliance(ratio("#000000", "#FFFFFF"));
        assert!(r.passes_all());
    }

    proptest! {
        #[test]
        fn ratio_is_symmetric(a in any::<[u8; 3]>(), b in any::<[u8; 3]>()) {
            prop_assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        }

        #[test]
        fn ratio_against_self_is_one(c in any::<[u8; 3]>()) {
            prop_assert!((contrast_ratio(c, c) - 1.0).abs() < 1e-6);
        }

        #[test]
        fn ratio_in_range(a in any::<[u8; 3]>(), b in any::<[u8; 3]>()) {
            let r = contrast_ratio(a, b);
            prop_assert!(r >= 1.0 && r <= 21.0 + 1e-9);
        }
    }
}
