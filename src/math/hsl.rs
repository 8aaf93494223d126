use serde::{Deserialize, Serialize};

use super::hex::{channel_from_f64, Rgb};

/// Cylindrical color: hue in degrees [0, 360), saturation and lightness in
/// percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Same hue and saturation at a different lightness.
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }
}

/// Convert RGB channels to HSL. Achromatic colors report hue 0 and saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [r, g, b] = rgb.map(|c| c as f64 / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0 * 360.0, s * 100.0, l * 100.0)
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert HSL back to RGB channels, rounding each to the nearest integer.
/// Hue wraps modulo 360; saturation and lightness are clamped to [0, 100].
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let s = hsl.s.clamp(0.0, 100.0) / 100.0;
    let l = hsl.l.clamp(0.0, 100.0) / 100.0;

    if s == 0.0 {
        let gray = channel_from_f64(l * 255.0);
        return [gray, gray, gray];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
    .map(|c| channel_from_f64(c * 255.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 0.01, "{a} vs {b}");
    }

    #[test]
    fn primaries() {
        let red = rgb_to_hsl([255, 0, 0]);
        assert_close(red.h, 0.0);
        assert_close(red.s, 100.0);
        assert_close(red.l, 50.0);

        let green = rgb_to_hsl([0, 255, 0]);
        assert_close(green.h, 120.0);

        let blue = rgb_to_hsl([0, 0, 255]);
        assert_close(blue.h, 240.0);
    }

    #[test]
    fn grays_are_achromatic() {
        let gray = rgb_to_hsl([128, 128, 128]);
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert_close(gray.l, 50.196);
        assert_eq!(hsl_to_rgb(gray), [128, 128, 128]);
    }

    #[test]
    fn magenta_hue_stays_below_360() {
        let hsl = rgb_to_hsl([255, 0, 1]);
        assert!(hsl.h >= 0.0 && hsl.h < 360.0, "hue {}", hsl.h);
    }

    #[test]
    fn hsl_to_rgb_known_values() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 100.0, 50.0)), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(Hsl::new(210.0, 40.0, 98.0)), [248, 250, 252]);
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 100.0)), [255, 255, 255]);
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 0.0)), [0, 0, 0]);
    }

    #[test]
    fn hue_wraps_and_out_of_range_clamps() {
        assert_eq!(hsl_to_rgb(Hsl::new(360.0, 100.0, 50.0)), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(Hsl::new(-240.0, 100.0, 50.0)), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 150.0, 120.0)), [255, 255, 255]);
    }

    #[test]
    fn with_lightness_keeps_hue_and_saturation() {
        let base = Hsl::new(12.0, 34.0, 56.0);
        let lighter = base.with_lightness(78.0);
        assert_eq!((lighter.h, lighter.s, lighter.l), (12.0, 34.0, 78.0));
    }

    proptest! {
        #[test]
        fn rgb_hsl_round_trip_within_one(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let back = hsl_to_rgb(rgb_to_hsl([r, g, b]));
            for (orig, got) in [r, g, b].iter().zip(back.iter()) {
                prop_assert!((*orig as i16 - *got as i16).abs() <= 1, "{:?} -> {:?}", [r, g, b], back);
            }
        }

        #[test]
        fn hsl_components_in_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hsl = rgb_to_hsl([r, g, b]);
            prop_assert!(hsl.h >= 0.0 && hsl.h < 360.0);
            prop_assert!(hsl.s >= 0.0 && hsl.s <= 100.0 + 1e-9);
            prop_assert!(hsl.l >= 0.0 && hsl.l <= 100.0 + 1e-9);
        }
    }
}
