use crate::error::{EngineError, Result};
use crate::math::{contrast_ratio, wcag_compliance};
use crate::palette::Color;

/// Suggested usage for each color of a palette.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleSuggestion {
    pub background: Color,
    pub text: Color,
    pub borders: Vec<Color>,
    pub accents: Vec<Color>,
}

/// Partition colors into background, text, borders and accents.
///
/// Heuristic: the darkest color (WCAG luminance) becomes the background and
/// the lightest the text. Every other color is a border when it passes AA
/// normal text against either of those two, otherwise an accent. Palettes
/// meant for light backgrounds come out inverted; that is not corrected here.
///
/// When several colors share the top luminance rank with the background's
/// hex, the lightest color with a different hex is used as text.
pub fn suggest_roles(colors: &[Color]) -> Result<RoleSuggestion> {
    match colors.len() {
        0 => return Err(EngineError::EmptyPalette),
        1 => return Err(EngineError::TooFewColors(1)),
        _ => {}
    }

    let mut ranked: Vec<(f64, &Color)> = colors.iter().map(|c| (c.luminance(), c)).collect();
    // stable: equal luminance keeps palette order
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    let background = ranked[0].1;
    let text_rank = ranked
        .iter()
        .rposition(|(_, c)| c.hex() != background.hex())
        .ok_or(EngineError::TooFewColors(colors.len()))?;
    let text = ranked[text_rank].1;

    let (mut borders, mut accents) = (Vec::new(), Vec::new());
    for (rank, (_, candidate)) in ranked.iter().enumerate() {
        if rank == 0 || rank == text_rank {
            continue;
        }
        let on_background = wcag_compliance(contrast_ratio(candidate.rgb(), background.rgb()));
        let on_text = wcag_compliance(contrast_ratio(candidate.rgb(), text.rgb()));
        if on_background.normal.aa || on_text.normal.aa {
            borders.push((*candidate).clone());
        } else {
            accents.push((*candidate).clone());
        }
    }

    tracing::debug!(
        background = %background.hex(),
        text = %text.hex(),
        borders = borders.len(),
        accents = accents.len(),
        "suggested palette roles"
    );

    Ok(RoleSuggestion {
        background: background.clone(),
        text: text.clone(),
        borders,
        accents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn color(role: &str, hex: &str) -> Color {
        Color::from_hex(role, hex).unwrap()
    }

    fn sunset() -> Vec<Color> {
        vec![
            color("Primary", "#FF6B6B"),
            color("Secondary", "#4ECDC4"),
            color("Accent", "#FFE66D"),
            color("Background", "#F7FFF7"),
            color("Surface", "#1A1A1A"),
        ]
    }

    #[test]
    fn darkest_is_background_lightest_is_text() {
        let s = suggest_roles(&sunset()).unwrap();
        assert_eq!(s.background.hex(), "#1a1a1a");
        assert_eq!(s.background.role, "Surface");
        assert_eq!(s.text.hex(), "#f7fff7");
        let ratio = contrast_ratio(s.background.rgb(), s.text.rgb());
        assert!(ratio > 15.8 && ratio < 19.2, "ratio {ratio}");
    }

    #[test]
    fn middle_colors_partitioned() {
        let s = suggest_roles(&sunset()).unwrap();
        // all three middle colors are bright enough to reach 4.5 on #1a1a1a
        assert_eq!(s.borders.len() + s.accents.len(), 3);
        let borders: Vec<&str> = s.borders.iter().map(|c| c.hex()).collect();
        assert_eq!(borders, vec!["#ff6b6b", "#4ecdc4", "#ffe66d"]);
        assert!(s.accents.is_empty());
    }

    #[test]
    fn low_contrast_middle_is_accent() {
        let colors = vec![
            color("Ink", "#000000"),
            color("Mid", "#595959"),
            color("Paper", "#ffffff"),
            color("Gray", "#777777"),
        ];
        let s = suggest_roles(&colors).unwrap();
        // #595959: ~3.0 on black, ~7.0 on white -> border
        // #777777: ~4.7 on black, ~4.48 on white -> border
        assert_eq!(s.borders.len(), 2);

        let muted = vec![
            color("Dark", "#333333"),
            color("Mid", "#666666"),
            color("Light", "#999999"),
        ];
        let s = suggest_roles(&muted).unwrap();
        assert_eq!(s.accents.len(), 1);
        assert_eq!(s.accents[0].hex(), "#666666");
    }

    #[test]
    fn empty_and_single_are_errors() {
        assert!(matches!(suggest_roles(&[]), Err(EngineError::EmptyPalette)));
        assert!(matches!(
            suggest_roles(&[color("Only", "#123456")]),
            Err(EngineError::TooFewColors(1))
        ));
    }

    #[test]
    fn identical_colors_have_no_text_candidate() {
        let same = vec![color("A", "#808080"), color("B", "#808080")];
        assert!(matches!(suggest_roles(&same), Err(EngineError::TooFewColors(2))));
    }

    #[test]
    fn duplicate_of_lightest_is_skipped_for_text() {
        let colors = vec![
            color("A", "#ffffff"),
            color("B", "#ffffff"),
            color("C", "#000000"),
        ];
        let s = suggest_roles(&colors).unwrap();
        assert_eq!(s.background.hex(), "#000000");
        assert_eq!(s.text.hex(), "#ffffff");
        assert_eq!(s.text.role, "B");
        assert_eq!(s.borders.len(), 1);
    }

    #[test]
    fn input_is_not_reordered() {
        let colors = sunset();
        let before = colors.clone();
        let _ = suggest_roles(&colors).unwrap();
        assert_eq!(colors, before);
    }

    proptest! {
        #[test]
        fn background_and_text_differ(rgbs in prop::collection::vec(any::<[u8; 3]>(), 2..8)) {
            prop_assume!(rgbs.iter().any(|c| *c != rgbs[0]));
            let colors: Vec<Color> = rgbs.iter().map(|c| Color::from_rgb("c", *c)).collect();
            let s = suggest_roles(&colors).unwrap();
            prop_assert_ne!(s.background.hex(), s.text.hex());
            prop_assert!(s.background.luminance() <= s.text.luminance());
            prop_assert_eq!(s.borders.len() + s.accents.len(), colors.len() - 2);
        }
    }
}
