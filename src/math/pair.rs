use super::color::{Color, ParseColorError};
use super::wcag;

/// Contrast ratio for one foreground/background pair of `rgb(...)` strings.
///
/// Parses both colors, computes both luminances, and combines them. Either
/// color failing to parse aborts the computation; callers are expected to
/// have pre-filtered their input, so the error is propagated, not handled.
pub fn contrast_for_pair(foreground: &str, background: &str) -> Result<f64, ParseColorError> {
    let fg: Color = foreground.parse()?;
    let bg: Color = background.parse()?;

    let foreground_luminance = wcag::relative_luminance(fg);
    let background_luminance = wcag::relative_luminance(bg);

    Ok(wcag::contrast_ratio(
        foreground_luminance,
        background_luminance,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_for_pair("rgb(0, 0, 0)", "rgb(255, 255, 255)").unwrap();
        assert!((ratio - 21.0).abs() < 0.01);
    }

    #[test]
    fn same_color_is_1() {
        let ratio = contrast_for_pair("rgb(40, 90, 160)", "rgb(40, 90, 160)").unwrap();
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn swapping_pair_keeps_ratio() {
        let r1 = contrast_for_pair("rgb(255, 0, 0)", "rgb(255, 255, 255)").unwrap();
        let r2 = contrast_for_pair("rgb(255, 255, 255)", "rgb(255, 0, 0)").unwrap();
        assert!((r1 - r2).abs() < 1e-12);
    }

    #[test]
    fn bad_foreground_propagates() {
        assert_eq!(
            contrast_for_pair("red", "rgb(255, 255, 255)"),
            Err(ParseColorError::MissingPrefix)
        );
    }

    #[test]
    fn bad_background_propagates() {
        assert_eq!(
            contrast_for_pair("rgb(0, 0, 0)", "#ffffff"),
            Err(ParseColorError::MissingPrefix)
        );
    }
}
