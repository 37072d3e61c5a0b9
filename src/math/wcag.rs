use serde::Serialize;

use super::color::Color;

/// Convert an sRGB channel (0-255) to linear light value.
/// sRGB -> linear: s = c/255; if s <= 0.03928: s/12.92, else ((s+0.055)/1.055)^2.4
pub fn linearize(channel: u32) -> f64 {
    let s = f64::from(channel) / 255.0;
    if s <= 0.03928 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * linearize(color.red) + 0.7152 * linearize(color.green) + 0.0722 * linearize(color.blue)
}

/// WCAG contrast ratio between two relative luminances.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
/// Symmetric in its arguments; equal luminances give exactly 1.0.
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG SC 1.4.3 / 1.4.6 pass flags for a contrast ratio.
/// Annotation only; the pipeline's threshold stage never consults these.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Conformance {
    /// AA, normal text: ratio >= 4.5
    pub aa: bool,
    /// AA, large text: ratio >= 3.0
    pub aa_large: bool,
    /// AAA, normal text: ratio >= 7.0
    pub aaa: bool,
}

impl Conformance {
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            aa: ratio >= 4.5,
            aa_large: ratio >= 3.0,
            aaa: ratio >= 7.0,
        }
    }
}
