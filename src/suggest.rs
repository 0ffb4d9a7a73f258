use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgb;

/// Layout advice for a product image, grouped by topic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSuggestions {
    /// Layout families that suit the image shape.
    pub recommended_layouts: Vec<String>,
    /// Copywriting advice.
    pub text_guidelines: Vec<String>,
    /// Text color advice derived from the brand color.
    pub color_guidelines: Vec<String>,
    /// Composition advice.
    pub alignment_guidelines: Vec<String>,
    /// Problems detected in the inputs.
    pub warnings: Vec<String>,
}

/// Width over height; a zero height counts as square.
pub fn aspect_ratio(width: u32, height: u32) -> f64 {
    if height == 0 {
        1.0
    } else {
        f64::from(width) / f64::from(height)
    }
}

/// Rule-based suggestions from the image aspect ratio and the brand palette.
pub fn suggest_layout(aspect_ratio: f64, colors: &[Rgb]) -> LayoutSuggestions {
    let mut out = LayoutSuggestions::default();

    let layout = if aspect_ratio > 1.3 {
        "Hero Right Layout"
    } else if aspect_ratio < 0.8 {
        "Vertical Layout"
    } else {
        "Centered Layout"
    };
    out.recommended_layouts.push(layout.to_string());

    if let Some(first) = colors.first() {
        let advice = if first.luma() < 90.0 {
            "Use light text"
        } else {
            "Use dark text"
        };
        out.color_guidelines.push(advice.to_string());
    }

    out.text_guidelines
        .push("Keep headline under 14 words".to_string());
    out.alignment_guidelines
        .push("Use rule of thirds".to_string());
    out
}

#[cfg(test)]
#[path = "../tests/unit/suggest.rs"]
mod tests;
