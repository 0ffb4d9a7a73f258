//! Marketing-copy boundary: prompt construction, the generator seam and response parsing.
//!
//! The networked model client lives outside this crate; anything implementing
//! [`CopyGenerator`] can be plugged in.

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgb;
use crate::foundation::error::AdforgeResult;

/// What the copy is for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyBrief {
    /// Product name.
    pub product: String,
    /// Product category.
    pub category: String,
    /// Brand palette, most dominant first.
    pub colors: Vec<Rgb>,
}

impl Default for CopyBrief {
    fn default() -> Self {
        Self {
            product: "Product".to_string(),
            category: "General".to_string(),
            colors: Vec::new(),
        }
    }
}

/// Per-call generator settings. Passed explicitly; there is no process-wide client.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    /// Model identifier.
    pub model: String,
    /// Credential for the generator, if it needs one.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Endpoint override.
    pub endpoint: Option<String>,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            model: "llama-3.1-8b-instant".to_string(),
            api_key: None,
            endpoint: None,
        }
    }
}

impl std::fmt::Debug for CopyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CopyConfig")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Produces raw model text for a prompt.
pub trait CopyGenerator {
    /// Complete `prompt`; the reply is expected to contain a JSON copy record.
    fn complete(&self, prompt: &str, config: &CopyConfig) -> AdforgeResult<String>;
}

/// Generator that always replies with the same text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticCopy(pub String);

impl CopyGenerator for StaticCopy {
    fn complete(&self, _prompt: &str, _config: &CopyConfig) -> AdforgeResult<String> {
        Ok(self.0.clone())
    }
}

fn default_tagline() -> String {
    "Amazing Deal".to_string()
}

fn default_offer() -> String {
    "Limited Offer".to_string()
}

/// Marketing copy for one product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeCopy {
    /// Headline.
    #[serde(default = "default_tagline")]
    pub tagline: String,
    /// One-line caption.
    #[serde(default)]
    pub short_caption: String,
    /// Offer line.
    #[serde(default = "default_offer")]
    pub offer_text: String,
    /// Search keywords.
    #[serde(default)]
    pub seo_keywords: Vec<String>,
}

impl CreativeCopy {
    /// Record used when the generator reply cannot be parsed at all.
    pub fn fallback() -> Self {
        Self {
            tagline: "Amazing Offer Just For You!".to_string(),
            short_caption: "Upgrade your lifestyle today.".to_string(),
            offer_text: "Limited-time deal. Hurry up!".to_string(),
            seo_keywords: Vec::new(),
        }
    }
}

/// Instruction prompt asking for a strict JSON copy record.
pub fn build_copy_prompt(brief: &CopyBrief) -> String {
    let colors = brief
        .colors
        .iter()
        .map(|c| c.to_hex())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"You are a creative retail ad copy generator.

Generate short, catchy, high-conversion marketing text.

Input:
- Product: {product}
- Category: {category}
- Brand Colors: [{colors}]

OUTPUT STRICTLY IN THIS JSON FORMAT:

{{
    "tagline": "...",
    "short_caption": "...",
    "offer_text": "...",
    "seo_keywords": ["...", "...", "..."]
}}
"#,
        product = brief.product,
        category = brief.category,
    )
}

/// Parse a generator reply: whole text as JSON, then the outermost `{...}` span, then
/// [`CreativeCopy::fallback`].
pub fn parse_copy_response(raw: &str) -> CreativeCopy {
    let raw = raw.trim();
    if let Ok(copy) = serde_json::from_str::<CreativeCopy>(raw) {
        return copy;
    }
    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}'))
        && start < end
        && let Ok(copy) = serde_json::from_str::<CreativeCopy>(&raw[start..=end])
    {
        tracing::debug!("copy reply had text around its JSON object");
        return copy;
    }
    tracing::warn!("copy reply is not JSON, using fallback copy");
    CreativeCopy::fallback()
}

/// Ask `generator` for copy. Generator failures fall back like unparseable replies.
#[tracing::instrument(skip(generator, config), fields(model = %config.model))]
pub fn generate_copy(
    generator: &dyn CopyGenerator,
    brief: &CopyBrief,
    config: &CopyConfig,
) -> CreativeCopy {
    let prompt = build_copy_prompt(brief);
    match generator.complete(&prompt, config) {
        Ok(raw) => parse_copy_response(&raw),
        Err(e) => {
            tracing::warn!(error = %e, "copy generator failed, using fallback copy");
            CreativeCopy::fallback()
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/copy.rs"]
mod tests;
