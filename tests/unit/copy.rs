use super::*;
use crate::foundation::error::AdforgeError;

struct Failing;

impl CopyGenerator for Failing {
    fn complete(&self, _prompt: &str, _config: &CopyConfig) -> AdforgeResult<String> {
        Err(AdforgeError::render("upstream unavailable"))
    }
}

struct Echo;

impl CopyGenerator for Echo {
    fn complete(&self, prompt: &str, config: &CopyConfig) -> AdforgeResult<String> {
        Ok(format!(
            r#"{{"tagline": "{}", "offer_text": "{}"}}"#,
            prompt.contains("Sneakers"),
            config.model
        ))
    }
}

#[test]
fn strict_json_is_parsed_directly() {
    let c = parse_copy_response(
        r#"{"tagline":"Run Free","short_caption":"Light.","offer_text":"20% OFF","seo_keywords":["shoes"]}"#,
    );
    assert_eq!(c.tagline, "Run Free");
    assert_eq!(c.offer_text, "20% OFF");
    assert_eq!(c.seo_keywords, ["shoes"]);
}

#[test]
fn json_wrapped_in_chatter_is_recovered() {
    let c = parse_copy_response(
        "Sure! Here is JSON:\n{\"tagline\": \"Fresh Look\", \"offer_text\": \"BOGO\"}\nEnjoy!",
    );
    assert_eq!(c.tagline, "Fresh Look");
    assert_eq!(c.offer_text, "BOGO");
    assert_eq!(c.short_caption, "");
}

#[test]
fn garbage_falls_back_to_default_record() {
    assert_eq!(parse_copy_response("no json here"), CreativeCopy::fallback());
    assert_eq!(parse_copy_response("} backwards {"), CreativeCopy::fallback());
    assert_eq!(parse_copy_response("[1, 2, 3]"), CreativeCopy::fallback());
}

#[test]
fn missing_fields_default_individually() {
    let c = parse_copy_response("{}");
    assert_eq!(c.tagline, "Amazing Deal");
    assert_eq!(c.offer_text, "Limited Offer");
    assert!(c.seo_keywords.is_empty());
}

#[test]
fn prompt_mentions_brief_and_format() {
    let brief = CopyBrief {
        product: "Sneakers".into(),
        category: "Footwear".into(),
        colors: vec![Rgb::RED],
    };
    let prompt = build_copy_prompt(&brief);
    assert!(prompt.contains("Product: Sneakers"));
    assert!(prompt.contains("Category: Footwear"));
    assert!(prompt.contains("#ff0000"));
    assert!(prompt.contains("\"seo_keywords\""));
}

#[test]
fn generate_copy_passes_prompt_and_config() {
    let brief = CopyBrief {
        product: "Sneakers".into(),
        ..CopyBrief::default()
    };
    let config = CopyConfig {
        model: "m-1".into(),
        ..CopyConfig::default()
    };
    let c = generate_copy(&Echo, &brief, &config);
    assert_eq!(c.tagline, "true");
    assert_eq!(c.offer_text, "m-1");
}

#[test]
fn generator_errors_fall_back() {
    let c = generate_copy(&Failing, &CopyBrief::default(), &CopyConfig::default());
    assert_eq!(c, CreativeCopy::fallback());
}

#[test]
fn static_copy_round_trips_through_the_parser() {
    let generator = StaticCopy(r#"{"tagline":"A","offer_text":"B"}"#.to_string());
    let c = generate_copy(&generator, &CopyBrief::default(), &CopyConfig::default());
    assert_eq!((c.tagline.as_str(), c.offer_text.as_str()), ("A", "B"));
}

#[test]
fn config_debug_hides_the_key() {
    let config = CopyConfig {
        api_key: Some("secret-token".into()),
        ..CopyConfig::default()
    };
    assert!(!format!("{config:?}").contains("secret-token"));
}
