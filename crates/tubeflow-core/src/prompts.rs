//! Prompt templates.

use anyhow::{Context, Result};
use minijinja::{Environment, UndefinedBehavior, context};

/// Instruction template for strategy generation (`MiniJinja`, variable `niche`).
pub const STRATEGY_PROMPT_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/strategy_prompt.md"
));

/// Renders the strategy prompt with `niche` inserted verbatim.
///
/// The template is registered without an `.html` suffix, so no
/// auto-escaping is applied to the niche.
///
/// # Errors
/// Returns an error if the template fails to compile or render.
pub fn render_strategy_prompt(niche: &str) -> Result<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template("strategy_prompt", STRATEGY_PROMPT_TEMPLATE)
        .context("Failed to compile strategy prompt template")?;

    let output = env
        .get_template("strategy_prompt")
        .context("Failed to load strategy prompt template")?
        .render(context! { niche })
        .context("Failed to render strategy prompt")?;

    Ok(output.replace("\r\n", "\n").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_niche_is_interpolated() {
        let prompt = render_strategy_prompt("Urban Gardening").unwrap();
        assert!(prompt.contains("Analyze the niche: \"Urban Gardening\"."));
        assert!(prompt.contains("exactly these 8 sections"));
    }

    #[test]
    fn test_niche_is_not_escaped() {
        let niche = "Tips & <Tricks> \"quoted\" {{ not_a_var }}";
        let prompt = render_strategy_prompt(niche).unwrap();
        assert!(prompt.contains(niche));
    }

    #[test]
    fn test_template_mentions_every_section() {
        for heading in [
            "Niche Analysis",
            "Video Blueprint",
            "Scriptwriting",
            "SEO",
            "Thumbnails",
            "Shorts Version",
            "Upload Automation",
            "Monetization",
        ] {
            assert!(STRATEGY_PROMPT_TEMPLATE.contains(heading), "{heading}");
        }
    }
}
