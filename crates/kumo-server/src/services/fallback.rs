//! Local Fallback Transformer
//!
//! Template-based witty rewrite used whenever the remote service is
//! unavailable or disabled. Pure and network-free; the only randomness is
//! the template pick, which takes an injected RNG.

use async_trait::async_trait;
use rand::{rngs::StdRng, Rng, SeedableRng};

use kumo::domain::Style;
use kumo::ports::StyleRewriter;

/// Hard cap on the fallback output length, in characters.
const MAX_LEN: usize = 200;

/// Facts mentioning servers get one fixed clause, no randomness.
const SERVER_TEMPLATE: &str = "{fact} — servers: where the clouds do their heavy lifting.";

/// Likewise for facts mentioning data.
const DATA_TEMPLATE: &str = "{fact} — proof that data has commitment issues: it lives everywhere.";

const SARCASTIC: [&str; 4] = [
    "{fact} — and people still act surprised.",
    "{fact} Yep, that happened. You're welcome.",
    "{fact} Because who needs simplicity?",
    "{fact} Plot twist: it's actually useful.",
];

const DRY: [&str; 4] = [
    "{fact} In summary: predictable, but useful.",
    "{fact} Not glamorous, just reliable.",
    "{fact} Facts are stubborn things.",
    "{fact} Efficiency at its finest.",
];

const PUNNY: [&str; 4] = [
    "{fact} Cloud computing: where the servers get their silver linings.",
    "{fact} It's not magic, it's just well-placed electrons.",
    "{fact} Data in the cloud: floating on a sea of sarcasm.",
    "{fact} Servers: the unsung heroes of the digital age.",
];

const SELF_DEPRECATING: [&str; 4] = [
    "{fact} We tried explaining it and now the cloud is offended.",
    "{fact} I'm just a function trying my best.",
    "{fact} Even the cloud has better jokes.",
    "{fact} My code is as reliable as this fact.",
];

const PLAYFUL: [&str; 4] = [
    "{fact} That's the cloud doing a little dance.",
    "{fact} Imagine tiny servers sipping coffee together.",
    "{fact} Clouds: fluffy on the outside, powerful within.",
    "{fact} Data storage with a side of whimsy.",
];

/// Used when no style was supplied at all.
const DEFAULT: [&str; 4] = [
    "{fact} — basically, the cloud's version of a swiss army knife.",
    "{fact} In short: clouds do more than just look fluffy.",
    "{fact} Cloud magic in action.",
    "{fact} Because local storage is so last century.",
];

fn style_templates(style: Option<Style>) -> &'static [&'static str] {
    match style {
        Some(Style::Sarcastic) => &SARCASTIC,
        Some(Style::Dry) => &DRY,
        Some(Style::Punny) => &PUNNY,
        Some(Style::SelfDeprecating) => &SELF_DEPRECATING,
        Some(Style::Playful) => &PLAYFUL,
        None => &DEFAULT,
    }
}

/// Create a lightweight witty transformation locally.
///
/// Facts containing "server" or "data" (case-insensitive) take a fixed
/// template; everything else draws uniformly among the style's four
/// candidates. Output never exceeds 200 characters.
pub fn witty_fallback(fact: &str, style: Option<Style>, rng: &mut impl Rng) -> String {
    let low = fact.to_lowercase();
    let template = if low.contains("server") {
        SERVER_TEMPLATE
    } else if low.contains("data") {
        DATA_TEMPLATE
    } else {
        let candidates = style_templates(style);
        candidates[rng.gen_range(0..candidates.len())]
    };

    let witty = template.replacen("{fact}", fact, 1);
    truncate(witty)
}

fn truncate(witty: String) -> String {
    if witty.chars().count() <= MAX_LEN {
        return witty;
    }
    let cut: String = witty.chars().take(MAX_LEN - 3).collect();
    format!("{}...", cut.trim_end())
}

/// [`StyleRewriter`] over the local templates, wired instead of the remote
/// agent when no usable credential is configured.
pub struct TemplateRewriter;

#[async_trait]
impl StyleRewriter for TemplateRewriter {
    async fn rewrite(&self, fact: &str, style: Style) -> String {
        witty_fallback(fact, Some(style), &mut StdRng::from_entropy())
    }
}
