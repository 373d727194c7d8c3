//! Brand-specific sub-rules.
//!
//! Only meaningful for profiles with the monospace / sharp-corner /
//! dark-default identity; each finding is surfaced with a `BRAND_` prefix
//! and folded into the same violation list as the general rules.

use crate::corpus::Corpus;
use regex::Regex;
use std::sync::LazyLock;
use webforge_brand::BrandProfile;
use webforge_core::Violation;

/// Monospace typography marker.
pub const MONOSPACE_MARKER: &str = "font-mono";

/// Corner-rounding tokens the sharp-corner identity forbids.
pub const LARGE_RADIUS_TOKENS: [&str; 5] =
    ["rounded-lg", "rounded-xl", "rounded-2xl", "rounded-3xl", "rounded-full"];

/// Raw palette occurrences tolerated before the color-token rule fires.
pub const MAX_RAW_PALETTE_TOKENS: usize = 3;

/// Semantic dark-surface tokens that satisfy the dark-mode identity.
pub const DARK_SURFACE_TOKENS: [&str; 4] = ["bg-background", "bg-surface", "bg-card", "dark:"];

/// Light background/text pair that betrays a light-on-white page.
pub const LIGHT_BACKGROUND_MARKER: &str = "bg-white";
pub const LIGHT_TEXT_MARKER: &str = "text-black";

/// Raw chromatic palette classes, e.g. `bg-blue-500` or `text-rose-300`.
/// Grayscale shades are not counted; dark gray surfaces are on-brand.
static RAW_PALETTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"-(?:red|orange|amber|yellow|lime|green|emerald|teal|cyan|sky|blue|indigo|violet|purple|fuchsia|pink|rose)-\d{2,3}",
    )
    .expect("palette pattern")
});

/// Structural tags the brand identity refuses to ship bare.
static BARE_BRAND_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(?:div|span|button|input)\b[^>]*>").expect("brand tag pattern")
});

fn typography(corpus: &Corpus) -> Option<Violation> {
    if !corpus.contains(MONOSPACE_MARKER) {
        return Some(Violation::critical(
            "BRAND_TYPOGRAPHY",
            "No monospace typography marker (font-mono) found.".to_string(),
            "Apply font-mono to the root layout so all text is monospace.",
        ));
    }
    None
}

fn border_radius(corpus: &Corpus) -> Option<Violation> {
    let found: Vec<&str> =
        LARGE_RADIUS_TOKENS.iter().copied().filter(|t| corpus.contains(t)).collect();
    if !found.is_empty() {
        return Some(Violation::critical(
            "BRAND_BORDER_RADIUS",
            format!("Large corner rounding found ({}); the brand mandates sharp corners.",
                found.join(", ")),
            "Remove rounded-lg and larger radius classes.",
        ));
    }
    None
}

fn color_tokens(corpus: &Corpus) -> Option<Violation> {
    let raw = RAW_PALETTE.find_iter(&corpus.text).count();
    if raw > MAX_RAW_PALETTE_TOKENS {
        return Some(Violation::critical(
            "BRAND_COLOR_TOKENS",
            format!(
                "{} raw palette color classes found (limit {}).",
                raw, MAX_RAW_PALETTE_TOKENS
            ),
            "Use semantic color tokens (bg-background, bg-surface, bg-card) instead.",
        ));
    }
    None
}

fn dark_mode(corpus: &Corpus) -> Option<Violation> {
    let light_pair =
        corpus.contains(LIGHT_BACKGROUND_MARKER) && corpus.contains(LIGHT_TEXT_MARKER);
    let has_dark_surface = DARK_SURFACE_TOKENS.iter().any(|t| corpus.contains(t));
    if light_pair && !has_dark_surface {
        return Some(Violation::critical(
            "BRAND_DARK_MODE",
            "Light background and text markers found with no dark surface token.".to_string(),
            "Build on dark semantic surfaces; the brand is dark by default.",
        ));
    }
    None
}

fn no_unstyled(corpus: &Corpus) -> Option<Violation> {
    let bare = BARE_BRAND_TAG
        .find_iter(&corpus.text)
        .filter(|m| !m.as_str().contains("className"))
        .count();
    if bare > 0 {
        return Some(Violation::critical(
            "BRAND_NO_UNSTYLED",
            format!("{} element(s) carry no className at all.", bare),
            "Every div/span/button/input must carry brand utility classes.",
        ));
    }
    None
}

/// Run all brand sub-rules, in declaration order.
///
/// Returns an empty list for profiles that do not carry the monospace /
/// sharp-corner / dark-default identity.
pub fn evaluate(corpus: &Corpus, profile: &BrandProfile) -> Vec<Violation> {
    if !profile.enforces_brand_rules() {
        return vec![];
    }

    [typography, border_radius, color_tokens, dark_mode, no_unstyled]
        .iter()
        .filter_map(|rule| rule(corpus))
        .collect()
}
