//! Style resolution.
//!
//! Turns a free-text prompt and an optional explicit style selector into a
//! single, deterministic [`StyleDecision`]. Pure, no I/O.

use crate::profile::{BrandProfile, STYLE_AUTO, STYLE_COLORFUL, STYLE_LIGHT, STYLE_MINIMAL};
use serde::{Deserialize, Serialize};
use webforge_core::{ForgeError, Result};

// Keyword sets are scanned in a fixed order: colorful before light before
// monochrome. The order is observable behavior pinned by tests; do not
// reorder.
const COLORFUL_KEYWORDS: [&str; 5] = ["colorful", "vibrant", "playful", "rainbow", "gradient"];
const LIGHT_KEYWORDS: [&str; 5] = ["light", "bright", "clean", "minimal", "white"];
const MONOCHROME_KEYWORDS: [&str; 4] = ["monochrome", "grayscale", "black and white", "mono"];

/// Provenance of a style decision, recorded for audit and telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleSource {
    /// No explicit or implied choice; the profile default applies.
    Default,
    /// The caller named a style key directly.
    UserExplicit,
    /// A keyword in the prompt implied a style.
    UserImplicit,
}

/// The resolved, provenance-tagged choice of style variant for one run.
///
/// Immutable once computed; exactly one exists per pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDecision {
    pub profile: BrandProfile,
    pub source: StyleSource,
    pub style_key: String,
    pub override_detected: bool,
}

/// Resolve the style for a request.
///
/// Priority order, first match wins: explicit non-"auto" key, then colorful
/// keywords, then light keywords, then monochrome keywords, then the
/// profile default. Every branch returns the same profile; only the key and
/// provenance vary.
pub fn resolve(profile: &BrandProfile, prompt: &str, explicit: Option<&str>) -> StyleDecision {
    if let Some(key) = explicit {
        if key != STYLE_AUTO && !key.is_empty() {
            tracing::info!(style_key = key, source = "user-explicit", "brand resolved");
            return StyleDecision {
                profile: profile.clone(),
                source: StyleSource::UserExplicit,
                style_key: key.to_string(),
                override_detected: true,
            };
        }
    }

    let haystack = prompt.to_lowercase();

    for (keywords, key) in [
        (&COLORFUL_KEYWORDS[..], STYLE_COLORFUL),
        (&LIGHT_KEYWORDS[..], STYLE_LIGHT),
        (&MONOCHROME_KEYWORDS[..], STYLE_MINIMAL),
    ] {
        if keywords.iter().any(|k| haystack.contains(k)) {
            tracing::info!(style_key = key, source = "user-implicit", "brand resolved");
            return StyleDecision {
                profile: profile.clone(),
                source: StyleSource::UserImplicit,
                style_key: key.to_string(),
                override_detected: true,
            };
        }
    }

    tracing::info!(style_key = %profile.default_style_key, source = "default", "brand resolved");
    StyleDecision {
        profile: profile.clone(),
        source: StyleSource::Default,
        style_key: profile.default_style_key.clone(),
        override_detected: false,
    }
}

/// Non-bypassable precondition: a run may not start generation without a
/// usable style decision. This is the only place the pipeline aborts
/// outright before calling the provider.
pub fn enforce(decision: &StyleDecision) -> Result<()> {
    if decision.profile.name.is_empty() {
        return Err(ForgeError::Brand("style decision has no brand profile".to_string()));
    }
    if decision.style_key.is_empty() {
        return Err(ForgeError::Brand("style decision has no style key".to_string()));
    }
    Ok(())
}
