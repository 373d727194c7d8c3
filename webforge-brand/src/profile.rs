//! Brand profile configuration.

use serde::{Deserialize, Serialize};

/// Style key for the dark, default Forge look.
pub const STYLE_DARK: &str = "dark";
/// Style key for the light variant.
pub const STYLE_LIGHT: &str = "light";
/// Style key for the colorful variant.
pub const STYLE_COLORFUL: &str = "colorful";
/// Style key for the monochrome/minimal variant.
pub const STYLE_MINIMAL: &str = "minimal";

/// Sentinel explicit style key meaning "no explicit choice".
pub const STYLE_AUTO: &str = "auto";

/// The closed set of recognized style keys.
pub const STYLE_KEYS: [&str; 4] = [STYLE_DARK, STYLE_LIGHT, STYLE_COLORFUL, STYLE_MINIMAL];

/// Check membership in the closed style-key set.
pub fn is_known_style_key(key: &str) -> bool {
    STYLE_KEYS.contains(&key)
}

/// The static design-identity configuration a run must comply with.
///
/// Profiles are versioned, read-only values injected into the pipeline.
/// The natural-language `compliance_rules` feed prompt construction only;
/// the machine-checkable subset lives in the contract validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    /// Brand identifier, e.g. `"forge"`.
    pub name: String,
    pub version: String,
    /// Style key used when a request carries no explicit or implied choice.
    pub default_style_key: String,
    /// Typography token description for prompt construction.
    pub typography: String,
    /// Spacing token description for prompt construction.
    pub spacing: String,
    /// Color token description for prompt construction.
    pub colors: String,
    /// Whether the identity mandates monospace typography.
    pub monospace: bool,
    /// Whether the identity mandates sharp corners only.
    pub sharp_corners: bool,
    /// Whether the identity is dark-mode by default.
    pub dark_default: bool,
    /// Natural-language compliance rules injected into generation prompts.
    pub compliance_rules: Vec<String>,
}

impl BrandProfile {
    /// The canonical Forge profile: monospace typography, sharp corners,
    /// dark by default.
    pub fn forge() -> Self {
        Self {
            name: "forge".to_string(),
            version: "2".to_string(),
            default_style_key: STYLE_DARK.to_string(),
            typography: "Monospace throughout (font-mono). No serif or decorative faces."
                .to_string(),
            spacing: "4px base grid; gap-* and space-y-* utilities over ad-hoc margins."
                .to_string(),
            colors: "Semantic surface tokens (bg-background, bg-surface, bg-card) over raw \
                     palette classes; dark surfaces by default."
                .to_string(),
            monospace: true,
            sharp_corners: true,
            dark_default: true,
            compliance_rules: vec![
                "Use font-mono for all text.".to_string(),
                "Sharp corners only: never rounded-lg or larger.".to_string(),
                "Prefer semantic color tokens over raw palette classes.".to_string(),
                "Dark surfaces by default; never ship a light-on-white page.".to_string(),
                "Every structural element carries a className.".to_string(),
            ],
        }
    }

    /// Override the default style key (used to derive alternate-label
    /// deployments that reuse the same profile).
    pub fn with_default_style_key(mut self, key: impl Into<String>) -> Self {
        self.default_style_key = key.into();
        self
    }

    /// Whether the brand sub-rules of the contract validator apply.
    pub fn enforces_brand_rules(&self) -> bool {
        self.monospace && self.sharp_corners && self.dark_default
    }

    /// Short prompt-facing description of a style key.
    pub fn style_descriptor(&self, key: &str) -> &'static str {
        match key {
            STYLE_LIGHT => "light surfaces with dark monospace text and generous whitespace",
            STYLE_COLORFUL => "saturated accent colors over dark surfaces, used sparingly",
            STYLE_MINIMAL => "strict grayscale, no accent color at all",
            _ => "dark surfaces, high contrast, restrained accents",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forge_profile_identity() {
        let profile = BrandProfile::forge();
        assert_eq!(profile.name, "forge");
        assert_eq!(profile.default_style_key, STYLE_DARK);
        assert!(profile.enforces_brand_rules());
        assert!(!profile.compliance_rules.is_empty());
    }

    #[test]
    fn test_known_style_keys() {
        for key in STYLE_KEYS {
            assert!(is_known_style_key(key));
        }
        assert!(!is_known_style_key("auto"));
        assert!(!is_known_style_key("neon"));
    }

    #[test]
    fn test_alternate_default_key_reuses_profile() {
        let profile = BrandProfile::forge().with_default_style_key(STYLE_MINIMAL);
        assert_eq!(profile.default_style_key, STYLE_MINIMAL);
        // Identity flags are unchanged; only the label differs.
        assert!(profile.enforces_brand_rules());
    }

    #[test]
    fn test_style_descriptor_covers_all_keys() {
        let profile = BrandProfile::forge();
        for key in STYLE_KEYS {
            assert!(!profile.style_descriptor(key).is_empty());
        }
    }
}
