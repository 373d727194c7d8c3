//! Build-plan construction and validation.
//!
//! The plan is advisory context for generation prompts, not safety-critical
//! state: a malformed or invalid candidate degrades to a hard-coded
//! fallback instead of failing the run, and the accepted plan's style key
//! is always overwritten to match brand resolution.

use webforge_brand::{BrandProfile, is_known_style_key};
use webforge_core::{AppKind, BuildPlan};

/// Build the plan-request instruction text for a style key.
///
/// Sent as system instructions; the raw user request rides along as the
/// user message.
pub fn build_prompt(profile: &BrandProfile, style_key: &str) -> String {
    format!(
        r#"You are planning a small {brand} web application. Style variant: {style_key} ({descriptor}).

Summarize the build as one JSON object, no prose:
{{"kind": "web", "pages": ["..."], "layoutSections": ["..."], "components": ["..."], "styleKey": "{style_key}", "usesState": false, "usesForms": false, "needsBackend": false, "usesRouting": false}}

Rules:
- "pages" and "layoutSections" must be non-empty.
- "components" must name at least two components.
- "kind" is "web" unless the request is explicitly a mobile app."#,
        brand = profile.name,
        style_key = style_key,
        descriptor = profile.style_descriptor(style_key),
    )
}

/// Validate a plan candidate. All checks must hold; the kind constraint is
/// carried by the `AppKind` type itself.
pub fn validate(candidate: &BuildPlan) -> bool {
    !candidate.pages.is_empty()
        && !candidate.layout_sections.is_empty()
        && candidate.components.len() >= 2
        && is_known_style_key(&candidate.style_key)
}

/// The hard-coded fallback: single page, minimal three-section layout,
/// three stub components.
pub fn fallback_plan(style_key: &str) -> BuildPlan {
    BuildPlan {
        kind: AppKind::Web,
        pages: vec!["home".to_string()],
        layout_sections: vec!["header".to_string(), "main".to_string(), "footer".to_string()],
        components: vec!["Header".to_string(), "MainSection".to_string(), "Footer".to_string()],
        style_key: style_key.to_string(),
        uses_state: false,
        uses_forms: false,
        needs_backend: false,
        uses_routing: false,
    }
}

/// Human-readable rendering of an accepted plan, stamped into run metadata.
pub fn explanation(plan: &BuildPlan) -> String {
    format!(
        "A {} app with page(s) {}; layout sections {}; components {}.",
        match plan.kind {
            AppKind::Web => "web",
            AppKind::Mobile => "mobile",
        },
        plan.pages.join(", "),
        plan.layout_sections.join(", "),
        plan.components.join(", "),
    )
}
