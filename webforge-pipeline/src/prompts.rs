//! Prompt assembly for generation and repair.

use webforge_brand::BrandProfile;
use webforge_core::{BuildPlan, QualityScore, Violation};

use crate::pipeline::BuildRequest;

/// System prompt for application generation: brand tokens, compliance
/// directives, the active style descriptor, and the required JSON shape.
pub fn system_prompt(profile: &BrandProfile, style_key: &str) -> String {
    let rules = profile
        .compliance_rules
        .iter()
        .map(|r| format!("- {r}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"You generate complete React + Tailwind web applications for the {brand} brand.

Brand tokens:
- Typography: {typography}
- Spacing scale: {spacing}
- Color system: {colors}

Compliance directives:
{rules}

Style variant: {style_key}. {descriptor}

Respond with one JSON object, no prose and no markdown fences:
{{"summary": "...", "files": [{{"path": "src/main.tsx", "content": "..."}}]}}

The file set must include src/main.tsx, src/App.tsx, and src/index.css, plus
at least two component files under src/components/. Every UI element carries
Tailwind classes via className."#,
        brand = profile.name,
        typography = profile.typography,
        spacing = profile.spacing,
        colors = profile.colors,
        rules = rules,
        style_key = style_key,
        descriptor = profile.style_descriptor(style_key),
    )
}

/// User prompt for a generation attempt: the request, the accepted plan,
/// any existing files the output must integrate with, and an optional
/// repair directive from the previous failed attempt.
pub fn generation_prompt(request: &BuildRequest, plan: &BuildPlan, repair: Option<&str>) -> String {
    let mut prompt = format!("Request:\n{}\n", request.prompt);

    if let Ok(plan_json) = serde_json::to_string_pretty(plan) {
        prompt.push_str("\nBuild plan:\n");
        prompt.push_str(&plan_json);
        prompt.push('\n');
    }

    if !request.existing_files.is_empty() {
        prompt.push_str("\nExisting project files (integrate with these, do not contradict them):\n");
        for file in &request.existing_files {
            prompt.push_str(&format!("--- {} ---\n{}\n", file.path, file.content));
        }
    }

    if let Some(directive) = repair {
        prompt.push_str("\nThe previous attempt was rejected. ");
        prompt.push_str(directive);
        prompt.push('\n');
    }

    prompt
}

/// Repair directive built from contract violations. Each line is a
/// formatted violation; the trailing instruction forces a full resubmit.
pub fn repair_directive(violations: &[Violation]) -> String {
    let mut directive = String::from("Fix every issue below:\n");
    for violation in violations {
        directive.push_str(&format!("- {}\n", violation.format()));
    }
    directive.push_str(
        "Resubmit the complete corrected application as one JSON object with all files. No partial diffs.",
    );
    directive
}

/// Repair directive for a below-threshold quality score.
pub fn score_repair_directive(quality: &QualityScore) -> String {
    format!(
        "Quality scored {}/100 (structure {}, styling {}, accessibility {}, ux {}), below the acceptance bar. \
Add more well-sized components, richer Tailwind styling with responsive breakpoints, \
semantic landmarks and aria attributes, and interaction states (hover, focus, loading, empty). \
Resubmit the complete corrected application as one JSON object with all files. No partial diffs.",
        quality.overall, quality.structure, quality.styling, quality.accessibility, quality.ux,
    )
}

/// One-shot re-ask when the model reply could not be parsed as output JSON.
pub fn extraction_retry_prompt(raw: &str) -> String {
    format!(
        "Your previous reply was not valid JSON:\n\n{raw}\n\nRe-emit it as exactly one JSON object \
with \"summary\" and \"files\" fields. No prose, no markdown fences."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use webforge_core::{GeneratedFile, Severity};

    use crate::plan::fallback_plan;

    #[test]
    fn test_system_prompt_lists_compliance_rules() {
        let profile = BrandProfile::forge();
        let prompt = system_prompt(&profile, "dark");
        for rule in &profile.compliance_rules {
            assert!(prompt.contains(rule.as_str()));
        }
        assert!(prompt.contains("src/main.tsx"));
    }

    #[test]
    fn test_generation_prompt_embeds_plan_and_existing_files() {
        let request = BuildRequest::new("a dashboard").with_existing_files(vec![GeneratedFile {
            path: "src/lib/api.ts".to_string(),
            content: "export const api = {};".to_string(),
        }]);
        let prompt = generation_prompt(&request, &fallback_plan("dark"), None);
        assert!(prompt.contains("a dashboard"));
        assert!(prompt.contains("\"layoutSections\""));
        assert!(prompt.contains("--- src/lib/api.ts ---"));
        assert!(!prompt.contains("previous attempt"));
    }

    #[test]
    fn test_generation_prompt_appends_repair_directive() {
        let request = BuildRequest::new("a dashboard");
        let prompt = generation_prompt(&request, &fallback_plan("dark"), Some("Fix the stylesheet."));
        assert!(prompt.contains("previous attempt was rejected"));
        assert!(prompt.contains("Fix the stylesheet."));
    }

    #[test]
    fn test_repair_directive_formats_each_violation() {
        let violations = vec![
            Violation {
                rule: "MISSING_STYLESHEET".to_string(),
                severity: Severity::Critical,
                message: "No stylesheet present.".to_string(),
                remedy: "Add src/index.css.".to_string(),
            },
            Violation::critical("NO_COMPONENTS", "Too few components.", "Add components."),
        ];
        let directive = repair_directive(&violations);
        assert!(directive.contains("MISSING_STYLESHEET: No stylesheet present. Fix: Add src/index.css."));
        assert!(directive.contains("NO_COMPONENTS"));
        assert!(directive.contains("No partial diffs."));
    }
}
