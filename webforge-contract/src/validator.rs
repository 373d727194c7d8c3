//! Contract validation entry point.

use crate::brand_rules;
use crate::corpus::Corpus;
use crate::rules::GENERAL_RULES;
use serde::{Deserialize, Serialize};
use webforge_brand::BrandProfile;
use webforge_core::{GeneratedOutput, Violation};

/// Result of validating one output against the contract.
///
/// Derived data only: recomputed from scratch on every call, identical for
/// identical inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractReport {
    /// True iff the combined violation list is empty.
    pub valid: bool,
    pub violations: Vec<Violation>,
    /// True iff zero `BRAND_*` violations.
    pub brand_compliant: bool,
}

impl ContractReport {
    /// Violations raised by brand sub-rules.
    pub fn brand_violations(&self) -> Vec<&Violation> {
        self.violations.iter().filter(|v| v.rule.starts_with("BRAND_")).collect()
    }

    /// Messages of the brand violations, for run metadata.
    pub fn brand_violation_messages(&self) -> Vec<String> {
        self.brand_violations().iter().map(|v| v.message.clone()).collect()
    }
}

/// Validate an output against the general contract and the profile's brand
/// sub-rules. Every rule runs every time; any single violation makes the
/// whole output invalid.
pub fn validate(output: &GeneratedOutput, profile: &BrandProfile) -> ContractReport {
    let corpus = Corpus::from_output(output);

    let mut violations: Vec<Violation> =
        GENERAL_RULES.iter().filter_map(|rule| rule(&corpus)).collect();

    let brand = brand_rules::evaluate(&corpus, profile);
    let brand_compliant = brand.is_empty();
    violations.extend(brand);

    let valid = violations.is_empty();
    tracing::info!(
        valid,
        brand_compliant,
        violation_count = violations.len(),
        "contract validated"
    );

    ContractReport { valid, violations, brand_compliant }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webforge_core::GeneratedOutput;

    /// An output that satisfies every general and brand rule.
    fn compliant_output() -> GeneratedOutput {
        let card = "<div className=\"font-mono bg-card p-4 md:p-6\">\
                    <h2 className=\"text-lg\">Card</h2>\
                    <p className=\"text-muted\">body</p></div>";
        let button = "<button className=\"font-mono bg-surface px-4 py-2 hover:bg-card\">\
                      go</button>";
        GeneratedOutput::new("app")
            .with_file("src/main.tsx", "import App from './App'")
            .with_file(
                "src/App.tsx",
                "<div className=\"font-mono bg-background md:p-8\">\
                 <p className=\"text-sm\">hello</p></div>",
            )
            .with_file("src/components/Card.tsx", card)
            .with_file("src/components/Button.tsx", button)
            .with_file("src/index.css", "body { margin: 0; }")
    }

    #[test]
    fn test_compliant_output_is_valid() {
        let report = validate(&compliant_output(), &BrandProfile::forge());
        assert!(report.violations.is_empty(), "unexpected: {:?}", report.violations);
        assert!(report.valid);
        assert!(report.brand_compliant);
    }

    #[test]
    fn test_single_violation_invalidates_output() {
        let mut output = compliant_output();
        // Drop the stylesheet: one general rule fires, everything else holds.
        output.files.retain(|f| f.path != "src/index.css");

        let report = validate(&output, &BrandProfile::forge());
        assert!(!report.valid);
        assert!(report.brand_compliant);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule, "REQUIRED_FILES");
    }

    #[test]
    fn test_brand_violation_flips_brand_compliance() {
        let mut output = compliant_output();
        for file in &mut output.files {
            file.content = file.content.replace("font-mono", "font-sans");
        }

        let report = validate(&output, &BrandProfile::forge());
        assert!(!report.valid);
        assert!(!report.brand_compliant);
        assert_eq!(report.brand_violation_messages().len(), 1);
        assert!(report.brand_violation_messages()[0].contains("font-mono"));
    }

    #[test]
    fn test_light_pair_under_dark_brand() {
        // The brand gate example: a light background/text pair with no dark
        // token must raise BRAND_DARK_MODE even if every other rule passes.
        let mut output = compliant_output();
        for file in &mut output.files {
            file.content = file
                .content
                .replace("bg-background", "bg-white text-black")
                .replace("bg-card", "bg-white")
                .replace("bg-surface", "bg-white");
        }

        let report = validate(&output, &BrandProfile::forge());
        let rules: Vec<&str> = report.violations.iter().map(|v| v.rule.as_str()).collect();
        assert!(rules.contains(&"BRAND_DARK_MODE"));
        assert!(!report.brand_compliant);
        assert!(!report.valid);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let output = GeneratedOutput::new("bare").with_file("src/App.tsx", "<div>x</div>");
        let first = validate(&output, &BrandProfile::forge());
        let second = validate(&output, &BrandProfile::forge());
        assert_eq!(first.violations, second.violations);
        assert_eq!(first.valid, second.valid);
    }

    #[test]
    fn test_violations_accumulate_without_short_circuit() {
        let output = GeneratedOutput::new("empty");
        let report = validate(&output, &BrandProfile::forge());
        let rules: Vec<&str> = report.violations.iter().map(|v| v.rule.as_str()).collect();
        // Several independent rules fire on an empty output.
        assert!(rules.contains(&"MINIMUM_COMPONENTS"));
        assert!(rules.contains(&"DESIGN_SYSTEM_USAGE"));
        assert!(rules.contains(&"RESPONSIVE_LAYOUT"));
        assert!(rules.contains(&"REQUIRED_FILES"));
        assert!(rules.contains(&"BRAND_TYPOGRAPHY"));
    }
}
