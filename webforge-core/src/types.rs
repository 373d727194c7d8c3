use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One generated source artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self { path: path.into(), content: content.into() }
    }
}

/// The artifact set produced by one generation attempt.
///
/// Each attempt replaces the previous output wholesale; file sets are never
/// merged across attempts. `meta` is only stamped on the output that a run
/// finally accepts or exhausts with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratedOutput {
    pub summary: String,
    pub files: Vec<GeneratedFile>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub meta: Map<String, Value>,
}

impl GeneratedOutput {
    pub fn new(summary: impl Into<String>) -> Self {
        Self { summary: summary.into(), ..Default::default() }
    }

    /// Add a file (builder style, used heavily in tests).
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.push(GeneratedFile::new(path, content));
        self
    }

    /// Look up a file by exact path.
    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == path)
    }

    pub fn has_file(&self, path: &str) -> bool {
        self.file(path).is_some()
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn set_meta(&mut self, key: impl Into<String>, value: Value) {
        self.meta.insert(key.into(), value);
    }
}

/// What kind of application a run targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppKind {
    Web,
    Mobile,
}

/// The structured shape contract a generation attempt is asked to follow.
///
/// Built once per run and then held immutable; it is advisory context for
/// prompt construction, not re-validated on every attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildPlan {
    pub kind: AppKind,
    pub pages: Vec<String>,
    pub layout_sections: Vec<String>,
    pub components: Vec<String>,
    pub style_key: String,
    #[serde(default)]
    pub uses_state: bool,
    #[serde(default)]
    pub uses_forms: bool,
    #[serde(default)]
    pub needs_backend: bool,
    #[serde(default)]
    pub uses_routing: bool,
}

/// Severity of a contract violation. Hard-contract rules only ever use
/// `Critical`; there is no partial-credit tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
}

/// A single detected failure of a structural or brand rule.
///
/// Violations are derived values: recomputed from scratch on every
/// validation call, never stored or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Stable rule identifier, e.g. `MINIMUM_COMPONENTS` or `BRAND_TYPOGRAPHY`.
    pub rule: String,
    pub severity: Severity,
    pub message: String,
    /// Instruction sent back to the generator when synthesizing a repair prompt.
    pub remedy: String,
}

impl Violation {
    /// Create a critical violation.
    pub fn critical(
        rule: impl Into<String>,
        message: impl Into<String>,
        remedy: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            severity: Severity::Critical,
            message: message.into(),
            remedy: remedy.into(),
        }
    }

    /// Format as a human-readable line.
    pub fn format(&self) -> String {
        format!("{}: {} Fix: {}", self.rule, self.message, self.remedy)
    }
}

/// The 0-100 weighted quality assessment of an output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityScore {
    /// Component organization and scaffolding (0-25).
    pub structure: u8,
    /// Design-system class usage and responsiveness (0-25).
    pub styling: u8,
    /// Landmarks, ARIA, focus and alt-text discipline (0-25).
    pub accessibility: u8,
    /// Interaction states and feedback idioms (0-25).
    pub ux: u8,
    /// Sum of the four dimensions (0-100).
    pub overall: u8,
    /// Number of component files detected.
    pub component_count: usize,
    /// True when the styling dimension scored at least 20.
    pub design_system_compliance: bool,
    /// Maximum structural nesting depth observed across UI files.
    pub layout_depth: usize,
}
