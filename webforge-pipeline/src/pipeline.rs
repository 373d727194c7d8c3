//! Run orchestration: resolve, plan, generate, validate, score, retry.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{Value, json};
use uuid::Uuid;
use webforge_brand::{BrandProfile, StyleDecision, resolve};
use webforge_contract::{ContractReport, validate};
use webforge_core::{BuildPlan, GeneratedFile, GeneratedOutput, Result, TextCompletion};
use webforge_score::{RETRY_THRESHOLD, score};

use crate::normalize::ensure_minimum_files;
use crate::parse::{parse_output, parse_plan};
use crate::plan;
use crate::prompts;

/// Configuration for a [`Pipeline`].
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Brand profile applied to every run.
    pub profile: BrandProfile,
    /// Retries after the first generation attempt. With the default of 2,
    /// a run makes at most three generation attempts.
    pub max_retries: u32,
    /// Overall score below which a retry budget is spent.
    pub score_threshold: u8,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { profile: BrandProfile::forge(), max_retries: 2, score_threshold: RETRY_THRESHOLD }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: BrandProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_score_threshold(mut self, score_threshold: u8) -> Self {
        self.score_threshold = score_threshold;
        self
    }
}

/// One request to build an application.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    /// Free-text description of the application to build.
    pub prompt: String,
    /// Explicit style key, if the caller chose one. `"auto"` and `None`
    /// both defer to prompt keywords and the profile default.
    pub style_key: Option<String>,
    /// Files already present in the target project, fed to the model as
    /// integration context.
    pub existing_files: Vec<GeneratedFile>,
}

impl BuildRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), style_key: None, existing_files: Vec::new() }
    }

    pub fn with_style_key(mut self, style_key: impl Into<String>) -> Self {
        self.style_key = Some(style_key.into());
        self
    }

    pub fn with_existing_files(mut self, existing_files: Vec<GeneratedFile>) -> Self {
        self.existing_files = existing_files;
        self
    }
}

/// Drives one build request end to end against a completion provider.
///
/// A run resolves the brand style, asks the provider for a build plan,
/// then loops generation attempts through contract validation and quality
/// scoring until the output passes or the retry budget is spent. Provider
/// transport failures abort the run; everything else degrades to warnings.
pub struct Pipeline {
    provider: Arc<dyn TextCompletion>,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(provider: Arc<dyn TextCompletion>, config: PipelineConfig) -> Self {
        Self { provider, config }
    }

    /// Execute one run. Returns the last generated output with run
    /// metadata stamped into `meta` and accumulated warnings prepended to
    /// the output's own.
    pub async fn run(&self, request: &BuildRequest) -> Result<GeneratedOutput> {
        let run_id = format!("run-{}", Uuid::new_v4());
        let started_at = Utc::now();
        tracing::info!(run_id = %run_id, provider = self.provider.name(), "run started");

        let decision = resolve(&self.config.profile, &request.prompt, request.style_key.as_deref());
        webforge_brand::enforce(&decision)?;

        let build_plan = self.build_plan(request, &decision).await?;
        let plan_explanation = plan::explanation(&build_plan);
        let system = prompts::system_prompt(&decision.profile, &decision.style_key);

        let mut attempt: u32 = 1;
        let mut repair: Option<String> = None;
        let mut run_warnings: Vec<String> = Vec::new();

        loop {
            tracing::info!(run_id = %run_id, attempt, "generation attempt");
            let user = prompts::generation_prompt(request, &build_plan, repair.as_deref());
            let raw = self.provider.complete(&system, &user).await?;

            let mut output = match parse_output(&raw) {
                Ok(output) => output,
                Err(err) => {
                    // One repair re-ask for unparseable replies, then give up.
                    tracing::warn!(run_id = %run_id, attempt, %err, "unparseable reply, re-asking");
                    let retry = prompts::extraction_retry_prompt(&raw);
                    let raw = self.provider.complete(&system, &retry).await?;
                    parse_output(&raw)?
                }
            };

            ensure_minimum_files(&mut output);

            let report = validate(&output, &decision.profile);
            if !report.valid && attempt <= self.config.max_retries {
                run_warnings.push(format!(
                    "Attempt {} failed contract validation ({} violation(s)); regenerating.",
                    attempt,
                    report.violations.len()
                ));
                repair = Some(prompts::repair_directive(&report.violations));
                attempt += 1;
                continue;
            }
            if !report.valid {
                // Budget spent: ship the last attempt, violations as warnings.
                for violation in &report.violations {
                    output.push_warning(violation.format());
                }
            }

            let quality = score(&output);
            if quality.overall < self.config.score_threshold && attempt <= self.config.max_retries {
                run_warnings.push(format!(
                    "Attempt {} scored {}/100, below threshold {}; regenerating.",
                    attempt, quality.overall, self.config.score_threshold
                ));
                repair = Some(prompts::score_repair_directive(&quality));
                attempt += 1;
                continue;
            }

            run_warnings.append(&mut output.warnings);
            output.warnings = run_warnings;

            self.stamp_meta(
                &mut output,
                &run_id,
                started_at,
                attempt,
                &decision,
                &build_plan,
                &plan_explanation,
                &report,
                &quality,
            );
            tracing::info!(
                run_id = %run_id,
                attempts = attempt,
                overall = quality.overall,
                valid = report.valid,
                "run finished"
            );
            return Ok(output);
        }
    }

    /// Ask the provider for a build plan. Unparseable or invalid candidates
    /// fall back to the minimal plan; transport errors propagate. The
    /// accepted plan always carries the resolved style key.
    async fn build_plan(&self, request: &BuildRequest, decision: &StyleDecision) -> Result<BuildPlan> {
        let instructions = plan::build_prompt(&decision.profile, &decision.style_key);
        let raw = self.provider.complete(&instructions, &request.prompt).await?;

        let mut accepted = match parse_plan(&raw) {
            Ok(candidate) if plan::validate(&candidate) => candidate,
            Ok(_) => {
                tracing::warn!("plan candidate failed validation, using fallback");
                plan::fallback_plan(&decision.style_key)
            }
            Err(err) => {
                tracing::warn!(%err, "plan reply unparseable, using fallback");
                plan::fallback_plan(&decision.style_key)
            }
        };
        accepted.style_key = decision.style_key.clone();
        Ok(accepted)
    }

    #[allow(clippy::too_many_arguments)]
    fn stamp_meta(
        &self,
        output: &mut GeneratedOutput,
        run_id: &str,
        started_at: chrono::DateTime<Utc>,
        attempts: u32,
        decision: &StyleDecision,
        build_plan: &BuildPlan,
        plan_explanation: &str,
        report: &ContractReport,
        quality: &webforge_core::QualityScore,
    ) {
        output.set_meta("runId", Value::String(run_id.to_string()));
        output.set_meta("startedAt", Value::String(started_at.to_rfc3339()));
        output.set_meta("finishedAt", Value::String(Utc::now().to_rfc3339()));
        output.set_meta("attempts", json!(attempts));
        output.set_meta("provider", Value::String(self.provider.name().to_string()));
        output.set_meta("styleProfile", Value::String(decision.style_key.clone()));
        output.set_meta(
            "qualityScore",
            serde_json::to_value(quality).unwrap_or(Value::Null),
        );
        output.set_meta("componentCount", json!(quality.component_count));
        output.set_meta("designSystemCompliance", json!(quality.design_system_compliance));
        output.set_meta("plan", serde_json::to_value(build_plan).unwrap_or(Value::Null));
        output.set_meta("planExplanation", Value::String(plan_explanation.to_string()));
        output.set_meta(
            "buildExplanation",
            Value::String(format!(
                "Generated {} file(s) in {} attempt(s); contract {}.",
                output.files.len(),
                attempts,
                if report.valid { "satisfied" } else { "violated" }
            )),
        );
        output.set_meta(
            "brand",
            json!({
                "name": decision.profile.name,
                "source": decision.source,
                "styleKey": decision.style_key,
                "brandCompliant": report.brand_compliant,
                "brandViolations": report.brand_violation_messages(),
            }),
        );
    }
}
