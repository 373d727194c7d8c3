//! # webforge-pipeline
//!
//! Orchestration for the Webforge generation quality gate.
//!
//! ## Overview
//!
//! A [`Pipeline`] drives one [`BuildRequest`] end to end:
//!
//! 1. Resolve the brand style ([`webforge_brand::resolve`]) and enforce the
//!    run precondition.
//! 2. Ask the provider for a build plan; invalid or unparseable candidates
//!    fall back to a minimal plan.
//! 3. Generate, normalize, contract-validate, and score the output,
//!    spending a bounded retry budget on failed attempts.
//! 4. Stamp run metadata onto the final output and return it.
//!
//! Only provider transport failures and unrecoverable parse failures abort
//! a run; contract and score failures after the budget is spent degrade to
//! warnings on the returned output.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use webforge_model::{CompletionClient, CompletionConfig};
//! use webforge_pipeline::{BuildRequest, Pipeline, PipelineConfig};
//!
//! # async fn run() -> webforge_core::Result<()> {
//! let provider = Arc::new(CompletionClient::new(CompletionConfig::new("api-key", "gpt-4o-mini"))?);
//! let pipeline = Pipeline::new(provider, PipelineConfig::default());
//! let output = pipeline.run(&BuildRequest::new("Build a colorful dashboard")).await?;
//! println!("{} file(s) generated", output.files.len());
//! # Ok(())
//! # }
//! ```

pub mod normalize;
pub mod parse;
pub mod pipeline;
pub mod plan;
pub mod prompts;
pub mod report;

pub use normalize::{REQUIRED_FILES, ensure_minimum_files};
pub use parse::{parse_output, parse_plan};
pub use pipeline::{BuildRequest, Pipeline, PipelineConfig};
pub use report::RunReport;

/// Convenience re-exports for pipeline consumers.
pub mod prelude {
    pub use crate::pipeline::{BuildRequest, Pipeline, PipelineConfig};
    pub use crate::report::RunReport;
    pub use webforge_brand::{BrandProfile, StyleDecision, StyleSource};
    pub use webforge_contract::{ContractReport, validate};
    pub use webforge_core::{
        ForgeError, GeneratedFile, GeneratedOutput, QualityScore, Result, TextCompletion,
    };
    pub use webforge_score::{score, should_retry};
}
