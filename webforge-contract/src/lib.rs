//! # webforge-contract
//!
//! Deterministic contract validation for generated artifact sets.
//!
//! ## Overview
//!
//! The validator is a rule engine over *text*, not a parser: every rule is
//! an independent pure predicate over a flattened [`Corpus`] of UI-file
//! content plus path metadata. Rules never inspect semantic correctness;
//! they check lexical and structural facts (class attributes, breakpoint
//! markers, file layout) and accumulate [`Violation`]s without
//! short-circuiting.
//!
//! - General rules live in [`rules`]; brand sub-rules in [`brand_rules`].
//! - All violations are critical: one is enough to invalidate an output.
//! - [`validate`] is idempotent; reports are recomputed from scratch.
//!
//! ```rust
//! use webforge_brand::BrandProfile;
//! use webforge_contract::validate;
//! use webforge_core::GeneratedOutput;
//!
//! let output = GeneratedOutput::new("bare app")
//!     .with_file("src/App.tsx", "<div>unstyled</div>");
//! let report = validate(&output, &BrandProfile::forge());
//! assert!(!report.valid);
//! ```
//!
//! [`Violation`]: webforge_core::Violation

pub mod brand_rules;
pub mod corpus;
pub mod rules;
pub mod validator;

pub use corpus::{BOOTSTRAP, Corpus, MAIN_ENTRY, STYLESHEET, is_component_path, is_ui_path};
pub use validator::{ContractReport, validate};
