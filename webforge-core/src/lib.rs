//! # webforge-core
//!
//! Core types, errors, and provider traits for the Webforge generation
//! quality gate.
//!
//! ## Overview
//!
//! This crate provides the foundational abstractions shared by the rest of
//! the workspace:
//!
//! - [`GeneratedOutput`] / [`GeneratedFile`] - The artifact set produced by
//!   one generation attempt
//! - [`BuildPlan`] - The shape contract a run asks the generator to follow
//! - [`Violation`] / [`QualityScore`] - Derived facts computed from an output
//! - [`TextCompletion`] - The external generation provider trait
//! - [`ForgeError`] / [`Result`] - Unified error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use webforge_core::{GeneratedOutput, Violation};
//!
//! let output = GeneratedOutput::new("A dashboard app")
//!     .with_file("src/App.tsx", "export default function App() { return null; }");
//! assert!(output.has_file("src/App.tsx"));
//! ```
//!
//! ## The provider trait
//!
//! Generation is delegated to an external large-language-model provider:
//!
//! ```rust,ignore
//! #[async_trait]
//! pub trait TextCompletion: Send + Sync {
//!     fn name(&self) -> &str;
//!     async fn complete(&self, system: &str, user: &str) -> Result<String>;
//! }
//! ```

pub mod error;
pub mod provider;
pub mod types;

pub use error::{ForgeError, Result};
pub use provider::TextCompletion;
pub use types::{
    AppKind, BuildPlan, GeneratedFile, GeneratedOutput, QualityScore, Severity, Violation,
};
