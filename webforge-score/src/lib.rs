//! # webforge-score
//!
//! Quality scoring for generated artifact sets.
//!
//! [`score`] computes a 0-100 [`QualityScore`](webforge_core::QualityScore)
//! across four independently capped dimensions (structure, styling,
//! accessibility, ux) from the same flattened corpus the contract validator
//! reads. Scoring is a pure function: recomputed on every attempt, never
//! stateful.
//!
//! ```rust
//! use webforge_core::GeneratedOutput;
//! use webforge_score::{score, should_retry};
//!
//! let output = GeneratedOutput::new("bare").with_file("src/App.tsx", "<div>x</div>");
//! let quality = score(&output);
//! assert!(should_retry(&quality));
//! ```

pub mod scorer;

pub use scorer::{RETRY_THRESHOLD, score, should_retry};
