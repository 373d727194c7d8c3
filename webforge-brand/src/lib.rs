//! # webforge-brand
//!
//! Brand profiles and deterministic style resolution.
//!
//! A [`BrandProfile`] is an immutable, injected configuration value: design
//! tokens, identity flags, and natural-language compliance rules. [`resolve`]
//! turns a free-text prompt plus an optional explicit selector into a
//! provenance-tagged [`StyleDecision`], and [`enforce`] is the fail-fast
//! precondition the pipeline applies before any generation work begins.
//!
//! ```rust
//! use webforge_brand::{BrandProfile, StyleSource, resolve};
//!
//! let profile = BrandProfile::forge();
//! let decision = resolve(&profile, "Build a colorful dashboard", None);
//! assert_eq!(decision.style_key, "colorful");
//! assert_eq!(decision.source, StyleSource::UserImplicit);
//! ```

pub mod profile;
pub mod resolver;

pub use profile::{
    BrandProfile, STYLE_AUTO, STYLE_COLORFUL, STYLE_DARK, STYLE_KEYS, STYLE_LIGHT, STYLE_MINIMAL,
    is_known_style_key,
};
pub use resolver::{StyleDecision, StyleSource, enforce, resolve};
