//! # webforge-model
//!
//! Text-completion provider integrations for Webforge.
//!
//! ## Overview
//!
//! This crate provides [`TextCompletion`](webforge_core::TextCompletion)
//! implementations for the pipeline:
//!
//! - [`CompletionClient`] - OpenAI-compatible chat-completions endpoint
//! - [`MockCompletion`] - Scripted provider for testing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use webforge_model::{CompletionClient, CompletionConfig};
//!
//! let api_key = std::env::var("OPENAI_API_KEY").unwrap();
//! let client = CompletionClient::new(CompletionConfig::new(&api_key, "gpt-4o-mini")).unwrap();
//! ```
//!
//! The client is deliberately non-streaming: the pipeline validates whole
//! artifact sets, never partial completions. Network and API failures map
//! to `ForgeError::Provider` and abort the run; the pipeline's bounded
//! retry loop only re-asks over *content* problems.

pub mod client;
pub mod config;
pub mod mock;

pub use client::CompletionClient;
pub use config::{COMPLETION_API_BASE, CompletionConfig};
pub use mock::MockCompletion;
