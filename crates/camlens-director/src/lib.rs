//! Director insights for analyzed shots.
//!
//! This crate provides:
//! - The [`NarrativeGenerator`] boundary used by the service
//! - An HTTP client for the Anthropic Messages API
//! - Prompt construction and defensive parsing of the model's JSON reply
//! - [`generate_insights_or_placeholder`], which never fails

pub mod client;
pub mod config;
pub mod error;
pub mod narrator;
pub mod prompt;

pub use client::DirectorClient;
pub use config::DirectorConfig;
pub use error::{DirectorError, DirectorResult};
pub use narrator::{
    generate_insights_or_placeholder, placeholders, NarrativeGenerator, PlaceholderNarrator,
    NARRATIVE_FALLBACKS_TOTAL,
};
pub use prompt::{build_director_prompt, parse_insights, strip_code_fences};
