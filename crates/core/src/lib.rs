//! Tubeseo Core Library
//!
//! Turns a video script and a few details about the video into YouTube titles,
//! an SEO description, tags and thumbnail ideas with a single request to a
//! hosted language model.

pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod form;
pub mod format;
pub mod metrics;
pub mod parse;
pub mod prompt;
pub mod provider;
pub mod types;

// Re-export commonly used items at crate root
pub use client::{ChatCompletionsClient, TextGenerator};
pub use config::{Credentials, Overrides, Secret, Settings};
pub use dispatcher::PromptDispatcher;
pub use error::{ConfigurationError, DispatchError, FormError, ServiceError};
pub use form::{FormInput, parse_keywords};
pub use format::{ExportRecord, format_metrics, format_result_readable};
pub use metrics::analyze_content;
pub use parse::parse_response;
pub use prompt::build_prompt;
pub use provider::{Provider, ProviderConfig};
pub use types::{
    ContentMetrics, GenerationOptions, GenerationRequest, GenerationResult, Panel, Section,
    Sections, TagSet, Tone, VideoLength, VideoType,
};
