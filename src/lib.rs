pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::InputSource, TextConfig};
pub use crate::core::pipeline::{TransformPipeline, TransformStep};
pub use crate::core::{
    capitalize_first_letter, excerpt, linkify_urls, sanitize_input, truncate_text,
    truncate_text_with_suffix, validate_email,
};
pub use crate::domain::model::{ContactForm, ContactSubmission, FieldError};
pub use crate::utils::error::{FolioError, Result};
