pub mod contact;
pub mod email;
pub mod linkify;
pub mod pipeline;
pub mod sanitize;
pub mod text;

pub use crate::domain::model::{ContactForm, ContactSubmission, FieldError};
pub use crate::domain::ports::{ConfigProvider, TextTransform};
pub use crate::utils::error::Result;

pub use email::{require_valid_email, validate_email};
pub use linkify::linkify_urls;
pub use sanitize::sanitize_input;
pub use text::{capitalize_first_letter, excerpt, truncate_text, truncate_text_with_suffix};
