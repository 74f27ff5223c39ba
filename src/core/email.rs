//! Email address validation.
//!
//! Plain ASCII addresses go through a conventional pattern. Addresses whose
//! domain carries a Punycode label (`xn--`) only get a structural check,
//! because their encoded labels do not fit the ASCII pattern's assumptions.

use crate::utils::error::{FolioError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// The pattern the contact form has always used for the email field.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

const PUNYCODE_MARKER: &str = "xn--";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Checks `email` against the plain ASCII pattern only.
pub fn matches_email_pattern(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Returns `true` when `email` looks like a deliverable address.
///
/// Blank input is rejected. Input containing `xn--` is accepted when it has a
/// non-empty local part, a non-empty domain with at least two labels, and a
/// final label of two or more characters. Everything else must match
/// [`EMAIL_PATTERN`]; native non-ASCII domains are therefore rejected.
pub fn validate_email(email: &str) -> bool {
    if email.trim().is_empty() {
        return false;
    }

    if email.contains(PUNYCODE_MARKER) {
        let valid = is_structurally_valid(email);
        tracing::debug!("Punycode address checked structurally: valid={}", valid);
        return valid;
    }

    matches_email_pattern(email)
}

/// Like [`validate_email`], but reports a rejected address as an error.
pub fn require_valid_email(email: &str) -> Result<()> {
    if validate_email(email) {
        Ok(())
    } else {
        Err(FolioError::InvalidEmailError {
            email: email.to_string(),
        })
    }
}

fn is_structurally_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    match labels.last() {
        Some(tld) if labels.len() >= 2 => tld.chars().count() >= 2,
        _ => false,
    }
}
