use crate::core::ContactForm;
use crate::utils::error::Result;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Where the CLI takes its text from: an argument, a file, or stdin.
#[derive(Debug, Clone)]
pub enum InputSource {
    Inline(String),
    File(String),
    Stdin,
}

impl InputSource {
    pub fn from_arg(text: Option<String>) -> Self {
        match text {
            Some(text) => InputSource::Inline(text),
            None => InputSource::Stdin,
        }
    }

    pub fn from_path(path: Option<String>) -> Self {
        match path {
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        }
    }

    pub fn read_text(&self) -> Result<String> {
        match self {
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::File(path) => Ok(fs::read_to_string(Path::new(path))?),
            InputSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(strip_trailing_newlines(buffer))
            }
        }
    }

    pub fn read_contact_form(&self) -> Result<ContactForm> {
        let raw = self.read_text()?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Drops the line breaks a shell pipe leaves at the end of its input.
pub fn strip_trailing_newlines(mut text: String) -> String {
    let trimmed_len = text.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
    text.truncate(trimmed_len);
    text
}
