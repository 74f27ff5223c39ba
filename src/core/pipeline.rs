use crate::core::{
    capitalize_first_letter, linkify_urls, sanitize_input, truncate_text_with_suffix,
};
use crate::core::{ConfigProvider, TextTransform};
use crate::utils::error::{FolioError, Result};
use crate::utils::validation::validate_non_empty_string;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformStep {
    Truncate { max_length: i64, suffix: String },
    Capitalize,
    Linkify,
    Sanitize,
}

impl TransformStep {
    /// Parses a step name; `truncate` takes its limits from `config`.
    pub fn from_name<C: ConfigProvider + ?Sized>(name: &str, config: &C) -> Result<Self> {
        validate_non_empty_string("steps", name)?;

        match name.trim().to_ascii_lowercase().as_str() {
            "truncate" => Ok(TransformStep::Truncate {
                max_length: config.truncate_max_length(),
                suffix: config.truncate_suffix().to_string(),
            }),
            "capitalize" => Ok(TransformStep::Capitalize),
            "linkify" => Ok(TransformStep::Linkify),
            "sanitize" => Ok(TransformStep::Sanitize),
            _ => Err(FolioError::UnknownStepError {
                name: name.to_string(),
            }),
        }
    }
}

impl TextTransform for TransformStep {
    fn name(&self) -> &str {
        match self {
            TransformStep::Truncate { .. } => "truncate",
            TransformStep::Capitalize => "capitalize",
            TransformStep::Linkify => "linkify",
            TransformStep::Sanitize => "sanitize",
        }
    }

    fn apply(&self, input: &str) -> String {
        match self {
            TransformStep::Truncate { max_length, suffix } => {
                truncate_text_with_suffix(input, *max_length, suffix)
            }
            TransformStep::Capitalize => capitalize_first_letter(input).unwrap_or_default(),
            TransformStep::Linkify => linkify_urls(input),
            TransformStep::Sanitize => sanitize_input(input),
        }
    }
}

/// Runs a sequence of transforms over a piece of text, in insertion order.
#[derive(Default)]
pub struct TransformPipeline {
    steps: Vec<Box<dyn TextTransform>>,
}

impl TransformPipeline {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn from_step_names<C: ConfigProvider + ?Sized>(
        names: &[String],
        config: &C,
    ) -> Result<Self> {
        if names.is_empty() {
            return Err(FolioError::MissingConfigError {
                field: "steps".to_string(),
            });
        }

        let mut pipeline = Self::new();
        for name in names {
            pipeline.add_step(Box::new(TransformStep::from_name(name, config)?));
        }
        Ok(pipeline)
    }

    pub fn add_step(&mut self, step: Box<dyn TextTransform>) {
        self.steps.push(step);
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    pub fn run(&self, input: &str) -> String {
        let mut current = input.to_string();
        for (index, step) in self.steps.iter().enumerate() {
            current = step.apply(&current);
            tracing::debug!(
                "Step {} ({}) done, {} chars",
                index + 1,
                step.name(),
                current.chars().count()
            );
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::TextConfig;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_name() {
        let config = TextConfig::default();
        assert_eq!(
            TransformStep::from_name("Truncate", &config).unwrap(),
            TransformStep::Truncate {
                max_length: 50,
                suffix: "...".to_string()
            }
        );
        assert_eq!(
            TransformStep::from_name(" linkify ", &config).unwrap(),
            TransformStep::Linkify
        );
        assert!(matches!(
            TransformStep::from_name("shout", &config),
            Err(FolioError::UnknownStepError { .. })
        ));
        assert!(TransformStep::from_name("  ", &config).is_err());
    }

    #[test]
    fn test_pipeline_runs_steps_in_order() {
        let config = TextConfig::default();
        let steps = names(&["capitalize", "linkify"]);
        let pipeline = TransformPipeline::from_step_names(&steps, &config).unwrap();
        assert_eq!(pipeline.step_names(), vec!["capitalize", "linkify"]);
        assert_eq!(
            pipeline.run("see https://example.com"),
            r#"See <a href="https://example.com" target="_blank" rel="noopener noreferrer">https://example.com</a>"#
        );
    }

    #[test]
    fn test_sanitize_before_linkify_breaks_scheme() {
        let config = TextConfig::default();
        let steps = names(&["sanitize", "linkify"]);
        let pipeline = TransformPipeline::from_step_names(&steps, &config).unwrap();
        assert_eq!(pipeline.run("https://a.dev"), "https:&#x2F;&#x2F;a.dev");
    }

    #[test]
    fn test_custom_step() {
        struct Shout;
        impl TextTransform for Shout {
            fn name(&self) -> &str {
                "shout"
            }
            fn apply(&self, input: &str) -> String {
                input.to_uppercase()
            }
        }

        let mut pipeline = TransformPipeline::new();
        pipeline.add_step(Box::new(Shout));
        pipeline.add_step(Box::new(TransformStep::Truncate {
            max_length: 3,
            suffix: "!".to_string(),
        }));
        assert_eq!(pipeline.run("hello"), "HEL!");
    }

    #[test]
    fn test_empty_step_list_is_rejected() {
        let config = TextConfig::default();
        assert!(matches!(
            TransformPipeline::from_step_names(&[], &config),
            Err(FolioError::MissingConfigError { .. })
        ));
    }
}
