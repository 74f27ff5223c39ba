use crate::core::email::validate_email;
use crate::core::sanitize::sanitize_input;
use crate::core::ConfigProvider;
use crate::domain::model::{ContactForm, ContactSubmission, FieldError};
use crate::utils::error::{FolioError, Result};
use chrono::Utc;

impl ContactForm {
    /// Checks every field and returns all problems found, in form order.
    pub fn field_errors<C: ConfigProvider + ?Sized>(&self, config: &C) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "is required"));
        }

        if self.email.trim().is_empty() {
            errors.push(FieldError::new("email", "is required"));
        } else if !validate_email(&self.email) {
            errors.push(FieldError::new("email", "must be a valid email address"));
        }

        if self.subject.trim().is_empty() {
            errors.push(FieldError::new("subject", "is required"));
        }

        let min_length = config.message_min_length();
        if self.message.trim().is_empty() {
            errors.push(FieldError::new("message", "is required"));
        } else if self.message.chars().count() < min_length {
            errors.push(FieldError::new(
                "message",
                format!("must be at least {} characters", min_length),
            ));
        }

        if let Some(max) = config.max_field_length() {
            for (field, value) in self.fields() {
                if value.chars().count() > max {
                    errors.push(FieldError::new(
                        field,
                        format!("must be at most {} characters", max),
                    ));
                }
            }
        }

        errors
    }

    pub fn validate_with<C: ConfigProvider + ?Sized>(&self, config: &C) -> Result<()> {
        let errors = self.field_errors(config);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(FolioError::ValidationError { errors })
        }
    }

    /// Copy of the form with every field passed through [`sanitize_input`].
    pub fn sanitized(&self) -> ContactForm {
        ContactForm {
            name: sanitize_input(self.name.as_str()),
            email: sanitize_input(self.email.as_str()),
            company: self.company.as_deref().map(sanitize_input),
            subject: sanitize_input(self.subject.as_str()),
            message: sanitize_input(self.message.as_str()),
        }
    }

    /// Validates the raw input, then escapes it for display.
    pub fn submit<C: ConfigProvider + ?Sized>(&self, config: &C) -> Result<ContactSubmission> {
        if let Err(e) = self.validate_with(config) {
            tracing::warn!("Rejected contact form: {}", e);
            return Err(e);
        }

        let submission = ContactSubmission {
            form: self.sanitized(),
            received_at: Utc::now(),
        };
        tracing::info!("Accepted contact form (subject: {})", submission.form.subject);
        Ok(submission)
    }

    fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("name", self.name.as_str()), ("email", self.email.as_str())];
        if let Some(company) = &self.company {
            fields.push(("company", company.as_str()));
        }
        fields.push(("subject", self.subject.as_str()));
        fields.push(("message", self.message.as_str()));
        fields
    }
}
