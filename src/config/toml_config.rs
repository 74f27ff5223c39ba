use crate::core::text::DEFAULT_SUFFIX;
use crate::core::ConfigProvider;
use crate::utils::error::{FolioError, Result};
use crate::utils::validation::{
    validate_markup_free, validate_positive_number, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

const MAX_TRUNCATE_LENGTH: i64 = 10_000;

static ENV_VAR_RE: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextConfig {
    #[serde(default)]
    pub truncate: TruncateConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TruncateConfig {
    pub max_length: i64,
    pub suffix: String,
}

impl Default for TruncateConfig {
    fn default() -> Self {
        Self {
            max_length: 50,
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub message_min_length: usize,
    pub max_field_length: Option<usize>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            message_min_length: 10,
            max_field_length: None,
        }
    }
}

impl TextConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SUFFIX})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        let re = ENV_VAR_RE
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// 套用命令列覆蓋值，並以與配置檔相同的規則驗證結果
    pub fn with_truncate_overrides(
        mut self,
        max_length: Option<i64>,
        suffix: Option<String>,
    ) -> Result<Self> {
        if let Some(max_length) = max_length {
            self.truncate.max_length = max_length;
        }
        if let Some(suffix) = suffix {
            self.truncate.suffix = suffix;
        }
        self.validate_config()?;
        Ok(self)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_range(
            "truncate.max_length",
            self.truncate.max_length,
            1,
            MAX_TRUNCATE_LENGTH,
        )?;
        validate_markup_free("truncate.suffix", &self.truncate.suffix)?;
        validate_positive_number(
            "contact.message_min_length",
            self.contact.message_min_length,
            1,
        )?;

        if let Some(max) = self.contact.max_field_length {
            if max < self.contact.message_min_length {
                return Err(FolioError::InvalidConfigValueError {
                    field: "contact.max_field_length".to_string(),
                    value: max.to_string(),
                    reason: format!(
                        "Must not be below contact.message_min_length ({})",
                        self.contact.message_min_length
                    ),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TextConfig {
    fn truncate_max_length(&self) -> i64 {
        self.truncate.max_length
    }

    fn truncate_suffix(&self) -> &str {
        &self.truncate.suffix
    }

    fn message_min_length(&self) -> usize {
        self.contact.message_min_length
    }

    fn max_field_length(&self) -> Option<usize> {
        self.contact.max_field_length
    }
}

impl Validate for TextConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
