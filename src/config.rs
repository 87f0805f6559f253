//! Process-level configuration for the external collaborators. Values are
//! captured from the build environment once; a missing value disables the
//! dependent feature at startup rather than failing per interaction.

use std::sync::LazyLock;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required configuration value {0}")]
    MissingVar(&'static str),
}

/// Credentials for the EmailJS delivery service. All three are required for
/// the contact form to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

impl EmailConfig {
    fn from_parts(
        service_id: Option<&'static str>,
        template_id: Option<&'static str>,
        public_key: Option<&'static str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            service_id: require("EMAILJS_SERVICE_ID", service_id)?,
            template_id: require("EMAILJS_TEMPLATE_ID", template_id)?,
            public_key: require("EMAILJS_PUBLIC_KEY", public_key)?,
        })
    }
}

/// API key for the generative chat assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub api_key: &'static str,
}

impl ChatConfig {
    fn from_parts(api_key: Option<&'static str>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: require("GEMINI_API_KEY", api_key)?,
        })
    }
}

fn require(
    name: &'static str,
    value: Option<&'static str>,
) -> Result<&'static str, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

static EMAIL_CONFIG: LazyLock<Result<EmailConfig, ConfigError>> = LazyLock::new(|| {
    EmailConfig::from_parts(
        option_env!("EMAILJS_SERVICE_ID"),
        option_env!("EMAILJS_TEMPLATE_ID"),
        option_env!("EMAILJS_PUBLIC_KEY"),
    )
});

static CHAT_CONFIG: LazyLock<Result<ChatConfig, ConfigError>> =
    LazyLock::new(|| ChatConfig::from_parts(option_env!("GEMINI_API_KEY")));

pub fn email_config() -> Result<&'static EmailConfig, &'static ConfigError> {
    EMAIL_CONFIG.as_ref()
}

pub fn chat_config() -> Result<&'static ChatConfig, &'static ConfigError> {
    CHAT_CONFIG.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_email_config_parses() {
        let config =
            EmailConfig::from_parts(Some("service_x"), Some("template_y"), Some("key_z"))
                .expect("complete config should parse");
        assert_eq!(config.service_id, "service_x");
        assert_eq!(config.template_id, "template_y");
        assert_eq!(config.public_key, "key_z");
    }

    #[test]
    fn missing_value_names_the_variable() {
        let err = EmailConfig::from_parts(Some("service_x"), None, Some("key_z"))
            .expect_err("missing template id should fail");
        assert_eq!(err, ConfigError::MissingVar("EMAILJS_TEMPLATE_ID"));
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let err = EmailConfig::from_parts(Some("  "), Some("t"), Some("k"))
            .expect_err("blank service id should fail");
        assert_eq!(err, ConfigError::MissingVar("EMAILJS_SERVICE_ID"));

        let err = ChatConfig::from_parts(Some("")).expect_err("blank key should fail");
        assert_eq!(err, ConfigError::MissingVar("GEMINI_API_KEY"));
    }

    #[test]
    fn chat_config_parses_independently_of_email() {
        let config = ChatConfig::from_parts(Some("abc123")).expect("key present");
        assert_eq!(config.api_key, "abc123");
    }
}
