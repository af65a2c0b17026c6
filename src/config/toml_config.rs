use crate::domain::model::{
    Endpoints, PageContext, DEFAULT_BASE_URL, DEFAULT_COMMENTS_ENDPOINT, DEFAULT_WHATSAPP_ENDPOINT,
};
use crate::utils::error::{Result, WidgetError};
use crate::utils::validation::{
    validate_endpoint, validate_non_empty_string, validate_required_field, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetsConfig {
    #[serde(default)]
    pub page: PageSection,
    #[serde(default)]
    pub endpoints: EndpointsSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSection {
    pub number: Option<String>,
    pub post_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_whatsapp")]
    pub whatsapp: String,
    #[serde(default = "default_comments")]
    pub comments: String,
}

impl Default for EndpointsSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            whatsapp: default_whatsapp(),
            comments: default_comments(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    #[serde(default)]
    pub json: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_whatsapp() -> String {
    DEFAULT_WHATSAPP_ENDPOINT.to_string()
}

fn default_comments() -> String {
    DEFAULT_COMMENTS_ENDPOINT.to_string()
}

impl EndpointsSection {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            whatsapp: self.whatsapp.clone(),
            comments: self.comments.clone(),
        }
    }
}

impl WidgetsConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(WidgetError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a TOML string after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| WidgetError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left in place.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WidgetError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Builds the page context; the phone number is the only required value.
    pub fn page_context(&self) -> Result<PageContext> {
        let number = validate_required_field("page.number", &self.page.number)?;
        Ok(PageContext::new(
            number,
            self.page.post_id.clone(),
            self.endpoints.endpoints(),
        ))
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().is_some_and(|l| l.json)
    }
}

impl Validate for WidgetsConfig {
    fn validate(&self) -> Result<()> {
        if let Some(number) = &self.page.number {
            validate_non_empty_string("page.number", number)?;
        }
        validate_url("endpoints.base_url", &self.endpoints.base_url)?;
        validate_endpoint("endpoints.whatsapp", &self.endpoints.whatsapp)?;
        validate_endpoint("endpoints.comments", &self.endpoints.comments)?;
        Ok(())
    }
}
