use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_email_input, validate_hex_color, validate_non_empty_string, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://formspree.io/f/xzzypvnr";
pub const DEFAULT_TRACK_ENDPOINT: &str = "https://formspree.io/f/xeovjzyk";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub brand: BrandConfig,
    #[serde(default)]
    pub endpoints: EndpointConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub name: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub support_email: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "Quality Logistix".to_string(),
            primary: "#0A1F44".to_string(),
            secondary: "#1FC4B2".to_string(),
            accent: "#F5F7FA".to_string(),
            support_email: "support@qualitylogistix.com".to_string(),
        }
    }
}

impl BrandConfig {
    /// First word of the brand name, set large in the logo.
    pub fn wordmark(&self) -> &str {
        self.name.split(' ').next().unwrap_or_default()
    }

    /// Remaining words of the brand name, set small under the wordmark.
    pub fn tagline(&self) -> String {
        self.name.split(' ').skip(1).collect::<Vec<_>>().join(" ")
    }
}

/// Form-relay endpoints for the two live forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub contact: String,
    pub track: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            contact: DEFAULT_CONTACT_ENDPOINT.to_string(),
            track: DEFAULT_TRACK_ENDPOINT.to_string(),
        }
    }
}

impl SiteConfig {
    /// Loads configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Loads the file when given, otherwise the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!("Loading site config from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left as written so validation can report them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static VAR: OnceLock<Regex> = OnceLock::new();
        let re = VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("endpoints.contact", &self.endpoints.contact)?;
        validate_url("endpoints.track", &self.endpoints.track)?;

        validate_non_empty_string("brand.name", &self.brand.name)?;
        validate_non_empty_string("brand.support_email", &self.brand.support_email)?;
        validate_email_input("brand.support_email", &self.brand.support_email).map_err(|_| {
            SiteError::InvalidConfigValueError {
                field: "brand.support_email".to_string(),
                value: self.brand.support_email.clone(),
                reason: "Not an email address".to_string(),
            }
        })?;

        validate_hex_color("brand.primary", &self.brand.primary)?;
        validate_hex_color("brand.secondary", &self.brand.secondary)?;
        validate_hex_color("brand.accent", &self.brand.accent)?;

        Ok(())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoints.contact, DEFAULT_CONTACT_ENDPOINT);
        assert_eq!(config.brand.wordmark(), "Quality");
        assert_eq!(config.brand.tagline(), "Logistix");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml_content = r#"
[endpoints]
contact = "https://relay.example.com/f/contact"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.endpoints.contact, "https://relay.example.com/f/contact");
        assert_eq!(config.endpoints.track, DEFAULT_TRACK_ENDPOINT);
        assert_eq!(config.brand.name, "Quality Logistix");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("QLX_TEST_TRACK_ENDPOINT", "https://relay.example.com/f/track");

        let toml_content = r#"
[endpoints]
track = "${QLX_TEST_TRACK_ENDPOINT}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.endpoints.track, "https://relay.example.com/f/track");

        std::env::remove_var("QLX_TEST_TRACK_ENDPOINT");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r##"
[brand]
primary = "navy"

[endpoints]
contact = "invalid-url"
"##;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("endpoints.contact"));

        let mut config = SiteConfig::default();
        config.brand.primary = "navy".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let toml_content = r#"
[endpoints]
contact = "${QLX_TEST_NEVER_SET}"
"#;
        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.endpoints.contact, "${QLX_TEST_NEVER_SET}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[brand]
name = "Harbor Freight Partners"
support_email = "desk@harbor.example"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SiteConfig::load(Some(temp_file.path())).unwrap();
        assert_eq!(config.brand.name, "Harbor Freight Partners");
        assert_eq!(config.brand.tagline(), "Freight Partners");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = SiteConfig::from_toml_str("[brand\nname = 1").unwrap_err();
        assert!(matches!(err, SiteError::ConfigValidationError { .. }));
    }
}
