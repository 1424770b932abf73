use crate::utils::error::{Result, SiteError};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

// Same grammar browsers apply to <input type="email">.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

fn hex_color_regex() -> &'static Regex {
    static COLOR: OnceLock<Regex> = OnceLock::new();
    COLOR.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("color pattern compiles"))
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SiteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    if !hex_color_regex().is_match(value) {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Color must look like #RRGGBB".to_string(),
        });
    }
    Ok(())
}

/// A `required` input: the browser refuses to submit an empty value.
pub fn validate_required_input(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(SiteError::MissingFieldError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

/// Value of a `type="email"` input as the browser submits it: leading and
/// trailing whitespace is stripped.
pub fn email_input_value(value: &str) -> &str {
    value.trim()
}

/// An `type="email"` input. Empty values pass; combine with
/// [`validate_required_input`] on [`email_input_value`] when the field is
/// also required.
pub fn validate_email_input(field_name: &str, value: &str) -> Result<()> {
    let value = email_input_value(value);
    if value.is_empty() || email_regex().is_match(value) {
        return Ok(());
    }
    Err(SiteError::InvalidFieldError {
        field: field_name.to_string(),
        reason: format!("'{}' is not an email address", value),
    })
}
