use crate::utils::error::{Result, WidgetError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> WidgetError {
    WidgetError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Only absolute `http`/`https` URLs pass.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }
    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

/// Endpoints may be absolute URLs or paths resolved against the base URL.
pub fn validate_endpoint(field_name: &str, endpoint: &str) -> Result<()> {
    validate_non_empty_string(field_name, endpoint)?;
    if endpoint.starts_with('/') {
        return Ok(());
    }
    validate_url(field_name, endpoint)
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| WidgetError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "Value cannot be empty or whitespace-only"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://example.com").is_ok());
        assert!(validate_url("base_url", "http://127.0.0.1:5000").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_invalid_value_names_field_and_reason() {
        match validate_url("endpoints.base_url", "ftp://example.pt") {
            Err(WidgetError::InvalidConfigValueError { field, value, reason }) => {
                assert_eq!(field, "endpoints.base_url");
                assert_eq!(value, "ftp://example.pt");
                assert_eq!(reason, "Unsupported URL scheme: ftp");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_validate_endpoint() {
        assert!(validate_endpoint("whatsapp", "/api/whatsapp").is_ok());
        assert!(validate_endpoint("whatsapp", "https://api.example.com/wa").is_ok());
        assert!(validate_endpoint("whatsapp", "  ").is_err());
        assert!(validate_endpoint("whatsapp", "api/whatsapp").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("912345678".to_string());
        assert_eq!(validate_required_field("number", &present).unwrap(), "912345678");

        let absent: Option<String> = None;
        assert!(matches!(
            validate_required_field("number", &absent),
            Err(WidgetError::MissingConfigError { .. })
        ));
    }
}
