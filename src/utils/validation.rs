use crate::utils::error::{ConnectError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ConnectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConnectError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ConnectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConnectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ConnectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

// 以下為請求參數檢查，長度以字元數計

pub fn validate_length(field_name: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ConnectError::validation(format!(
            "{} length must be between {} and {}, got {}",
            field_name, min, max, len
        )));
    }
    Ok(())
}

pub fn validate_optional_length(
    field_name: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<()> {
    match value {
        Some(v) => validate_length(field_name, v, min, max),
        None => Ok(()),
    }
}

pub fn validate_max_results(field_name: &str, value: Option<i32>, max: i32) -> Result<()> {
    if let Some(v) = value {
        if !(1..=max).contains(&v) {
            return Err(ConnectError::validation(format!(
                "{} must be between 1 and {}, got {}",
                field_name, max, v
            )));
        }
    }
    Ok(())
}

pub fn validate_count(field_name: &str, count: usize, min: usize, max: usize) -> Result<()> {
    if count < min || count > max {
        return Err(ConnectError::validation(format!(
            "{} must contain between {} and {} entries, got {}",
            field_name, min, max, count
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint", "https://connect.us-east-1.amazonaws.com").is_ok());
        assert!(validate_url("endpoint", "http://localhost:8080").is_ok());
        assert!(validate_url("endpoint", "").is_err());
        assert!(validate_url("endpoint", "invalid-url").is_err());
        assert!(validate_url("endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_length_counts_chars() {
        assert!(validate_length("InstanceId", "a", 1, 100).is_ok());
        assert!(validate_length("InstanceId", "", 1, 100).is_err());
        assert!(validate_length("InstanceId", &"x".repeat(101), 1, 100).is_err());
        assert!(validate_length("Username", "ü", 1, 1).is_ok());
    }

    #[test]
    fn test_validate_max_results() {
        assert!(validate_max_results("MaxResults", None, 1000).is_ok());
        assert!(validate_max_results("MaxResults", Some(1000), 1000).is_ok());
        assert!(validate_max_results("MaxResults", Some(0), 1000).is_err());
        assert!(validate_max_results("MaxResults", Some(101), 100).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("retry.max_attempts", 3u32, 1, 10).is_ok());
        assert!(validate_range("retry.max_attempts", 0u32, 1, 10).is_err());
    }
}
