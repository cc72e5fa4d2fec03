use crate::utils::error::{ConnectError, Result};
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl AwsCredentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}

// 不輸出密鑰
impl fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

pub trait CredentialsProvider: Send + Sync {
    fn credentials(&self) -> Result<AwsCredentials>;
}

#[derive(Debug, Clone)]
pub struct StaticCredentialsProvider {
    credentials: AwsCredentials,
}

impl StaticCredentialsProvider {
    pub fn new(credentials: AwsCredentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentialsProvider {
    fn credentials(&self) -> Result<AwsCredentials> {
        Ok(self.credentials.clone())
    }
}

/// Reads `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and the optional
/// `AWS_SESSION_TOKEN` on every call. The older `AWS_ACCESS_KEY` and
/// `AWS_SECRET_KEY` names are accepted as fallbacks.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentCredentialsProvider;

impl CredentialsProvider for EnvironmentCredentialsProvider {
    fn credentials(&self) -> Result<AwsCredentials> {
        let read = |name: &str| {
            std::env::var(name)
                .ok()
                .filter(|v| !v.trim().is_empty())
        };

        let access_key_id = read("AWS_ACCESS_KEY_ID")
            .or_else(|| read("AWS_ACCESS_KEY"))
            .ok_or_else(|| ConnectError::CredentialsError {
                message: "AWS_ACCESS_KEY_ID is not set".to_string(),
            })?;
        let secret_access_key = read("AWS_SECRET_ACCESS_KEY")
            .or_else(|| read("AWS_SECRET_KEY"))
            .ok_or_else(|| ConnectError::CredentialsError {
                message: "AWS_SECRET_ACCESS_KEY is not set".to_string(),
            })?;

        Ok(AwsCredentials {
            access_key_id,
            secret_access_key,
            session_token: read("AWS_SESSION_TOKEN"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = AwsCredentials::new("AKID", "very-secret").with_session_token("tok");
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("AKID"));
        assert!(!rendered.contains("very-secret"));
        assert!(!rendered.contains("tok\""));
    }

    #[test]
    fn test_static_provider() {
        let provider = StaticCredentialsProvider::new(AwsCredentials::new("a", "b"));
        assert_eq!(provider.credentials().unwrap().access_key_id, "a");
    }
}
