use crate::core::credentials::{
    AwsCredentials, CredentialsProvider, EnvironmentCredentialsProvider,
    StaticCredentialsProvider,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ConnectError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectConfig {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    pub credentials: Option<CredentialsConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_region")]
    pub region: String,
    /// 未設定時由 region 推導
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            endpoint: None,
            timeout_seconds: None,
        }
    }
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetryConfig {
    pub max_attempts: Option<u32>,
    pub base_delay_ms: Option<u64>,
    pub max_delay_ms: Option<u64>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &self.secret_access_key.as_ref().map(|_| "<redacted>"))
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    /// `compact` 或 `json`
    pub format: Option<String>,
}

impl ConnectConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConnectError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConnectError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${AWS_ACCESS_KEY_ID})，未定義者保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConnectError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// CLI 旗標優先於檔案設定
    pub fn apply_overrides(&mut self, region: Option<String>, endpoint: Option<String>) {
        if let Some(region) = region {
            self.client.region = region;
        }
        if endpoint.is_some() {
            self.client.endpoint = endpoint;
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("client.region", &self.client.region)?;
        if let Some(endpoint) = &self.client.endpoint {
            validate_url("client.endpoint", endpoint)?;
            if Url::parse(endpoint).is_ok_and(|url| url.path() != "/") {
                return Err(ConnectError::InvalidConfigValueError {
                    field: "client.endpoint".to_string(),
                    value: endpoint.clone(),
                    reason: "endpoint must not contain a path".to_string(),
                });
            }
        }
        if let Some(timeout) = self.client.timeout_seconds {
            validate_range("client.timeout_seconds", timeout, 1, 3600)?;
        }

        if let Some(attempts) = self.retry.max_attempts {
            validate_range("retry.max_attempts", attempts, 1, 10)?;
        }
        if let (Some(base), Some(max)) = (self.retry.base_delay_ms, self.retry.max_delay_ms) {
            if base > max {
                return Err(ConnectError::ConfigValidationError {
                    field: "retry.base_delay_ms".to_string(),
                    message: "must not exceed retry.max_delay_ms".to_string(),
                });
            }
        }

        if let Some(credentials) = &self.credentials {
            for (field, value) in [
                ("credentials.access_key_id", &credentials.access_key_id),
                ("credentials.secret_access_key", &credentials.secret_access_key),
                ("credentials.session_token", &credentials.session_token),
            ] {
                if let Some(value) = value {
                    if value.contains("${") {
                        return Err(ConnectError::MissingConfigError {
                            field: field.to_string(),
                        });
                    }
                }
            }
            if credentials.access_key_id.is_some() != credentials.secret_access_key.is_some() {
                return Err(ConnectError::ConfigValidationError {
                    field: "credentials".to_string(),
                    message: "access_key_id and secret_access_key must be set together"
                        .to_string(),
                });
            }
        }

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            let valid_formats = ["compact", "json"];
            if !valid_formats.contains(&format) {
                return Err(ConnectError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.to_string(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        valid_formats.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }

    /// 設定檔含金鑰時使用之，否則讀取環境變數
    pub fn credentials_provider(&self) -> Arc<dyn CredentialsProvider> {
        let configured = self.credentials.as_ref().and_then(|c| {
            let access_key_id = c.access_key_id.clone()?;
            let secret_access_key = c.secret_access_key.clone()?;
            Some(AwsCredentials {
                access_key_id,
                secret_access_key,
                session_token: c.session_token.clone(),
            })
        });

        match configured {
            Some(credentials) => Arc::new(StaticCredentialsProvider::new(credentials)),
            None => Arc::new(EnvironmentCredentialsProvider),
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|f| f == "json")
            .unwrap_or(false)
    }
}

impl ConfigProvider for ConnectConfig {
    fn region(&self) -> &str {
        &self.client.region
    }

    fn endpoint(&self) -> String {
        match &self.client.endpoint {
            Some(endpoint) => endpoint.clone(),
            None if self.client.region.starts_with("cn-") => {
                format!("https://connect.{}.amazonaws.com.cn", self.client.region)
            }
            None => format!("https://connect.{}.amazonaws.com", self.client.region),
        }
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.client.timeout_seconds.unwrap_or(30))
    }

    fn max_attempts(&self) -> u32 {
        self.retry.max_attempts.unwrap_or(3)
    }

    fn base_delay(&self) -> Duration {
        Duration::from_millis(self.retry.base_delay_ms.unwrap_or(100))
    }

    fn max_delay(&self) -> Duration {
        Duration::from_millis(self.retry.max_delay_ms.unwrap_or(20_000))
    }
}

impl Validate for ConnectConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
