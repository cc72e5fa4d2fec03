use thiserror::Error;

/// 服務端回傳的錯誤種類 (對應 `x-amzn-ErrorType`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceErrorKind {
    ContactNotFound,
    DestinationNotAllowed,
    DuplicateResource,
    InternalService,
    InvalidParameter,
    InvalidRequest,
    LimitExceeded,
    OutboundContactNotPermitted,
    ResourceNotFound,
    Throttling,
    UserNotFound,
    Unknown(String),
}

impl ServiceErrorKind {
    /// 從錯誤代碼解析，接受 `ThrottlingException` 或
    /// `ThrottlingException:http://internal.amazon.com/...` 形式
    pub fn from_code(code: &str) -> Self {
        let code = code.split(':').next().unwrap_or(code).trim();
        let code = code.rsplit('#').next().unwrap_or(code);
        match code {
            "ContactNotFoundException" => Self::ContactNotFound,
            "DestinationNotAllowedException" => Self::DestinationNotAllowed,
            "DuplicateResourceException" => Self::DuplicateResource,
            "InternalServiceException" => Self::InternalService,
            "InvalidParameterException" => Self::InvalidParameter,
            "InvalidRequestException" => Self::InvalidRequest,
            "LimitExceededException" => Self::LimitExceeded,
            "OutboundContactNotPermittedException" => Self::OutboundContactNotPermitted,
            "ResourceNotFoundException" => Self::ResourceNotFound,
            "ThrottlingException" => Self::Throttling,
            "UserNotFoundException" => Self::UserNotFound,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::ContactNotFound => "ContactNotFoundException",
            Self::DestinationNotAllowed => "DestinationNotAllowedException",
            Self::DuplicateResource => "DuplicateResourceException",
            Self::InternalService => "InternalServiceException",
            Self::InvalidParameter => "InvalidParameterException",
            Self::InvalidRequest => "InvalidRequestException",
            Self::LimitExceeded => "LimitExceededException",
            Self::OutboundContactNotPermitted => "OutboundContactNotPermittedException",
            Self::ResourceNotFound => "ResourceNotFoundException",
            Self::Throttling => "ThrottlingException",
            Self::UserNotFound => "UserNotFoundException",
            Self::Unknown(code) => code,
        }
    }
}

impl std::fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Cannot create enum {enum_name} from '{value}' value")]
    UnknownEnumValue { enum_name: String, value: String },

    #[error("Duplicated key '{key}' provided for '{field}'")]
    DuplicateKey { field: String, key: String },

    #[error("Credentials error: {message}")]
    CredentialsError { message: String },

    #[error("Signing error: {message}")]
    SigningError { message: String },

    #[error("Service error {kind} (status {status}): {message}")]
    ServiceError {
        kind: ServiceErrorKind,
        status: u16,
        message: String,
        request_id: Option<String>,
    },

    #[error("Pagination error: {message}")]
    PaginationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Service,
    Configuration,
    Validation,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConnectError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) => ErrorCategory::Network,
            Self::ServiceError { .. } => ErrorCategory::Service,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::CredentialsError { .. } => ErrorCategory::Configuration,
            Self::ValidationError { .. }
            | Self::UnknownEnumValue { .. }
            | Self::DuplicateKey { .. } => ErrorCategory::Validation,
            Self::CsvError(_)
            | Self::IoError(_)
            | Self::SerializationError(_)
            | Self::SigningError { .. }
            | Self::PaginationError { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::HttpError(_) => ErrorSeverity::Medium,
            Self::ServiceError { .. } if self.is_retryable() => ErrorSeverity::Medium,
            Self::ServiceError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::SigningError { .. } => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// 節流、5xx 與連線層錯誤可重試
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::ServiceError { kind, status, .. } => {
                matches!(
                    kind,
                    ServiceErrorKind::Throttling | ServiceErrorKind::InternalService
                ) || *status == 429
                    || *status >= 500
            }
            _ => false,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::HttpError(_) => "Check network connectivity and the configured endpoint".into(),
            Self::ServiceError { kind, .. } => match kind {
                ServiceErrorKind::Throttling | ServiceErrorKind::LimitExceeded => {
                    "Reduce the request rate or raise the retry limits".into()
                }
                ServiceErrorKind::ResourceNotFound
                | ServiceErrorKind::UserNotFound
                | ServiceErrorKind::ContactNotFound => {
                    "Verify the instance, user or contact identifiers".into()
                }
                ServiceErrorKind::InvalidParameter | ServiceErrorKind::InvalidRequest => {
                    "Review the request parameters against the API reference".into()
                }
                _ => "Retry later; contact support if the problem persists".into(),
            },
            Self::CredentialsError { .. } | Self::SigningError { .. } => {
                "Set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY or fill [credentials]".into()
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Fix the configuration file or CLI flags".into(),
            Self::ValidationError { .. }
            | Self::UnknownEnumValue { .. }
            | Self::DuplicateKey { .. } => "Correct the request input".into(),
            _ => "Inspect the input data and try again".into(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ServiceError { kind, message, .. } => {
                format!("Amazon Connect rejected the request ({}): {}", kind, message)
            }
            Self::HttpError(_) => "Could not reach the Amazon Connect endpoint".into(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConnectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_kind_from_header_value() {
        assert_eq!(
            ServiceErrorKind::from_code("ThrottlingException:http://internal.amazon.com/"),
            ServiceErrorKind::Throttling
        );
        assert_eq!(
            ServiceErrorKind::from_code("com.amazonaws.connect#ResourceNotFoundException"),
            ServiceErrorKind::ResourceNotFound
        );
        assert_eq!(
            ServiceErrorKind::from_code("AccessDeniedException"),
            ServiceErrorKind::Unknown("AccessDeniedException".into())
        );
    }

    #[test]
    fn test_retryable_classification() {
        let throttled = ConnectError::ServiceError {
            kind: ServiceErrorKind::Throttling,
            status: 429,
            message: "slow down".into(),
            request_id: None,
        };
        assert!(throttled.is_retryable());
        assert_eq!(throttled.severity(), ErrorSeverity::Medium);

        let not_found = ConnectError::ServiceError {
            kind: ServiceErrorKind::ResourceNotFound,
            status: 404,
            message: "missing".into(),
            request_id: None,
        };
        assert!(!not_found.is_retryable());
        assert_eq!(not_found.severity(), ErrorSeverity::High);
        assert_eq!(not_found.category(), ErrorCategory::Service);

        assert!(!ConnectError::validation("bad").is_retryable());
    }
}
