use crate::utils::epoch;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Federation tokens for the Amazon Connect console.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, with = "epoch::option", skip_serializing_if = "Option::is_none")]
    pub access_token_expiration: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, with = "epoch::option", skip_serializing_if = "Option::is_none")]
    pub refresh_token_expiration: Option<DateTime<Utc>>,
}

impl Credentials {
    pub fn is_access_token_expired(&self, now: DateTime<Utc>) -> bool {
        self.access_token_expiration.is_some_and(|exp| exp <= now)
    }
}

// token 不寫進日誌
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |token: &Option<String>| token.as_ref().map(|_| "***");
        f.debug_struct("Credentials")
            .field("access_token", &redact(&self.access_token))
            .field("access_token_expiration", &self.access_token_expiration)
            .field("refresh_token", &redact(&self.refresh_token))
            .field("refresh_token_expiration", &self.refresh_token_expiration)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetFederationTokenRequest {
    #[serde(skip_serializing)]
    pub instance_id: String,
}

impl GetFederationTokenRequest {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetFederationTokenResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
}
