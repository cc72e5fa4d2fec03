//! AWS Signature Version 4 request signing.

use crate::core::credentials::AwsCredentials;
use crate::domain::ports::HttpRequest;
use crate::utils::error::{ConnectError, Result};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

// 不參與簽章的標頭
const UNSIGNED_HEADERS: [&str; 2] = ["authorization", "user-agent"];

/// RFC 3986 encoding. Unreserved characters pass through; `/` is kept
/// unless `encode_slash` is set.
pub fn uri_encode(input: &str, encode_slash: bool) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            b'/' if !encode_slash => encoded.push('/'),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn hmac(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|e| ConnectError::SigningError {
        message: format!("invalid HMAC key: {}", e),
    })?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

#[derive(Debug, Clone)]
pub struct SigV4Signer {
    region: String,
    service: String,
}

impl SigV4Signer {
    pub fn new(region: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            service: service.into(),
        }
    }

    /// Adds `x-amz-date`, the session token when present, and the
    /// `Authorization` header. The request must already carry `host`.
    pub fn sign(
        &self,
        request: &mut HttpRequest,
        credentials: &AwsCredentials,
        now: DateTime<Utc>,
    ) -> Result<()> {
        if request.header("host").is_none() {
            return Err(ConnectError::SigningError {
                message: "request has no host header".to_string(),
            });
        }

        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
        let date = now.format("%Y%m%d").to_string();
        request.set_header("x-amz-date", amz_date.clone());
        if let Some(token) = &credentials.session_token {
            request.set_header("x-amz-security-token", token.clone());
        }

        let payload_hash = sha256_hex(request.body.as_deref().unwrap_or_default());
        let (canonical, signed_headers) = self.canonical_request(request, &payload_hash);
        let scope = format!("{}/{}/{}/aws4_request", date, self.region, self.service);
        let string_to_sign = format!(
            "{}\n{}\n{}\n{}",
            ALGORITHM,
            amz_date,
            scope,
            sha256_hex(canonical.as_bytes())
        );

        let signature = hex::encode(hmac(
            &self.signing_key(&credentials.secret_access_key, &date)?,
            string_to_sign.as_bytes(),
        )?);

        request.set_header(
            "authorization",
            format!(
                "{} Credential={}/{}, SignedHeaders={}, Signature={}",
                ALGORITHM, credentials.access_key_id, scope, signed_headers, signature
            ),
        );
        Ok(())
    }

    fn signing_key(&self, secret: &str, date: &str) -> Result<Vec<u8>> {
        let k_date = hmac(format!("AWS4{}", secret).as_bytes(), date.as_bytes())?;
        let k_region = hmac(&k_date, self.region.as_bytes())?;
        let k_service = hmac(&k_region, self.service.as_bytes())?;
        hmac(&k_service, b"aws4_request")
    }

    /// Returns the canonical request and the signed header list.
    pub(crate) fn canonical_request(
        &self,
        request: &HttpRequest,
        payload_hash: &str,
    ) -> (String, String) {
        // 非 S3 服務的路徑需再編碼一次
        let canonical_uri = if request.path.is_empty() {
            "/".to_string()
        } else {
            uri_encode(&request.path, false)
        };

        let mut query: Vec<(String, String)> = request
            .query
            .iter()
            .map(|(k, v)| (uri_encode(k, true), uri_encode(v, true)))
            .collect();
        query.sort();
        let canonical_query = query
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");

        let mut headers: Vec<(String, String)> = request
            .headers
            .iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), normalize_header_value(v)))
            .filter(|(k, _)| !UNSIGNED_HEADERS.contains(&k.as_str()))
            .collect();
        headers.sort();

        let canonical_headers: String = headers
            .iter()
            .map(|(k, v)| format!("{}:{}\n", k, v))
            .collect();
        let signed_headers = headers
            .iter()
            .map(|(k, _)| k.as_str())
            .collect::<Vec<_>>()
            .join(";");

        let canonical = format!(
            "{}\n{}\n{}\n{}\n{}\n{}",
            request.method.as_str(),
            canonical_uri,
            canonical_query,
            canonical_headers,
            signed_headers,
            payload_hash
        );
        (canonical, signed_headers)
    }
}

fn normalize_header_value(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
