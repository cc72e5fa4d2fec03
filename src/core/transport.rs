use crate::core::signer::uri_encode;
use crate::domain::ports::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Joins the endpoint with the request's encoded path and query.
pub fn build_url(endpoint: &Url, request: &HttpRequest) -> Url {
    let mut url = endpoint.clone();
    url.set_path(&request.path);
    if request.query.is_empty() {
        url.set_query(None);
    } else {
        let query = request
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", uri_encode(k, true), uri_encode(v, true)))
            .collect::<Vec<_>>()
            .join("&");
        url.set_query(Some(&query));
    }
    url
}

/// `host` header value for an endpoint; the port is kept only when it is
/// not the scheme default.
pub fn host_header(endpoint: &Url) -> String {
    let host = endpoint.host_str().unwrap_or_default();
    match endpoint.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, endpoint: &Url, request: &HttpRequest) -> Result<HttpResponse> {
        let url = build_url(endpoint, request);
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, url);
        for (name, value) in &request.headers {
            // reqwest 會依 URL 自行設定 host
            if name.eq_ignore_ascii_case("host") {
                continue;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|v| (k.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?.to_vec();
        tracing::debug!("HTTP {} -> {}", request.path, status);

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
