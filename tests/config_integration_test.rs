use connect_client::core::ConfigProvider;
use connect_client::model::{GetFederationTokenRequest, ListTagsForResourceRequest};
use connect_client::utils::validation::Validate;
use connect_client::{ConnectClient, ConnectConfig};
use httpmock::prelude::*;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(endpoint: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[client]
region = "ap-northeast-1"
endpoint = "{}"
timeout_seconds = 5

[retry]
max_attempts = 1

[credentials]
access_key_id = "AKIDFILE"
secret_access_key = "file-secret"
session_token = "file-session"

[logging]
level = "debug"
format = "compact"
"#,
        endpoint
    )
    .unwrap();
    file
}

/// 設定檔中的金鑰與 region 會反映在簽章上
#[test]
fn test_client_from_config_file_signs_with_file_credentials() {
    let server = MockServer::start();
    let file = write_config(&server.base_url());
    let config = ConnectConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();
    assert_eq!(config.max_attempts(), 1);

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/user/federate/inst-1")
            .header("x-amz-security-token", "file-session")
            .header_exists("authorization");
        then.status(200).json_body(json!({
            "Credentials": {
                "AccessToken": "at",
                "AccessTokenExpiration": 1700000000,
                "RefreshToken": "rt",
                "RefreshTokenExpiration": 1700003600
            }
        }));
    });

    let client = ConnectClient::from_config(&config, config.credentials_provider()).unwrap();
    let result = tokio_test::block_on(
        client.get_federation_token(&GetFederationTokenRequest::new("inst-1")),
    )
    .unwrap();

    let credentials = result.credentials.unwrap();
    assert_eq!(credentials.access_token.as_deref(), Some("at"));
    assert_eq!(
        credentials.access_token_expiration.unwrap().timestamp(),
        1_700_000_000
    );
    mock.assert();
}

#[test]
fn test_list_tags_through_config_file_client() {
    let server = MockServer::start();
    let file = write_config(&server.base_url());
    let config = ConnectConfig::from_file(file.path()).unwrap();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path_contains("/tags/")
            .header_exists("authorization")
            .header_exists("x-amz-security-token");
        then.status(200).json_body(json!({"tags": {"env": "prod"}}));
    });

    let client = ConnectClient::from_config(&config, config.credentials_provider()).unwrap();
    let result = tokio_test::block_on(client.list_tags_for_resource(
        &ListTagsForResourceRequest::new("arn:aws:connect:ap-northeast-1:1:instance/inst-1"),
    ))
    .unwrap();
    assert_eq!(result.tags.unwrap()["env"], "prod");
    mock.assert();
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[client]\nendpoint = \"ftp://example.com\"\n").unwrap();
    let config = ConnectConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_err());

    let mut broken = NamedTempFile::new().unwrap();
    broken.write_all(b"[client\nregion = ").unwrap();
    assert!(ConnectConfig::from_file(broken.path()).is_err());
}
