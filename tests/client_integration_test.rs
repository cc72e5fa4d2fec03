use anyhow::Result;
use connect_client::enums::{PhoneType, QueueType};
use connect_client::model::*;
use connect_client::utils::error::ServiceErrorKind;
use connect_client::{AwsCredentials, ConnectClient, ConnectConfig, ConnectError, StaticCredentialsProvider};
use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn client_for(server: &MockServer) -> ConnectClient {
    let config = ConnectConfig::from_toml_str(&format!(
        r#"
[client]
region = "us-west-2"
endpoint = "{}"

[retry]
max_attempts = 3
base_delay_ms = 1
max_delay_ms = 5
"#,
        server.base_url()
    ))
    .unwrap();
    let credentials = Arc::new(StaticCredentialsProvider::new(AwsCredentials::new(
        "AKIDEXAMPLE",
        "secret",
    )));
    ConnectClient::from_config(&config, credentials).unwrap()
}

/// 分頁：第二頁帶入上一頁的 NextToken
#[tokio::test]
async fn test_list_users_follows_next_token() -> Result<()> {
    let server = MockServer::start();
    let client = client_for(&server);

    let mut first = server.mock(|when, then| {
        when.method(GET)
            .path("/users-summary/inst-1")
            .query_param("maxResults", "2")
            .header_exists("authorization")
            .header_exists("x-amz-date");
        then.status(200).json_body(json!({
            "UserSummaryList": [
                {"Id": "u-1", "Username": "alice"},
                {"Id": "u-2", "Username": "bob"}
            ],
            "NextToken": "page-2"
        }));
    });

    let mut pages = client.paginate(ListUsersRequest::new("inst-1").with_max_results(2));
    let page = pages.next_page().await?.unwrap();
    assert_eq!(page.user_summary_list.unwrap().len(), 2);
    first.assert();
    first.delete();

    let second = server.mock(|when, then| {
        when.method(GET)
            .path("/users-summary/inst-1")
            .query_param("nextToken", "page-2")
            .query_param("maxResults", "2");
        then.status(200).json_body(json!({
            "UserSummaryList": [{"Id": "u-3", "Username": "carol"}]
        }));
    });

    let page = pages.next_page().await?.unwrap();
    assert_eq!(
        page.user_summary_list.unwrap()[0].username.as_deref(),
        Some("carol")
    );
    assert!(page.next_token.is_none());
    assert!(pages.next_page().await?.is_none());
    second.assert();

    Ok(())
}

#[tokio::test]
async fn test_describe_user() -> Result<()> {
    let server = MockServer::start();
    let client = client_for(&server);

    let mock = server.mock(|when, then| {
        when.method(GET).path("/users/inst-1/u-1");
        then.status(200).json_body(json!({
            "User": {
                "Id": "u-1",
                "Username": "alice",
                "PhoneConfig": {"PhoneType": "DESK_PHONE", "DeskPhoneNumber": "+15555550100"},
                "SecurityProfileIds": ["sp-1"]
            }
        }));
    });

    let result = client
        .describe_user(&DescribeUserRequest::new("inst-1", "u-1"))
        .await?;
    let user = result.user.unwrap();
    assert_eq!(user.phone_config.unwrap().phone_type, PhoneType::DeskPhone);
    assert_eq!(user.security_profile_ids, Some(vec!["sp-1".to_string()]));
    assert!(user.tags.is_none());
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn test_service_error_is_mapped() -> Result<()> {
    let server = MockServer::start();
    let client = client_for(&server);

    server.mock(|when, then| {
        when.method(GET).path("/contact/attributes/inst-1/c-404");
        then.status(404)
            .header("x-amzn-ErrorType", "ResourceNotFoundException")
            .header("x-amzn-RequestId", "req-42")
            .json_body(json!({"Message": "Contact not found"}));
    });

    let err = client
        .get_contact_attributes(&GetContactAttributesRequest::new("inst-1", "c-404"))
        .await
        .unwrap_err();

    match err {
        ConnectError::ServiceError {
            kind,
            status,
            message,
            request_id,
        } => {
            assert_eq!(kind, ServiceErrorKind::ResourceNotFound);
            assert_eq!(status, 404);
            assert_eq!(message, "Contact not found");
            assert_eq!(request_id.as_deref(), Some("req-42"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_server_errors_are_retried_until_exhausted() -> Result<()> {
    let server = MockServer::start();
    let client = client_for(&server);

    let mock = server.mock(|when, then| {
        when.method(GET).path("/queues-summary/inst-1");
        then.status(503)
            .json_body(json!({"__type": "InternalServiceException", "message": "busy"}));
    });

    let err = client
        .list_queues(&ListQueuesRequest::new("inst-1"))
        .await
        .unwrap_err();
    assert!(err.is_retryable());
    mock.assert_hits(3);

    Ok(())
}

#[tokio::test]
async fn test_unknown_enum_in_response_is_rejected() -> Result<()> {
    let server = MockServer::start();
    let client = client_for(&server);

    server.mock(|when, then| {
        when.method(GET).path("/queues-summary/inst-1");
        then.status(200).json_body(json!({
            "QueueSummaryList": [{"Id": "q-1", "QueueType": "FAX"}]
        }));
    });

    let err = client
        .list_queues(&ListQueuesRequest::new("inst-1").add_queue_type(QueueType::Standard))
        .await
        .unwrap_err();
    assert!(matches!(err, ConnectError::SerializationError(_)));

    Ok(())
}

#[tokio::test]
async fn test_outbound_voice_contact_body() -> Result<()> {
    let server = MockServer::start();
    let client = client_for(&server);

    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/contact/outbound-voice")
            .header("content-type", "application/json")
            .json_body(json!({
                "DestinationPhoneNumber": "+15555550100",
                "ContactFlowId": "flow-1",
                "InstanceId": "inst-1",
                "Attributes": {"orderId": "42"}
            }));
        then.status(200).json_body(json!({"ContactId": "c-1"}));
    });

    let request = StartOutboundVoiceContactRequest::new("inst-1", "flow-1", "+15555550100")
        .add_attributes_entry("orderId", "42")?;
    let result = client.start_outbound_voice_contact(&request).await?;
    assert_eq!(result.contact_id.as_deref(), Some("c-1"));
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn test_tag_and_untag_resource() -> Result<()> {
    let server = MockServer::start();
    let client = client_for(&server);
    let arn = "arn:aws:connect:us-west-2:123456789012:instance/inst-1";

    let tag = server.mock(|when, then| {
        when.method(POST)
            .path_contains("/tags/")
            .json_body(json!({"tags": {"team": "support"}}));
        then.status(200);
    });
    let untag = server.mock(|when, then| {
        when.method(DELETE)
            .path_contains("/tags/")
            .query_param("tagKeys", "team")
            .query_param("tagKeys", "env");
        then.status(200);
    });

    let request = TagResourceRequest::new(arn).add_tags_entry("team", "support")?;
    assert_eq!(client.tag_resource(&request).await?, EmptyResult {});

    let request = UntagResourceRequest::new(arn, vec!["team".to_string(), "env".to_string()]);
    client.untag_resource(&request).await?;

    tag.assert();
    untag.assert();

    Ok(())
}
