//! 命令列子命令的執行與輸出格式化

use crate::core::client::ConnectClient;
use crate::core::operation::{Operation, Paginated};
use crate::domain::model::*;
use crate::domain::ports::Transport;
use crate::utils::error::{ConnectError, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ResourceKind {
    Users,
    HierarchyGroups,
    ContactFlows,
    HoursOfOperations,
    PhoneNumbers,
    Queues,
    RoutingProfiles,
    SecurityProfiles,
}

pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Summary rows as JSON or as `id,arn,name,type` CSV.
pub fn render_summaries<S: ResourceSummary + Serialize>(
    items: &[S],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(&items),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["id", "arn", "name", "type"])?;
            for item in items {
                writer.write_record([
                    item.id().unwrap_or_default(),
                    item.arn().unwrap_or_default(),
                    item.name().unwrap_or_default(),
                    item.kind().unwrap_or_default(),
                ])?;
            }
            into_string(writer)
        }
    }
}

/// String maps (contact attributes, tags) as JSON or `key,value` CSV.
pub fn render_map(map: &BTreeMap<String, String>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(map),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["key", "value"])?;
            for (key, value) in map {
                writer.write_record([key, value])?;
            }
            into_string(writer)
        }
    }
}

fn into_string(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| ConnectError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ConnectError::validation(e.to_string()))
}

async fn collect<T: Transport, R>(client: &ConnectClient<T>, request: R) -> Result<Vec<R::Item>>
where
    R: Paginated,
{
    client.paginate(request).collect_items().await
}

pub async fn list_resources<T: Transport>(
    client: &ConnectClient<T>,
    kind: ResourceKind,
    instance_id: &str,
    max_results: Option<i32>,
    format: OutputFormat,
) -> Result<String> {
    macro_rules! list {
        ($request:ident) => {{
            let mut request = $request::new(instance_id);
            request.max_results = max_results;
            let items = collect(client, request).await?;
            tracing::info!("📋 {} {:?} found", items.len(), kind);
            render_summaries(&items, format)
        }};
    }

    match kind {
        ResourceKind::Users => list!(ListUsersRequest),
        ResourceKind::HierarchyGroups => list!(ListUserHierarchyGroupsRequest),
        ResourceKind::ContactFlows => list!(ListContactFlowsRequest),
        ResourceKind::HoursOfOperations => list!(ListHoursOfOperationsRequest),
        ResourceKind::PhoneNumbers => list!(ListPhoneNumbersRequest),
        ResourceKind::Queues => list!(ListQueuesRequest),
        ResourceKind::RoutingProfiles => list!(ListRoutingProfilesRequest),
        ResourceKind::SecurityProfiles => list!(ListSecurityProfilesRequest),
    }
}

macro_rules! dispatch {
    ($client:expr, $name:expr, $input:expr, [$($op:ty),* $(,)?]) => {
        match $name {
            $(
                n if n == <$op as Operation>::NAME => {
                    let request: $op = serde_json::from_value($input)?;
                    let output = $client.execute(&request).await?;
                    Ok(serde_json::to_value(output)?)
                }
            )*
            other => Err(ConnectError::validation(format!("Unknown operation '{}'", other))),
        }
    };
}

/// Runs any operation by its API name with a JSON request document.
pub async fn invoke<T: Transport>(
    client: &ConnectClient<T>,
    operation: &str,
    input: Value,
) -> Result<Value> {
    dispatch!(client, operation, input, [
        CreateUserRequest,
        DeleteUserRequest,
        DescribeUserRequest,
        ListUsersRequest,
        UpdateUserHierarchyRequest,
        UpdateUserIdentityInfoRequest,
        UpdateUserPhoneConfigRequest,
        UpdateUserRoutingProfileRequest,
        UpdateUserSecurityProfilesRequest,
        DescribeUserHierarchyGroupRequest,
        DescribeUserHierarchyStructureRequest,
        ListUserHierarchyGroupsRequest,
        ListContactFlowsRequest,
        ListHoursOfOperationsRequest,
        ListPhoneNumbersRequest,
        ListQueuesRequest,
        ListRoutingProfilesRequest,
        ListSecurityProfilesRequest,
        StartOutboundVoiceContactRequest,
        StopContactRequest,
        GetContactAttributesRequest,
        UpdateContactAttributesRequest,
        CreatePersistentContactAssociationRequest,
        GetCurrentMetricDataRequest,
        GetMetricDataRequest,
        GetMetricDataV2Request,
        GetFederationTokenRequest,
        ListTagsForResourceRequest,
        TagResourceRequest,
        UntagResourceRequest,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::mock::{client, json_response};
    use serde_json::json;

    #[test]
    fn test_render_summaries_csv() {
        let queues = vec![QueueSummary {
            id: Some("q-1".into()),
            arn: Some("arn:q-1".into()),
            name: Some("Support, tier 1".into()),
            queue_type: Some(crate::domain::enums::QueueType::Standard),
        }];
        let csv = render_summaries(&queues, OutputFormat::Csv).unwrap();
        assert_eq!(
            csv,
            "id,arn,name,type\nq-1,arn:q-1,\"Support, tier 1\",STANDARD\n"
        );
    }

    #[test]
    fn test_render_map_csv() {
        let mut map = BTreeMap::new();
        map.insert("b".to_string(), "2".to_string());
        map.insert("a".to_string(), "1".to_string());
        assert_eq!(
            render_map(&map, OutputFormat::Csv).unwrap(),
            "key,value\na,1\nb,2\n"
        );
    }

    #[tokio::test]
    async fn test_invoke_by_name() {
        let client = client(vec![Ok(json_response(200, r#"{"ContactId": "c-9"}"#))]);
        let output = invoke(
            &client,
            "StartOutboundVoiceContact",
            json!({
                "InstanceId": "i-1",
                "ContactFlowId": "f-1",
                "DestinationPhoneNumber": "+15555550100"
            }),
        )
        .await
        .unwrap();
        assert_eq!(output, json!({"ContactId": "c-9"}));
        assert_eq!(client.transport_requests()[0].path, "/contact/outbound-voice");
    }

    #[tokio::test]
    async fn test_invoke_rejects_unknown_operation_and_enum() {
        let client = client(vec![]);
        let err = invoke(&client, "SendFax", json!({})).await.unwrap_err();
        assert!(matches!(err, ConnectError::ValidationError { .. }));

        let err = invoke(
            &client,
            "ListQueues",
            json!({"InstanceId": "i-1", "QueueTypes": ["FAX"]}),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ConnectError::SerializationError(_)));
        assert!(client.transport_requests().is_empty());
    }

    #[tokio::test]
    async fn test_list_resources_renders_json() {
        let client = client(vec![Ok(json_response(
            200,
            r#"{"SecurityProfileSummaryList": [{"Id": "sp-1", "Name": "Admin"}]}"#,
        ))]);
        let rendered = list_resources(
            &client,
            ResourceKind::SecurityProfiles,
            "i-1",
            Some(10),
            OutputFormat::Json,
        )
        .await
        .unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value, json!([{"Id": "sp-1", "Name": "Admin"}]));
    }
}
