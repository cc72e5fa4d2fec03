//! Binds each request type to its HTTP binding and output type.
//!
//! 每個操作在這裡宣告 method、URI 與查詢參數；JSON body 由 serde 產生
//! (路徑/查詢欄位在模型中標記為 `skip_serializing`)。

use crate::core::signer::uri_encode;
use crate::domain::model::*;
use crate::domain::ports::{HttpMethod, HttpRequest};
use crate::utils::error::{ConnectError, Result};
use crate::utils::validation::{
    validate_count, validate_length, validate_max_results, validate_optional_length, Validate,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

const MAX_LIST_RESULTS: i32 = 1000;
const MAX_METRIC_RESULTS: i32 = 100;

pub trait Operation: Serialize + Validate + Send + Sync {
    type Output: DeserializeOwned + Send;

    const NAME: &'static str;
    const METHOD: HttpMethod;

    /// Percent-encoded request path.
    fn path(&self) -> String;

    fn query(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn to_http_request(&self) -> Result<HttpRequest> {
        let mut request = HttpRequest::new(Self::METHOD, self.path());
        request.query = self.query();
        if matches!(Self::METHOD, HttpMethod::Post | HttpMethod::Put) {
            request.body = Some(serde_json::to_vec(self)?);
        }
        Ok(request)
    }
}

/// A request whose output is split into pages by a continuation token.
pub trait Paginated: Operation + Clone {
    type Item: Send;

    fn set_next_token(&mut self, token: Option<String>);
    /// Token the request currently resumes from.
    fn starting_token(&self) -> Option<&str>;
    fn next_token(output: &Self::Output) -> Option<&str>;
    fn into_items(output: Self::Output) -> Vec<Self::Item>;
}

fn label(value: &str) -> String {
    uri_encode(value, true)
}

fn page_query(next_token: &Option<String>, max_results: Option<i32>) -> Vec<(String, String)> {
    let mut query = Vec::new();
    if let Some(token) = next_token {
        query.push(("nextToken".to_string(), token.clone()));
    }
    if let Some(max) = max_results {
        query.push(("maxResults".to_string(), max.to_string()));
    }
    query
}

fn repeated<T: std::fmt::Display>(name: &str, values: &Option<Vec<T>>) -> Vec<(String, String)> {
    values
        .iter()
        .flatten()
        .map(|v| (name.to_string(), v.to_string()))
        .collect()
}

fn instance(instance_id: &str) -> Result<()> {
    validate_length("InstanceId", instance_id, 1, 100)
}

fn required(field: &str, value: &str) -> Result<()> {
    validate_length(field, value, 1, usize::MAX)
}

fn contact_id(field: &str, value: &str) -> Result<()> {
    validate_length(field, value, 1, 256)
}

fn client_token(value: &Option<String>) -> Result<()> {
    validate_optional_length("ClientToken", value.as_deref(), 0, 500)
}

macro_rules! paginated {
    ($req:ty => $item:ty, |$out:ident| $items:expr) => {
        impl Paginated for $req {
            type Item = $item;

            fn set_next_token(&mut self, token: Option<String>) {
                self.next_token = token;
            }

            fn starting_token(&self) -> Option<&str> {
                self.next_token.as_deref()
            }

            fn next_token(output: &Self::Output) -> Option<&str> {
                output.next_token.as_deref()
            }

            fn into_items($out: Self::Output) -> Vec<Self::Item> {
                $items.unwrap_or_default()
            }
        }
    };
}

// ---- users ----

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        validate_length("Username", &self.username, 1, 100)?;
        required("RoutingProfileId", &self.routing_profile_id)?;
        validate_count("SecurityProfileIds", self.security_profile_ids.len(), 1, 10)?;
        if let Some(tags) = &self.tags {
            validate_count("Tags", tags.len(), 1, 50)?;
        }
        Ok(())
    }
}

impl Operation for CreateUserRequest {
    type Output = CreateUserResult;
    const NAME: &'static str = "CreateUser";
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/users/{}", label(&self.instance_id))
    }
}

impl Validate for DeleteUserRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        required("UserId", &self.user_id)
    }
}

impl Operation for DeleteUserRequest {
    type Output = EmptyResult;
    const NAME: &'static str = "DeleteUser";
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/users/{}/{}", label(&self.instance_id), label(&self.user_id))
    }
}

impl Validate for DescribeUserRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        required("UserId", &self.user_id)
    }
}

impl Operation for DescribeUserRequest {
    type Output = DescribeUserResult;
    const NAME: &'static str = "DescribeUser";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/users/{}/{}", label(&self.instance_id), label(&self.user_id))
    }
}

impl Validate for ListUsersRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        validate_max_results("MaxResults", self.max_results, MAX_LIST_RESULTS)
    }
}

impl Operation for ListUsersRequest {
    type Output = ListUsersResult;
    const NAME: &'static str = "ListUsers";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/users-summary/{}", label(&self.instance_id))
    }

    fn query(&self) -> Vec<(String, String)> {
        page_query(&self.next_token, self.max_results)
    }
}

paginated!(ListUsersRequest => UserSummary, |out| out.user_summary_list);

macro_rules! user_update {
    ($req:ty, $name:literal, $suffix:literal) => {
        impl Operation for $req {
            type Output = EmptyResult;
            const NAME: &'static str = $name;
            const METHOD: HttpMethod = HttpMethod::Post;

            fn path(&self) -> String {
                format!(
                    "/users/{}/{}/{}",
                    label(&self.instance_id),
                    label(&self.user_id),
                    $suffix
                )
            }
        }
    };
}

user_update!(UpdateUserHierarchyRequest, "UpdateUserHierarchy", "hierarchy");
user_update!(UpdateUserIdentityInfoRequest, "UpdateUserIdentityInfo", "identity-info");
user_update!(UpdateUserPhoneConfigRequest, "UpdateUserPhoneConfig", "phone-config");
user_update!(UpdateUserRoutingProfileRequest, "UpdateUserRoutingProfile", "routing-profile");
user_update!(
    UpdateUserSecurityProfilesRequest,
    "UpdateUserSecurityProfiles",
    "security-profiles"
);

impl Validate for UpdateUserHierarchyRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        required("UserId", &self.user_id)
    }
}

impl Validate for UpdateUserIdentityInfoRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        required("UserId", &self.user_id)?;
        validate_optional_length("FirstName", self.identity_info.first_name.as_deref(), 1, 100)?;
        validate_optional_length("LastName", self.identity_info.last_name.as_deref(), 1, 100)
    }
}

impl Validate for UpdateUserPhoneConfigRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        required("UserId", &self.user_id)?;
        if let Some(limit) = self.phone_config.after_contact_work_time_limit {
            if limit < 0 {
                return Err(ConnectError::validation(
                    "AfterContactWorkTimeLimit cannot be negative",
                ));
            }
        }
        Ok(())
    }
}

impl Validate for UpdateUserRoutingProfileRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        required("UserId", &self.user_id)?;
        required("RoutingProfileId", &self.routing_profile_id)
    }
}

impl Validate for UpdateUserSecurityProfilesRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        required("UserId", &self.user_id)?;
        validate_count("SecurityProfileIds", self.security_profile_ids.len(), 1, 10)
    }
}

// ---- user hierarchy ----

impl Validate for DescribeUserHierarchyGroupRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        required("HierarchyGroupId", &self.hierarchy_group_id)
    }
}

impl Operation for DescribeUserHierarchyGroupRequest {
    type Output = DescribeUserHierarchyGroupResult;
    const NAME: &'static str = "DescribeUserHierarchyGroup";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!(
            "/user-hierarchy-groups/{}/{}",
            label(&self.instance_id),
            label(&self.hierarchy_group_id)
        )
    }
}

impl Validate for DescribeUserHierarchyStructureRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)
    }
}

impl Operation for DescribeUserHierarchyStructureRequest {
    type Output = DescribeUserHierarchyStructureResult;
    const NAME: &'static str = "DescribeUserHierarchyStructure";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/user-hierarchy-structure/{}", label(&self.instance_id))
    }
}

impl Validate for ListUserHierarchyGroupsRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        validate_max_results("MaxResults", self.max_results, MAX_LIST_RESULTS)
    }
}

impl Operation for ListUserHierarchyGroupsRequest {
    type Output = ListUserHierarchyGroupsResult;
    const NAME: &'static str = "ListUserHierarchyGroups";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/user-hierarchy-groups-summary/{}", label(&self.instance_id))
    }

    fn query(&self) -> Vec<(String, String)> {
        page_query(&self.next_token, self.max_results)
    }
}

paginated!(ListUserHierarchyGroupsRequest => HierarchyGroupSummary,
    |out| out.user_hierarchy_group_summary_list);

// ---- resource listings ----

impl Validate for ListContactFlowsRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        validate_max_results("MaxResults", self.max_results, MAX_LIST_RESULTS)
    }
}

impl Operation for ListContactFlowsRequest {
    type Output = ListContactFlowsResult;
    const NAME: &'static str = "ListContactFlows";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/contact-flows-summary/{}", label(&self.instance_id))
    }

    fn query(&self) -> Vec<(String, String)> {
        let mut query = repeated("contactFlowTypes", &self.contact_flow_types);
        query.extend(page_query(&self.next_token, self.max_results));
        query
    }
}

paginated!(ListContactFlowsRequest => ContactFlowSummary, |out| out.contact_flow_summary_list);

impl Validate for ListHoursOfOperationsRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        validate_max_results("MaxResults", self.max_results, MAX_LIST_RESULTS)
    }
}

impl Operation for ListHoursOfOperationsRequest {
    type Output = ListHoursOfOperationsResult;
    const NAME: &'static str = "ListHoursOfOperations";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/hours-of-operations-summary/{}", label(&self.instance_id))
    }

    fn query(&self) -> Vec<(String, String)> {
        page_query(&self.next_token, self.max_results)
    }
}

paginated!(ListHoursOfOperationsRequest => HoursOfOperationSummary,
    |out| out.hours_of_operation_summary_list);

impl Validate for ListPhoneNumbersRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        validate_max_results("MaxResults", self.max_results, MAX_LIST_RESULTS)
    }
}

impl Operation for ListPhoneNumbersRequest {
    type Output = ListPhoneNumbersResult;
    const NAME: &'static str = "ListPhoneNumbers";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/phone-numbers-summary/{}", label(&self.instance_id))
    }

    fn query(&self) -> Vec<(String, String)> {
        let mut query = repeated("phoneNumberTypes", &self.phone_number_types);
        query.extend(repeated(
            "phoneNumberCountryCodes",
            &self.phone_number_country_codes,
        ));
        query.extend(page_query(&self.next_token, self.max_results));
        query
    }
}

paginated!(ListPhoneNumbersRequest => PhoneNumberSummary, |out| out.phone_number_summary_list);

impl Validate for ListQueuesRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        validate_max_results("MaxResults", self.max_results, MAX_LIST_RESULTS)
    }
}

impl Operation for ListQueuesRequest {
    type Output = ListQueuesResult;
    const NAME: &'static str = "ListQueues";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/queues-summary/{}", label(&self.instance_id))
    }

    fn query(&self) -> Vec<(String, String)> {
        let mut query = repeated("queueTypes", &self.queue_types);
        query.extend(page_query(&self.next_token, self.max_results));
        query
    }
}

paginated!(ListQueuesRequest => QueueSummary, |out| out.queue_summary_list);

impl Validate for ListRoutingProfilesRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        validate_max_results("MaxResults", self.max_results, MAX_LIST_RESULTS)
    }
}

impl Operation for ListRoutingProfilesRequest {
    type Output = ListRoutingProfilesResult;
    const NAME: &'static str = "ListRoutingProfiles";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/routing-profiles-summary/{}", label(&self.instance_id))
    }

    fn query(&self) -> Vec<(String, String)> {
        page_query(&self.next_token, self.max_results)
    }
}

paginated!(ListRoutingProfilesRequest => RoutingProfileSummary,
    |out| out.routing_profile_summary_list);

impl Validate for ListSecurityProfilesRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        validate_max_results("MaxResults", self.max_results, MAX_LIST_RESULTS)
    }
}

impl Operation for ListSecurityProfilesRequest {
    type Output = ListSecurityProfilesResult;
    const NAME: &'static str = "ListSecurityProfiles";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/security-profiles-summary/{}", label(&self.instance_id))
    }

    fn query(&self) -> Vec<(String, String)> {
        page_query(&self.next_token, self.max_results)
    }
}

paginated!(ListSecurityProfilesRequest => SecurityProfileSummary,
    |out| out.security_profile_summary_list);

// ---- contacts ----

impl Validate for StartOutboundVoiceContactRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        required("DestinationPhoneNumber", &self.destination_phone_number)?;
        validate_length("ContactFlowId", &self.contact_flow_id, 1, 500)?;
        client_token(&self.client_token)
    }
}

impl Operation for StartOutboundVoiceContactRequest {
    type Output = StartOutboundVoiceContactResult;
    const NAME: &'static str = "StartOutboundVoiceContact";
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        "/contact/outbound-voice".to_string()
    }
}

impl Validate for StopContactRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        contact_id("ContactId", &self.contact_id)
    }
}

impl Operation for StopContactRequest {
    type Output = EmptyResult;
    const NAME: &'static str = "StopContact";
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/contact/stop".to_string()
    }
}

impl Validate for GetContactAttributesRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        contact_id("InitialContactId", &self.initial_contact_id)
    }
}

impl Operation for GetContactAttributesRequest {
    type Output = GetContactAttributesResult;
    const NAME: &'static str = "GetContactAttributes";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!(
            "/contact/attributes/{}/{}",
            label(&self.instance_id),
            label(&self.initial_contact_id)
        )
    }
}

impl Validate for UpdateContactAttributesRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        contact_id("InitialContactId", &self.initial_contact_id)?;
        for key in self.attributes.keys() {
            validate_length("Attributes key", key, 1, 32767)?;
        }
        Ok(())
    }
}

impl Operation for UpdateContactAttributesRequest {
    type Output = EmptyResult;
    const NAME: &'static str = "UpdateContactAttributes";
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/contact/attributes".to_string()
    }
}

impl Validate for CreatePersistentContactAssociationRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        contact_id("InitialContactId", &self.initial_contact_id)?;
        contact_id("SourceContactId", &self.source_contact_id)?;
        client_token(&self.client_token)
    }
}

impl Operation for CreatePersistentContactAssociationRequest {
    type Output = CreatePersistentContactAssociationResult;
    const NAME: &'static str = "CreatePersistentContactAssociation";
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!(
            "/contact/persistent-contact-association/{}/{}",
            label(&self.instance_id),
            label(&self.initial_contact_id)
        )
    }
}

// ---- metrics ----

fn filters(filters: &Filters) -> Result<()> {
    if let Some(queues) = &filters.queues {
        validate_count("Filters.Queues", queues.len(), 1, 100)?;
    }
    Ok(())
}

impl Validate for GetCurrentMetricDataRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        filters(&self.filters)?;
        validate_count("CurrentMetrics", self.current_metrics.len(), 1, usize::MAX)?;
        validate_max_results("MaxResults", self.max_results, MAX_METRIC_RESULTS)
    }
}

impl Operation for GetCurrentMetricDataRequest {
    type Output = GetCurrentMetricDataResult;
    const NAME: &'static str = "GetCurrentMetricData";
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("/metrics/current/{}", label(&self.instance_id))
    }
}

paginated!(GetCurrentMetricDataRequest => CurrentMetricResult, |out| out.metric_results);

impl Validate for GetMetricDataRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)?;
        filters(&self.filters)?;
        if self.end_time <= self.start_time {
            return Err(ConnectError::validation("EndTime must be later than StartTime"));
        }
        validate_count("HistoricalMetrics", self.historical_metrics.len(), 1, usize::MAX)?;
        validate_max_results("MaxResults", self.max_results, MAX_METRIC_RESULTS)
    }
}

impl Operation for GetMetricDataRequest {
    type Output = GetMetricDataResult;
    const NAME: &'static str = "GetMetricData";
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("/metrics/historical/{}", label(&self.instance_id))
    }
}

paginated!(GetMetricDataRequest => HistoricalMetricResult, |out| out.metric_results);

impl Validate for GetMetricDataV2Request {
    fn validate(&self) -> Result<()> {
        required("ResourceArn", &self.resource_arn)?;
        if self.end_time <= self.start_time {
            return Err(ConnectError::validation("EndTime must be later than StartTime"));
        }
        validate_count("Filters", self.filters.len(), 1, 5)?;
        validate_count("Metrics", self.metrics.len(), 1, usize::MAX)?;
        validate_optional_length("NextToken", self.next_token.as_deref(), 1, 2500)?;
        validate_max_results("MaxResults", self.max_results, MAX_METRIC_RESULTS)
    }
}

impl Operation for GetMetricDataV2Request {
    type Output = GetMetricDataV2Result;
    const NAME: &'static str = "GetMetricDataV2";
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/metrics/data".to_string()
    }
}

paginated!(GetMetricDataV2Request => MetricResultV2, |out| out.metric_results);

// ---- federation ----

impl Validate for GetFederationTokenRequest {
    fn validate(&self) -> Result<()> {
        instance(&self.instance_id)
    }
}

impl Operation for GetFederationTokenRequest {
    type Output = GetFederationTokenResult;
    const NAME: &'static str = "GetFederationToken";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/user/federate/{}", label(&self.instance_id))
    }
}

// ---- tags ----

impl Validate for ListTagsForResourceRequest {
    fn validate(&self) -> Result<()> {
        required("resourceArn", &self.resource_arn)
    }
}

impl Operation for ListTagsForResourceRequest {
    type Output = ListTagsForResourceResult;
    const NAME: &'static str = "ListTagsForResource";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/tags/{}", label(&self.resource_arn))
    }
}

impl Validate for TagResourceRequest {
    fn validate(&self) -> Result<()> {
        required("resourceArn", &self.resource_arn)?;
        validate_count("tags", self.tags.len(), 1, 50)
    }
}

impl Operation for TagResourceRequest {
    type Output = EmptyResult;
    const NAME: &'static str = "TagResource";
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("/tags/{}", label(&self.resource_arn))
    }
}

impl Validate for UntagResourceRequest {
    fn validate(&self) -> Result<()> {
        required("resourceArn", &self.resource_arn)?;
        validate_count("tagKeys", self.tag_keys.len(), 1, 50)
    }
}

impl Operation for UntagResourceRequest {
    type Output = EmptyResult;
    const NAME: &'static str = "UntagResource";
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/tags/{}", label(&self.resource_arn))
    }

    fn query(&self) -> Vec<(String, String)> {
        self.tag_keys
            .iter()
            .map(|k| ("tagKeys".to_string(), k.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::{ContactFlowType, PhoneType, QueueType};

    #[test]
    fn test_list_queues_binding() {
        let mut request = ListQueuesRequest::new("inst-1")
            .with_queue_types(vec![QueueType::Standard, QueueType::Agent]);
        request.max_results = Some(50);
        request.set_next_token(Some("tok".into()));

        let http = request.to_http_request().unwrap();
        assert_eq!(http.method, HttpMethod::Get);
        assert_eq!(http.path, "/queues-summary/inst-1");
        assert_eq!(
            http.query,
            vec![
                ("queueTypes".to_string(), "STANDARD".to_string()),
                ("queueTypes".to_string(), "AGENT".to_string()),
                ("nextToken".to_string(), "tok".to_string()),
                ("maxResults".to_string(), "50".to_string()),
            ]
        );
        assert!(http.body.is_none());
    }

    #[test]
    fn test_contact_flow_filter_query() {
        let request = ListContactFlowsRequest::new("i")
            .with_contact_flow_types(vec![ContactFlowType::CustomerQueue]);
        assert_eq!(
            request.query(),
            vec![("contactFlowTypes".to_string(), "CUSTOMER_QUEUE".to_string())]
        );
    }

    #[test]
    fn test_tag_path_encodes_arn() {
        let request = UntagResourceRequest::new(
            "arn:aws:connect:us-east-1:123:instance/abc",
            vec!["env".to_string()],
        );
        let http = request.to_http_request().unwrap();
        assert_eq!(
            http.path,
            "/tags/arn%3Aaws%3Aconnect%3Aus-east-1%3A123%3Ainstance%2Fabc"
        );
        assert_eq!(http.query, vec![("tagKeys".to_string(), "env".to_string())]);
    }

    #[test]
    fn test_update_phone_config_body_and_path() {
        let request = UpdateUserPhoneConfigRequest::new(
            "i-1",
            "u-1",
            UserPhoneConfig::new(PhoneType::SoftPhone),
        );
        let http = request.to_http_request().unwrap();
        assert_eq!(http.method, HttpMethod::Post);
        assert_eq!(http.path, "/users/i-1/u-1/phone-config");
        let body: serde_json::Value = serde_json::from_slice(http.body.as_ref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"PhoneConfig": {"PhoneType": "SOFT_PHONE"}}));
    }

    #[test]
    fn test_validation_rejects_out_of_range_values() {
        assert!(ListUsersRequest::new("").validate().is_err());
        assert!(ListUsersRequest::new("i").with_max_results(1001).validate().is_err());
        assert!(ListUsersRequest::new("i").with_max_results(1000).validate().is_ok());

        let mut metrics = GetCurrentMetricDataRequest::new(
            "i",
            Filters::default(),
            vec![CurrentMetric::default()],
        );
        metrics.max_results = Some(101);
        assert!(metrics.validate().is_err());

        let long_token = StartOutboundVoiceContactRequest::new("i", "f", "+1")
            .with_client_token("t".repeat(501));
        assert!(long_token.validate().is_err());
    }

    #[test]
    fn test_empty_get_has_no_body() {
        let http = DescribeUserHierarchyStructureRequest::new("i").to_http_request().unwrap();
        assert!(http.body.is_none());
        assert_eq!(http.path, "/user-hierarchy-structure/i");
    }

    #[test]
    fn test_metric_filters_need_at_least_one_queue() {
        let request = |queues: Vec<String>| {
            GetCurrentMetricDataRequest::new(
                "i",
                Filters::queues(queues),
                vec![CurrentMetric::default()],
            )
        };
        assert!(request(vec![]).validate().is_err());
        assert!(request(vec!["q-1".to_string()]).validate().is_ok());
        assert!(request((0..101).map(|i| format!("q-{i}")).collect())
            .validate()
            .is_err());
    }
}
