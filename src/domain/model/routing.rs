//! Summary listings of instance resources: contact flows, hours of
//! operation, phone numbers, queues, routing and security profiles.

use super::common::replace_list;
use super::hierarchy::HierarchyGroupSummary;
use super::users::UserSummary;
use crate::domain::enums::{ContactFlowType, PhoneNumberCountryCode, PhoneNumberType, QueueType};
use serde::{Deserialize, Serialize};

/// Common view of a summary row, used for tabular output.
pub trait ResourceSummary {
    fn id(&self) -> Option<&str>;
    fn arn(&self) -> Option<&str>;
    /// Display name (the phone number or username where there is no name).
    fn name(&self) -> Option<&str>;
    /// Extra type column, when the summary carries one.
    fn kind(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactFlowSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_flow_type: Option<ContactFlowType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HoursOfOperationSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhoneNumberSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_type: Option<PhoneNumberType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_country_code: Option<PhoneNumberCountryCode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueueSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_type: Option<QueueType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoutingProfileSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityProfileSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

macro_rules! named_summary {
    ($($ty:ty),+) => {
        $(impl ResourceSummary for $ty {
            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }
            fn arn(&self) -> Option<&str> {
                self.arn.as_deref()
            }
            fn name(&self) -> Option<&str> {
                self.name.as_deref()
            }
        })+
    };
}

named_summary!(
    HoursOfOperationSummary,
    RoutingProfileSummary,
    SecurityProfileSummary,
    HierarchyGroupSummary
);

impl ResourceSummary for ContactFlowSummary {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn kind(&self) -> Option<&str> {
        self.contact_flow_type.map(|t| t.as_str())
    }
}

impl ResourceSummary for QueueSummary {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn kind(&self) -> Option<&str> {
        self.queue_type.map(|t| t.as_str())
    }
}

impl ResourceSummary for PhoneNumberSummary {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }
    fn name(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }
    fn kind(&self) -> Option<&str> {
        self.phone_number_type.map(|t| t.as_str())
    }
}

impl ResourceSummary for UserSummary {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }
    fn name(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListContactFlowsRequest {
    #[serde(skip_serializing)]
    pub instance_id: String,
    #[serde(skip_serializing)]
    pub contact_flow_types: Option<Vec<ContactFlowType>>,
    #[serde(skip_serializing)]
    pub next_token: Option<String>,
    #[serde(skip_serializing)]
    pub max_results: Option<i32>,
}

impl ListContactFlowsRequest {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            contact_flow_types: None,
            next_token: None,
            max_results: None,
        }
    }

    pub fn with_contact_flow_types(
        mut self,
        types: impl IntoIterator<Item = ContactFlowType>,
    ) -> Self {
        self.contact_flow_types = replace_list(types);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListContactFlowsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_flow_summary_list: Option<Vec<ContactFlowSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListHoursOfOperationsRequest {
    #[serde(skip_serializing)]
    pub instance_id: String,
    #[serde(skip_serializing)]
    pub next_token: Option<String>,
    #[serde(skip_serializing)]
    pub max_results: Option<i32>,
}

impl ListHoursOfOperationsRequest {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            next_token: None,
            max_results: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListHoursOfOperationsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_of_operation_summary_list: Option<Vec<HoursOfOperationSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPhoneNumbersRequest {
    #[serde(skip_serializing)]
    pub instance_id: String,
    #[serde(skip_serializing)]
    pub phone_number_types: Option<Vec<PhoneNumberType>>,
    #[serde(skip_serializing)]
    pub phone_number_country_codes: Option<Vec<PhoneNumberCountryCode>>,
    #[serde(skip_serializing)]
    pub next_token: Option<String>,
    #[serde(skip_serializing)]
    pub max_results: Option<i32>,
}

impl ListPhoneNumbersRequest {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            phone_number_types: None,
            phone_number_country_codes: None,
            next_token: None,
            max_results: None,
        }
    }

    pub fn with_phone_number_types(
        mut self,
        types: impl IntoIterator<Item = PhoneNumberType>,
    ) -> Self {
        self.phone_number_types = replace_list(types);
        self
    }

    pub fn with_phone_number_country_codes(
        mut self,
        codes: impl IntoIterator<Item = PhoneNumberCountryCode>,
    ) -> Self {
        self.phone_number_country_codes = replace_list(codes);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPhoneNumbersResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_summary_list: Option<Vec<PhoneNumberSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListQueuesRequest {
    #[serde(skip_serializing)]
    pub instance_id: String,
    #[serde(skip_serializing)]
    pub queue_types: Option<Vec<QueueType>>,
    #[serde(skip_serializing)]
    pub next_token: Option<String>,
    #[serde(skip_serializing)]
    pub max_results: Option<i32>,
}

impl ListQueuesRequest {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            queue_types: None,
            next_token: None,
            max_results: None,
        }
    }

    pub fn with_queue_types(mut self, types: impl IntoIterator<Item = QueueType>) -> Self {
        self.queue_types = replace_list(types);
        self
    }

    pub fn add_queue_type(mut self, queue_type: QueueType) -> Self {
        self.queue_types.get_or_insert_with(Vec::new).push(queue_type);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListQueuesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_summary_list: Option<Vec<QueueSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRoutingProfilesRequest {
    #[serde(skip_serializing)]
    pub instance_id: String,
    #[serde(skip_serializing)]
    pub next_token: Option<String>,
    #[serde(skip_serializing)]
    pub max_results: Option<i32>,
}

impl ListRoutingProfilesRequest {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            next_token: None,
            max_results: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRoutingProfilesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_profile_summary_list: Option<Vec<RoutingProfileSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSecurityProfilesRequest {
    #[serde(skip_serializing)]
    pub instance_id: String,
    #[serde(skip_serializing)]
    pub next_token: Option<String>,
    #[serde(skip_serializing)]
    pub max_results: Option<i32>,
}

impl ListSecurityProfilesRequest {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            next_token: None,
            max_results: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSecurityProfilesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_profile_summary_list: Option<Vec<SecurityProfileSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_list_stays_absent_and_empty_list_is_kept() {
        let absent: ListQueuesResult = serde_json::from_str("{}").unwrap();
        assert!(absent.queue_summary_list.is_none());
        assert!(absent.next_token.is_none());

        let empty: ListQueuesResult =
            serde_json::from_str(r#"{"QueueSummaryList": [], "NextToken": ""}"#).unwrap();
        assert_eq!(empty.queue_summary_list, Some(Vec::new()));
        assert_eq!(empty.next_token.as_deref(), Some(""));
        assert_ne!(absent, empty);
    }

    #[test]
    fn test_queue_type_helpers() {
        let request = ListQueuesRequest::new("i");
        assert!(request.queue_types.is_none());

        let request = request.add_queue_type(QueueType::Standard).add_queue_type(QueueType::Agent);
        assert_eq!(request.queue_types, Some(vec![QueueType::Standard, QueueType::Agent]));

        let request = request.with_queue_types(Vec::new());
        assert_eq!(request.queue_types, Some(Vec::new()));
    }

    #[test]
    fn test_phone_number_summary_parses_enums() {
        let payload = r#"{"PhoneNumberSummaryList":[{"Id":"p-1","PhoneNumber":"+15555550100",
            "PhoneNumberType":"DID","PhoneNumberCountryCode":"US"}]}"#;
        let result: ListPhoneNumbersResult = serde_json::from_str(payload).unwrap();
        let number = &result.phone_number_summary_list.unwrap()[0];
        assert_eq!(number.phone_number_type, Some(PhoneNumberType::Did));
        assert_eq!(number.phone_number_country_code, Some(PhoneNumberCountryCode::Us));
        assert_eq!(number.name(), Some("+15555550100"));
        assert_eq!(number.kind(), Some("DID"));
    }
}
