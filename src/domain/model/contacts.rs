use super::common::{add_map_entry, insert_unique, Attributes};
use crate::domain::enums::RehydrationType;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Places an outbound call to a customer through a contact flow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartOutboundVoiceContactRequest {
    /// E.164 number to call.
    pub destination_phone_number: String,
    pub contact_flow_id: String,
    pub instance_id: String,
    /// Idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl StartOutboundVoiceContactRequest {
    pub fn new(
        instance_id: impl Into<String>,
        contact_flow_id: impl Into<String>,
        destination_phone_number: impl Into<String>,
    ) -> Self {
        Self {
            destination_phone_number: destination_phone_number.into(),
            contact_flow_id: contact_flow_id.into(),
            instance_id: instance_id.into(),
            client_token: None,
            source_phone_number: None,
            queue_id: None,
            attributes: None,
        }
    }

    pub fn with_client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
        self
    }

    pub fn with_source_phone_number(mut self, number: impl Into<String>) -> Self {
        self.source_phone_number = Some(number.into());
        self
    }

    pub fn with_queue_id(mut self, queue_id: impl Into<String>) -> Self {
        self.queue_id = Some(queue_id.into());
        self
    }

    pub fn add_attributes_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        add_map_entry(&mut self.attributes, "Attributes", key, value)?;
        Ok(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartOutboundVoiceContactResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopContactRequest {
    pub contact_id: String,
    pub instance_id: String,
}

impl StopContactRequest {
    pub fn new(instance_id: impl Into<String>, contact_id: impl Into<String>) -> Self {
        Self {
            contact_id: contact_id.into(),
            instance_id: instance_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetContactAttributesRequest {
    #[serde(skip_serializing)]
    pub instance_id: String,
    #[serde(skip_serializing)]
    pub initial_contact_id: String,
}

impl GetContactAttributesRequest {
    pub fn new(instance_id: impl Into<String>, initial_contact_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            initial_contact_id: initial_contact_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetContactAttributesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateContactAttributesRequest {
    pub initial_contact_id: String,
    pub instance_id: String,
    /// 以空字串值清除既有屬性
    pub attributes: Attributes,
}

impl UpdateContactAttributesRequest {
    pub fn new(instance_id: impl Into<String>, initial_contact_id: impl Into<String>) -> Self {
        Self {
            initial_contact_id: initial_contact_id.into(),
            instance_id: instance_id.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn add_attributes_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        insert_unique(&mut self.attributes, "Attributes", key, value)?;
        Ok(self)
    }
}

/// Resumes a past chat as a persistent chat session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePersistentContactAssociationRequest {
    #[serde(skip_serializing)]
    pub instance_id: String,
    /// Contact the association is created from.
    #[serde(skip_serializing)]
    pub initial_contact_id: String,
    pub rehydration_type: RehydrationType,
    pub source_contact_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

impl CreatePersistentContactAssociationRequest {
    pub fn new(
        instance_id: impl Into<String>,
        initial_contact_id: impl Into<String>,
        rehydration_type: RehydrationType,
        source_contact_id: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            initial_contact_id: initial_contact_id.into(),
            rehydration_type,
            source_contact_id: source_contact_id.into(),
            client_token: None,
        }
    }

    pub fn with_client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePersistentContactAssociationResult {
    /// Contact the persistent session was actually rehydrated from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continued_from_contact_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outbound_voice_body() {
        let request = StartOutboundVoiceContactRequest::new("i-1", "flow-1", "+15555550100")
            .with_queue_id("q-1")
            .add_attributes_entry("orderId", "42")
            .unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "DestinationPhoneNumber": "+15555550100",
                "ContactFlowId": "flow-1",
                "InstanceId": "i-1",
                "QueueId": "q-1",
                "Attributes": {"orderId": "42"}
            })
        );
    }

    #[test]
    fn test_update_attributes_duplicate_key_keeps_existing() {
        let request = UpdateContactAttributesRequest::new("i-1", "c-1")
            .add_attributes_entry("tier", "gold")
            .unwrap();
        let err = request.clone().add_attributes_entry("tier", "silver").unwrap_err();
        assert!(err.to_string().contains("tier"));
        assert_eq!(request.attributes["tier"], "gold");
    }

    #[test]
    fn test_persistent_association_body() {
        let request = CreatePersistentContactAssociationRequest::new(
            "i-1",
            "c-3",
            RehydrationType::FromSegment,
            "c-2",
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"RehydrationType": "FROM_SEGMENT", "SourceContactId": "c-2"})
        );
    }

    #[test]
    fn test_persistent_association_rejects_unknown_rehydration_type() {
        let input = json!({
            "InstanceId": "i-1",
            "InitialContactId": "c-3",
            "RehydrationType": "LAST_SEGMENT",
            "SourceContactId": "c-2"
        });
        assert!(serde_json::from_value::<CreatePersistentContactAssociationRequest>(input).is_err());
    }
}
