use super::common::{add_map_entry, replace_list, Tags};
use crate::domain::enums::PhoneType;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Contact information of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserIdentityInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Phone settings of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPhoneConfig {
    pub phone_type: PhoneType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_accept: Option<bool>,
    /// After contact work limit, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_contact_work_time_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desk_phone_number: Option<String>,
}

impl UserPhoneConfig {
    pub fn new(phone_type: PhoneType) -> Self {
        Self {
            phone_type,
            auto_accept: None,
            after_contact_work_time_limit: None,
            desk_phone_number: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_info: Option<UserIdentityInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_config: Option<UserPhoneConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_profile_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserRequest {
    pub username: String,
    /// Required when the instance uses Amazon Connect identity management.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_info: Option<UserIdentityInfo>,
    pub phone_config: UserPhoneConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_user_id: Option<String>,
    pub security_profile_ids: Vec<String>,
    pub routing_profile_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy_group_id: Option<String>,
    #[serde(skip_serializing)]
    pub instance_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl CreateUserRequest {
    pub fn new(
        instance_id: impl Into<String>,
        username: impl Into<String>,
        phone_config: UserPhoneConfig,
        routing_profile_id: impl Into<String>,
        security_profile_ids: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: None,
            identity_info: None,
            phone_config,
            directory_user_id: None,
            security_profile_ids: security_profile_ids.into_iter().collect(),
            routing_profile_id: routing_profile_id.into(),
            hierarchy_group_id: None,
            instance_id: instance_id.into(),
            tags: None,
        }
    }

    pub fn with_identity_info(mut self, identity_info: UserIdentityInfo) -> Self {
        self.identity_info = Some(identity_info);
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn add_tags_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        add_map_entry(&mut self.tags, "Tags", key, value)?;
        Ok(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_arn: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteUserRequest {
    #[serde(skip_serializing)]
    pub instance_id: String,
    #[serde(skip_serializing)]
    pub user_id: String,
}

impl DeleteUserRequest {
    pub fn new(instance_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            user_id: user_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserRequest {
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(skip_serializing)]
    pub instance_id: String,
}

impl DescribeUserRequest {
    pub fn new(instance_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            instance_id: instance_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersRequest {
    #[serde(skip_serializing)]
    pub instance_id: String,
    #[serde(skip_serializing)]
    pub next_token: Option<String>,
    #[serde(skip_serializing)]
    pub max_results: Option<i32>,
}

impl ListUsersRequest {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            next_token: None,
            max_results: None,
        }
    }

    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_summary_list: Option<Vec<UserSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserHierarchyRequest {
    /// `None` removes the user from its hierarchy group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy_group_id: Option<String>,
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(skip_serializing)]
    pub instance_id: String,
}

impl UpdateUserHierarchyRequest {
    pub fn new(
        instance_id: impl Into<String>,
        user_id: impl Into<String>,
        hierarchy_group_id: Option<String>,
    ) -> Self {
        Self {
            hierarchy_group_id,
            user_id: user_id.into(),
            instance_id: instance_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserIdentityInfoRequest {
    pub identity_info: UserIdentityInfo,
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(skip_serializing)]
    pub instance_id: String,
}

impl UpdateUserIdentityInfoRequest {
    pub fn new(
        instance_id: impl Into<String>,
        user_id: impl Into<String>,
        identity_info: UserIdentityInfo,
    ) -> Self {
        Self {
            identity_info,
            user_id: user_id.into(),
            instance_id: instance_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserPhoneConfigRequest {
    pub phone_config: UserPhoneConfig,
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(skip_serializing)]
    pub instance_id: String,
}

impl UpdateUserPhoneConfigRequest {
    pub fn new(
        instance_id: impl Into<String>,
        user_id: impl Into<String>,
        phone_config: UserPhoneConfig,
    ) -> Self {
        Self {
            phone_config,
            user_id: user_id.into(),
            instance_id: instance_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserRoutingProfileRequest {
    pub routing_profile_id: String,
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(skip_serializing)]
    pub instance_id: String,
}

impl UpdateUserRoutingProfileRequest {
    pub fn new(
        instance_id: impl Into<String>,
        user_id: impl Into<String>,
        routing_profile_id: impl Into<String>,
    ) -> Self {
        Self {
            routing_profile_id: routing_profile_id.into(),
            user_id: user_id.into(),
            instance_id: instance_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserSecurityProfilesRequest {
    pub security_profile_ids: Vec<String>,
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(skip_serializing)]
    pub instance_id: String,
}

impl UpdateUserSecurityProfilesRequest {
    pub fn new(instance_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            security_profile_ids: Vec::new(),
            user_id: user_id.into(),
            instance_id: instance_id.into(),
        }
    }

    /// 取代整個安全設定檔清單
    pub fn with_security_profile_ids(mut self, ids: impl IntoIterator<Item = String>) -> Self {
        self.security_profile_ids = replace_list(ids).unwrap_or_default();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_user_body_omits_path_and_absent_fields() {
        let request = CreateUserRequest::new(
            "instance-1",
            "jdoe",
            UserPhoneConfig::new(PhoneType::SoftPhone),
            "rp-1",
            vec!["sp-1".to_string()],
        )
        .with_identity_info(UserIdentityInfo {
            first_name: Some("Jane".into()),
            ..Default::default()
        });

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "Username": "jdoe",
                "IdentityInfo": {"FirstName": "Jane"},
                "PhoneConfig": {"PhoneType": "SOFT_PHONE"},
                "SecurityProfileIds": ["sp-1"],
                "RoutingProfileId": "rp-1"
            })
        );
    }

    #[test]
    fn test_create_user_tags_reject_duplicates() {
        let request = CreateUserRequest::new(
            "instance-1",
            "jdoe",
            UserPhoneConfig::new(PhoneType::DeskPhone),
            "rp-1",
            Vec::new(),
        )
        .add_tags_entry("team", "support")
        .unwrap();
        assert!(request.add_tags_entry("team", "sales").is_err());
    }

    #[test]
    fn test_describe_user_result_parses_nested_user() {
        let payload = json!({
            "User": {
                "Id": "u-1",
                "Username": "jdoe",
                "PhoneConfig": {"PhoneType": "DESK_PHONE", "AutoAccept": false,
                                "AfterContactWorkTimeLimit": 30, "DeskPhoneNumber": "+15555550100"},
                "SecurityProfileIds": [],
                "Tags": {"team": "support"}
            }
        });
        let result: DescribeUserResult = serde_json::from_value(payload).unwrap();
        let user = result.user.unwrap();
        assert_eq!(user.id.as_deref(), Some("u-1"));
        assert_eq!(user.security_profile_ids, Some(Vec::new()));
        assert!(user.routing_profile_id.is_none());
        let phone = user.phone_config.unwrap();
        assert_eq!(phone.phone_type, PhoneType::DeskPhone);
        assert_eq!(phone.after_contact_work_time_limit, Some(30));
    }

    #[test]
    fn test_unknown_phone_type_is_rejected() {
        let payload = json!({"User": {"PhoneConfig": {"PhoneType": "CELL_PHONE"}}});
        assert!(serde_json::from_value::<DescribeUserResult>(payload).is_err());
    }

    #[test]
    fn test_structural_equality() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |s: &UserSummary| {
            let mut h = DefaultHasher::new();
            s.hash(&mut h);
            h.finish()
        };
        let a = UserSummary {
            id: Some("u-1".into()),
            arn: Some("arn:aws:connect:us-east-1:1:instance/i/agent/u-1".into()),
            username: Some("jdoe".into()),
        };
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));

        let c = UserSummary {
            username: Some("jroe".into()),
            ..a.clone()
        };
        assert_ne!(a, c);
    }

    #[test]
    fn test_security_profiles_replace_list() {
        let request = UpdateUserSecurityProfilesRequest::new("i", "u")
            .with_security_profile_ids(vec!["a".to_string(), "b".to_string()])
            .with_security_profile_ids(vec!["c".to_string()]);
        assert_eq!(request.security_profile_ids, vec!["c".to_string()]);
    }
}
