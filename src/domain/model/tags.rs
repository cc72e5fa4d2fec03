use super::common::{insert_unique, Tags};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

// 標籤 API 的成員名稱為小寫駝峰 (`tags`, `resourceArn`, `tagKeys`)

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsForResourceRequest {
    #[serde(skip_serializing)]
    pub resource_arn: String,
}

impl ListTagsForResourceRequest {
    pub fn new(resource_arn: impl Into<String>) -> Self {
        Self {
            resource_arn: resource_arn.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsForResourceResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResourceRequest {
    #[serde(skip_serializing)]
    pub resource_arn: String,
    pub tags: Tags,
}

impl TagResourceRequest {
    pub fn new(resource_arn: impl Into<String>) -> Self {
        Self {
            resource_arn: resource_arn.into(),
            tags: Tags::new(),
        }
    }

    pub fn add_tags_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        insert_unique(&mut self.tags, "tags", key, value)?;
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntagResourceRequest {
    #[serde(skip_serializing)]
    pub resource_arn: String,
    #[serde(skip_serializing)]
    pub tag_keys: Vec<String>,
}

impl UntagResourceRequest {
    pub fn new(resource_arn: impl Into<String>, tag_keys: impl IntoIterator<Item = String>) -> Self {
        Self {
            resource_arn: resource_arn.into(),
            tag_keys: tag_keys.into_iter().collect(),
        }
    }
}
