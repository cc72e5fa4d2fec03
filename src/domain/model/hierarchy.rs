use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HierarchyGroupSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HierarchyLevel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Groups from the top level down to a given group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HierarchyPath {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_one: Option<HierarchyGroupSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_two: Option<HierarchyGroupSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_three: Option<HierarchyGroupSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_four: Option<HierarchyGroupSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_five: Option<HierarchyGroupSummary>,
}

impl HierarchyPath {
    /// 由上而下列出已設定的層級
    pub fn levels(&self) -> Vec<&HierarchyGroupSummary> {
        [
            &self.level_one,
            &self.level_two,
            &self.level_three,
            &self.level_four,
            &self.level_five,
        ]
        .into_iter()
        .filter_map(Option::as_ref)
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HierarchyGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy_path: Option<HierarchyPath>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HierarchyStructure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_one: Option<HierarchyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_two: Option<HierarchyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_three: Option<HierarchyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_four: Option<HierarchyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_five: Option<HierarchyLevel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserHierarchyGroupRequest {
    #[serde(skip_serializing)]
    pub hierarchy_group_id: String,
    #[serde(skip_serializing)]
    pub instance_id: String,
}

impl DescribeUserHierarchyGroupRequest {
    pub fn new(instance_id: impl Into<String>, hierarchy_group_id: impl Into<String>) -> Self {
        Self {
            hierarchy_group_id: hierarchy_group_id.into(),
            instance_id: instance_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserHierarchyGroupResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy_group: Option<HierarchyGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserHierarchyStructureRequest {
    #[serde(skip_serializing)]
    pub instance_id: String,
}

impl DescribeUserHierarchyStructureRequest {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserHierarchyStructureResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy_structure: Option<HierarchyStructure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUserHierarchyGroupsRequest {
    #[serde(skip_serializing)]
    pub instance_id: String,
    #[serde(skip_serializing)]
    pub next_token: Option<String>,
    #[serde(skip_serializing)]
    pub max_results: Option<i32>,
}

impl ListUserHierarchyGroupsRequest {
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
pub struct ListUserHierarchyGroupsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_hierarchy_group_summary_list: Option<Vec<HierarchyGroupSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hierarchy_path_levels_skip_gaps() {
        let payload = r#"{
            "HierarchyGroup": {
                "Id": "g-3",
                "LevelId": "3",
                "HierarchyPath": {
                    "LevelOne": {"Id": "g-1", "Name": "EMEA"},
                    "LevelThree": {"Id": "g-3", "Name": "Tier 1"}
                }
            }
        }"#;
        let result: DescribeUserHierarchyGroupResult = serde_json::from_str(payload).unwrap();
        let group = result.hierarchy_group.unwrap();
        let path = group.hierarchy_path.unwrap();
        let names: Vec<_> = path.levels().iter().filter_map(|l| l.name.as_deref()).collect();
        assert_eq!(names, vec!["EMEA", "Tier 1"]);
        assert!(path.level_two.is_none());
    }
}
