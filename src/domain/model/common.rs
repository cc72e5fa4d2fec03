use crate::utils::error::{ConnectError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key/value tags attached to a resource.
pub type Tags = BTreeMap<String, String>;

/// User-defined contact attributes.
pub type Attributes = BTreeMap<String, String>;

/// Output of operations that return no payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmptyResult {}

/// 新增單一 map 項目；map 不存在時建立，key 已存在則拒絕
pub(crate) fn add_map_entry(
    map: &mut Option<BTreeMap<String, String>>,
    field: &str,
    key: impl Into<String>,
    value: impl Into<String>,
) -> Result<()> {
    insert_unique(map.get_or_insert_with(BTreeMap::new), field, key, value)
}

/// 新增單一 map 項目，key 已存在則拒絕
pub(crate) fn insert_unique(
    map: &mut BTreeMap<String, String>,
    field: &str,
    key: impl Into<String>,
    value: impl Into<String>,
) -> Result<()> {
    let key = key.into();
    if map.contains_key(&key) {
        return Err(ConnectError::DuplicateKey {
            field: field.to_string(),
            key,
        });
    }
    map.insert(key, value.into());
    Ok(())
}

/// 以新內容取代 (或建立) 集合欄位
pub(crate) fn replace_list<T>(items: impl IntoIterator<Item = T>) -> Option<Vec<T>> {
    Some(items.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_map_entry_initializes_then_rejects_duplicates() {
        let mut map = None;
        add_map_entry(&mut map, "Tags", "team", "ops").unwrap();
        assert_eq!(map.as_ref().unwrap().get("team").map(String::as_str), Some("ops"));

        let err = add_map_entry(&mut map, "Tags", "team", "sales").unwrap_err();
        assert!(matches!(err, ConnectError::DuplicateKey { ref key, .. } if key == "team"));
        assert_eq!(map.unwrap()["team"], "ops");
    }

    #[test]
    fn test_empty_result_parses_from_empty_object() {
        let parsed: EmptyResult = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, EmptyResult {});
    }
}
