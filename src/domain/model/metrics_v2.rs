//! `GetMetricDataV2` shapes. Filter keys, grouping keys and metric names
//! are open-ended strings on this API and are passed through verbatim.

use super::common::replace_list;
use crate::utils::epoch;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilterV2 {
    /// `QUEUE`, `ROUTING_PROFILE`, `AGENT`, `CHANNEL`,
    /// `AGENT_HIERARCHY_LEVEL_ONE`..`_FIVE` or `FEATURE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_values: Option<Vec<String>>,
}

impl FilterV2 {
    pub fn new(key: impl Into<String>, values: impl IntoIterator<Item = String>) -> Self {
        Self {
            filter_key: Some(key.into()),
            filter_values: replace_list(values),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ThresholdV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricFilterV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_filter_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_filter_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negate: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Vec<ThresholdV2>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_filters: Option<Vec<MetricFilterV2>>,
}

impl MetricV2 {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn add_threshold(mut self, comparison: impl Into<String>, value: f64) -> Self {
        self.threshold.get_or_insert_with(Vec::new).push(ThresholdV2 {
            comparison: Some(comparison.into()),
            threshold_value: Some(value),
        });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricDataV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<MetricV2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricResultV2 {
    /// Grouping key to resource identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<MetricDataV2>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetMetricDataV2Request {
    /// ARN of the Amazon Connect instance.
    pub resource_arn: String,
    #[serde(with = "epoch")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "epoch")]
    pub end_time: DateTime<Utc>,
    pub filters: Vec<FilterV2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupings: Option<Vec<String>>,
    pub metrics: Vec<MetricV2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl GetMetricDataV2Request {
    pub fn new(
        resource_arn: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            resource_arn: resource_arn.into(),
            start_time,
            end_time,
            filters: Vec::new(),
            groupings: None,
            metrics: Vec::new(),
            next_token: None,
            max_results: None,
        }
    }

    pub fn add_filter(mut self, filter: FilterV2) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn add_metric(mut self, metric: MetricV2) -> Self {
        self.metrics.push(metric);
        self
    }

    pub fn with_groupings(mut self, groupings: impl IntoIterator<Item = String>) -> Self {
        self.groupings = replace_list(groupings);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetMetricDataV2Result {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_results: Option<Vec<MetricResultV2>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_v2_request_body() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let request = GetMetricDataV2Request::new("arn:aws:connect:us-east-1:1:instance/i-1", start, end)
            .add_filter(FilterV2::new("QUEUE", vec!["q-1".to_string()]))
            .add_metric(MetricV2::named("SUM_CONTACTS_ANSWERED_IN_X").add_threshold("LT", 30.0))
            .with_groupings(vec!["QUEUE".to_string()]);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "ResourceArn": "arn:aws:connect:us-east-1:1:instance/i-1",
                "StartTime": start.timestamp(),
                "EndTime": end.timestamp(),
                "Filters": [{"FilterKey": "QUEUE", "FilterValues": ["q-1"]}],
                "Groupings": ["QUEUE"],
                "Metrics": [{
                    "Name": "SUM_CONTACTS_ANSWERED_IN_X",
                    "Threshold": [{"Comparison": "LT", "ThresholdValue": 30.0}]
                }]
            })
        );
    }

    #[test]
    fn test_v2_result_dimensions() {
        let payload = json!({
            "MetricResults": [{
                "Dimensions": {"QUEUE": "q-1", "CHANNEL": "VOICE"},
                "Collections": [{"Metric": {"Name": "CONTACTS_HANDLED"}, "Value": 7.0}]
            }],
            "NextToken": "page-2"
        });
        let result: GetMetricDataV2Result = serde_json::from_value(payload).unwrap();
        assert_eq!(result.next_token.as_deref(), Some("page-2"));
        let row = &result.metric_results.unwrap()[0];
        assert_eq!(row.dimensions.as_ref().unwrap()["QUEUE"], "q-1");
        assert_eq!(row.collections.as_ref().unwrap()[0].value, Some(7.0));
    }
}
