//! Real-time (`GetCurrentMetricData`) and historical (`GetMetricData`)
//! metric shapes. Metric values are floating point, so these types compare
//! structurally with `PartialEq` only.

use super::common::replace_list;
use crate::domain::enums::{
    Channel, Comparison, CurrentMetricName, Grouping, HistoricalMetricName, Statistic, Unit,
};
use crate::utils::epoch;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Queues and channels to restrict metric data to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Filters {
    /// Queue IDs or ARNs, up to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queues: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<Channel>>,
}

impl Filters {
    pub fn queues(queues: impl IntoIterator<Item = String>) -> Self {
        Self {
            queues: replace_list(queues),
            channels: None,
        }
    }

    pub fn with_channels(mut self, channels: impl IntoIterator<Item = Channel>) -> Self {
        self.channels = replace_list(channels);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Threshold {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentMetric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<CurrentMetricName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
}

impl CurrentMetric {
    pub fn new(name: CurrentMetricName, unit: Unit) -> Self {
        Self {
            name: Some(name),
            unit: Some(unit),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HistoricalMetric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<HistoricalMetricName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Threshold>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistic: Option<Statistic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
}

impl HistoricalMetric {
    pub fn new(name: HistoricalMetricName, statistic: Statistic, unit: Unit) -> Self {
        Self {
            name: Some(name),
            threshold: None,
            statistic: Some(statistic),
            unit: Some(unit),
        }
    }

    /// `SERVICE_LEVEL` 需要搭配 "小於" 門檻
    pub fn with_threshold(mut self, comparison: Comparison, value: f64) -> Self {
        self.threshold = Some(Threshold {
            comparison: Some(comparison),
            threshold_value: Some(value),
        });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueueReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

/// Grouping keys a metric result applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dimensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<QueueReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentMetricData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<CurrentMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentMetricResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<CurrentMetricData>>,
}

impl CurrentMetricResult {
    pub fn value_of(&self, name: CurrentMetricName) -> Option<f64> {
        self.collections
            .as_deref()?
            .iter()
            .find(|data| data.metric.as_ref().and_then(|m| m.name) == Some(name))
            .and_then(|data| data.value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HistoricalMetricData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<HistoricalMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HistoricalMetricResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<HistoricalMetricData>>,
}

impl HistoricalMetricResult {
    pub fn value_of(&self, name: HistoricalMetricName) -> Option<f64> {
        self.collections
            .as_deref()?
            .iter()
            .find(|data| data.metric.as_ref().and_then(|m| m.name) == Some(name))
            .and_then(|data| data.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCurrentMetricDataRequest {
    #[serde(skip_serializing)]
    pub instance_id: String,
    pub filters: Filters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupings: Option<Vec<Grouping>>,
    pub current_metrics: Vec<CurrentMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl GetCurrentMetricDataRequest {
    pub fn new(
        instance_id: impl Into<String>,
        filters: Filters,
        current_metrics: impl IntoIterator<Item = CurrentMetric>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            filters,
            groupings: None,
            current_metrics: current_metrics.into_iter().collect(),
            next_token: None,
            max_results: None,
        }
    }

    pub fn with_groupings(mut self, groupings: impl IntoIterator<Item = Grouping>) -> Self {
        self.groupings = replace_list(groupings);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCurrentMetricDataResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_results: Option<Vec<CurrentMetricResult>>,
    /// When the snapshot of the data was taken.
    #[serde(default, with = "epoch::option", skip_serializing_if = "Option::is_none")]
    pub data_snapshot_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetMetricDataRequest {
    #[serde(skip_serializing)]
    pub instance_id: String,
    /// Must fall on a 5 minute boundary, at most 24 hours in the past.
    #[serde(with = "epoch")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "epoch")]
    pub end_time: DateTime<Utc>,
    pub filters: Filters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupings: Option<Vec<Grouping>>,
    pub historical_metrics: Vec<HistoricalMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl GetMetricDataRequest {
    pub fn new(
        instance_id: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        filters: Filters,
        historical_metrics: impl IntoIterator<Item = HistoricalMetric>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            start_time,
            end_time,
            filters,
            groupings: None,
            historical_metrics: historical_metrics.into_iter().collect(),
            next_token: None,
            max_results: None,
        }
    }

    pub fn with_groupings(mut self, groupings: impl IntoIterator<Item = Grouping>) -> Self {
        self.groupings = replace_list(groupings);
        self
    }

    pub fn add_historical_metric(mut self, metric: HistoricalMetric) -> Self {
        self.historical_metrics.push(metric);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetMetricDataResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_results: Option<Vec<HistoricalMetricResult>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_get_metric_data_body() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 5, 1, 11, 0, 0).unwrap();
        let request = GetMetricDataRequest::new(
            "i-1",
            start,
            end,
            Filters::queues(vec!["q-1".to_string()]).with_channels(vec![Channel::Voice]),
            vec![HistoricalMetric::new(
                HistoricalMetricName::ServiceLevel,
                Statistic::Avg,
                Unit::Percent,
            )
            .with_threshold(Comparison::Lt, 60.0)],
        )
        .with_groupings(vec![Grouping::Queue]);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "StartTime": start.timestamp(),
                "EndTime": end.timestamp(),
                "Filters": {"Queues": ["q-1"], "Channels": ["VOICE"]},
                "Groupings": ["QUEUE"],
                "HistoricalMetrics": [{
                    "Name": "SERVICE_LEVEL",
                    "Threshold": {"Comparison": "LT", "ThresholdValue": 60.0},
                    "Statistic": "AVG",
                    "Unit": "PERCENT"
                }]
            })
        );
    }

    #[test]
    fn test_current_metric_result_lookup() {
        let payload = json!({
            "MetricResults": [{
                "Dimensions": {"Queue": {"Id": "q-1"}, "Channel": "VOICE"},
                "Collections": [
                    {"Metric": {"Name": "AGENTS_ONLINE", "Unit": "COUNT"}, "Value": 12.0},
                    {"Metric": {"Name": "OLDEST_CONTACT_AGE", "Unit": "SECONDS"}, "Value": 95.5}
                ]
            }],
            "DataSnapshotTime": 1714557600.25
        });
        let result: GetCurrentMetricDataResult = serde_json::from_value(payload).unwrap();
        assert!(result.next_token.is_none());
        let row = &result.metric_results.as_ref().unwrap()[0];
        assert_eq!(row.value_of(CurrentMetricName::AgentsOnline), Some(12.0));
        assert_eq!(row.value_of(CurrentMetricName::OldestContactAge), Some(95.5));
        assert_eq!(row.value_of(CurrentMetricName::SlotsActive), None);
        assert_eq!(row.dimensions.as_ref().unwrap().channel, Some(Channel::Voice));
        assert_eq!(result.data_snapshot_time.unwrap().timestamp(), 1_714_557_600);
    }

    #[test]
    fn test_channel_filter_fails_closed() {
        let payload = json!({"Queues": [], "Channels": ["FAX"]});
        assert!(serde_json::from_value::<Filters>(payload).is_err());
    }
}
