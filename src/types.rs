//! Parameter and payload types for the Bitly SDK.

use serde::{Deserialize, Serialize};

use crate::params::{QueryValue, RawParams};

/// Time unit for metrics windows.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Minute,
    Hour,
    /// Service default.
    #[default]
    Day,
    Week,
    Month,
}

impl Unit {
    /// Wire name of the unit.
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
        }
    }
}

impl From<Unit> for QueryValue {
    fn from(unit: Unit) -> Self {
        QueryValue::Str(unit.as_str().to_string())
    }
}

/// Timezone used to bucket metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timezone {
    /// Hour offset from UTC, -14..=14.
    Offset(i8),
    /// Zone name such as `America/New_York`.
    Name(String),
}

impl From<Timezone> for QueryValue {
    fn from(tz: Timezone) -> Self {
        match tz {
            Timezone::Offset(h) => QueryValue::Int(h.into()),
            Timezone::Name(name) => QueryValue::Str(name),
        }
    }
}

/// Metrics window shared by the link, user and domain metrics endpoints.
///
/// The default asks for every available day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsQuery {
    /// minute | hour | day | week | month
    pub unit: Unit,
    /// Number of units to report; -1 for all.
    pub units: i64,
    /// Bucketing timezone (service default: America/New_York).
    pub timezone: Option<Timezone>,
    /// Roll all units up into one value. Not accepted by every endpoint.
    pub rollup: Option<bool>,
    /// 1..=1000, service default 100.
    pub limit: Option<u32>,
    /// Epoch seconds of the most recent moment to report (service default: now).
    pub unit_reference_ts: Option<i64>,
}

impl Default for MetricsQuery {
    fn default() -> Self {
        Self {
            unit: Unit::Day,
            units: -1,
            timezone: None,
            rollup: None,
            limit: None,
            unit_reference_ts: None,
        }
    }
}

impl MetricsQuery {
    pub(crate) fn apply(&self, params: RawParams, with_rollup: bool) -> RawParams {
        let params = params
            .with("unit", self.unit)
            .with("units", self.units)
            .with_opt("timezone", self.timezone.clone());
        let params = if with_rollup {
            params.with_opt("rollup", self.rollup)
        } else {
            params
        };
        params
            .with_opt("limit", self.limit)
            .with_opt("unit_reference_ts", self.unit_reference_ts)
    }
}

/// Payload of `/v3/shorten`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Shorten {
    /// Short link.
    pub url: String,
    /// User hash of the short link.
    pub hash: String,
    /// Aggregate hash shared by every short link of this long URL.
    #[serde(default)]
    pub global_hash: Option<String>,
    /// Long URL as stored by the service.
    #[serde(default)]
    pub long_url: Option<String>,
    /// 1 if this call created a new hash, 0 otherwise.
    #[serde(default)]
    pub new_hash: Option<u8>,
}

/// Payload of `/v3/expand`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Expand {
    pub expand: Vec<ExpandEntry>,
}

/// One expanded short link or hash.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ExpandEntry {
    #[serde(default)]
    pub short_url: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub user_hash: Option<String>,
    #[serde(default)]
    pub global_hash: Option<String>,
    #[serde(default)]
    pub long_url: Option<String>,
    /// Set instead of the other fields when the link is unknown.
    #[serde(default)]
    pub error: Option<String>,
}

/// Payload of `/v3/link/lookup` and `/v3/user/link_lookup`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Lookup {
    pub link_lookup: Vec<LookupEntry>,
}

/// One looked-up long URL.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LookupEntry {
    pub url: String,
    #[serde(default)]
    pub aggregate_link: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Payload of `/v3/user/link_save`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LinkSave {
    pub link_save: SavedLink,
}

/// A link saved to the authenticated user's history.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SavedLink {
    pub link: String,
    #[serde(default)]
    pub aggregate_link: Option<String>,
    pub long_url: String,
    /// 1 if the link was new to this user.
    #[serde(default)]
    pub new_link: Option<u8>,
}

/// Payload of `/v3/link/clicks`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Clicks {
    pub link_clicks: ClickCounts,
    pub unit: Unit,
    pub units: i64,
    #[serde(default)]
    pub tz_offset: Option<i64>,
    #[serde(default)]
    pub unit_reference_ts: Option<i64>,
}

/// Click totals: a single number when rolled up, a series otherwise.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ClickCounts {
    Total(u64),
    Series(Vec<ClickPoint>),
}

/// Clicks within one time unit.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ClickPoint {
    pub clicks: u64,
    /// Epoch seconds of the start of the unit.
    pub dt: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metrics_query_defaults() {
        let params = MetricsQuery::default().apply(RawParams::new(), true);
        let present: Vec<_> = params
            .iter()
            .filter_map(|(k, v)| v.map(|v| (k, v.clone())))
            .collect();
        assert_eq!(
            present,
            vec![
                ("unit", QueryValue::Str("day".into())),
                ("units", QueryValue::Int(-1)),
            ]
        );
    }

    #[test]
    fn test_metrics_query_rollup_is_optional() {
        let query = MetricsQuery {
            unit: Unit::Hour,
            units: 24,
            timezone: Some(Timezone::Offset(-5)),
            rollup: Some(true),
            limit: Some(10),
            unit_reference_ts: Some(1_360_000_000),
        };

        let with = query.apply(RawParams::new(), true);
        let keys: Vec<_> = with.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["unit", "units", "timezone", "rollup", "limit", "unit_reference_ts"]
        );

        let without = query.apply(RawParams::new(), false);
        assert!(without.iter().all(|(k, _)| k != "rollup"));
    }

    #[test]
    fn test_click_counts_shapes() {
        let rolled: Clicks = serde_json::from_value(json!({
            "link_clicks": 42, "unit": "day", "units": -1, "tz_offset": -4
        }))
        .unwrap();
        assert_eq!(rolled.link_clicks, ClickCounts::Total(42));

        let series: Clicks = serde_json::from_value(json!({
            "link_clicks": [{"clicks": 3, "dt": 1360000000}],
            "unit": "hour", "units": 1
        }))
        .unwrap();
        assert_eq!(series.unit, Unit::Hour);
        assert_eq!(
            series.link_clicks,
            ClickCounts::Series(vec![ClickPoint { clicks: 3, dt: 1_360_000_000 }])
        );
    }

    #[test]
    fn test_expand_entry_with_error() {
        let expand: Expand = serde_json::from_value(json!({
            "expand": [{"short_url": "http://bit.ly/nope", "error": "NOT_FOUND"}]
        }))
        .unwrap();
        assert_eq!(expand.expand[0].error.as_deref(), Some("NOT_FOUND"));
        assert!(expand.expand[0].long_url.is_none());
    }
}
