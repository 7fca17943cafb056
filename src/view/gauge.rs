//! Sentiment gauge chart options
//!
//! The first render configures the whole gauge; later renders only push the
//! new value so the chart can animate the pointer.

use serde_json::{json, Value};

pub const GAUGE_MIN: f64 = -1.0;
pub const GAUGE_MAX: f64 = 1.0;
pub const GAUGE_SPLITS: u32 = 10;

/// Axis colour bands as (fraction of the axis, colour)
pub const GAUGE_BANDS: [(f64, &str); 3] = [(0.3, "#ef4444"), (0.7, "#f59e0b"), (1.0, "#10b981")];

/// Axis positions that carry a text label
pub const GAUGE_LABELS: [(f64, &str); 5] = [
    (-1.0, "Very Negative"),
    (-0.5, "Negative"),
    (0.0, "Neutral"),
    (0.5, "Positive"),
    (1.0, "Very Positive"),
];

const SERIES_NAME: &str = "Sentiment";
const DATA_NAME: &str = "Market Sentiment";

/// Axis label for a tick value; unlabeled ticks get an empty string
pub fn gauge_label(value: f64) -> &'static str {
    GAUGE_LABELS
        .iter()
        .find(|(at, _)| (value - at).abs() < 1e-9)
        .map(|(_, label)| *label)
        .unwrap_or("")
}

/// Full gauge configuration showing `score`.
///
/// The axis label formatter is a function on the charting side; adapters
/// attach it using [`gauge_label`].
pub fn sentiment_gauge_option(score: f64) -> Value {
    let bands: Vec<Value> = GAUGE_BANDS
        .iter()
        .map(|(at, color)| json!([at, color]))
        .collect();

    json!({
        "backgroundColor": "transparent",
        "series": [{
            "name": SERIES_NAME,
            "type": "gauge",
            "min": GAUGE_MIN,
            "max": GAUGE_MAX,
            "splitNumber": GAUGE_SPLITS,
            "radius": "80%",
            "center": ["50%", "60%"],
            "axisLine": { "lineStyle": { "width": 30, "color": bands } },
            "pointer": { "itemStyle": { "color": "#00d4ff" } },
            "axisTick": {
                "distance": -30,
                "length": 8,
                "lineStyle": { "color": "#fff", "width": 2 }
            },
            "splitLine": {
                "distance": -30,
                "length": 30,
                "lineStyle": { "color": "#fff", "width": 4 }
            },
            "axisLabel": { "color": "#e5e7eb", "distance": 40, "fontSize": 12 },
            "detail": {
                "valueAnimation": true,
                "formatter": "{value}",
                "color": "#00d4ff",
                "fontSize": 24,
                "offsetCenter": [0, "70%"]
            },
            "data": [{ "value": score, "name": DATA_NAME }]
        }]
    })
}

/// Value-only update merged into an already configured gauge
pub fn sentiment_gauge_update(score: f64) -> Value {
    json!({
        "series": [{ "data": [{ "value": score, "name": DATA_NAME }] }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_option_shape() {
        let option = sentiment_gauge_option(0.67);
        let series = &option["series"][0];

        assert_eq!(series["type"], "gauge");
        assert_eq!(series["min"], -1.0);
        assert_eq!(series["max"], 1.0);
        assert_eq!(series["splitNumber"], 10);
        assert_eq!(series["axisLine"]["lineStyle"]["color"][0][0], 0.3);
        assert_eq!(series["axisLine"]["lineStyle"]["color"][2][1], "#10b981");
        assert_eq!(series["data"][0]["value"], 0.67);
    }

    #[test]
    fn test_update_only_carries_value() {
        let update = sentiment_gauge_update(-0.2);
        let series = &update["series"][0];

        assert_eq!(series["data"][0]["value"], -0.2);
        assert!(series.get("axisLine").is_none());
        assert!(update.get("backgroundColor").is_none());
    }

    #[test]
    fn test_labels() {
        assert_eq!(gauge_label(-1.0), "Very Negative");
        assert_eq!(gauge_label(-0.5), "Negative");
        assert_eq!(gauge_label(0.0), "Neutral");
        assert_eq!(gauge_label(0.5), "Positive");
        assert_eq!(gauge_label(1.0), "Very Positive");
        assert_eq!(gauge_label(0.2), "");
    }
}
