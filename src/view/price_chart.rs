//! Price chart
//!
//! The dashboard has no price history. The chart shows a placeholder series:
//! random jitter around the last known price, scaled by the asset's
//! volatility. It is regenerated on every render and means nothing beyond
//! "roughly this price, roughly this volatile".

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::Rng;
use serde::Serialize;
use serde_json::{json, Value};

use crate::data::Asset;

/// Default number of points in the series
pub const DEFAULT_POINT_COUNT: usize = 100;
/// Default spacing between points (one minute)
pub const DEFAULT_INTERVAL_MS: i64 = 60_000;
/// Most points a series may have
pub const MAX_POINT_COUNT: usize = 10_000;
/// Longest time a series may cover (ten years)
pub const MAX_SERIES_SPAN_MS: i64 = 10 * 365 * 24 * 60 * 60 * 1000;

/// One synthesized point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub time: DateTime<Utc>,
    pub price: f64,
}

/// Build `point_count` points spaced `interval_ms` apart, the last one at
/// `now`. Each price is `price + uniform(-0.5, 0.5) * volatility * price`,
/// rounded to cents. Points whose time is not representable are left out.
pub fn synthesize_series<R: Rng + ?Sized>(
    asset: &Asset,
    point_count: usize,
    interval_ms: i64,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<PricePoint> {
    let base = asset.price;
    let spread = asset.volatility * base;

    (0..point_count)
        .rev()
        .filter_map(|steps_back| {
            let time = point_time(now, interval_ms, steps_back)?;
            let jitter = rng.gen_range(-0.5..0.5) * spread;
            Some(PricePoint {
                time,
                price: round_cents(base + jitter),
            })
        })
        .collect()
}

fn point_time(now: DateTime<Utc>, interval_ms: i64, steps_back: usize) -> Option<DateTime<Utc>> {
    let offset = i64::try_from(steps_back).ok()?.checked_mul(interval_ms)?;
    now.checked_sub_signed(Duration::try_milliseconds(offset)?)
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Line-area chart configuration for `points`.
///
/// The tooltip formatter is a function on the charting side; adapters attach
/// it using [`crate::view::format::price_tooltip`].
pub fn price_chart_option(asset: &Asset, points: &[PricePoint]) -> Value {
    let data: Vec<Value> = points
        .iter()
        .map(|p| json!([p.time.to_rfc3339_opts(SecondsFormat::Millis, true), p.price]))
        .collect();

    json!({
        "backgroundColor": "transparent",
        "title": {
            "text": format!("{} Price Chart", asset.name),
            "textStyle": { "color": "#e5e7eb", "fontSize": 18 }
        },
        "tooltip": {
            "trigger": "axis",
            "backgroundColor": "#1f2937",
            "borderColor": "#374151",
            "textStyle": { "color": "#e5e7eb" }
        },
        "grid": { "left": "3%", "right": "4%", "bottom": "3%", "containLabel": true },
        "xAxis": {
            "type": "time",
            "axisLine": { "lineStyle": { "color": "#374151" } },
            "axisLabel": { "color": "#9ca3af" }
        },
        "yAxis": {
            "type": "value",
            "axisLine": { "lineStyle": { "color": "#374151" } },
            "axisLabel": { "color": "#9ca3af", "formatter": "${value}" },
            "splitLine": { "lineStyle": { "color": "#374151" } }
        },
        "series": [{
            "name": "Price",
            "type": "line",
            "data": data,
            "smooth": true,
            "lineStyle": { "color": "#00d4ff", "width": 2 },
            "areaStyle": {
                "color": {
                    "type": "linear",
                    "x": 0, "y": 0, "x2": 0, "y2": 1,
                    "colorStops": [
                        { "offset": 0, "color": "rgba(0, 212, 255, 0.3)" },
                        { "offset": 1, "color": "rgba(0, 212, 255, 0.05)" }
                    ]
                }
            },
            "symbol": "none"
        }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fallback_snapshot;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn asset(price: f64, volatility: f64) -> Asset {
        let mut asset = fallback_snapshot().assets[0].clone();
        asset.price = price;
        asset.volatility = volatility;
        asset
    }

    #[test]
    fn test_points_stay_within_band() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = synthesize_series(
            &asset(100.0, 0.02),
            DEFAULT_POINT_COUNT,
            DEFAULT_INTERVAL_MS,
            Utc::now(),
            &mut rng,
        );

        assert_eq!(points.len(), 100);
        for p in &points {
            assert!(p.price >= 99.0 && p.price <= 101.0, "{} out of band", p.price);
        }
    }

    #[test]
    fn test_points_end_at_now_and_are_spaced() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(1);
        let points = synthesize_series(&asset(100.0, 0.02), 5, 60_000, now, &mut rng);

        assert_eq!(points.last().unwrap().time, now);
        assert_eq!(points[0].time, now - Duration::minutes(4));
        for pair in points.windows(2) {
            assert_eq!(pair[1].time - pair[0].time, Duration::minutes(1));
        }
    }

    #[test]
    fn test_zero_volatility_is_flat() {
        let mut rng = StdRng::seed_from_u64(3);
        let points = synthesize_series(&asset(3456.78, 0.0), 10, 60_000, Utc::now(), &mut rng);
        assert!(points.iter().all(|p| p.price == 3456.78));
    }

    #[test]
    fn test_option_carries_series() {
        let btc = asset(100.0, 0.02);
        let mut rng = StdRng::seed_from_u64(9);
        let points = synthesize_series(&btc, 3, 60_000, Utc::now(), &mut rng);
        let option = price_chart_option(&btc, &points);

        assert_eq!(option["title"]["text"], "Bitcoin Price Chart");
        assert_eq!(option["xAxis"]["type"], "time");
        assert_eq!(option["series"][0]["data"].as_array().unwrap().len(), 3);
        assert_eq!(option["series"][0]["data"][2][1], points[2].price);
    }

    #[test]
    fn test_unrepresentable_times_are_dropped() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(11);

        let points = synthesize_series(&asset(100.0, 0.02), 3, i64::MAX, now, &mut rng);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].time, now);

        // A few hundred thousand years back runs off the calendar
        let points = synthesize_series(&asset(100.0, 0.02), 100, 100_000_000_000_000, now, &mut rng);
        assert_eq!(points.last().unwrap().time, now);
        assert!(points.len() > 1 && points.len() < 100, "{} points", points.len());
    }
}
