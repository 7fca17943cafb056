//! ECharts bindings
//!
//! Minimal surface of the global `echarts` object loaded from index.html, plus
//! the two formatter callbacks the chart options cannot carry as JSON.

use chrono::{DateTime, Utc};
use cryptodash::view::{gauge_label, price_tooltip};
use cryptodash::ChartKind;
use js_sys::{Array, Reflect};
use serde_json::Value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A chart instance bound to one DOM element
    pub type EChartsInstance;

    #[wasm_bindgen(js_namespace = echarts, js_name = init)]
    fn init_raw(dom: &web_sys::Element, theme: &JsValue) -> EChartsInstance;

    #[wasm_bindgen(method, js_name = setOption)]
    pub fn set_option(this: &EChartsInstance, option: &JsValue);

    #[wasm_bindgen(method)]
    pub fn resize(this: &EChartsInstance);
}

/// No named theme; colours and the transparent background come from the
/// chart options
const THEME: JsValue = JsValue::UNDEFINED;

/// Create a chart on `dom` with the default ECharts theme
pub fn init(dom: &web_sys::Element) -> EChartsInstance {
    init_raw(dom, &THEME)
}

/// A chart instance owned by the web surface
pub struct Chart {
    instance: EChartsInstance,
}

impl Chart {
    pub fn new(dom: &web_sys::Element) -> Self {
        Self { instance: init(dom) }
    }

    /// Merge `option` into the chart, attaching formatter callbacks first
    pub fn apply(&self, kind: ChartKind, option: &Value) -> Result<(), JsValue> {
        let js_option = js_sys::JSON::parse(&option.to_string())?;

        match kind {
            ChartKind::SentimentGauge => {
                // Value-only updates carry no axis label to format
                if option["series"][0].get("axisLabel").is_some() {
                    let label = series_path(&js_option, "axisLabel")?;
                    let formatter = gauge_label_formatter();
                    Reflect::set(&label, &"formatter".into(), &formatter)?;
                }
            }
            ChartKind::Price => {
                let tooltip = Reflect::get(&js_option, &"tooltip".into())?;
                if tooltip.is_object() {
                    let formatter = price_tooltip_formatter();
                    Reflect::set(&tooltip, &"formatter".into(), &formatter)?;
                }
            }
        }

        self.instance.set_option(&js_option);
        Ok(())
    }

    pub fn resize(&self) {
        self.instance.resize();
    }
}

fn series_path(option: &JsValue, key: &str) -> Result<JsValue, JsValue> {
    let series = Reflect::get(option, &"series".into())?;
    let first = Reflect::get(&series, &JsValue::from(0))?;
    Reflect::get(&first, &key.into())
}

// Closures are handed to the JS garbage collector with into_js_value

/// Gauge axis labels: only the five named positions get text
fn gauge_label_formatter() -> JsValue {
    Closure::<dyn Fn(f64) -> String>::new(|value: f64| gauge_label(value).to_string())
        .into_js_value()
}

/// Axis tooltip: local timestamp and grouped price of the hovered point
fn price_tooltip_formatter() -> JsValue {
    Closure::<dyn Fn(JsValue) -> String>::new(|params: JsValue| {
        tooltip_text(&params).unwrap_or_default()
    })
    .into_js_value()
}

fn tooltip_text(params: &JsValue) -> Option<String> {
    let first = if Array::is_array(params) {
        Array::from(params).get(0)
    } else {
        params.clone()
    };
    let value = Array::from(&Reflect::get(&first, &"value".into()).ok()?);

    let time = value.get(0).as_string()?;
    let time = DateTime::parse_from_rfc3339(&time).ok()?.with_timezone(&Utc);
    let price = value.get(1).as_f64()?;

    Some(price_tooltip(time, price))
}
