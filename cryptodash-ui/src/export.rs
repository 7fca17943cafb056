//! `window.CryptoDashboard`
//!
//! Scripting hooks for the page: `loadData()` (returns a promise),
//! `updatePrices()` (cards and a fresh price chart), `updateSentiment()`,
//! and read-only `cryptoData`, `sentimentData` and `correlationData`
//! properties that always reflect the latest snapshot.

use js_sys::{Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::state::DashboardHandle;

/// Install the export object on `window`
pub fn install(handle: &DashboardHandle) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let api = Object::new();

    let h = handle.clone();
    set_function(
        &api,
        "loadData",
        Closure::<dyn Fn() -> js_sys::Promise>::new(move || {
            let h = h.clone();
            wasm_bindgen_futures::future_to_promise(async move {
                Ok(JsValue::from_bool(h.load_data().await))
            })
        })
        .into_js_value(),
    )?;

    let h = handle.clone();
    set_function(
        &api,
        "updatePrices",
        Closure::<dyn Fn()>::new(move || h.redraw_prices()).into_js_value(),
    )?;

    let h = handle.clone();
    set_function(
        &api,
        "updateSentiment",
        Closure::<dyn Fn()>::new(move || h.update_sentiment()).into_js_value(),
    )?;

    let h = handle.clone();
    define_getter(&api, "cryptoData", move || to_js(&h.crypto_data()))?;

    let h = handle.clone();
    define_getter(&api, "sentimentData", move || to_js(&h.sentiment_data()))?;

    let h = handle.clone();
    define_getter(&api, "correlationData", move || to_js(&h.correlation_data()))?;

    Reflect::set(&window, &"CryptoDashboard".into(), &api)?;
    Ok(())
}

fn set_function(target: &Object, name: &str, function: JsValue) -> Result<(), JsValue> {
    Reflect::set(target, &name.into(), &function).map(|_| ())
}

fn define_getter(
    target: &Object,
    name: &str,
    get: impl Fn() -> JsValue + 'static,
) -> Result<(), JsValue> {
    let descriptor = Object::new();
    let getter = Closure::<dyn Fn() -> JsValue>::new(get).into_js_value();
    Reflect::set(&descriptor, &"get".into(), &getter)?;
    Reflect::set(&descriptor, &"enumerable".into(), &JsValue::TRUE)?;
    Object::define_property(target, &name.into(), &descriptor);
    Ok(())
}

/// Serialize through JSON; `None` becomes `null`
fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_json::to_string(value)
        .ok()
        .and_then(|json| js_sys::JSON::parse(&json).ok())
        .unwrap_or(JsValue::NULL)
}
