//! Web display surface
//!
//! Label, card and selector slots are Leptos signals read by the components;
//! chart slots are ECharts instances created on the first option pushed to
//! them.

use std::collections::{BTreeMap, HashMap};

use cryptodash::view::{AssetCard, ControlGroup, SelectorGroup};
use cryptodash::{ChartKind, DisplaySurface, Slot};
use leptos::*;
use serde_json::Value;

use crate::echarts::Chart;

/// Reactive state the components render from
#[derive(Clone, Copy)]
pub struct ViewSignals {
    pub texts: RwSignal<BTreeMap<Slot, String>>,
    pub cards: RwSignal<Vec<AssetCard>>,
    pub asset_controls: RwSignal<Option<SelectorGroup>>,
    pub timeframe_controls: RwSignal<Option<SelectorGroup>>,
}

impl ViewSignals {
    pub fn new() -> Self {
        Self {
            texts: create_rw_signal(BTreeMap::new()),
            cards: create_rw_signal(Vec::new()),
            asset_controls: create_rw_signal(None),
            timeframe_controls: create_rw_signal(None),
        }
    }

    /// Current text of a label slot, or `placeholder` before the first render
    pub fn text_or(&self, slot: Slot, placeholder: &str) -> String {
        self.texts
            .with(|texts| texts.get(&slot).cloned())
            .unwrap_or_else(|| placeholder.to_string())
    }

    pub fn controls(&self, group: ControlGroup) -> RwSignal<Option<SelectorGroup>> {
        match group {
            ControlGroup::Asset => self.asset_controls,
            ControlGroup::Timeframe => self.timeframe_controls,
        }
    }
}

/// Surface backed by the mounted page
pub struct WebSurface {
    signals: ViewSignals,
    charts: HashMap<ChartKind, Chart>,
}

impl WebSurface {
    pub fn new(signals: ViewSignals) -> Self {
        Self {
            signals,
            charts: HashMap::new(),
        }
    }

    fn element(slot: Slot) -> Option<web_sys::Element> {
        web_sys::window()?
            .document()?
            .get_element_by_id(slot.element_id())
    }

    fn chart(&mut self, kind: ChartKind) -> Option<&Chart> {
        if !self.charts.contains_key(&kind) {
            let element = Self::element(kind.slot())?;
            self.charts.insert(kind, Chart::new(&element));
        }
        self.charts.get(&kind)
    }
}

impl DisplaySurface for WebSurface {
    fn has_slot(&self, slot: Slot) -> bool {
        Self::element(slot).is_some()
    }

    fn set_text(&mut self, slot: Slot, text: &str) {
        self.signals.texts.update(|texts| {
            texts.insert(slot, text.to_string());
        });
    }

    fn set_cards(&mut self, cards: &[AssetCard]) {
        self.signals.cards.set(cards.to_vec());
    }

    fn set_controls(&mut self, group: ControlGroup, controls: &SelectorGroup) {
        self.signals.controls(group).set(Some(controls.clone()));
    }

    fn set_chart_option(&mut self, chart: ChartKind, option: &Value) {
        let Some(instance) = self.chart(chart) else {
            return;
        };
        if let Err(e) = instance.apply(chart, option) {
            web_sys::console::error_1(&format!("Chart update failed: {:?}", e).into());
        }
    }

    fn resize_chart(&mut self, chart: ChartKind) {
        if let Some(instance) = self.charts.get(&chart) {
            instance.resize();
        }
    }
}
