//! In-memory display surface

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde_json::{json, Value};

use super::{ChartKind, DisplaySurface, Slot};
use crate::view::{AssetCard, ControlGroup, SelectorGroup};

/// Records everything written to it.
///
/// Every slot is present unless removed with [`MemorySurface::without`].
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    missing: BTreeSet<Slot>,
    texts: BTreeMap<Slot, String>,
    cards: Vec<AssetCard>,
    card_renders: usize,
    controls: HashMap<ControlGroup, SelectorGroup>,
    chart_options: HashMap<ChartKind, Vec<Value>>,
    resizes: HashMap<ChartKind, usize>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat `slot` as absent from the page
    pub fn without(mut self, slot: Slot) -> Self {
        self.missing.insert(slot);
        self
    }

    pub fn text(&self, slot: Slot) -> Option<&str> {
        self.texts.get(&slot).map(String::as_str)
    }

    pub fn cards(&self) -> &[AssetCard] {
        &self.cards
    }

    /// How many times the card container was rebuilt
    pub fn card_renders(&self) -> usize {
        self.card_renders
    }

    pub fn controls(&self, group: ControlGroup) -> Option<&SelectorGroup> {
        self.controls.get(&group)
    }

    /// Every option pushed to `chart`, oldest first
    pub fn chart_options(&self, chart: ChartKind) -> &[Value] {
        self.chart_options
            .get(&chart)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn last_chart_option(&self, chart: ChartKind) -> Option<&Value> {
        self.chart_options(chart).last()
    }

    pub fn resize_count(&self, chart: ChartKind) -> usize {
        self.resizes.get(&chart).copied().unwrap_or(0)
    }

    /// Current contents as a JSON document
    pub fn to_json(&self) -> Value {
        let texts: serde_json::Map<String, Value> = self
            .texts
            .iter()
            .map(|(slot, text)| (slot.element_id().to_string(), json!(text)))
            .collect();

        let active = |group: ControlGroup| {
            self.controls
                .get(&group)
                .and_then(|c| c.active_key())
                .map(str::to_string)
        };

        json!({
            "texts": texts,
            "cards": self.cards,
            "active": {
                "asset": active(ControlGroup::Asset),
                "timeframe": active(ControlGroup::Timeframe),
            },
            "charts": {
                "sentiment_gauge": self.last_chart_option(ChartKind::SentimentGauge),
                "price": self.last_chart_option(ChartKind::Price),
            }
        })
    }
}

impl DisplaySurface for MemorySurface {
    fn has_slot(&self, slot: Slot) -> bool {
        !self.missing.contains(&slot)
    }

    fn set_text(&mut self, slot: Slot, text: &str) {
        if !self.has_slot(slot) {
            return;
        }
        tracing::debug!(slot = slot.element_id(), text, "Label updated");
        self.texts.insert(slot, text.to_string());
    }

    fn set_cards(&mut self, cards: &[AssetCard]) {
        if !self.has_slot(Slot::CryptoCards) {
            return;
        }
        tracing::debug!(count = cards.len(), "Cards rendered");
        self.cards = cards.to_vec();
        self.card_renders += 1;
    }

    fn set_controls(&mut self, group: ControlGroup, controls: &SelectorGroup) {
        if !self.has_slot(group.slot()) {
            return;
        }
        self.controls.insert(group, controls.clone());
    }

    fn set_chart_option(&mut self, chart: ChartKind, option: &Value) {
        if !self.has_slot(chart.slot()) {
            return;
        }
        self.chart_options
            .entry(chart)
            .or_default()
            .push(option.clone());
    }

    fn resize_chart(&mut self, chart: ChartKind) {
        if !self.has_slot(chart.slot()) {
            return;
        }
        *self.resizes.entry(chart).or_insert(0) += 1;
    }
}
