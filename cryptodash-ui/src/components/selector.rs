//! Selector Component
//!
//! A row of single-select buttons for assets or timeframes.

use cryptodash::{ControlGroup, UiEvent};
use leptos::*;

use crate::state::DashboardHandle;
use crate::surface::ViewSignals;

const BUTTON_BASE: &str = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";

#[component]
pub fn Selector(group: ControlGroup) -> impl IntoView {
    let signals = use_context::<ViewSignals>().expect("ViewSignals not found");
    let handle = use_context::<DashboardHandle>().expect("DashboardHandle not found");
    let controls = signals.controls(group);

    let button_class = match group {
        ControlGroup::Asset => "crypto-btn",
        ControlGroup::Timeframe => "time-btn",
    };

    view! {
        <div id=group.slot().element_id() class="flex flex-wrap gap-2">
            {move || {
                controls.get().map(|controls| {
                    controls.options()
                        .iter()
                        .map(|key| {
                            let handle = handle.clone();
                            let class = format!(
                                "{} {} {}",
                                button_class,
                                BUTTON_BASE,
                                controls.classes_for(key)
                            );
                            let event = match group {
                                ControlGroup::Asset => UiEvent::SelectAsset(key.clone()),
                                ControlGroup::Timeframe => UiEvent::SelectTimeframe(key.clone()),
                            };

                            view! {
                                <button class=class on:click=move |_| handle.dispatch(event.clone())>
                                    {key.clone()}
                                </button>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}
