//! Navigation Component
//!
//! Header bar with section links and the mobile menu trigger.

use cryptodash::UiEvent;
use leptos::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::state::DashboardHandle;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let handle = use_context::<DashboardHandle>().expect("DashboardHandle not found");

    view! {
        <nav class="bg-gray-800 border-b border-gray-700 sticky top-0 z-40">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"₿"</span>
                        <span class="text-xl font-bold text-white">"CryptoSentiment"</span>
                    </div>

                    // Section links
                    <div class="hidden md:flex items-center space-x-1">
                        <NavLink section="market-overview" label="Overview" />
                        <NavLink section="charts" label="Charts" />
                        <NavLink section="crypto-cards" label="Assets" />
                    </div>

                    <button
                        id="mobile-menu-btn"
                        class="md:hidden px-3 py-2 rounded-lg text-gray-300 hover:bg-gray-700"
                        on:click=move |_| handle.dispatch(UiEvent::MobileMenu)
                    >
                        "☰"
                    </button>
                </div>
            </div>
        </nav>
    }
}

/// Link that smooth-scrolls to a section of the page
#[component]
fn NavLink(section: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <button
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            on:click=move |_| scroll_to_section(section)
        >
            {label}
        </button>
    }
}

fn scroll_to_section(section: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section));

    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
