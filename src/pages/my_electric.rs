//! MyElectric Page
//!
//! The energy monitoring screen: live power draw, usage today, the two
//! charts, and the configuration flow.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{ConfigModal, DailyChart, PowerChart};
use crate::format::{format_energy, format_power};
use crate::state::{ConfigFlow, ConfigOutcome, MyElectricViewModel};

const DEFAULT_TITLE: &str = "My Electric";

/// MyElectric screen component
#[component]
pub fn MyElectric() -> impl IntoView {
    let vm = use_context::<MyElectricViewModel>().expect("MyElectricViewModel not found");

    // Lifecycle: active from mount until teardown, suspended while the tab
    // is hidden.
    create_effect(move |_| {
        vm.active.set(true);
    });
    on_cleanup(move || vm.active.set(false));
    watch_page_visibility(vm);

    // Navigation title follows the configured name.
    create_effect(move |_| {
        let title = vm.title.get().unwrap_or_else(|| DEFAULT_TITLE.to_string());
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&format!("{} | EmonView", title));
        }
    });

    // Configuration flow: one modal at a time, a new tap replaces a pending
    // flow. The completion slot is observed here and consumed on dismissal.
    let flow = ConfigFlow::new();
    let on_configure = move |_| flow.present();

    create_effect(move |_| {
        if !flow.showing.get() {
            return;
        }
        if let Some(outcome) = flow.finished.get() {
            if let ConfigOutcome::Saved(name) = &outcome {
                vm.show_success(&format!("Saved configuration for {}", name));
            }
            flow.dismiss();
        }
    });

    view! {
        <div class="space-y-6">
            // Screen header with the configure action
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">
                    {move || vm.title.get().unwrap_or_else(|| DEFAULT_TITLE.to_string())}
                </h1>
                <button
                    on:click=on_configure
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Configure"
                </button>
            </div>

            // Main content, shown only while the app is configured
            <div class="space-y-6" class:hidden=move || !vm.is_ready.get()>
                <div class="grid grid-cols-2 gap-4">
                    <StatCard
                        label="Power now"
                        value=Signal::derive(move || vm.data.with(|d| {
                            if d.generated_at == 0 {
                                "—".to_string()
                            } else {
                                format_power(d.power_now)
                            }
                        }))
                    />
                    <StatCard
                        label="Usage today"
                        value=Signal::derive(move || vm.data.with(|d| {
                            if d.generated_at == 0 {
                                "—".to_string()
                            } else {
                                format_energy(d.usage_today)
                            }
                        }))
                    />
                </div>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Power"</h2>
                    <PowerChart />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Daily Usage"</h2>
                    <DailyChart />
                </section>
            </div>

            // Placeholder, the exact complement of the main content
            <div
                class="bg-gray-800 rounded-xl p-10 text-center space-y-4"
                class:hidden=move || vm.is_ready.get()
            >
                <p class="text-gray-400">
                    "This app needs configuring before it can display data."
                </p>
                <button
                    on:click=on_configure
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Configure"
                </button>
            </div>

            <ConfigModal flow=flow />
        </div>
    }
}

/// Mirror document visibility into the view-model's active flag.
fn watch_page_visibility(vm: MyElectricViewModel) {
    let on_visibility = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            vm.active.set(!document.hidden());
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let _ = document
            .add_event_listener_with_callback("visibilitychange", on_visibility.as_ref().unchecked_ref());
    }
    on_visibility.forget();
}

/// Single reading with a label, e.g. the current power draw
#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">{move || value.get()}</div>
        </div>
    }
}
