//! Config Modal Component
//!
//! Modal configuration flow: edits a draft of the app configuration and
//! fills the flow's completion slot on Save or Cancel.

use leptos::*;

use crate::state::{ConfigFlow, ConfigOutcome, MyElectricViewModel};

/// Modal editor for the app configuration.
///
/// Stays mounted with the screen; presentation is driven by the flow's
/// `showing` signal, and every presentation re-seeds the drafts from the
/// current configuration.
#[component]
pub fn ConfigModal(flow: ConfigFlow) -> impl IntoView {
    let vm = use_context::<MyElectricViewModel>().expect("MyElectricViewModel not found");
    let config_vm = vm.config_view_model();

    let (save_error, set_save_error) = create_signal(None::<String>);

    // Fresh drafts for every presentation.
    create_effect(move |_| {
        if flow.showing.get() {
            config_vm.reseed();
            set_save_error.set(None);
        }
    });

    let on_save = move |_| match config_vm.save() {
        Ok(name) => flow.complete(ConfigOutcome::Saved(name)),
        Err(e) => set_save_error.set(Some(e)),
    };

    let on_cancel = move |_| flow.complete(ConfigOutcome::Cancelled);

    view! {
        <div
            class="fixed inset-0 z-40 bg-black/60 flex items-center justify-center px-4"
            class:hidden=move || !flow.showing.get()
        >
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md space-y-4">
                <h2 class="text-xl font-semibold">"Configure"</h2>

                <ConfigField label="App name" value=config_vm.name />
                <ConfigField label="Power feed" value=config_vm.power_feed_id />
                <ConfigField label="Usage feed (kWh)" value=config_vm.kwh_feed_id />

                {move || {
                    save_error.get().map(|e| view! {
                        <p class="text-sm text-red-400">{e}</p>
                    })
                }}

                <div class="flex justify-end space-x-2 pt-2">
                    <button
                        on:click=on_cancel
                        class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
                    >
                        "Cancel"
                    </button>
                    <button
                        on:click=on_save
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Single labelled text input bound to a draft signal
#[component]
fn ConfigField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
