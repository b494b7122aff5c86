//! MyElectric View-Model
//!
//! Reactive surface consumed by the screen: every output is a latest-value
//! signal that notifies its observers synchronously on the UI thread, and is
//! disposed with the owning reactive scope.

use leptos::*;

use crate::chart::DataPoint;
use crate::state::config::AppConfig;

/// One wholesale output snapshot.
///
/// Regenerated in full on every update tick; the screen fully replaces the
/// displayed series on each emission and keeps no cumulative state of its
/// own. `generated_at` is the snapshot's reference instant; daily bucketing
/// is computed against it, never against wall-clock time at render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MyElectricData {
    /// Instantaneous power draw in watts.
    pub power_now: f64,
    /// Energy used since midnight, in kWh.
    pub usage_today: f64,
    /// Continuous power series for the line chart.
    pub line_chart_data: Vec<DataPoint>,
    /// One point per day for the daily usage bar chart.
    pub bar_chart_data: Vec<DataPoint>,
    /// Epoch seconds at which this snapshot was produced. Zero means "no
    /// data yet".
    pub generated_at: i64,
}

/// View-model for the MyElectric screen.
#[derive(Clone, Copy)]
pub struct MyElectricViewModel {
    /// Whether the screen is currently visible. Collaborators suspend work
    /// while this is false.
    pub active: RwSignal<bool>,
    /// Latest output snapshot.
    pub data: RwSignal<MyElectricData>,
    /// Current app configuration.
    pub config: RwSignal<AppConfig>,
    /// Ready iff the app is configured. Drives the main/placeholder panels.
    pub is_ready: Memo<bool>,
    /// Screen title, absent until a name is configured.
    pub title: Memo<Option<String>>,
    /// Success message for toasts.
    pub success: RwSignal<Option<String>>,
    /// Error message for toasts.
    pub error: RwSignal<Option<String>>,
}

impl MyElectricViewModel {
    pub fn new(initial: AppConfig) -> Self {
        let config = create_rw_signal(initial);

        let is_ready = create_memo(move |_| config.with(|c| c.is_complete()));
        let title = create_memo(move |_| {
            let name = config.with(|c| c.name.trim().to_string());
            if name.is_empty() {
                None
            } else {
                Some(name)
            }
        });

        Self {
            active: create_rw_signal(false),
            data: create_rw_signal(MyElectricData::default()),
            config,
            is_ready,
            title,
            success: create_rw_signal(None),
            error: create_rw_signal(None),
        }
    }

    /// Child view-model for the configuration flow. Drafts are seeded from
    /// the current configuration; saving writes back to it.
    pub fn config_view_model(&self) -> ConfigViewModel {
        ConfigViewModel::new(self.config)
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

/// Provide the view-model to the component tree.
pub fn provide_view_model() {
    provide_context(MyElectricViewModel::new(AppConfig::load()));
}

/// View-model for the configuration flow: editable drafts over the parent's
/// configuration signal.
#[derive(Clone, Copy)]
pub struct ConfigViewModel {
    target: RwSignal<AppConfig>,
    pub name: RwSignal<String>,
    pub power_feed_id: RwSignal<String>,
    pub kwh_feed_id: RwSignal<String>,
}

impl ConfigViewModel {
    fn new(target: RwSignal<AppConfig>) -> Self {
        let current = target.get_untracked();
        Self {
            target,
            name: create_rw_signal(current.name),
            power_feed_id: create_rw_signal(current.power_feed_id),
            kwh_feed_id: create_rw_signal(current.kwh_feed_id),
        }
    }

    /// Re-seed the drafts from the current configuration, discarding any
    /// half-edited state from a previous presentation.
    pub fn reseed(&self) {
        let current = self.target.get_untracked();
        self.name.set(current.name);
        self.power_feed_id.set(current.power_feed_id);
        self.kwh_feed_id.set(current.kwh_feed_id);
    }

    /// Assemble a configuration from the drafts, rejecting incomplete input.
    pub fn validated_draft(&self) -> Result<AppConfig, String> {
        let draft = AppConfig {
            name: self.name.get_untracked().trim().to_string(),
            power_feed_id: self.power_feed_id.get_untracked().trim().to_string(),
            kwh_feed_id: self.kwh_feed_id.get_untracked().trim().to_string(),
        };

        if draft.is_complete() {
            Ok(draft)
        } else {
            Err("All fields are required".to_string())
        }
    }

    /// Validate, persist and apply the drafts. Returns the configured name,
    /// the completion payload of the flow.
    pub fn save(&self) -> Result<String, String> {
        let draft = self.validated_draft()?;
        draft.store()?;

        let name = draft.name.clone();
        self.target.set(draft);
        Ok(name)
    }
}

/// Completion event of one configuration flow.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigOutcome {
    /// Saved with the configured name as payload.
    Saved(String),
    Cancelled,
}

/// Explicit continuation for the modal configuration flow.
///
/// Presenting arms a fresh one-shot completion slot; the screen observes the
/// slot and dismisses when it fills. Re-presenting while a flow is pending
/// replaces it, and the superseded flow's completion is never observed.
#[derive(Clone, Copy)]
pub struct ConfigFlow {
    pub showing: RwSignal<bool>,
    pub finished: RwSignal<Option<ConfigOutcome>>,
}

impl ConfigFlow {
    pub fn new() -> Self {
        Self {
            showing: create_rw_signal(false),
            finished: create_rw_signal(None),
        }
    }

    /// Present the flow, superseding any pending one.
    pub fn present(&self) {
        self.finished.set(None);
        self.showing.set(true);
    }

    /// Fill the completion slot. Called by the modal.
    pub fn complete(&self, outcome: ConfigOutcome) {
        self.finished.set(Some(outcome));
    }

    /// Consume the completion and take the modal down.
    pub fn dismiss(&self) {
        self.showing.set(false);
        self.finished.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_config() -> AppConfig {
        AppConfig {
            name: "Home".to_string(),
            power_feed_id: "1".to_string(),
            kwh_feed_id: "2".to_string(),
        }
    }

    #[test]
    fn readiness_follows_config_completeness() {
        let runtime = create_runtime();

        let vm = MyElectricViewModel::new(AppConfig::default());
        assert!(!vm.is_ready.get());

        vm.config.set(complete_config());
        assert!(vm.is_ready.get());

        vm.config.set(AppConfig::default());
        assert!(!vm.is_ready.get());

        runtime.dispose();
    }

    #[test]
    fn title_falls_back_to_none_when_unnamed() {
        let runtime = create_runtime();

        let vm = MyElectricViewModel::new(AppConfig::default());
        assert_eq!(vm.title.get(), None);

        vm.config.set(complete_config());
        assert_eq!(vm.title.get(), Some("Home".to_string()));

        runtime.dispose();
    }

    #[test]
    fn config_drafts_seed_and_validate() {
        let runtime = create_runtime();

        let vm = MyElectricViewModel::new(complete_config());
        let config_vm = vm.config_view_model();
        assert_eq!(config_vm.name.get_untracked(), "Home");

        config_vm.power_feed_id.set("  ".to_string());
        assert!(config_vm.validated_draft().is_err());

        config_vm.power_feed_id.set(" 7 ".to_string());
        let draft = config_vm.validated_draft().unwrap();
        assert_eq!(draft.power_feed_id, "7");

        runtime.dispose();
    }

    #[test]
    fn config_flow_completion_is_one_shot_per_presentation() {
        let runtime = create_runtime();

        let flow = ConfigFlow::new();
        assert!(!flow.showing.get());

        flow.present();
        assert!(flow.showing.get());
        assert_eq!(flow.finished.get(), None);

        flow.complete(ConfigOutcome::Saved("Home".to_string()));
        assert_eq!(flow.finished.get(), Some(ConfigOutcome::Saved("Home".to_string())));

        flow.dismiss();
        assert!(!flow.showing.get());
        assert_eq!(flow.finished.get(), None);

        runtime.dispose();
    }

    #[test]
    fn re_presenting_replaces_a_pending_flow() {
        let runtime = create_runtime();

        let flow = ConfigFlow::new();
        flow.present();
        flow.complete(ConfigOutcome::Cancelled);

        // A new tap supersedes the pending completion instead of queueing.
        flow.present();
        assert_eq!(flow.finished.get(), None);
        assert!(flow.showing.get());

        runtime.dispose();
    }
}
