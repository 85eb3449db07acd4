//! Landing-view dispatch state machine.
//!
//! The decision is pure given `(kind, value, instance_ref)`; the navigation
//! side effect is executed by a thin effect step that fires at most once per
//! mount, so an identically re-delivered descriptor cannot loop.

use std::sync::Mutex;

use tracing::{debug, warn};

use crate::config::DashboardConfig;
use crate::onboarding::{OnboardingDescriptor, OnboardingKind};
use crate::providers::Navigator;

/// Terminal outcome of evaluating one resolved descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandingOutcome {
    /// Render the default "my tasks" list.
    ShowDefaultList,
    /// Navigate to a specific pending task.
    Redirect { path: String },
    /// Render the generic in-progress instances view.
    ShowFallback,
}

/// Dispatch state for one landing-view mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchState {
    /// No descriptor resolved yet.
    Unresolved,
    /// Descriptor evaluated; outcome decided, no pending side effect.
    Resolved(LandingOutcome),
    /// A redirect was decided and its navigation already issued.
    NavigationIssued { path: String },
}

/// Decide the landing outcome for a resolved descriptor. Pure.
pub fn decide(descriptor: &OnboardingDescriptor, config: &DashboardConfig) -> LandingOutcome {
    match descriptor.kind {
        OnboardingKind::DefaultView
            if descriptor.value.as_deref() == Some(config.default_list_value.as_str()) =>
        {
            LandingOutcome::ShowDefaultList
        }
        OnboardingKind::UserInputRequired => match descriptor.instance_ref() {
            Some(instance_ref) => LandingOutcome::Redirect {
                path: format!(
                    "{}/{}/{}",
                    config.task_route_prefix,
                    instance_ref.process_instance_id,
                    instance_ref.task_id
                ),
            },
            // A half-present reference must never become a partial path.
            None => LandingOutcome::ShowFallback,
        },
        _ => LandingOutcome::ShowFallback,
    }
}

/// Per-mount dispatcher: holds the state machine and executes the
/// navigation effect exactly once.
pub struct ViewDispatcher {
    config: DashboardConfig,
    state: Mutex<DispatchState>,
}

impl ViewDispatcher {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            state: Mutex::new(DispatchState::Unresolved),
        }
    }

    /// Snapshot of the current dispatch state.
    pub fn state(&self) -> DispatchState {
        self.state.lock().expect("dispatch state mutex poisoned").clone()
    }

    /// Feed one resolved descriptor through the state machine and perform
    /// any pending navigation.
    ///
    /// Returns the outcome the view should now render. Once a navigation has
    /// been issued for this mount, re-delivered descriptors are ignored.
    pub fn resolve(
        &self,
        descriptor: &OnboardingDescriptor,
        navigator: &dyn Navigator,
    ) -> LandingOutcome {
        if let Some(error) = descriptor.validation_error() {
            warn!(%error, "onboarding descriptor is not actionable, falling back");
        }

        let outcome = decide(descriptor, &self.config);

        let mut state = self.state.lock().expect("dispatch state mutex poisoned");
        if let DispatchState::NavigationIssued { path } = &*state {
            return LandingOutcome::Redirect { path: path.clone() };
        }

        match &outcome {
            LandingOutcome::Redirect { path } => {
                debug!(%path, "redirecting to pending task");
                navigator.navigate_to(path);
                *state = DispatchState::NavigationIssued { path: path.clone() };
            }
            _ => {
                *state = DispatchState::Resolved(outcome.clone());
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every issued navigation.
    struct RecordingNavigator {
        paths: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        fn new() -> Self {
            Self {
                paths: Mutex::new(Vec::new()),
            }
        }

        fn paths(&self) -> Vec<String> {
            self.paths.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate_to(&self, path: &str) {
            self.paths.lock().unwrap().push(path.to_string());
        }
    }

    fn config() -> DashboardConfig {
        DashboardConfig::default()
    }

    #[test]
    fn my_tasks_value_shows_default_list() {
        let descriptor = OnboardingDescriptor::default_view("my_tasks");
        assert_eq!(decide(&descriptor, &config()), LandingOutcome::ShowDefaultList);
    }

    #[test]
    fn unrecognized_default_view_value_falls_back() {
        let descriptor = OnboardingDescriptor::default_view("something_else");
        assert_eq!(decide(&descriptor, &config()), LandingOutcome::ShowFallback);
    }

    #[test]
    fn complete_instance_ref_redirects() {
        let descriptor = OnboardingDescriptor::user_input_required(42, "task-7");
        assert_eq!(
            decide(&descriptor, &config()),
            LandingOutcome::Redirect {
                path: "/tasks/42/task-7".to_string()
            }
        );
    }

    #[test]
    fn partial_instance_ref_falls_back() {
        let mut descriptor = OnboardingDescriptor::user_input_required(42, "task-7");
        descriptor.task_id = None;
        assert_eq!(decide(&descriptor, &config()), LandingOutcome::ShowFallback);
    }

    #[test]
    fn unknown_kind_falls_back() {
        let descriptor: OnboardingDescriptor =
            serde_json::from_str(r#"{"type": "novelty"}"#).unwrap();
        assert_eq!(decide(&descriptor, &config()), LandingOutcome::ShowFallback);
    }

    #[test]
    fn navigation_is_issued_exactly_once() {
        let dispatcher = ViewDispatcher::new(config());
        let navigator = RecordingNavigator::new();
        let descriptor = OnboardingDescriptor::user_input_required(42, "task-7");

        let first = dispatcher.resolve(&descriptor, &navigator);
        let second = dispatcher.resolve(&descriptor, &navigator);

        assert_eq!(first, second);
        assert_eq!(navigator.paths(), vec!["/tasks/42/task-7".to_string()]);
        assert_eq!(
            dispatcher.state(),
            DispatchState::NavigationIssued {
                path: "/tasks/42/task-7".to_string()
            }
        );
    }

    #[test]
    fn default_list_outcome_never_navigates() {
        let dispatcher = ViewDispatcher::new(config());
        let navigator = RecordingNavigator::new();
        let descriptor = OnboardingDescriptor::default_view("my_tasks");

        let outcome = dispatcher.resolve(&descriptor, &navigator);

        assert_eq!(outcome, LandingOutcome::ShowDefaultList);
        assert!(navigator.paths().is_empty());
        assert_eq!(
            dispatcher.state(),
            DispatchState::Resolved(LandingOutcome::ShowDefaultList)
        );
    }

    #[test]
    fn redirect_state_sticks_across_different_descriptors() {
        let dispatcher = ViewDispatcher::new(config());
        let navigator = RecordingNavigator::new();

        dispatcher.resolve(
            &OnboardingDescriptor::user_input_required(42, "task-7"),
            &navigator,
        );
        // A re-fetch that resolves differently must not override an issued
        // navigation for this mount.
        let outcome = dispatcher.resolve(&OnboardingDescriptor::default_view("my_tasks"), &navigator);

        assert_eq!(
            outcome,
            LandingOutcome::Redirect {
                path: "/tasks/42/task-7".to_string()
            }
        );
        assert_eq!(navigator.paths().len(), 1);
    }
}
