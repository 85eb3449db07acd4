//! The landing and completed views: mount-triggered fetches, pure renders.
//!
//! Each view owns only transient state for one mount. Fetches fire exactly
//! once per mount and are guarded by a generation token: a response that
//! resolves after `unmount` is discarded and can neither update state nor
//! trigger a navigation.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::config::DashboardConfig;
use crate::dispatch::{DispatchState, LandingOutcome, ViewDispatcher};
use crate::panels::{PanelSpec, compose_completed_panels};
use crate::providers::{Navigator, OnboardingResolver, UserGroupsProvider};

/// What the landing view should currently render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandingRender {
    /// Descriptor not resolved yet; nothing definitive to show.
    Pending,
    /// The default "my tasks" list.
    DefaultTaskList,
    /// A navigation to `path` has been issued for this mount.
    Redirecting { path: String },
    /// The generic in-progress instances view.
    InProgressFallback,
}

/// Landing view: fetches the onboarding descriptor once per mount and
/// dispatches to exactly one of three outcomes.
pub struct LandingView {
    resolver: Arc<dyn OnboardingResolver>,
    navigator: Arc<dyn Navigator>,
    dispatcher: ViewDispatcher,
    generation: AtomicU64,
    fetch_failed: AtomicBool,
}

impl LandingView {
    pub fn new(
        resolver: Arc<dyn OnboardingResolver>,
        navigator: Arc<dyn Navigator>,
        config: DashboardConfig,
    ) -> Self {
        Self {
            resolver,
            navigator,
            dispatcher: ViewDispatcher::new(config),
            generation: AtomicU64::new(0),
            fetch_failed: AtomicBool::new(false),
        }
    }

    /// Fire the descriptor fetch for a new mount and apply the result.
    ///
    /// The await point is the only place a stale response can slip in, so
    /// the generation captured here is re-checked before any state change.
    pub async fn mount(&self) {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        match self.resolver.fetch_onboarding_descriptor().await {
            Ok(descriptor) => {
                if self.generation.load(Ordering::SeqCst) != token {
                    debug!("discarding onboarding descriptor resolved after unmount");
                    return;
                }
                self.dispatcher.resolve(&descriptor, self.navigator.as_ref());
            }
            Err(error) => {
                if self.generation.load(Ordering::SeqCst) != token {
                    return;
                }
                warn!(%error, "onboarding descriptor fetch failed, showing fallback");
                self.fetch_failed.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Invalidate any in-flight fetch for the previous mount.
    pub fn unmount(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Pure derivation of the current render from dispatch state. Safe to
    /// call on every host re-render; never fetches, never navigates.
    pub fn render(&self) -> LandingRender {
        match self.dispatcher.state() {
            DispatchState::Unresolved => {
                if self.fetch_failed.load(Ordering::SeqCst) {
                    LandingRender::InProgressFallback
                } else {
                    LandingRender::Pending
                }
            }
            DispatchState::Resolved(LandingOutcome::ShowDefaultList) => {
                LandingRender::DefaultTaskList
            }
            DispatchState::Resolved(LandingOutcome::Redirect { path })
            | DispatchState::NavigationIssued { path } => LandingRender::Redirecting { path },
            DispatchState::Resolved(LandingOutcome::ShowFallback) => {
                LandingRender::InProgressFallback
            }
        }
    }
}

/// Completed-instances view: fetches the user's groups once per mount and
/// renders the composed panel sequence.
pub struct CompletedView {
    groups_provider: Arc<dyn UserGroupsProvider>,
    config: DashboardConfig,
    generation: AtomicU64,
    groups: Mutex<Option<Vec<String>>>,
}

impl CompletedView {
    pub fn new(groups_provider: Arc<dyn UserGroupsProvider>, config: DashboardConfig) -> Self {
        Self {
            groups_provider,
            config,
            generation: AtomicU64::new(0),
            groups: Mutex::new(None),
        }
    }

    /// Fire the group-membership fetch for a new mount.
    pub async fn mount(&self) {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        match self.groups_provider.fetch_user_groups().await {
            Ok(groups) => {
                if self.generation.load(Ordering::SeqCst) != token {
                    debug!("discarding group membership resolved after unmount");
                    return;
                }
                *self.groups.lock().expect("groups mutex poisoned") = Some(groups);
            }
            Err(error) => {
                // Membership stays unknown; the fixed panels still render.
                warn!(%error, "user group fetch failed");
            }
        }
    }

    /// Invalidate any in-flight fetch for the previous mount.
    pub fn unmount(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// The ordered panel sequence for the current membership state.
    pub fn render(&self) -> Vec<PanelSpec> {
        let groups = self.groups.lock().expect("groups mutex poisoned");
        compose_completed_panels(groups.as_deref(), &self.config)
    }
}
