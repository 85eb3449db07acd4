//! Collaborator contracts for backend fetches and navigation.
//!
//! The landing core never talks HTTP itself; hosts implement these traits
//! on top of whatever transport they use. At most one outstanding call per
//! mount, and no retry policy is imposed at this layer.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::onboarding::OnboardingDescriptor;

/// Retrieves the onboarding descriptor for the current user.
#[async_trait]
pub trait OnboardingResolver: Send + Sync {
    async fn fetch_onboarding_descriptor(&self) -> Result<OnboardingDescriptor, FetchError>;
}

/// Retrieves the group identifiers the current user belongs to.
///
/// Order is meaningful (it drives panel order) and identifiers pass through
/// verbatim; this layer neither sorts nor deduplicates.
#[async_trait]
pub trait UserGroupsProvider: Send + Sync {
    async fn fetch_user_groups(&self) -> Result<Vec<String>, FetchError>;
}

/// Issues client-side navigations.
///
/// Fire-and-forget: failure is the navigation layer's concern, never ours.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, path: &str);
}
