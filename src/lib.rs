//! Flowboard — landing-view core for a workflow-instance dashboard.
//!
//! Decides what a freshly authenticated user sees first: the default task
//! list, a redirect straight into a pending task, or the in-progress
//! instances fallback. Also composes the completed-instances panel set from
//! the user's group memberships. Transport, routing, and the list widget
//! itself are external collaborators behind narrow traits.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod onboarding;
pub mod panels;
pub mod providers;
pub mod view;
