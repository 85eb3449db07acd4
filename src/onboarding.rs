//! Onboarding descriptor model and wire format.
//!
//! The backend sends one descriptor per landing-view mount describing what
//! the user should see next. The `type` tag is an open set: backends may
//! introduce new kinds at any time, and those must decode (as `Unknown`)
//! rather than fail the whole response.

use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;

/// Kind tag of an onboarding descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingKind {
    /// Render one of the default list views, selected by `value`.
    DefaultView,
    /// The user has a specific pending task waiting on their input.
    UserInputRequired,
    /// Any kind this client version does not know about.
    #[serde(other)]
    Unknown,
}

/// A fully-resolved reference to a pending task within a process instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceRef {
    pub process_instance_id: i64,
    pub task_id: String,
}

/// Descriptor fetched once per landing-view mount.
///
/// Held in transient view state only; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingDescriptor {
    #[serde(rename = "type")]
    pub kind: OnboardingKind,
    /// Meaningful only when `kind` is `DefaultView` (e.g. `"my_tasks"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_instance_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

impl OnboardingDescriptor {
    /// Descriptor selecting a default list view.
    pub fn default_view(value: impl Into<String>) -> Self {
        Self {
            kind: OnboardingKind::DefaultView,
            value: Some(value.into()),
            process_instance_id: None,
            task_id: None,
        }
    }

    /// Descriptor pointing at a specific pending task.
    pub fn user_input_required(process_instance_id: i64, task_id: impl Into<String>) -> Self {
        Self {
            kind: OnboardingKind::UserInputRequired,
            value: None,
            process_instance_id: Some(process_instance_id),
            task_id: Some(task_id.into()),
        }
    }

    /// The task reference, if both halves are present.
    ///
    /// A descriptor carrying only one half has no reference at all; it must
    /// never become a partial navigation target.
    pub fn instance_ref(&self) -> Option<InstanceRef> {
        match (self.process_instance_id, self.task_id.as_ref()) {
            (Some(process_instance_id), Some(task_id)) => Some(InstanceRef {
                process_instance_id,
                task_id: task_id.clone(),
            }),
            _ => None,
        }
    }

    /// Diagnostic for a `UserInputRequired` descriptor missing part of its
    /// instance reference. `None` means the descriptor is well-formed.
    pub fn validation_error(&self) -> Option<DescriptorError> {
        if self.kind != OnboardingKind::UserInputRequired {
            return None;
        }
        match (self.process_instance_id.is_some(), self.task_id.is_some()) {
            (false, _) => Some(DescriptorError::IncompleteInstanceRef {
                missing: "process_instance_id",
            }),
            (_, false) => Some(DescriptorError::IncompleteInstanceRef { missing: "task_id" }),
            _ => None,
        }
    }
}
