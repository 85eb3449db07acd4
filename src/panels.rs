//! Completed-instance panel composition.
//!
//! Pure mapping from the user's group memberships to an ordered list of
//! panel specifications. Rendering merely iterates the produced sequence;
//! this module never touches the render layer.

use serde::Serialize;

use crate::config::DashboardConfig;

/// System report: completed instances the user started.
pub const REPORT_STARTED_BY_ME: &str = "system_report_completed_instances_initiated_by_me";

/// System report: completed instances where the user completed tasks.
pub const REPORT_TASKS_COMPLETED_BY_ME: &str =
    "system_report_completed_instances_with_tasks_completed_by_me";

/// System report: completed instances with tasks completed by one of the
/// user's groups, filtered per group via `user_group_identifier`.
pub const REPORT_TASKS_COMPLETED_BY_MY_GROUPS: &str =
    "system_report_completed_instances_with_tasks_completed_by_my_groups";

/// Declarative description of one paginated instance-list panel.
///
/// Constructed here, consumed verbatim by the external list widget, never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelSpec {
    /// Heading shown above the panel.
    pub title: String,
    pub report_identifier: String,
    /// Prefix namespacing this panel's pagination query params.
    pub pagination_key_prefix: String,
    pub per_page_options: Vec<u32>,
    pub empty_state_text: String,
    /// Extra query parameters, e.g. `user_group_identifier=<group>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_filter_params: Option<String>,
    pub show_actions_column: bool,
    pub filters_enabled: bool,
    pub auto_reload: bool,
}

fn started_by_me_panel(config: &DashboardConfig) -> PanelSpec {
    PanelSpec {
        title: "Started by me".to_string(),
        report_identifier: REPORT_STARTED_BY_ME.to_string(),
        pagination_key_prefix: config.started_by_me_pagination_prefix.clone(),
        per_page_options: config.per_page_options.clone(),
        empty_state_text: "You have no completed instances at this time.".to_string(),
        extra_filter_params: None,
        show_actions_column: true,
        filters_enabled: false,
        auto_reload: true,
    }
}

fn tasks_completed_by_me_panel(config: &DashboardConfig) -> PanelSpec {
    PanelSpec {
        title: "With tasks completed by me".to_string(),
        report_identifier: REPORT_TASKS_COMPLETED_BY_ME.to_string(),
        pagination_key_prefix: config.completed_by_me_pagination_prefix.clone(),
        per_page_options: config.per_page_options.clone(),
        empty_state_text: "You have no completed instances at this time.".to_string(),
        extra_filter_params: None,
        show_actions_column: true,
        filters_enabled: false,
        auto_reload: false,
    }
}

fn group_panel(group: &str, config: &DashboardConfig) -> PanelSpec {
    // Group identifiers pass through verbatim, case and all.
    PanelSpec {
        title: format!("With tasks completed by {group}"),
        report_identifier: REPORT_TASKS_COMPLETED_BY_MY_GROUPS.to_string(),
        pagination_key_prefix: config.group_pagination_prefix.clone(),
        per_page_options: config.per_page_options.clone(),
        empty_state_text: "This group has no completed instances at this time.".to_string(),
        extra_filter_params: Some(format!("user_group_identifier={group}")),
        show_actions_column: true,
        filters_enabled: false,
        auto_reload: false,
    }
}

/// Compose the completed-instances panel sequence.
///
/// The two fixed panels come first in fixed order, then one panel per group
/// in membership order. `None` means group membership has not resolved yet;
/// that is a valid transient state and yields the fixed panels only, as does
/// an empty membership list.
pub fn compose_completed_panels(
    groups: Option<&[String]>,
    config: &DashboardConfig,
) -> Vec<PanelSpec> {
    let mut panels = vec![started_by_me_panel(config), tasks_completed_by_me_panel(config)];
    if let Some(groups) = groups {
        panels.extend(groups.iter().map(|group| group_panel(group, config)));
    }
    panels
}
