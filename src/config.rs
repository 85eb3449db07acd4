//! Configuration types.

/// Dashboard landing configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Route prefix for task navigation targets.
    pub task_route_prefix: String,
    /// Onboarding `value` that selects the default task list.
    pub default_list_value: String,
    /// Per-page options offered by completed-instance panels.
    pub per_page_options: Vec<u32>,
    /// Pagination key prefix for the "started by me" panel.
    pub started_by_me_pagination_prefix: String,
    /// Pagination key prefix for the "tasks completed by me" panel.
    pub completed_by_me_pagination_prefix: String,
    /// Pagination key prefix shared by the per-group panels.
    pub group_pagination_prefix: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            task_route_prefix: "/tasks".to_string(),
            default_list_value: "my_tasks".to_string(),
            per_page_options: vec![2, 5, 25],
            started_by_me_pagination_prefix: "my_completed_instances".to_string(),
            completed_by_me_pagination_prefix: "my_completed_tasks".to_string(),
            group_pagination_prefix: "group_completed_instances".to_string(),
        }
    }
}
