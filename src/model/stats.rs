use serde::Deserialize;

/// Aggregate counts for the dashboard, computed server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_dramas: u64,
    pub total_episodes: u64,
    pub total_views: u64,
}
