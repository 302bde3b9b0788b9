//! Dashboard aggregates.

use super::{ApiClient, ApiError};
use crate::model::stats::DashboardStats;

pub async fn dashboard(api: &ApiClient) -> Result<DashboardStats, ApiError> {
    api.get("/analytics/dashboard", &[]).await
}
