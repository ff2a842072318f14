//! Role-based view routing.

use crate::models::Role;

const DASHBOARD_PREFIX: &str = "/dashboard/";

/// The view selected for a role token or path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Dashboard(Role),
    /// The token did not name a role. Never falls back to a dashboard.
    InvalidRole(String),
    /// The path is not a dashboard path at all.
    NotFound(String),
}

/// Selects the dashboard for a role token.
pub fn route(token: &str) -> View {
    match Role::from_token(token) {
        Some(role) => View::Dashboard(role),
        None => View::InvalidRole(token.to_string()),
    }
}

/// Routes a `/dashboard/<role>` path.
pub fn route_path(path: &str) -> View {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    match path
        .strip_prefix(DASHBOARD_PREFIX)
        .map(|rest| rest.strip_suffix('/').unwrap_or(rest))
    {
        Some(token) if !token.contains('/') => route(token),
        _ => View::NotFound(trimmed.to_string()),
    }
}
