use crate::UserProfile;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_NAME: &str = "User";
pub const DEFAULT_EMAIL: &str = "Not specified";
pub const DEFAULT_ROLE: &str = "Standard user";

/// What the dashboard shows for the logged-in member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub contributed_amount: f64,
    pub joined_at: String,
}

impl DashboardSummary {
    /// Fill display defaults for anything the backend left out.
    pub fn from_profile(profile: &UserProfile, now: DateTime<Utc>) -> Self {
        let name = match profile.name.trim() {
            "" => DEFAULT_NAME.to_string(),
            name => name.to_string(),
        };

        Self {
            id: profile.id,
            name,
            email: non_empty(profile.email.as_deref()).unwrap_or(DEFAULT_EMAIL).to_string(),
            role: non_empty(profile.role.as_deref()).unwrap_or(DEFAULT_ROLE).to_string(),
            contributed_amount: profile.contributed_amount.unwrap_or(0.0),
            joined_at: non_empty(profile.joined_at.as_deref())
                .map(String::from)
                .unwrap_or_else(|| now.to_rfc3339()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
