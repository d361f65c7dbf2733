use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of account roles.
///
/// Roles gate capabilities at the API boundary; there is no free-form role
/// string anywhere in the system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Professional,
    Company,
    Admin,
}

impl Role {
    /// Whether accounts with this role may publish industry news items.
    pub fn can_publish_news(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// A registered account.
///
/// `password` holds the bcrypt hash, never the plaintext. `profile_completed`
/// is derived by the storage layer on every create and update and is never
/// accepted from client input.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub title: Option<String>,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub expertise: Option<Vec<String>>,
    pub certifications: Option<Vec<String>>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub profile_image: Option<String>,
    pub profile_completed: i32,
    pub created_at: DateTime<Utc>,
}
