use chrono::{DateTime, Utc};
use entity::user::{Role, User};
use serde::{Deserialize, Serialize};

/// A registered account as exposed to API clients.
///
/// The stored password hash is never serialized; everything else mirrors the
/// account record, including the derived `profile_completed` percentage.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub username: String,
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

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            title: user.title,
            company: user.company,
            industry: user.industry,
            expertise: user.expertise,
            certifications: user.certifications,
            bio: user.bio,
            location: user.location,
            profile_image: user.profile_image,
            profile_completed: user.profile_completed,
            created_at: user.created_at,
        }
    }
}

/// Payload for creating a new account.
///
/// `role` accepts only the self-assignable roles; requesting `admin` is a
/// validation error. Derived fields are not part of the payload and anything
/// unknown in the request body is ignored.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub role: Option<Role>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub expertise: Option<Vec<String>>,
    pub certifications: Option<Vec<String>>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub profile_image: Option<String>,
}

/// Credentials for logging into an existing account.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Partial update of the mutable profile fields.
///
/// Every field is optional; absent fields are left unchanged. Identity fields
/// (username, email, password, role) and derived fields are not patchable.
#[derive(Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateDto {
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub expertise: Option<Vec<String>>,
    pub certifications: Option<Vec<String>>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub profile_image: Option<String>,
}
