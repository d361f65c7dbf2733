use chrono::{DateTime, Utc};
use entity::resource::Resource;
use serde::{Deserialize, Serialize};

/// A shared resource as exposed to API clients.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub resource_type: String,
    pub file_size: Option<String>,
    pub thumbnail_url: Option<String>,
    pub download_count: i32,
    pub view_count: i32,
    pub uploaded_by: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Resource> for ResourceDto {
    fn from(resource: Resource) -> Self {
        Self {
            id: resource.id,
            title: resource.title,
            description: resource.description,
            resource_type: resource.resource_type,
            file_size: resource.file_size,
            thumbnail_url: resource.thumbnail_url,
            download_count: resource.download_count,
            view_count: resource.view_count,
            uploaded_by: resource.uploaded_by,
            created_at: resource.created_at,
        }
    }
}

/// Payload for uploading a resource.
///
/// The uploader is attached from the authenticated session; the download and
/// view counters are derived and ignored if supplied.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateResourceDto {
    pub title: String,
    pub description: String,
    pub resource_type: String,
    pub file_size: Option<String>,
    pub thumbnail_url: Option<String>,
}
