//! Factory functions for mock records and request payloads.
//!
//! Record factories build entity rows with standard test values for direct
//! insertion into the store. Payload factories build JSON request bodies the
//! way an API client would send them, for driving handlers in integration
//! tests.

use chrono::{DateTime, Duration, Utc};
use entity::{
    discussion::Discussion,
    event::Event,
    job::Job,
    news::News,
    resource::Resource,
    user::{Role, User},
};
use serde_json::{json, Value};

use crate::{
    constant::{TEST_EMAIL_DOMAIN, TEST_PASSWORD},
    error::TestError,
};

/// Bcrypt hash of [`TEST_PASSWORD`].
///
/// Minimum cost; fixtures only need a verifiable hash.
pub fn test_password_hash() -> Result<String, TestError> {
    // bcrypt::MIN_COST (4) is private; inline its value.
    Ok(bcrypt::hash(TEST_PASSWORD, 4)?)
}

/// Create a mock account record with standard test values.
///
/// Only username, email, and full name are filled in, so the stored
/// completion percentage reflects three of the eleven profile conditions.
pub fn user_record(id: i32, username: &str, role: Role, password_hash: &str) -> User {
    User {
        id,
        username: username.to_string(),
        password: password_hash.to_string(),
        email: format!("{}@{}", username, TEST_EMAIL_DOMAIN),
        full_name: "Test User".to_string(),
        role,
        title: None,
        company: None,
        industry: None,
        expertise: None,
        certifications: None,
        bio: None,
        location: None,
        profile_image: None,
        profile_completed: 27,
        created_at: Utc::now(),
    }
}

/// Create a mock event record with the given start date.
pub fn event_record(id: i32, title: &str, start_date: DateTime<Utc>) -> Event {
    Event {
        id,
        title: title.to_string(),
        description: "An event for investor relations professionals".to_string(),
        event_type: "webinar".to_string(),
        start_date,
        end_date: start_date + Duration::hours(1),
        location: None,
        is_virtual: true,
        attendee_count: 0,
        created_by: 1,
        created_at: Utc::now(),
    }
}

/// Create a mock discussion record with the given creation time.
pub fn discussion_record(id: i32, title: &str, created_at: DateTime<Utc>) -> Discussion {
    Discussion {
        id,
        title: title.to_string(),
        content: "What is everyone else doing here?".to_string(),
        category: "General".to_string(),
        tags: None,
        author_id: 1,
        reply_count: 0,
        is_hot: false,
        created_at,
    }
}

/// Create a mock job record with the given creation time.
pub fn job_record(id: i32, title: &str, created_at: DateTime<Utc>) -> Job {
    Job {
        id,
        title: title.to_string(),
        company: "Northwind Capital".to_string(),
        company_logo: None,
        location: "Boston, MA".to_string(),
        description: "Own the quarterly reporting cycle".to_string(),
        salary: None,
        job_type: "full-time".to_string(),
        industry: "Asset Management".to_string(),
        tags: None,
        posted_by: 1,
        created_at,
    }
}

/// Create a mock resource record with the given download count.
pub fn resource_record(id: i32, title: &str, download_count: i32) -> Resource {
    Resource {
        id,
        title: title.to_string(),
        description: "A reusable template".to_string(),
        resource_type: "PDF".to_string(),
        file_size: Some("1.1 MB".to_string()),
        thumbnail_url: None,
        download_count,
        view_count: 0,
        uploaded_by: 1,
        created_at: Utc::now(),
    }
}

/// Create a mock news record with the given publication time.
pub fn news_record(id: i32, title: &str, published_at: DateTime<Utc>) -> News {
    News {
        id,
        title: title.to_string(),
        summary: "A development relevant to the IR community".to_string(),
        source: "IR Weekly".to_string(),
        url: "https://example.com/article".to_string(),
        published_at,
        created_at: Utc::now(),
    }
}

/// Registration request body for the given username.
pub fn register_payload(username: &str) -> Value {
    json!({
        "username": username,
        "password": TEST_PASSWORD,
        "email": format!("{}@{}", username, TEST_EMAIL_DOMAIN),
        "fullName": "Test User",
    })
}

/// Login request body for the given username and password.
pub fn login_payload(username: &str, password: &str) -> Value {
    json!({
        "username": username,
        "password": password,
    })
}

/// Event creation request body.
pub fn event_payload(title: &str) -> Value {
    let start = Utc::now() + Duration::days(14);

    json!({
        "title": title,
        "description": "An event for investor relations professionals",
        "eventType": "webinar",
        "startDate": start,
        "endDate": start + Duration::hours(1),
    })
}

/// Discussion creation request body.
pub fn discussion_payload(title: &str) -> Value {
    json!({
        "title": title,
        "content": "What is everyone else doing here?",
        "category": "General",
    })
}

/// Job creation request body.
pub fn job_payload(title: &str) -> Value {
    json!({
        "title": title,
        "company": "Northwind Capital",
        "location": "Boston, MA",
        "description": "Own the quarterly reporting cycle",
        "jobType": "full-time",
        "industry": "Asset Management",
    })
}

/// Resource creation request body.
pub fn resource_payload(title: &str) -> Value {
    json!({
        "title": title,
        "description": "A reusable template",
        "resourceType": "PDF",
    })
}

/// News publication request body.
pub fn news_payload(title: &str) -> Value {
    json!({
        "title": title,
        "summary": "A development relevant to the IR community",
        "source": "IR Weekly",
        "url": "https://example.com/article",
        "publishedAt": Utc::now(),
    })
}
