use chrono::Utc;
use entity::{
    store::Store,
    user::{Role, User},
};

use crate::model::user::ProfileUpdateDto;

/// A validated account insert, produced by the auth service.
///
/// `password` is already hashed; `role` is already resolved against the
/// closed role set.
pub struct NewUser {
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
}

pub struct UserRepository<'a> {
    store: &'a Store,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Creates a new user, deriving `profile_completed` and stamping
    /// `created_at`.
    pub fn create(&self, new_user: NewUser) -> User {
        let mut tables = self.store.write();
        let now = Utc::now();

        tables.users.insert_with(|id| {
            let mut user = User {
                id,
                username: new_user.username,
                password: new_user.password,
                email: new_user.email,
                full_name: new_user.full_name,
                role: new_user.role,
                title: new_user.title,
                company: new_user.company,
                industry: new_user.industry,
                expertise: new_user.expertise,
                certifications: new_user.certifications,
                bio: new_user.bio,
                location: new_user.location,
                profile_image: new_user.profile_image,
                profile_completed: 0,
                created_at: now,
            };
            user.profile_completed = profile_completion(&user);

            user
        })
    }

    pub fn get(&self, user_id: i32) -> Option<User> {
        self.store.read().users.get(user_id).cloned()
    }

    pub fn get_by_username(&self, username: &str) -> Option<User> {
        self.store
            .read()
            .users
            .iter()
            .find(|user| user.username == username)
            .cloned()
    }

    pub fn get_by_email(&self, email: &str) -> Option<User> {
        self.store
            .read()
            .users
            .iter()
            .find(|user| user.email == email)
            .cloned()
    }

    /// Merges the patch into an existing user and recomputes
    /// `profile_completed`.
    ///
    /// Absent patch fields are left unchanged. Returns `None` when the
    /// identifier does not exist.
    pub fn update(&self, user_id: i32, patch: ProfileUpdateDto) -> Option<User> {
        let mut tables = self.store.write();
        let mut user = tables.users.get(user_id)?.clone();

        if let Some(full_name) = patch.full_name {
            user.full_name = full_name;
        }
        if let Some(title) = patch.title {
            user.title = Some(title);
        }
        if let Some(company) = patch.company {
            user.company = Some(company);
        }
        if let Some(industry) = patch.industry {
            user.industry = Some(industry);
        }
        if let Some(expertise) = patch.expertise {
            user.expertise = Some(expertise);
        }
        if let Some(certifications) = patch.certifications {
            user.certifications = Some(certifications);
        }
        if let Some(bio) = patch.bio {
            user.bio = Some(bio);
        }
        if let Some(location) = patch.location {
            user.location = Some(location);
        }
        if let Some(profile_image) = patch.profile_image {
            user.profile_image = Some(profile_image);
        }

        user.profile_completed = profile_completion(&user);
        tables.users.replace(user_id, user.clone());

        Some(user)
    }
}

/// Share of profile fields filled in, as a 0-100 percentage.
///
/// Eight required scalar fields plus three bonus conditions (expertise,
/// certifications, profile image) weigh equally; the result is rounded to the
/// nearest integer.
pub fn profile_completion(user: &User) -> i32 {
    fn filled(value: &Option<String>) -> bool {
        value.as_deref().is_some_and(|v| !v.is_empty())
    }

    let required = [
        !user.username.is_empty(),
        !user.email.is_empty(),
        !user.full_name.is_empty(),
        filled(&user.title),
        filled(&user.company),
        filled(&user.industry),
        filled(&user.bio),
        filled(&user.location),
    ];
    let bonus = [
        user.expertise.as_ref().is_some_and(|e| !e.is_empty()),
        user.certifications.as_ref().is_some_and(|c| !c.is_empty()),
        filled(&user.profile_image),
    ];

    let count = required
        .iter()
        .chain(bonus.iter())
        .filter(|field| **field)
        .count();
    let total = required.len() + bonus.len();

    ((count as f64 / total as f64) * 100.0).round() as i32
}
