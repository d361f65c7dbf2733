use entity::{
    store::Store,
    user::{Role, User},
};

use crate::{
    model::user::{LoginDto, RegisterDto},
    server::{
        data::user::{NewUser, UserRepository},
        error::{auth::AuthError, validation::ValidationError, Error},
    },
};

pub struct AuthService<'a> {
    store: &'a Store,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Registers a new account.
    ///
    /// Enforces username and email uniqueness, resolves the requested role
    /// against the self-assignable set, and hashes the password before it
    /// reaches the store.
    ///
    /// # Returns
    /// - `Ok(User)`: The stored account with derived fields populated
    /// - `Err(Error::AuthError)`: Username or email already registered
    /// - `Err(Error::ValidationError)`: The admin role was requested
    /// - `Err(Error)`: Password hashing failed
    pub fn register(&self, registration: RegisterDto) -> Result<User, Error> {
        let users = UserRepository::new(self.store);

        if users.get_by_username(&registration.username).is_some() {
            return Err(AuthError::UsernameTaken.into());
        }
        if users.get_by_email(&registration.email).is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let role = match registration.role {
            Some(Role::Admin) => {
                return Err(ValidationError::InvalidPayload(
                    "role must be professional or company".to_string(),
                )
                .into())
            }
            Some(role) => role,
            None => Role::Professional,
        };

        let password = bcrypt::hash(&registration.password, bcrypt::DEFAULT_COST)?;

        Ok(users.create(NewUser {
            username: registration.username,
            password,
            email: registration.email,
            full_name: registration.full_name,
            role,
            title: registration.title,
            company: registration.company,
            industry: registration.industry,
            expertise: registration.expertise,
            certifications: registration.certifications,
            bio: registration.bio,
            location: registration.location,
            profile_image: registration.profile_image,
        }))
    }

    /// Verifies login credentials.
    ///
    /// An unknown username and a wrong password are indistinguishable to the
    /// caller.
    pub fn login(&self, credentials: &LoginDto) -> Result<User, Error> {
        let users = UserRepository::new(self.store);

        let Some(user) = users.get_by_username(&credentials.username) else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(&credentials.password, &user.password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
