use entity::user::User;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, session::user::SessionUserId},
};

/// Retrieves the authenticated user from the session and then from the store.
///
/// # Returns
/// - `Ok(User)`: The account backing the active session
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: No user ID in session
/// - `Err(Error::AuthError(AuthError::UserNotInStore))`: User ID in session but
///   no longer in the store (the session is cleared)
/// - `Err(Error)`: Session retrieval failed
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<User, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let Some(user) = UserRepository::new(&state.store).get(user_id) else {
        session.clear().await;

        tracing::warn!(
            "Session cleared for user ID {} with an active session but no account in the store",
            user_id
        );

        return Err(AuthError::UserNotInStore(user_id).into());
    };

    Ok(user)
}
