use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

/// Retrieves the authenticated user ID from session
///
/// # Returns
/// - `Ok(i32)`: ID of the user placed into session by the authentication collaborator
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error)`: Session errors
pub async fn get_user_id_from_session(session: &Session) -> Result<i32, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    Ok(user_id)
}

/// Retrieves user information from session and then from database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserDto)`: User found
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let user_id = get_user_id_from_session(session).await?;

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        let error = AuthError::UserNotInDatabase(user_id).into();

        return Err(clear_session_if_stale(session, error).await);
    };

    Ok(user)
}

/// Clears the session when the error reports that the session's user no longer exists
///
/// Returns the error unchanged so it can be propagated to the client.
pub async fn clear_session_if_stale(session: &Session, error: Error) -> Error {
    if let Error::AuthError(AuthError::UserNotInDatabase(user_id)) = &error {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );
    }

    error
}
