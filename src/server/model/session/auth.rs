use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

/// Session key for the authentication flag.
///
/// Namespaced under `starlog:auth:` to avoid collisions with other session
/// data. This is the single durable record the auth gate keeps.
pub const SESSION_AUTH_KEY: &str = "starlog:auth:authenticated";

/// Session wrapper for the boolean authentication flag.
///
/// The flag is true only between a successful login and the next logout.
/// It is a demo gate, not a security boundary: there is no user identity
/// behind it.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthenticated(pub bool);

impl SessionAuthenticated {
    /// Insert the authentication flag into the session.
    pub async fn insert(session: &Session, authenticated: bool) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_KEY, SessionAuthenticated(authenticated))
            .await?;

        Ok(())
    }

    /// Get the authentication flag from the session.
    ///
    /// A session without the flag reads as unauthenticated.
    pub async fn get(session: &Session) -> Result<bool, Error> {
        Ok(session
            .get::<SessionAuthenticated>(SESSION_AUTH_KEY)
            .await?
            .map(|SessionAuthenticated(authenticated)| authenticated)
            .unwrap_or(false))
    }

    /// Require an authenticated session, failing with
    /// [`AuthError::NotAuthenticated`] otherwise.
    pub async fn require(session: &Session) -> Result<(), Error> {
        if Self::get(session).await? {
            Ok(())
        } else {
            Err(AuthError::NotAuthenticated.into())
        }
    }
}
