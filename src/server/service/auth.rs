use crate::server::error::{auth::AuthError, Error};

/// The fixed demo credential pair.
///
/// This is deliberately a client-visible demo gate, not a security boundary:
/// there is no password hashing and no identity behind the flag. The login
/// page displays these values as test credentials.
pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "password";

/// Checks a submitted credential pair against the fixed demo pair.
///
/// Succeeds iff both values match exactly; any other pair, including empty
/// strings, fails with [`AuthError::InvalidCredentials`].
pub fn login_service(username: &str, password: &str) -> Result<(), Error> {
    if username == DEMO_USERNAME && password == DEMO_PASSWORD {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials.into())
    }
}
