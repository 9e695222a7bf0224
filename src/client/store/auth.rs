/// Client-side mirror of the session's authentication flag.
///
/// `fetched` is false until the startup call to `/api/auth/session` has
/// settled; the protected layout waits for it before deciding whether to
/// redirect, so a reload of a logged-in session does not bounce through the
/// login page.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub authenticated: bool,
    pub fetched: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            authenticated: false,
            fetched: false,
        }
    }
}

impl AuthState {
    pub fn resolved(authenticated: bool) -> Self {
        Self {
            authenticated,
            fetched: true,
        }
    }
}
