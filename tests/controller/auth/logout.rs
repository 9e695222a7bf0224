use axum::{http::StatusCode, response::IntoResponse};
use starlog::server::{
    controller::auth::logout, error::Error, model::session::auth::SessionAuthenticated,
};

use crate::util::setup::test_setup;

#[tokio::test]
/// Expect 307 temporary redirect and a cleared flag after logout
async fn returns_redirect_and_clears_session() -> Result<(), Error> {
    let test = test_setup().await;

    SessionAuthenticated::insert(&test.session, true).await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    // Ensure the flag was cleared from the session
    let authenticated = SessionAuthenticated::get(&test.session).await?;
    assert!(!authenticated);

    Ok(())
}

#[tokio::test]
/// Expect 307 temporary redirect even without session data
///
/// This checks for the 500 internal error that occurs when clearing a
/// session without any data in it. The endpoint only clears the session
/// when the flag is actually set and redirects to login regardless.
async fn returns_redirect_with_no_session_data() -> Result<(), Error> {
    let test = test_setup().await;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
