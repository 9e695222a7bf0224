use axum::{http::StatusCode, response::IntoResponse};
use starlog::server::{
    controller::auth::get_session, error::Error, model::session::auth::SessionAuthenticated,
};

use crate::util::setup::test_setup;

#[tokio::test]
/// Expect 200 with an unauthenticated state for a fresh session
async fn reports_unauthenticated_for_fresh_session() -> Result<(), Error> {
    let test = test_setup().await;

    let result = get_session(test.session).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 after login has marked the session authenticated
async fn reports_authenticated_after_login_flag() -> Result<(), Error> {
    let test = test_setup().await;

    SessionAuthenticated::insert(&test.session, true).await?;

    let result = get_session(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let authenticated = SessionAuthenticated::get(&test.session).await?;
    assert!(authenticated);

    Ok(())
}
