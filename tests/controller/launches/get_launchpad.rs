use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use starlog::server::{
    controller::launches::get_launchpad, error::Error, model::session::auth::SessionAuthenticated,
};
use starlog_test_utils::fixtures::spacex::{factory, SpacexFixtures};

use crate::util::setup::test_setup;

#[tokio::test]
/// Expect 200 with the launchpad for an authenticated session
async fn returns_launchpad_when_authenticated() -> Result<(), Error> {
    let mut test = test_setup().await;

    let mock = SpacexFixtures::new(&mut test.server).create_launchpad_endpoint(
        "pad-1",
        factory::mock_launchpad("pad-1", "LC-39A"),
        1,
    );

    SessionAuthenticated::insert(&test.session, true).await?;

    let result = get_launchpad(State(test.state), test.session, Path("pad-1".to_string())).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect 401 for an unauthenticated session
async fn returns_unauthorized_without_session_flag() -> Result<(), Error> {
    let test = test_setup().await;

    let result = get_launchpad(State(test.state), test.session, Path("pad-1".to_string())).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
