use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use starlog::server::{
    controller::launches::get_launch, error::Error, model::session::auth::SessionAuthenticated,
};
use starlog_test_utils::fixtures::spacex::{factory, SpacexFixtures};

use crate::util::setup::test_setup;

#[tokio::test]
/// Expect 200 with the launch for an authenticated session
async fn returns_launch_when_authenticated() -> Result<(), Error> {
    let mut test = test_setup().await;

    let mock = SpacexFixtures::new(&mut test.server).create_launch_endpoint(
        "launch-1",
        factory::mock_launch("launch-1", "FalconSat"),
        1,
    );

    SessionAuthenticated::insert(&test.session, true).await?;

    let result = get_launch(
        State(test.state),
        test.session,
        Path("launch-1".to_string()),
    )
    .await;

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

    let result = get_launch(
        State(test.state),
        test.session,
        Path("launch-1".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 502 when the launch id is unknown upstream
async fn returns_bad_gateway_for_unknown_id() -> Result<(), Error> {
    let mut test = test_setup().await;

    let mock =
        SpacexFixtures::new(&mut test.server).create_error_endpoint("/launches/missing", 404, 1);

    SessionAuthenticated::insert(&test.session, true).await?;

    let result = get_launch(
        State(test.state),
        test.session,
        Path("missing".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    mock.assert();

    Ok(())
}
