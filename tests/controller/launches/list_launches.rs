use std::time::Duration;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use starlog::server::{
    cache::CacheConfig, controller::launches::list_launches, error::Error,
    model::session::auth::SessionAuthenticated,
};
use starlog_test_utils::fixtures::spacex::{factory, SpacexFixtures};

use crate::util::setup::{test_setup, test_setup_with_cache};

#[tokio::test]
/// Expect 401 for an unauthenticated session, without hitting upstream
async fn returns_unauthorized_without_session_flag() -> Result<(), Error> {
    let mut test = test_setup().await;

    let mock = SpacexFixtures::new(&mut test.server).create_launches_endpoint(
        vec![factory::mock_launch("launch-1", "FalconSat")],
        0,
    );

    let result = list_launches(State(test.state), test.session).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect 200 with the upstream launch collection for an authenticated session
async fn returns_launches_when_authenticated() -> Result<(), Error> {
    let mut test = test_setup().await;

    let mock = SpacexFixtures::new(&mut test.server).create_launches_endpoint(
        vec![
            factory::mock_launch("launch-1", "FalconSat"),
            factory::mock_failed_launch("launch-2", "DemoSat"),
        ],
        1,
    );

    SessionAuthenticated::insert(&test.session, true).await?;

    let result = list_launches(State(test.state), test.session).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect 502 when the upstream catalog request fails
async fn returns_bad_gateway_on_upstream_failure() -> Result<(), Error> {
    let mut test = test_setup().await;

    let mock = SpacexFixtures::new(&mut test.server).create_error_endpoint("/launches", 500, 1);

    SessionAuthenticated::insert(&test.session, true).await?;

    let result = list_launches(State(test.state), test.session).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect 502 when the upstream body does not match the launch schema
async fn returns_bad_gateway_on_malformed_body() -> Result<(), Error> {
    let mut test = test_setup().await;

    let mock = SpacexFixtures::new(&mut test.server).create_malformed_endpoint("/launches", 1);

    SessionAuthenticated::insert(&test.session, true).await?;

    let result = list_launches(State(test.state), test.session).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect a fresh cache entry to serve the second request without refetching
async fn serves_second_request_from_cache() -> Result<(), Error> {
    let mut test = test_setup_with_cache(CacheConfig {
        stale_time: Duration::from_secs(60),
        ..CacheConfig::default()
    })
    .await;

    let mock = SpacexFixtures::new(&mut test.server).create_launches_endpoint(
        vec![factory::mock_launch("launch-1", "FalconSat")],
        1,
    );

    SessionAuthenticated::insert(&test.session, true).await?;

    let first = list_launches(State(test.state.clone()), test.session.clone()).await;
    let second = list_launches(State(test.state), test.session).await;

    assert!(first.is_ok());
    assert!(second.is_ok());
    mock.assert();

    Ok(())
}
