use std::time::Duration;

use starlog::server::{cache::CacheConfig, error::Error, service::catalog::CatalogService};
use starlog_test_utils::fixtures::spacex::{factory, SpacexFixtures};

use crate::util::setup::{test_setup, test_setup_with_cache};

#[tokio::test]
/// Expect distinct launch ids to be fetched independently
async fn distinct_ids_fetch_independently() -> Result<(), Error> {
    let mut test = test_setup_with_cache(CacheConfig {
        stale_time: Duration::from_secs(60),
        ..CacheConfig::default()
    })
    .await;

    let mut fixtures = SpacexFixtures::new(&mut test.server);
    let first_mock = fixtures.create_launch_endpoint(
        "launch-1",
        factory::mock_launch("launch-1", "FalconSat"),
        1,
    );
    let second_mock =
        fixtures.create_launch_endpoint("launch-2", factory::mock_launch("launch-2", "DemoSat"), 1);

    let catalog = CatalogService::new(&test.state.spacex, &test.state.cache);

    let first = catalog.get_launch("launch-1").await?;
    let second = catalog.get_launch("launch-2").await?;

    assert_eq!(first.name, "FalconSat");
    assert_eq!(second.name, "DemoSat");
    first_mock.assert();
    second_mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect two concurrent requests for one id to share a single upstream fetch
async fn concurrent_requests_share_one_fetch() -> Result<(), Error> {
    let mut test = test_setup().await;

    let mock = SpacexFixtures::new(&mut test.server).create_launch_endpoint(
        "launch-1",
        factory::mock_launch("launch-1", "FalconSat"),
        1,
    );

    let catalog = CatalogService::new(&test.state.spacex, &test.state.cache);

    let (first, second) = tokio::join!(
        catalog.get_launch("launch-1"),
        catalog.get_launch("launch-1")
    );

    assert_eq!(first?.name, "FalconSat");
    assert_eq!(second?.name, "FalconSat");
    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect the retry policy to attempt a failing fetch twice
async fn retry_attempts_failing_fetch_twice() -> Result<(), Error> {
    let mut test = test_setup_with_cache(CacheConfig {
        retry: true,
        ..CacheConfig::default()
    })
    .await;

    let mock =
        SpacexFixtures::new(&mut test.server).create_error_endpoint("/launches/launch-1", 500, 2);

    let catalog = CatalogService::new(&test.state.spacex, &test.state.cache);

    let result = catalog.get_launch("launch-1").await;

    assert!(matches!(result, Err(Error::SharedFetchError(_))));
    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect no second attempt when the first fetch succeeds with retry on
async fn retry_skipped_on_success() -> Result<(), Error> {
    let mut test = test_setup_with_cache(CacheConfig {
        retry: true,
        ..CacheConfig::default()
    })
    .await;

    let mock = SpacexFixtures::new(&mut test.server).create_launch_endpoint(
        "launch-1",
        factory::mock_launch("launch-1", "FalconSat"),
        1,
    );

    let catalog = CatalogService::new(&test.state.spacex, &test.state.cache);

    let launch = catalog.get_launch("launch-1").await?;

    assert_eq!(launch.name, "FalconSat");
    mock.assert();

    Ok(())
}
