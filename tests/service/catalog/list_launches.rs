use std::time::Duration;

use starlog::server::{cache::CacheConfig, error::Error, service::catalog::CatalogService};
use starlog_test_utils::fixtures::spacex::{factory, SpacexFixtures};

use crate::util::setup::{test_setup, test_setup_with_cache};

#[tokio::test]
/// Expect two concurrent calls to share a single upstream fetch
async fn concurrent_calls_share_one_fetch() -> Result<(), Error> {
    let mut test = test_setup().await;

    let mock = SpacexFixtures::new(&mut test.server).create_launches_endpoint(
        vec![factory::mock_launch("launch-1", "FalconSat")],
        1,
    );

    let catalog = CatalogService::new(&test.state.spacex, &test.state.cache);

    let (first, second) = tokio::join!(catalog.list_launches(), catalog.list_launches());

    assert_eq!(first?.len(), 1);
    assert_eq!(second?.len(), 1);
    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect a zero stale time to refetch on every sequential call
async fn zero_stale_time_refetches_sequentially() -> Result<(), Error> {
    let mut test = test_setup().await;

    let mock = SpacexFixtures::new(&mut test.server).create_launches_endpoint(
        vec![factory::mock_launch("launch-1", "FalconSat")],
        2,
    );

    let catalog = CatalogService::new(&test.state.spacex, &test.state.cache);

    catalog.list_launches().await?;
    catalog.list_launches().await?;

    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect a fresh entry to be served without another upstream fetch
async fn fresh_entry_skips_upstream() -> Result<(), Error> {
    let mut test = test_setup_with_cache(CacheConfig {
        stale_time: Duration::from_secs(60),
        ..CacheConfig::default()
    })
    .await;

    let mock = SpacexFixtures::new(&mut test.server).create_launches_endpoint(
        vec![factory::mock_launch("launch-1", "FalconSat")],
        1,
    );

    let catalog = CatalogService::new(&test.state.spacex, &test.state.cache);

    catalog.list_launches().await?;
    catalog.list_launches().await?;

    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect a failed fetch to be cached like a success while fresh
async fn failure_is_cached_while_fresh() -> Result<(), Error> {
    let mut test = test_setup_with_cache(CacheConfig {
        stale_time: Duration::from_secs(60),
        ..CacheConfig::default()
    })
    .await;

    let mock = SpacexFixtures::new(&mut test.server).create_error_endpoint("/launches", 500, 1);

    let catalog = CatalogService::new(&test.state.spacex, &test.state.cache);

    let first = catalog.list_launches().await;
    let second = catalog.list_launches().await;

    assert!(matches!(first, Err(Error::SharedFetchError(_))));
    assert!(matches!(second, Err(Error::SharedFetchError(_))));
    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect clearing the cache to force a refetch of a fresh entry
async fn clear_forces_refetch() -> Result<(), Error> {
    let mut test = test_setup_with_cache(CacheConfig {
        stale_time: Duration::from_secs(60),
        ..CacheConfig::default()
    })
    .await;

    let mock = SpacexFixtures::new(&mut test.server).create_launches_endpoint(
        vec![factory::mock_launch("launch-1", "FalconSat")],
        2,
    );

    let catalog = CatalogService::new(&test.state.spacex, &test.state.cache);

    catalog.list_launches().await?;
    test.state.cache.clear();
    catalog.list_launches().await?;

    mock.assert();

    Ok(())
}
