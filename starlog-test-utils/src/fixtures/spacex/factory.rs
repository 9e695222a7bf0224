//! JSON payload factories shaped like the public SpaceX catalog API.

use serde_json::{json, Value};

/// Create a mock launch payload with default test values.
///
/// # Arguments
/// - `id` - The launch id used in endpoint paths
/// - `name` - The mission name
pub fn mock_launch(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "flight_number": 91,
        "date_utc": "2020-05-30T19:22:00.000Z",
        "date_local": "2020-05-30T15:22:00-04:00",
        "success": true,
        "details": "Test mission details",
        "rocket": "rocket-1",
        "launchpad": "pad-1",
        "failures": [],
        "links": {
            "patch": {
                "small": "https://images.example.com/patch-small.png",
                "large": "https://images.example.com/patch-large.png"
            },
            "reddit": {
                "campaign": null,
                "launch": null,
                "media": null,
                "recovery": null
            },
            "flickr": {
                "small": [],
                "original": []
            },
            "presskit": null,
            "webcast": "https://youtu.be/test",
            "youtube_id": "test",
            "article": null,
            "wikipedia": null
        }
    })
}

/// Create a mock launch payload that failed, with one recorded failure.
pub fn mock_failed_launch(id: &str, name: &str) -> Value {
    let mut launch = mock_launch(id, name);

    launch["success"] = json!(false);
    launch["failures"] = json!([
        {
            "time": 139,
            "altitude": 40,
            "reason": "helium tank overpressure"
        }
    ]);

    launch
}

/// Create a mock rocket payload with default test values.
pub fn mock_rocket(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": "rocket",
        "active": true,
        "stages": 2,
        "boosters": 0,
        "cost_per_launch": 50000000u64,
        "success_rate_pct": 98.0,
        "first_flight": "2010-06-04",
        "country": "United States",
        "company": "SpaceX",
        "height": { "meters": 70.0, "feet": 229.6 },
        "diameter": { "meters": 3.7, "feet": 12.0 },
        "mass": { "kg": 549054u64, "lb": 1207920u64 },
        "flickr_images": [],
        "wikipedia": "https://en.wikipedia.org/wiki/Falcon_9",
        "description": "Test rocket description"
    })
}

/// Create a mock launchpad payload with default test values.
pub fn mock_launchpad(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "full_name": format!("{name} Full Name"),
        "status": "active",
        "locality": "Cape Canaveral",
        "region": "Florida",
        "latitude": 28.5618571,
        "longitude": -80.577366,
        "launch_attempts": 99,
        "launch_successes": 97,
        "rockets": ["rocket-1"],
        "timezone": "America/New_York",
        "details": "Test launchpad details",
        "images": {
            "large": ["https://images.example.com/pad.jpg"]
        }
    })
}
