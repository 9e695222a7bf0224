//! Mock HTTP endpoints shaped like the public SpaceX catalog API.
//!
//! Each helper registers a GET endpoint on the mockito server and verifies
//! it was called the expected number of times when the mock is asserted.

use mockito::Mock;
use serde_json::Value;

use crate::fixtures::spacex::SpacexFixtures;

impl<'a> SpacexFixtures<'a> {
    /// Mock `GET /launches` returning the given launch collection.
    pub fn create_launches_endpoint(
        &mut self,
        mock_launches: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("GET", "/launches")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::Array(mock_launches).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock `GET /launches/{launch_id}` returning the given launch.
    pub fn create_launch_endpoint(
        &mut self,
        launch_id: &str,
        mock_launch: Value,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("GET", format!("/launches/{launch_id}").as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(mock_launch.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock `GET /rockets/{rocket_id}` returning the given rocket.
    pub fn create_rocket_endpoint(
        &mut self,
        rocket_id: &str,
        mock_rocket: Value,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("GET", format!("/rockets/{rocket_id}").as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(mock_rocket.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock `GET /launchpads/{launchpad_id}` returning the given launchpad.
    pub fn create_launchpad_endpoint(
        &mut self,
        launchpad_id: &str,
        mock_launchpad: Value,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("GET", format!("/launchpads/{launchpad_id}").as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(mock_launchpad.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock an arbitrary path failing with the given status.
    pub fn create_error_endpoint(
        &mut self,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"upstream failure"}"#)
            .expect(expected_requests)
            .create()
    }

    /// Mock a path returning a body that is not valid for its schema.
    pub fn create_malformed_endpoint(&mut self, path: &str, expected_requests: usize) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"unexpected":"shape"}"#)
            .expect(expected_requests)
            .create()
    }
}
