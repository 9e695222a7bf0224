#[cfg(feature = "web")]
use crate::model::{
    auth::{LoginDto, SessionDto},
    launch::LaunchDto,
    launchpad::LaunchpadDto,
    rocket::RocketDto,
};

/// Turn a non-success response into a displayable message
#[cfg(feature = "web")]
async fn status_error(response: reqwasm::http::Response) -> String {
    use crate::model::api::ErrorDto;

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        format!(
            "Request failed with status {}: {}",
            response.status(),
            error_dto.error
        )
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        format!(
            "Request failed with status {}: {}",
            response.status(),
            error_text
        )
    }
}

#[cfg(feature = "web")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    use reqwasm::http::Request;

    let response = Request::get(url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response data: {}", e)),
        _ => Err(status_error(response).await),
    }
}

/// Retrieve the session's authentication state from API
#[cfg(feature = "web")]
pub async fn get_session() -> Result<SessionDto, String> {
    get_json("/api/auth/session").await
}

/// Submit login credentials to API
#[cfg(feature = "web")]
pub async fn post_login(username: &str, password: &str) -> Result<SessionDto, String> {
    use reqwasm::http::Request;

    let body = serde_json::to_string(&LoginDto {
        username: username.to_string(),
        password: password.to_string(),
    })
    .map_err(|e| format!("Failed to serialize credentials: {}", e))?;

    let response = Request::post("/api/auth/login")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<SessionDto>()
            .await
            .map_err(|e| format!("Failed to parse session data: {}", e)),
        401 => Err("Invalid username or password".to_string()),
        _ => Err(status_error(response).await),
    }
}

/// Retrieve the full launch collection from API
#[cfg(feature = "web")]
pub async fn get_launches() -> Result<Vec<LaunchDto>, String> {
    get_json("/api/launches").await
}

/// Retrieve a single launch from API
#[cfg(feature = "web")]
pub async fn get_launch(launch_id: &str) -> Result<LaunchDto, String> {
    get_json(&format!("/api/launches/{}", launch_id)).await
}

/// Retrieve a single rocket from API
#[cfg(feature = "web")]
pub async fn get_rocket(rocket_id: &str) -> Result<RocketDto, String> {
    get_json(&format!("/api/rockets/{}", rocket_id)).await
}

/// Retrieve a single launchpad from API
#[cfg(feature = "web")]
pub async fn get_launchpad(launchpad_id: &str) -> Result<LaunchpadDto, String> {
    get_json(&format!("/api/launchpads/{}", launchpad_id)).await
}
