use axum::{http::StatusCode, response::IntoResponse, Json};
use starlog::{
    model::auth::LoginDto,
    server::{controller::auth::login, error::Error, model::session::auth::SessionAuthenticated},
};

use crate::util::setup::test_setup;

#[tokio::test]
/// Expect 200 and an authenticated session for the demo credentials
async fn returns_ok_for_demo_credentials() -> Result<(), Error> {
    let test = test_setup().await;

    let body = LoginDto {
        username: "admin".to_string(),
        password: "password".to_string(),
    };
    let result = login(test.session.clone(), Json(body)).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let authenticated = SessionAuthenticated::get(&test.session).await?;
    assert!(authenticated);

    Ok(())
}

#[tokio::test]
/// Expect 401 and an untouched session for a wrong password
async fn returns_unauthorized_for_wrong_password() -> Result<(), Error> {
    let test = test_setup().await;

    let body = LoginDto {
        username: "admin".to_string(),
        password: "wrong".to_string(),
    };
    let result = login(test.session.clone(), Json(body)).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let authenticated = SessionAuthenticated::get(&test.session).await?;
    assert!(!authenticated);

    Ok(())
}

#[tokio::test]
/// Expect 401 for an unknown username even with the demo password
async fn returns_unauthorized_for_wrong_username() -> Result<(), Error> {
    let test = test_setup().await;

    let body = LoginDto {
        username: "root".to_string(),
        password: "password".to_string(),
    };
    let result = login(test.session.clone(), Json(body)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
