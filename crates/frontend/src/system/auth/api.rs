use contracts::system::auth::{token_path, AuthSession, LoginRequest, SignupRequest, SIGNUP_PATH};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, with_api_key};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<AuthSession, String> {
    log::info!("Attempting login for {}", email);
    let request = LoginRequest { email, password };

    let response = with_api_key(Request::post(&api_url(&token_path())))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::error!("Login error: {} {}", status, body);
        return Err(format!("Login failed: {}", status));
    }

    response
        .json::<AuthSession>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Register a new account; the user logs in afterwards
pub async fn signup(request: SignupRequest) -> Result<(), String> {
    log::info!("Attempting signup for {}", request.email);

    let response = with_api_key(Request::post(&api_url(SIGNUP_PATH)))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::error!("Signup error: {} {}", status, body);
        return Err(format!("Signup failed: {}", status));
    }

    Ok(())
}
