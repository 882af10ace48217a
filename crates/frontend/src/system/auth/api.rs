use contracts::system::auth::{LoginRequest, RegisterRequest, RegisterResponse, Session};

use crate::shared::api_client::{ApiError, CatalogApi};

/// Exchange credentials for a session
pub async fn login<A: CatalogApi>(
    api: &A,
    username: String,
    password: String,
) -> Result<Session, ApiError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(ApiError::MissingCredentials);
    }

    let request = LoginRequest {
        username: username.trim().to_string(),
        password,
    };
    let response = api.login(&request).await?;
    if response.access_token.trim().is_empty() {
        return Err(ApiError::Decode("empty access_token".to_string()));
    }

    Ok(Session::authenticated(response.access_token, &response.role))
}

/// Text shown when sign-in fails: the server's message if it sent one
pub fn login_failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Status { message, .. } if !message.trim().is_empty() => message.clone(),
        _ => "Login failed".to_string(),
    }
}

/// Create an account. Blank profile fields are dropped from the request.
pub async fn register<A: CatalogApi>(
    api: &A,
    mut request: RegisterRequest,
) -> Result<RegisterResponse, ApiError> {
    request.username = request.username.trim().to_string();
    if request.username.is_empty() || request.password.is_empty() {
        return Err(ApiError::MissingCredentials);
    }

    for field in [
        &mut request.email,
        &mut request.phone,
        &mut request.full_name,
        &mut request.gender,
    ] {
        if field.as_deref().is_some_and(|v| v.trim().is_empty()) {
            *field = None;
        }
    }

    api.register(&request).await
}
