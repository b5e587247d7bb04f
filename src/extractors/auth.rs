use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::future::Future;
use std::sync::Arc;

use crate::{auth, AppError, AppState};

/// Extracts the session JWT from either the __session cookie (frontend) or the
/// Authorization header (testing)
fn extract_token_from_request(parts: &Parts) -> Option<String> {
    // Try __session cookie first (for the web frontend)
    if let Some(cookie_header) = parts.headers.get(header::COOKIE) {
        if let Ok(cookie_str) = cookie_header.to_str() {
            // Parse cookies manually (cookie = "name=value; name2=value2")
            for cookie in cookie_str.split(';') {
                let cookie = cookie.trim();
                if let Some(value) = cookie.strip_prefix("__session=") {
                    return Some(value.to_string());
                }
            }
        }
    }

    // Fallback to Authorization header (for testing with Bearer tokens)
    if let Some(auth_header) = parts.headers.get(header::AUTHORIZATION) {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    None
}

/// The capability the auth provider grants us: a stable user id plus the
/// subscription flag. Logged-out requests never reach handlers; they are
/// rejected here.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub premium: bool,
}

impl FromRequestParts<Arc<AppState>> for AuthenticatedUser {
    type Rejection = AppError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        // Try both cookie-based auth (for frontend) and Bearer token (for testing)
        let token = extract_token_from_request(parts);

        let state = state.clone();

        async move {
            let token = token.ok_or_else(|| {
                AppError::Unauthorized(
                    "Missing authentication: no __session cookie or Authorization header"
                        .to_string(),
                )
            })?;

            let claims = auth::validate_jwt(
                &token,
                &state.config.auth_jwt_secret,
                &state.config.auth_issuer,
            )
            .map_err(AppError::Unauthorized)?;

            tracing::debug!(user_id = %claims.sub, premium = claims.premium, "Session validated");

            Ok(AuthenticatedUser {
                user_id: claims.sub,
                premium: claims.premium,
            })
        }
    }
}
