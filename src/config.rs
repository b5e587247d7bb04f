use std::env;

use crate::{AppError, AppResult};

/// Fallback zone when neither the user profile nor DEFAULT_TIMEZONE says otherwise.
pub const FALLBACK_TIMEZONE: &str = "America/New_York";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub auth_jwt_secret: String,
    pub auth_issuer: String,
    pub default_timezone: String,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| AppError::Internal("DATABASE_URL must be set".to_string()))?;

        let auth_jwt_secret = env::var("AUTH_JWT_SECRET")
            .map_err(|_| AppError::Internal("AUTH_JWT_SECRET must be set".to_string()))?;

        let auth_issuer = env::var("AUTH_ISSUER")
            .unwrap_or_else(|_| "https://auth.daybook.app".to_string());

        // Unparseable values would fall back again at resolution time; checking
        // here surfaces the typo at boot instead of per-request.
        let default_timezone = match env::var("DEFAULT_TIMEZONE") {
            Ok(tz) if tz.parse::<chrono_tz::Tz>().is_ok() => tz,
            Ok(tz) => {
                return Err(AppError::Internal(format!(
                    "DEFAULT_TIMEZONE is not a valid IANA zone: {}",
                    tz
                )));
            }
            Err(_) => FALLBACK_TIMEZONE.to_string(),
        };

        Ok(Self {
            database_url,
            auth_jwt_secret,
            auth_issuer,
            default_timezone,
        })
    }
}
