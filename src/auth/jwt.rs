use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use super::claims::SessionClaims;

pub fn validate_jwt(
    token: &str,
    secret: &str,
    expected_issuer: &str,
) -> Result<SessionClaims, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[expected_issuer]);
    validation.validate_exp = true;

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("JWT validation failed: {}", e))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn make_token(secret: &str, issuer: &str, premium: bool) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = SessionClaims {
            sub: "user_abc123".to_string(),
            exp: now + 3600,
            iat: now,
            iss: issuer.to_string(),
            premium,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_round_trip() {
        let token = make_token("test_secret", "https://auth.test", true);
        let claims = validate_jwt(&token, "test_secret", "https://auth.test").unwrap();

        assert_eq!(claims.sub, "user_abc123");
        assert!(claims.premium);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = make_token("test_secret", "https://auth.test", false);
        let result = validate_jwt(&token, "other_secret", "https://auth.test");

        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let token = make_token("test_secret", "https://auth.test", false);
        let result = validate_jwt(&token, "test_secret", "https://auth.example");

        assert!(result.is_err());
    }
}
