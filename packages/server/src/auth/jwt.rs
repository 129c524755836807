//! JWT session tokens.

use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Data stored in a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,    // Subject (user id as string)
    pub user_id: Uuid,  // User UUID
    pub email: String,  // Email (for logging/debugging)
    pub exp: i64,       // Expiration timestamp
    pub iat: i64,       // Issued at timestamp
    pub iss: String,    // Issuer
    pub jti: String,    // JWT ID (unique token identifier)
}

/// Creates and verifies session tokens.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtService {
    pub fn new(secret: &str, issuer: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
        }
    }

    /// Create a token for a user. Tokens expire after 7 days.
    pub fn create_token(&self, user_id: Uuid, email: String) -> Result<String> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: user_id.to_string(),
            user_id,
            email,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a token. Returns claims if valid and not expired.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_verify_token() {
        let service = JwtService::new("test_secret_key", "linkstash".to_string());
        let user_id = Uuid::new_v4();

        let token = service
            .create_token(user_id, "user@example.com".to_string())
            .unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.iss, "linkstash");
        assert_eq!(claims.sub, user_id.to_string());
    }

    #[test]
    fn invalid_token_is_rejected() {
        let service = JwtService::new("test_secret_key", "linkstash".to_string());
        assert!(service.verify_token("invalid_token").is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let service1 = JwtService::new("secret1", "linkstash".to_string());
        let service2 = JwtService::new("secret2", "linkstash".to_string());

        let token = service1
            .create_token(Uuid::new_v4(), "user@example.com".to_string())
            .unwrap();

        assert!(service2.verify_token(&token).is_err());
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let service1 = JwtService::new("secret", "linkstash".to_string());
        let service2 = JwtService::new("secret", "other".to_string());

        let token = service1
            .create_token(Uuid::new_v4(), "user@example.com".to_string())
            .unwrap();

        assert!(service2.verify_token(&token).is_err());
    }
}
