//! The authentication contract the façade consumes (spec.md §6
//! "Authentication contract"): a bearer token validated against a
//! shared-secret symmetric scheme, recovering an opaque user id on
//! success. Token expiry and bad signatures both collapse to
//! [Error::Unauthenticated] — callers are never told which.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::error::{Error, Result};

/// An opaque user id recovered from a validated token.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct UserId(pub String);

pub trait Authenticator: Send + Sync {
    fn authenticate(&self, bearer_header: &str) -> Result<UserId>;
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
}

/// Validates bearer tokens as HMAC-signed JWTs against a configured
/// signing secret and algorithm (spec.md §6's "configured signing
/// algorithm identifier").
pub struct JwtAuthenticator {
    secret: String,
    algorithm: Algorithm,
}

impl JwtAuthenticator {
    pub fn new(secret: impl Into<String>, algorithm: &str) -> Result<Self> {
        let algorithm = parse_algorithm(algorithm)?;
        Ok(JwtAuthenticator {
            secret: secret.into(),
            algorithm,
        })
    }
}

impl Authenticator for JwtAuthenticator {
    fn authenticate(&self, bearer_header: &str) -> Result<UserId> {
        let token = bearer_header
            .strip_prefix("Bearer ")
            .unwrap_or(bearer_header);

        let validation = Validation::new(self.algorithm);
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|_| Error::Unauthenticated)?;

        Ok(UserId(data.claims.sub))
    }
}

fn parse_algorithm(name: &str) -> Result<Algorithm> {
    match name {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        _ => Err(Error::Unauthenticated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        exp: usize,
    }

    fn token_for(user: &str, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &TestClaims {
                sub: user.to_string(),
                exp: 9_999_999_999,
            },
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_recovers_user_id() {
        let auth = JwtAuthenticator::new("shared-secret", "HS256").unwrap();
        let token = token_for("user-42", "shared-secret");
        let user = auth.authenticate(&format!("Bearer {token}")).unwrap();
        assert_eq!(user.0, "user-42");
    }

    #[test]
    fn wrong_secret_is_unauthenticated() {
        let auth = JwtAuthenticator::new("shared-secret", "HS256").unwrap();
        let token = token_for("user-42", "wrong-secret");
        assert_eq!(
            auth.authenticate(&format!("Bearer {token}")),
            Err(Error::Unauthenticated)
        );
    }

    #[test]
    fn missing_token_is_unauthenticated() {
        let auth = JwtAuthenticator::new("shared-secret", "HS256").unwrap();
        assert_eq!(auth.authenticate(""), Err(Error::Unauthenticated));
    }
}
