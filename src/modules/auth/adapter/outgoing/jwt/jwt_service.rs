use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;

use crate::auth::application::ports::outgoing::token_provider::{
    AdminClaims, TokenError, TokenProvider, ADMIN_ROLE,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn encode_claims(&self, claims: &AdminClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_admin_token(&self, subject: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.admin_token_expiry);

        let claims = AdminClaims {
            sub: subject.to_string(),
            role: ADMIN_ROLE.to_string(),
            iss: self.config.issuer.clone(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
        };

        self.encode_claims(&claims)
    }

    /// Signature, issuer, `exp` and `nbf` are checked here. The role is
    /// left to the caller.
    fn verify_token(&self, token: &str) -> Result<AdminClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded = decode::<AdminClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;

            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token verification failed: Token expired");
                    TokenError::TokenExpired
                }
                ErrorKind::ImmatureSignature => {
                    tracing::warn!("Token verification failed: Token not yet valid");
                    TokenError::TokenNotYetValid
                }
                ErrorKind::InvalidSignature => {
                    tracing::error!("Security alert: Invalid token signature detected");
                    TokenError::InvalidSignature
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Token verification failed: Unexpected issuer");
                    TokenError::InvalidIssuer
                }
                ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                    tracing::error!("Security alert: Malformed or invalid algorithm token");
                    TokenError::MalformedToken
                }
                _ => {
                    tracing::warn!("Token verification failed: {}", e);
                    TokenError::MalformedToken
                }
            }
        })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(issuer: &str) -> JwtConfig {
        JwtConfig {
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            issuer: issuer.to_string(),
            admin_token_expiry: 3600,
        }
    }

    fn service() -> JwtTokenService {
        JwtTokenService::new(config("portfolio"))
    }

    #[test]
    fn test_issue_and_verify_admin_token() {
        let service = service();

        let token = service.issue_admin_token("site-owner").unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "site-owner");
        assert_eq!(claims.iss, "portfolio");
        assert!(claims.is_admin());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_invalid_token_verification() {
        let result = service().verify_token("invalid.jwt.token");

        assert_eq!(result.unwrap_err(), TokenError::MalformedToken);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let other = JwtTokenService::new(JwtConfig {
            secret_key: "another_secret_key_that_is_long_enough".to_string(),
            ..config("portfolio")
        });
        let token = other.issue_admin_token("site-owner").unwrap();

        let result = service().verify_token(&token);

        assert_eq!(result.unwrap_err(), TokenError::InvalidSignature);
    }

    #[test]
    fn test_token_from_other_issuer_is_rejected() {
        let token = JwtTokenService::new(config("someone-else"))
            .issue_admin_token("site-owner")
            .unwrap();

        let result = service().verify_token(&token);

        assert_eq!(result.unwrap_err(), TokenError::InvalidIssuer);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = service();
        let past = Utc::now() - Duration::hours(2);
        let claims = AdminClaims {
            sub: "site-owner".to_string(),
            role: ADMIN_ROLE.to_string(),
            iss: "portfolio".to_string(),
            exp: (past + Duration::minutes(5)).timestamp(),
            iat: past.timestamp(),
            nbf: past.timestamp(),
        };
        let token = service.encode_claims(&claims).unwrap();

        assert_eq!(
            service.verify_token(&token).unwrap_err(),
            TokenError::TokenExpired
        );
    }

    #[test]
    fn test_token_not_yet_valid_is_rejected() {
        let service = service();
        let future = Utc::now() + Duration::hours(1);
        let claims = AdminClaims {
            sub: "site-owner".to_string(),
            role: ADMIN_ROLE.to_string(),
            iss: "portfolio".to_string(),
            exp: (future + Duration::hours(1)).timestamp(),
            iat: Utc::now().timestamp(),
            nbf: future.timestamp(),
        };
        let token = service.encode_claims(&claims).unwrap();

        assert_eq!(
            service.verify_token(&token).unwrap_err(),
            TokenError::TokenNotYetValid
        );
    }

    #[test]
    fn test_non_admin_role_still_decodes() {
        let service = service();
        let now = Utc::now();
        let claims = AdminClaims {
            sub: "reader".to_string(),
            role: "viewer".to_string(),
            iss: "portfolio".to_string(),
            exp: (now + Duration::hours(1)).timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
        };
        let token = service.encode_claims(&claims).unwrap();

        let decoded = service.verify_token(&token).unwrap();
        assert!(!decoded.is_admin());
    }
}
