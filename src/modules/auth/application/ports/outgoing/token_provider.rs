use serde::{Deserialize, Serialize};

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token was issued by another issuer")]
    InvalidIssuer,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Claims carried by an admin token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,  // Who the token was minted for
    pub role: String, // "admin" for write access
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
}

impl AdminClaims {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

pub trait TokenProvider: Send + Sync {
    fn issue_admin_token(&self, subject: &str) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<AdminClaims, TokenError>;
}
