/// Token issuance, verification and refresh.
///
/// This module provides the `TokenService`, which coordinates:
/// - Issuance of access + refresh token pairs
/// - Verification (signature + expiry + declared type) of incoming tokens
/// - Exchange of a valid refresh token for a new pair
///
/// Security model:
/// 1. Verification always runs signature → expiry → type, in that order;
///    claims of an unverified token are never inspected.
/// 2. A token is expired at the exact expiry instant (`now >= exp`), with
///    no leeway.
/// 3. A refresh token can never pass as an access token or vice versa.
///
/// Tokens are stateless: nothing is stored server-side and a refresh token
/// is not invalidated by being used. A leaked refresh token therefore stays
/// usable until its natural expiry. This is a known limitation of the
/// stateless model, not an oversight.
use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::{TokenPair, TokenPayload, TokenType};
use crate::services::token_codec::{decode_payload, encode_payload};
use crate::utils::Config;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
    #[error("token encoding failed: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),
}

#[derive(Clone)]
pub struct TokenService {
    config: Arc<Config>,
}

impl TokenService {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Issue an access + refresh pair for `subject`.
    ///
    /// Both tokens share the same `iat` and `extra`; only the type and the
    /// lifetime differ. `expires_in` on the returned pair is the access
    /// token lifetime in seconds.
    ///
    /// Errors: `TokenError::Encoding` only, which indicates a broken
    /// config/signing setup rather than bad input.
    pub fn issue_pair(
        &self,
        subject: &str,
        extra: Map<String, Value>,
    ) -> Result<TokenPair, TokenError> {
        let now = Utc::now().timestamp();
        let access_ttl = self.config.access_ttl_seconds();

        let access = TokenPayload {
            sub: subject.to_string(),
            iat: now,
            exp: now + access_ttl,
            token_type: TokenType::Access,
            extra: extra.clone(),
        };
        let refresh = TokenPayload {
            sub: subject.to_string(),
            iat: now,
            exp: now + self.config.refresh_ttl_seconds(),
            token_type: TokenType::Refresh,
            extra,
        };

        let access_token = encode_payload(&access, &self.config)?;
        let refresh_token = encode_payload(&refresh, &self.config)?;

        Ok(TokenPair::new(access_token, refresh_token, access_ttl))
    }

    /// Verify a token string and return its payload.
    ///
    /// Errors:
    /// - `TokenError::Expired`: `exp` has passed
    /// - `TokenError::Invalid`: bad signature, unparsable token, or a type
    ///   other than `expected_type`
    pub fn verify(&self, token: &str, expected_type: TokenType) -> Result<TokenPayload, TokenError> {
        self.verify_at(token, expected_type, Utc::now().timestamp())
    }

    fn verify_at(
        &self,
        token: &str,
        expected_type: TokenType,
        now: i64,
    ) -> Result<TokenPayload, TokenError> {
        // Signature first: claims are untrusted until the codec accepts them.
        let payload = decode_payload(token, &self.config).map_err(|_| TokenError::Invalid)?;

        if now >= payload.exp {
            return Err(TokenError::Expired);
        }
        if payload.token_type != expected_type {
            return Err(TokenError::Invalid);
        }

        Ok(payload)
    }

    /// Exchange a valid refresh token for a brand-new pair.
    ///
    /// Subject and `extra` carry over unchanged; `iat`/`exp` are regenerated
    /// and both tokens are re-signed. Verification errors propagate as-is.
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair, TokenError> {
        let payload = self.verify(refresh_token, TokenType::Refresh)?;
        self.issue_pair(&payload.sub, payload.extra)
    }
}
