use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::domain::TokenPayload;
use crate::utils::Config;

#[derive(Error, Debug, PartialEq)]
pub enum CodecError {
    #[error("token cannot be parsed")]
    Malformed,
    #[error("signature verification failed")]
    SignatureInvalid,
}

/// Serialize and sign a payload with the configured secret and algorithm.
pub fn encode_payload(
    payload: &TokenPayload,
    config: &Config,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::new(config.jwt_algorithm()),
        payload,
        &EncodingKey::from_secret(config.jwt_secret()),
    )
}

/// Parse a token string and verify its signature.
///
/// The algorithm is pinned to the configured one, so a token whose header
/// declares anything else fails as `SignatureInvalid`. Expiry is not checked
/// here; the verifier owns that rule.
pub fn decode_payload(token: &str, config: &Config) -> Result<TokenPayload, CodecError> {
    let mut validation = Validation::new(config.jwt_algorithm());
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<TokenPayload>(
        token,
        &DecodingKey::from_secret(config.jwt_secret()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => CodecError::SignatureInvalid,
        _ => CodecError::Malformed,
    })
}
