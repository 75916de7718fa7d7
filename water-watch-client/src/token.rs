//! Credential token decoding
//!
//! The dashboard client only needs the `id` claim out of the stored JWT.
//! It holds no signing secret, so the payload is decoded without verifying
//! the signature or expiry; whether the token is actually accepted is the
//! server's decision on the subsequent API call.

use crate::{Error, Result};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tracing::debug;
use water_watch_core::environment::UserId;

#[derive(Debug, Deserialize)]
struct TokenClaims {
    id: String,
}

fn payload_only_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();
    validation
}

/// Extract the user id from a credential token
///
/// Fails with [`Error::AuthMissing`] for an empty token or an empty `id`
/// claim, and with [`Error::Token`] when the token is not decodable JWT.
pub fn user_id_from_token(token: &str) -> Result<UserId> {
    if token.trim().is_empty() {
        return Err(Error::AuthMissing);
    }

    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(&[]),
        &payload_only_validation(),
    )?;

    if data.claims.id.is_empty() {
        return Err(Error::AuthMissing);
    }
    Ok(UserId(data.claims.id))
}

/// Token-present gate: absent or undecodable token yields `None`
///
/// Mirrors the dashboard contract of skipping the fetch silently when no
/// usable credential is stored; the reason is logged at debug level.
pub fn user_id_if_present(token: Option<&str>) -> Option<UserId> {
    let token = token?;
    match user_id_from_token(token) {
        Ok(user_id) => Some(user_id),
        Err(err) => {
            debug!(category = err.category(), error = %err, "credential token unusable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct SignedClaims<'a> {
        id: &'a str,
        exp: i64,
    }

    fn token_for(id: &str) -> String {
        let claims = SignedClaims {
            id,
            exp: 4_102_444_800, // far future; expiry is not checked anyway
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_decodes_id_without_knowing_the_secret() {
        let token = token_for("user-42");
        let user_id = user_id_from_token(&token).unwrap();
        assert_eq!(user_id.as_str(), "user-42");
    }

    #[test]
    fn test_tampered_signature_still_decodes() {
        // Client-side decoding reads the payload only; a wrong signature is
        // the server's problem.
        let mut token = token_for("user-42");
        token.push_str("garbage");
        // Still three segments, last one invalid as a signature.
        let user_id = user_id_from_token(&token).unwrap();
        assert_eq!(user_id.as_str(), "user-42");
    }

    #[test]
    fn test_empty_token_is_auth_missing() {
        let err = user_id_from_token("").unwrap_err();
        assert!(matches!(err, Error::AuthMissing));

        let err = user_id_from_token("   ").unwrap_err();
        assert!(matches!(err, Error::AuthMissing));
    }

    #[test]
    fn test_garbage_token_is_token_error() {
        let err = user_id_from_token("not-a-jwt").unwrap_err();
        assert!(matches!(err, Error::Token(_)));
        assert_eq!(err.category(), "auth_missing");
    }

    #[test]
    fn test_empty_id_claim_is_auth_missing() {
        let token = token_for("");
        let err = user_id_from_token(&token).unwrap_err();
        assert!(matches!(err, Error::AuthMissing));
    }

    #[test]
    fn test_gate_returns_none_for_absent_or_bad_tokens() {
        assert_eq!(user_id_if_present(None), None);
        assert_eq!(user_id_if_present(Some("not-a-jwt")), None);

        let token = token_for("user-7");
        assert_eq!(
            user_id_if_present(Some(&token)),
            Some(UserId("user-7".into()))
        );
    }
}
