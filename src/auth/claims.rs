use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Claim value that the server emits either as a number or a string,
/// depending on which service issued the token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ClaimId {
    Numeric(i64),
    Text(String),
}

impl ClaimId {
    fn is_blank(&self) -> bool {
        matches!(self, ClaimId::Text(s) if s.is_empty())
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimId::Numeric(id) => write!(f, "{}", id),
            ClaimId::Text(id) => write!(f, "{}", id),
        }
    }
}

/// Payload fields of an access token. Only `user_id` and `sub` are
/// consulted for identity; everything else rides along in `extra`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    #[serde(default)]
    pub user_id: Option<ClaimId>,
    #[serde(default)]
    pub sub: Option<ClaimId>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl TokenClaims {
    /// First of `user_id`, `sub`; blank string claims count as absent.
    pub fn user_id(&self) -> Option<String> {
        self.user_id
            .as_ref()
            .filter(|id| !id.is_blank())
            .or_else(|| self.sub.as_ref().filter(|id| !id.is_blank()))
            .map(|id| id.to_string())
    }

    /// Whether the `exp` claim (Unix seconds) lies in the past.
    /// Tokens without `exp` are treated as unexpired.
    pub fn is_expired(&self) -> bool {
        match self.exp {
            Some(exp) => exp < chrono::Utc::now().timestamp(),
            None => false,
        }
    }
}

/// Decode the claims segment of a `header.payload.signature` token.
///
/// Pure and total: any malformed input (wrong segment count, invalid
/// base64url, payload that is not a JSON object) yields `None`. Failure
/// reasons are logged at debug level for diagnostics only.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        tracing::debug!("token has {} segments, expected 3", parts.len());
        return None;
    }

    // Tokens arrive both padded and unpadded in the wild; strip padding
    // and decode with the no-pad engine to accept either.
    let payload = parts[1].trim_end_matches('=');
    let decoded = match URL_SAFE_NO_PAD.decode(payload) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!("token payload is not valid base64url: {}", err);
            return None;
        }
    };

    match serde_json::from_slice::<TokenClaims>(&decoded) {
        Ok(claims) => Some(claims),
        Err(err) => {
            tracing::debug!("token payload is not a claims object: {}", err);
            None
        }
    }
}

/// Identity of the signed-in user, or `None` for anonymous/malformed
/// sessions. Empty input short-circuits without attempting a decode.
pub fn user_id_from_token(token: Option<&str>) -> Option<String> {
    let token = token?;
    if token.is_empty() {
        return None;
    }
    decode_claims(token)?.user_id()
}

/// Authorization header value for a stored token. Tokens already carrying
/// the scheme pass through unchanged, so storing a full header value does
/// not double-prefix.
pub fn bearer_value(token: &str) -> String {
    if token.starts_with("Bearer ") {
        token.to_string()
    } else {
        format!("Bearer {}", token)
    }
}

/// Extract the raw token from an `Authorization: Bearer <token>` header.
pub fn extract_bearer_token(authorization: &str) -> Option<&str> {
    let parts: Vec<&str> = authorization.split_whitespace().collect();
    match parts.as_slice() {
        ["Bearer", token] => Some(token),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use serde_json::json;

    fn make_token(payload: Value) -> String {
        let header = json!({"alg": "HS256", "typ": "JWT"});
        let header_b64 = URL_SAFE_NO_PAD.encode(header.to_string());
        let payload_b64 = URL_SAFE_NO_PAD.encode(payload.to_string());
        // Signature content is irrelevant: it is never inspected.
        format!("{}.{}.fake_signature", header_b64, payload_b64)
    }

    #[test]
    fn decodes_valid_claims() {
        let token = make_token(json!({"user_id": "u-77", "role": "admin", "exp": 4102444800i64}));
        let claims = decode_claims(&token).expect("valid token should decode");
        assert_eq!(claims.user_id(), Some("u-77".to_string()));
        assert_eq!(claims.role.as_deref(), Some("admin"));
        assert!(!claims.is_expired());
    }

    #[test]
    fn decodes_padded_payload() {
        let header = URL_SAFE_NO_PAD.encode(json!({"alg": "none"}).to_string());
        let mut payload = URL_SAFE_NO_PAD.encode(json!({"sub": "s1"}).to_string());
        while payload.len() % 4 != 0 {
            payload.push('=');
        }
        let token = format!("{}.{}.sig", header, payload);
        assert_eq!(user_id_from_token(Some(&token)), Some("s1".to_string()));
    }

    #[test]
    fn wrong_segment_count_yields_none() {
        assert!(decode_claims("").is_none());
        assert!(decode_claims("only-one-part").is_none());
        assert!(decode_claims("two.parts").is_none());
        assert!(decode_claims("a.b.c.d").is_none());
    }

    #[test]
    fn invalid_base64_yields_none() {
        assert!(decode_claims("head.%%%.sig").is_none());
    }

    #[test]
    fn non_object_payload_yields_none() {
        let header = URL_SAFE_NO_PAD.encode("{}");
        let payload = URL_SAFE_NO_PAD.encode("\"just a string\"");
        assert!(decode_claims(&format!("{}.{}.sig", header, payload)).is_none());

        let not_json = URL_SAFE_NO_PAD.encode("not json at all");
        assert!(decode_claims(&format!("{}.{}.sig", header, not_json)).is_none());
    }

    #[test]
    fn user_id_falls_back_to_sub() {
        let token = make_token(json!({"sub": "fallback-id"}));
        assert_eq!(
            user_id_from_token(Some(&token)),
            Some("fallback-id".to_string())
        );

        let token = make_token(json!({"user_id": "", "sub": "fallback-id"}));
        assert_eq!(
            user_id_from_token(Some(&token)),
            Some("fallback-id".to_string())
        );
    }

    #[test]
    fn numeric_user_id_renders_in_decimal() {
        let token = make_token(json!({"user_id": 42}));
        assert_eq!(user_id_from_token(Some(&token)), Some("42".to_string()));
    }

    #[test]
    fn absent_or_empty_token_yields_none() {
        assert_eq!(user_id_from_token(None), None);
        assert_eq!(user_id_from_token(Some("")), None);
    }

    #[test]
    fn expired_token_detected() {
        let token = make_token(json!({"user_id": 1, "exp": 1000}));
        let claims = decode_claims(&token).unwrap();
        assert!(claims.is_expired());
    }

    #[test]
    fn bearer_value_does_not_double_prefix() {
        assert_eq!(bearer_value("abc"), "Bearer abc");
        assert_eq!(bearer_value("Bearer abc"), "Bearer abc");
    }

    #[test]
    fn extracts_bearer_token_from_header() {
        assert_eq!(extract_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(extract_bearer_token("Basic abc"), None);
        assert_eq!(extract_bearer_token("Bearer"), None);
    }
}
