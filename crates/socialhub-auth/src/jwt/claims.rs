//! JWT claims carried by access and refresh tokens.
//!
//! Tokens are minted from [`Claims`] and read back through [`RawClaims`],
//! a deliberately loose shape that is then validated field by field so each
//! violation produces its own [`TokenError`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use uuid::Uuid;

use socialhub_core::types::id::UserId;

use super::error::TokenError;

/// Validated claims payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claims {
    /// Subject: the account ID, encoded as a decimal string.
    #[serde(serialize_with = "subject_as_string")]
    pub sub: UserId,
    /// Always `true` on tokens this service issues.
    pub authorized: bool,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Unique token ID. Always set on tokens minted here; older tokens
    /// may lack it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<Uuid>,
    /// Token type: "access" or "refresh".
    pub token_type: TokenType,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived token presented on every protected request.
    Access,
    /// Long-lived token exchanged for new access tokens.
    Refresh,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Access => write!(f, "access"),
            Self::Refresh => write!(f, "refresh"),
        }
    }
}

impl Claims {
    /// Build claims for a freshly issued token.
    pub fn new(
        user_id: UserId,
        token_type: TokenType,
        issued_at: DateTime<Utc>,
        ttl_seconds: i64,
    ) -> Self {
        Self {
            sub: user_id,
            authorized: true,
            iat: issued_at.timestamp(),
            exp: issued_at.timestamp() + ttl_seconds,
            jti: Some(Uuid::new_v4()),
            token_type,
        }
    }

    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> UserId {
        self.sub
    }
}

/// Claims as they arrive on the wire, before validation.
///
/// `sub` also accepts the legacy `user_id` claim name.
#[derive(Debug, Deserialize)]
pub struct RawClaims {
    #[serde(default, alias = "user_id")]
    sub: Option<Value>,
    #[serde(default)]
    authorized: Option<Value>,
    #[serde(default)]
    iat: Option<i64>,
    exp: i64,
    #[serde(default)]
    jti: Option<Value>,
    #[serde(default)]
    token_type: Option<String>,
}

impl TryFrom<RawClaims> for Claims {
    type Error = TokenError;

    fn try_from(raw: RawClaims) -> Result<Self, Self::Error> {
        let sub = raw
            .sub
            .as_ref()
            .and_then(subject_from_value)
            .ok_or(TokenError::InvalidClaim("sub"))?;

        if raw.authorized != Some(Value::Bool(true)) {
            return Err(TokenError::InvalidClaim("authorized"));
        }

        let token_type = match raw.token_type.as_deref() {
            Some("access") => TokenType::Access,
            Some("refresh") => TokenType::Refresh,
            _ => return Err(TokenError::InvalidClaim("token_type")),
        };

        let jti = match raw.jti {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => {
                Some(Uuid::parse_str(&s).map_err(|_| TokenError::InvalidClaim("jti"))?)
            }
            Some(_) => return Err(TokenError::InvalidClaim("jti")),
        };

        Ok(Self {
            sub,
            authorized: true,
            iat: raw.iat.unwrap_or_default(),
            exp: raw.exp,
            jti,
            token_type,
        })
    }
}

/// Coerce a `sub` value into an account ID. Numbers and numeric strings
/// are accepted; the ID must be positive.
fn subject_from_value(value: &Value) -> Option<UserId> {
    let raw = match value {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    (raw > 0).then_some(UserId(raw))
}

fn subject_as_string<S: Serializer>(id: &UserId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawClaims {
        serde_json::from_value(value).expect("raw claims")
    }

    fn valid() -> Value {
        json!({
            "sub": "42",
            "authorized": true,
            "iat": 1_700_000_000,
            "exp": 1_700_000_900,
            "jti": Uuid::new_v4().to_string(),
            "token_type": "access",
        })
    }

    #[test]
    fn test_valid_claims() {
        let claims = Claims::try_from(raw(valid())).expect("valid");
        assert_eq!(claims.sub, UserId(42));
        assert_eq!(claims.token_type, TokenType::Access);
    }

    #[test]
    fn test_numeric_subject_and_legacy_name() {
        let mut value = valid();
        let obj = value.as_object_mut().unwrap();
        obj.remove("sub");
        obj.insert("user_id".into(), json!(7));
        let claims = Claims::try_from(raw(value)).expect("valid");
        assert_eq!(claims.sub, UserId(7));
    }

    #[test]
    fn test_non_numeric_subject_is_rejected() {
        let mut value = valid();
        value["sub"] = json!("alice");
        assert_eq!(
            Claims::try_from(raw(value)).unwrap_err(),
            TokenError::InvalidClaim("sub")
        );
    }

    #[test]
    fn test_missing_subject_is_rejected() {
        let mut value = valid();
        value.as_object_mut().unwrap().remove("sub");
        assert_eq!(
            Claims::try_from(raw(value)).unwrap_err(),
            TokenError::InvalidClaim("sub")
        );
    }

    #[test]
    fn test_unauthorized_flag_is_rejected() {
        let mut value = valid();
        value["authorized"] = json!(false);
        assert_eq!(
            Claims::try_from(raw(value)).unwrap_err(),
            TokenError::InvalidClaim("authorized")
        );
    }

    #[test]
    fn test_token_id_is_optional() {
        let mut value = valid();
        value.as_object_mut().unwrap().remove("jti");
        let claims = Claims::try_from(raw(value)).expect("valid");
        assert_eq!(claims.jti, None);
    }

    #[test]
    fn test_malformed_token_id_is_an_invalid_claim() {
        for bad in [json!("not-a-uuid"), json!(12345), json!({"id": 1})] {
            let mut value = valid();
            value["jti"] = bad;
            assert_eq!(
                Claims::try_from(raw(value)).unwrap_err(),
                TokenError::InvalidClaim("jti")
            );
        }
    }

    #[test]
    fn test_subject_serializes_as_string() {
        let claims = Claims::new(UserId(5), TokenType::Refresh, Utc::now(), 60);
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["sub"], json!("5"));
        assert_eq!(json["token_type"], json!("refresh"));
        assert_eq!(json["authorized"], json!(true));
    }
}
