use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Single-use token issued to a user (email verification, password reset).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub kind: String,
    pub value: String,
    pub expires_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Token {
    /// Issue a fresh random token valid for `ttl`.
    pub fn issue(user_id: Uuid, kind: impl Into<String>, ttl: Duration) -> Self {
        Self {
            id: None,
            user_id,
            kind: kind.into(),
            value: Uuid::new_v4().simple().to_string(),
            expires_at: Utc::now() + ttl,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_tokens_are_unique_and_live() {
        let user_id = Uuid::new_v4();
        let a = Token::issue(user_id, "verify", Duration::hours(1));
        let b = Token::issue(user_id, "verify", Duration::hours(1));

        assert_ne!(a.value, b.value);
        assert!(!a.is_expired(Utc::now()));
        assert!(a.is_expired(a.expires_at));
    }
}
