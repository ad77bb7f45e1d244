//! Reduced view of an auth identity

use crate::etl::Transformer;
use eyre::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The fields of an identity kept in the report
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: Option<String>,
    pub role: Option<String>,
    pub user_metadata: Value,
    /// Creation timestamp, always in textual form
    pub created_at: String,
}

/// Maps a raw GoTrue user object to a [`UserRecord`]
///
/// An entry without an `id` is rejected. GoTrue always sends one, so a
/// missing id means the listing itself is malformed and the whole roster is
/// reported as failed rather than partially.
#[derive(Clone, Copy, Debug, Default)]
pub struct UserRecordMapper;

impl UserRecordMapper {
    pub fn new() -> Self {
        Self
    }
}

impl Transformer for UserRecordMapper {
    type Input = Value;
    type Output = UserRecord;

    fn transform(&self, input: Self::Input) -> Result<Self::Output> {
        let Value::Object(mut user) = input else {
            eyre::bail!("Unexpected user entry: expected an object");
        };

        let id = match user.remove("id") {
            Some(Value::String(id)) => id,
            Some(other) if !other.is_null() => other.to_string(),
            _ => eyre::bail!("User entry has no id"),
        };

        Ok(UserRecord {
            id,
            email: optional_string(user.remove("email")),
            role: optional_string(user.remove("role")),
            user_metadata: match user.remove("user_metadata") {
                Some(Value::Null) | None => Value::Object(Map::new()),
                Some(metadata) => metadata,
            },
            created_at: timestamp_text(user.remove("created_at")),
        })
    }
}

fn optional_string(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Strings are kept verbatim; anything else is rendered as its JSON text.
fn timestamp_text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
        None => Value::Null.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_maps_gotrue_user() {
        let user = json!({
            "id": "4d6f0c3e-1f2a-4b7c-9e8d-0a1b2c3d4e5f",
            "aud": "authenticated",
            "role": "authenticated",
            "email": "élodie@example.fr",
            "app_metadata": {"provider": "email"},
            "user_metadata": {"full_name": "Élodie Martin"},
            "created_at": "2024-03-01T09:15:42.123456Z",
            "last_sign_in_at": "2024-03-02T10:00:00Z"
        });

        let record = UserRecordMapper::new().transform(user).unwrap();
        assert_eq!(record.id, "4d6f0c3e-1f2a-4b7c-9e8d-0a1b2c3d4e5f");
        assert_eq!(record.email.as_deref(), Some("élodie@example.fr"));
        assert_eq!(record.role.as_deref(), Some("authenticated"));
        assert_eq!(record.user_metadata, json!({"full_name": "Élodie Martin"}));
        assert_eq!(record.created_at, "2024-03-01T09:15:42.123456Z");
    }

    #[test]
    fn test_serialized_field_order() {
        let record = UserRecordMapper::new()
            .transform(json!({"created_at": "t", "email": "a@b.c", "id": "1"}))
            .unwrap();
        let text = serde_json::to_string(&record).unwrap();
        assert_eq!(
            text,
            r#"{"id":"1","email":"a@b.c","role":null,"user_metadata":{},"created_at":"t"}"#
        );
    }

    #[test]
    fn test_non_string_timestamp_is_coerced() {
        let record = UserRecordMapper::new()
            .transform(json!({"id": "1", "created_at": 1709284542}))
            .unwrap();
        assert_eq!(record.created_at, "1709284542");

        let record = UserRecordMapper::new().transform(json!({"id": "2"})).unwrap();
        assert_eq!(record.created_at, "null");
    }

    #[test]
    fn test_phone_only_user_has_no_email() {
        let record = UserRecordMapper::new()
            .transform(json!({"id": "1", "email": null, "phone": "+33600000000"}))
            .unwrap();
        assert_eq!(record.email, None);
    }

    #[test]
    fn test_rejects_malformed_entries() {
        assert!(UserRecordMapper::new().transform(json!("user")).is_err());
        assert!(UserRecordMapper::new().transform(json!({"email": "x"})).is_err());
    }
}
