use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "serialize_millis")]
    pub created_at: DateTime<Utc>,
}

/// RFC 3339 with exactly three fractional digits, e.g. `2024-01-01T00:00:00.000Z`.
fn serialize_millis<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Raw `name`/`email` pair pulled out of an untyped request body.
///
/// A field counts as missing when it is absent, `null`, not a string, or empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    pub fn from_value(body: &Value) -> Self {
        Self {
            name: string_field(body, "name"),
            email: string_field(body, "email"),
        }
    }
}

fn string_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User {
            id: 1,
            name: "Carlos López".to_string(),
            email: "carlos@example.com".to_string(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Carlos López");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_created_at_always_has_millis() {
        let whole_second = User {
            id: 1,
            name: "Ana Torres".to_string(),
            email: "ana@example.com".to_string(),
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        };
        let value = serde_json::to_value(&whole_second).unwrap();
        assert_eq!(value["createdAt"], "2024-01-01T00:00:00.000Z");

        let with_millis = User {
            created_at: "2024-01-01T00:00:00.120Z".parse().unwrap(),
            ..whole_second.clone()
        };
        let value = serde_json::to_value(&with_millis).unwrap();
        assert_eq!(value["createdAt"], "2024-01-01T00:00:00.120Z");

        // Still reads back with the default deserializer
        let back: User = serde_json::from_value(value).unwrap();
        assert_eq!(back, with_millis);
    }

    #[test]
    fn test_input_from_value() {
        let input = UserInput::from_value(&json!({"name": "Ana", "email": "ana@example.com"}));
        assert_eq!(input, UserInput::new("Ana", "ana@example.com"));

        // Wrong types, nulls and empty strings all read as missing
        let input = UserInput::from_value(&json!({"name": 42, "email": null}));
        assert_eq!(input, UserInput::default());

        let input = UserInput::from_value(&json!({"name": "", "email": ["a@b.co"]}));
        assert_eq!(input, UserInput::default());

        // Non-object bodies have no fields at all
        assert_eq!(UserInput::from_value(&json!([1, 2, 3])), UserInput::default());
        assert_eq!(UserInput::from_value(&json!("text")), UserInput::default());
    }
}
