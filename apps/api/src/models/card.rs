use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted contact record derived from a business card.
///
/// The required and recognized contact fields are typed columns; any other
/// field the caller supplied at create/update time is stored verbatim in
/// `extra` and serialized flattened into the card object, so API clients see
/// the same open-ended shape they wrote.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CardRow {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "jobTitle", skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    pub company: String,
    #[serde(rename = "phoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Json<Map<String, Value>>,
    #[serde(rename = "creationTimestamp")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_card() -> CardRow {
        let mut extra = Map::new();
        extra.insert("linkedin".to_string(), json!("in/jane-doe"));

        CardRow {
            id: Uuid::new_v4(),
            name: "Jane Doe".to_string(),
            job_title: Some("CTO".to_string()),
            company: "Acme Corp".to_string(),
            phone_number: None,
            email: Some("jane@acme.example".to_string()),
            extra: Json(extra),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_card_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(sample_card()).unwrap();
        let obj = value.as_object().unwrap();

        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("jobTitle"));
        assert!(obj.contains_key("creationTimestamp"));
        assert_eq!(obj["company"], json!("Acme Corp"));
    }

    #[test]
    fn test_extra_fields_are_flattened() {
        let value = serde_json::to_value(sample_card()).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj["linkedin"], json!("in/jane-doe"));
        assert!(!obj.contains_key("extra"));
    }

    #[test]
    fn test_absent_optional_fields_are_omitted() {
        let value = serde_json::to_value(sample_card()).unwrap();
        let obj = value.as_object().unwrap();

        assert!(!obj.contains_key("phoneNumber"));
        assert!(obj.contains_key("email"));
    }
}
