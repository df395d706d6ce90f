use serde::{Deserialize, Serialize};

/// Raw value of a single record field, tagged by the kind of column it comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Int(i64),
    Text(String),
    Enum(EnumValue),
    Json(serde_json::Value),
    /// ISO 8601 text as received from the API.
    DateTime(String),
    Bool(bool),
}

/// An enum column is either a single variant or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    Single(String),
    Many(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_value_accepts_string_or_list() {
        let single: EnumValue = serde_json::from_str(r#""ACTIVE""#).unwrap();
        assert_eq!(single, EnumValue::Single("ACTIVE".into()));

        let many: EnumValue = serde_json::from_str(r#"["ACTIVE", "PENDING_REVIEW"]"#).unwrap();
        assert_eq!(many, EnumValue::Many(vec!["ACTIVE".into(), "PENDING_REVIEW".into()]));
    }
}
