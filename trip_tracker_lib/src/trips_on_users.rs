use serde::{Deserialize, Serialize};

use crate::{field::FieldValue, table::ListRecord};

/// Association between a user and a trip.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TripsOnUsers {
    pub id: i64,
    pub user_id: i64,
    pub trip_id: i64,
}

impl TripsOnUsers {
    pub fn new(id: i64, user_id: i64, trip_id: i64) -> Self {
        Self {
            id,
            user_id,
            trip_id,
        }
    }
}

impl ListRecord for TripsOnUsers {
    const MODEL_NAME: &'static str = "tripsOnUsers";
    const DISPLAY_NAME: &'static str = "TripsOnUsers";
    const COLUMNS: &'static [&'static str] = &["Id", "User id", "Trip id"];

    fn id(&self) -> i64 {
        self.id
    }

    fn fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Int(self.id),
            FieldValue::Int(self.user_id),
            FieldValue::Int(self.trip_id),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let record: TripsOnUsers =
            serde_json::from_str(r#"{"id": 3, "userId": 7, "tripId": 11}"#).unwrap();
        assert_eq!(record, TripsOnUsers::new(3, 7, 11));
    }

    #[test]
    fn one_field_per_column() {
        let record = TripsOnUsers::new(1, 2, 3);
        assert_eq!(record.fields().len(), TripsOnUsers::COLUMNS.len());
        assert_eq!(record.fields()[2], FieldValue::Int(3));
    }
}
