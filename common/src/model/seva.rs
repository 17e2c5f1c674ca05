use serde::{Deserialize, Serialize};

/// A seva booking as the record service returns it.
///
/// `start_date` and `end_date` are canonical ISO `YYYY-MM-DD` strings on the
/// wire; the service owns validity (including `start_date <= end_date`), this
/// side only reformats user input before sending it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SevaEntry {
    /// Assigned by the record service, never reused.
    pub id: i64,
    pub paath_name: String,
    pub person_name: String,
    pub gotra_name: String,
    pub start_date: String,
    pub end_date: String,
}

/// Create payload: a `SevaEntry` without the service-assigned id.
/// Dates must already be ISO `YYYY-MM-DD` (see `crate::dates::mdy_to_iso`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSevaEntry {
    pub paath_name: String,
    pub person_name: String,
    pub gotra_name: String,
    pub start_date: String,
    pub end_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_round_trips_the_service_field_names() {
        let json = r#"{
            "id": 7,
            "paath_name": "Sundar Kand",
            "person_name": "Ramesh",
            "gotra_name": "Bharadwaj",
            "start_date": "2024-03-01",
            "end_date": "2024-03-05"
        }"#;
        let entry: SevaEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.paath_name, "Sundar Kand");
        assert_eq!(entry.start_date, "2024-03-01");
    }

    #[test]
    fn create_payload_carries_no_id() {
        let payload = NewSevaEntry {
            paath_name: "Akhand Path".into(),
            person_name: "Seema".into(),
            gotra_name: "Kashyap".into(),
            start_date: "2024-03-05".into(),
            end_date: "2024-03-10".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("id"));
        assert_eq!(obj["start_date"], "2024-03-05");
        assert_eq!(obj["end_date"], "2024-03-10");
        assert_eq!(obj.len(), 5);
    }
}
