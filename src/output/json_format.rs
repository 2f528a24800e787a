//! JSON output formatting.
//!
//! Builds the single-key export payload `{ roll: record }` used for file
//! export and clipboard-style piping, and full-dataset dumps.

use crate::types::{ResultRecord, Roll};
use std::collections::BTreeMap;

/// Build the single-key export payload for one record.
pub fn export_payload<'a>(
    roll: &'a Roll,
    record: &'a ResultRecord,
) -> BTreeMap<&'a str, &'a ResultRecord> {
    let mut payload = BTreeMap::new();
    payload.insert(roll.as_str(), record);
    payload
}

/// Serialize the export payload as pretty-printed JSON.
pub fn export_string(roll: &Roll, record: &ResultRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&export_payload(roll, record))
}

/// Serialize dataset entries as a pretty-printed JSON object.
pub fn dataset_string<'a>(
    entries: impl Iterator<Item = (&'a Roll, &'a ResultRecord)>,
) -> serde_json::Result<String> {
    let map: BTreeMap<&str, &ResultRecord> =
        entries.map(|(roll, record)| (roll.as_str(), record)).collect();
    serde_json::to_string_pretty(&map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Dataset;

    #[test]
    fn test_export_roundtrip() {
        let roll = Roll::new("123456").unwrap();
        let record = ResultRecord::Referred {
            subjects: vec!["6621".to_string(), "6623".to_string()],
        };

        let json = export_string(&roll, &record).unwrap();
        let parsed: Dataset = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get(&roll), Some(&record));
    }

    #[test]
    fn test_export_is_single_key_object() {
        let roll = Roll::new("123456").unwrap();
        let record = ResultRecord::Passed { gpa: 3.75 };

        let json = export_string(&roll, &record).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["123456"]["type"], "passed");
        assert_eq!(object["123456"]["gpa"], 3.75);
    }

    #[test]
    fn test_dataset_string() {
        let roll_a = Roll::new("111111").unwrap();
        let roll_b = Roll::new("222222").unwrap();
        let record_a = ResultRecord::Passed { gpa: 4.0 };
        let record_b = ResultRecord::Referred {
            subjects: vec!["6621".to_string()],
        };

        let entries = vec![(&roll_a, &record_a), (&roll_b, &record_b)];
        let json = dataset_string(entries.into_iter()).unwrap();

        let parsed: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
    }
}
