//! CSV output formatting.

use crate::error::{CliError, CliResult};
use crate::types::{ResultRecord, Roll};

/// Render dataset entries as CSV with a header row.
///
/// Referred subject codes are joined with spaces inside the single
/// `subjects` field.
pub fn to_csv<'a>(
    entries: impl Iterator<Item = (&'a Roll, &'a ResultRecord)>,
) -> CliResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["roll", "status", "gpa", "subjects"])
        .map_err(|e| CliError::Other(e.to_string()))?;

    for (roll, record) in entries {
        let gpa = record.gpa().map(|g| g.to_string()).unwrap_or_default();
        let subjects = record
            .subjects()
            .map(|s| s.join(" "))
            .unwrap_or_default();

        wtr.write_record([roll.as_str(), &record.status().to_string(), &gpa, &subjects])
            .map_err(|e| CliError::Other(e.to_string()))?;
    }

    String::from_utf8(wtr.into_inner().map_err(|e| CliError::Other(e.to_string()))?)
        .map_err(|e| CliError::Other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_rows() {
        let roll_a = Roll::new("111111").unwrap();
        let roll_b = Roll::new("222222").unwrap();
        let record_a = ResultRecord::Passed { gpa: 3.75 };
        let record_b = ResultRecord::Referred {
            subjects: vec!["6621".to_string(), "6623".to_string()],
        };

        let entries = vec![(&roll_a, &record_a), (&roll_b, &record_b)];
        let csv = to_csv(entries.into_iter()).unwrap();

        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("roll,status,gpa,subjects"));
        assert_eq!(lines.next(), Some("111111,passed,3.75,"));
        assert_eq!(lines.next(), Some("222222,referred,,6621 6623"));
    }

    #[test]
    fn test_csv_empty_dataset() {
        let csv = to_csv(std::iter::empty()).unwrap();
        assert_eq!(csv.trim(), "roll,status,gpa,subjects");
    }
}
