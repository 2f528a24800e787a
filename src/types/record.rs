//! Result record types matching the dataset wire format.
//!
//! A record is either a pass with a GPA or a referral carrying the subject
//! codes the candidate must retake. The `type` field on the wire selects the
//! variant; unknown tags are rejected during deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome recorded for a single roll number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResultRecord {
    /// Candidate passed with the given grade point average.
    Passed { gpa: f64 },
    /// Candidate is referred in the listed subjects (codes, in dataset order).
    Referred { subjects: Vec<String> },
}

impl ResultRecord {
    /// Check whether this is a passing record.
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    /// The GPA, if this record is a pass.
    pub fn gpa(&self) -> Option<f64> {
        match self {
            Self::Passed { gpa } => Some(*gpa),
            Self::Referred { .. } => None,
        }
    }

    /// The referred subject codes, if this record is a referral.
    pub fn subjects(&self) -> Option<&[String]> {
        match self {
            Self::Passed { .. } => None,
            Self::Referred { subjects } => Some(subjects),
        }
    }

    /// Human-readable status label.
    pub fn status(&self) -> ResultStatus {
        match self {
            Self::Passed { .. } => ResultStatus::Passed,
            Self::Referred { .. } => ResultStatus::Referred,
        }
    }
}

/// Status of a result record, without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Passed,
    Referred,
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::Referred => write!(f, "referred"),
        }
    }
}
