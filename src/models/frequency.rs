use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How often the user wants to check in with a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckInFrequency {
    #[serde(rename = "Twice a Month")]
    TwiceAMonth,
    #[serde(rename = "Monthly")]
    Monthly,
    #[serde(rename = "Quarterly")]
    Quarterly,
    #[serde(rename = "Semiannually")]
    Semiannually,
    #[serde(rename = "Twice a Year")]
    TwiceAYear,
}

impl CheckInFrequency {
    pub const ALL: [CheckInFrequency; 5] = [
        CheckInFrequency::TwiceAMonth,
        CheckInFrequency::Monthly,
        CheckInFrequency::Quarterly,
        CheckInFrequency::Semiannually,
        CheckInFrequency::TwiceAYear,
    ];

    /// Nominal interval in days.
    pub fn days(&self) -> i64 {
        match self {
            CheckInFrequency::TwiceAMonth => 15,
            CheckInFrequency::Monthly => 30,
            CheckInFrequency::Quarterly => 90,
            CheckInFrequency::Semiannually => 180,
            CheckInFrequency::TwiceAYear => 180,
        }
    }

    /// Label as stored in the DB and shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            CheckInFrequency::TwiceAMonth => "Twice a Month",
            CheckInFrequency::Monthly => "Monthly",
            CheckInFrequency::Quarterly => "Quarterly",
            CheckInFrequency::Semiannually => "Semiannually",
            CheckInFrequency::TwiceAYear => "Twice a Year",
        }
    }

    /// Inverse of `label` (exact match only)
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == s)
    }

    /// Helper: accept user input as a label (any case) or as a slug
    /// such as `twice-a-month`.
    pub fn from_input(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|f| f.label().to_lowercase() == normalized)
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        Self::from_input(s).ok_or_else(|| AppError::InvalidFrequency(s.to_string()))
    }
}

impl fmt::Display for CheckInFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
