//! Alumni records and the precomputed aggregates shipped alongside them

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Mentoring support status of an alumnus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SupportStatus {
    Yes,
    No,
    #[default]
    #[serde(other)]
    Unknown,
}

impl SupportStatus {
    /// All statuses in display order
    pub const ALL: [SupportStatus; 3] = [SupportStatus::Yes, SupportStatus::No, SupportStatus::Unknown];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportStatus::Yes => "Yes",
            SupportStatus::No => "No",
            SupportStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SupportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phone identifier as shipped in the payload, either a JSON number or a string.
///
/// Stored in its stringified form so searching and formatting see exactly
/// what the source contained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MobileNumber(String);

impl MobileNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the leading integer, the way a lenient numeric parse reads it.
    ///
    /// Leading whitespace and a single sign are accepted; anything without a
    /// digit right after that yields `None`.
    pub fn numeric_value(&self) -> Option<f64> {
        let trimmed = self.0.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits: &str = {
            let end = rest
                .char_indices()
                .find(|(_, c)| !c.is_ascii_digit())
                .map(|(idx, _)| idx)
                .unwrap_or(rest.len());
            &rest[..end]
        };

        if digits.is_empty() {
            return None;
        }

        let value: f64 = digits.parse().ok()?;
        Some(if negative { -value } else { value })
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MobileNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => MobileNumber(number_text(&n)),
            Raw::Text(s) => MobileNumber(s),
        })
    }
}

/// Integral values print without a fractional part, even when written as `9876543210.0`
fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 => (v as i64).to_string(),
        Some(v) => v.to_string(),
        None => n.to_string(),
    }
}

/// A single alumnus as listed in the dataset
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AlumniRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub batch: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub state: String,

    #[serde(default)]
    pub org_name: Option<String>,

    #[serde(default)]
    pub designation: Option<String>,

    #[serde(default)]
    pub mobile: Option<MobileNumber>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub support_status: SupportStatus,

    #[serde(default)]
    pub linkedin: Option<String>,
}

/// Alumni count for one batch
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchDistributionEntry {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub batch: String,
    #[serde(default)]
    pub count: u64,
}

/// Alumni count and share for one state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StateDistributionEntry {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub state: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub percentage: f64,
}

/// Headline figures, each optional in the payload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    #[serde(default)]
    pub total_alumni: Option<u64>,
    #[serde(default)]
    pub total_batches: Option<u64>,
    #[serde(default)]
    pub support_yes: Option<u64>,
    #[serde(default)]
    pub support_no: Option<u64>,
    #[serde(default)]
    pub support_unknown: Option<u64>,
    #[serde(default)]
    pub states_represented: Option<u64>,
}

impl SummaryStats {
    /// Batch count shown when the payload does not carry one
    pub const DEFAULT_TOTAL_BATCHES: u64 = 16;

    pub fn total_alumni(&self) -> u64 {
        self.total_alumni.unwrap_or(0)
    }

    pub fn total_batches(&self) -> u64 {
        self.total_batches.unwrap_or(Self::DEFAULT_TOTAL_BATCHES)
    }

    pub fn support_yes(&self) -> u64 {
        self.support_yes.unwrap_or(0)
    }

    pub fn support_no(&self) -> u64 {
        self.support_no.unwrap_or(0)
    }

    pub fn support_unknown(&self) -> u64 {
        self.support_unknown.unwrap_or(0)
    }

    pub fn states_represented(&self) -> u64 {
        self.states_represented.unwrap_or(0)
    }

    /// Count for one support status
    pub fn support_count(&self, status: SupportStatus) -> u64 {
        match status {
            SupportStatus::Yes => self.support_yes(),
            SupportStatus::No => self.support_no(),
            SupportStatus::Unknown => self.support_unknown(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D>(deserializer: D) -> Result<SupportStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<SupportStatus>::deserialize(deserializer)?.unwrap_or_default())
}
