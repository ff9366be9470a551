// Identifiers and small value types shared by every module.
//
// Notes
// - All identifiers are database-style serial integers.
// - Dates are calendar days (`NaiveDate`). Two schedule dates are equal iff year, month and day match.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

pub type EmployeeId = i64;
pub type ScheduleId = i64;
pub type SwapRequestId = i64;
pub type UnitId = i64;
pub type ShiftId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Supervisor,
    Staff,
}

impl Role {
    /// Admins and supervisors decide on swap requests.
    pub fn is_approver(self) -> bool {
        matches!(self, Role::Admin | Role::Supervisor)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = match self {
            Role::Admin => "admin",
            Role::Supervisor => "supervisor",
            Role::Staff => "staff",
        };
        f.write_str(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "supervisor" => Ok(Role::Supervisor),
            "staff" => Ok(Role::Staff),
            _ => Err(UnknownRole(raw.to_string())),
        }
    }
}

/// The authenticated party issuing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub id: EmployeeId,
    pub role: Role,
}

impl Caller {
    pub fn new(id: EmployeeId, role: Role) -> Self {
        Self { id, role }
    }
}

/// Parse a calendar day from either `YYYY-MM-DD` or a timestamp, dropping any time of day.
pub fn parse_calendar_day(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|timestamp| timestamp.date())
}

pub fn deserialize_calendar_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_day(&raw).map_err(serde::de::Error::custom)
}
