// Schedule entries: one employee's assignment for one calendar day.
//
// Invariants
// - At most one entry per (employee_id, date). The store enforces it on insert.
// - The swap engine only updates or inserts entries, it never deletes them.

use crate::shared::core::primitives::{EmployeeId, ScheduleId, ShiftId, UnitId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    Absent,
    Leave,
}

/// The part of a schedule entry that moves between employees when a swap settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePayload {
    pub unit_id: Option<UnitId>,
    pub shift_id: Option<ShiftId>,
    #[serde(default)]
    pub status: ScheduleStatus,
    #[serde(default)]
    pub notes: String,
}

/// Payload assumed for a day on which an employee has no entry: an implicit day off.
pub const DEFAULT_ABSENCE_PAYLOAD: SchedulePayload = SchedulePayload {
    unit_id: None,
    shift_id: None,
    status: ScheduleStatus::Leave,
    notes: String::new(),
};

impl SchedulePayload {
    /// Payload of an entry if it exists, the absence default otherwise.
    pub fn of_or_absent(entry: Option<&ScheduleEntry>) -> SchedulePayload {
        entry
            .map(|e| e.payload.clone())
            .unwrap_or(DEFAULT_ABSENCE_PAYLOAD)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: ScheduleId,
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub payload: SchedulePayload,
    pub updated_at: DateTime<Utc>,
}

/// Row to insert; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScheduleEntry {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub payload: SchedulePayload,
    pub created_at: DateTime<Utc>,
}
