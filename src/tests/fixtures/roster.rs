// Shared roster fixture: the store seeded from `json/roster_seed.json`.
//
// Employee 10 works the night shift on 2026-01-05 (schedule 501), employee 20 the morning shift
// in sterilisation on 2026-01-07 (schedule 502), employee 30 the morning shift in packing on
// 2026-01-05 (schedule 503).

use crate::modules::shift_swaps::adapters::outbound::roster_store_in_memory::{
    InMemoryRosterStore, RosterSeed,
};
use crate::modules::shift_swaps::core::schedule::ScheduleEntry;
use crate::shared::core::primitives::{EmployeeId, ScheduleId, ShiftId, UnitId};
use chrono::{DateTime, NaiveDate, Utc};
use rstest::fixture;

pub const ROSTER_SEED_PATH: &str = "./src/tests/fixtures/json/roster_seed.json";

pub const EMPLOYEE_A: EmployeeId = 10;
pub const EMPLOYEE_B: EmployeeId = 20;
pub const EMPLOYEE_C: EmployeeId = 30;
pub const SUPERVISOR: EmployeeId = 90;

pub const A_SCHEDULE: ScheduleId = 501;
pub const B_SCHEDULE: ScheduleId = 502;
pub const C_SCHEDULE: ScheduleId = 503;

pub const DAY_1: NaiveDate = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
pub const DAY_2: NaiveDate = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();

pub const PAGI: ShiftId = 1;
pub const MALAM: ShiftId = 3;
pub const PACKING: UnitId = 12;
pub const STERILISASI: UnitId = 13;

/// Fixed clock: `ms` milliseconds after 2026-01-01T00:00:00Z.
pub fn at(ms: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(1_767_225_600_000 + ms).unwrap()
}

#[fixture]
pub fn seeded_store() -> InMemoryRosterStore {
    RosterSeed::from_file(ROSTER_SEED_PATH)
        .unwrap()
        .into_store(at(0))
        .unwrap()
}

pub fn entry_on(
    rows: &[ScheduleEntry],
    employee_id: EmployeeId,
    date: NaiveDate,
) -> Option<&ScheduleEntry> {
    rows.iter()
        .find(|r| r.employee_id == employee_id && r.date == date)
}

pub fn entry_by_id(rows: &[ScheduleEntry], id: ScheduleId) -> &ScheduleEntry {
    rows.iter()
        .find(|r| r.id == id)
        .unwrap_or_else(|| panic!("schedule {id} missing"))
}
