// Ports for the schedule store and the swap ledger.
//
// Purpose
// - Let the swap use cases read and write roster rows without knowing the backend.
//
// Responsibilities
// - `RosterStore::begin` hands out an owned transaction. Every read and write goes through it.
// - `RosterTransaction::commit` publishes staged writes atomically. Dropping a transaction
//   without committing rolls it back.
// - `SwapLedger::find_swap_for_update` is an exclusive read: a second transaction asking for the
//   same request waits until the first one ends.
// - Inserting a second schedule entry for the same employee and day fails with `UniqueViolation`.

use crate::modules::shift_swaps::core::schedule::{NewScheduleEntry, ScheduleEntry, SchedulePayload};
use crate::modules::shift_swaps::core::swap_request::{NewSwapRequest, SwapRequest, SwapStatus};
use crate::shared::core::primitives::{EmployeeId, ScheduleId, SwapRequestId};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("schedule entry already exists for employee {employee_id} on {date}")]
    UniqueViolation {
        employee_id: EmployeeId,
        date: NaiveDate,
    },

    #[error("{table} row {id} no longer exists")]
    MissingRow { table: &'static str, id: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ScheduleStore: Send {
    async fn find_schedule_by_id(
        &mut self,
        id: ScheduleId,
    ) -> Result<Option<ScheduleEntry>, StoreError>;

    async fn find_schedule_by_employee_and_date(
        &mut self,
        employee_id: EmployeeId,
        date: NaiveDate,
    ) -> Result<Option<ScheduleEntry>, StoreError>;

    async fn insert_schedule(&mut self, entry: NewScheduleEntry)
    -> Result<ScheduleEntry, StoreError>;

    async fn update_schedule(
        &mut self,
        id: ScheduleId,
        payload: &SchedulePayload,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;
}

#[async_trait]
pub trait SwapLedger: Send {
    async fn insert_swap(&mut self, request: NewSwapRequest) -> Result<SwapRequest, StoreError>;

    async fn find_swap_for_update(
        &mut self,
        id: SwapRequestId,
    ) -> Result<Option<SwapRequest>, StoreError>;

    async fn update_swap_status(
        &mut self,
        id: SwapRequestId,
        status: SwapStatus,
        decided_by: EmployeeId,
        decided_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Requests where the employee is requester or target, newest first.
    async fn list_swaps_for_employee(
        &mut self,
        employee_id: EmployeeId,
    ) -> Result<Vec<SwapRequest>, StoreError>;

    /// All requests, or those with the given status, newest first.
    async fn list_swaps_by_status(
        &mut self,
        status: Option<SwapStatus>,
    ) -> Result<Vec<SwapRequest>, StoreError>;
}

#[async_trait]
pub trait RosterTransaction: ScheduleStore + SwapLedger + Send {
    async fn commit(self) -> Result<(), StoreError>;
}

#[async_trait]
pub trait RosterStore: Send + Sync + 'static {
    type Transaction: RosterTransaction + 'static;

    async fn begin(&self) -> Result<Self::Transaction, StoreError>;
}
