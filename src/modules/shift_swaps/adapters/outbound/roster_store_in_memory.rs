// In memory implementation of the RosterStore port.
//
// Purpose
// - Run the service and its tests without a database.
//
// Responsibilities
// - Serialize transactions: `begin` holds the store-wide lock until the transaction ends,
//   which makes every read exclusive and every transaction serializable.
// - Stage writes on a private copy of the tables and publish them on commit only.
// - Enforce one schedule entry per employee and day.
// - Load schedule rows from a JSON roster seed.

use crate::modules::shift_swaps::adapters::outbound::roster_store::{
    RosterStore, RosterTransaction, ScheduleStore, StoreError, SwapLedger,
};
use crate::modules::shift_swaps::core::schedule::{NewScheduleEntry, ScheduleEntry, SchedulePayload};
use crate::modules::shift_swaps::core::swap_request::{NewSwapRequest, SwapRequest, SwapStatus};
use crate::shared::core::primitives::{
    EmployeeId, ScheduleId, SwapRequestId, deserialize_calendar_day,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Debug, Clone, Default)]
struct RosterTables {
    schedules: BTreeMap<ScheduleId, ScheduleEntry>,
    swaps: BTreeMap<SwapRequestId, SwapRequest>,
    last_schedule_id: ScheduleId,
    last_swap_id: SwapRequestId,
}

impl RosterTables {
    fn schedule_on(&self, employee_id: EmployeeId, date: NaiveDate) -> Option<&ScheduleEntry> {
        self.schedules
            .values()
            .find(|e| e.employee_id == employee_id && e.date == date)
    }

    fn insert_schedule(&mut self, entry: NewScheduleEntry) -> Result<ScheduleEntry, StoreError> {
        if self.schedule_on(entry.employee_id, entry.date).is_some() {
            return Err(StoreError::UniqueViolation {
                employee_id: entry.employee_id,
                date: entry.date,
            });
        }
        self.last_schedule_id += 1;
        let row = ScheduleEntry {
            id: self.last_schedule_id,
            employee_id: entry.employee_id,
            date: entry.date,
            payload: entry.payload,
            updated_at: entry.created_at,
        };
        self.schedules.insert(row.id, row.clone());
        Ok(row)
    }

    fn newest_first(mut swaps: Vec<SwapRequest>) -> Vec<SwapRequest> {
        swaps.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        swaps
    }
}

#[derive(Default)]
pub struct InMemoryRosterStore {
    tables: Arc<Mutex<RosterTables>>,
    foreign_inserts: Arc<Mutex<Vec<NewScheduleEntry>>>,
    is_offline: bool,
}

impl InMemoryRosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with schedule rows, keeping their identifiers.
    pub fn seeded(entries: impl IntoIterator<Item = ScheduleEntry>) -> Result<Self, StoreError> {
        let mut tables = RosterTables::default();
        for entry in entries {
            if tables.schedule_on(entry.employee_id, entry.date).is_some() {
                return Err(StoreError::UniqueViolation {
                    employee_id: entry.employee_id,
                    date: entry.date,
                });
            }
            if tables.schedules.contains_key(&entry.id) {
                return Err(StoreError::Backend(format!(
                    "duplicate schedule id {} in seed",
                    entry.id
                )));
            }
            tables.last_schedule_id = tables.last_schedule_id.max(entry.id);
            tables.schedules.insert(entry.id, entry);
        }
        Ok(Self {
            tables: Arc::new(Mutex::new(tables)),
            ..Self::default()
        })
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Queue a row that another writer commits right before the next schedule insert made
    /// inside any transaction of this store.
    pub async fn simulate_concurrent_insert(&self, entry: NewScheduleEntry) {
        self.foreign_inserts.lock().await.push(entry);
    }

    /// Removes a committed row the way a direct roster edit outside the swap workflow would.
    pub async fn delete_schedule(&self, id: ScheduleId) -> Option<ScheduleEntry> {
        self.tables.lock().await.schedules.remove(&id)
    }

    /// Committed schedule rows, ordered by id.
    pub async fn schedules(&self) -> Vec<ScheduleEntry> {
        self.tables.lock().await.schedules.values().cloned().collect()
    }

    /// Committed swap requests, ordered by id.
    pub async fn swaps(&self) -> Vec<SwapRequest> {
        self.tables.lock().await.swaps.values().cloned().collect()
    }
}

#[async_trait]
impl RosterStore for InMemoryRosterStore {
    type Transaction = InMemoryRosterTransaction;

    async fn begin(&self) -> Result<Self::Transaction, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Roster store offline".into()));
        }
        let committed = self.tables.clone().lock_owned().await;
        let staged = committed.clone();
        Ok(InMemoryRosterTransaction {
            committed,
            staged,
            foreign_inserts: self.foreign_inserts.clone(),
        })
    }
}

pub struct InMemoryRosterTransaction {
    committed: OwnedMutexGuard<RosterTables>,
    staged: RosterTables,
    foreign_inserts: Arc<Mutex<Vec<NewScheduleEntry>>>,
}

impl InMemoryRosterTransaction {
    async fn land_foreign_inserts(&mut self) {
        let pending = std::mem::take(&mut *self.foreign_inserts.lock().await);
        for entry in pending {
            // Identifiers behave like a sequence: never reused, even after a rollback.
            self.committed.last_schedule_id = self
                .committed
                .last_schedule_id
                .max(self.staged.last_schedule_id);
            match self.committed.insert_schedule(entry) {
                Ok(row) => {
                    self.staged.last_schedule_id = row.id;
                    self.staged.schedules.insert(row.id, row);
                }
                Err(error) => tracing::warn!(%error, "dropped simulated concurrent insert"),
            }
        }
    }
}

#[async_trait]
impl ScheduleStore for InMemoryRosterTransaction {
    async fn find_schedule_by_id(
        &mut self,
        id: ScheduleId,
    ) -> Result<Option<ScheduleEntry>, StoreError> {
        Ok(self.staged.schedules.get(&id).cloned())
    }

    async fn find_schedule_by_employee_and_date(
        &mut self,
        employee_id: EmployeeId,
        date: NaiveDate,
    ) -> Result<Option<ScheduleEntry>, StoreError> {
        Ok(self.staged.schedule_on(employee_id, date).cloned())
    }

    async fn insert_schedule(
        &mut self,
        entry: NewScheduleEntry,
    ) -> Result<ScheduleEntry, StoreError> {
        self.land_foreign_inserts().await;
        self.staged.insert_schedule(entry)
    }

    async fn update_schedule(
        &mut self,
        id: ScheduleId,
        payload: &SchedulePayload,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let row = self
            .staged
            .schedules
            .get_mut(&id)
            .ok_or(StoreError::MissingRow {
                table: "schedules",
                id,
            })?;
        row.payload = payload.clone();
        row.updated_at = updated_at;
        Ok(())
    }
}

#[async_trait]
impl SwapLedger for InMemoryRosterTransaction {
    async fn insert_swap(&mut self, request: NewSwapRequest) -> Result<SwapRequest, StoreError> {
        self.staged.last_swap_id += 1;
        let row = SwapRequest {
            id: self.staged.last_swap_id,
            requester_id: request.requester_id,
            requester_schedule_id: request.requester_schedule_id,
            target_id: request.target_id,
            target_schedule_id: request.target_schedule_id,
            reason: request.reason,
            status: SwapStatus::Pending,
            approved_by: None,
            approved_at: None,
            created_at: request.created_at,
        };
        self.staged.swaps.insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_swap_for_update(
        &mut self,
        id: SwapRequestId,
    ) -> Result<Option<SwapRequest>, StoreError> {
        Ok(self.staged.swaps.get(&id).cloned())
    }

    async fn update_swap_status(
        &mut self,
        id: SwapRequestId,
        status: SwapStatus,
        decided_by: EmployeeId,
        decided_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let row = self
            .staged
            .swaps
            .get_mut(&id)
            .ok_or(StoreError::MissingRow {
                table: "shift_swaps",
                id,
            })?;
        row.status = status;
        row.approved_by = Some(decided_by);
        row.approved_at = Some(decided_at);
        Ok(())
    }

    async fn list_swaps_for_employee(
        &mut self,
        employee_id: EmployeeId,
    ) -> Result<Vec<SwapRequest>, StoreError> {
        let swaps = self
            .staged
            .swaps
            .values()
            .filter(|s| s.involves(employee_id))
            .cloned()
            .collect();
        Ok(RosterTables::newest_first(swaps))
    }

    async fn list_swaps_by_status(
        &mut self,
        status: Option<SwapStatus>,
    ) -> Result<Vec<SwapRequest>, StoreError> {
        let swaps = self
            .staged
            .swaps
            .values()
            .filter(|s| status.is_none_or(|wanted| s.status == wanted))
            .cloned()
            .collect();
        Ok(RosterTables::newest_first(swaps))
    }
}

#[async_trait]
impl RosterTransaction for InMemoryRosterTransaction {
    async fn commit(self) -> Result<(), StoreError> {
        let InMemoryRosterTransaction {
            mut committed,
            staged,
            ..
        } = self;
        *committed = staged;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read roster seed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid roster seed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("inconsistent roster seed: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedSchedule {
    pub id: ScheduleId,
    pub employee_id: EmployeeId,
    #[serde(deserialize_with = "deserialize_calendar_day")]
    pub date: NaiveDate,
    #[serde(flatten)]
    pub payload: SchedulePayload,
}

/// JSON roster seed: `{"schedules": [{"id": 1, "employee_id": 10, "date": "2026-01-05", ...}]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterSeed {
    #[serde(default)]
    pub schedules: Vec<SeedSchedule>,
}

impl RosterSeed {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn into_store(self, loaded_at: DateTime<Utc>) -> Result<InMemoryRosterStore, SeedError> {
        let entries = self.schedules.into_iter().map(|s| ScheduleEntry {
            id: s.id,
            employee_id: s.employee_id,
            date: s.date,
            payload: s.payload,
            updated_at: loaded_at,
        });
        Ok(InMemoryRosterStore::seeded(entries)?)
    }
}
