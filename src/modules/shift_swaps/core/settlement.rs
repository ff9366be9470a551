// Settlement planning: which schedule rows change to what when a swap is approved.
//
// Purpose
// - Turn the captured source rows into an ordered list of store mutations.
//
// Boundaries
// - Pure. Every payload is read from the captured rows, never from rows already written,
//   so the plan is the same whatever order the store applies it in.
//
// Naming
// - RA1: requester's entry on date1 (the entry offered by the requester).
// - RB2: target's entry on date2 (the entry asked for).
// - RB1: target's entry on date1, if any.
// - RA2: requester's entry on date2, if any. Only consulted when date1 != date2.

use crate::modules::shift_swaps::core::schedule::{ScheduleEntry, SchedulePayload};
use crate::shared::core::primitives::{EmployeeId, ScheduleId};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleMutation {
    Update {
        schedule_id: ScheduleId,
        payload: SchedulePayload,
    },
    Insert {
        employee_id: EmployeeId,
        date: NaiveDate,
        payload: SchedulePayload,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct SettlementSources<'a> {
    pub requester_id: EmployeeId,
    pub target_id: EmployeeId,
    pub requester_entry: &'a ScheduleEntry,
    pub target_entry: &'a ScheduleEntry,
    pub target_on_requester_day: Option<&'a ScheduleEntry>,
    pub requester_on_target_day: Option<&'a ScheduleEntry>,
}

impl SettlementSources<'_> {
    pub fn is_same_day(&self) -> bool {
        self.requester_entry.date == self.target_entry.date
    }
}

pub fn plan_settlement(sources: &SettlementSources<'_>) -> Vec<ScheduleMutation> {
    let mut mutations = Vec::with_capacity(4);

    exchange_on_day(
        &mut mutations,
        sources.requester_entry,
        sources.target_id,
        sources.target_on_requester_day,
    );

    if !sources.is_same_day() {
        exchange_on_day(
            &mut mutations,
            sources.target_entry,
            sources.requester_id,
            sources.requester_on_target_day,
        );
    }

    mutations
}

/// `holder` takes the counterpart's payload (or the absence default) and the counterpart takes
/// the holder's original payload, inserting a row for `counterpart_owner` when none exists.
fn exchange_on_day(
    mutations: &mut Vec<ScheduleMutation>,
    holder: &ScheduleEntry,
    counterpart_owner: EmployeeId,
    counterpart: Option<&ScheduleEntry>,
) {
    mutations.push(ScheduleMutation::Update {
        schedule_id: holder.id,
        payload: SchedulePayload::of_or_absent(counterpart),
    });

    match counterpart {
        Some(existing) => mutations.push(ScheduleMutation::Update {
            schedule_id: existing.id,
            payload: holder.payload.clone(),
        }),
        None => mutations.push(ScheduleMutation::Insert {
            employee_id: counterpart_owner,
            date: holder.date,
            payload: holder.payload.clone(),
        }),
    }
}
