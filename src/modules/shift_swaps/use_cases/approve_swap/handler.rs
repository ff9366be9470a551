// Approval settles a swap: both employees exchange their assignments and the request is closed.
//
// Flow
// - Lock the request, then read the two referenced rows (RA1, RB2) and the counterparts (RB1, RA2).
// - Plan every mutation from the captured rows, apply them, close the request, commit.
// - Any error drops the transaction, so nothing of the settlement becomes visible.

use crate::modules::shift_swaps::adapters::outbound::roster_store::{
    RosterStore, RosterTransaction, ScheduleStore, StoreError, SwapLedger,
};
use crate::modules::shift_swaps::core::errors::SwapError;
use crate::modules::shift_swaps::core::schedule::NewScheduleEntry;
use crate::modules::shift_swaps::core::settlement::{
    ScheduleMutation, SettlementSources, plan_settlement,
};
use crate::modules::shift_swaps::core::swap_request::{SwapRequest, SwapStatus};
use crate::modules::shift_swaps::use_cases::approve_swap::command::ApproveSwap;
use crate::modules::shift_swaps::use_cases::approve_swap::decide::decide_approve;
use crate::modules::shift_swaps::use_cases::approve_swap::decision::Decision;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct ApproveSwapHandler<TStore>
where
    TStore: RosterStore,
{
    store: Arc<TStore>,
}

impl<TStore> ApproveSwapHandler<TStore>
where
    TStore: RosterStore,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: ApproveSwap) -> Result<SwapRequest, SwapError> {
        let mut tx = self.store.begin().await?;

        let swap = tx.find_swap_for_update(command.swap_id).await?;
        let (requester_entry, target_entry) = match &swap {
            Some(swap) => (
                tx.find_schedule_by_id(swap.requester_schedule_id).await?,
                tx.find_schedule_by_id(swap.target_schedule_id).await?,
            ),
            None => (None, None),
        };

        let (swap, requester_entry, target_entry) =
            match decide_approve(&command, swap, requester_entry, target_entry) {
                Decision::Accepted {
                    swap,
                    requester_entry,
                    target_entry,
                } => (swap, requester_entry, target_entry),
                Decision::Rejected { reason } => return Err(reason.into()),
            };

        let target_on_requester_day = tx
            .find_schedule_by_employee_and_date(swap.target_id, requester_entry.date)
            .await?;
        let requester_on_target_day = if requester_entry.date != target_entry.date {
            tx.find_schedule_by_employee_and_date(swap.requester_id, target_entry.date)
                .await?
        } else {
            None
        };

        let mutations = plan_settlement(&SettlementSources {
            requester_id: swap.requester_id,
            target_id: swap.target_id,
            requester_entry: &requester_entry,
            target_entry: &target_entry,
            target_on_requester_day: target_on_requester_day.as_ref(),
            requester_on_target_day: requester_on_target_day.as_ref(),
        });
        let mutation_count = mutations.len();

        for mutation in mutations {
            apply(&mut tx, mutation, command.decided_at).await?;
        }
        tx.update_swap_status(
            swap.id,
            SwapStatus::Approved,
            command.approver.id,
            command.decided_at,
        )
        .await?;
        tx.commit().await?;

        tracing::info!(
            swap_id = swap.id,
            approver_id = command.approver.id,
            mutations = mutation_count,
            "swap request approved and settled"
        );

        Ok(SwapRequest {
            status: SwapStatus::Approved,
            approved_by: Some(command.approver.id),
            approved_at: Some(command.decided_at),
            ..swap
        })
    }
}

async fn apply<TTx>(
    tx: &mut TTx,
    mutation: ScheduleMutation,
    at: DateTime<Utc>,
) -> Result<(), StoreError>
where
    TTx: RosterTransaction,
{
    match mutation {
        ScheduleMutation::Update {
            schedule_id,
            payload,
        } => tx.update_schedule(schedule_id, &payload, at).await,
        ScheduleMutation::Insert {
            employee_id,
            date,
            payload,
        } => tx
            .insert_schedule(NewScheduleEntry {
                employee_id,
                date,
                payload,
                created_at: at,
            })
            .await
            .map(|_| ()),
    }
}
