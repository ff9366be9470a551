use crate::modules::shift_swaps::adapters::outbound::roster_store_in_memory::InMemoryRosterStore;
use crate::modules::shift_swaps::use_cases::approve_swap::handler::ApproveSwapHandler;
use crate::modules::shift_swaps::use_cases::cancel_swap::handler::CancelSwapHandler;
use crate::modules::shift_swaps::use_cases::list_swaps::handler::ListSwapsHandler;
use crate::modules::shift_swaps::use_cases::propose_swap::handler::ProposeSwapHandler;
use crate::modules::shift_swaps::use_cases::reject_swap::handler::RejectSwapHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub propose_handler: Arc<ProposeSwapHandler<InMemoryRosterStore>>,
    pub list_handler: Arc<ListSwapsHandler<InMemoryRosterStore>>,
    pub approve_handler: Arc<ApproveSwapHandler<InMemoryRosterStore>>,
    pub reject_handler: Arc<RejectSwapHandler<InMemoryRosterStore>>,
    pub cancel_handler: Arc<CancelSwapHandler<InMemoryRosterStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryRosterStore>) -> Self {
        Self {
            propose_handler: Arc::new(ProposeSwapHandler::new(store.clone())),
            list_handler: Arc::new(ListSwapsHandler::new(store.clone())),
            approve_handler: Arc::new(ApproveSwapHandler::new(store.clone())),
            reject_handler: Arc::new(RejectSwapHandler::new(store.clone())),
            cancel_handler: Arc::new(CancelSwapHandler::new(store)),
        }
    }
}
