use crate::month::CalendarView;
use crate::selection::SelectionState;
use crate::store::VoteStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Everything one running poll owns: the vote feed plus the
/// session-scoped view and selection state. Session state is rebuilt
/// fresh on every process start.
#[derive(Debug)]
pub struct PollState {
    pub votes: VoteStore,
    pub view: CalendarView,
    pub selection: SelectionState,
}

#[derive(Clone)]
pub struct AppState {
    pub data: Arc<Mutex<PollState>>,
}

impl AppState {
    pub fn new(votes: VoteStore, view: CalendarView) -> Self {
        Self {
            data: Arc::new(Mutex::new(PollState {
                votes,
                view,
                selection: SelectionState::default(),
            })),
        }
    }
}
