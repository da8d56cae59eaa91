//! RecordingMiddleware - appends every dispatched action to an `ActionLog`

use crate::action_log::ActionLog;
use crate::config::TestStoreConfig;
use redux_core::{DispatchFn, DispatchResult, Dispatchable, Middleware, StoreApi};
use std::fmt::Debug;

/// Records each action that reaches it, then forwards it unchanged
///
/// Thunks are not actions: they are passed on without being recorded. Put the
/// recorder behind `ThunkMiddleware` so it sees the actions a thunk issues.
pub struct RecordingMiddleware<A> {
    log: ActionLog<A>,
    trace: bool,
    label: String,
}

impl<A> RecordingMiddleware<A> {
    pub fn new(log: ActionLog<A>, config: &TestStoreConfig) -> Self {
        Self {
            log,
            trace: config.trace_actions,
            label: config.label.clone(),
        }
    }
}

impl<S, A> Middleware<S, A> for RecordingMiddleware<A>
where
    A: Clone + Debug + Send + 'static,
{
    fn handle(
        &self,
        action: Dispatchable<S, A>,
        _api: &StoreApi<S, A>,
        next: &DispatchFn<S, A>,
    ) -> DispatchResult<A> {
        match action.as_action() {
            Some(recorded) => {
                if self.trace {
                    log::debug!("{}: recorded action {:?}", self.label, recorded);
                }
                self.log.record(recorded.clone());
            }
            None => log::trace!("{}: forwarding thunk unrecorded", self.label),
        }

        next(action)
    }
}
