use crate::dispatch::{DispatchFn, DispatchResult, Dispatchable};
use crate::enhancer::Enhancer;
use crate::error::StoreError;
use crate::reducer::Reducer;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, Weak};
use tokio::task::JoinHandle;

/// Callback invoked with the new state after every reduced action
pub type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Handle returned by [`Store::subscribe`]
pub type SubscriptionId = u64;

/// Builds a store from a reducer and an initial state; enhancers wrap it
pub type StoreCreator<S, A> =
    Box<dyn FnOnce(Reducer<S, A>, S) -> Result<Store<S, A>, StoreError> + Send>;

/// Lock a mutex, recovering the data if a previous holder panicked
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct StoreInner<S, A> {
    state: Mutex<S>,
    reducer: Reducer<S, A>,
    listeners: Mutex<Vec<(SubscriptionId, Listener<S>)>>,
    next_listener_id: AtomicU64,
}

impl<S: Clone, A> StoreInner<S, A> {
    fn reduce(&self, action: &A) {
        let state = {
            let mut state = lock(&self.state);
            let next = (self.reducer)(state.clone(), action);
            *state = next;
            state.clone()
        };

        // Snapshot so listeners may (un)subscribe while being notified
        let listeners: Vec<Listener<S>> = lock(&self.listeners)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&state);
        }
    }
}

/// Handle to one state value of type `S`, changed only by dispatching `A`s
///
/// Every dispatch goes through the installed chain (plain reducer call for a
/// store built without enhancers). The reducer receives the current state by
/// value and its return value replaces it, after which subscribers are
/// notified. Cloning gives another handle to the same state and chain.
pub struct Store<S, A> {
    inner: Arc<StoreInner<S, A>>,
    dispatch: Arc<OnceLock<DispatchFn<S, A>>>,
    /// Store this one was enhanced from; keeps its chain reachable for the
    /// `StoreApi` handles held by inner middleware.
    wrapped: Option<Arc<Store<S, A>>>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dispatch: Arc::clone(&self.dispatch),
            wrapped: self.wrapped.clone(),
        }
    }
}

impl<S, A> Store<S, A>
where
    S: Clone + Send + 'static,
    A: Send + 'static,
{
    /// Create a store without any enhancer; dispatch goes straight to the reducer
    pub fn new(reducer: Reducer<S, A>, initial_state: S) -> Self {
        let inner = Arc::new(StoreInner {
            state: Mutex::new(initial_state),
            reducer,
            listeners: Mutex::new(Vec::new()),
            next_listener_id: AtomicU64::new(0),
        });

        let reducing = Arc::clone(&inner);
        let dispatch: DispatchFn<S, A> = Arc::new(move |dispatchable: Dispatchable<S, A>| {
            match dispatchable {
                Dispatchable::Action(action) => {
                    reducing.reduce(&action);
                    Ok(Some(action))
                }
                Dispatchable::Thunk(_) => {
                    log::warn!("Store: thunk reached the reducer, rejecting it");
                    Err(StoreError::UnhandledThunk)
                }
            }
        });

        let cell = Arc::new(OnceLock::new());
        let _ = cell.set(dispatch);

        Self {
            inner,
            dispatch: cell,
            wrapped: None,
        }
    }

    /// Start a new store over the same state whose dispatch chain is not set yet
    ///
    /// Used by enhancers: take `api()` from the result, build the chain, then
    /// install it with [`Store::install_dispatch`].
    pub fn enhance_from(store: Store<S, A>) -> Self {
        Self {
            inner: Arc::clone(&store.inner),
            dispatch: Arc::new(OnceLock::new()),
            wrapped: Some(Arc::new(store)),
        }
    }

    /// Install the dispatch chain of a store created with [`Store::enhance_from`]
    ///
    /// Returns `false` if the store already had a chain.
    pub fn install_dispatch(&self, dispatch: DispatchFn<S, A>) -> bool {
        self.dispatch.set(dispatch).is_ok()
    }

    /// The outermost stage of this store's dispatch chain
    pub fn dispatch_fn(&self) -> Result<DispatchFn<S, A>, StoreError> {
        self.dispatch
            .get()
            .cloned()
            .ok_or(StoreError::DispatchWhileConstructing)
    }

    /// Dispatch an action or thunk through the full chain
    pub fn dispatch<D>(&self, dispatchable: D) -> DispatchResult<A>
    where
        D: Into<Dispatchable<S, A>>,
    {
        let dispatch = self.dispatch_fn()?;
        dispatch(dispatchable.into())
    }

    /// Get a clone of the current state
    pub fn state(&self) -> S {
        lock(&self.inner.state).clone()
    }

    /// Register a listener called with the new state after every reduced action
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        let listener: Listener<S> = Arc::new(listener);
        lock(&self.inner.listeners).push((id, listener));
        id
    }

    /// Remove a listener; returns `false` if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = lock(&self.inner.listeners);
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Handle for middleware and thunks
    pub fn api(&self) -> StoreApi<S, A> {
        StoreApi {
            inner: Arc::clone(&self.inner),
            dispatch: Arc::downgrade(&self.dispatch),
        }
    }
}

/// Store access handed to middleware and thunks
///
/// `dispatch` re-enters the chain from the outermost stage of the store the
/// middleware was applied to. The handle does not keep the store alive.
pub struct StoreApi<S, A> {
    inner: Arc<StoreInner<S, A>>,
    dispatch: Weak<OnceLock<DispatchFn<S, A>>>,
}

impl<S, A> Clone for StoreApi<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dispatch: Weak::clone(&self.dispatch),
        }
    }
}

impl<S, A> StoreApi<S, A>
where
    S: Clone + Send + 'static,
    A: Send + 'static,
{
    /// Get a clone of the current state
    pub fn state(&self) -> S {
        lock(&self.inner.state).clone()
    }

    /// Dispatch an action or thunk through the full chain
    pub fn dispatch<D>(&self, dispatchable: D) -> DispatchResult<A>
    where
        D: Into<Dispatchable<S, A>>,
    {
        let dispatch = {
            let cell = self.dispatch.upgrade().ok_or(StoreError::StoreDropped)?;
            let dispatch = cell.get().cloned();
            dispatch.ok_or(StoreError::DispatchWhileConstructing)?
        };
        dispatch(dispatchable.into())
    }

    /// Dispatch from a tokio task
    ///
    /// The action goes through the chain when the task runs, not when this is
    /// called. Await the handle to get the dispatch result.
    pub fn spawn_dispatch<D>(&self, dispatchable: D) -> JoinHandle<DispatchResult<A>>
    where
        D: Into<Dispatchable<S, A>>,
    {
        let api = self.clone();
        let dispatchable = dispatchable.into();
        tokio::spawn(async move { api.dispatch(dispatchable) })
    }
}

/// Create a store, optionally decorated by an enhancer
///
/// Without an enhancer the store dispatches straight to the reducer. With one,
/// the enhancer receives the base creator and decides how to build the store.
pub fn create_store<S, A>(
    reducer: Reducer<S, A>,
    initial_state: S,
    enhancer: Option<&dyn Enhancer<S, A>>,
) -> Result<Store<S, A>, StoreError>
where
    S: Clone + Send + 'static,
    A: Send + 'static,
{
    match enhancer {
        Some(enhancer) => {
            log::debug!("create_store: building enhanced store");
            let create = enhancer.enhance(base_creator());
            create(reducer, initial_state)
        }
        None => {
            log::debug!("create_store: building base store");
            Ok(Store::new(reducer, initial_state))
        }
    }
}

fn base_creator<S, A>() -> StoreCreator<S, A>
where
    S: Clone + Send + 'static,
    A: Send + 'static,
{
    Box::new(
        |reducer: Reducer<S, A>, initial_state: S| -> Result<Store<S, A>, StoreError> {
            Ok(Store::new(reducer, initial_state))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::{identity, reducer};
    use std::sync::atomic::AtomicUsize;

    #[derive(Debug, Clone, PartialEq)]
    enum Counter {
        Increment,
        Add(i64),
        Reset,
    }

    fn counter_store(initial: i64) -> Store<i64, Counter> {
        Store::new(
            reducer(|count: i64, action: &Counter| match action {
                Counter::Increment => count + 1,
                Counter::Add(n) => count + n,
                Counter::Reset => 0,
            }),
            initial,
        )
    }

    #[test]
    fn test_store_dispatch_reduces_state() {
        let store = counter_store(0);

        store.dispatch(Counter::Increment).unwrap();
        store.dispatch(Counter::Add(41)).unwrap();
        assert_eq!(store.state(), 42);

        store.dispatch(Counter::Reset).unwrap();
        assert_eq!(store.state(), 0);
    }

    #[test]
    fn test_store_dispatch_returns_action() {
        let store = counter_store(0);
        let returned = store.dispatch(Counter::Add(3)).unwrap();
        assert_eq!(returned, Some(Counter::Add(3)));
    }

    #[test]
    fn test_store_keeps_initial_state_until_dispatch() {
        let store = counter_store(7);
        assert_eq!(store.state(), 7);
    }

    #[test]
    fn test_store_rejects_thunk_without_middleware() {
        let store = counter_store(0);
        let result = store.dispatch(Dispatchable::thunk(|api: &StoreApi<i64, Counter>| {
            api.dispatch(Counter::Increment)
        }));
        assert!(matches!(result, Err(StoreError::UnhandledThunk)));
        assert_eq!(store.state(), 0);
    }

    #[test]
    fn test_store_clone_shares_state() {
        let store = counter_store(0);
        let other = store.clone();
        other.dispatch(Counter::Increment).unwrap();
        assert_eq!(store.state(), 1);
    }

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let store = counter_store(0);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let id = store.subscribe(move |state: &i64| sink.lock().unwrap().push(*state));

        store.dispatch(Counter::Increment).unwrap();
        store.dispatch(Counter::Increment).unwrap();
        assert!(store.unsubscribe(id));
        store.dispatch(Counter::Increment).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn test_listener_may_dispatch() {
        let store = counter_store(0);
        let api = store.api();
        store.subscribe(move |state: &i64| {
            if *state == 1 {
                api.dispatch(Counter::Add(10)).unwrap();
            }
        });

        store.dispatch(Counter::Increment).unwrap();
        assert_eq!(store.state(), 11);
    }

    #[test]
    fn test_api_reads_state_and_dispatches() {
        let store = counter_store(5);
        let api = store.api();

        api.dispatch(Counter::Increment).unwrap();
        assert_eq!(api.state(), 6);
        assert_eq!(store.state(), 6);
    }

    #[test]
    fn test_api_fails_after_store_dropped() {
        let store = counter_store(0);
        let api = store.api();
        drop(store);

        let result = api.dispatch(Counter::Increment);
        assert!(matches!(result, Err(StoreError::StoreDropped)));
    }

    #[test]
    fn test_enhanced_store_without_chain_refuses_dispatch() {
        let enhanced = Store::enhance_from(counter_store(0));
        let result = enhanced.dispatch(Counter::Increment);
        assert!(matches!(result, Err(StoreError::DispatchWhileConstructing)));

        let base = counter_store(0).dispatch_fn().unwrap();
        assert!(enhanced.install_dispatch(base.clone()));
        assert!(!enhanced.install_dispatch(base));
    }

    #[test]
    fn test_create_store_without_enhancer() {
        let store = create_store(identity::<Vec<u8>, Counter>(), vec![1], None).unwrap();
        store.dispatch(Counter::Reset).unwrap();
        assert_eq!(store.state(), vec![1]);
    }

    #[test]
    fn test_panicking_reducer_does_not_poison_store() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);
        let store: Store<i64, Counter> = Store::new(
            reducer(move |count: i64, action: &Counter| {
                counted.fetch_add(1, Ordering::SeqCst);
                match action {
                    Counter::Reset => panic!("reset is not supported"),
                    _ => count + 1,
                }
            }),
            0,
        );

        let api = store.api();
        let outcome =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| api.dispatch(Counter::Reset)));
        assert!(outcome.is_err());

        store.dispatch(Counter::Increment).unwrap();
        assert_eq!(store.state(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_spawn_dispatch_runs_on_task() {
        let store = counter_store(0);
        let handle = store.api().spawn_dispatch(Counter::Add(2));

        let returned = handle.await.unwrap().unwrap();
        assert_eq!(returned, Some(Counter::Add(2)));
        assert_eq!(store.state(), 2);
    }
}
