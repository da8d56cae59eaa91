//! TestStore - store factory that records every dispatched action

use crate::action_log::ActionLog;
use crate::config::TestStoreConfig;
use crate::recorder::RecordingMiddleware;
use redux_core::{
    compose, create_store, identity, ApplyMiddleware, Enhancer, Reducer, SharedEnhancer, Store,
    StoreError,
};
use serde::Serialize;
use std::fmt::Debug;
use std::sync::Arc;

/// Store factory for tests
///
/// Holds the reducer and optional enhancer, builds fresh stores on demand,
/// and records every action those stores dispatch.
///
/// ```rust
/// use redux_core::{reducer, thunk};
/// use redux_test_store::TestStore;
///
/// let mut test_store = TestStore::new()
///     .with_reducer(reducer(|mut todos: Vec<String>, text: &String| {
///         todos.push(text.clone());
///         todos
///     }))
///     .with_enhancer(thunk());
///
/// let store = test_store.initialize_store(None).unwrap();
/// store.dispatch("hey".to_string()).unwrap();
///
/// test_store.assert_actions(&["hey".to_string()]);
/// assert_eq!(store.state(), vec!["hey".to_string()]);
/// ```
pub struct TestStore<S, A> {
    reducer: Reducer<S, A>,
    enhancer: Option<SharedEnhancer<S, A>>,
    actions: ActionLog<A>,
    config: TestStoreConfig,
}

impl<S, A> TestStore<S, A>
where
    S: Clone + Send + 'static,
    A: Clone + Debug + Send + 'static,
{
    /// Identity reducer, no enhancer, default config
    pub fn new() -> Self {
        Self::from_parts(None, None)
    }

    /// Build from an optional reducer and an optional enhancer
    pub fn from_parts(
        reducer: Option<Reducer<S, A>>,
        enhancer: Option<SharedEnhancer<S, A>>,
    ) -> Self {
        Self {
            reducer: reducer.unwrap_or_else(identity),
            enhancer,
            actions: ActionLog::new(),
            config: TestStoreConfig::default(),
        }
    }

    pub fn with_reducer(mut self, reducer: Reducer<S, A>) -> Self {
        self.reducer = reducer;
        self
    }

    /// Enhancer applied around the recorder, e.g. [`redux_core::thunk`]
    pub fn with_enhancer<E: Enhancer<S, A> + 'static>(mut self, enhancer: E) -> Self {
        self.enhancer = Some(Arc::new(enhancer));
        self
    }

    pub fn with_config(mut self, config: TestStoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Forget every recorded action; store state is untouched
    pub fn clear_actions(&self) {
        self.actions.clear();
    }

    /// Actions recorded since the last clear or store initialization
    pub fn get_actions(&self) -> Vec<A> {
        self.actions.snapshot()
    }

    pub fn actions_len(&self) -> usize {
        self.actions.len()
    }

    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }

    /// Create a fresh store and start a fresh action log for it
    ///
    /// `None` starts from `S::default()`; see [`Self::initialize_store_with`]
    /// for state types without a default.
    pub fn initialize_store(&mut self, initial_state: Option<S>) -> Result<Store<S, A>, StoreError>
    where
        S: Default,
    {
        self.initialize_store_with(initial_state.unwrap_or_default())
    }

    /// Create a fresh store starting from `initial_state`
    ///
    /// With an enhancer the store is built as `compose(enhancer, recorder)`,
    /// so the recorder sits behind the enhancer's middleware and sees every
    /// action they let through, including those issued by thunks.
    pub fn initialize_store_with(&mut self, initial_state: S) -> Result<Store<S, A>, StoreError> {
        self.clear_actions();
        // A store from an earlier call keeps its own (orphaned) log
        self.actions = ActionLog::new();

        let recorder: SharedEnhancer<S, A> = Arc::new(
            ApplyMiddleware::<S, A>::new()
                .with(RecordingMiddleware::new(self.actions.clone(), &self.config)),
        );
        let enhancer: SharedEnhancer<S, A> = match &self.enhancer {
            Some(enhancer) => Arc::new(compose(Arc::clone(enhancer), recorder)),
            None => recorder,
        };

        log::debug!("{}: initializing store", self.config.label);
        create_store(
            Arc::clone(&self.reducer),
            initial_state,
            Some(enhancer.as_ref()),
        )
    }

    /// Assert the recorded actions equal `expected`, in order
    #[track_caller]
    pub fn assert_actions(&self, expected: &[A])
    where
        A: PartialEq,
    {
        let actual = self.get_actions();
        pretty_assertions::assert_eq!(
            actual.len(),
            expected.len(),
            "{}: number of recorded actions",
            self.config.label
        );
        pretty_assertions::assert_eq!(actual.as_slice(), expected);
    }

    /// Recorded actions as a JSON array
    pub fn actions_json(&self) -> serde_json::Result<serde_json::Value>
    where
        A: Serialize,
    {
        serde_json::to_value(self.get_actions())
    }
}

impl<S, A> Default for TestStore<S, A>
where
    S: Clone + Send + 'static,
    A: Clone + Debug + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
