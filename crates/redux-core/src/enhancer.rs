//! Store enhancers
//!
//! An enhancer decorates store construction: it receives the creator that
//! would build the store and returns a creator that builds a more capable
//! one (extra middleware, instrumentation, ...).
//!
//! Two enhancers are combined with [`compose`], which is plain function
//! composition: `compose(outer, inner)` builds with `outer(inner(create))`,
//! so `outer` wraps everything `inner` added.

use crate::store::StoreCreator;
use std::sync::Arc;

/// Store construction decorator
pub trait Enhancer<S, A>: Send + Sync {
    fn enhance(&self, create: StoreCreator<S, A>) -> StoreCreator<S, A>;
}

/// Shared enhancer, reusable across any number of store creations
pub type SharedEnhancer<S, A> = Arc<dyn Enhancer<S, A>>;

/// Two enhancers applied as one; see [`compose`]
pub struct Compose<S, A> {
    outer: SharedEnhancer<S, A>,
    inner: SharedEnhancer<S, A>,
}

/// Combine two enhancers so that `outer` wraps the store built by `inner`
pub fn compose<S, A>(outer: SharedEnhancer<S, A>, inner: SharedEnhancer<S, A>) -> Compose<S, A> {
    Compose { outer, inner }
}

impl<S, A> Enhancer<S, A> for Compose<S, A> {
    fn enhance(&self, create: StoreCreator<S, A>) -> StoreCreator<S, A> {
        self.outer.enhance(self.inner.enhance(create))
    }
}
