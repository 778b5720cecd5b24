//! Dataset loading with request generations.
//!
//! Every load takes a [`RequestToken`] from a monotonically increasing
//! generation counter. Only the newest token may commit its result, so a
//! slow response that arrives after a retry is discarded instead of
//! overwriting fresher state. Nothing here is borrowed across an `.await`,
//! which keeps overlapping loads on one thread sound.

use crate::cache::{CachePolicy, Clock, DatasetCache, SystemClock};
use crate::dataset::Dataset;
use crate::error::LoadError;
use crate::json::parse_dataset_str;
use crate::source::DatasetSource;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken {
    generation: u64,
}

impl RequestToken {
    pub fn generation(&self) -> u64 { self.generation }
}

#[derive(Clone, Debug)]
pub enum LoadState {
    Idle,
    Loading(RequestToken),
    Ready(Rc<Dataset>),
    Failed(LoadError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool { matches!(self, LoadState::Loading(_)) }
}

#[derive(Debug)]
pub enum Completion {
    Applied(Result<Rc<Dataset>, LoadError>),
    Stale,
}

impl Completion {
    pub fn is_stale(&self) -> bool { matches!(self, Completion::Stale) }

    pub fn into_result(self) -> Result<Rc<Dataset>, LoadError> {
        match self {
            Completion::Applied(r) => r,
            Completion::Stale => Err(LoadError::Superseded),
        }
    }
}

pub struct Loader<S, C = SystemClock> {
    source: S,
    clock: C,
    cache: RefCell<DatasetCache>,
    generation: Cell<u64>,
    state: RefCell<LoadState>,
    // Last committed dataset, kept across failed reloads.
    data: RefCell<Option<Rc<Dataset>>>,
}

impl<S: DatasetSource> Loader<S, SystemClock> {
    pub fn new(source: S) -> Self { Self::with_parts(source, SystemClock, DatasetCache::default()) }
}

impl<S: DatasetSource, C: Clock> Loader<S, C> {
    pub fn with_parts(source: S, clock: C, cache: DatasetCache) -> Self {
        Loader {
            source,
            clock,
            cache: RefCell::new(cache),
            generation: Cell::new(0),
            state: RefCell::new(LoadState::Idle),
            data: RefCell::new(None),
        }
    }

    pub fn source(&self) -> &S { &self.source }

    pub fn state(&self) -> LoadState { self.state.borrow().clone() }

    pub fn dataset(&self) -> Option<Rc<Dataset>> { self.data.borrow().clone() }

    pub fn cache(&self) -> std::cell::Ref<'_, DatasetCache> { self.cache.borrow() }

    pub fn invalidate_cache(&self) { self.cache.borrow_mut().invalidate(); }

    pub fn set_cache_policy(&self, policy: CachePolicy) { self.cache.borrow_mut().set_policy(policy); }

    /// Starts a request generation; any older token becomes stale.
    pub fn begin(&self) -> RequestToken {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        let token = RequestToken { generation };
        *self.state.borrow_mut() = LoadState::Loading(token);
        debug!(generation, source = %self.source.describe(), "dataset request started");
        token
    }

    pub fn is_current(&self, token: RequestToken) -> bool { token.generation == self.generation.get() }

    /// Supersedes whatever is in flight without starting a new request.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get() + 1);
        let mut state = self.state.borrow_mut();
        if state.is_loading() {
            *state = match self.data.borrow().clone() {
                Some(d) => LoadState::Ready(d),
                None => LoadState::Idle,
            };
        }
    }

    pub fn finish(&self, token: RequestToken, result: Result<Dataset, LoadError>) -> Completion {
        if !self.is_current(token) {
            warn!(
                generation = token.generation,
                current = self.generation.get(),
                "discarding stale dataset response"
            );
            return Completion::Stale;
        }
        match result {
            Ok(ds) => {
                let ds = Rc::new(ds);
                info!(generation = token.generation, records = ds.len(), "dataset loaded");
                self.cache.borrow_mut().store(ds.clone(), self.clock.now_ms());
                *self.data.borrow_mut() = Some(ds.clone());
                *self.state.borrow_mut() = LoadState::Ready(ds.clone());
                Completion::Applied(Ok(ds))
            }
            Err(e) => {
                warn!(generation = token.generation, error = %e, retryable = e.is_retryable(), "dataset load failed");
                *self.state.borrow_mut() = LoadState::Failed(e.clone());
                Completion::Applied(Err(e))
            }
        }
    }

    /// Serves a fresh cache entry when present, otherwise fetches and
    /// validates. Returns `LoadError::Superseded` when a newer load started
    /// while this one was waiting.
    pub async fn load(&self) -> Result<Rc<Dataset>, LoadError> {
        let cached = self.cache.borrow().get(self.clock.now_ms());
        if let Some(ds) = cached {
            let token = self.begin();
            debug!(generation = token.generation, "dataset served from cache");
            *self.data.borrow_mut() = Some(ds.clone());
            *self.state.borrow_mut() = LoadState::Ready(ds.clone());
            return Ok(ds);
        }
        let token = self.begin();
        let parsed = match self.source.fetch().await {
            Ok(text) => parse_dataset_str(&text),
            Err(e) => Err(e),
        };
        self.finish(token, parsed).into_result()
    }

    /// Drops the cached copy and fetches again.
    pub async fn reload(&self) -> Result<Rc<Dataset>, LoadError> {
        self.invalidate_cache();
        self.load().await
    }
}
