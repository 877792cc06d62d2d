//! Session cache for per-dimension gender statistics.
//!
//! Each dimension owns one slot that moves `Empty -> Loading -> Populated`.
//! A populated slot is kept for the whole session (unless explicitly
//! invalidated), so switching between dashboard panels never repeats a
//! request. A failed fetch puts the slot back to `Empty` and the next
//! `ensure_loaded` call retries.
//!
//! # Observation
//! - `is_loading()`: true while any fetch is in flight
//! - `error()`: message of the most recent failed attempt, cleared when a new
//!   fetch starts
//! - `status(dimension)`: the same information tracked per dimension
//!
//! State lives behind `Rc<RefCell<_>>`; the dashboard runs on a single thread
//! and no borrow is held across an `.await`.
//!
//! A started fetch is handed to a [`Spawner`] so it settles even when every
//! caller stops waiting. Browser builds spawn onto the JS event loop; other
//! targets pass one in with [`StatisticsCache::spawn_with`].

use crate::countries;
use crate::dimension::Dimension;
use crate::error::StatsError;
use crate::record::StatRecord;
use crate::source::StatisticsSource;
use futures::future::{LocalBoxFuture, Shared};
use futures::FutureExt;
use log::{debug, error, info, warn};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Records of one dimension, shared between the cache and its readers.
pub type Records = Rc<[StatRecord]>;

type FetchResult = Result<Records, StatsError>;
type PendingFetch = Shared<LocalBoxFuture<'static, FetchResult>>;

/// Runs a future to completion on the local executor.
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

#[cfg(target_arch = "wasm32")]
fn default_spawner() -> Option<Spawner> {
    Some(Rc::new(|task: LocalBoxFuture<'static, ()>| {
        wasm_bindgen_futures::spawn_local(task)
    }))
}

// No ambient local executor off the browser; fetches are driven by waiters
// unless a spawner is supplied.
#[cfg(not(target_arch = "wasm32"))]
fn default_spawner() -> Option<Spawner> {
    None
}

/// Non-empty slot contents. A dimension without an entry is `Empty`.
enum Slot {
    /// Request in flight; late callers await the same handle.
    Loading(PendingFetch),
    Populated(Records),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Counters describing how `ensure_loaded` calls were served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Calls answered from a populated slot.
    pub hits: u64,
    /// Calls that found the slot empty.
    pub misses: u64,
    /// Calls that attached to a fetch already in flight.
    pub joins: u64,
    /// Requests issued to the source.
    pub fetches: u64,
    pub failures: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

#[derive(Default)]
struct CacheState {
    slots: HashMap<Dimension, Slot>,
    statuses: HashMap<Dimension, FetchStatus>,
    in_flight: usize,
    error: Option<String>,
    selected_country: String,
    stats: CacheStats,
}

#[derive(Default)]
struct Listeners {
    next_id: Cell<usize>,
    entries: RefCell<Vec<(ListenerId, Rc<dyn Fn()>)>>,
}

impl Listeners {
    fn notify(&self) {
        // Snapshot so a listener may (un)subscribe while being called.
        let snapshot: Vec<Rc<dyn Fn()>> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener();
        }
    }
}

/// Cloneable handle to the statistics cache. Clones share the same slots.
#[derive(Clone)]
pub struct StatisticsCache {
    state: Rc<RefCell<CacheState>>,
    listeners: Rc<Listeners>,
    source: Rc<dyn StatisticsSource>,
    spawner: Option<Spawner>,
}

impl PartialEq for StatisticsCache {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl StatisticsCache {
    pub fn new(source: impl StatisticsSource + 'static) -> Self {
        Self::from_shared(Rc::new(source))
    }

    pub fn from_shared(source: Rc<dyn StatisticsSource>) -> Self {
        Self {
            state: Rc::new(RefCell::new(CacheState::default())),
            listeners: Rc::new(Listeners::default()),
            source,
            spawner: default_spawner(),
        }
    }

    /// Run started fetches on `spawn` instead of the default executor.
    pub fn spawn_with(mut self, spawn: impl Fn(LocalBoxFuture<'static, ()>) + 'static) -> Self {
        self.spawner = Some(Rc::new(spawn));
        self
    }

    /// Make sure `dimension` is cached and return its records.
    ///
    /// Populated slots are returned without touching the source. An empty
    /// slot starts exactly one request; callers arriving while it is in flight
    /// wait for that same request.
    pub async fn ensure_loaded(&self, dimension: Dimension) -> Result<Records, StatsError> {
        let (pending, started) = {
            let mut guard = self.state.borrow_mut();
            let state = &mut *guard;
            match state.slots.get(&dimension) {
                Some(Slot::Populated(records)) => {
                    state.stats.hits += 1;
                    debug!("Gender statistics for {dimension} have already been fetched and cached");
                    return Ok(Rc::clone(records));
                }
                Some(Slot::Loading(pending)) => {
                    state.stats.joins += 1;
                    debug!("Joining in-flight fetch for {dimension}");
                    (pending.clone(), false)
                }
                None => {
                    state.stats.misses += 1;
                    state.stats.fetches += 1;
                    state.in_flight += 1;
                    state.error = None;
                    state.statuses.insert(dimension, FetchStatus::Loading);

                    let pending = self.start_fetch(dimension);
                    state
                        .slots
                        .insert(dimension, Slot::Loading(pending.clone()));
                    debug!("Fetching gender statistics for {dimension}");
                    (pending, true)
                }
            }
        };

        if started {
            if let Some(spawn) = &self.spawner {
                spawn(pending.clone().map(|_| ()).boxed_local());
            }
            self.listeners.notify();
        }
        pending.await
    }

    /// Wrap the source request so the slot is settled exactly once, by
    /// whichever task (spawned driver or waiter) polls it to completion.
    fn start_fetch(&self, dimension: Dimension) -> PendingFetch {
        let request = self.source.fetch_dimension(dimension);
        let state: Weak<RefCell<CacheState>> = Rc::downgrade(&self.state);
        let listeners: Weak<Listeners> = Rc::downgrade(&self.listeners);

        async move {
            let outcome = request.await.map(Records::from);
            if let Some(state) = state.upgrade() {
                settle(&state, dimension, &outcome);
            }
            if let Some(listeners) = listeners.upgrade() {
                listeners.notify();
            }
            outcome
        }
        .boxed_local()
        .shared()
    }

    /// Find the record whose key field equals `key` (exact, case-sensitive).
    ///
    /// Never fetches: callers run `ensure_loaded` first.
    pub fn lookup(&self, dimension: Dimension, key: &str) -> Result<StatRecord, StatsError> {
        let state = self.state.borrow();
        let Some(Slot::Populated(records)) = state.slots.get(&dimension) else {
            warn!("Lookup of {key:?} before {dimension} statistics were loaded");
            return Err(StatsError::NotLoaded { dimension });
        };

        records
            .iter()
            .find(|record| record.matches_key(dimension, key))
            .cloned()
            .ok_or_else(|| {
                warn!("Gender statistics for {dimension} {key:?} are not available");
                StatsError::NotFound {
                    dimension,
                    key: key.to_string(),
                }
            })
    }

    /// Select a country by its English name. Unknown names select nothing
    /// (empty code) rather than failing.
    pub fn set_selected_country(&self, name: &str) {
        let code = countries::code_for_name(name).unwrap_or_default();
        if code.is_empty() {
            warn!("No country code known for {name:?}");
        }
        self.state.borrow_mut().selected_country = code.to_string();
        self.listeners.notify();
    }

    /// Drop the cached records (or failure status) of `dimension`.
    ///
    /// Returns `false` if there was nothing to drop or a fetch is in flight.
    pub fn invalidate(&self, dimension: Dimension) -> bool {
        let changed = invalidate_slot(&mut self.state.borrow_mut(), dimension);
        if changed {
            info!("Invalidated cached {dimension} statistics");
            self.listeners.notify();
        }
        changed
    }

    /// Invalidate every settled dimension, returning how many changed.
    pub fn invalidate_all(&self) -> usize {
        let changed = {
            let mut state = self.state.borrow_mut();
            Dimension::ALL
                .into_iter()
                .filter(|&dimension| invalidate_slot(&mut state, dimension))
                .count()
        };
        if changed > 0 {
            info!("Invalidated {changed} cached dimensions");
            self.listeners.notify();
        }
        changed
    }

    pub fn records(&self, dimension: Dimension) -> Option<Records> {
        match self.state.borrow().slots.get(&dimension) {
            Some(Slot::Populated(records)) => Some(Rc::clone(records)),
            _ => None,
        }
    }

    pub fn is_populated(&self, dimension: Dimension) -> bool {
        matches!(
            self.state.borrow().slots.get(&dimension),
            Some(Slot::Populated(_))
        )
    }

    pub fn status(&self, dimension: Dimension) -> FetchStatus {
        self.state
            .borrow()
            .statuses
            .get(&dimension)
            .cloned()
            .unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().in_flight > 0
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn selected_country(&self) -> String {
        self.state.borrow().selected_country.clone()
    }

    pub fn stats(&self) -> CacheStats {
        self.state.borrow().stats
    }

    /// Register a callback run after every state change.
    pub fn on_change(&self, listener: impl Fn() + 'static) -> ListenerId {
        let id = ListenerId(self.listeners.next_id.get());
        self.listeners.next_id.set(id.0 + 1);
        self.listeners
            .entries
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut entries = self.listeners.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry, _)| *entry != id);
        entries.len() != before
    }
}

fn settle(state: &RefCell<CacheState>, dimension: Dimension, outcome: &FetchResult) {
    let mut state = state.borrow_mut();
    state.in_flight = state.in_flight.saturating_sub(1);
    match outcome {
        Ok(records) => {
            info!("Cached {} {dimension} records", records.len());
            state
                .slots
                .insert(dimension, Slot::Populated(Rc::clone(records)));
            state.statuses.insert(dimension, FetchStatus::Loaded);
        }
        Err(err) => {
            let message = dimension.failure_message();
            error!("{message}: {err}");
            state.slots.remove(&dimension);
            state
                .statuses
                .insert(dimension, FetchStatus::Failed(message.clone()));
            state.error = Some(message);
            state.stats.failures += 1;
        }
    }
}

fn invalidate_slot(state: &mut CacheState, dimension: Dimension) -> bool {
    match state.slots.get(&dimension) {
        Some(Slot::Loading(_)) => false,
        Some(Slot::Populated(_)) => {
            state.slots.remove(&dimension);
            state.statuses.remove(&dimension);
            true
        }
        None => matches!(
            state.statuses.remove(&dimension),
            Some(FetchStatus::Failed(_))
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchCause;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::{noop_waker, LocalSpawnExt};
    use serde_json::{json, Value};
    use std::task::Context;

    #[derive(Default)]
    struct FakeSource {
        responses: RefCell<HashMap<Dimension, Result<Vec<StatRecord>, FetchCause>>>,
        calls: RefCell<Vec<Dimension>>,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl FakeSource {
        fn respond(&self, dimension: Dimension, records: Value) {
            let records = serde_json::from_value(records).unwrap();
            self.responses.borrow_mut().insert(dimension, Ok(records));
        }

        fn fail(&self, dimension: Dimension) {
            self.responses.borrow_mut().insert(
                dimension,
                Err(FetchCause::Status {
                    status: 503,
                    body: "unavailable".into(),
                }),
            );
        }

        /// Hold the next request until the returned sender fires.
        fn hold_next(&self) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            *self.gate.borrow_mut() = Some(rx);
            tx
        }

        fn calls(&self, dimension: Dimension) -> usize {
            self.calls.borrow().iter().filter(|d| **d == dimension).count()
        }
    }

    impl StatisticsSource for FakeSource {
        fn fetch_dimension(
            &self,
            dimension: Dimension,
        ) -> LocalBoxFuture<'static, Result<Vec<StatRecord>, StatsError>> {
            self.calls.borrow_mut().push(dimension);
            let response = self
                .responses
                .borrow()
                .get(&dimension)
                .cloned()
                .unwrap_or_else(|| Err(FetchCause::Transport("no response scripted".into())));
            let gate = self.gate.borrow_mut().take();
            async move {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                response.map_err(|cause| StatsError::fetch(dimension, cause))
            }
            .boxed_local()
        }
    }

    fn setup() -> (Rc<FakeSource>, StatisticsCache) {
        let source = Rc::new(FakeSource::default());
        let cache = StatisticsCache::from_shared(source.clone());
        (source, cache)
    }

    #[test]
    fn second_ensure_loaded_is_served_from_cache() {
        let (source, cache) = setup();
        source.respond(Dimension::Genre, json!([{"genre": "Drama", "male": 5, "female": 6}]));

        let first = block_on(cache.ensure_loaded(Dimension::Genre)).unwrap();
        let second = block_on(cache.ensure_loaded(Dimension::Genre)).unwrap();

        assert_eq!(source.calls(Dimension::Genre), 1);
        assert!(Rc::ptr_eq(&first, &second));
        let stats = cache.stats();
        assert_eq!((stats.misses, stats.hits, stats.fetches), (1, 1, 1));
    }

    #[test]
    fn loading_is_set_only_while_the_request_is_outstanding() {
        let (source, cache) = setup();
        source.respond(Dimension::Country, json!([{"country": "US", "male": 1, "female": 1}]));
        let release = source.hold_next();
        let mut pool = LocalPool::new();

        assert!(!cache.is_loading());
        let task_cache = cache.clone();
        pool.spawner()
            .spawn_local(async move {
                task_cache.ensure_loaded(Dimension::Country).await.unwrap();
            })
            .unwrap();
        pool.run_until_stalled();

        assert!(cache.is_loading());
        assert_eq!(cache.status(Dimension::Country), FetchStatus::Loading);
        assert!(!cache.is_populated(Dimension::Country));

        release.send(()).unwrap();
        pool.run_until_stalled();

        assert!(!cache.is_loading());
        assert_eq!(cache.status(Dimension::Country), FetchStatus::Loaded);
        assert!(cache.is_populated(Dimension::Country));
    }

    #[test]
    fn loading_is_cleared_after_a_failure() {
        let (source, cache) = setup();
        source.fail(Dimension::Company);
        let release = source.hold_next();
        let mut pool = LocalPool::new();

        let task_cache = cache.clone();
        pool.spawner()
            .spawn_local(async move {
                assert!(task_cache.ensure_loaded(Dimension::Company).await.is_err());
            })
            .unwrap();
        pool.run_until_stalled();
        assert!(cache.is_loading());

        release.send(()).unwrap();
        pool.run_until_stalled();
        assert!(!cache.is_loading());
        assert_eq!(
            cache.error().as_deref(),
            Some("Failed to fetch gender statistics for production companies")
        );
    }

    #[test]
    fn concurrent_callers_share_one_request() {
        let (source, cache) = setup();
        source.respond(Dimension::Year, json!([{"year": 2001, "male": 3, "female": 2}]));
        let release = source.hold_next();
        let results = Rc::new(RefCell::new(Vec::new()));
        let mut pool = LocalPool::new();

        for _ in 0..2 {
            let task_cache = cache.clone();
            let results = Rc::clone(&results);
            pool.spawner()
                .spawn_local(async move {
                    let records = task_cache.ensure_loaded(Dimension::Year).await;
                    results.borrow_mut().push(records);
                })
                .unwrap();
        }
        pool.run_until_stalled();
        assert_eq!(source.calls(Dimension::Year), 1);
        assert_eq!(cache.stats().joins, 1);

        release.send(()).unwrap();
        pool.run_until_stalled();

        let results = results.borrow();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.as_ref().is_ok_and(|records| records.len() == 1)));
        assert!(!cache.is_loading());
    }

    #[test]
    fn failure_in_one_dimension_leaves_others_alone() {
        let (source, cache) = setup();
        source.respond(Dimension::Country, json!([{"country": "FR", "male": 9, "female": 7}]));
        source.fail(Dimension::Genre);

        block_on(cache.ensure_loaded(Dimension::Country)).unwrap();
        let err = block_on(cache.ensure_loaded(Dimension::Genre)).unwrap_err();

        assert!(matches!(err, StatsError::Fetch { dimension: Dimension::Genre, .. }));
        assert!(cache.is_populated(Dimension::Country));
        assert!(!cache.is_populated(Dimension::Genre));
        assert_eq!(cache.status(Dimension::Country), FetchStatus::Loaded);
        assert_eq!(
            cache.status(Dimension::Genre),
            FetchStatus::Failed(Dimension::Genre.failure_message())
        );
        assert_eq!(cache.error(), Some(Dimension::Genre.failure_message()));
    }

    #[test]
    fn failed_dimension_is_fetched_again_on_retry() {
        let (source, cache) = setup();
        source.fail(Dimension::Department);
        assert!(block_on(cache.ensure_loaded(Dimension::Department)).is_err());

        source.respond(
            Dimension::Department,
            json!([{"department": "Directing", "male": 40, "female": 10}]),
        );
        let records = block_on(cache.ensure_loaded(Dimension::Department)).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(source.calls(Dimension::Department), 2);
        assert_eq!(cache.error(), None);
        assert_eq!(cache.stats().failures, 1);
    }

    #[test]
    fn next_fetch_clears_the_previous_error() {
        let (source, cache) = setup();
        source.fail(Dimension::Genre);
        source.respond(Dimension::Company, json!([{"company": "A24", "male": 2, "female": 2}]));

        let _ = block_on(cache.ensure_loaded(Dimension::Genre));
        assert!(cache.error().is_some());

        block_on(cache.ensure_loaded(Dimension::Company)).unwrap();
        assert_eq!(cache.error(), None);
        // the per-dimension view still remembers the failure
        assert!(matches!(cache.status(Dimension::Genre), FetchStatus::Failed(_)));
    }

    #[test]
    fn repeated_lookups_return_the_same_record_without_fetching() {
        let (source, cache) = setup();
        source.respond(
            Dimension::Genre,
            json!([
                {"genre": "Comedy", "male": 10, "female": 8},
                {"genre": "Horror", "male": 4, "female": 1}
            ]),
        );
        block_on(cache.ensure_loaded(Dimension::Genre)).unwrap();

        let first = cache.lookup(Dimension::Genre, "Horror").unwrap();
        let second = cache.lookup(Dimension::Genre, "Horror").unwrap();

        assert_eq!(first, second);
        assert_eq!(first.count("female"), Some(1));
        assert_eq!(source.calls(Dimension::Genre), 1);
    }

    #[test]
    fn lookup_miss_reports_dimension_and_key() {
        let (source, cache) = setup();
        source.respond(
            Dimension::Year,
            json!([{"year": 1999, "male": 1, "female": 1}, {"year": 2000, "male": 2, "female": 2}]),
        );
        block_on(cache.ensure_loaded(Dimension::Year)).unwrap();

        let err = cache.lookup(Dimension::Year, "1899").unwrap_err();
        assert_eq!(
            err,
            StatsError::NotFound {
                dimension: Dimension::Year,
                key: "1899".into()
            }
        );
        assert_eq!(cache.records(Dimension::Year).map(|r| r.len()), Some(2));
    }

    #[test]
    fn lookup_before_loading_does_not_fetch() {
        let (source, cache) = setup();
        source.respond(Dimension::Country, json!([{"country": "US"}]));

        let err = cache.lookup(Dimension::Country, "US").unwrap_err();
        assert_eq!(err, StatsError::NotLoaded { dimension: Dimension::Country });
        assert_eq!(source.calls(Dimension::Country), 0);
    }

    #[test]
    fn first_matching_record_wins() {
        let (source, cache) = setup();
        source.respond(
            Dimension::Company,
            json!([
                {"company": "Ghibli", "male": 1, "female": 5},
                {"company": "Ghibli", "male": 9, "female": 9}
            ]),
        );
        block_on(cache.ensure_loaded(Dimension::Company)).unwrap();

        let record = cache.lookup(Dimension::Company, "Ghibli").unwrap();
        assert_eq!(record.count("male"), Some(1));
        assert!(cache.lookup(Dimension::Company, "ghibli").is_err());
    }

    #[test]
    fn invalidate_forces_a_new_request() {
        let (source, cache) = setup();
        source.respond(Dimension::Genre, json!([{"genre": "Drama", "male": 1, "female": 1}]));
        block_on(cache.ensure_loaded(Dimension::Genre)).unwrap();

        assert!(cache.invalidate(Dimension::Genre));
        assert!(!cache.is_populated(Dimension::Genre));
        assert_eq!(cache.status(Dimension::Genre), FetchStatus::Idle);
        assert!(!cache.invalidate(Dimension::Genre));

        block_on(cache.ensure_loaded(Dimension::Genre)).unwrap();
        assert_eq!(source.calls(Dimension::Genre), 2);
    }

    #[test]
    fn invalidate_leaves_in_flight_requests_alone() {
        let (source, cache) = setup();
        source.respond(Dimension::Genre, json!([{"genre": "Drama"}]));
        source.fail(Dimension::Company);
        let _ = block_on(cache.ensure_loaded(Dimension::Company));
        let release = source.hold_next();
        let mut pool = LocalPool::new();

        let task_cache = cache.clone();
        pool.spawner()
            .spawn_local(async move {
                task_cache.ensure_loaded(Dimension::Genre).await.unwrap();
            })
            .unwrap();
        pool.run_until_stalled();

        assert!(!cache.invalidate(Dimension::Genre));
        // only the failed company status is reset
        assert_eq!(cache.invalidate_all(), 1);

        release.send(()).unwrap();
        pool.run_until_stalled();
        assert!(cache.is_populated(Dimension::Genre));
        assert_eq!(cache.status(Dimension::Company), FetchStatus::Idle);
    }

    #[test]
    fn selected_country_resolves_names_to_codes() {
        let (source, cache) = setup();
        assert_eq!(cache.selected_country(), "");

        cache.set_selected_country("United States");
        assert_eq!(cache.selected_country(), "US");

        cache.set_selected_country("Nowhereland");
        assert_eq!(cache.selected_country(), "");
        assert!(source.calls.borrow().is_empty());
    }

    #[test]
    fn listeners_hear_about_state_changes() {
        let (source, cache) = setup();
        source.respond(Dimension::Country, json!([{"country": "JP"}]));
        let seen = Rc::new(Cell::new(0));

        let counter = Rc::clone(&seen);
        let id = cache.on_change(move || counter.set(counter.get() + 1));

        block_on(cache.ensure_loaded(Dimension::Country)).unwrap();
        assert_eq!(seen.get(), 2); // started + settled

        block_on(cache.ensure_loaded(Dimension::Country)).unwrap();
        assert_eq!(seen.get(), 2);

        cache.set_selected_country("Japan");
        assert_eq!(seen.get(), 3);

        source.fail(Dimension::Genre);
        assert!(block_on(cache.ensure_loaded(Dimension::Genre)).is_err());
        assert_eq!(seen.get(), 5);

        assert!(cache.invalidate(Dimension::Country));
        assert_eq!(seen.get(), 6);
        assert!(!cache.invalidate(Dimension::Country));
        assert_eq!(seen.get(), 6);

        assert!(cache.remove_listener(id));
        cache.set_selected_country("France");
        assert_eq!(seen.get(), 6);
        assert!(!cache.remove_listener(id));
    }

    #[test]
    fn abandoned_fetch_still_settles() {
        let (source, cache) = setup();
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let cache = cache.spawn_with(move |task| spawner.spawn_local(task).unwrap());
        source.respond(Dimension::Genre, json!([{"genre": "Drama", "male": 2, "female": 3}]));
        source.fail(Dimension::Year);

        for dimension in [Dimension::Genre, Dimension::Year] {
            let release = source.hold_next();
            let waker = noop_waker();
            let mut call = cache.ensure_loaded(dimension).boxed_local();
            assert!(call.poll_unpin(&mut Context::from_waker(&waker)).is_pending());
            drop(call);
            assert!(cache.is_loading());

            release.send(()).unwrap();
            pool.run_until_stalled();
            assert!(!cache.is_loading());
        }

        assert!(cache.is_populated(Dimension::Genre));
        assert_eq!(cache.status(Dimension::Genre), FetchStatus::Loaded);
        assert!(matches!(cache.status(Dimension::Year), FetchStatus::Failed(_)));
        assert_eq!(cache.error(), Some(Dimension::Year.failure_message()));
        assert_eq!(cache.stats().fetches, 2);
    }

    #[test]
    fn country_lookup_end_to_end() {
        let (source, cache) = setup();
        source.respond(Dimension::Country, json!([{"country": "US", "male": 120, "female": 80}]));

        let records = block_on(cache.ensure_loaded(Dimension::Country)).unwrap();
        assert!(!cache.is_loading());
        assert_eq!(records.len(), 1);

        let us = cache.lookup(Dimension::Country, "US").unwrap();
        assert_eq!(
            serde_json::to_value(&us).unwrap(),
            json!({"country": "US", "male": 120, "female": 80})
        );

        let err = cache.lookup(Dimension::Country, "FR").unwrap_err();
        assert!(matches!(err, StatsError::NotFound { dimension: Dimension::Country, ref key } if key == "FR"));
    }
}
