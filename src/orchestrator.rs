//! Paginated loading and exact-name search over a [`CatalogApi`].
//!
//! The [`Orchestrator`] owns all session state: the pagination cursor, the
//! list of loaded references, the search state and the [`DetailCache`]. The
//! display layer subscribes through a [`DisplayNotifier`] and reads state
//! back through the accessors here, which hand out snapshots.
//!
//! All methods take `&self`. The loading flag is set before the first
//! suspension point of [`Orchestrator::load_more_page`], so a second call
//! made while a page is in flight is a no-op. Dropping a page load before it
//! completes clears the flag again and reports an unsuccessful finish.

use std::time::Instant;

use futures::future::join_all;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::aggregator::DetailAggregator;
use crate::cache::DetailCache;
use crate::client::CatalogApi;
use crate::error::PokeboxError;
use crate::models::{PokemonDetail, PokemonRef};
use crate::notifier::DisplayNotifier;
use crate::state::{normalize_query, PaginationState, SearchState};

/// What a call to [`Orchestrator::load_more_page`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoad {
    /// Already loading or exhausted; nothing was requested.
    Skipped,
    /// A page request was made and every follow-up completed.
    Finished {
        /// Entries returned by the page request (0 if it failed).
        fetched: usize,
        /// Entries whose detail aggregation succeeded.
        aggregated: usize,
        /// Whether the page request and every aggregation succeeded.
        success: bool,
    },
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

pub struct Orchestrator<C, N> {
    client: C,
    notifier: N,
    cache: DetailCache,
    pagination: Mutex<PaginationState>,
    paginated: Mutex<Vec<PokemonRef>>,
    search: Mutex<SearchState>,
}

impl<C: CatalogApi, N: DisplayNotifier> Orchestrator<C, N> {
    /// Create an orchestrator with fresh session state. Performs no I/O.
    pub fn new(client: C, notifier: N) -> Self {
        Self::with_cache(client, notifier, DetailCache::new())
    }

    /// Create an orchestrator that writes into an existing cache.
    pub fn with_cache(client: C, notifier: N, cache: DetailCache) -> Self {
        Self {
            client,
            notifier,
            cache,
            pagination: Mutex::new(PaginationState::default()),
            paginated: Mutex::new(Vec::new()),
            search: Mutex::new(SearchState::default()),
        }
    }

    fn aggregator(&self) -> DetailAggregator<'_, C> {
        DetailAggregator::new(&self.client, &self.cache)
    }

    // -- Pagination --------------------------------------------------------

    /// Load the next listing page and the details of every entry on it.
    ///
    /// Does nothing while a page is already loading or once the listing is
    /// exhausted. Otherwise reports `on_loading_started`, requests the page,
    /// and reports `on_loading_finished` once the page request failed or all
    /// detail aggregations for the page have completed.
    pub async fn load_more_page(&self) -> PageLoad {
        let (limit, offset) = {
            let mut state = self.pagination.lock();
            if !state.can_load() {
                debug!(
                    is_loading = state.is_loading,
                    is_exhausted = state.is_exhausted,
                    "skipping page load"
                );
                return PageLoad::Skipped;
            }
            state.is_loading = true;
            (state.page_size, state.offset)
        };

        self.notifier.on_loading_started();
        let loading = LoadingGuard::new(&self.pagination, &self.notifier);

        let page = match self.client.fetch_page(limit, offset).await {
            Ok(page) => page,
            Err(e) => {
                warn!(offset, error = %e, "failed to load page");
                loading.finish(false);
                return PageLoad::Finished {
                    fetched: 0,
                    aggregated: 0,
                    success: false,
                };
            }
        };

        let fetched = page.len();
        {
            let mut state = self.pagination.lock();
            if fetched < limit as usize {
                state.is_exhausted = true;
                info!(offset, fetched, "reached end of listing");
            }
            state.offset += limit;
        }
        self.paginated.lock().extend(page.iter().cloned());

        let aggregator = &self.aggregator();
        let outcomes = join_all(page.iter().map(|pokemon| async move {
            let outcome = aggregator.build_display_record(pokemon).await;
            if let Err(e) = &outcome {
                warn!(name = %pokemon.name, error = %e, "failed to load details");
            }
            outcome.is_ok()
        }))
        .await;

        let aggregated = outcomes.into_iter().filter(|ok| *ok).count();
        let success = aggregated == fetched;
        debug!(offset, fetched, aggregated, "page loaded");
        loading.finish(success);

        PageLoad::Finished {
            fetched,
            aggregated,
            success,
        }
    }

    // -- Search ------------------------------------------------------------

    /// Look up a Pokemon by exact name and load its details.
    ///
    /// The name is trimmed and lowercased first; a blank name clears the
    /// search instead. Completion is reported after the detail aggregation
    /// has finished, so a found result is already cached unless its
    /// aggregation failed. If another search or a clear happened in the
    /// meantime, the search state is left to the newer query and
    /// `on_search_finished` receives `None`; the hit is still returned.
    pub async fn search_exact(&self, name: &str) -> Option<PokemonRef> {
        let query = normalize_query(name);
        if query.is_empty() {
            self.clear_search();
            return None;
        }
        self.search.lock().current_query = query.clone();
        self.notifier.on_search_started();

        let result = match self.client.fetch_exact_match(&query).await {
            Ok(pokemon) => Some(pokemon),
            Err(PokeboxError::NotFound(msg)) => {
                debug!(query = %query, "{msg}");
                None
            }
            Err(e) => {
                warn!(query = %query, error = %e, "search failed");
                None
            }
        };

        let current = self.apply_search_result(&query, result.clone());
        if !current {
            debug!(query = %query, "search superseded");
        }

        if let Some(pokemon) = &result {
            if let Err(e) = self.aggregator().build_display_record(pokemon).await {
                warn!(name = %pokemon.name, error = %e, "failed to load details for search result");
            }
        }

        // A superseded search reports no hit; the state belongs to the newer query
        self.notifier.on_search_finished(result.as_ref().filter(|_| current));
        result
    }

    /// Store `result` if `query` is still the current query.
    fn apply_search_result(&self, query: &str, result: Option<PokemonRef>) -> bool {
        let mut search = self.search.lock();
        if search.current_query != query {
            return false;
        }
        search.result = result;
        true
    }

    /// Leave search mode. No network request is made.
    pub fn clear_search(&self) {
        self.search.lock().clear();
    }

    /// Apply the text of a search field: blank text clears the search,
    /// anything else runs [`search_exact`](Self::search_exact).
    pub async fn set_query(&self, text: &str) -> Option<PokemonRef> {
        if text.trim().is_empty() {
            self.clear_search();
            None
        } else {
            self.search_exact(text).await
        }
    }

    // -- Read accessors ----------------------------------------------------

    pub fn pagination(&self) -> PaginationState {
        *self.pagination.lock()
    }

    pub fn search_state(&self) -> SearchState {
        self.search.lock().clone()
    }

    pub fn is_search_mode(&self) -> bool {
        self.search.lock().is_active()
    }

    /// References loaded so far, in page order.
    pub fn paginated(&self) -> Vec<PokemonRef> {
        self.paginated.lock().clone()
    }

    /// The rows to display: the search result (zero or one) in search mode,
    /// the paginated list otherwise.
    pub fn visible_items(&self) -> Vec<PokemonRef> {
        let search = self.search.lock();
        if search.is_active() {
            search.result.iter().cloned().collect()
        } else {
            drop(search);
            self.paginated()
        }
    }

    /// Cached details for `name`, if they have been loaded.
    pub fn detail(&self, name: &str) -> Option<PokemonDetail> {
        self.cache.get(name)
    }

    pub fn cache(&self) -> &DetailCache {
        &self.cache
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

// ---------------------------------------------------------------------------
// LoadingGuard
// ---------------------------------------------------------------------------

/// Pairs an `on_loading_started` with its `on_loading_finished`.
///
/// Clears `is_loading` and reports the finish when dropped, so a page load
/// abandoned at an await point still settles the state. An abandoned load
/// reports `success = false`.
struct LoadingGuard<'a, N: DisplayNotifier> {
    pagination: &'a Mutex<PaginationState>,
    notifier: &'a N,
    started_at: Instant,
    success: bool,
}

impl<'a, N: DisplayNotifier> LoadingGuard<'a, N> {
    fn new(pagination: &'a Mutex<PaginationState>, notifier: &'a N) -> Self {
        Self {
            pagination,
            notifier,
            started_at: Instant::now(),
            success: false,
        }
    }

    fn finish(mut self, success: bool) {
        self.success = success;
    }
}

impl<N: DisplayNotifier> Drop for LoadingGuard<'_, N> {
    fn drop(&mut self) {
        self.pagination.lock().is_loading = false;
        self.notifier.on_loading_finished(self.started_at, self.success);
    }
}
