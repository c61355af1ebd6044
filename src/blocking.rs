//! Synchronous facade over [`Orchestrator`] for hosts without an async
//! runtime, such as a UI main loop.
//!
//! Owns a current-thread Tokio runtime and drives each orchestrator call to
//! completion on the calling thread.
//!
//! # Example
//!
//! ```no_run
//! use pokebox_sdk::{BlockingOrchestrator, NoopNotifier, PokeboxSdk};
//!
//! let sdk = PokeboxSdk::builder().build().unwrap();
//! let browser = BlockingOrchestrator::new(sdk.orchestrator(NoopNotifier)).unwrap();
//!
//! browser.load_more_page();
//! for pokemon in browser.visible_items() {
//!     println!("{}", pokemon.name);
//! }
//! ```

use std::ops::Deref;

use tokio::runtime::{Builder, Runtime};

use crate::client::CatalogApi;
use crate::error::Result;
use crate::models::PokemonRef;
use crate::notifier::DisplayNotifier;
use crate::orchestrator::{Orchestrator, PageLoad};

/// Blocking wrapper around an [`Orchestrator`].
///
/// Read accessors are reachable through `Deref`; the async operations are
/// re-exposed as blocking methods.
pub struct BlockingOrchestrator<C, N> {
    inner: Orchestrator<C, N>,
    runtime: Runtime,
}

impl<C: CatalogApi, N: DisplayNotifier> BlockingOrchestrator<C, N> {
    /// Wrap `inner`, building a current-thread runtime with IO and timers
    /// enabled.
    pub fn new(inner: Orchestrator<C, N>) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { inner, runtime })
    }

    /// Blocking [`Orchestrator::load_more_page`].
    pub fn load_more_page(&self) -> PageLoad {
        self.runtime.block_on(self.inner.load_more_page())
    }

    /// Blocking [`Orchestrator::search_exact`].
    pub fn search_exact(&self, name: &str) -> Option<PokemonRef> {
        self.runtime.block_on(self.inner.search_exact(name))
    }

    /// Blocking [`Orchestrator::set_query`].
    pub fn set_query(&self, text: &str) -> Option<PokemonRef> {
        self.runtime.block_on(self.inner.set_query(text))
    }

    pub fn clear_search(&self) {
        self.inner.clear_search()
    }

    /// Consume the facade, shutting down its runtime.
    pub fn into_inner(self) -> Orchestrator<C, N> {
        self.inner
    }
}

impl<C, N> Deref for BlockingOrchestrator<C, N> {
    type Target = Orchestrator<C, N>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
