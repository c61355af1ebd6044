//! PokeAPI browsing SDK for Rust.
//!
//! Drives a paginated listing of Pokemon, exact-name search, and per-Pokemon
//! detail loading (sprite, types and English flavor text) into an in-memory
//! cache. Display code plugs in through the [`DisplayNotifier`] trait and
//! reads state back from the [`Orchestrator`].
//!
//! # Quick start
//!
//! ```no_run
//! use pokebox_sdk::{NoopNotifier, PokeboxSdk};
//!
//! # async fn example() -> pokebox_sdk::Result<()> {
//! let sdk = PokeboxSdk::builder().build()?;
//! let browser = sdk.orchestrator(NoopNotifier);
//!
//! // First page plus details for every entry on it
//! browser.load_more_page().await;
//! for pokemon in browser.visible_items() {
//!     if let Some(detail) = browser.detail(&pokemon.name) {
//!         println!("{} {:?}", detail.name, detail.types);
//!     }
//! }
//!
//! // Exact-name search
//! let found = browser.set_query("Pikachu").await;
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
#[cfg(feature = "blocking")]
pub mod blocking;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod notifier;
pub mod orchestrator;
pub mod state;

pub use aggregator::DetailAggregator;
#[cfg(feature = "blocking")]
pub use blocking::BlockingOrchestrator;
pub use cache::DetailCache;
pub use client::{CatalogApi, CatalogClient};
pub use error::{PokeboxError, Result};
pub use notifier::{DisplayNotifier, NoopNotifier};
pub use orchestrator::{Orchestrator, PageLoad};
pub use state::{PaginationState, SearchState};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// PokeboxSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PokeboxSdk`] instance.
///
/// Use [`PokeboxSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](PokeboxSdkBuilder::build) to create the SDK.
pub struct PokeboxSdkBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for PokeboxSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            user_agent: config::default_user_agent(),
        }
    }
}

impl PokeboxSdkBuilder {
    /// Set the API root. Defaults to [`config::API_BASE`].
    ///
    /// Mostly useful for pointing the SDK at a local mock server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the SDK. No request is made until an operation is called.
    pub fn build(self) -> Result<PokeboxSdk> {
        let client = CatalogClient::new(self.base_url, self.timeout, &self.user_agent)?;
        Ok(PokeboxSdk { client })
    }
}

// ---------------------------------------------------------------------------
// PokeboxSdk
// ---------------------------------------------------------------------------

/// The main entry point for the SDK.
///
/// Holds the configured [`CatalogClient`] and hands out orchestrators that
/// share its connection pool.
///
/// Created via [`PokeboxSdk::builder()`].
#[derive(Debug, Clone)]
pub struct PokeboxSdk {
    client: CatalogClient,
}

impl PokeboxSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> PokeboxSdkBuilder {
        PokeboxSdkBuilder::default()
    }

    /// Start a browsing session that reports to `notifier`.
    ///
    /// Each orchestrator has its own pagination, search state and cache.
    pub fn orchestrator<N: DisplayNotifier>(&self, notifier: N) -> Orchestrator<CatalogClient, N> {
        Orchestrator::new(self.client.clone(), notifier)
    }

    /// Download a sprite image, see [`CatalogClient::fetch_sprite`].
    pub async fn fetch_sprite(&self, url: &str) -> Option<Vec<u8>> {
        self.client.fetch_sprite(url).await
    }

    /// Return a reference to the underlying [`CatalogClient`].
    pub fn client(&self) -> &CatalogClient {
        &self.client
    }
}

impl fmt::Display for PokeboxSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PokeboxSdk(base_url={})", self.client.base_url())
    }
}
