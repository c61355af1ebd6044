//! HTTP access to the PokeAPI catalog.
//!
//! [`CatalogApi`] is the seam the rest of the crate talks to. [`CatalogClient`]
//! implements it over plain unauthenticated GETs; tests substitute canned
//! implementations. Response bodies are read as bytes and decoded with
//! `serde_json` so a malformed payload surfaces as
//! [`PokeboxError::Decode`] rather than as a transport error.

use std::fmt::Debug;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config;
use crate::error::{PokeboxError, Result};
use crate::models::{PokemonData, PokemonListResponse, PokemonRef, PokemonSpecies};

// ---------------------------------------------------------------------------
// CatalogApi trait
// ---------------------------------------------------------------------------

/// The catalog operations the aggregation pipeline depends on.
///
/// Implementations hold no per-call state; every method is an independent
/// request and may run concurrently with any other.
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    /// One listing page, in server order.
    async fn fetch_page(&self, limit: u32, offset: u32) -> Result<Vec<PokemonRef>>;

    /// Sprite and types for a Pokemon, addressed by absolute URL or by name.
    async fn fetch_detail(&self, url_or_name: &str) -> Result<PokemonData>;

    /// Localized flavor texts for a Pokemon species.
    async fn fetch_description(&self, name: &str) -> Result<PokemonSpecies>;

    /// Resolve an exact name to the reference stored in the first `forms`
    /// entry of its detail payload.
    ///
    /// Fails with [`PokeboxError::NotFound`] when the server answers with an
    /// error status or the payload has no forms.
    async fn fetch_exact_match(&self, name: &str) -> Result<PokemonRef>;
}

// ---------------------------------------------------------------------------
// CatalogClient
// ---------------------------------------------------------------------------

/// [`CatalogApi`] over HTTP.
///
/// Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl CatalogClient {
    /// Create a client rooted at `base_url` (e.g. [`config::API_BASE`]).
    pub fn new(base_url: impl Into<String>, timeout: Duration, user_agent: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_bytes(&self, url: &str) -> reqwest::Result<Vec<u8>> {
        let resp = self.http.get(url).send().await?.error_for_status()?;
        Ok(resp.bytes().await?.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn resolve_detail_url(&self, url_or_name: &str) -> Result<String> {
        let target = url_or_name.trim();
        if target.is_empty() {
            return Err(PokeboxError::InvalidArgument(
                "Pokemon name or URL must not be empty".into(),
            ));
        }
        if target.starts_with("http://") || target.starts_with("https://") {
            Ok(target.to_string())
        } else {
            Ok(config::detail_url(&self.base_url, target))
        }
    }

    /// Download a sprite image.
    ///
    /// Yields the raw image bytes, or `None` on any transport or status
    /// failure. Decoding the image format is up to the caller.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_sprite(&self, url: &str) -> Option<Vec<u8>> {
        match self.get_bytes(url).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(url, error = %e, "failed to load sprite");
                None
            }
        }
    }
}

fn require_name<'a>(name: &'a str, what: &str) -> Result<&'a str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PokeboxError::InvalidArgument(format!(
            "{what} requires a non-empty Pokemon name"
        )));
    }
    Ok(name)
}

impl CatalogApi for CatalogClient {
    #[instrument(skip(self), level = "debug")]
    async fn fetch_page(&self, limit: u32, offset: u32) -> Result<Vec<PokemonRef>> {
        let url = config::page_url(&self.base_url, limit, offset);
        let page: PokemonListResponse = self.get_json(&url).await?;
        debug!(n_results = page.results.len(), "fetched listing page");
        Ok(page.results)
    }

    #[instrument(skip(self), level = "debug")]
    async fn fetch_detail(&self, url_or_name: &str) -> Result<PokemonData> {
        let url = self.resolve_detail_url(url_or_name)?;
        self.get_json(&url).await
    }

    #[instrument(skip(self), level = "debug")]
    async fn fetch_description(&self, name: &str) -> Result<PokemonSpecies> {
        let name = require_name(name, "description lookup")?;
        let url = config::species_url(&self.base_url, name);
        self.get_json(&url).await
    }

    #[instrument(skip(self), level = "debug")]
    async fn fetch_exact_match(&self, name: &str) -> Result<PokemonRef> {
        let name = require_name(name, "exact match")?;
        let url = config::detail_url(&self.base_url, name);

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(PokeboxError::NotFound(format!(
                "No Pokemon named '{name}' (HTTP {status})"
            )));
        }

        let body = resp.bytes().await?;
        let payload: serde_json::Value = serde_json::from_slice(&body)?;
        let form = payload
            .get("forms")
            .and_then(|forms| forms.as_array())
            .and_then(|forms| forms.first())
            .ok_or_else(|| {
                PokeboxError::NotFound(format!("Pokemon '{name}' has no forms"))
            })?;

        Ok(serde_json::from_value(form.clone())?)
    }
}
