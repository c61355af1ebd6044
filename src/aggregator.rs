//! Builds a [`PokemonDetail`] out of the detail and species payloads of one
//! Pokemon and records it in the shared [`DetailCache`].

use futures::future::try_join;
use tracing::{debug, instrument};

use crate::cache::DetailCache;
use crate::client::CatalogApi;
use crate::config;
use crate::error::Result;
use crate::models::{PokemonDetail, PokemonRef};

// ---------------------------------------------------------------------------
// DetailAggregator
// ---------------------------------------------------------------------------

/// Fetches and combines the two payloads behind a list row.
pub struct DetailAggregator<'a, C> {
    client: &'a C,
    cache: &'a DetailCache,
}

impl<'a, C: CatalogApi> DetailAggregator<'a, C> {
    /// Create a new `DetailAggregator` bound to the given client and cache.
    pub fn new(client: &'a C, cache: &'a DetailCache) -> Self {
        Self { client, cache }
    }

    /// Fetch detail and description for `pokemon`, cache the composite record
    /// under `pokemon.name` and return it.
    ///
    /// Both requests run concurrently. If either fails the error is returned
    /// and the cache is left untouched.
    #[instrument(skip_all, fields(name = %pokemon.name))]
    pub async fn build_display_record(&self, pokemon: &PokemonRef) -> Result<PokemonDetail> {
        let (data, species) = try_join(
            self.client.fetch_detail(&pokemon.url),
            self.client.fetch_description(&pokemon.name),
        )
        .await?;

        let detail = PokemonDetail::from_parts(data, &species, config::DESCRIPTION_LANGUAGE);
        if self.cache.insert(pokemon.name.clone(), detail.clone()).is_some() {
            debug!("replaced cached detail");
        }
        Ok(detail)
    }
}
