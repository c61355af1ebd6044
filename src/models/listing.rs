use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PokemonRef — Minimal reference returned by listings and form lookups
// ---------------------------------------------------------------------------

/// A named link to a Pokemon resource.
///
/// `name` is the cache key for the Pokemon's [`PokemonDetail`](super::PokemonDetail);
/// `url` points at the resource the detail payload is fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PokemonRef {
    pub name: String,
    pub url: String,
}

impl PokemonRef {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// PokemonListResponse — One page of `GET /pokemon`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonListResponse {
    pub results: Vec<PokemonRef>,
}
