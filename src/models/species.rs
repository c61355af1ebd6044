use serde::{Deserialize, Serialize};

use super::pokemon::NamedResource;

// ---------------------------------------------------------------------------
// PokemonSpecies — Payload of `GET /pokemon-species/<name>`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}
