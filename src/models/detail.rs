use serde::{Deserialize, Serialize};

use super::pokemon::PokemonData;
use super::species::{FlavorTextEntry, PokemonSpecies};

// ---------------------------------------------------------------------------
// PokemonDetail — Composite record consumed by the display layer
// ---------------------------------------------------------------------------

/// Everything a list row shows for one Pokemon.
///
/// Only ever built from a complete pair of detail and species payloads, see
/// [`PokemonDetail::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub name: String,
    pub image_url: Option<String>,
    pub types: Vec<String>,
    pub description: Option<String>,
}

impl PokemonDetail {
    /// Combine a detail payload with its species payload.
    ///
    /// The description is the first flavor text tagged with `language`, with
    /// line breaks and form feeds flattened to spaces. A species without such
    /// an entry yields `description: None`.
    pub fn from_parts(data: PokemonData, species: &PokemonSpecies, language: &str) -> Self {
        let description = select_description(&species.flavor_text_entries, language)
            .map(normalize_flavor_text);
        Self {
            types: data.type_names(),
            name: data.name,
            image_url: data.sprites.front_default,
            description,
        }
    }
}

/// First entry in server order whose language name equals `language`.
pub fn select_description<'a>(entries: &'a [FlavorTextEntry], language: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|entry| entry.language.name == language)
        .map(|entry| entry.flavor_text.as_str())
}

/// Replace every line break and form feed with a single space.
pub fn normalize_flavor_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' | '\r' | '\u{000c}' => ' ',
            other => other,
        })
        .collect()
}
