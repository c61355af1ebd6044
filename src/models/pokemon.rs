use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PokemonData — Payload of `GET /pokemon/<name>`
// ---------------------------------------------------------------------------

/// The subset of the Pokemon resource needed to render a row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonData {
    pub name: String,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
}

impl PokemonData {
    /// Type names in slot order as served.
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|slot| slot.type_field.name.clone()).collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: i64,
    #[serde(rename = "type")]
    pub type_field: NamedResource,
}

// ---------------------------------------------------------------------------
// NamedResource — `{name, url}` link used throughout the API
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}
