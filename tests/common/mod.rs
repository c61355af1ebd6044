//! Shared test fixtures for the pokebox SDK integration tests.
//!
//! Provides JSON payload builders shaped like the PokeAPI responses, an
//! in-process [`StubCatalog`] serving canned data, and a
//! [`RecordingNotifier`] that captures every event it receives.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Instant;

use pokebox_sdk::models::{
    FlavorTextEntry, NamedResource, PokemonData, PokemonRef, PokemonSpecies, Sprites, TypeSlot,
};
use pokebox_sdk::{CatalogApi, DisplayNotifier, PokeboxError, Result};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// JSON payloads
// ---------------------------------------------------------------------------

pub fn list_json(base: &str, names: &[&str]) -> Value {
    let results: Vec<Value> = names
        .iter()
        .map(|name| json!({ "name": name, "url": format!("{base}/pokemon/{name}/") }))
        .collect();
    json!({ "count": 1302, "next": null, "previous": null, "results": results })
}

pub fn detail_json(name: &str, forms: Value) -> Value {
    json!({
        "id": 25,
        "name": name,
        "forms": forms,
        "sprites": {
            "front_default": format!("https://raw.githubusercontent.com/PokeAPI/sprites/{name}.png"),
            "back_default": null
        },
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
        ]
    })
}

pub fn species_json(entries: &[(&str, &str)]) -> Value {
    let entries: Vec<Value> = entries
        .iter()
        .map(|(lang, text)| {
            json!({
                "flavor_text": text,
                "language": { "name": lang, "url": format!("https://pokeapi.co/api/v2/language/{lang}/") },
                "version": { "name": "red", "url": "https://pokeapi.co/api/v2/version/1/" }
            })
        })
        .collect();
    json!({ "name": "species", "flavor_text_entries": entries })
}

// ---------------------------------------------------------------------------
// StubCatalog
// ---------------------------------------------------------------------------

pub fn names(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{prefix}-{i}")).collect()
}

pub fn stub_ref(name: &str) -> PokemonRef {
    PokemonRef::new(name, format!("stub://pokemon/{name}"))
}

/// Canned [`CatalogApi`] backed by in-memory data.
///
/// Every call yields to the executor once before answering so concurrent
/// callers interleave the way they would over a network.
#[derive(Default)]
pub struct StubCatalog {
    /// Pages in order; page `i` answers `offset == i * limit`.
    pub pages: Vec<Vec<String>>,
    pub fail_pages: bool,
    pub failing_details: HashSet<String>,
    pub failing_species: HashSet<String>,
    pub exact: HashMap<String, PokemonRef>,
    pub page_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    pub exact_calls: AtomicUsize,
}

impl StubCatalog {
    pub fn with_pages(pages: Vec<Vec<String>>) -> Self {
        Self {
            pages,
            ..Default::default()
        }
    }

    pub fn page_calls(&self) -> usize {
        self.page_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn exact_calls(&self) -> usize {
        self.exact_calls.load(Ordering::SeqCst)
    }
}

fn stub_name(url_or_name: &str) -> &str {
    url_or_name.rsplit('/').next().unwrap_or(url_or_name)
}

impl CatalogApi for StubCatalog {
    async fn fetch_page(&self, limit: u32, offset: u32) -> Result<Vec<PokemonRef>> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        if self.fail_pages {
            return Err(PokeboxError::InvalidArgument("stub page failure".into()));
        }
        let index = (offset / limit) as usize;
        Ok(self
            .pages
            .get(index)
            .map(|page| page.iter().map(|name| stub_ref(name)).collect())
            .unwrap_or_default())
    }

    async fn fetch_detail(&self, url_or_name: &str) -> Result<PokemonData> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        let name = stub_name(url_or_name);
        if self.failing_details.contains(name) {
            return Err(PokeboxError::NotFound(format!("stub detail for {name}")));
        }
        Ok(PokemonData {
            name: name.to_string(),
            sprites: Sprites {
                front_default: Some(format!("stub://sprites/{name}.png")),
            },
            types: vec![TypeSlot {
                slot: 1,
                type_field: NamedResource {
                    name: "normal".into(),
                    url: "stub://type/1".into(),
                },
            }],
        })
    }

    async fn fetch_description(&self, name: &str) -> Result<PokemonSpecies> {
        tokio::task::yield_now().await;
        if self.failing_species.contains(name) {
            return Err(PokeboxError::NotFound(format!("stub species for {name}")));
        }
        let entry = |lang: &str, text: String| FlavorTextEntry {
            flavor_text: text,
            language: NamedResource {
                name: lang.into(),
                url: format!("stub://language/{lang}"),
            },
        };
        Ok(PokemonSpecies {
            flavor_text_entries: vec![
                entry("fr", format!("{name} en français")),
                entry("en", format!("About\n{name}")),
            ],
        })
    }

    async fn fetch_exact_match(&self, name: &str) -> Result<PokemonRef> {
        self.exact_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.exact
            .get(name)
            .cloned()
            .ok_or_else(|| PokeboxError::NotFound(name.to_string()))
    }
}

// ---------------------------------------------------------------------------
// RecordingNotifier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LoadingStarted,
    LoadingFinished { success: bool },
    SearchStarted,
    SearchFinished { found: Option<String> },
}

/// [`DisplayNotifier`] that records every event in order.
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Event>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, event: &Event) -> usize {
        self.events().iter().filter(|e| *e == event).count()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl DisplayNotifier for RecordingNotifier {
    fn on_loading_started(&self) {
        self.push(Event::LoadingStarted);
    }

    fn on_loading_finished(&self, started_at: Instant, success: bool) {
        assert!(started_at <= Instant::now());
        self.push(Event::LoadingFinished { success });
    }

    fn on_search_started(&self) {
        self.push(Event::SearchStarted);
    }

    fn on_search_finished(&self, result: Option<&PokemonRef>) {
        self.push(Event::SearchFinished {
            found: result.map(|r| r.name.clone()),
        });
    }
}
