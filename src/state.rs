use crate::config;
use crate::models::PokemonRef;

// ---------------------------------------------------------------------------
// PaginationState
// ---------------------------------------------------------------------------

/// Progress through the paginated listing.
///
/// `offset` moves forward by `page_size` after every page that was fetched,
/// whatever happened to that page's detail requests. Once a short page has
/// been seen `is_exhausted` stays true for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub offset: u32,
    pub page_size: u32,
    pub is_loading: bool,
    pub is_exhausted: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            offset: 0,
            page_size: config::PAGE_SIZE,
            is_loading: false,
            is_exhausted: false,
        }
    }
}

impl PaginationState {
    /// Whether a call to load the next page would do anything.
    pub fn can_load(&self) -> bool {
        !self.is_loading && !self.is_exhausted
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Exact-name search. A non-empty `current_query` means search mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub current_query: String,
    pub result: Option<PokemonRef>,
}

impl SearchState {
    pub fn is_active(&self) -> bool {
        !self.current_query.is_empty()
    }

    pub fn clear(&mut self) {
        self.current_query.clear();
        self.result = None;
    }
}

/// Lowercased, whitespace-trimmed form of a search query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}
