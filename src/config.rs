use std::time::Duration;

pub const API_BASE: &str = "https://pokeapi.co/api/v2";

/// Number of entries requested per listing page.
pub const PAGE_SIZE: u32 = 20;

/// Language tag of the flavor text shown as the description.
pub const DESCRIPTION_LANGUAGE: &str = "en";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shortest time a loading indicator should stay on screen.
pub const MIN_LOADING_VISIBLE: Duration = Duration::from_secs(1);

pub fn default_user_agent() -> String {
    format!("pokebox-sdk/{}", env!("CARGO_PKG_VERSION"))
}

fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// `GET /pokemon?limit=<L>&offset=<O>`
pub fn page_url(base: &str, limit: u32, offset: u32) -> String {
    format!("{}/pokemon?limit={}&offset={}", trim_base(base), limit, offset)
}

/// `GET /pokemon/<name>`
pub fn detail_url(base: &str, name: &str) -> String {
    format!("{}/pokemon/{}", trim_base(base), name)
}

/// `GET /pokemon-species/<name>`
pub fn species_url(base: &str, name: &str) -> String {
    format!("{}/pokemon-species/{}", trim_base(base), name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_carries_limit_and_offset() {
        assert_eq!(
            page_url(API_BASE, 20, 40),
            "https://pokeapi.co/api/v2/pokemon?limit=20&offset=40"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        assert_eq!(
            detail_url("http://localhost:8080/", "pikachu"),
            "http://localhost:8080/pokemon/pikachu"
        );
        assert_eq!(
            species_url("http://localhost:8080//", "pikachu"),
            "http://localhost:8080/pokemon-species/pikachu"
        );
    }
}
