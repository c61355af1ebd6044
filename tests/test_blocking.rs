//! Blocking facade, only built with the `blocking` feature.

#![cfg(feature = "blocking")]

mod common;

use common::{names, stub_ref, StubCatalog};
use pokebox_sdk::{BlockingOrchestrator, NoopNotifier, Orchestrator, PageLoad};

#[test]
fn drives_pages_and_search_on_calling_thread() {
    let mut catalog = StubCatalog::with_pages(vec![names("a", 20), names("b", 3)]);
    catalog.exact.insert("pikachu".into(), stub_ref("pikachu"));
    let browser = BlockingOrchestrator::new(Orchestrator::new(catalog, NoopNotifier)).unwrap();

    assert!(matches!(
        browser.load_more_page(),
        PageLoad::Finished { fetched: 20, success: true, .. }
    ));
    assert!(matches!(
        browser.load_more_page(),
        PageLoad::Finished { fetched: 3, .. }
    ));
    assert_eq!(browser.load_more_page(), PageLoad::Skipped);
    assert_eq!(browser.cache().len(), 23);

    assert_eq!(browser.set_query("pikachu"), Some(stub_ref("pikachu")));
    assert_eq!(browser.visible_items(), vec![stub_ref("pikachu")]);
    browser.clear_search();
    assert_eq!(browser.visible_items().len(), 23);
}
