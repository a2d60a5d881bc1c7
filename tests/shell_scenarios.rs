//! Integration tests: the public state API driven the way the shell drives it.
//!
//! These run the configured store to completion and feed the result into
//! `AppState`, without a terminal.

use compdir::config::ResolvedConfig;
use compdir::query::{cycle_choice, Facets, PageSize, SortDirection, SortField};
use compdir::source::{build_store, fallback_companies, FetchPolicy};
use compdir::state::{AppState, LoadState, ViewMode};
use std::time::Duration;

fn unreachable_config(policy: FetchPolicy) -> ResolvedConfig {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    ResolvedConfig {
        api_base_url: format!("http://{}", addr),
        fetch_policy: policy,
        page_size: PageSize::new(5).unwrap(),
        request_timeout: Duration::from_secs(2),
        ..ResolvedConfig::default()
    }
}

async fn load(config: &ResolvedConfig) -> AppState {
    let store = build_store(config).expect("store builds");
    let mut state = AppState::new(config.page_size, ViewMode::Cards);
    state.finish_load(store.fetch_companies().await);
    state
}

#[tokio::test]
async fn strict_policy_surfaces_the_outage() {
    let state = load(&unreachable_config(FetchPolicy::Strict)).await;

    match state.load_state() {
        LoadState::Failed { reason } => {
            assert!(reason.contains("could not reach"), "reason: {}", reason)
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(state.records().is_empty());
    assert!(state.can_retry());
    assert_eq!(state.current_page().info.total_pages, 0);
}

#[tokio::test]
async fn fallback_policy_serves_bundled_data() {
    let state = load(&unreachable_config(FetchPolicy::Fallback)).await;

    assert_eq!(state.load_state(), &LoadState::Ready);
    assert!(!state.can_retry());
    assert_eq!(state.records(), fallback_companies().as_slice());
}

#[tokio::test]
async fn browsing_the_bundled_data() {
    let mut state = load(&unreachable_config(FetchPolicy::Fallback)).await;
    let total = fallback_companies().len();

    assert_eq!(state.total_pages(), total.div_ceil(5));
    state.last_page();
    assert_eq!(state.page(), state.total_pages());

    // Any criteria or sort change lands back on page 1
    state.set_sort_field(SortField::Employees);
    assert_eq!(state.page(), 1);
    state.set_sort_direction(SortDirection::Descending);

    let largest = state.current_page().items[0].employees;
    let max = fallback_companies()
        .iter()
        .map(|c| c.employees)
        .max()
        .unwrap();
    assert_eq!(largest, max);

    let industry = state.facets().industries[0].clone();
    state.next_page();
    state.set_industry(Some(industry.clone()));
    assert_eq!(state.page(), 1);
    assert!(state
        .current_page()
        .items
        .iter()
        .all(|c| c.industry == industry));
}

#[tokio::test]
async fn industry_cycle_follows_the_public_facet_order() {
    let state = load(&unreachable_config(FetchPolicy::Fallback)).await;
    let facets = Facets::from_records(state.records());
    assert_eq!(state.facets(), &facets);

    let mut state = state;
    let mut expected = None;
    for _ in 0..=facets.industries.len() {
        expected = cycle_choice(&facets.industries, expected.as_deref(), true);
        state.cycle_industry(true);
        assert_eq!(state.criteria().industry, expected);
    }
    assert_eq!(expected, None, "a full lap returns to all industries");
}
