//! Tests for AppState.
//!
//! These tests verify pure state transitions without any TUI dependencies.

use super::*;
use crate::state::search_input_handler::{handle_backspace, handle_char_input, handle_cursor_left};
use crate::test_harness::sample_companies;

// ===== Test Helpers =====

fn loaded(page_size: usize) -> AppState {
    let mut state = AppState::new(PageSize::new(page_size).unwrap(), ViewMode::Cards);
    state.finish_load(Ok(sample_companies()));
    state
}

fn names(state: &AppState) -> Vec<String> {
    state
        .current_page()
        .items
        .iter()
        .map(|c| c.name.clone())
        .collect()
}

// ===== Construction =====

#[test]
fn new_state_is_loading_on_page_one() {
    let state = AppState::default();

    assert_eq!(state.load_state(), &LoadState::Loading);
    assert_eq!(state.page(), 1);
    assert!(state.records().is_empty());
    assert_eq!(state.focus, Focus::Browse);
    assert!(!state.help_visible);
    assert_eq!(state.view_mode, ViewMode::Cards);
}

// ===== Loading =====

#[test]
fn successful_load_replaces_records_and_facets() {
    let state = loaded(9);

    assert_eq!(state.load_state(), &LoadState::Ready);
    assert_eq!(state.records().len(), 9);
    assert_eq!(
        state.facets().locations,
        vec!["Austin", "Berlin", "London", "Toronto"]
    );
    assert!(!state.can_retry());
}

#[test]
fn failed_load_leaves_records_empty_and_offers_retry() {
    let mut state = AppState::default();
    state.finish_load(Err(FetchError::Status { status: 503 }));

    assert!(state.records().is_empty());
    assert!(state.facets().industries.is_empty());
    assert!(state.can_retry());
    match state.load_state() {
        LoadState::Failed { reason } => assert!(reason.contains("503"), "reason: {reason}"),
        other => panic!("Expected Failed, got {:?}", other),
    }
}

#[test]
fn retry_after_failure_recovers() {
    let mut state = AppState::default();
    state.finish_load(Err(FetchError::Transport("connection refused".into())));
    assert!(state.can_retry());

    state.begin_load();
    assert_eq!(state.load_state(), &LoadState::Loading);
    assert!(!state.can_retry());

    state.finish_load(Ok(sample_companies()));
    assert_eq!(state.load_state(), &LoadState::Ready);
    assert_eq!(state.records().len(), 9);
}

#[test]
fn failure_after_success_clears_records() {
    let mut state = loaded(9);
    state.begin_load();
    state.finish_load(Err(FetchError::Decode("bad json".into())));

    assert!(state.records().is_empty());
    assert!(state.current_page().items.is_empty());
}

#[test]
fn reload_resets_page() {
    let mut state = loaded(2);
    state.next_page();
    state.next_page();
    assert_eq!(state.page(), 3);

    state.finish_load(Ok(sample_companies()));
    assert_eq!(state.page(), 1);
}

// ===== Filtering =====

#[test]
fn industry_and_founded_sort_scenario() {
    let mut state = loaded(9);
    state.set_industry(Some("Tech".to_string()));
    state.set_sort_field(SortField::Founded);

    let page = state.current_page();
    let years: Vec<i32> = page.items.iter().map(|c| c.founded).collect();
    assert_eq!(years, vec![2001, 2015, 2019]);
    assert_eq!(page.info.total_pages, 1);
    assert!(!page.info.has_next);
}

#[test]
fn every_filter_change_resets_page() {
    let mut state = loaded(2);

    let changes: Vec<Box<dyn Fn(&mut AppState)>> = vec![
        Box::new(|s: &mut AppState| s.set_search_text("a")),
        Box::new(|s: &mut AppState| s.set_industry(Some("Energy".into()))),
        Box::new(|s: &mut AppState| s.set_location(Some("Berlin".into()))),
        Box::new(|s: &mut AppState| s.cycle_industry(true)),
        Box::new(|s: &mut AppState| s.cycle_location(false)),
        Box::new(|s: &mut AppState| s.clear_filters()),
        Box::new(|s: &mut AppState| s.set_sort_field(SortField::Employees)),
        Box::new(|s: &mut AppState| s.toggle_sort_direction()),
        Box::new(|s: &mut AppState| s.cycle_sort_field()),
    ];

    for change in changes {
        state.clear_filters();
        state.last_page();
        assert!(state.page() > 1, "Precondition: more than one page");

        change(&mut state);
        assert_eq!(state.page(), 1);
    }
}

#[test]
fn search_text_filters_name_or_description() {
    let mut state = loaded(9);
    state.set_search_text("PLATFORM");

    assert_eq!(names(&state), vec!["CareBridge", "Quantum Stack"]);
    assert!(state.has_active_filters());
}

#[test]
fn empty_search_text_is_no_filter() {
    let mut state = loaded(9);
    state.set_search_text("");

    assert!(!state.has_active_filters());
    assert_eq!(state.filtered_count(), 9);
}

#[test]
fn editing_search_applies_live() {
    let mut state = loaded(9);
    for ch in "bank".chars() {
        state.edit_search(|input| handle_char_input(input, ch));
    }
    assert_eq!(names(&state), vec!["Ledgerline"]);

    state.edit_search(handle_backspace);
    assert_eq!(state.search_input().text(), "ban");
}

#[test]
fn cursor_only_edit_keeps_page() {
    let mut state = loaded(2);
    state.set_search_text("e");
    state.next_page();
    let page = state.page();
    assert!(page > 1);

    state.edit_search(handle_cursor_left);
    assert_eq!(state.page(), page);
}

#[test]
fn clear_filters_resets_search_box() {
    let mut state = loaded(9);
    state.set_search_text("forge");
    state.set_location(Some("Toronto".into()));

    state.clear_filters();

    assert!(state.criteria().is_empty());
    assert_eq!(state.search_input().text(), "");
    assert_eq!(state.filtered_count(), 9);
}

#[test]
fn empty_string_industry_means_all() {
    let mut state = loaded(9);
    state.set_industry(Some(String::new()));
    assert_eq!(state.criteria().industry, None);
}

#[test]
fn cycle_industry_walks_facets_then_back_to_all() {
    let mut state = loaded(9);
    let mut seen = Vec::new();
    for _ in 0..6 {
        state.cycle_industry(true);
        seen.push(state.criteria().industry.clone());
    }

    assert_eq!(
        seen,
        vec![
            Some("Energy".to_string()),
            Some("Finance".to_string()),
            Some("Healthcare".to_string()),
            Some("Retail".to_string()),
            Some("Tech".to_string()),
            None,
        ]
    );
}

#[test]
fn cycle_location_backwards_starts_at_last() {
    let mut state = loaded(9);
    state.cycle_location(false);
    assert_eq!(state.criteria().location.as_deref(), Some("Toronto"));
}

#[test]
fn no_match_yields_empty_page() {
    let mut state = loaded(9);
    state.set_search_text("zzzz");

    let page = state.current_page();
    assert!(page.items.is_empty());
    assert_eq!(page.info.total, 0);
    assert_eq!(page.info.total_pages, 0);
}

// ===== Sorting =====

#[test]
fn default_sort_is_name_ascending() {
    let state = loaded(3);
    assert_eq!(state.sort_spec(), SortSpec::default());
    assert_eq!(names(&state), vec!["ByteWorks", "CareBridge", "Greenfield Energy"]);
}

#[test]
fn toggle_direction_reverses_order() {
    let mut state = loaded(3);
    state.toggle_sort_direction();
    assert_eq!(state.sort_spec().direction, SortDirection::Descending);
    assert_eq!(names(&state), vec!["Quantum Stack", "Pixel Forge", "Northwind Goods"]);
}

#[test]
fn cycle_sort_field_wraps_around() {
    let mut state = loaded(9);
    for _ in 0..SortField::ALL.len() {
        state.cycle_sort_field();
    }
    assert_eq!(state.sort_spec().field, SortField::Name);
}

// ===== Pagination =====

#[test]
fn next_page_clamps_at_last_page() {
    let mut state = loaded(4);
    assert_eq!(state.total_pages(), 3);

    for _ in 0..10 {
        state.next_page();
    }
    assert_eq!(state.page(), 3);
    assert_eq!(state.current_page().items.len(), 1);
}

#[test]
fn prev_page_clamps_at_one() {
    let mut state = loaded(4);
    state.prev_page();
    assert_eq!(state.page(), 1);
}

#[test]
fn first_and_last_page() {
    let mut state = loaded(4);
    state.last_page();
    assert_eq!(state.page(), 3);
    state.first_page();
    assert_eq!(state.page(), 1);
}

#[test]
fn navigation_with_no_results_stays_on_page_one() {
    let mut state = loaded(4);
    state.set_search_text("nothing matches this");

    state.next_page();
    assert_eq!(state.page(), 1);
    state.last_page();
    assert_eq!(state.page(), 1);
}

// ===== Presentation =====

#[test]
fn view_mode_toggles_and_parses() {
    let mut state = AppState::default();
    state.toggle_view_mode();
    assert_eq!(state.view_mode, ViewMode::Table);
    state.toggle_view_mode();
    assert_eq!(state.view_mode, ViewMode::Cards);

    assert_eq!("table".parse(), Ok(ViewMode::Table));
    assert_eq!(
        "grid".parse::<ViewMode>(),
        Err(UnknownViewMode("grid".to_string()))
    );
}

#[test]
fn search_focus_round_trip_keeps_text() {
    let mut state = loaded(9);
    state.start_search();
    assert_eq!(state.focus, Focus::Search);
    state.edit_search(|input| handle_char_input(input, 'q'));
    state.finish_search();

    assert_eq!(state.focus, Focus::Browse);
    assert_eq!(state.search_input().text(), "q");
    assert!(state.has_active_filters());
}

// ===== Fitting the page to the screen =====

#[test]
fn fit_page_caps_size_and_keeps_every_record_reachable() {
    let mut state = loaded(30);
    state.fit_page_to(4);

    assert_eq!(state.page_size().get(), 4);
    assert_eq!(state.configured_page_size().get(), 30);
    assert_eq!(state.total_pages(), 3);

    let mut seen = Vec::new();
    loop {
        seen.extend(names(&state));
        let before = state.page();
        state.next_page();
        if state.page() == before {
            break;
        }
    }
    assert_eq!(seen.len(), 9, "every record shows up on some page: {seen:?}");
}

#[test]
fn fit_page_keeps_first_visible_record_on_screen() {
    let mut state = loaded(4);
    state.next_page();
    state.next_page();
    // Page 3 of size 4 starts at the ninth record
    assert_eq!(names(&state), vec!["Quantum Stack"]);

    state.fit_page_to(3);

    assert_eq!(state.page(), 3);
    assert!(names(&state).contains(&"Quantum Stack".to_string()));
}

#[test]
fn fit_page_restores_configured_size_when_screen_grows() {
    let mut state = loaded(6);
    state.fit_page_to(3);
    state.next_page();
    assert_eq!(state.page(), 2);

    state.fit_page_to(100);

    assert_eq!(state.page_size().get(), 6);
    // Record 4 (first of old page 2) lives on page 1 at size 6
    assert_eq!(state.page(), 1);
}

#[test]
fn fit_page_treats_zero_capacity_as_one() {
    let mut state = loaded(9);
    state.fit_page_to(0);
    assert_eq!(state.page_size().get(), 1);
    assert_eq!(state.total_pages(), 9);
}
