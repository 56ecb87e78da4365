//! Tests for ListPage.

use super::*;
use crate::model::LegalCase;
use crate::query::catalog::{self, case_engine};
use crate::source::DataSet;
use crate::state::search_input_handler::{
    activate_search_input, cancel_search, handle_backspace, handle_char_input, submit_search,
};

fn cases_page() -> ListPage<LegalCase> {
    let data = DataSet::builtin().unwrap();
    ListPage::new(data.cases, case_engine().unwrap(), None).unwrap()
}

fn visible_ids(page: &ListPage<LegalCase>) -> Vec<&str> {
    page.visible().map(|c| c.id.as_str()).collect()
}

// ===== Construction =====

#[test]
fn new_page_shows_everything_with_default_sort() {
    let page = cases_page();

    assert_eq!(page.selection().filter_id.as_str(), "all");
    assert_eq!(page.selection().sort_id.as_str(), catalog::CASE_SORT_DEADLINE);
    assert_eq!(page.visible_len(), 6);
    assert_eq!(page.total_len(), 6);
    assert_eq!(visible_ids(&page), vec!["6", "3", "2", "1", "4", "5"]);
    assert_eq!(page.selected_index(), Some(0));
}

#[test]
fn new_page_accepts_configured_sort() {
    let data = DataSet::builtin().unwrap();
    let page = ListPage::new(
        data.cases,
        case_engine().unwrap(),
        Some(catalog::CASE_SORT_STRENGTH),
    )
    .unwrap();

    assert_eq!(page.sort_label(), "Strength Score");
    assert_eq!(page.visible().next().unwrap().id.as_str(), "5");
}

#[test]
fn new_page_rejects_unknown_sort() {
    let data = DataSet::builtin().unwrap();
    let err = ListPage::new(data.cases, case_engine().unwrap(), Some("alphabetical")).unwrap_err();
    assert_eq!(
        err,
        QueryError::UnknownSort {
            id: "alphabetical".to_string()
        }
    );
}

// ===== Search =====

#[test]
fn typing_refilters_on_every_keystroke() {
    let mut page = cases_page();

    page.update_search(activate_search_input).unwrap();
    page.update_search(|s| handle_char_input(s, 'd')).unwrap();
    // "d" matches most names, types or clients.
    let after_d = page.visible_len();
    page.update_search(|s| handle_char_input(s, 'a')).unwrap();
    page.update_search(|s| handle_char_input(s, 'v')).unwrap();

    assert!(after_d >= page.visible_len());
    assert_eq!(visible_ids(&page), vec!["3"]);
    assert_eq!(page.selection().query_text, "dav");
}

#[test]
fn backspace_widens_the_result() {
    let mut page = cases_page();
    page.set_query_text("davis").unwrap();
    page.update_search(activate_search_input).unwrap();
    for _ in 0..5 {
        page.update_search(handle_backspace).unwrap();
    }
    assert_eq!(page.visible_len(), 6);
}

#[test]
fn submit_keeps_query_and_cancel_clears_it() {
    let mut page = cases_page();
    page.update_search(activate_search_input).unwrap();
    page.update_search(|s| handle_char_input(s, 'x')).unwrap();
    page.update_search(submit_search).unwrap();

    assert!(!page.search().is_typing());
    assert_eq!(page.selection().query_text, "x");

    page.update_search(cancel_search).unwrap();
    assert_eq!(page.selection().query_text, "");
    assert_eq!(page.visible_len(), 6);
}

#[test]
fn no_match_is_an_empty_result() {
    let mut page = cases_page();
    page.set_query_text("no such case").unwrap();

    assert_eq!(page.visible_len(), 0);
    assert_eq!(page.selected_index(), None);
    assert!(page.selected_record().is_none());
}

// ===== Filter / sort =====

#[test]
fn cycle_filter_walks_registration_order_and_wraps() {
    let mut page = cases_page();

    page.cycle_filter(true).unwrap();
    assert_eq!(page.selection().filter_id.as_str(), catalog::CASE_FILTER_ACTIVE);
    assert_eq!(visible_ids(&page), vec!["3", "1", "4"]);

    page.cycle_filter(false).unwrap();
    page.cycle_filter(false).unwrap();
    assert_eq!(page.selection().filter_id.as_str(), catalog::CASE_FILTER_WEAK);
    assert_eq!(page.filter_label(), "Needs Attention");
}

#[test]
fn cycle_sort_wraps_backwards_to_last() {
    let mut page = cases_page();
    page.cycle_sort(false).unwrap();
    assert_eq!(page.selection().sort_id.as_str(), catalog::CASE_SORT_NAME);
}

#[test]
fn set_filter_rejects_unknown_id_and_keeps_selection() {
    let mut page = cases_page();
    assert!(page.set_filter("archived").is_err());
    assert_eq!(page.selection().filter_id.as_str(), "all");
}

#[test]
fn set_sort_changes_order() {
    let mut page = cases_page();
    page.set_sort(catalog::CASE_SORT_PRIORITY).unwrap();
    assert_eq!(visible_ids(&page), vec!["1", "3", "2", "4", "6", "5"]);
}

// ===== Highlight =====

#[test]
fn selection_moves_and_saturates() {
    let mut page = cases_page();
    page.select_prev();
    assert_eq!(page.selected_index(), Some(0));

    for _ in 0..10 {
        page.select_next();
    }
    assert_eq!(page.selected_index(), Some(5));
}

#[test]
fn highlight_follows_record_across_refresh() {
    let mut page = cases_page();
    // Deadline order: 6, 3, 2, 1, 4, 5 -> highlight case 1.
    for _ in 0..3 {
        page.select_next();
    }
    assert_eq!(page.selected_record().unwrap().id.as_str(), "1");

    page.set_sort(catalog::CASE_SORT_PRIORITY).unwrap();
    assert_eq!(page.selected_record().unwrap().id.as_str(), "1");
    assert_eq!(page.selected_index(), Some(0));
}

#[test]
fn highlight_resets_when_record_is_filtered_out() {
    let mut page = cases_page();
    page.select_next(); // case 3
    page.set_filter(catalog::CASE_FILTER_PENDING).unwrap();
    assert_eq!(page.selected_record().unwrap().id.as_str(), "2");
}
