use super::*;

#[test]
fn empty_or_blank_query_shows_top_questions() {
    assert_eq!(results_heading(""), "Top Questions");
    assert_eq!(results_heading("   "), "Top Questions");
}

#[test]
fn active_query_is_echoed_in_the_heading() {
    assert_eq!(
        results_heading("borrow checker"),
        "Search results for \"borrow checker\""
    );
}

#[test]
fn query_is_trimmed_before_display() {
    assert_eq!(results_heading("  lifetimes "), "Search results for \"lifetimes\"");
}
