use super::*;

#[test]
fn expanded_papers_default_is_collapsed() {
    let expanded = ExpandedPapers::default();
    assert!(!expanded.is_expanded(0));
}

#[test]
fn toggle_expands_one_row_only() {
    let mut expanded = ExpandedPapers::default();
    expanded.toggle(2);
    assert!(expanded.is_expanded(2));
    assert!(!expanded.is_expanded(1));
}

#[test]
fn toggle_twice_returns_to_collapsed() {
    let mut expanded = ExpandedPapers::default();
    expanded.toggle(0);
    expanded.toggle(0);
    assert_eq!(expanded, ExpandedPapers::default());
}

#[test]
fn rows_toggle_independently() {
    let mut expanded = ExpandedPapers::default();
    expanded.toggle(0);
    expanded.toggle(3);
    expanded.toggle(0);
    assert!(!expanded.is_expanded(0));
    assert!(expanded.is_expanded(3));
}

