use super::*;

fn record(id: i64, name: &str) -> StudentRecord {
    StudentRecord {
        id,
        name: name.to_owned(),
        roll_no: id * 10,
        age: 10,
        grade: "5A".to_owned(),
    }
}

fn page(records: Vec<StudentRecord>, total: u32) -> StudentPage {
    StudentPage {
        students: records,
        total_records: total,
    }
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn repeated_sort_on_same_field_alternates_direction() {
    let mut roster = RosterState::default();
    assert_eq!(roster.query.sort_order, SortOrder::Asc);

    roster.sort_by(SortField::Id);
    assert_eq!(roster.query.sort_order, SortOrder::Desc);

    roster.sort_by(SortField::Id);
    assert_eq!(roster.query.sort_order, SortOrder::Asc);

    roster.sort_by(SortField::Id);
    assert_eq!(roster.query.sort_order, SortOrder::Desc);
}

#[test]
fn sorting_a_new_field_resets_to_ascending() {
    let mut roster = RosterState::default();
    roster.sort_by(SortField::Id); // id desc
    roster.sort_by(SortField::Age);

    assert_eq!(roster.query.sort_by, SortField::Age);
    assert_eq!(roster.query.sort_order, SortOrder::Asc);
}

#[test]
fn sort_fields_map_to_server_parameter_names() {
    let names: Vec<&str> = SortField::ALL.iter().map(|f| f.query_name()).collect();
    assert_eq!(names, ["id", "name", "roll_no", "age", "grade"]);
}

// =============================================================
// Paging bounds
// =============================================================

#[test]
fn set_page_rejects_out_of_range_targets() {
    let mut roster = RosterState::default();
    roster.apply_page(page(vec![record(1, "Alice")], 25)); // 3 pages of 10

    assert!(!roster.set_page(0));
    assert_eq!(roster.query.page, 1);

    assert!(!roster.set_page(4));
    assert_eq!(roster.query.page, 1);

    assert!(roster.set_page(3));
    assert_eq!(roster.query.page, 3);
}

#[test]
fn set_page_to_the_current_page_is_a_no_op() {
    let mut roster = RosterState::default();
    roster.apply_page(page(vec![record(1, "Alice")], 25));

    assert!(!roster.set_page(1));
}

#[test]
fn empty_roster_has_no_valid_page() {
    let mut roster = RosterState::default();
    assert_eq!(roster.total_pages(), 0);
    assert!(!roster.set_page(1));
    assert_eq!(roster.query.page, 1);
}

#[test]
fn total_pages_rounds_up() {
    let mut roster = RosterState::default();

    roster.apply_page(page(vec![], 10));
    assert_eq!(roster.total_pages(), 1);

    roster.apply_page(page(vec![], 11));
    assert_eq!(roster.total_pages(), 2);
}

// =============================================================
// Search
// =============================================================

#[test]
fn search_resets_to_the_first_page() {
    let mut roster = RosterState::default();
    roster.apply_page(page(vec![], 100));
    assert!(roster.set_page(7));

    roster.search("Alice".to_owned(), "A".to_owned());

    assert_eq!(roster.query.page, 1);
    assert_eq!(roster.query.name_filter, "Alice");
    assert_eq!(roster.query.grade_filter, "A");
}

#[test]
fn search_leaves_sort_untouched() {
    let mut roster = RosterState::default();
    roster.sort_by(SortField::Grade);

    roster.search(String::new(), "6B".to_owned());

    assert_eq!(roster.query.sort_by, SortField::Grade);
    assert_eq!(roster.query.sort_order, SortOrder::Asc);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_is_idempotent() {
    let mut roster = RosterState::default();
    roster.apply_page(page(vec![record(1, "Alice"), record(2, "Bob")], 2));

    roster.select(2);
    roster.select(2);

    assert_eq!(roster.selected_id, Some(2));
    assert_eq!(roster.selected_record().map(|r| r.name.as_str()), Some("Bob"));
}

#[test]
fn refetch_keeps_a_selection_that_is_still_present() {
    let mut roster = RosterState::default();
    roster.apply_page(page(vec![record(1, "Alice"), record(2, "Bob")], 2));
    roster.select(2);

    roster.apply_page(page(vec![record(2, "Bob"), record(3, "Cara")], 2));

    assert_eq!(roster.selected_id, Some(2));
}

#[test]
fn refetch_drops_a_selection_that_disappeared() {
    let mut roster = RosterState::default();
    roster.apply_page(page(vec![record(1, "Alice")], 1));
    roster.select(1);

    roster.apply_page(page(vec![record(2, "Bob")], 1));

    assert_eq!(roster.selected_id, None);
    assert!(roster.selected_record().is_none());
}

#[test]
fn apply_page_replaces_records_and_clears_loading() {
    let mut roster = RosterState::default();
    roster.loading = true;

    roster.apply_page(page(vec![record(5, "Eve")], 14));

    assert!(!roster.loading);
    assert_eq!(roster.total_records, 14);
    assert_eq!(roster.records.len(), 1);
    assert_eq!(roster.records[0].id, 5);
}
