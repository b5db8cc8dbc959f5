use super::*;
use crate::state::roster::{SortField, SortOrder};

// =============================================================
// URL construction
// =============================================================

#[test]
fn students_url_includes_every_query_parameter() {
    let query = QueryState::default();
    let url = students_url("https://records.example", &query);
    assert_eq!(
        url,
        "https://records.example/students?page=1&limit=10&sort_by=id&sort_order=asc&name=&grade="
    );
}

#[test]
fn students_url_reflects_sort_and_filters() {
    let mut query = QueryState::default();
    query.page = 3;
    query.sort_by = SortField::RollNo;
    query.sort_order = SortOrder::Desc;
    query.name_filter = "Alice".to_owned();
    query.grade_filter = "5A".to_owned();

    let url = students_url("/api", &query);
    assert_eq!(
        url,
        "/api/students?page=3&limit=10&sort_by=roll_no&sort_order=desc&name=Alice&grade=5A"
    );
}

// =============================================================
// Status classification
// =============================================================

#[test]
fn missing_or_insufficient_credentials_map_to_unauthorized() {
    assert_eq!(ApiError::from_status(401), ApiError::Unauthorized(401));
    assert_eq!(ApiError::from_status(403), ApiError::Unauthorized(403));
}

#[test]
fn other_statuses_keep_their_code() {
    assert_eq!(ApiError::from_status(404), ApiError::Status(404));
    assert_eq!(ApiError::from_status(500), ApiError::Status(500));
}

#[test]
fn error_messages_name_the_kind() {
    assert_eq!(
        ApiError::Unauthorized(403).to_string(),
        "not authorized (status 403)"
    );
    assert_eq!(
        ApiError::Transport("connection refused".to_owned()).to_string(),
        "request failed: connection refused"
    );
}
