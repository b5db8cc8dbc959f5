use super::*;

// =============================================================
// List response shape
// =============================================================

#[test]
fn student_page_deserializes_documented_shape() {
    let body = r#"{
        "students": [
            {"id": 1, "name": "Alice", "roll_no": 7, "age": 11, "grade": "5A"},
            {"id": 2, "name": "Bob", "roll_no": 12, "age": 10, "grade": "5A"}
        ],
        "total_records": 42
    }"#;

    let page: StudentPage = serde_json::from_str(body).expect("valid page");
    assert_eq!(page.total_records, 42);
    assert_eq!(page.students.len(), 2);
    assert_eq!(
        page.students[0],
        StudentRecord {
            id: 1,
            name: "Alice".to_owned(),
            roll_no: 7,
            age: 11,
            grade: "5A".to_owned(),
        }
    );
}

#[test]
fn legacy_listing_is_a_raw_array() {
    let body = r#"[{"id": 3, "name": "Cara", "roll_no": 1, "age": 12, "grade": "6B"}]"#;
    let records: Vec<StudentRecord> = serde_json::from_str(body).expect("valid array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].grade, "6B");
}

// =============================================================
// Write bodies
// =============================================================

#[test]
fn draft_serializes_without_an_id_field() {
    let draft = StudentDraft {
        name: "Bob".to_owned(),
        roll_no: 12,
        age: 10,
        grade: "5A".to_owned(),
    };
    let body = serde_json::to_value(&draft).expect("serializable");
    assert!(body.get("id").is_none());
    assert_eq!(body["name"], "Bob");
    assert_eq!(body["roll_no"], 12);
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn auth_response_reads_access_token() {
    let resp: AuthResponse =
        serde_json::from_str(r#"{"access_token": "tok-123"}"#).expect("valid response");
    assert_eq!(resp.access_token, "tok-123");
}

#[test]
fn signup_request_carries_email() {
    let req = SignupRequest {
        username: "sam".to_owned(),
        password: "pw".to_owned(),
        email: "sam@example.com".to_owned(),
    };
    let body = serde_json::to_value(&req).expect("serializable");
    assert_eq!(body["email"], "sam@example.com");
}
