//! Wire types shared with the student-records API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A student record as returned by the server.
///
/// `id` is server-assigned and immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub roll_no: i64,
    pub age: i64,
    pub grade: String,
}

/// The writable fields of a record; the server assigns `id`.
///
/// Used as the body for both create and update requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub name: String,
    pub roll_no: i64,
    pub age: i64,
    pub grade: String,
}

/// One page of records plus the total count matching the query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StudentPage {
    pub students: Vec<StudentRecord>,
    pub total_records: u32,
}

/// Credentials posted to a login endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Details posted to a signup endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Successful auth response carrying the bearer credential.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
}
