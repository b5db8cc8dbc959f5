//! Route-level pages: login, signup, and the dashboard.

pub mod dashboard;
pub mod login;
pub mod signup;
