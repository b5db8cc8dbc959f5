//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `roster`, `editor`, `ui`) so
//! individual components can depend on small focused models. Every
//! module here is plain Rust with no browser types, which keeps the
//! paging/sorting/selection rules unit-testable on the host.

pub mod editor;
pub mod roster;
pub mod session;
pub mod ui;
