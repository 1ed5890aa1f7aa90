//! eccd-core
//!
//! Pure domain types shared by the scoring engine and its callers: students,
//! evaluation periods, and the scoring request as it arrives from upstream.
//! No scoring logic lives here.

pub mod date;
pub mod error;
pub mod models;
