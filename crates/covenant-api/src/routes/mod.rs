//! # Route Modules
//!
//! Each module defines an Axum Router for one API surface area:
//!
//! - `analyses` — contract analysis submission.
//! - `regulations` — read-only catalog queries.
//!
//! Routers are assembled in `lib.rs` into the application.

pub mod analyses;
pub mod regulations;
