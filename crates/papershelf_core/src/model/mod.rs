//! Domain model for saved and searchable papers.
//!
//! # Responsibility
//! - Define the canonical paper record consumed by search and view layers.
//!
//! # Invariants
//! - Papers are immutable inputs for the lifetime of a view session.

pub mod paper;
