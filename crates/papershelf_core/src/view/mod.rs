//! View-state objects and render projections.
//!
//! # Responsibility
//! - Hold session-local UI state in explicit, caller-owned values.
//! - Turn papers plus state into plain render data for any surface.
//!
//! # Invariants
//! - Rendering never mutates papers or state.
//! - Nothing here is persisted; state resets with the session.

pub mod actions;
pub mod home;
pub mod library;
pub mod viewer;
