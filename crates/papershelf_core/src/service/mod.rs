//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate data-source loading into use-case level APIs.
//! - Keep CLI and view callers decoupled from source details.

pub mod library_service;
