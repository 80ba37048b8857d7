//! work-manager - a kanban-style ticket tracker with a JSON-backed REST API
//!
//! This crate provides the full backend for a ticket board:
//! - A file-backed store holding the whole board in one JSON document
//! - Pure validation of create and patch requests
//! - A service owning id assignment, the patch-merge rules and the
//!   process-wide write lock that makes concurrent mutations safe
//! - An axum REST layer exposing the board at `/api/tickets`

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

//! # Concurrent Safety
//!
//! Every create and update runs its load-modify-save cycle under a single
//! process-wide lock, and the store replaces the board file atomically, so
//! concurrent requests never produce duplicate ids and readers never see a
//! partially written document.
//!
//! # Example
//!
//! ```rust,ignore
//! use work_manager::service::TicketService;
//! use work_manager::storage::JsonFileStore;
//!
//! let service = TicketService::new(JsonFileStore::new("tickets.json"));
//!
//! // Operations are async because mutations queue on the write lock
//! let tickets = service.list_tickets()?;
//! ```

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod service;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, WorkManagerError};
