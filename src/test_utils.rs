//! Test utilities for work-manager
//!
//! This module provides common test fixtures and utilities to reduce
//! duplication in test code across the codebase.

#![cfg(test)]

use crate::core::{CreateTicketRequest, Ticket, UpdateTicketRequest};
use crate::service::TicketService;
use crate::storage::JsonFileStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture: a temporary board file plus a service on top of it
pub struct TestBoard {
    pub temp_dir: TempDir,
    pub data_file: PathBuf,
    pub service: TicketService<JsonFileStore>,
}

impl TestBoard {
    /// Creates a fixture whose backing file does not exist yet
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_file = temp_dir.path().join("tickets.json");
        let service = TicketService::new(JsonFileStore::new(&data_file));

        Self {
            temp_dir,
            data_file,
            service,
        }
    }

    /// A fresh store handle on the same backing file, for direct inspection
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.data_file)
    }

    /// Writes the given tickets straight to the backing file
    pub fn seed(&self, tickets: Vec<Ticket>) {
        self.store()
            .save_board(&tickets)
            .expect("Failed to seed board");
    }
}

/// A complete, valid create request with the given title
pub fn create_request(title: &str) -> CreateTicketRequest {
    CreateTicketRequest {
        title: Some(title.to_string()),
        description: Some(format!("Description of {title}")),
        assignee: Some("tester".to_string()),
        effort: Some(3),
        priority: Some("med".to_string()),
        status: None,
    }
}

/// Builds a patch request from a JSON literal, the way the API layer would
pub fn patch_json(body: serde_json::Value) -> UpdateTicketRequest {
    serde_json::from_value(body).expect("Failed to build patch request")
}
