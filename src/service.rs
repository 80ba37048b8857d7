//! Ticket service: create, patch and list operations on the board
//!
//! The service is the only writer of the board. Every create/update runs its
//! whole load-modify-save cycle under one process-wide async lock, which is
//! what makes id assignment safe under concurrent requests. Listing takes no
//! lock: the store's atomic-replace writes guarantee a reader always sees a
//! complete document.

use crate::core::{
    CreateTicketRequest, Ticket, UpdateTicketRequest, validate_create, validate_patch,
};
use crate::error::{Result, WorkManagerError};
use crate::storage::{BoardStore, JsonFileStore};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Orchestrates validator and store to implement the board operations
pub struct TicketService<S: BoardStore = JsonFileStore> {
    store: S,
    /// Serializes every read-modify-write cycle against the backing file
    write_lock: Mutex<()>,
}

impl<S: BoardStore> TicketService<S> {
    /// Creates a service on top of the given store
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the full board in stored order.
    ///
    /// A board that was never created is an empty list, not an error.
    pub fn list_tickets(&self) -> Result<Vec<Ticket>> {
        self.store.load()
    }

    /// Validates, persists and returns a new ticket.
    ///
    /// The id is `max(existing ids) + 1`, or 1 on an empty board; the
    /// creation date is stamped here and never changes afterwards.
    pub async fn create_ticket(&self, input: CreateTicketRequest) -> Result<Ticket> {
        let draft = validate_create(input)?;

        let _guard = self.write_lock.lock().await;
        let mut board = self.store.load()?;
        let id = board.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let ticket = draft.into_ticket(id);
        board.push(ticket.clone());
        self.store.save(&board)?;

        info!(id, title = %ticket.title, "ticket created");
        Ok(ticket)
    }

    /// Applies a partial update to an existing ticket and returns the merged
    /// result.
    ///
    /// Fields present in the patch overwrite stored values; the reserved
    /// `comment` key appends one entry to the comment history. A missing
    /// board file is a not-found condition here, unlike list/create: there
    /// is nothing to update.
    pub async fn update_ticket(&self, id: u64, input: UpdateTicketRequest) -> Result<Ticket> {
        let patch = validate_patch(input)?;

        let _guard = self.write_lock.lock().await;
        if !self.store.exists() {
            debug!(id, "update rejected, board file absent");
            return Err(WorkManagerError::TicketNotFound { id });
        }

        let mut board = self.store.load()?;
        let ticket = board
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(WorkManagerError::TicketNotFound { id })?;

        ticket.apply(patch);
        let updated = ticket.clone();
        self.store.save(&board)?;

        info!(id, status = %updated.status, "ticket updated");
        Ok(updated)
    }
}
