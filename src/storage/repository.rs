use crate::core::Ticket;
use crate::error::Result;

/// Repository trait for board storage operations
///
/// This trait defines the interface for loading and persisting the full
/// ticket collection, allowing for different storage implementations. The
/// board is always read and written as a whole; there is no per-ticket
/// persistence.
pub trait BoardStore: Send + Sync {
    /// Loads every ticket, in stored order. A missing board is empty.
    fn load(&self) -> Result<Vec<Ticket>>;

    /// Persists the full collection, replacing the previous document
    fn save(&self, tickets: &[Ticket]) -> Result<()>;

    /// Whether a board document exists at all.
    ///
    /// Update operations use this to distinguish "board never created"
    /// (a not-found condition) from "board exists but is empty".
    fn exists(&self) -> bool;

    /// Finds a single ticket by id
    fn find_by_id(&self, id: u64) -> Result<Option<Ticket>> {
        let tickets = self.load()?;
        Ok(tickets.into_iter().find(|t| t.id == id))
    }
}

use super::file::JsonFileStore;

impl BoardStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Ticket>> {
        self.load_board()
    }

    fn save(&self, tickets: &[Ticket]) -> Result<()> {
        self.save_board(tickets)
    }

    fn exists(&self) -> bool {
        self.board_exists()
    }
}
