//! Core domain types and validation
//!
//! Everything in this module is pure: no file or network I/O. The storage
//! and API layers depend on these types, never the other way around.

mod builders;
mod ticket;
pub mod validation;

pub use builders::TicketBuilder;
pub use ticket::{Priority, Status, Ticket};
pub use validation::{
    CreateTicketRequest, NewTicket, TicketPatch, UpdateTicketRequest, validate_create,
    validate_patch,
};
