//! Storage layer: the board's single JSON backing file

mod file;
mod repository;

pub use file::JsonFileStore;
pub use repository::BoardStore;
