//! Data models for Library Desk

pub mod borrow;
pub mod librarian;
pub mod reader;
pub mod reading;
pub mod supplier;

// Re-export commonly used types
pub use borrow::{BorrowRecord, CirculationRequest};
pub use librarian::PasswordChange;
pub use reader::{ReaderInfo, ReaderLogin, ReaderProfile};
pub use reading::{AcceptedPaper, AvailableBook, BorrowedBook, PublishedBook, SupplierReading};
pub use supplier::Supplier;
