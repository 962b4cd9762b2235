//! Borrow record model and circulation requests

use chrono::NaiveDate;
use sqlx::FromRow;

/// Borrow record from database; its presence means the reading is out
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BorrowRecord {
    /// Reading id
    pub id: String,
    /// Reader uni
    pub uni: String,
    pub time: NaiveDate,
}

/// A librarian lending a reading to, or taking it back from, a reader
#[derive(Debug, Clone)]
pub struct CirculationRequest {
    pub librarian_uni: String,
    pub librarian_password: String,
    pub reader_uni: String,
    pub reading_id: String,
}
