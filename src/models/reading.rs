//! Reading (book or paper) records as shown on listing and search pages

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A reading that is currently out, with its borrower
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct BorrowedBook {
    pub id: String,
    pub author: String,
    pub reader: String,
    pub borrowed_on: NaiveDate,
}

/// A reading with no outstanding borrow record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct AvailableBook {
    pub id: String,
    pub author: String,
}

/// Reading supplied by a given supplier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct SupplierReading {
    pub id: String,
    pub author: String,
    pub supplier: String,
}

/// Book joined with its publisher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct PublishedBook {
    pub id: String,
    pub title: String,
    pub publisher: String,
}

/// Paper joined with the conference that accepted it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct AcceptedPaper {
    pub id: String,
    pub title: String,
    pub conference: String,
    pub conference_addr: String,
}
