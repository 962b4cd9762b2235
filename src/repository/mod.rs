//! Repository layer for database operations
//!
//! Every request gets its own [`LibraryStore`], opened by a [`Connector`] when the
//! request arrives and dropped when the response has been produced.

pub mod accounts;
pub mod borrows;
pub mod postgres;
pub mod readings;


use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::{
        AcceptedPaper, AvailableBook, BorrowedBook, PublishedBook, ReaderProfile, Supplier,
        SupplierReading,
    },
};

pub use postgres::{PgConnector, PgStore};

/// Opens one database session per request
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self) -> AppResult<Box<dyn LibraryStore>>;
}

/// The statements the web front-end issues, one method each.
///
/// Lookups compare strings exactly; nothing is trimmed or case-folded.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LibraryStore: Send {
    /// Names in the `test` table shown on the home page
    async fn list_names(&mut self) -> AppResult<Vec<String>>;
    async fn borrowed_books(&mut self) -> AppResult<Vec<BorrowedBook>>;
    async fn available_books(&mut self) -> AppResult<Vec<AvailableBook>>;
    async fn list_suppliers(&mut self) -> AppResult<Vec<Supplier>>;
    async fn readings_by_supplier(&mut self, supplier: &str) -> AppResult<Vec<SupplierReading>>;
    async fn books_by_title(&mut self, title: &str) -> AppResult<Vec<PublishedBook>>;
    async fn papers_by_title(&mut self, title: &str) -> AppResult<Vec<AcceptedPaper>>;

    async fn admin_authenticates(&mut self, login: &str, password: &str) -> AppResult<bool>;
    async fn librarian_authenticates(&mut self, uni: &str, password: &str) -> AppResult<bool>;
    async fn librarian_exists(&mut self, uni: &str) -> AppResult<bool>;
    async fn set_librarian_password(&mut self, uni: &str, password: &str) -> AppResult<()>;
    async fn reader_exists(&mut self, uni: &str) -> AppResult<bool>;
    /// Profile of the reader if both uni and password match
    async fn reader_profile(&mut self, uni: &str, password: &str) -> AppResult<Option<ReaderProfile>>;

    async fn reading_exists(&mut self, id: &str) -> AppResult<bool>;
    async fn is_borrowed(&mut self, id: &str) -> AppResult<bool>;
    async fn is_borrowed_by(&mut self, id: &str, uni: &str) -> AppResult<bool>;
    /// Record the borrow unless the reading is already out. Returns whether a
    /// record was inserted; the check and the insert are atomic.
    async fn borrow_reading(&mut self, id: &str, uni: &str, on: NaiveDate) -> AppResult<bool>;
    /// Remove the borrow record held by `uni`. Returns whether one was removed.
    async fn return_reading(&mut self, id: &str, uni: &str) -> AppResult<bool>;
    /// Ids of the readings `uni` currently has out
    async fn borrowed_by(&mut self, uni: &str) -> AppResult<Vec<String>>;

    async fn ping(&mut self) -> AppResult<()>;
}

/// Stand-in for a session whose connection could not be opened.
///
/// The request carries on; whatever it asks of the database fails.
#[derive(Debug, Clone)]
pub struct Disconnected {
    reason: String,
}

impl Disconnected {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }

    fn fail<T>(&self) -> AppResult<T> {
        Err(AppError::Unavailable(self.reason.clone()))
    }
}

#[async_trait]
impl LibraryStore for Disconnected {
    async fn list_names(&mut self) -> AppResult<Vec<String>> {
        self.fail()
    }

    async fn borrowed_books(&mut self) -> AppResult<Vec<BorrowedBook>> {
        self.fail()
    }

    async fn available_books(&mut self) -> AppResult<Vec<AvailableBook>> {
        self.fail()
    }

    async fn list_suppliers(&mut self) -> AppResult<Vec<Supplier>> {
        self.fail()
    }

    async fn readings_by_supplier(&mut self, _supplier: &str) -> AppResult<Vec<SupplierReading>> {
        self.fail()
    }

    async fn books_by_title(&mut self, _title: &str) -> AppResult<Vec<PublishedBook>> {
        self.fail()
    }

    async fn papers_by_title(&mut self, _title: &str) -> AppResult<Vec<AcceptedPaper>> {
        self.fail()
    }

    async fn admin_authenticates(&mut self, _login: &str, _password: &str) -> AppResult<bool> {
        self.fail()
    }

    async fn librarian_authenticates(&mut self, _uni: &str, _password: &str) -> AppResult<bool> {
        self.fail()
    }

    async fn librarian_exists(&mut self, _uni: &str) -> AppResult<bool> {
        self.fail()
    }

    async fn set_librarian_password(&mut self, _uni: &str, _password: &str) -> AppResult<()> {
        self.fail()
    }

    async fn reader_exists(&mut self, _uni: &str) -> AppResult<bool> {
        self.fail()
    }

    async fn reader_profile(&mut self, _uni: &str, _password: &str) -> AppResult<Option<ReaderProfile>> {
        self.fail()
    }

    async fn reading_exists(&mut self, _id: &str) -> AppResult<bool> {
        self.fail()
    }

    async fn is_borrowed(&mut self, _id: &str) -> AppResult<bool> {
        self.fail()
    }

    async fn is_borrowed_by(&mut self, _id: &str, _uni: &str) -> AppResult<bool> {
        self.fail()
    }

    async fn borrow_reading(&mut self, _id: &str, _uni: &str, _on: NaiveDate) -> AppResult<bool> {
        self.fail()
    }

    async fn return_reading(&mut self, _id: &str, _uni: &str) -> AppResult<bool> {
        self.fail()
    }

    async fn borrowed_by(&mut self, _uni: &str) -> AppResult<Vec<String>> {
        self.fail()
    }

    async fn ping(&mut self) -> AppResult<()> {
        self.fail()
    }
}
