//! PostgreSQL sessions: one fresh connection per request, no pool

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{
    postgres::{PgConnectOptions, PgConnection},
    Connection,
};
use std::str::FromStr;

use super::{
    accounts::AccountsRepository, borrows::BorrowsRepository, readings::ReadingsRepository,
    Connector, LibraryStore,
};
use crate::{
    error::AppResult,
    models::{
        AcceptedPaper, AvailableBook, BorrowedBook, PublishedBook, ReaderProfile, Supplier,
        SupplierReading,
    },
};

/// Opens PostgreSQL connections from options parsed once at start-up
#[derive(Clone)]
pub struct PgConnector {
    options: PgConnectOptions,
}

impl PgConnector {
    pub fn new(url: &str) -> Result<Self, sqlx::Error> {
        Ok(Self::from_options(PgConnectOptions::from_str(url)?))
    }

    pub fn from_options(options: PgConnectOptions) -> Self {
        Self { options }
    }

    /// Open a bare connection, for start-up work such as migrations
    pub async fn open(&self) -> Result<PgConnection, sqlx::Error> {
        PgConnection::connect_with(&self.options).await
    }
}

#[async_trait]
impl Connector for PgConnector {
    async fn connect(&self) -> AppResult<Box<dyn LibraryStore>> {
        let conn = self.open().await?;
        tracing::debug!("Opened database connection");
        Ok(Box::new(PgStore::new(conn)))
    }
}

/// A single request's database session
pub struct PgStore {
    conn: PgConnection,
}

impl PgStore {
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }

    pub fn readings(&mut self) -> ReadingsRepository<'_> {
        ReadingsRepository::new(&mut self.conn)
    }

    pub fn accounts(&mut self) -> AccountsRepository<'_> {
        AccountsRepository::new(&mut self.conn)
    }

    pub fn borrows(&mut self) -> BorrowsRepository<'_> {
        BorrowsRepository::new(&mut self.conn)
    }
}

impl Drop for PgStore {
    fn drop(&mut self) {
        tracing::debug!("Released database connection");
    }
}

#[async_trait]
impl LibraryStore for PgStore {
    async fn list_names(&mut self) -> AppResult<Vec<String>> {
        self.readings().list_names().await
    }

    async fn borrowed_books(&mut self) -> AppResult<Vec<BorrowedBook>> {
        self.readings().borrowed_books().await
    }

    async fn available_books(&mut self) -> AppResult<Vec<AvailableBook>> {
        self.readings().available_books().await
    }

    async fn list_suppliers(&mut self) -> AppResult<Vec<Supplier>> {
        self.readings().list_suppliers().await
    }

    async fn readings_by_supplier(&mut self, supplier: &str) -> AppResult<Vec<SupplierReading>> {
        self.readings().readings_by_supplier(supplier).await
    }

    async fn books_by_title(&mut self, title: &str) -> AppResult<Vec<PublishedBook>> {
        self.readings().books_by_title(title).await
    }

    async fn papers_by_title(&mut self, title: &str) -> AppResult<Vec<AcceptedPaper>> {
        self.readings().papers_by_title(title).await
    }

    async fn admin_authenticates(&mut self, login: &str, password: &str) -> AppResult<bool> {
        self.accounts().admin_authenticates(login, password).await
    }

    async fn librarian_authenticates(&mut self, uni: &str, password: &str) -> AppResult<bool> {
        self.accounts().librarian_authenticates(uni, password).await
    }

    async fn librarian_exists(&mut self, uni: &str) -> AppResult<bool> {
        self.accounts().librarian_exists(uni).await
    }

    async fn set_librarian_password(&mut self, uni: &str, password: &str) -> AppResult<()> {
        self.accounts().set_librarian_password(uni, password).await
    }

    async fn reader_exists(&mut self, uni: &str) -> AppResult<bool> {
        self.accounts().reader_exists(uni).await
    }

    async fn reader_profile(&mut self, uni: &str, password: &str) -> AppResult<Option<ReaderProfile>> {
        self.accounts().reader_profile(uni, password).await
    }

    async fn reading_exists(&mut self, id: &str) -> AppResult<bool> {
        self.readings().exists(id).await
    }

    async fn is_borrowed(&mut self, id: &str) -> AppResult<bool> {
        self.borrows().is_borrowed(id).await
    }

    async fn is_borrowed_by(&mut self, id: &str, uni: &str) -> AppResult<bool> {
        self.borrows().is_borrowed_by(id, uni).await
    }

    async fn borrow_reading(&mut self, id: &str, uni: &str, on: NaiveDate) -> AppResult<bool> {
        self.borrows().borrow(id, uni, on).await
    }

    async fn return_reading(&mut self, id: &str, uni: &str) -> AppResult<bool> {
        self.borrows().give_back(id, uni).await
    }

    async fn borrowed_by(&mut self, uni: &str) -> AppResult<Vec<String>> {
        self.borrows().borrowed_by(uni).await
    }

    async fn ping(&mut self) -> AppResult<()> {
        self.conn.ping().await?;
        Ok(())
    }
}
