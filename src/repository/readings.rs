//! Catalog queries: readings, suppliers, books and papers

use sqlx::PgConnection;

use crate::{
    error::AppResult,
    models::{AcceptedPaper, AvailableBook, BorrowedBook, PublishedBook, Supplier, SupplierReading},
};

pub struct ReadingsRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> ReadingsRepository<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Names listed on the home page
    pub async fn list_names(&mut self) -> AppResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>("SELECT name FROM test")
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(names)
    }

    /// Readings that are out, with the reader and borrow date
    pub async fn borrowed_books(&mut self) -> AppResult<Vec<BorrowedBook>> {
        let books = sqlx::query_as::<_, BorrowedBook>(
            r#"
            SELECT r.id, r.author, b.uni AS reader, b.time AS borrowed_on
            FROM readings r
            JOIN borrow b ON r.id = b.id
            ORDER BY r.id
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(books)
    }

    /// Readings with no borrow record
    pub async fn available_books(&mut self) -> AppResult<Vec<AvailableBook>> {
        let books = sqlx::query_as::<_, AvailableBook>(
            r#"
            SELECT r.id, r.author
            FROM readings r
            WHERE r.id NOT IN (SELECT id FROM borrow)
            ORDER BY r.id
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(books)
    }

    pub async fn list_suppliers(&mut self) -> AppResult<Vec<Supplier>> {
        let suppliers = sqlx::query_as::<_, Supplier>("SELECT name, addr FROM suppliers")
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(suppliers)
    }

    pub async fn readings_by_supplier(&mut self, supplier: &str) -> AppResult<Vec<SupplierReading>> {
        let rows = sqlx::query_as::<_, SupplierReading>(
            r#"
            SELECT r.id, r.author, s.name AS supplier
            FROM readings r
            JOIN add a ON r.id = a.id
            JOIN suppliers s ON s.name = a.name
            WHERE s.name = $1
            "#,
        )
        .bind(supplier)
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(rows)
    }

    pub async fn books_by_title(&mut self, title: &str) -> AppResult<Vec<PublishedBook>> {
        let rows = sqlx::query_as::<_, PublishedBook>(
            r#"
            SELECT b.id, b.name AS title, p2.name AS publisher
            FROM books b
            JOIN publish p1 ON b.id = p1.id
            JOIN publishers p2 ON p1.name = p2.name
            WHERE b.name = $1
            "#,
        )
        .bind(title)
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(rows)
    }

    pub async fn papers_by_title(&mut self, title: &str) -> AppResult<Vec<AcceptedPaper>> {
        let rows = sqlx::query_as::<_, AcceptedPaper>(
            r#"
            SELECT p.id, p.title, c.name AS conference, c.addr AS conference_addr
            FROM papers p
            JOIN accept a ON p.id = a.id
            JOIN conferences c ON c.name = a.name
            WHERE p.title = $1
            "#,
        )
        .bind(title)
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(rows)
    }

    /// Whether a reading with this id exists
    pub async fn exists(&mut self, id: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM readings WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(exists)
    }
}
