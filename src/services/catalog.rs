//! Catalog listings and searches

use crate::{
    error::AppResult,
    models::{AcceptedPaper, AvailableBook, BorrowedBook, PublishedBook, Supplier, SupplierReading},
    repository::LibraryStore,
};

pub struct CatalogService<'a, S: LibraryStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: LibraryStore + ?Sized> CatalogService<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    pub async fn names(&mut self) -> AppResult<Vec<String>> {
        self.store.list_names().await
    }

    /// Borrowed readings followed by available ones
    pub async fn books(&mut self) -> AppResult<(Vec<BorrowedBook>, Vec<AvailableBook>)> {
        let borrowed = self.store.borrowed_books().await?;
        let available = self.store.available_books().await?;
        Ok((borrowed, available))
    }

    pub async fn suppliers(&mut self) -> AppResult<Vec<Supplier>> {
        self.store.list_suppliers().await
    }

    /// Readings from the supplier with exactly this name
    pub async fn search_by_supplier(&mut self, name: &str) -> AppResult<Vec<SupplierReading>> {
        self.store.readings_by_supplier(name).await
    }

    /// Books with exactly this name, with their publishers
    pub async fn search_books(&mut self, name: &str) -> AppResult<Vec<PublishedBook>> {
        self.store.books_by_title(name).await
    }

    /// Papers with exactly this title, with the accepting conference
    pub async fn search_papers(&mut self, title: &str) -> AppResult<Vec<AcceptedPaper>> {
        self.store.papers_by_title(title).await
    }
}
