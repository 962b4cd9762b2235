//! Borrow and return service
//!
//! Both operations run the same guard chain: librarian credentials, reader,
//! reading, then the borrow-state precondition. The first failing guard ends the
//! request with its own page and nothing is written.

use chrono::NaiveDate;

use crate::{
    error::{AppResult, Rejection},
    models::CirculationRequest,
    repository::LibraryStore,
};

pub struct CirculationService<'a, S: LibraryStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: LibraryStore + ?Sized> CirculationService<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Lend a reading to a reader, dated `today`
    pub async fn borrow(&mut self, request: &CirculationRequest, today: NaiveDate) -> AppResult<()> {
        self.check_parties(request).await?;

        if self.store.is_borrowed(&request.reading_id).await? {
            return Err(Rejection::AlreadyBorrowed.into());
        }

        // Another request may have taken the reading since the check above
        if !self
            .store
            .borrow_reading(&request.reading_id, &request.reader_uni, today)
            .await?
        {
            return Err(Rejection::AlreadyBorrowed.into());
        }

        tracing::info!(
            "Reading {} borrowed by {} (librarian {})",
            request.reading_id,
            request.reader_uni,
            request.librarian_uni
        );
        Ok(())
    }

    /// Take back a reading the reader currently has out
    pub async fn give_back(&mut self, request: &CirculationRequest) -> AppResult<()> {
        self.check_parties(request).await?;

        if !self
            .store
            .is_borrowed_by(&request.reading_id, &request.reader_uni)
            .await?
        {
            return Err(Rejection::NotBorrowed.into());
        }

        if !self
            .store
            .return_reading(&request.reading_id, &request.reader_uni)
            .await?
        {
            return Err(Rejection::NotBorrowed.into());
        }

        tracing::info!(
            "Reading {} returned by {} (librarian {})",
            request.reading_id,
            request.reader_uni,
            request.librarian_uni
        );
        Ok(())
    }

    async fn check_parties(&mut self, request: &CirculationRequest) -> AppResult<()> {
        if !self
            .store
            .librarian_authenticates(&request.librarian_uni, &request.librarian_password)
            .await?
        {
            return Err(Rejection::WrongPassword.into());
        }

        if !self.store.reader_exists(&request.reader_uni).await? {
            return Err(Rejection::NoSuchReader.into());
        }

        if !self.store.reading_exists(&request.reading_id).await? {
            return Err(Rejection::NoSuchReading.into());
        }

        Ok(())
    }
}
