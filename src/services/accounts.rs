//! Librarian password changes and reader self-service

use validator::Validate;

use crate::{
    error::{AppResult, Rejection},
    models::{PasswordChange, ReaderInfo, ReaderLogin},
    repository::LibraryStore,
};

pub struct AccountsService<'a, S: LibraryStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: LibraryStore + ?Sized> AccountsService<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Set a librarian's password on behalf of an administrator.
    ///
    /// The length rule is checked before the database is consulted.
    pub async fn change_librarian_password(&mut self, change: &PasswordChange) -> AppResult<()> {
        if change.validate().is_err() {
            return Err(Rejection::PasswordTooShort.into());
        }

        if !self
            .store
            .admin_authenticates(&change.admin_login, &change.admin_password)
            .await?
        {
            return Err(Rejection::WrongPassword.into());
        }

        if !self.store.librarian_exists(&change.librarian_uni).await? {
            return Err(Rejection::NoSuchLibrarian.into());
        }

        self.store
            .set_librarian_password(&change.librarian_uni, &change.new_password)
            .await?;

        tracing::info!(
            "Password of librarian {} changed by {}",
            change.librarian_uni,
            change.admin_login
        );
        Ok(())
    }

    /// A reader's profile and the readings they have out
    pub async fn reader_info(&mut self, login: &ReaderLogin) -> AppResult<ReaderInfo> {
        if !self.store.reader_exists(&login.uni).await? {
            return Err(Rejection::NoSuchReader.into());
        }

        let profile = self
            .store
            .reader_profile(&login.uni, &login.password)
            .await?
            .ok_or(Rejection::WrongReaderPassword)?;

        let borrowed = self.store.borrowed_by(&login.uni).await?;

        Ok(ReaderInfo { profile, borrowed })
    }
}
