//! Admin, librarian and reader account queries
//!
//! Passwords are stored and compared as plain text.

use sqlx::PgConnection;

use crate::{error::AppResult, models::ReaderProfile};

pub struct AccountsRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> AccountsRepository<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    pub async fn admin_authenticates(&mut self, login: &str, password: &str) -> AppResult<bool> {
        let ok: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM admin WHERE login = $1 AND password = $2)",
        )
        .bind(login)
        .bind(password)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(ok)
    }

    pub async fn librarian_authenticates(&mut self, uni: &str, password: &str) -> AppResult<bool> {
        let ok: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM librarians WHERE uni = $1 AND password = $2)",
        )
        .bind(uni)
        .bind(password)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(ok)
    }

    pub async fn librarian_exists(&mut self, uni: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM librarians WHERE uni = $1)")
            .bind(uni)
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(exists)
    }

    pub async fn set_librarian_password(&mut self, uni: &str, password: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE librarians SET password = $1 WHERE uni = $2")
            .bind(password)
            .bind(uni)
            .execute(&mut *self.conn)
            .await?;

        tracing::debug!("Updated password of librarian {} ({} rows)", uni, result.rows_affected());
        Ok(())
    }

    pub async fn reader_exists(&mut self, uni: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM readers WHERE uni = $1)")
            .bind(uni)
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(exists)
    }

    /// Profile of the reader matching both uni and password
    pub async fn reader_profile(&mut self, uni: &str, password: &str) -> AppResult<Option<ReaderProfile>> {
        let profile = sqlx::query_as::<_, ReaderProfile>(
            "SELECT uni, name, dept FROM readers WHERE uni = $1 AND password = $2",
        )
        .bind(uni)
        .bind(password)
        .fetch_optional(&mut *self.conn)
        .await?;
        Ok(profile)
    }
}
