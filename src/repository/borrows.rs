//! Borrow table operations

use chrono::NaiveDate;
use sqlx::{Connection, PgConnection};

use crate::error::AppResult;

pub struct BorrowsRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> BorrowsRepository<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    pub async fn is_borrowed(&mut self, id: &str) -> AppResult<bool> {
        let out: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM borrow WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(out)
    }

    pub async fn is_borrowed_by(&mut self, id: &str, uni: &str) -> AppResult<bool> {
        let out: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM borrow WHERE id = $1 AND uni = $2)")
            .bind(id)
            .bind(uni)
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(out)
    }

    /// Insert a borrow record unless the reading is already out.
    ///
    /// Concurrent borrows of one reading are serialized on a transaction-scoped
    /// advisory lock keyed by the reading id, so the existence test and the insert
    /// see the same state even where `borrow.id` carries no unique constraint.
    pub async fn borrow(&mut self, id: &str, uni: &str, on: NaiveDate) -> AppResult<bool> {
        let mut tx = self.conn.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query(
            r#"
            INSERT INTO borrow (id, uni, time)
            SELECT $1, $2, $3
            WHERE NOT EXISTS (SELECT 1 FROM borrow WHERE id = $1)
            "#,
        )
        .bind(id)
        .bind(uni)
        .bind(on)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(result.rows_affected() == 1)
    }

    /// Delete the borrow record of `id` held by `uni`
    pub async fn give_back(&mut self, id: &str, uni: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM borrow WHERE id = $1 AND uni = $2")
            .bind(id)
            .bind(uni)
            .execute(&mut *self.conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn borrowed_by(&mut self, uni: &str) -> AppResult<Vec<String>> {
        let ids = sqlx::query_scalar::<_, String>("SELECT id FROM borrow WHERE uni = $1 ORDER BY id")
            .bind(uni)
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(ids)
    }
}
