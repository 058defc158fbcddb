//! Client repository
//!
//! Every mutation is a unit of work: one transaction wrapping exactly one
//! statement. A sqlx transaction rolls back when dropped uncommitted, so
//! any early error return leaves no partial write behind; the success path
//! must commit explicitly.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, Result};
use crate::models::{Client, NewClient};

/// Client repository
pub struct ClientRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ClientRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new client and return the store-assigned identifier.
    pub async fn insert(&self, client: &NewClient) -> Result<i64> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::transaction("opening transaction", e))?;

        let result = sqlx::query(
            "INSERT INTO clients (fio, login, birthday, email) VALUES (?, ?, ?, ?)",
        )
        .bind(&client.fio)
        .bind(&client.login)
        .bind(&client.birthday)
        .bind(&client.email)
        .execute(&mut *tx)
        .await
        .map_err(|e| DbError::transaction("inserting client", e))?;

        let id = result.last_insert_rowid();

        tx.commit()
            .await
            .map_err(|e| DbError::transaction("committing insert", e))?;

        debug!(id, "inserted client");
        Ok(id)
    }

    /// Update a client's login, scoped by identifier.
    ///
    /// Zero affected rows means the identifier does not exist: the
    /// statement succeeded but matched nothing, reported as
    /// [`DbError::NotFound`] rather than a transaction failure.
    pub async fn update_login(&self, new_login: &str, id: i64) -> Result<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::transaction("opening transaction", e))?;

        let result = sqlx::query("UPDATE clients SET login = ? WHERE id = ?")
            .bind(new_login)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::transaction("updating login", e))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("client", id));
        }

        tx.commit()
            .await
            .map_err(|e| DbError::transaction("committing update", e))?;

        debug!(id, "updated client login");
        Ok(())
    }

    /// Delete a client by identifier. Symmetric to [`Self::update_login`]:
    /// zero affected rows is `NotFound`.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::transaction("opening transaction", e))?;

        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::transaction("deleting client", e))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("client", id));
        }

        tx.commit()
            .await
            .map_err(|e| DbError::transaction("committing delete", e))?;

        debug!(id, "deleted client");
        Ok(())
    }

    /// Point lookup by identifier.
    pub async fn get(&self, id: i64) -> Result<Client> {
        sqlx::query_as::<_, Client>(
            "SELECT id, fio, login, birthday, email FROM clients WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(DbError::query)?
        .ok_or_else(|| DbError::not_found("client", id))
    }
}
