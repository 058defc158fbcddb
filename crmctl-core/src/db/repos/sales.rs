//! Sales repository
//!
//! Read-only. Result order is store-defined (the query carries no ORDER
//! BY), so callers must not rely on it. A row that fails to decode fails
//! the whole query instead of being dropped on the floor.

use sqlx::SqlitePool;

use crate::error::{DbError, Result};
use crate::models::Sale;

/// Sales repository
pub struct SalesRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SalesRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All sales for one client. An identifier with no sales yields an
    /// empty vector, not an error.
    pub async fn list_for_client(&self, client_id: i64) -> Result<Vec<Sale>> {
        sqlx::query_as::<_, Sale>("SELECT product, volume, date FROM sales WHERE client = ?")
            .bind(client_id)
            .fetch_all(self.pool)
            .await
            .map_err(DbError::query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::connect;
    use crate::db::repos::tests::create_schema;
    use tempfile::tempdir;

    async fn seed_sales(pool: &SqlitePool, client: i64, rows: &[(i64, i64, &str)]) {
        for &(product, volume, date) in rows {
            sqlx::query("INSERT INTO sales (product, volume, date, client) VALUES (?, ?, ?, ?)")
                .bind(product)
                .bind(volume)
                .bind(date)
                .bind(client)
                .execute(pool)
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn no_sales_is_empty_not_error() {
        let dir = tempdir().unwrap();
        let pool = connect(dir.path().join("test.db")).await.unwrap();
        create_schema(&pool).await;

        let sales = SalesRepo::new(&pool).list_for_client(208).await.unwrap();
        assert!(sales.is_empty());
    }

    #[tokio::test]
    async fn lists_only_matching_client() {
        let dir = tempdir().unwrap();
        let pool = connect(dir.path().join("test.db")).await.unwrap();
        create_schema(&pool).await;

        seed_sales(
            &pool,
            208,
            &[(1, 10, "20240101"), (2, 20, "20240102"), (3, 5, "20240103")],
        )
        .await;
        seed_sales(&pool, 209, &[(9, 99, "20240104")]).await;

        let sales = SalesRepo::new(&pool).list_for_client(208).await.unwrap();
        assert_eq!(sales.len(), 3);

        for sale in &sales {
            assert_ne!(sale.product, 0);
            assert_ne!(sale.volume, 0);
            assert!(!sale.date.is_empty());
        }
    }

    #[tokio::test]
    async fn maps_row_fields() {
        let dir = tempdir().unwrap();
        let pool = connect(dir.path().join("test.db")).await.unwrap();
        create_schema(&pool).await;

        seed_sales(&pool, 1, &[(42, 7, "20231231")]).await;

        let sales = SalesRepo::new(&pool).list_for_client(1).await.unwrap();
        assert_eq!(
            sales,
            vec![Sale {
                product: 42,
                volume: 7,
                date: "20231231".into(),
            }]
        );
    }
}
