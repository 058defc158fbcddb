//! Repositories for the two record types.

pub mod clients;
pub mod sales;

pub use clients::ClientRepo;
pub use sales::SalesRepo;

#[cfg(test)]
pub(crate) mod tests {
    use sqlx::SqlitePool;

    // Production code assumes the schema pre-exists; tests create it
    // against throwaway database files.
    pub(crate) async fn create_schema(pool: &SqlitePool) {
        sqlx::raw_sql(
            r#"
            CREATE TABLE clients (
                id INTEGER PRIMARY KEY,
                fio TEXT,
                login TEXT,
                birthday TEXT,
                email TEXT
            );
            CREATE TABLE sales (
                product INTEGER,
                volume INTEGER,
                date TEXT,
                client INTEGER
            );
            "#,
        )
        .execute(pool)
        .await
        .expect("schema creation failed");
    }
}
