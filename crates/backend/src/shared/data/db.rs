use once_cell::sync::OnceCell;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Tables are created on startup when missing; there is no migration history.
const SCHEMA: &[(&str, &str)] = &[
    (
        "a001_product",
        r#"
        CREATE TABLE IF NOT EXISTS a001_product (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            sku TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            price INTEGER NOT NULL,
            stock INTEGER NOT NULL DEFAULT 0 CHECK (stock >= 0)
        );
        "#,
    ),
    (
        "a002_order",
        r#"
        CREATE TABLE IF NOT EXISTS a002_order (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            status TEXT NOT NULL,
            total_amount INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
        "#,
    ),
    (
        "a002_order_status_idx",
        "CREATE INDEX IF NOT EXISTS a002_order_status_idx ON a002_order (status);",
    ),
    (
        "a002_order_item",
        r#"
        CREATE TABLE IF NOT EXISTS a002_order_item (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            order_id INTEGER NOT NULL REFERENCES a002_order (id),
            product_id INTEGER NOT NULL REFERENCES a001_product (id),
            quantity INTEGER NOT NULL,
            unit_price INTEGER NOT NULL,
            UNIQUE (order_id, product_id)
        );
        "#,
    ),
    (
        "a002_order_item_order_idx",
        "CREATE INDEX IF NOT EXISTS a002_order_item_order_idx ON a002_order_item (order_id);",
    ),
];

/// Open the SQLite file (creating it and its directory if needed),
/// bootstrap the schema and publish the connection globally.
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database {}", absolute_path.display());
    let mut options = ConnectOptions::new(db_url);
    options.sqlx_logging(false);
    let conn = Database::connect(options).await?;

    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub async fn bootstrap_schema<C: ConnectionTrait>(conn: &C) -> anyhow::Result<()> {
    for (name, sql) in SCHEMA {
        tracing::debug!("Ensuring {}", name);
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await
            .map_err(|e| anyhow::anyhow!("schema bootstrap failed at {}: {}", name, e))?;
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// Fresh in-memory database with the schema applied.
///
/// A single pooled connection keeps every query on the same memory database.
#[cfg(test)]
pub async fn test_connection() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(options).await.unwrap();
    bootstrap_schema(&conn).await.unwrap();
    conn
}

/// Makes an in-memory database the global connection used by handlers.
/// Only one test in the process may rely on it.
#[cfg(test)]
pub async fn install_test_connection() {
    if DB_CONN.get().is_none() {
        let _ = DB_CONN.set(test_connection().await);
    }
}
