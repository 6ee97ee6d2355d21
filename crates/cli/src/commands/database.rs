//! Connectivity and schema introspection.
//!
//! ```bash
//! cafe-cli db ping
//! cafe-cli db tables
//! cafe-cli db columns menu_items
//! ```

use cafe_desk_admin::db::SchemaRepository;

use super::{TaskResult, connect};

/// Smoke-test the connection and report the server version.
pub async fn ping() -> TaskResult {
    let pool = connect().await?;
    let version = SchemaRepository::new(&pool).server_version().await?;
    Ok(vec![format!("Connected: {version}")])
}

/// List the tables of the `public` schema.
pub async fn tables() -> TaskResult {
    let pool = connect().await?;
    let tables = SchemaRepository::new(&pool).list_tables().await?;
    Ok(tables)
}

/// List the columns of one table.
pub async fn columns(table: &str) -> TaskResult {
    let pool = connect().await?;
    let columns = SchemaRepository::new(&pool).list_columns(table).await?;
    Ok(columns.iter().map(ToString::to_string).collect())
}
