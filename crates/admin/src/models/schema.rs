//! Schema introspection results.

use std::fmt;

/// One column of a table as reported by `information_schema`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ColumnInfo {
    pub column_name: String,
    pub data_type: String,
    pub is_nullable: bool,
    pub column_default: Option<String>,
}

impl fmt::Display for ColumnInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{}",
            self.column_name,
            self.data_type,
            if self.is_nullable { "" } else { " NOT NULL" }
        )?;
        if let Some(default) = &self.column_default {
            write!(f, " DEFAULT {default}")?;
        }
        Ok(())
    }
}
