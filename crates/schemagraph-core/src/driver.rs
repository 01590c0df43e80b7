use crate::{async_trait, schema::db::CatalogRow, Config, Result};

use std::{
    fmt::Debug,
    sync::{Mutex, PoisonError},
};

/// A source of catalog column metadata.
///
/// Providers return raw rows for every entity whose name starts with either
/// the configured table prefix or the configured view prefix. The two
/// prefixes are independent. Data types are reported in the catalog
/// vocabulary (`int`, `nvarchar`, `datetime`, `bit`, ...). Grouping and
/// classification happen in
/// [`db::Schema::from_rows`](crate::schema::db::Schema::from_rows).
#[async_trait]
pub trait SchemaProvider: Debug + Send + Sync + 'static {
    /// Fetch column metadata for all tables and views.
    async fn columns(&self, config: &Config) -> Result<Vec<CatalogRow>>;
}

/// A provider serving a fixed set of rows. Used for tests and for schemas
/// captured ahead of time.
#[derive(Debug, Default)]
pub struct Memory {
    rows: Mutex<Vec<CatalogRow>>,
}

impl Memory {
    pub fn new(rows: Vec<CatalogRow>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    /// Replace the served rows; the next load observes the new catalog.
    pub fn set_rows(&self, rows: Vec<CatalogRow>) {
        *self.rows.lock().unwrap_or_else(PoisonError::into_inner) = rows;
    }
}

#[async_trait]
impl SchemaProvider for Memory {
    async fn columns(&self, _config: &Config) -> Result<Vec<CatalogRow>> {
        let rows = self
            .rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        Ok(rows)
    }
}

#[async_trait]
impl<T: SchemaProvider> SchemaProvider for std::sync::Arc<T> {
    async fn columns(&self, config: &Config) -> Result<Vec<CatalogRow>> {
        (**self).columns(config).await
    }
}
