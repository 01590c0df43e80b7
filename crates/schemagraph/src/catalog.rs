use crate::Snapshot;

use schemagraph_core::{err, schema::db, Config, Result, SchemaProvider, Selection};

use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::Mutex;

/// Entry point: loads the catalog through a provider and serves projection
/// requests against the current snapshot.
///
/// Readers clone the current `Arc<Snapshot>` and work against it without
/// holding the lock; [`Catalog::reload`] builds a complete new snapshot
/// before swapping it in. Reloads run one at a time, so a snapshot built
/// from older rows never replaces one built from newer rows.
#[derive(Debug)]
pub struct Catalog {
    provider: Box<dyn SchemaProvider>,
    config: Config,
    snapshot: RwLock<Arc<Snapshot>>,

    /// Held for the whole fetch-build-swap sequence of a reload.
    reload: Mutex<()>,
}

impl Catalog {
    /// Loads the catalog, validates it and infers relationships.
    pub async fn load(provider: impl SchemaProvider, config: Config) -> Result<Catalog> {
        let snapshot = load_snapshot(&provider, &config).await?;

        Ok(Catalog {
            provider: Box::new(provider),
            config,
            snapshot: RwLock::new(Arc::new(snapshot)),
            reload: Mutex::new(()),
        })
    }

    /// Reloads the catalog and replaces the current snapshot. On failure the
    /// previous snapshot stays in place.
    pub async fn reload(&self) -> Result<Arc<Snapshot>> {
        let _guard = self.reload.lock().await;

        let snapshot = Arc::new(load_snapshot(self.provider.as_ref(), &self.config).await?);

        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = snapshot.clone();

        Ok(snapshot)
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolves the physical columns needed to answer `selection` on
    /// `type_name` against the current snapshot.
    pub fn resolve(
        &self,
        type_name: &str,
        selection: &Selection,
        plural: bool,
    ) -> Result<Vec<String>> {
        self.snapshot()
            .resolve(type_name, selection, plural, &self.config)
    }
}

async fn load_snapshot(provider: &dyn SchemaProvider, config: &Config) -> Result<Snapshot> {
    let rows = provider
        .columns(config)
        .await
        .map_err(|e| e.context(err!("failed to load catalog")))?;

    let schema = db::Schema::from_rows(rows, config);
    schema.log_summary();

    Snapshot::build(schema, config)
}
