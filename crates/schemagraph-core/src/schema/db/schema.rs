use super::{CatalogRow, Entity, EntityKind};
use crate::{Config, Result};

use indexmap::IndexMap;
use serde::Serialize;

/// The physical schema: every table and view the catalog reported, keyed by
/// physical name in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub tables: IndexMap<String, Entity>,
    pub views: IndexMap<String, Entity>,
}

impl Schema {
    /// Groups catalog rows into entities.
    ///
    /// Rows whose entity name carries neither the table nor the view prefix
    /// are skipped. Columns are ordered by ordinal position regardless of the
    /// order the provider returned them in.
    pub fn from_rows(rows: impl IntoIterator<Item = CatalogRow>, config: &Config) -> Schema {
        let mut grouped: IndexMap<String, Vec<CatalogRow>> = IndexMap::new();

        for row in rows {
            grouped.entry(row.entity.clone()).or_default().push(row);
        }

        let mut schema = Schema::default();

        for (name, mut rows) in grouped {
            let Some(kind) = EntityKind::classify(&name, config) else {
                tracing::debug!(entity = %name, "skipping entity without a table or view prefix");
                continue;
            };

            rows.sort_by_key(|row| row.ordinal_position);

            let mut entity = Entity::new(name.clone(), kind);
            for row in &rows {
                entity.push(row.to_column());
            }

            schema.insert(entity);
        }

        schema
    }

    pub fn insert(&mut self, entity: Entity) {
        let entities = match entity.kind {
            EntityKind::Table => &mut self.tables,
            EntityKind::View => &mut self.views,
        };
        entities.insert(entity.name.clone(), entity);
    }

    pub fn table(&self, name: &str) -> Option<&Entity> {
        self.tables.get(name)
    }

    pub fn view(&self, name: &str) -> Option<&Entity> {
        self.views.get(name)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.tables.values().chain(self.views.values())
    }

    /// Finds the view whose logical type name is `type_name`.
    pub fn view_for_type(&self, type_name: &str, config: &Config) -> Option<&Entity> {
        self.views
            .values()
            .find(|view| view.type_name(config).is_ok_and(|name| name == type_name))
    }

    /// Pairs every view with its logical type name. Views whose names cannot
    /// be translated are reported and left out.
    pub fn view_types(&self, config: &Config) -> Vec<(String, &Entity)> {
        self.views
            .values()
            .filter_map(|view| match view.type_name(config) {
                Ok(type_name) => Some((type_name, view)),
                Err(err) => {
                    tracing::warn!(view = %view.name, error = %err, "skipping view");
                    None
                }
            })
            .collect()
    }

    /// Checks the schema against the conventions in `config`.
    pub fn validate(&self, config: &Config) -> Result<()> {
        super::verify::verify(self, config)
    }

    pub fn log_summary(&self) {
        let table_columns: usize = self.tables.values().map(|t| t.columns.len()).sum();
        let view_columns: usize = self.views.values().map(|v| v.columns.len()).sum();

        tracing::info!(
            "catalog contains {} tables ({} columns) and {} views ({} columns)",
            self.tables.len(),
            table_columns,
            self.views.len(),
            view_columns,
        );
    }
}
