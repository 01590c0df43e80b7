use super::Column;
use crate::{schema::name, Config, Result};

use indexmap::IndexMap;
use serde::Serialize;

/// A table or view, with its columns in ordinal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    /// Physical name, as reported by the catalog.
    pub name: String,

    /// Whether this entity is a mutation target or a query source.
    pub kind: EntityKind,

    /// Columns keyed by name. Insertion order follows ordinal position.
    pub columns: IndexMap<String, Column>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    /// Mutation target, named with [`Config::table_prefix`].
    Table,

    /// Query source, named with [`Config::view_prefix`].
    View,
}

impl Entity {
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
            columns: IndexMap::new(),
        }
    }

    /// Adds a column, returning the entity. Handy when building schemas by
    /// hand.
    pub fn column(mut self, column: Column) -> Self {
        self.push(column);
        self
    }

    pub fn push(&mut self, column: Column) {
        self.columns.insert(column.name.clone(), column);
    }

    pub fn get(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Returns the primary identifier column: the one at ordinal position 1.
    ///
    /// An entity without such a column has no identifier; this is a legal
    /// catalog state and callers treat it as absent.
    pub fn primary_key(&self) -> Option<&Column> {
        self.columns
            .values()
            .rev()
            .find(|column| column.is_primary_key())
    }

    pub fn primary_key_name(&self) -> Option<&str> {
        self.primary_key().map(|column| column.name.as_str())
    }

    /// The logical type name for this entity, e.g. `apiViewStores` → `Store`.
    pub fn type_name(&self, config: &Config) -> Result<String> {
        name::type_name_from_entity(&self.name, self.kind, config)
    }
}

impl EntityKind {
    /// Classifies a physical name by its prefix. When both prefixes match,
    /// the longer one wins, so `apiViewStores` is a view even though it also
    /// starts with `api`.
    pub fn classify(name: &str, config: &Config) -> Option<EntityKind> {
        let candidates = [
            (EntityKind::View, config.view_prefix.as_str()),
            (EntityKind::Table, config.table_prefix.as_str()),
        ];

        candidates
            .into_iter()
            .filter(|(_, prefix)| name.starts_with(prefix))
            .max_by_key(|(_, prefix)| prefix.len())
            .map(|(kind, _)| kind)
    }

    pub fn prefix<'a>(&self, config: &'a Config) -> &'a str {
        match self {
            EntityKind::Table => &config.table_prefix,
            EntityKind::View => &config.view_prefix,
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, EntityKind::Table)
    }

    pub fn is_view(&self) -> bool {
        matches!(self, EntityKind::View)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Table => f.write_str("table"),
            EntityKind::View => f.write_str("view"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_prefers_longest_prefix() {
        let config = Config::default();
        assert_eq!(
            EntityKind::classify("apiViewStores", &config),
            Some(EntityKind::View)
        );
        assert_eq!(
            EntityKind::classify("apiStores", &config),
            Some(EntityKind::Table)
        );
        assert_eq!(EntityKind::classify("Stores", &config), None);
    }

    #[test]
    fn primary_key_is_ordinal_one() {
        let entity = Entity::new("apiViewSales", EntityKind::View)
            .column(Column::new("storeID", "int", 2))
            .column(Column::new("saleID", "int", 1));

        assert_eq!(entity.primary_key_name(), Some("saleID"));
    }

    #[test]
    fn missing_primary_key_is_absent() {
        let entity = Entity::new("apiViewSales", EntityKind::View)
            .column(Column::new("storeID", "int", 2));

        assert_eq!(entity.primary_key(), None);
    }
}
