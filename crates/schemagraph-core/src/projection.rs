mod selection;
pub use selection::Selection;

use crate::{
    schema::{db::Entity, BelongsToMap, HasManyMap, Relationships},
    Config,
};

use indexmap::IndexSet;

/// Resolves requested logical fields of one entity to the physical columns
/// that must be fetched.
///
/// Requested relationships pull in their join columns even when those
/// columns were not requested themselves: a to-one relationship needs its
/// foreign key, a to-many relationship needs the entity's own primary key.
#[derive(Debug, Clone, Copy)]
pub struct Projection<'a> {
    entity: &'a Entity,
    belongs_to: Option<&'a BelongsToMap>,
    has_many: Option<&'a HasManyMap>,
}

impl<'a> Projection<'a> {
    /// A projection over `entity` with no relationships.
    pub fn new(entity: &'a Entity) -> Self {
        Self {
            entity,
            belongs_to: None,
            has_many: None,
        }
    }

    /// A projection over `entity` using the relationships keyed under
    /// `type_name`.
    pub fn for_type(entity: &'a Entity, type_name: &str, relationships: &'a Relationships) -> Self {
        Self::new(entity)
            .belongs_to(relationships.belongs_to(type_name))
            .has_many(relationships.has_many(type_name))
    }

    pub fn belongs_to(mut self, belongs_to: Option<&'a BelongsToMap>) -> Self {
        self.belongs_to = belongs_to;
        self
    }

    pub fn has_many(mut self, has_many: Option<&'a HasManyMap>) -> Self {
        self.has_many = has_many;
        self
    }

    /// Returns the deduplicated physical columns needed to answer
    /// `requested`. Requested names that are neither columns nor
    /// relationships are dropped.
    pub fn resolve(&self, requested: &IndexSet<String>, config: &Config) -> Vec<String> {
        let mut columns = IndexSet::new();

        for field in requested {
            if self.entity.contains(field) {
                columns.insert(field.clone());
            } else if config.verbose {
                tracing::debug!(
                    "{} has no column `{field}`; it is either a relationship or not selectable",
                    self.entity.name
                );
            }
        }

        // Sale.Store needs Sale.storeID to join on
        for (column, belongs_to) in self.belongs_to.into_iter().flatten() {
            if requested.contains(&belongs_to.name) {
                if config.verbose {
                    tracing::debug!(
                        "selecting {column} of {} for relationship {}",
                        self.entity.name,
                        belongs_to.name
                    );
                }
                columns.insert(column.clone());
            }
        }

        // Store.Sales needs Store's own primary key to join on
        for (source, joins) in self.has_many.into_iter().flatten() {
            for name in joins.values() {
                if !requested.contains(name) {
                    continue;
                }

                match self.entity.primary_key_name() {
                    Some(primary_key) => {
                        if config.verbose {
                            tracing::debug!(
                                "selecting {primary_key} of {} for relationship {name} with {source}",
                                self.entity.name
                            );
                        }
                        columns.insert(primary_key.to_string());
                    }
                    None => tracing::warn!(
                        entity = %self.entity.name,
                        relationship = %name,
                        "entity has no primary key to join on"
                    ),
                }
            }
        }

        columns.into_iter().collect()
    }
}
