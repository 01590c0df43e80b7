use schemagraph_core::{schema::db, Config, Projection, Relationships, Result, Selection};

/// A validated schema together with the relationships inferred from it.
///
/// Snapshots are never mutated. A schema change produces a new snapshot.
#[derive(Debug)]
pub struct Snapshot {
    pub schema: db::Schema,
    pub relationships: Relationships,
}

impl Snapshot {
    /// Validates `schema` and infers its relationships.
    pub fn build(schema: db::Schema, config: &Config) -> Result<Snapshot> {
        schema.validate(config)?;

        let relationships = Relationships::from_schema(&schema, config);
        tracing::info!("inferred {} relationships", relationships.len());

        Ok(Snapshot {
            schema,
            relationships,
        })
    }

    /// Resolves the physical columns of `type_name`'s view needed to answer
    /// `selection`. Plural selections nest their rows under
    /// [`Config::page_key`].
    pub fn resolve(
        &self,
        type_name: &str,
        selection: &Selection,
        plural: bool,
        config: &Config,
    ) -> Result<Vec<String>> {
        let Some(view) = self.schema.view_for_type(type_name, config) else {
            schemagraph_core::bail!("no view found for type `{type_name}`");
        };

        let subkey = plural.then_some(config.page_key.as_str());
        let fields = selection.field_names(subkey);

        if config.verbose {
            tracing::debug!("requested fields of {type_name}: {fields:?}");
        }

        Ok(Projection::for_type(view, type_name, &self.relationships).resolve(&fields, config))
    }
}
