mod infer;

use super::db::{self, Entity};
use crate::Config;

use indexmap::IndexMap;
use serde::Serialize;

/// To-one relationships of one source type, keyed by foreign key column.
pub type BelongsToMap = IndexMap<String, BelongsTo>;

/// To-many relationships of one target type: source type → foreign key
/// column → display name.
pub type HasManyMap = IndexMap<String, IndexMap<String, String>>;

/// Relationships inferred from column naming conventions.
///
/// Both maps are keyed by logical type name rather than by reference, so
/// cyclic and self-referential schemas need no special handling. Every
/// `n1` entry has exactly one `nn` mirror and vice versa.
///
/// ```text
/// n1: { Sale: { storeID: { name: Store, target: Store },
///               createdByUserID: { name: CreatedByUser, target: User } } }
/// nn: { Store: { Sale: { storeID: Sales } },
///       User:  { Sale: { createdByUserID: SalesCreatedByUser } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Relationships {
    /// source type → foreign key column → relationship
    pub n1: IndexMap<String, BelongsToMap>,

    /// target type → source type → foreign key column → display name
    pub nn: IndexMap<String, HasManyMap>,
}

/// A to-one reference from a source type to `target` through a foreign key
/// column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BelongsTo {
    /// Field name exposed on the source type.
    pub name: String,

    /// Type the foreign key points at.
    #[serde(rename = "type")]
    pub target: String,
}

impl Relationships {
    /// Infers relationships between the given `(type name, entity)` pairs.
    ///
    /// The result is deterministic for a given input order.
    pub fn infer<'a, I>(types: I, config: &Config) -> Relationships
    where
        I: IntoIterator<Item = (String, &'a Entity)>,
    {
        let types: Vec<_> = types.into_iter().collect();
        infer::infer(&types, config)
    }

    /// Infers relationships between all views of `schema`.
    pub fn from_schema(schema: &db::Schema, config: &Config) -> Relationships {
        Relationships::infer(schema.view_types(config), config)
    }

    /// To-one relationships whose source is `type_name`.
    pub fn belongs_to(&self, type_name: &str) -> Option<&BelongsToMap> {
        self.n1.get(type_name)
    }

    /// To-many relationships whose target is `type_name`.
    pub fn has_many(&self, type_name: &str) -> Option<&HasManyMap> {
        self.nn.get(type_name)
    }

    /// Number of inferred relationships. Each pairs one `n1` with one `nn`
    /// entry.
    pub fn len(&self) -> usize {
        self.n1.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records a relationship and its mirror together.
    fn insert_pair(
        &mut self,
        source: &str,
        column: &str,
        target: &str,
        belongs_to_name: String,
        has_many_name: String,
    ) {
        self.n1.entry(source.to_string()).or_default().insert(
            column.to_string(),
            BelongsTo {
                name: belongs_to_name,
                target: target.to_string(),
            },
        );

        self.nn
            .entry(target.to_string())
            .or_default()
            .entry(source.to_string())
            .or_default()
            .insert(column.to_string(), has_many_name);
    }
}
