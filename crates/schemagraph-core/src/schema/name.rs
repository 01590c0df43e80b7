//! Translation between physical entity names and logical type names.
//!
//! Physical names are plural and prefixed by kind (`apiStores`,
//! `apiViewStores`); type names are singular and capitalized (`Store`). The
//! plural and singular rules are naive: `y` ↔ `ies`, otherwise a
//! trailing `s`. Irregular plurals (`Person`/`People`) and words ending in `s`
//! (`Address`) do not round-trip.

use super::db::EntityKind;
use crate::{Config, Error, Result};

/// Columns ending with this suffix are candidate foreign keys.
pub const ID_SUFFIX: &str = "ID";

/// `apiViewStores` → `Store`.
pub fn type_name_from_entity(physical: &str, kind: EntityKind, config: &Config) -> Result<String> {
    let stem = strip_kind_prefix(physical, kind, config)?;
    Ok(singularize(&capitalize(stem)))
}

/// `Store` → `apiViewStores`.
pub fn entity_name_from_type_name(type_name: &str, kind: EntityKind, config: &Config) -> String {
    format!("{}{}", kind.prefix(config), pluralize(type_name))
}

/// `apiViewStores` → `Stores`. The plural name used for list queries.
pub fn plural_name_from_entity(physical: &str, kind: EntityKind, config: &Config) -> Result<String> {
    strip_kind_prefix(physical, kind, config).map(str::to_string)
}

/// `apiStores` → `apiViewStores`.
pub fn view_name_from_table(table: &str, config: &Config) -> Result<String> {
    let stem = strip_kind_prefix(table, EntityKind::Table, config)?;
    Ok(format!("{}{}", config.view_prefix, stem))
}

pub fn pluralize(word: &str) -> String {
    match word.strip_suffix('y') {
        Some(stem) => format!("{stem}ies"),
        None => format!("{word}s"),
    }
}

pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        format!("{stem}y")
    } else if let Some(stem) = word.strip_suffix('s') {
        stem.to_string()
    } else {
        word.to_string()
    }
}

/// Display name of a to-one relationship: `createdByUserID` →
/// `CreatedByUser`.
pub fn relationship_name_from_column(column: &str) -> String {
    capitalize(column.strip_suffix(ID_SUFFIX).unwrap_or(column))
}

/// Display name of a to-many relationship, as seen from the target type.
///
/// When the foreign key column is named exactly like the target's primary
/// key, the plural source type is enough (`Site.Facilities`). Otherwise the
/// column's description disambiguates (`User.SalesCreatedByUser`).
pub fn has_many_name(source_type: &str, column: &str, target_primary_key: Option<&str>) -> String {
    let plural = pluralize(source_type);

    if target_primary_key == Some(column) {
        plural
    } else {
        plural + &relationship_name_from_column(column)
    }
}

fn strip_kind_prefix<'a>(physical: &'a str, kind: EntityKind, config: &Config) -> Result<&'a str> {
    let prefix = kind.prefix(config);
    physical
        .strip_prefix(prefix)
        .ok_or_else(|| Error::invalid_name(physical, prefix))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
