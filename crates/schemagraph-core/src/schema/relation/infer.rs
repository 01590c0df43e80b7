use super::Relationships;
use crate::{
    schema::{db::Entity, name},
    Config,
};

/// The entity a foreign key column was matched to.
#[derive(Debug, Clone, Copy)]
struct Target<'a> {
    type_name: &'a str,
    primary_key: Option<&'a str>,
}

#[derive(Debug, Clone, Copy)]
enum Match {
    Exact,
    Suffix,
}

pub(super) fn infer(types: &[(String, &Entity)], config: &Config) -> Relationships {
    let mut relationships = Relationships::default();

    for (source, entity) in types {
        for column in entity.columns.values() {
            // Primary keys are never references, and anything not ending in
            // `ID` is not a candidate.
            if column.is_primary_key() || !column.name.ends_with(name::ID_SUFFIX) {
                continue;
            }

            let found = find_exact(types, &column.name)
                .map(|target| (target, Match::Exact))
                .or_else(|| find_longest_suffix(types, &column.name).map(|t| (t, Match::Suffix)));

            let Some((target, matched)) = found else {
                if config.verbose {
                    tracing::debug!(
                        "{source}.{} looks like a foreign key but matches no primary key",
                        column.name
                    );
                }
                continue;
            };

            if config.verbose {
                tracing::debug!(
                    "{source}.{} matches the primary key of {} ({matched:?}); adding relationships",
                    column.name,
                    target.type_name
                );
            }

            relationships.insert_pair(
                source,
                &column.name,
                target.type_name,
                name::relationship_name_from_column(&column.name),
                name::has_many_name(source, &column.name, target.primary_key),
            );
        }
    }

    if config.verbose {
        match serde_json::to_string_pretty(&relationships) {
            Ok(json) => tracing::debug!("inferred relationships: {json}"),
            Err(err) => tracing::debug!(error = %err, "failed to render relationships"),
        }
    }

    relationships
}

/// Finds the entity whose primary key is named exactly `column`. When more
/// than one qualifies, the last in enumeration order wins.
fn find_exact<'a>(types: &'a [(String, &'a Entity)], column: &str) -> Option<Target<'a>> {
    types.iter().rev().find_map(|(type_name, entity)| {
        let primary_key = entity.primary_key_name()?;
        (primary_key == column).then_some(Target {
            type_name,
            primary_key: Some(primary_key),
        })
    })
}

/// Finds the entity whose primary key is the longest case-insensitive suffix
/// of `column`, excluding a primary key spelled exactly like `column`.
///
/// A later candidate only replaces the current best when strictly longer, so
/// among equal lengths the first in enumeration order wins.
fn find_longest_suffix<'a>(types: &'a [(String, &'a Entity)], column: &str) -> Option<Target<'a>> {
    let column_lower = column.to_lowercase();
    let mut best: Option<Target<'a>> = None;
    let mut best_len = 0;

    for (type_name, entity) in types {
        let Some(primary_key) = entity.primary_key_name() else {
            continue;
        };

        if primary_key == column || !column_lower.ends_with(&primary_key.to_lowercase()) {
            continue;
        }

        let len = primary_key.chars().count();
        if len > best_len {
            best_len = len;
            best = Some(Target {
                type_name,
                primary_key: Some(primary_key),
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::db::{Column, EntityKind};

    fn entity(name: &str, columns: &[&str]) -> Entity {
        columns
            .iter()
            .enumerate()
            .fold(Entity::new(name, EntityKind::View), |entity, (i, column)| {
                entity.column(Column::new(*column, "int", i as u32 + 1))
            })
    }

    #[test]
    fn suffix_match_ignores_case() {
        let user = entity("apiViewUsers", &["UserID"]);
        let types = vec![("User".to_string(), &user)];

        let target = find_longest_suffix(&types, "createdByUserID").unwrap();
        assert_eq!(target.type_name, "User");
    }

    #[test]
    fn suffix_match_skips_identical_name() {
        let store = entity("apiViewStores", &["storeID"]);
        let types = vec![("Store".to_string(), &store)];

        assert!(find_longest_suffix(&types, "storeID").is_none());
        assert!(find_exact(&types, "storeID").is_some());
    }

    #[test]
    fn equal_length_suffix_keeps_first() {
        let first = entity("apiViewAs", &["aID"]);
        let second = entity("apiViewBs", &["AID"]);
        let types = vec![("A".to_string(), &first), ("B".to_string(), &second)];

        let target = find_longest_suffix(&types, "dataID").unwrap();
        assert_eq!(target.type_name, "A");
    }
}
