use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

/// The shape of a request: requested field names, each with the fields
/// requested beneath it.
///
/// Leaf fields carry an empty selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    fields: IndexMap<String, Selection>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a leaf field.
    pub fn field(self, name: impl Into<String>) -> Self {
        self.nested(name, Selection::new())
    }

    /// Adds a field with its own sub-selection.
    pub fn nested(mut self, name: impl Into<String>, selection: Selection) -> Self {
        self.fields.insert(name.into(), selection);
        self
    }

    /// Builds a selection from a JSON object tree such as
    /// `{"name": {}, "Store": {"name": {}}}`. Non-object values are leaves.
    pub fn from_json(value: &Value) -> Selection {
        let Value::Object(object) = value else {
            return Selection::new();
        };

        Selection {
            fields: object
                .iter()
                .map(|(name, value)| (name.clone(), Selection::from_json(value)))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Selection> {
        self.fields.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Top-level field names, optionally scoped to the selection beneath
    /// `subkey` first. A missing subkey selects nothing.
    pub fn field_names(&self, subkey: Option<&str>) -> IndexSet<String> {
        let scoped = match subkey {
            Some(key) => match self.get(key) {
                Some(scoped) => scoped,
                None => return IndexSet::new(),
            },
            None => self,
        };

        scoped.fields.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_to_top_level_names() {
        let selection = Selection::from_json(&json!({
            "name": {},
            "Store": { "name": {}, "Region": { "code": {} } },
        }));

        let expected: IndexSet<String> = ["name", "Store"].map(String::from).into();
        assert_eq!(selection.field_names(None), expected);
    }

    #[test]
    fn scopes_under_subkey() {
        let selection = Selection::new()
            .field("total")
            .nested("data", Selection::new().field("amount").field("Store"));

        let names: Vec<_> = selection.field_names(Some("data")).into_iter().collect();
        assert_eq!(names, ["amount", "Store"]);
        assert!(selection.field_names(Some("rows")).is_empty());
    }
}
