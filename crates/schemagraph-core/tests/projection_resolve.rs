use indexmap::{IndexMap, IndexSet};
use schemagraph_core::schema::db::{Column, Entity, EntityKind};
use schemagraph_core::schema::{BelongsTo, BelongsToMap, HasManyMap};
use schemagraph_core::{Config, Projection, Relationships, Selection};

fn view(name: &str, columns: &[&str]) -> Entity {
    let mut entity = Entity::new(name, EntityKind::View);
    for (i, column) in columns.iter().enumerate() {
        entity.push(Column::new(*column, "int", i as u32 + 1));
    }
    entity
}

fn requested(fields: &[&str]) -> IndexSet<String> {
    fields.iter().map(|field| field.to_string()).collect()
}

fn sorted(mut columns: Vec<String>) -> Vec<String> {
    columns.sort();
    columns
}

fn store_belongs_to() -> BelongsToMap {
    IndexMap::from([(
        "storeID".to_string(),
        BelongsTo {
            name: "Store".to_string(),
            target: "Store".to_string(),
        },
    )])
}

fn sales_has_many() -> HasManyMap {
    IndexMap::from([(
        "Sale".to_string(),
        IndexMap::from([("storeID".to_string(), "Sales".to_string())]),
    )])
}

#[test]
fn keeps_only_physical_columns() {
    let people = view("apiViewPeople", &["id", "name", "age"]);

    let columns = Projection::new(&people).resolve(
        &requested(&["name", "invalidField", "age"]),
        &Config::default(),
    );

    assert_eq!(sorted(columns), ["age", "name"]);
}

#[test]
fn belongs_to_pulls_in_foreign_key() {
    let sales = view("apiViewSales", &["saleID", "storeID", "amount"]);
    let belongs_to = store_belongs_to();

    let columns = Projection::new(&sales)
        .belongs_to(Some(&belongs_to))
        .resolve(&requested(&["amount", "Store"]), &Config::default());

    assert_eq!(sorted(columns), ["amount", "storeID"]);
}

#[test]
fn has_many_pulls_in_primary_key() {
    let stores = view("apiViewStores", &["storeID", "name"]);
    let has_many = sales_has_many();

    let columns = Projection::new(&stores)
        .has_many(Some(&has_many))
        .resolve(&requested(&["name", "Sales"]), &Config::default());

    assert_eq!(sorted(columns), ["name", "storeID"]);
}

#[test]
fn unknown_fields_are_dropped_silently() {
    let stores = view("apiViewStores", &["storeID", "name"]);

    let columns = Projection::new(&stores)
        .resolve(&requested(&["bogusField"]), &Config::default().verbose(true));

    assert!(columns.is_empty());
}

#[test]
fn unrequested_relationships_add_nothing() {
    let sales = view("apiViewSales", &["saleID", "storeID", "amount"]);
    let belongs_to = store_belongs_to();
    let has_many = sales_has_many();

    let columns = Projection::new(&sales)
        .belongs_to(Some(&belongs_to))
        .has_many(Some(&has_many))
        .resolve(&requested(&["amount"]), &Config::default());

    assert_eq!(columns, ["amount"]);
}

#[test]
fn join_columns_are_not_duplicated() {
    let sales = view("apiViewSales", &["saleID", "storeID", "amount"]);
    let belongs_to = store_belongs_to();

    let columns = Projection::new(&sales)
        .belongs_to(Some(&belongs_to))
        .resolve(&requested(&["storeID", "Store"]), &Config::default());

    assert_eq!(columns, ["storeID"]);
}

#[test]
fn has_many_without_primary_key_adds_nothing() {
    let mut stores = Entity::new("apiViewStores", EntityKind::View);
    stores.push(Column::new("name", "nvarchar", 2));
    let has_many = sales_has_many();

    let columns = Projection::new(&stores)
        .has_many(Some(&has_many))
        .resolve(&requested(&["name", "Sales"]), &Config::default());

    assert_eq!(columns, ["name"]);
}

#[test]
fn resolves_with_inferred_relationships() {
    let config = Config::default();
    let sales = view("apiViewSales", &["saleID", "storeID", "createdByUserID", "amount"]);
    let stores = view("apiViewStores", &["storeID", "name"]);
    let users = view("apiViewUsers", &["userID", "name"]);

    let relationships = Relationships::infer(
        [("Sale", &sales), ("Store", &stores), ("User", &users)]
            .into_iter()
            .map(|(name, entity)| (name.to_string(), entity)),
        &config,
    );

    // Every requested relationship brings its join column, and nothing else
    // sneaks in.
    let sale_columns = Projection::for_type(&sales, "Sale", &relationships).resolve(
        &requested(&["amount", "Store", "CreatedByUser"]),
        &config,
    );
    assert_eq!(
        sorted(sale_columns),
        ["amount", "createdByUserID", "storeID"]
    );

    let user_columns = Projection::for_type(&users, "User", &relationships)
        .resolve(&requested(&["SalesCreatedByUser"]), &config);
    assert_eq!(user_columns, ["userID"]);

    let store_columns = Projection::for_type(&stores, "Store", &relationships)
        .resolve(&requested(&["name"]), &config);
    assert_eq!(store_columns, ["name"]);
}

#[test]
fn resolves_plural_selection_under_page_key() {
    let config = Config::default();
    let stores = view("apiViewStores", &["storeID", "name"]);
    let has_many = sales_has_many();

    let selection = Selection::from_json(&serde_json::json!({
        "pagination": { "total": {} },
        "data": { "name": {}, "Sales": { "amount": {} } },
    }));

    let fields = selection.field_names(Some(config.page_key.as_str()));
    let columns = Projection::new(&stores)
        .has_many(Some(&has_many))
        .resolve(&fields, &config);

    assert_eq!(sorted(columns), ["name", "storeID"]);
}
