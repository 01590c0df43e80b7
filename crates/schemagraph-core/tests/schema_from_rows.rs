use schemagraph_core::driver::Memory;
use schemagraph_core::schema::db::{CatalogRow, EntityKind, Schema};
use schemagraph_core::schema::ScalarType;
use schemagraph_core::{Config, SchemaProvider};

fn row(entity: &str, column: &str, data_type: &str, ordinal_position: u32) -> CatalogRow {
    CatalogRow {
        entity: entity.to_string(),
        column: column.to_string(),
        data_type: data_type.to_string(),
        length: None,
        nullable: false,
        default_value: None,
        ordinal_position,
    }
}

#[test]
fn groups_rows_into_tables_and_views() {
    let config = Config::default();
    let schema = Schema::from_rows(
        vec![
            row("apiStores", "storeID", "int", 1),
            row("apiViewStores", "storeID", "int", 1),
            row("apiStores", "name", "nvarchar", 2),
            row("apiViewStores", "name", "nvarchar", 2),
            row("sysdiagrams", "name", "nvarchar", 1),
        ],
        &config,
    );

    assert_eq!(schema.tables.len(), 1);
    assert_eq!(schema.views.len(), 1);
    assert_eq!(schema.tables["apiStores"].kind, EntityKind::Table);
    assert_eq!(schema.views["apiViewStores"].kind, EntityKind::View);
    assert!(schema.table("sysdiagrams").is_none());
    assert_eq!(schema.entities().count(), 2);
}

#[test]
fn orders_columns_by_ordinal_position() {
    let config = Config::default();
    let schema = Schema::from_rows(
        vec![
            row("apiViewSales", "amount", "decimal", 3),
            row("apiViewSales", "saleID", "int", 1),
            row("apiViewSales", "storeID", "int", 2),
        ],
        &config,
    );

    let sales = &schema.views["apiViewSales"];
    let names: Vec<_> = sales.columns.keys().map(String::as_str).collect();
    assert_eq!(names, ["saleID", "storeID", "amount"]);
    assert_eq!(sales.primary_key_name(), Some("saleID"));
}

#[test]
fn keeps_column_properties() {
    let config = Config::default();
    let schema = Schema::from_rows(
        vec![CatalogRow {
            length: Some(50),
            nullable: true,
            default_value: Some("('')".to_string()),
            ..row("apiStores", "name", "nvarchar", 2)
        }],
        &config,
    );

    let name = schema.tables["apiStores"].get("name").unwrap();
    assert_eq!(name.length, Some(50));
    assert!(name.nullable);
    assert_eq!(name.default_value.as_deref(), Some("('')"));
    assert!(!name.required_in_db());
    assert_eq!(
        ScalarType::from_db_type(&name.data_type),
        Some(ScalarType::String)
    );
}

#[test]
fn finds_view_by_type_name() {
    let config = Config::default();
    let schema = Schema::from_rows(
        vec![
            row("apiViewFacilities", "facilityID", "int", 1),
            row("apiViewSites", "siteID", "int", 1),
        ],
        &config,
    );

    let view = schema.view_for_type("Facility", &config).unwrap();
    assert_eq!(view.name, "apiViewFacilities");
    assert!(schema.view_for_type("Store", &config).is_none());
}

#[tokio::test]
async fn memory_provider_serves_rows() {
    let config = Config::default();
    let provider = Memory::new(vec![row("apiViewStores", "storeID", "int", 1)]);

    let rows = provider.columns(&config).await.unwrap();
    assert_eq!(rows.len(), 1);

    provider.set_rows(vec![]);
    assert!(provider.columns(&config).await.unwrap().is_empty());
}
