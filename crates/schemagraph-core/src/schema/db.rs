mod column;
pub use column::Column;

mod entity;
pub use entity::{Entity, EntityKind};

mod policy;
pub use policy::{NON_INSERTABLE_COMMON_COLUMNS, NON_UPDATABLE_COMMON_COLUMNS};

mod row;
pub use row::CatalogRow;

mod schema;
pub use schema::Schema;

mod verify;
