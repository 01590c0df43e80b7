pub mod catalog;
pub use catalog::Catalog;

mod snapshot;
pub use snapshot::Snapshot;

pub use schemagraph_core::{
    async_trait, driver, projection, schema, Config, Error, MandatoryColumn, Projection,
    Relationships, Result, SchemaProvider, Selection,
};

#[cfg(feature = "postgresql")]
pub use schemagraph_driver_postgresql::PostgreSQL;
