pub mod db;

pub mod name;

mod relation;
pub use relation::{BelongsTo, BelongsToMap, HasManyMap, Relationships};

mod scalar;
pub use scalar::ScalarType;
