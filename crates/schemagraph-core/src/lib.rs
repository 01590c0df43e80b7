mod config;
pub use config::{Config, MandatoryColumn};

pub mod driver;
pub use driver::SchemaProvider;

mod error;
pub use error::Error;

pub mod projection;
pub use projection::{Projection, Selection};

pub mod schema;
pub use schema::Relationships;

/// A Result type alias that uses schemagraph's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
