mod caches;
mod primitive_schema;

pub use caches::SchemaCaches;
pub use primitive_schema::{ForeignKeyDescriptor, SchemaSnapshot, TableDescriptor, ViewDescriptor};

pub type TableName = String;
pub type TableId = i64;
pub type ForeignKeyId = i64;
