mod errors;
mod finder;
mod options;
mod relations;
mod schema;
#[cfg(test)]
mod tests;

pub use errors::{ErrorKind, FinderError};
pub use finder::RelationsFinder;
pub use options::{Options, DEFAULT_MAX_DEPTH};
pub use relations::{
    classify, parse_legacy_relation, DisplayMode, LegacyKind, LegacyRelation, Relation,
    RelationLayer, RelationType,
};
pub use relfinder_parser::{
    ast::{PathStep, RelationPath},
    parse as parse_relation_path, serialize as serialize_relation_path,
};
pub use schema::{
    ForeignKeyDescriptor, ForeignKeyId, SchemaCaches, SchemaSnapshot, TableDescriptor, TableId,
    ViewDescriptor,
};
