mod classify;
mod layers;
mod legacy;
mod relation;

pub use classify::classify;
pub use layers::{build_layers, RelationLayer};
pub use legacy::{parse_legacy_relation, LegacyKind, LegacyRelation};
pub use relation::{DisplayMode, Relation, RelationType};
