//! Conversion of relations persisted in the format used before relation paths existed.
//!
//! Legacy relations were stored as a kind plus a dotted descriptor whose first token is always
//! the name of the embedded view, e.g. `ChildList` with `blog_feed.blog_posts.author`.

use std::str::FromStr;

use relfinder_parser::ast::{PathStep, RelationPath};
use serde::Serialize;

use crate::errors::FinderError;

use super::RelationType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyKind {
    ChildList,
    Independent,
    Own,
    OneToOneShow,
    ParentShow,
}

impl FromStr for LegacyKind {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ChildList" => Ok(LegacyKind::ChildList),
            "Independent" => Ok(LegacyKind::Independent),
            "Own" => Ok(LegacyKind::Own),
            "OneToOneShow" => Ok(LegacyKind::OneToOneShow),
            "ParentShow" => Ok(LegacyKind::ParentShow),
            _ => Err(FinderError::UnknownLegacyKind(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyRelation {
    #[serde(rename = "type")]
    pub relation_type: RelationType,
    pub path: RelationPath,
}

impl LegacyRelation {
    fn new(relation_type: RelationType, parent_table: &str, steps: Vec<PathStep>) -> Self {
        Self {
            relation_type,
            path: RelationPath::new(parent_table, steps),
        }
    }
}

/// Convert a legacy relation. Returns `None` when the descriptor doesn't have the shape its kind
/// requires.
pub fn parse_legacy_relation(
    kind: LegacyKind,
    relation: Option<&str>,
    parent_table: &str,
) -> Option<LegacyRelation> {
    let tokens: Vec<&str> = relation
        .filter(|r| !r.is_empty())
        .map(|r| r.split('.').collect())
        .unwrap_or_default();
    match (kind, tokens.as_slice()) {
        (LegacyKind::ChildList, [_view, table, key]) => Some(LegacyRelation::new(
            RelationType::ChildList,
            parent_table,
            vec![PathStep::inbound(table, key)],
        )),
        (LegacyKind::ChildList, [_view, through_table, through_key, from_table, from_key]) => {
            Some(LegacyRelation::new(
                RelationType::ChildList,
                parent_table,
                vec![
                    PathStep::inbound(through_table, through_key),
                    PathStep::inbound(from_table, from_key),
                ],
            ))
        }
        (LegacyKind::Independent, _) => Some(LegacyRelation {
            relation_type: RelationType::Independent,
            path: RelationPath::none(),
        }),
        (LegacyKind::Own, _) => Some(LegacyRelation::new(
            RelationType::Own,
            parent_table,
            vec![],
        )),
        (LegacyKind::OneToOneShow, [_view, related_table, key]) => Some(LegacyRelation::new(
            RelationType::OneToOneShow,
            parent_table,
            vec![PathStep::inbound(related_table, key)],
        )),
        (LegacyKind::ParentShow, [_view, _parent_table, fkey]) => Some(LegacyRelation::new(
            RelationType::ParentShow,
            parent_table,
            vec![PathStep::outbound(fkey)],
        )),
        _ => None,
    }
}
