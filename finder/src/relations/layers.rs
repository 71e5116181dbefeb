use relfinder_parser::ast::PathStep;
use serde::Serialize;

use crate::{errors::FinderError, schema::SchemaCaches};

use super::Relation;

const INDEPENDENT_LAYER_NAME: &str = "None (no relation)";
const OWN_LAYER_NAME: &str = "Same table";

/// A node in the tree of relations offered by a relation picker. Paths which share a prefix share
/// the nodes of that prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationLayer {
    pub name: String,
    pub table: String,
    pub inbound_keys: Vec<RelationLayer>,
    pub fkeys: Vec<RelationLayer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel_path: Option<String>,
}

impl RelationLayer {
    fn new(name: &str, table: &str) -> Self {
        Self {
            name: name.to_string(),
            table: table.to_string(),
            inbound_keys: vec![],
            fkeys: vec![],
            rel_path: None,
        }
    }

    fn leaf(name: &str, table: &str, rel_path: String) -> Self {
        Self {
            rel_path: Some(rel_path),
            ..Self::new(name, table)
        }
    }

    pub fn root(source_table: &str) -> Self {
        Self::new("", source_table)
    }
}

fn descend<'l>(children: &'l mut Vec<RelationLayer>, name: &str, table: &str) -> &'l mut RelationLayer {
    let index = match children
        .iter()
        .position(|child| child.name == name && child.table == table)
    {
        Some(index) => index,
        None => {
            children.push(RelationLayer::new(name, table));
            children.len() - 1
        }
    };
    &mut children[index]
}

/// Fold relations discovered for `source_table` into one tree.
pub fn build_layers(
    source_table: &str,
    relations: &[Relation],
    caches: &SchemaCaches,
) -> Result<RelationLayer, FinderError> {
    let mut root = RelationLayer::root(source_table);
    for relation in relations {
        let path = &relation.path;
        let rel_path = path.to_string();
        if path.is_none() {
            root.fkeys.push(RelationLayer::leaf(
                INDEPENDENT_LAYER_NAME,
                INDEPENDENT_LAYER_NAME,
                rel_path,
            ));
            continue;
        }
        if path.is_empty() {
            root.fkeys.push(RelationLayer::leaf(OWN_LAYER_NAME, "", rel_path));
            continue;
        }
        let mut current_table = caches.get_table_by_name(&path.source_table)?;
        let mut level = &mut root;
        for step in &path.steps {
            match step {
                PathStep::Inbound { table, inbound_key } => {
                    current_table = caches.get_table_by_name(table)?;
                    level = descend(&mut level.inbound_keys, inbound_key, table);
                }
                PathStep::Outbound { fkey } => {
                    let foreign_key = current_table
                        .foreign_keys
                        .iter()
                        .find(|fk| &fk.name == fkey)
                        .ok_or_else(|| FinderError::UnknownForeignKey {
                            table: current_table.name.clone(),
                            fkey: fkey.clone(),
                        })?;
                    current_table = caches.get_table_by_name(&foreign_key.target_table_name)?;
                    level = descend(&mut level.fkeys, fkey, &current_table.name);
                }
            }
        }
        level.rel_path = Some(rel_path);
    }
    Ok(root)
}
