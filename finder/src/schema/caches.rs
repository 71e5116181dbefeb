use std::collections::HashMap;

use crate::errors::FinderError;

use super::{ForeignKeyDescriptor, TableDescriptor, TableId};

/// Lookup maps over the tables of one snapshot. Built once per search session and never mutated.
#[derive(Debug)]
pub struct SchemaCaches<'a> {
    pub table_by_id: HashMap<TableId, &'a TableDescriptor>,
    pub table_by_name: HashMap<&'a str, &'a TableDescriptor>,
    /// Keys are the names of referenced tables. Values keep snapshot order.
    pub inbound_keys_by_target: HashMap<&'a str, Vec<&'a ForeignKeyDescriptor>>,
}

impl<'a> SchemaCaches<'a> {
    pub fn build(tables: &'a [TableDescriptor]) -> Self {
        let mut table_by_id = HashMap::with_capacity(tables.len());
        let mut table_by_name = HashMap::with_capacity(tables.len());
        let mut inbound_keys_by_target: HashMap<&'a str, Vec<&'a ForeignKeyDescriptor>> =
            HashMap::new();
        for table in tables {
            table_by_id.insert(table.id, table);
            table_by_name.insert(table.name.as_str(), table);
            for foreign_key in &table.foreign_keys {
                inbound_keys_by_target
                    .entry(foreign_key.target_table_name.as_str())
                    .or_default()
                    .push(foreign_key);
            }
        }
        Self {
            table_by_id,
            table_by_name,
            inbound_keys_by_target,
        }
    }

    pub fn get_table_by_id(&self, id: TableId) -> Result<&'a TableDescriptor, FinderError> {
        self.table_by_id
            .get(&id)
            .copied()
            .ok_or(FinderError::UnknownTableId(id))
    }

    pub fn get_table_by_name(&self, name: &str) -> Result<&'a TableDescriptor, FinderError> {
        self.table_by_name
            .get(name)
            .copied()
            .ok_or_else(|| FinderError::UnknownTable(name.to_string()))
    }

    /// Keys anywhere in the schema which reference the named table
    pub fn inbound_keys(&self, table_name: &str) -> &[&'a ForeignKeyDescriptor] {
        self.inbound_keys_by_target
            .get(table_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
