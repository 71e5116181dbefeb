use serde::{Deserialize, Serialize};

use crate::{errors::FinderError, relations::DisplayMode};

use super::{ForeignKeyId, TableId, TableName};

/// An immutable copy of the table and view catalog, as exported by the host application.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SchemaSnapshot {
    pub tables: Vec<TableDescriptor>,
    #[serde(default)]
    pub views: Vec<ViewDescriptor>,
}

impl SchemaSnapshot {
    pub fn from_json(schema_json: &str) -> Result<Self, FinderError> {
        serde_json::from_str(schema_json).map_err(|e| FinderError::InvalidSchema(e.to_string()))
    }

    pub fn get_view(&self, name: &str) -> Option<&ViewDescriptor> {
        self.views.iter().find(|view| view.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TableDescriptor {
    pub id: TableId,
    pub name: TableName,
    /// Keys owned by this table, in catalog order
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ForeignKeyDescriptor {
    pub id: ForeignKeyId,
    pub name: String,
    #[serde(rename = "table_id")]
    pub owning_table_id: TableId,
    #[serde(rename = "reftable_name")]
    pub target_table_name: TableName,
    #[serde(default)]
    pub is_unique: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ViewDescriptor {
    pub name: String,
    /// The view template which renders this view, e.g. `Show` or `List`
    #[serde(rename = "viewtemplate", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub table_id: Option<TableId>,
    #[serde(default)]
    pub display_type: Option<String>,
}

impl ViewDescriptor {
    pub fn display_mode(&self) -> Result<DisplayMode, FinderError> {
        let display_type = self.display_type.as_deref().unwrap_or_default();
        display_type
            .parse()
            .map_err(|_| FinderError::InvalidDisplayType {
                view: self.name.clone(),
                display_type: display_type.to_string(),
            })
    }

    pub fn is_excluded(&self, excluded_kinds: &[String]) -> bool {
        match &self.kind {
            Some(kind) => excluded_kinds.iter().any(|excluded| excluded == kind),
            None => false,
        }
    }
}
