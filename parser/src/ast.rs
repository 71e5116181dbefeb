use std::fmt;

use serde::Serialize;

use crate::tokens::{INBOUND_DELIMITER, PATH_SEPARATOR};

/// One hop of a relation path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PathStep {
    /// Follow a foreign key owned by the current table to the table it references.
    Outbound { fkey: String },
    /// Follow a foreign key owned by `table` back from the table it references.
    #[serde(rename_all = "camelCase")]
    Inbound { table: String, inbound_key: String },
}

impl PathStep {
    pub fn outbound(fkey: &str) -> Self {
        PathStep::Outbound {
            fkey: fkey.to_string(),
        }
    }

    pub fn inbound(table: &str, inbound_key: &str) -> Self {
        PathStep::Inbound {
            table: table.to_string(),
            inbound_key: inbound_key.to_string(),
        }
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathStep::Outbound { fkey } => write!(f, "{}", fkey),
            PathStep::Inbound { table, inbound_key } => {
                write!(f, "{}{}{}", table, INBOUND_DELIMITER, inbound_key)
            }
        }
    }
}

/// A source table followed by zero or more steps.
///
/// A path with an empty source table and no steps is the "no relation" path, rendered as a bare
/// separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationPath {
    pub source_table: String,
    pub steps: Vec<PathStep>,
}

impl RelationPath {
    pub fn new(source_table: &str, steps: Vec<PathStep>) -> Self {
        Self {
            source_table: source_table.to_string(),
            steps,
        }
    }

    /// The path which doesn't relate rows at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.source_table.is_empty() && self.steps.is_empty()
    }

    /// The number of steps in the path
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for RelationPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", PATH_SEPARATOR, self.source_table)?;
        for step in &self.steps {
            write!(f, "{}{}", PATH_SEPARATOR, step)?;
        }
        Ok(())
    }
}
