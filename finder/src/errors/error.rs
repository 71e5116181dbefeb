use thiserror::Error;

use crate::schema::TableId;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FinderError {
    #[error("The view {0} does not exist")]
    UnknownView(String),

    #[error("The table {0} does not exist")]
    UnknownTable(String),

    #[error("The table with id {0} does not exist")]
    UnknownTableId(TableId),

    #[error("The view {0} is not bound to an existing table")]
    ViewWithoutTable(String),

    #[error("The table {table} has no foreign key {fkey}")]
    UnknownForeignKey { table: String, fkey: String },

    #[error("view {view}: The displayType ({display_type}) is not valid")]
    InvalidDisplayType { view: String, display_type: String },

    #[error("{0}")]
    InvalidPath(String),

    #[error("Unknown legacy relation type `{0}`")]
    UnknownLegacyKind(String),

    #[error("Schema input is not valid JSON: {0}")]
    InvalidSchema(String),
}

/// The kind of an error that can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A view, table or key name doesn't exist in the snapshot.
    Resolution,
    /// The snapshot exists but describes something unsupported.
    Configuration,
    /// Malformed input handed to the engine.
    Input,
}

impl FinderError {
    /// Return the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FinderError::UnknownView(_)
            | FinderError::UnknownTable(_)
            | FinderError::UnknownTableId(_)
            | FinderError::ViewWithoutTable(_)
            | FinderError::UnknownForeignKey { .. } => ErrorKind::Resolution,
            FinderError::InvalidDisplayType { .. } => ErrorKind::Configuration,
            FinderError::InvalidPath(_)
            | FinderError::UnknownLegacyKind(_)
            | FinderError::InvalidSchema(_) => ErrorKind::Input,
        }
    }
}
