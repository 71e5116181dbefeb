mod parser;

pub mod ast;
pub mod tokens;

use ast::{PathStep, RelationPath};
use chumsky::Parser;
use parser::relation_path;

/// Parse a canonical relation path string such as `.users.messages$user.room`.
pub fn parse(input: &str) -> Result<RelationPath, String> {
    relation_path()
        .parse(input)
        .map_err(|_| format!("Invalid relation path `{}`", input))
}

/// Render a source table and its steps as a canonical relation path string.
pub fn serialize(source_table: &str, steps: &[PathStep]) -> String {
    RelationPath::new(source_table, steps.to_vec()).to_string()
}
