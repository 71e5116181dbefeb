use std::str::FromStr;

use relfinder_parser::ast::RelationPath;
use serde::Serialize;

use crate::errors::FinderError;

use super::classify::classify;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationType {
    Own,
    Independent,
    ChildList,
    OneToOneShow,
    ParentShow,
    RelationPath,
}

impl RelationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::Own => "OWN",
            RelationType::Independent => "INDEPENDENT",
            RelationType::ChildList => "CHILD_LIST",
            RelationType::OneToOneShow => "ONE_TO_ONE_SHOW",
            RelationType::ParentShow => "PARENT_SHOW",
            RelationType::RelationPath => "RELATION_PATH",
        }
    }
}

/// How many rows a view expects from its relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayMode {
    RowRequired,
    NoRowLimit,
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROW_REQUIRED" => Ok(DisplayMode::RowRequired),
            "NO_ROW_LIMIT" => Ok(DisplayMode::NoRowLimit),
            _ => Err(format!("Unknown display type `{}`", s)),
        }
    }
}

/// A discovered path together with the table and display mode it was discovered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub path: RelationPath,
    pub target_table: String,
    pub display_mode: DisplayMode,
}

impl Relation {
    pub fn new(path: RelationPath, target_table: &str, display_mode: DisplayMode) -> Self {
        Self {
            path,
            target_table: target_table.to_string(),
            display_mode,
        }
    }

    /// Build a relation from its canonical path string.
    pub fn parse(
        relation_string: &str,
        target_table: &str,
        display_mode: DisplayMode,
    ) -> Result<Self, FinderError> {
        let path = relfinder_parser::parse(relation_string).map_err(FinderError::InvalidPath)?;
        Ok(Self::new(path, target_table, display_mode))
    }

    /// The relation used when a view has no table to relate to.
    pub fn none() -> Self {
        Self::new(RelationPath::none(), "", DisplayMode::NoRowLimit)
    }

    pub fn relation_type(&self) -> RelationType {
        classify(
            &self.path.steps,
            &self.path.source_table,
            &self.target_table,
            self.display_mode,
        )
    }

    pub fn relation_string(&self) -> String {
        self.path.to_string()
    }
}

impl Serialize for Relation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Relation", 6)?;
        state.serialize_field("type", &self.relation_type())?;
        state.serialize_field("relationString", &self.relation_string())?;
        state.serialize_field("sourceTable", &self.path.source_table)?;
        state.serialize_field("path", &self.path.steps)?;
        state.serialize_field("targetTable", &self.target_table)?;
        state.serialize_field("displayMode", &self.display_mode)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use relfinder_parser::ast::PathStep;

    use super::*;

    #[test]
    fn test_display_mode_from_str() {
        assert_eq!("ROW_REQUIRED".parse::<DisplayMode>(), Ok(DisplayMode::RowRequired));
        assert_eq!("NO_ROW_LIMIT".parse::<DisplayMode>(), Ok(DisplayMode::NoRowLimit));
        assert!("INVALID".parse::<DisplayMode>().is_err());
        assert!("row_required".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn test_relation_parse() {
        let relation = Relation::parse(".covers.albums$cover", "albums", DisplayMode::RowRequired)
            .unwrap();
        assert_eq!(relation.path.source_table, "covers");
        assert_eq!(relation.path.steps, vec![PathStep::inbound("albums", "cover")]);
        assert_eq!(relation.relation_type(), RelationType::OneToOneShow);
        assert_eq!(relation.relation_string(), ".covers.albums$cover");

        let invalid = Relation::parse("covers", "albums", DisplayMode::RowRequired);
        assert!(matches!(invalid, Err(FinderError::InvalidPath(_))));
    }

    #[test]
    fn test_none_relation() {
        let relation = Relation::none();
        assert_eq!(relation.relation_string(), ".");
        assert_eq!(relation.relation_type(), RelationType::Independent);
    }

    #[test]
    fn test_serialize() {
        let relation =
            Relation::parse(".fan_club.artist", "artists", DisplayMode::RowRequired).unwrap();
        let json = serde_json::to_value(&relation).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "PARENT_SHOW",
                "relationString": ".fan_club.artist",
                "sourceTable": "fan_club",
                "path": [{"outbound": {"fkey": "artist"}}],
                "targetTable": "artists",
                "displayMode": "ROW_REQUIRED",
            })
        );
    }
}
