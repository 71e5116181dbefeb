use relfinder_parser::ast::PathStep;

use super::{DisplayMode, RelationType};

/// Derive the semantic type of a relation from the shape of its path. The first matching rule
/// wins.
///
/// A single inbound step is a one-to-one relation only because the view asks for one row. The
/// uniqueness of the inbound key is not checked.
pub fn classify(
    steps: &[PathStep],
    source_table: &str,
    target_table: &str,
    display_mode: DisplayMode,
) -> RelationType {
    match steps {
        [PathStep::Inbound { .. }] => match display_mode {
            DisplayMode::NoRowLimit => RelationType::ChildList,
            DisplayMode::RowRequired => RelationType::OneToOneShow,
        },
        [PathStep::Inbound { .. }, PathStep::Inbound { .. }] => RelationType::ChildList,
        [PathStep::Outbound { .. }] => RelationType::ParentShow,
        [] if !source_table.is_empty() && source_table == target_table => RelationType::Own,
        [] => RelationType::Independent,
        _ => RelationType::RelationPath,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DisplayMode::*;
    use RelationType::*;

    fn inbound() -> PathStep {
        PathStep::inbound("blog_in_topic", "topic")
    }

    fn outbound() -> PathStep {
        PathStep::outbound("topic")
    }

    #[test]
    fn test_single_inbound_follows_display_mode() {
        assert_eq!(classify(&[inbound()], "topics", "blog_in_topic", NoRowLimit), ChildList);
        assert_eq!(classify(&[inbound()], "topics", "blog_in_topic", RowRequired), OneToOneShow);
    }

    #[test]
    fn test_two_inbound_steps() {
        let steps = [inbound(), inbound()];
        assert_eq!(classify(&steps, "a", "b", NoRowLimit), ChildList);
        assert_eq!(classify(&steps, "a", "b", RowRequired), ChildList);
    }

    #[test]
    fn test_single_outbound() {
        assert_eq!(classify(&[outbound()], "a", "b", RowRequired), ParentShow);
        assert_eq!(classify(&[outbound()], "a", "b", NoRowLimit), ParentShow);
    }

    #[test]
    fn test_no_steps() {
        assert_eq!(classify(&[], "employee", "employee", RowRequired), Own);
        assert_eq!(classify(&[], "employee", "department", NoRowLimit), Independent);
        assert_eq!(classify(&[], "", "albums", NoRowLimit), Independent);
        assert_eq!(classify(&[], "", "", NoRowLimit), Independent);
    }

    #[test]
    fn test_everything_else_is_a_relation_path() {
        let shapes: Vec<Vec<PathStep>> = vec![
            vec![outbound(), outbound()],
            vec![inbound(), outbound()],
            vec![outbound(), inbound()],
            vec![inbound(), inbound(), inbound()],
            vec![inbound(), outbound(), inbound(), outbound()],
        ];
        for steps in shapes {
            assert_eq!(classify(&steps, "a", "a", RowRequired), RelationPath);
            assert_eq!(classify(&steps, "a", "b", NoRowLimit), RelationPath);
        }
    }
}
