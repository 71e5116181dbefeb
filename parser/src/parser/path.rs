use chumsky::prelude::*;

use crate::ast::*;
use crate::parser::utils::*;
use crate::tokens::*;

pub fn relation_path() -> impl Psr<RelationPath> {
    just(PATH_SEPARATOR)
        .ignore_then(
            name()
                .then(just(PATH_SEPARATOR).ignore_then(step()).repeated())
                .or_not(),
        )
        .then_ignore(end())
        .map(|parts| match parts {
            Some((source_table, steps)) => RelationPath {
                source_table,
                steps,
            },
            None => RelationPath::none(),
        })
}

fn step() -> impl Psr<PathStep> {
    name()
        .then(just(INBOUND_DELIMITER).ignore_then(name()).or_not())
        .map(|(name, inbound_key)| match inbound_key {
            Some(inbound_key) => PathStep::Inbound {
                table: name,
                inbound_key,
            },
            None => PathStep::Outbound { fkey: name },
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relation_path() {
        assert_eq!(relation_path().parse("."), Ok(RelationPath::none()));
        assert_eq!(
            relation_path().parse(".employee"),
            Ok(RelationPath::new("employee", vec![]))
        );
        assert_eq!(
            relation_path().parse(".fan_club.artist"),
            Ok(RelationPath::new(
                "fan_club",
                vec![PathStep::outbound("artist")]
            ))
        );
        assert_eq!(
            relation_path().parse(".covers.albums$cover"),
            Ok(RelationPath::new(
                "covers",
                vec![PathStep::inbound("albums", "cover")]
            ))
        );
        assert_eq!(
            relation_path()
                .parse(".users.user_interested_in_topic$user.topic.blog_in_topic$topic"),
            Ok(RelationPath::new(
                "users",
                vec![
                    PathStep::inbound("user_interested_in_topic", "user"),
                    PathStep::outbound("topic"),
                    PathStep::inbound("blog_in_topic", "topic"),
                ]
            ))
        );

        assert!(relation_path().parse("").is_err());
        assert!(relation_path().parse("users").is_err());
        assert!(relation_path().parse("..users").is_err());
        assert!(relation_path().parse(".users.").is_err());
        assert!(relation_path().parse(".users..room").is_err());
        assert!(relation_path().parse(".users.$user").is_err());
        assert!(relation_path().parse(".users.messages$").is_err());
        assert!(relation_path().parse(".users.a$b$c").is_err());
    }
}
