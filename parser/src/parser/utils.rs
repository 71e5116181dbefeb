use chumsky::prelude::*;

use crate::tokens::*;

/// `Psr` is an abbreviation for "Parser". This is abbreviated because it is used in many places,
/// and we don't want it to conflict with Chumsky's `Parser` trait.
///
/// This is a utility type to reduce code duplication in types. It would be easier to write as
/// follows:
///
/// ```rs
/// pub type Psr<T> = Parser<char, T, Error = Simple<char>> + Clone + 'static;
/// ```
///
/// However, we can't do that without [trait aliases][1].
///
/// [1]: https://github.com/rust-lang/rust/issues/41517
pub trait Psr<T>: Parser<char, T, Error = Simple<char>> + Clone + 'static {}
impl<S, T> Psr<T> for S where S: Parser<char, T, Error = Simple<char>> + Clone + 'static {}

/// A table or key name. Anything goes except the two characters which carry meaning in a path.
pub fn name() -> impl Psr<String> {
    filter(|c: &char| *c != PATH_SEPARATOR && *c != INBOUND_DELIMITER)
        .repeated()
        .at_least(1)
        .collect::<String>()
}
