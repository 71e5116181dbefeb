mod error;

pub use error::{ErrorKind, FinderError};
