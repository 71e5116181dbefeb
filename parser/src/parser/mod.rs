mod path;
mod utils;

pub use path::relation_path;
