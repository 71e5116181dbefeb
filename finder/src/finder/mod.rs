mod finder;
mod trail;

pub use finder::RelationsFinder;
