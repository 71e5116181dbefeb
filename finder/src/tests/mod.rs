mod test_utils;

pub use test_utils::{foreign_key_ids_along, get_test_resource};
