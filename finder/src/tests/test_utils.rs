use crate::{
    schema::{ForeignKeyId, SchemaSnapshot, TableDescriptor},
    PathStep, RelationPath,
};

pub fn get_test_resource(name: &str) -> String {
    let mut d = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    d.push("resources/test");
    d.push(name);
    // We unwrap here because we only ever expect this fn to run within a unit test
    std::fs::read_to_string(d).unwrap()
}

fn find_table<'s>(snapshot: &'s SchemaSnapshot, name: &str) -> &'s TableDescriptor {
    snapshot.tables.iter().find(|t| t.name == name).unwrap()
}

/// Resolve every step of a path to the id of the key it follows. Panics if a step doesn't exist.
pub fn foreign_key_ids_along(snapshot: &SchemaSnapshot, path: &RelationPath) -> Vec<ForeignKeyId> {
    let mut current = find_table(snapshot, &path.source_table);
    let mut ids = vec![];
    for step in &path.steps {
        match step {
            PathStep::Outbound { fkey } => {
                let fk = current.foreign_keys.iter().find(|fk| &fk.name == fkey).unwrap();
                ids.push(fk.id);
                current = find_table(snapshot, &fk.target_table_name);
            }
            PathStep::Inbound { table, inbound_key } => {
                let owner = find_table(snapshot, table);
                let fk = owner
                    .foreign_keys
                    .iter()
                    .find(|fk| &fk.name == inbound_key && fk.target_table_name == current.name)
                    .unwrap();
                ids.push(fk.id);
                current = owner;
            }
        }
    }
    ids
}
