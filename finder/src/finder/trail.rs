use std::collections::HashSet;

use relfinder_parser::ast::{PathStep, RelationPath};

use crate::schema::ForeignKeyId;

/// The steps taken on one branch of a search, along with the keys those steps used.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    steps: Vec<PathStep>,
    used_keys: HashSet<ForeignKeyId>,
}

impl Trail {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn has_used(&self, foreign_key_id: ForeignKeyId) -> bool {
        self.used_keys.contains(&foreign_key_id)
    }

    /// Returns a copy of this trail with one more step. `self` is never modified, so every branch
    /// leaving a node starts out from the same trail.
    pub fn extended(&self, foreign_key_id: ForeignKeyId, step: PathStep) -> Trail {
        let mut next = self.clone();
        next.steps.push(step);
        next.used_keys.insert(foreign_key_id);
        next
    }

    pub fn to_path(&self, source_table: &str) -> RelationPath {
        RelationPath::new(source_table, self.steps.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_leaves_original_alone() {
        let start = Trail::default();
        let left = start.extended(1, PathStep::outbound("department"));
        let right = start.extended(2, PathStep::inbound("employee", "department"));

        assert_eq!(start.len(), 0);
        assert!(!start.has_used(1));
        assert!(left.has_used(1) && !left.has_used(2));
        assert!(right.has_used(2) && !right.has_used(1));

        let deeper = left.extended(3, PathStep::outbound("manager"));
        assert_eq!(deeper.len(), 2);
        assert!(deeper.has_used(1) && deeper.has_used(3));
        assert_eq!(left.len(), 1);
        assert_eq!(
            deeper.to_path("employee").to_string(),
            ".employee.department.manager"
        );
    }
}
