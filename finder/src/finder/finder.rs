use itertools::Itertools;
use relfinder_parser::ast::{PathStep, RelationPath};

use crate::{
    errors::FinderError,
    relations::{build_layers, DisplayMode, Relation, RelationLayer},
    schema::{
        ForeignKeyDescriptor, SchemaCaches, SchemaSnapshot, TableDescriptor, TableId,
        ViewDescriptor,
    },
    Options,
};

use super::trail::Trail;

/// Collects the paths of one search which end on the target table.
struct Search<'s> {
    source_table: &'s str,
    target_table_id: TableId,
    found: Vec<RelationPath>,
}

impl<'s> Search<'s> {
    fn new(source_table: &'s str, target_table_id: TableId) -> Self {
        Self {
            source_table,
            target_table_id,
            found: vec![],
        }
    }

    fn record(&mut self, steps: Vec<PathStep>) {
        self.found.push(RelationPath::new(self.source_table, steps));
    }

    fn visit(&mut self, table: &TableDescriptor, trail: &Trail) {
        if table.id == self.target_table_id {
            self.found.push(trail.to_path(self.source_table));
        }
    }
}

/// Finds the relations between a source table and the table behind an embedded view.
///
/// The finder borrows the snapshot it was built from. Several finders may share one snapshot.
pub struct RelationsFinder<'a> {
    snapshot: &'a SchemaSnapshot,
    caches: SchemaCaches<'a>,
    options: Options,
}

impl<'a> RelationsFinder<'a> {
    pub fn new(snapshot: &'a SchemaSnapshot, options: Options) -> Self {
        Self {
            snapshot,
            caches: SchemaCaches::build(&snapshot.tables),
            options,
        }
    }

    fn get_view(&self, name: &str) -> Result<&'a ViewDescriptor, FinderError> {
        self.snapshot
            .get_view(name)
            .ok_or_else(|| FinderError::UnknownView(name.to_string()))
    }

    fn get_view_table(&self, view: &ViewDescriptor) -> Result<&'a TableDescriptor, FinderError> {
        let table_id = view
            .table_id
            .ok_or_else(|| FinderError::ViewWithoutTable(view.name.clone()))?;
        self.caches.get_table_by_id(table_id)
    }

    fn is_excluded(view: &ViewDescriptor, excluded: &[String]) -> bool {
        let is_excluded = view.is_excluded(excluded);
        if is_excluded {
            log::info!("view {} is excluded", view.name);
        }
        is_excluded
    }

    /// Find every relation from `source_table` to the view named `view_name`. Never fails: any
    /// error is logged and yields an empty result.
    pub fn find_relations(
        &self,
        source_table: &str,
        view_name: &str,
        excluded: &[String],
    ) -> Vec<Relation> {
        match self.try_find_relations(source_table, view_name, excluded) {
            Ok(relations) => relations,
            Err(error) => {
                log::error!(
                    "Unable to find relations from {} to view {}: {}",
                    source_table,
                    view_name,
                    error
                );
                vec![]
            }
        }
    }

    /// Like [`RelationsFinder::find_relations`], but hands errors back to the caller.
    pub fn try_find_relations(
        &self,
        source_table: &str,
        view_name: &str,
        excluded: &[String],
    ) -> Result<Vec<Relation>, FinderError> {
        let view = self.get_view(view_name)?;
        if Self::is_excluded(view, excluded) {
            return Ok(vec![]);
        }
        let target_table = view
            .table_id
            .and_then(|id| self.caches.table_by_id.get(&id).copied());
        let Some(target_table) = target_table else {
            return Ok(vec![Relation::none()]);
        };
        let display_mode = view.display_mode()?;
        let paths = match display_mode {
            DisplayMode::RowRequired => self.single_paths(source_table, view, excluded)?,
            DisplayMode::NoRowLimit => self.multi_paths(source_table, view, excluded)?,
        };
        Ok(paths
            .into_iter()
            .map(|path| Relation::new(path, &target_table.name, display_mode))
            .collect())
    }

    /// Group relations found for `source_table` into the tree shown by relation pickers.
    pub fn relation_layers(
        &self,
        source_table: &str,
        relations: &[Relation],
    ) -> Result<RelationLayer, FinderError> {
        build_layers(source_table, relations, &self.caches)
    }

    /// Paths for views which show a single row. The result holds no duplicates.
    pub fn single_relation_paths(
        &self,
        source_table: &str,
        view_name: &str,
        excluded: &[String],
    ) -> Result<Vec<String>, FinderError> {
        let view = self.get_view(view_name)?;
        let paths = self.single_paths(source_table, view, excluded)?;
        Ok(paths.iter().map(RelationPath::to_string).collect())
    }

    /// Paths for views which show any number of rows. The "no relation" path always comes first.
    pub fn multi_relation_paths(
        &self,
        source_table: &str,
        view_name: &str,
        excluded: &[String],
    ) -> Result<Vec<String>, FinderError> {
        let view = self.get_view(view_name)?;
        let paths = self.multi_paths(source_table, view, excluded)?;
        Ok(paths.iter().map(RelationPath::to_string).collect())
    }

    fn single_paths(
        &self,
        source_table: &str,
        view: &ViewDescriptor,
        excluded: &[String],
    ) -> Result<Vec<RelationPath>, FinderError> {
        if Self::is_excluded(view, excluded) {
            return Ok(vec![]);
        }
        let source = self.caches.get_table_by_name(source_table)?;
        let target = self.get_view_table(view)?;
        log::debug!(
            "searching single row relations from {} to {} (view {})",
            source.name,
            target.name,
            view.name
        );
        let mut search = Search::new(&source.name, target.id);
        if source.id == target.id {
            search.record(vec![]);
        }

        // parents, grandparents and so on
        self.search_outbound(&mut search, source, &Trail::default())?;

        let unique_keys_to_source: Vec<&ForeignKeyDescriptor> = self
            .caches
            .inbound_keys(&source.name)
            .iter()
            .copied()
            .filter(|fk| fk.is_unique)
            .collect();

        // one-to-one
        if self.options.max_depth >= 1 {
            for key_to_source in &unique_keys_to_source {
                let owner = self.caches.get_table_by_id(key_to_source.owning_table_id)?;
                if owner.id == target.id {
                    search.record(vec![PathStep::inbound(&owner.name, &key_to_source.name)]);
                }
            }
        }

        // out to a table which points back with a unique key
        if self.options.max_depth >= 2 {
            for key_to_source in &unique_keys_to_source {
                let owner = self.caches.get_table_by_id(key_to_source.owning_table_id)?;
                let keys_to_owner = source
                    .foreign_keys
                    .iter()
                    .filter(|fk| fk.target_table_name == owner.name);
                for key_to_owner in keys_to_owner {
                    search.record(vec![
                        PathStep::outbound(&key_to_owner.name),
                        PathStep::outbound(&key_to_source.name),
                    ]);
                }
            }
        }

        Ok(search.found.into_iter().unique().collect())
    }

    fn multi_paths(
        &self,
        source_table: &str,
        view: &ViewDescriptor,
        excluded: &[String],
    ) -> Result<Vec<RelationPath>, FinderError> {
        if Self::is_excluded(view, excluded) {
            return Ok(vec![]);
        }
        let source = self.caches.get_table_by_name(source_table)?;
        let target = self.get_view_table(view)?;
        log::debug!(
            "searching multi row relations from {} to {} (view {})",
            source.name,
            target.name,
            view.name
        );
        let mut search = Search::new(&source.name, target.id);
        search.found.push(RelationPath::none());
        if source.id == target.id {
            search.record(vec![]);
        }
        self.search_both_directions(&mut search, source, &Trail::default())?;
        Ok(search.found)
    }

    fn search_outbound(
        &self,
        search: &mut Search,
        current: &'a TableDescriptor,
        trail: &Trail,
    ) -> Result<(), FinderError> {
        if trail.len() >= self.options.max_depth {
            return Ok(());
        }
        for fk in &current.foreign_keys {
            if trail.has_used(fk.id) {
                continue;
            }
            let next_table = self.caches.get_table_by_name(&fk.target_table_name)?;
            let next_trail = trail.extended(fk.id, PathStep::outbound(&fk.name));
            search.visit(next_table, &next_trail);
            self.search_outbound(search, next_table, &next_trail)?;
        }
        Ok(())
    }

    fn search_both_directions(
        &self,
        search: &mut Search,
        current: &'a TableDescriptor,
        trail: &Trail,
    ) -> Result<(), FinderError> {
        if trail.len() >= self.options.max_depth {
            return Ok(());
        }
        for fk in &current.foreign_keys {
            if trail.has_used(fk.id) {
                continue;
            }
            let next_table = self.caches.get_table_by_name(&fk.target_table_name)?;
            let next_trail = trail.extended(fk.id, PathStep::outbound(&fk.name));
            search.visit(next_table, &next_trail);
            self.search_both_directions(search, next_table, &next_trail)?;
        }
        for fk in self.caches.inbound_keys(&current.name) {
            if trail.has_used(fk.id) {
                continue;
            }
            let next_table = self.caches.get_table_by_id(fk.owning_table_id)?;
            let next_trail = trail.extended(fk.id, PathStep::inbound(&next_table.name, &fk.name));
            search.visit(next_table, &next_trail);
            self.search_both_directions(search, next_table, &next_trail)?;
        }
        Ok(())
    }
}
