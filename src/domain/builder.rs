//! Dependency tree construction from a dependency map.

use std::collections::HashSet;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::{NodeData, TreeArena};
use crate::domain::entities::{resolve_reference, DependencyMap};
use crate::domain::error::{DomainError, DomainResult};

/// The built dependency tree: the node arena plus the height reached while
/// expanding it.
///
/// Height is the maximum depth of any node in edges from the sentinel root
/// (root 0, top-level entities 1). The empty map yields height 0.
#[derive(Debug)]
pub struct DependencyTree {
    arena: TreeArena,
    height: usize,
}

impl DependencyTree {
    pub fn arena(&self) -> &TreeArena {
        &self.arena
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

/// Constructs the dependency tree for a set of entities.
///
/// Every key of the map becomes a child of a synthetic root node and is
/// expanded recursively: each dependency gets a fresh node, and dependencies
/// that are themselves keys are expanded through their own dependency list.
/// Identifiers that are not keys stay leaves.
pub struct DependencyTreeBuilder {
    visited_path: HashSet<String>,
}

impl Default for DependencyTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyTreeBuilder {
    pub fn new() -> Self {
        Self {
            visited_path: HashSet::new(),
        }
    }

    /// Build the tree for `map`.
    ///
    /// Fails with [`DomainError::CycleDetected`] when a dependency chain
    /// leads back to an entity already on the current root-to-node path. The
    /// visited set is per path, not global: the same entity may appear in
    /// any number of sibling branches.
    #[instrument(level = "debug", skip(self, map))]
    pub fn build(&mut self, map: &DependencyMap) -> DomainResult<DependencyTree> {
        let mut arena = TreeArena::new();
        let root_idx = arena.insert_node(NodeData::root(), None);
        let mut height = 0;

        for (entity, _) in map.iter() {
            let node_idx = arena.insert_node(NodeData::entity(entity), Some(root_idx));

            self.visited_path.clear();
            self.visited_path.insert(entity.to_string());
            self.expand(&mut arena, map, entity, node_idx, 1, &mut height)?;
        }

        debug!("built tree with {} entities, height {}", map.len(), height);
        Ok(DependencyTree { arena, height })
    }

    fn expand(
        &mut self,
        arena: &mut TreeArena,
        map: &DependencyMap,
        entity: &str,
        node_idx: Index,
        depth: usize,
        height: &mut usize,
    ) -> DomainResult<()> {
        if depth > *height {
            *height = depth;
        }

        let Some(dependencies) = map.get(entity) else {
            // Unknown identifier: a true leaf, nothing further to expand.
            return Ok(());
        };

        for dependency in dependencies {
            let target = resolve_reference(dependency);

            if self.visited_path.contains(&target) {
                return Err(DomainError::CycleDetected { entity: target });
            }

            let child_idx = arena.insert_node(NodeData::entity(&target), Some(node_idx));

            self.visited_path.insert(target.clone());
            self.expand(arena, map, &target, child_idx, depth + 1, height)?;
            self.visited_path.remove(&target);
        }

        Ok(())
    }
}
