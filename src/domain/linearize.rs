//! Level-order linearization of the dependency tree.

use std::collections::HashSet;

use tracing::instrument;

use crate::domain::builder::DependencyTree;

/// Produces the dependency-respecting ordering of all entities in a tree.
///
/// Entities at the deepest levels (ends of dependency chains) come first,
/// entities that only consume others come last, so the result is a valid
/// topological order of the dependency relation: for every entity its
/// dependencies appear earlier in the sequence.
pub struct LevelOrderLinearizer;

impl LevelOrderLinearizer {
    /// Linearize `tree` into a deduplicated sequence of entity names.
    ///
    /// The sentinel root is excluded. Each entity appears exactly once, at
    /// the deepest level any of its nodes occupies; ties keep depth-first
    /// discovery order. Pure and idempotent for a fixed tree.
    #[instrument(level = "debug", skip(tree))]
    pub fn linearize(tree: &DependencyTree) -> Vec<String> {
        let mut visits: Vec<(String, usize)> = tree
            .arena()
            .iter()
            .filter(|(_, depth, _)| *depth > 0)
            .map(|(_, depth, node)| (node.data.label.clone(), depth))
            .collect();

        // Deepest level first; the sort is stable, so nodes on the same
        // level stay in discovery order.
        visits.sort_by(|a, b| b.1.cmp(&a.1));

        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for (label, _) in visits {
            if seen.insert(label.clone()) {
                ordered.push(label);
            }
        }
        ordered
    }
}
