//! Arena-based dependency tree structure.

use std::fmt;

use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::instrument;

/// Sentinel label of the synthetic root node.
pub const ROOT_LABEL: &str = "root";

/// Data payload for tree nodes: the entity name this position represents.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub label: String,
}

impl NodeData {
    pub fn entity(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn root() -> Self {
        Self {
            label: ROOT_LABEL.to_string(),
        }
    }
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Tree node in the arena-based dependency tree.
///
/// The same entity may appear as multiple distinct nodes in different
/// branches; the tree is deliberately not deduplicated, only the final
/// linearized output is.
#[derive(Debug)]
pub struct TreeNode {
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena
    pub children: Vec<Index>,
}

/// Arena-based tree for the entity dependency hierarchy.
///
/// Uses a generational arena for memory-safe node references and O(1)
/// lookups. Nodes are exclusively owned by the arena and never aliased.
#[derive(Debug)]
pub struct TreeArena {
    arena: Arena<TreeNode>,
    root: Option<Index>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let node = TreeNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Depth-first pre-order traversal carrying the depth of each node
    /// (root at depth 0).
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }

    /// Maximum depth of any node, in edges from the root.
    ///
    /// An empty tree and a tree holding only the root both have depth 0.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.iter().map(|(_, depth, _)| depth).max().unwrap_or(0)
    }

    /// Convert to a `termtree::Tree` for indented display.
    pub fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(arena: &TreeArena, node_idx: Index, parent_tree: &mut Tree<String>) {
            if let Some(node) = arena.get_node(node_idx) {
                for &child_idx in &node.children {
                    if let Some(child) = arena.get_node(child_idx) {
                        let mut child_tree = Tree::new(child.data.label.clone());
                        build_tree(arena, child_idx, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        if let Some(root_idx) = self.root {
            let mut tree = Tree::new(
                self.get_node(root_idx)
                    .map(|n| n.data.label.clone())
                    .unwrap_or_default(),
            );
            build_tree(self, root_idx, &mut tree);
            tree
        } else {
            Tree::new("empty".to_string())
        }
    }
}

pub struct TreeIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<(Index, usize)>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push((root, 0));
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, usize, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((current_idx, depth)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push((child, depth + 1));
                }
                return Some((current_idx, depth, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_visits_depth_first_with_depths() {
        let mut arena = TreeArena::new();
        let root = arena.insert_node(NodeData::root(), None);
        let a = arena.insert_node(NodeData::entity("A"), Some(root));
        arena.insert_node(NodeData::entity("B"), Some(a));
        arena.insert_node(NodeData::entity("C"), Some(root));

        let visited: Vec<(String, usize)> = arena
            .iter()
            .map(|(_, depth, node)| (node.data.label.clone(), depth))
            .collect();

        assert_eq!(
            visited,
            vec![
                ("root".to_string(), 0),
                ("A".to_string(), 1),
                ("B".to_string(), 2),
                ("C".to_string(), 1),
            ]
        );
        assert_eq!(arena.depth(), 2);
    }

    #[test]
    fn test_empty_arena_has_depth_zero() {
        let arena = TreeArena::new();
        assert_eq!(arena.depth(), 0);
        assert!(arena.iter().next().is_none());
    }
}
