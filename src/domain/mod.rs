//! Domain layer: dependency map, tree construction, linearization
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config
//! loading). Input is a [`DependencyMap`]; output is a tree and its
//! linearized creation order.

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;
pub mod linearize;

pub use arena::{NodeData, TreeArena, TreeNode, ROOT_LABEL};
pub use builder::{DependencyTree, DependencyTreeBuilder};
pub use entities::{resolve_reference, DependencyMap};
pub use error::{DomainError, DomainResult};
pub use linearize::LevelOrderLinearizer;
