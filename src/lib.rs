//! modelhier: data-model dependency inspector
//!
//! Discovers foreign-key style dependencies between data-model entities and
//! produces a dependency tree plus a linear creation order (dependencies
//! before dependents).

pub mod cli;
pub mod config;
pub mod discovery;
pub mod domain;
pub mod exitcode;
pub mod util;
