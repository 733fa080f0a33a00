//! Model catalog discovery: scans TOML model files into a dependency map.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::discovery::error::{DiscoveryError, DiscoveryResult};
use crate::domain::{resolve_reference, DependencyMap};

/// One `[[entity]]` table in a model file.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityDef {
    pub name: String,
    /// Logical module the entity belongs to, e.g. "shop.sales"
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldDef>,
}

/// One `[[entity.field]]` table.
///
/// A field contributes a dependency edge when it names the entity it
/// references, or when it is flagged as a foreign key and its type is the
/// referenced entity (possibly wrapped, e.g. `Vec<OrderLine>`).
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub references: Option<String>,
    #[serde(default)]
    pub foreign_key: bool,
}

impl EntityDef {
    /// Direct dependencies of this entity, in field order.
    pub fn dependencies(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter_map(|field| {
                if let Some(reference) = &field.references {
                    Some(resolve_reference(reference))
                } else if field.foreign_key {
                    Some(resolve_reference(&field.ty))
                } else {
                    None
                }
            })
            .collect()
    }

    fn in_module(&self, filter: &str) -> bool {
        self.module
            .as_deref()
            .is_some_and(|module| module.contains(filter))
    }
}

#[derive(Debug, Deserialize)]
struct ModelFile {
    #[serde(default)]
    entity: Vec<EntityDef>,
}

/// Discovers entity definitions from a directory of TOML model files.
pub struct CatalogDiscovery {
    model_extension: String,
    module_filter: Option<String>,
}

impl CatalogDiscovery {
    pub fn new(model_extension: impl Into<String>) -> Self {
        Self {
            model_extension: model_extension.into(),
            module_filter: None,
        }
    }

    /// Restrict discovery to entities whose module contains `filter`
    /// (substring match, like a namespace prefix).
    pub fn with_module_filter(mut self, filter: Option<String>) -> Self {
        self.module_filter = filter;
        self
    }

    /// Scan `directory_path` for model files and collect every entity into a
    /// dependency map, in scan order.
    ///
    /// Entities without dependencies are kept as keys so they still show up
    /// in the creation order. Two definitions of the same entity name are
    /// rejected.
    #[instrument(level = "debug", skip(self))]
    pub fn discover_directory(&self, directory_path: &Path) -> DiscoveryResult<DependencyMap> {
        if !directory_path.exists() {
            return Err(DiscoveryError::DirectoryNotFound(
                directory_path.to_path_buf(),
            ));
        }
        if !directory_path.is_dir() {
            return Err(DiscoveryError::NotADirectory(directory_path.to_path_buf()));
        }

        let mut map = DependencyMap::new();

        // Sorted walk keeps discovery order independent of filesystem order.
        for entry in WalkDir::new(directory_path).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_model_file = entry
                .path()
                .extension()
                .is_some_and(|ext| ext == self.model_extension.as_str());
            if !is_model_file {
                continue;
            }

            for entity in self.discover_file(entry.path())? {
                if let Some(filter) = &self.module_filter {
                    if !entity.in_module(filter) {
                        continue;
                    }
                }
                if map.insert(&entity.name, entity.dependencies()).is_some() {
                    return Err(DiscoveryError::DuplicateEntity {
                        name: entity.name,
                        path: entry.path().to_path_buf(),
                    });
                }
            }
        }

        debug!("discovered {} entities", map.len());
        Ok(map)
    }

    /// Parse the entity definitions of a single model file.
    #[instrument(level = "debug", skip(self))]
    pub fn discover_file(&self, path: &Path) -> DiscoveryResult<Vec<EntityDef>> {
        let content = fs::read_to_string(path).map_err(|source| DiscoveryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model: ModelFile =
            toml::from_str(&content).map_err(|source| DiscoveryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(model.entity)
    }
}
