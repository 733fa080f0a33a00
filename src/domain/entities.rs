//! Domain entities: the dependency map and reference resolution

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

/// Mapping from entity name to its direct dependencies.
///
/// Insertion order is the discovery order and determines the order in which
/// top-level entities are attached to the tree, so the final linearization is
/// deterministic for a given model catalog. Values may name entities that are
/// not themselves keys; those stay leaves in the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    entries: IndexMap<String, Vec<String>>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert an entity with its ordered dependency list.
    ///
    /// Returns the previous dependency list if the entity was already present.
    pub fn insert(
        &mut self,
        entity: impl Into<String>,
        dependencies: Vec<String>,
    ) -> Option<Vec<String>> {
        self.entries.insert(entity.into(), dependencies)
    }

    pub fn get(&self, entity: &str) -> Option<&[String]> {
        self.entries.get(entity).map(Vec::as_slice)
    }

    pub fn contains(&self, entity: &str) -> bool {
        self.entries.contains_key(entity)
    }

    /// Entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for DependencyMap {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

fn wrapper_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Wrapper<First, ...> -> First. One level, first argument only.
    RE.get_or_init(|| {
        Regex::new(r"^\s*[A-Za-z_][A-Za-z0-9_:]*\s*<\s*([A-Za-z_][A-Za-z0-9_:]*)").unwrap()
    })
}

/// Resolve a dependency reference to the underlying entity name.
///
/// Parameterized references such as `Vec<Order>` or `List<Order>` resolve to
/// their first type argument (`Order`); plain names pass through trimmed.
/// Multi-argument wrappers like `Map<K, V>` also resolve to the first
/// argument. Nested wrappers are not unwrapped further.
pub fn resolve_reference(reference: &str) -> String {
    if let Some(caps) = wrapper_regex().captures(reference) {
        caps[1].to_string()
    } else {
        reference.trim().to_string()
    }
}
