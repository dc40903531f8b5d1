//! Named sidebars.
//!
//! [`SidebarCollection`] keeps sidebars in declaration order in a flat `Vec`
//! with a name index for O(1) lookups. It serializes as a JSON/YAML mapping
//! from sidebar name to node list.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SidebarError;
use crate::node::NavNode;

/// Named, ordered navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sidebar {
    name: String,
    items: Vec<NavNode>,
}

impl Sidebar {
    /// Create a sidebar.
    #[must_use]
    pub fn new(name: impl Into<String>, items: Vec<NavNode>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// Sidebar name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Top-level nodes in display order.
    #[must_use]
    pub fn items(&self) -> &[NavNode] {
        &self.items
    }
}

/// Mapping from sidebar name to sidebar, in declaration order.
///
/// Names are unique: [`insert`](Self::insert) rejects duplicates and parsing
/// fails on a repeated key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarCollection {
    sidebars: Vec<Sidebar>,
    name_index: HashMap<String, usize>,
}

impl SidebarCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sidebar.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::DuplicateSidebar`] if the name is taken.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        items: Vec<NavNode>,
    ) -> Result<(), SidebarError> {
        let name = name.into();
        if self.name_index.contains_key(&name) {
            return Err(SidebarError::DuplicateSidebar(name));
        }
        self.name_index.insert(name.clone(), self.sidebars.len());
        self.sidebars.push(Sidebar::new(name, items));
        Ok(())
    }

    /// Get sidebar by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Sidebar> {
        self.name_index.get(name).map(|&i| &self.sidebars[i])
    }

    /// Iterate sidebars in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sidebar> {
        self.sidebars.iter()
    }

    /// Sidebar names in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.sidebars.iter().map(Sidebar::name).collect()
    }

    /// Number of sidebars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    /// Whether the collection has no sidebars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }
}

impl From<Sidebar> for SidebarCollection {
    fn from(sidebar: Sidebar) -> Self {
        let mut name_index = HashMap::new();
        name_index.insert(sidebar.name.clone(), 0);
        Self {
            sidebars: vec![sidebar],
            name_index,
        }
    }
}

impl<'a> IntoIterator for &'a SidebarCollection {
    type Item = &'a Sidebar;
    type IntoIter = std::slice::Iter<'a, Sidebar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for SidebarCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sidebars.len()))?;
        for sidebar in &self.sidebars {
            map.serialize_entry(&sidebar.name, &sidebar.items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SidebarCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = SidebarCollection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping from sidebar name to a list of items")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut collection = SidebarCollection::new();
                while let Some((name, items)) = map.next_entry::<String, Vec<NavNode>>()? {
                    collection
                        .insert(name, items)
                        .map_err(serde::de::Error::custom)?;
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}
