//! Node locations for diagnostics.

use std::fmt;

/// Location of a node inside a [`SidebarCollection`](crate::SidebarCollection).
///
/// Displays as `tutorialSidebar[2].items[0]`: the sidebar name, the index in
/// the sidebar's top-level items, then one `.items[i]` per nested category.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodePath {
    sidebar: String,
    indices: Vec<usize>,
}

impl NodePath {
    /// Path to a sidebar itself.
    #[must_use]
    pub fn sidebar(name: impl Into<String>) -> Self {
        Self {
            sidebar: name.into(),
            indices: Vec::new(),
        }
    }

    /// Path to the `index`-th child of this node.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self {
            sidebar: self.sidebar.clone(),
            indices,
        }
    }

    /// Name of the sidebar the node belongs to.
    #[must_use]
    pub fn sidebar_name(&self) -> &str {
        &self.sidebar
    }

    /// Child indices from the sidebar root.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Nesting depth (0 for the sidebar itself).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.indices.len()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sidebar)?;
        for (depth, index) in self.indices.iter().enumerate() {
            if depth == 0 {
                write!(f, "[{index}]")?;
            } else {
                write!(f, ".items[{index}]")?;
            }
        }
        Ok(())
    }
}
