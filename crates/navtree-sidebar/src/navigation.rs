//! Depth-first flattening and previous/next links.
//!
//! The reading order of a sidebar is the pre-order depth-first walk of its
//! tree with siblings in declaration order. Categories contribute no entry of
//! their own; only documents do. Previous/next links are the neighbours of a
//! document in that order.
//!
//! # Example
//!
//! ```
//! use navtree_sidebar::{NavNode, Sidebar};
//!
//! let sidebar = Sidebar::new(
//!     "docs",
//!     vec![
//!         NavNode::doc("intro"),
//!         NavNode::category("Guides", vec![NavNode::doc("guides/setup")]),
//!     ],
//! );
//!
//! assert_eq!(sidebar.doc_ids(), vec!["intro", "guides/setup"]);
//! let links = sidebar.page_links("guides/setup").unwrap();
//! assert_eq!(links.previous.map(|d| d.id.as_str()), Some("intro"));
//! assert!(links.next.is_none());
//! ```

use serde::Serialize;

use crate::collection::{Sidebar, SidebarCollection};
use crate::node::{DocRef, NavNode};

/// Neighbours of a document in reading order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageLinks<'a> {
    /// Preceding document, `None` for the first one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<&'a DocRef>,
    /// Following document, `None` for the last one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<&'a DocRef>,
}

impl Sidebar {
    /// All documents in reading order.
    #[must_use]
    pub fn flatten(&self) -> Vec<&DocRef> {
        fn collect<'a>(items: &'a [NavNode], out: &mut Vec<&'a DocRef>) {
            for node in items {
                match node {
                    NavNode::Doc(doc) => out.push(doc),
                    NavNode::Category(category) => collect(&category.items, out),
                }
            }
        }

        let mut docs = Vec::new();
        collect(self.items(), &mut docs);
        docs
    }

    /// Document ids in reading order.
    #[must_use]
    pub fn doc_ids(&self) -> Vec<&str> {
        self.flatten().into_iter().map(|doc| doc.id.as_str()).collect()
    }

    /// Whether the sidebar references a document.
    #[must_use]
    pub fn contains_doc(&self, doc_id: &str) -> bool {
        self.flatten().iter().any(|doc| doc.id == doc_id)
    }

    /// Previous/next links for a document.
    ///
    /// If the document is listed more than once, the first occurrence is
    /// used. Returns `None` if the document is not in this sidebar.
    #[must_use]
    pub fn page_links(&self, doc_id: &str) -> Option<PageLinks<'_>> {
        let docs = self.flatten();
        let position = docs.iter().position(|doc| doc.id == doc_id)?;

        Some(PageLinks {
            previous: position.checked_sub(1).map(|i| docs[i]),
            next: docs.get(position + 1).copied(),
        })
    }

    /// Labels of the categories enclosing a document, outermost first.
    ///
    /// Returns an empty list for a top-level document and `None` if the
    /// document is not in this sidebar.
    #[must_use]
    pub fn breadcrumbs(&self, doc_id: &str) -> Option<Vec<&str>> {
        fn find<'a>(items: &'a [NavNode], doc_id: &str, trail: &mut Vec<&'a str>) -> bool {
            for node in items {
                match node {
                    NavNode::Doc(doc) if doc.id == doc_id => return true,
                    NavNode::Doc(_) => {}
                    NavNode::Category(category) => {
                        trail.push(&category.label);
                        if find(&category.items, doc_id, trail) {
                            return true;
                        }
                        trail.pop();
                    }
                }
            }
            false
        }

        let mut trail = Vec::new();
        find(self.items(), doc_id, &mut trail).then_some(trail)
    }
}

impl SidebarCollection {
    /// First sidebar, in declaration order, that references a document.
    #[must_use]
    pub fn sidebar_for_doc(&self, doc_id: &str) -> Option<&Sidebar> {
        self.iter().find(|sidebar| sidebar.contains_doc(doc_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{TUTORIAL_SIDEBAR, tutorial_sidebars};

    fn nested() -> Sidebar {
        Sidebar::new(
            "docs",
            vec![
                NavNode::category(
                    "A",
                    vec![
                        NavNode::doc("a/1"),
                        NavNode::category("B", vec![NavNode::doc("a/b/1"), NavNode::doc("a/b/2")]),
                        NavNode::doc("a/2"),
                    ],
                ),
                NavNode::category("Empty", Vec::new()),
                NavNode::doc("last"),
            ],
        )
    }

    #[test]
    fn test_builtin_reading_order() {
        let collection = tutorial_sidebars();
        let sidebar = collection.get(TUTORIAL_SIDEBAR).unwrap();

        assert_eq!(
            sidebar.doc_ids(),
            vec![
                "intro",
                "tutorials/mcp",
                "api/overview",
                "examples/basic-usage",
                "best-practices/model-selection",
                "deployment/setup",
            ]
        );
    }

    #[test]
    fn test_flatten_nested_depth_first() {
        assert_eq!(
            nested().doc_ids(),
            vec!["a/1", "a/b/1", "a/b/2", "a/2", "last"]
        );
    }

    #[test]
    fn test_flatten_is_stable_across_construction() {
        let first = tutorial_sidebars();
        let second = tutorial_sidebars();

        assert_eq!(first, second);
        assert_eq!(
            first.get(TUTORIAL_SIDEBAR).unwrap().flatten(),
            second.get(TUTORIAL_SIDEBAR).unwrap().flatten()
        );
    }

    #[test]
    fn test_flatten_empty_sidebar() {
        let sidebar = Sidebar::new("docs", Vec::new());

        assert!(sidebar.flatten().is_empty());
    }

    #[test]
    fn test_page_links_middle() {
        let sidebar = nested();

        let links = sidebar.page_links("a/b/2").unwrap();

        assert_eq!(links.previous.unwrap().id, "a/b/1");
        assert_eq!(links.next.unwrap().id, "a/2");
    }

    #[test]
    fn test_page_links_crosses_empty_category() {
        let sidebar = nested();

        let links = sidebar.page_links("last").unwrap();

        assert_eq!(links.previous.unwrap().id, "a/2");
        assert!(links.next.is_none());
    }

    #[test]
    fn test_page_links_first_has_no_previous() {
        let collection = tutorial_sidebars();
        let sidebar = collection.get(TUTORIAL_SIDEBAR).unwrap();

        let links = sidebar.page_links("intro").unwrap();

        assert!(links.previous.is_none());
        assert_eq!(links.next.unwrap().id, "tutorials/mcp");
    }

    #[test]
    fn test_page_links_unknown_doc() {
        assert!(nested().page_links("missing").is_none());
    }

    #[test]
    fn test_page_links_duplicate_uses_first() {
        let sidebar = Sidebar::new(
            "docs",
            vec![
                NavNode::doc("x"),
                NavNode::doc("y"),
                NavNode::doc("z"),
                NavNode::doc("y"),
            ],
        );

        let links = sidebar.page_links("y").unwrap();

        assert_eq!(links.previous.unwrap().id, "x");
        assert_eq!(links.next.unwrap().id, "z");
    }

    #[test]
    fn test_page_links_serialization() {
        let sidebar = nested();
        let links = sidebar.page_links("a/1").unwrap();

        let json = serde_json::to_value(links).unwrap();

        assert!(json.get("previous").is_none());
        assert_eq!(json["next"]["id"], "a/b/1");
    }

    #[test]
    fn test_breadcrumbs() {
        let sidebar = nested();

        assert_eq!(sidebar.breadcrumbs("a/b/2"), Some(vec!["A", "B"]));
        assert_eq!(sidebar.breadcrumbs("a/2"), Some(vec!["A"]));
        assert_eq!(sidebar.breadcrumbs("last"), Some(Vec::new()));
        assert_eq!(sidebar.breadcrumbs("missing"), None);
    }

    #[test]
    fn test_sidebar_for_doc_prefers_first_declared() {
        let mut collection = SidebarCollection::new();
        collection
            .insert("guides", vec![NavNode::doc("shared"), NavNode::doc("g")])
            .unwrap();
        collection
            .insert("api", vec![NavNode::doc("shared"), NavNode::doc("a")])
            .unwrap();

        assert_eq!(collection.sidebar_for_doc("shared").unwrap().name(), "guides");
        assert_eq!(collection.sidebar_for_doc("a").unwrap().name(), "api");
        assert!(collection.sidebar_for_doc("missing").is_none());
    }
}
