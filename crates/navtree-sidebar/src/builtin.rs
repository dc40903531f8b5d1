//! Built-in sidebar declaration.
//!
//! [`default_sidebars`] is the access point the export step reads when no
//! sidebar source file is configured. The value is built on first access and
//! shared read-only afterwards.

use std::sync::LazyLock;

use crate::collection::{Sidebar, SidebarCollection};
use crate::node::NavNode;

/// Name of the built-in sidebar.
pub const TUTORIAL_SIDEBAR: &str = "tutorialSidebar";

static DEFAULT_SIDEBARS: LazyLock<SidebarCollection> = LazyLock::new(tutorial_sidebars);

/// Build the documentation sidebars.
#[must_use]
pub fn tutorial_sidebars() -> SidebarCollection {
    SidebarCollection::from(Sidebar::new(
        TUTORIAL_SIDEBAR,
        vec![
            NavNode::labeled_doc("intro", "Introduction"),
            NavNode::category("Tutorials", vec![NavNode::doc("tutorials/mcp")]),
            NavNode::category("API Reference", vec![NavNode::doc("api/overview")]),
            NavNode::category("Examples", vec![NavNode::doc("examples/basic-usage")]),
            NavNode::category(
                "Best Practices",
                vec![NavNode::doc("best-practices/model-selection")],
            ),
            NavNode::category("Deployment", vec![NavNode::doc("deployment/setup")]),
        ],
    ))
}

/// Process-wide built-in sidebars.
#[must_use]
pub fn default_sidebars() -> &'static SidebarCollection {
    &DEFAULT_SIDEBARS
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_single_tutorial_sidebar() {
        let collection = tutorial_sidebars();

        assert_eq!(collection.names(), vec![TUTORIAL_SIDEBAR]);
    }

    #[test]
    fn test_category_labels_in_order() {
        let collection = tutorial_sidebars();
        let labels: Vec<_> = collection
            .get(TUTORIAL_SIDEBAR)
            .unwrap()
            .items()
            .iter()
            .filter_map(|node| match node {
                NavNode::Category(category) => Some(category.label.as_str()),
                NavNode::Doc(_) => None,
            })
            .collect();

        assert_eq!(
            labels,
            vec![
                "Tutorials",
                "API Reference",
                "Examples",
                "Best Practices",
                "Deployment"
            ]
        );
    }

    #[test]
    fn test_intro_is_labeled() {
        let collection = tutorial_sidebars();

        assert_eq!(
            collection.get(TUTORIAL_SIDEBAR).unwrap().items()[0],
            NavNode::labeled_doc("intro", "Introduction")
        );
    }

    #[test]
    fn test_default_sidebars_is_shared() {
        let first = default_sidebars();
        let second = default_sidebars();

        assert!(std::ptr::eq(first, second));
        assert_eq!(*first, tutorial_sidebars());
    }

    #[test]
    fn test_canonical_json_shape() {
        let json = serde_json::to_value(tutorial_sidebars()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "tutorialSidebar": [
                    {"type": "doc", "id": "intro", "label": "Introduction"},
                    {"type": "category", "label": "Tutorials", "items": [
                        {"type": "doc", "id": "tutorials/mcp"}
                    ]},
                    {"type": "category", "label": "API Reference", "items": [
                        {"type": "doc", "id": "api/overview"}
                    ]},
                    {"type": "category", "label": "Examples", "items": [
                        {"type": "doc", "id": "examples/basic-usage"}
                    ]},
                    {"type": "category", "label": "Best Practices", "items": [
                        {"type": "doc", "id": "best-practices/model-selection"}
                    ]},
                    {"type": "category", "label": "Deployment", "items": [
                        {"type": "doc", "id": "deployment/setup"}
                    ]}
                ]
            })
        );
    }
}
