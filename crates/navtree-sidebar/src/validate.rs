//! Structural validation of sidebar trees.
//!
//! The type system already rules out malformed node shapes. What remains are
//! value-level problems: blank identifiers and labels, empty categories, and
//! documents listed twice in one sidebar (which makes previous/next links
//! ambiguous).
//!
//! Document identifiers are not checked against any document index; the site
//! generator owns that.

use std::collections::HashMap;
use std::fmt;

use crate::collection::{Sidebar, SidebarCollection};
use crate::error::SidebarError;
use crate::node::NavNode;
use crate::path::NodePath;

/// Diagnostic severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Suspicious but renderable.
    Warning,
    /// The tree cannot be handed to the site generator.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// What is wrong with a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Doc id is empty or whitespace.
    EmptyDocId,
    /// Category label or explicit doc label is empty or whitespace.
    EmptyLabel,
    /// Category has no items.
    EmptyCategory {
        /// Category label.
        label: String,
    },
    /// Sidebar has no items.
    EmptySidebar,
    /// Doc id already appeared earlier in the same sidebar.
    DuplicateDoc {
        /// Repeated doc id.
        id: String,
        /// Location of the first occurrence.
        first: NodePath,
    },
}

impl DiagnosticKind {
    /// Severity of this kind of problem.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::EmptyDocId | Self::EmptyLabel => Severity::Error,
            Self::EmptyCategory { .. } | Self::EmptySidebar | Self::DuplicateDoc { .. } => {
                Severity::Warning
            }
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDocId => f.write_str("doc id is empty"),
            Self::EmptyLabel => f.write_str("label is empty"),
            Self::EmptyCategory { label } => write!(f, "category \"{label}\" has no items"),
            Self::EmptySidebar => f.write_str("sidebar has no items"),
            Self::DuplicateDoc { id, first } => {
                write!(f, "doc \"{id}\" already listed at {first}")
            }
        }
    }
}

/// Single validation finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Offending node.
    pub path: NodePath,
    /// Finding.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Severity of the finding.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity(), self.path, self.kind)
    }
}

/// All findings for a collection, in tree order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    /// All diagnostics.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Error)
    }

    /// Warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Warning)
    }

    /// Whether any error was found.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Whether nothing at all was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Turn the report into a pass/fail result.
    ///
    /// Fails on any error; with `strict`, also fails on warnings.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::Invalid`] carrying the whole report.
    pub fn into_result(self, strict: bool) -> Result<Self, SidebarError> {
        if self.has_errors() || (strict && !self.is_clean()) {
            return Err(SidebarError::Invalid(self));
        }
        Ok(self)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {diagnostic}")?;
        }
        Ok(())
    }
}

/// Validate every sidebar in a collection.
#[must_use]
pub fn validate(collection: &SidebarCollection) -> ValidationReport {
    let mut report = ValidationReport::default();
    for sidebar in collection {
        validate_sidebar(sidebar, &mut report.diagnostics);
    }
    report
}

fn validate_sidebar(sidebar: &Sidebar, diagnostics: &mut Vec<Diagnostic>) {
    let root = NodePath::sidebar(sidebar.name());
    if sidebar.items().is_empty() {
        diagnostics.push(Diagnostic {
            path: root,
            kind: DiagnosticKind::EmptySidebar,
        });
        return;
    }

    let mut walker = Walker {
        first_seen: HashMap::new(),
        diagnostics,
    };
    walker.walk(sidebar.items(), &root);
}

/// Depth-first traversal state for one sidebar.
struct Walker<'a> {
    first_seen: HashMap<&'a str, NodePath>,
    diagnostics: &'a mut Vec<Diagnostic>,
}

impl<'a> Walker<'a> {
    fn walk(&mut self, items: &'a [NavNode], parent: &NodePath) {
        for (index, node) in items.iter().enumerate() {
            let path = parent.child(index);
            match node {
                NavNode::Doc(doc) => {
                    if doc.id.trim().is_empty() {
                        self.report(&path, DiagnosticKind::EmptyDocId);
                    } else if let Some(first) = self.first_seen.get(doc.id.as_str()) {
                        let kind = DiagnosticKind::DuplicateDoc {
                            id: doc.id.clone(),
                            first: first.clone(),
                        };
                        self.report(&path, kind);
                    } else {
                        self.first_seen.insert(doc.id.as_str(), path.clone());
                    }
                    if doc.label.as_deref().is_some_and(|l| l.trim().is_empty()) {
                        self.report(&path, DiagnosticKind::EmptyLabel);
                    }
                }
                NavNode::Category(category) => {
                    if category.label.trim().is_empty() {
                        self.report(&path, DiagnosticKind::EmptyLabel);
                    }
                    if category.items.is_empty() {
                        self.report(
                            &path,
                            DiagnosticKind::EmptyCategory {
                                label: category.label.clone(),
                            },
                        );
                    }
                    self.walk(&category.items, &path);
                }
            }
        }
    }

    fn report(&mut self, path: &NodePath, kind: DiagnosticKind) {
        self.diagnostics.push(Diagnostic {
            path: path.clone(),
            kind,
        });
    }
}
