use std::collections::BTreeSet;
use std::fmt::Write as _;

use serde::Serialize;
use thiserror::Error;

use super::sanitize::sanitize;
use crate::ontology::{Class, Iri, Ontology};

/// A rendered node of the class hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub id: String,
    pub label: String,
    pub children: Vec<TreeNode>,
}

/// Errors raised while rendering the hierarchy.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HierarchyError {
    /// The subclass relation contains a cycle through the named class.
    #[error("subclass cycle through `{class}`")]
    CyclicHierarchy { class: Iri },
}

/// Returns the classes with no named parent other than the top class.
///
/// This is deliberately broader than "direct children of the top class":
/// many ontologies declare no explicit top-class parent at all.
#[must_use]
pub fn top_level_classes(ontology: &Ontology) -> Vec<&Class> {
    ontology
        .classes()
        .values()
        .filter(|class| class.named_parents().all(Iri::is_owl_thing))
        .collect()
}

/// Renders the full class hierarchy, one [`TreeNode`] per root.
///
/// The top class never appears in the output, except when the ontology has
/// no explicit root at all; the top class then surfaces as the sole fallback
/// root so the tree is not empty. A cycle in the subclass relation is
/// reported as [`HierarchyError::CyclicHierarchy`] instead of recursing
/// without bound.
pub fn class_tree(ontology: &Ontology) -> Result<Vec<TreeNode>, HierarchyError> {
    let roots = top_level_classes(ontology);
    if roots.is_empty() {
        let thing = Iri::owl_thing();
        let mut path = BTreeSet::new();
        path.insert(thing.clone());
        let children = render_children(ontology, &thing, &mut path)?;
        return Ok(vec![TreeNode {
            id: sanitize(thing.as_str()),
            label: thing.local_name().to_string(),
            children,
        }]);
    }

    roots
        .into_iter()
        .map(|root| render_class(ontology, root, &mut BTreeSet::new()))
        .collect()
}

fn render_class(
    ontology: &Ontology,
    class: &Class,
    path: &mut BTreeSet<Iri>,
) -> Result<TreeNode, HierarchyError> {
    if !path.insert(class.id().clone()) {
        return Err(HierarchyError::CyclicHierarchy {
            class: class.id().clone(),
        });
    }
    let children = render_children(ontology, class.id(), path)?;
    path.remove(class.id());

    Ok(TreeNode {
        id: sanitize(class.id().as_str()),
        label: class.display_label().to_string(),
        children,
    })
}

fn render_children(
    ontology: &Ontology,
    parent: &Iri,
    path: &mut BTreeSet<Iri>,
) -> Result<Vec<TreeNode>, HierarchyError> {
    ontology
        .subclasses_of(parent)
        .filter(|sub| !sub.id().is_owl_thing())
        .map(|sub| render_class(ontology, sub, path))
        .collect()
}

/// Renders the hierarchy as the nested-list markup the explorer page embeds.
///
/// Every `<li>` carries an id derived from the sanitized class IRI; branch
/// nodes wrap their label in a caret affordance and nest their children.
#[must_use]
pub fn render_html(roots: &[TreeNode]) -> String {
    let mut html = String::from("<ul>");
    for node in roots {
        write_node(&mut html, node);
    }
    html.push_str("</ul>");
    html
}

fn write_node(out: &mut String, node: &TreeNode) {
    let label = escape(&node.label);
    if node.children.is_empty() {
        let _ = write!(out, "<li id='node_{}'>{label}</li>", node.id);
        return;
    }
    let _ = write!(
        out,
        "<li id='node_{}'><span class='caret'>{label}</span><ul class='nested'>",
        node.id
    );
    for child in &node.children {
        write_node(out, child);
    }
    out.push_str("</ul></li>");
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{class_tree, render_html, top_level_classes, HierarchyError};
    use crate::ontology::{Class, Iri, Ontology, OWL_THING};

    fn iri(text: &str) -> Iri {
        Iri::new(text).expect("valid iri")
    }

    fn animals() -> Ontology {
        let mut ontology = Ontology::new(iri("https://example.org/onto"));
        let animal = iri("https://example.org/Animal");
        ontology
            .add_class(Class::new(animal.clone()))
            .expect("animal");
        let mut dog = Class::new(iri("https://example.org/Dog"));
        dog.add_parent(animal.clone());
        ontology.add_class(dog).expect("dog");
        let mut cat = Class::new(iri("https://example.org/Cat"));
        cat.add_parent(animal);
        ontology.add_class(cat).expect("cat");
        ontology
    }

    #[test]
    fn roots_allow_only_the_top_class_as_parent() {
        let mut ontology = animals();
        let mut free = Class::new(iri("https://example.org/Freestanding"));
        free.add_parent(Iri::owl_thing());
        ontology.add_class(free).expect("freestanding");

        let roots: Vec<_> = top_level_classes(&ontology)
            .into_iter()
            .map(|class| class.id().local_name().to_string())
            .collect();
        assert_eq!(roots, vec!["Animal", "Freestanding"]);
    }

    #[test]
    fn renders_children_in_iteration_order() {
        let tree = class_tree(&animals()).expect("tree");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].label, "Animal");
        let children: Vec<_> = tree[0]
            .children
            .iter()
            .map(|child| child.label.clone())
            .collect();
        assert_eq!(children, vec!["Cat", "Dog"]);
    }

    #[test]
    fn top_class_never_appears_in_a_populated_tree() {
        let tree = class_tree(&animals()).expect("tree");
        fn assert_no_thing(node: &super::TreeNode) {
            assert_ne!(node.label, "Thing");
            assert!(!node.id.contains("owl_Thing"));
            for child in &node.children {
                assert_no_thing(child);
            }
        }
        for root in &tree {
            assert_no_thing(root);
        }
    }

    #[test]
    fn empty_root_set_falls_back_to_the_top_class() {
        let mut ontology = Ontology::new(iri("https://example.org/onto"));
        let mut a = Class::new(iri("https://example.org/A"));
        a.add_parent(iri("https://example.org/B"));
        ontology.add_class(a).expect("a");
        let mut b = Class::new(iri("https://example.org/B"));
        b.add_parent(iri("https://example.org/A"));
        ontology.add_class(b).expect("b");

        let tree = class_tree(&ontology).expect("fallback tree");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].label, "Thing");
        assert_eq!(tree[0].id, super::sanitize(OWL_THING));
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn subclass_cycles_are_reported() {
        let mut ontology = Ontology::new(iri("https://example.org/onto"));
        let root = iri("https://example.org/Root");
        ontology.add_class(Class::new(root.clone())).expect("root");
        let mut a = Class::new(iri("https://example.org/A"));
        a.add_parent(root);
        a.add_parent(iri("https://example.org/B"));
        ontology.add_class(a).expect("a");
        let mut b = Class::new(iri("https://example.org/B"));
        b.add_parent(iri("https://example.org/A"));
        ontology.add_class(b).expect("b");

        let err = class_tree(&ontology).expect_err("cycle");
        assert!(matches!(err, HierarchyError::CyclicHierarchy { .. }));
    }

    #[test]
    fn markup_nests_children_with_caret_affordances() {
        let tree = class_tree(&animals()).expect("tree");
        let html = render_html(&tree);
        assert!(html.starts_with("<ul>"));
        assert!(html.contains("<span class='caret'>Animal</span>"));
        assert!(html.contains("<ul class='nested'>"));
        assert!(html.contains("<li id='node_https_example_org_Dog'>Dog</li>"));
    }

    #[test]
    fn markup_escapes_labels() {
        let node = super::TreeNode {
            id: "x".to_string(),
            label: "<b>".to_string(),
            children: vec![],
        };
        let html = render_html(&[node]);
        assert!(html.contains("&lt;b&gt;"));
    }
}
