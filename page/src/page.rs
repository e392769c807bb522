use std::collections::HashMap;

use festoon_types::ElementId;

use crate::element::{Element, ElementSpec};
use crate::selector::{Selector, SelectorError};

/// An arena of elements forming one document tree.
///
/// Queries traverse the tree depth-first from the root, so results always
/// come back in document order regardless of allocation history.
#[derive(Debug, Clone)]
pub struct Page {
    nodes: HashMap<ElementId, Element>,
    root: ElementId,
    next_id: u64,
}

impl Page {
    /// Creates an empty page holding only the `body` root.
    #[must_use]
    pub fn new() -> Self {
        let root = ElementId::new(0);
        let mut nodes = HashMap::new();
        nodes.insert(root, Element::new(root, "body".to_string()));
        Self {
            nodes,
            root,
            next_id: 1,
        }
    }

    #[must_use]
    pub fn root(&self) -> ElementId {
        self.root
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Materializes `spec` and its children, depth-first, under `parent`.
    /// Returns the id of the new subtree's top element.
    ///
    /// Panics if `parent` is not part of this page.
    pub fn append(&mut self, parent: ElementId, spec: ElementSpec) -> ElementId {
        let ElementSpec {
            tag,
            dom_id,
            classes,
            attributes,
            text,
            children,
        } = spec;

        let id = ElementId::new(self.next_id);
        self.next_id += 1;

        let Some(parent_node) = self.nodes.get_mut(&parent) else {
            panic!("append target {parent} is not in the page");
        };
        parent_node.children.push(id);

        let mut element = Element::new(id, tag);
        element.dom_id = dom_id;
        element.classes = classes;
        element.attributes = attributes.into_iter().collect();
        element.text = text;
        element.parent = Some(parent);
        self.nodes.insert(id, element);

        for child in children {
            self.append(id, child);
        }
        id
    }

    /// Removes every child subtree of `parent`; the parent itself stays.
    /// Unknown ids are ignored.
    pub fn clear_children(&mut self, parent: ElementId) {
        let children = match self.nodes.get_mut(&parent) {
            Some(node) => std::mem::take(&mut node.children),
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
    }

    fn remove_subtree(&mut self, id: ElementId) {
        if let Some(node) = self.nodes.remove(&id) {
            for child in node.children {
                self.remove_subtree(child);
            }
        }
    }

    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(&id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.nodes.get_mut(&id)
    }

    #[must_use]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(&id).and_then(|node| node.parent)
    }

    #[must_use]
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.nodes.get(&id).map_or(&[], |node| &node.children)
    }

    /// Every element in document order, the root included.
    #[must_use]
    pub fn document_order(&self) -> Vec<ElementId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.walk(self.root, &mut out);
        out
    }

    /// Every element strictly below `id`, in document order.
    #[must_use]
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        for &child in self.children(id) {
            self.walk(child, &mut out);
        }
        out
    }

    fn walk(&self, id: ElementId, out: &mut Vec<ElementId>) {
        out.push(id);
        for &child in self.children(id) {
            self.walk(child, out);
        }
    }

    /// All elements matching `selector`, in document order.
    #[must_use]
    pub fn select_all(&self, selector: &Selector) -> Vec<ElementId> {
        self.document_order()
            .into_iter()
            .filter(|&id| selector.matches(self, id))
            .collect()
    }

    /// The first element matching `selector` in document order.
    #[must_use]
    pub fn select_first(&self, selector: &Selector) -> Option<ElementId> {
        self.document_order()
            .into_iter()
            .find(|&id| selector.matches(self, id))
    }

    /// Parses `source` and returns all matches in document order.
    pub fn query(&self, source: &str) -> Result<Vec<ElementId>, SelectorError> {
        Ok(self.select_all(&Selector::parse(source)?))
    }

    /// Parses `source` and returns the first match in document order.
    pub fn query_first(&self, source: &str) -> Result<Option<ElementId>, SelectorError> {
        Ok(self.select_first(&Selector::parse(source)?))
    }

    /// All elements carrying `class`, in document order.
    #[must_use]
    pub fn with_class(&self, class: &str) -> Vec<ElementId> {
        self.document_order()
            .into_iter()
            .filter(|id| {
                self.nodes
                    .get(id)
                    .is_some_and(|node| node.has_class(class))
            })
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
