//! The document: an element arena rooted at `body`

use super::element::{Element, NodeId};
use crate::ui::forms::Form;
use std::collections::BTreeMap;

/// In-memory document the console renders into
///
/// Elements live in an arena and are never freed; detached elements are
/// unreachable from `body` until re-attached. Long-lived widgets keep their
/// node and [`Document::replace`] its contents instead of creating new ones.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    body: NodeId,
    location_path: String,
    viewport_width: u32,
    forms: BTreeMap<String, Form>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Document {
    /// Empty document for a page at `location_path`
    pub fn new(location_path: &str) -> Self {
        Self {
            nodes: vec![Element::new("body")],
            body: NodeId(0),
            location_path: location_path.to_string(),
            viewport_width: 1280,
            forms: BTreeMap::new(),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn location_path(&self) -> &str {
        &self.location_path
    }

    pub fn set_location_path(&mut self, path: &str) {
        self.location_path = path.to_string();
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    /// Add a detached element
    pub fn create(&mut self, element: Element) -> NodeId {
        self.nodes.push(element);
        NodeId(self.nodes.len() - 1)
    }

    /// Whether `node` was allocated by this document
    pub fn contains(&self, node: NodeId) -> bool {
        node.0 < self.nodes.len()
    }

    /// Number of allocated elements, attached or not
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Swap the contents of `node` for `element`, keeping its tree links
    pub fn replace(&mut self, node: NodeId, mut element: Element) {
        let slot = &mut self.nodes[node.0];
        element.parent = slot.parent;
        element.children = std::mem::take(&mut slot.children);
        *slot = element;
    }

    /// Add an element as the last child of `parent`
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let node = self.create(element);
        self.append_child(parent, node);
        node
    }

    /// Move `child` to the end of `parent`'s children
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Move `child` to the front of `parent`'s children
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(0, child);
    }

    /// Remove `node` from its parent
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    pub fn element(&self, node: NodeId) -> &Element {
        &self.nodes[node.0]
    }

    pub fn element_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.nodes[node.0]
    }

    /// Reachable from `body`
    pub fn is_connected(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == self.body {
                return true;
            }
            current = self.nodes[n.0].parent;
        }
        false
    }

    /// First connected element with this id
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.connected()
            .find(|n| self.nodes[n.0].id.as_deref() == Some(id))
    }

    /// Connected elements carrying `class`, in document order
    pub fn query_class(&self, class: &str) -> Vec<NodeId> {
        self.connected()
            .filter(|n| self.nodes[n.0].has_class(class))
            .collect()
    }

    /// Connected elements carrying attribute `name`
    pub fn query_attr(&self, name: &str) -> Vec<NodeId> {
        self.connected()
            .filter(|n| self.nodes[n.0].attr(name).is_some())
            .collect()
    }

    /// Nearest inclusive ancestor carrying `class`
    pub fn closest(&self, node: NodeId, class: &str) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(n) = current {
            if self.nodes[n.0].has_class(class) {
                return Some(n);
            }
            current = self.nodes[n.0].parent;
        }
        None
    }

    /// First strict descendant of `node` carrying `class`
    pub fn find_descendant(&self, node: NodeId, class: &str) -> Option<NodeId> {
        self.walk(node)
            .skip(1)
            .find(|n| self.nodes[n.0].has_class(class))
    }

    fn connected(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.walk(self.body)
    }

    /// Pre-order walk from `root`, inclusive
    fn walk(&self, root: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = vec![root];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
            Some(node)
        })
    }

    pub fn add_form(&mut self, form: Form) {
        self.forms.insert(form.id.clone(), form);
    }

    pub fn form(&self, id: &str) -> Option<&Form> {
        self.forms.get(id)
    }

    pub fn form_mut(&mut self, id: &str) -> Option<&mut Form> {
        self.forms.get_mut(id)
    }

    /// Take a form out for an async handler; put it back with [`Document::add_form`]
    pub fn take_form(&mut self, id: &str) -> Option<Form> {
        self.forms.remove(id)
    }
}
