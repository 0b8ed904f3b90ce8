//! Elements of the document model

use std::collections::{BTreeMap, BTreeSet};

/// Index of an element inside its [`Document`](super::Document)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(super) usize);

/// One `<option>` of a select element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Empty-valued first option of a dropdown
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::new("", label)
    }
}

/// A node of the document model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    /// Current value of form controls
    pub value: String,
    /// Options of a select element
    pub options: Vec<SelectOption>,
    /// Rendered markup of container elements
    pub inner_html: String,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Toggle a class and return whether it is now present
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class.to_string());
            true
        }
    }

    /// Space-separated class list
    pub fn class_name(&self) -> String {
        self.classes.iter().cloned().collect::<Vec<_>>().join(" ")
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    /// Set an inline style; an empty value clears it
    pub fn set_style(&mut self, property: &str, value: &str) {
        if value.is_empty() {
            self.styles.remove(property);
        } else {
            self.styles.insert(property.to_string(), value.to_string());
        }
    }

    /// Replace all options of a select element
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}
