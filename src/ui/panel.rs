//! Right side panel and its overlay

use crate::ui::dom::{Document, Element, NodeId};
use tracing::debug;

pub const PANEL_ID: &str = "rightPanel";
pub const TOGGLE_ID: &str = "rightPanelToggle";
pub const CLOSE_ID: &str = "closePanel";
pub const OVERLAY_CLASS: &str = "right-panel-overlay";
const SHOW: &str = "show";

/// Open/close state of the panel, shown and hidden together with its overlay
#[derive(Debug, Clone)]
pub struct PanelController {
    panel: Option<NodeId>,
    toggle: Option<NodeId>,
    close: Option<NodeId>,
    overlay: NodeId,
}

impl PanelController {
    /// Bind to the panel elements and append the overlay to `body`
    pub fn attach(doc: &mut Document) -> Self {
        let body = doc.body();
        let overlay = doc.append(body, Element::new("div").with_class(OVERLAY_CLASS));

        Self {
            panel: doc.get_element_by_id(PANEL_ID),
            toggle: doc.get_element_by_id(TOGGLE_ID),
            close: doc.get_element_by_id(CLOSE_ID),
            overlay,
        }
    }

    pub fn overlay(&self) -> NodeId {
        self.overlay
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        self.panel
            .is_some_and(|panel| doc.element(panel).has_class(SHOW))
    }

    pub fn toggle(&self, doc: &mut Document) {
        let Some(panel) = self.panel else {
            return;
        };

        let open = doc.element_mut(panel).toggle_class(SHOW);
        doc.element_mut(self.overlay).toggle_class(SHOW);
        let body = doc.body();
        doc.element_mut(body)
            .set_style("overflow", if open { "hidden" } else { "" });
        debug!("Right panel {}", if open { "opened" } else { "closed" });
    }

    pub fn close(&self, doc: &mut Document) {
        if let Some(panel) = self.panel {
            doc.element_mut(panel).remove_class(SHOW);
        }
        doc.element_mut(self.overlay).remove_class(SHOW);
        let body = doc.body();
        doc.element_mut(body).set_style("overflow", "");
    }

    /// Handle a click; returns whether the target belonged to the panel
    pub fn handle_click(&self, doc: &mut Document, target: NodeId) -> bool {
        if Some(target) == self.toggle {
            self.toggle(doc);
            true
        } else if Some(target) == self.close || target == self.overlay {
            self.close(doc);
            true
        } else {
            false
        }
    }

    /// Escape closes the panel while it is shown
    pub fn handle_key(&self, doc: &mut Document, key: &str) -> bool {
        if key == "Escape" && self.is_open(doc) {
            self.close(doc);
            true
        } else {
            false
        }
    }
}

/// Rotate the chevron of every section header targeting `#target_id`
pub fn rotate_chevrons(doc: &mut Document, target_id: &str, shown: bool) {
    let selector = format!("#{target_id}");
    let transform = if shown { "rotate(180deg)" } else { "rotate(0deg)" };

    for header in doc.query_class("section-header") {
        let element = doc.element(header);
        if element.attr("data-bs-toggle") != Some("collapse")
            || element.attr("data-bs-target") != Some(selector.as_str())
        {
            continue;
        }
        if let Some(chevron) = doc.find_descendant(header, "fa-chevron-down") {
            doc.element_mut(chevron).set_style("transform", transform);
        }
    }
}
