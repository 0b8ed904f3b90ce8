//! Sidebar navigation highlighting

use crate::ui::dom::{Document, NodeId};
use tracing::debug;

pub const SIDEBAR_ID: &str = "sidebar";

/// Mark `.sidebar .nav-link` entries whose `href` equals the current path
///
/// Only exact matches count, so `/admin/teams/new` does not light up
/// `/admin/teams`. The nearest `.collapse` ancestor of a match is expanded.
/// Returns the highlighted links.
pub fn highlight(doc: &mut Document) -> Vec<NodeId> {
    let path = doc.location_path().to_string();
    let links: Vec<NodeId> = doc
        .query_class("nav-link")
        .into_iter()
        .filter(|link| doc.closest(*link, "sidebar").is_some())
        .filter(|link| doc.element(*link).attr("href") == Some(path.as_str()))
        .collect();

    for link in &links {
        doc.element_mut(*link).add_class("active");
        if let Some(group) = doc.closest(*link, "collapse") {
            doc.element_mut(group).add_class("show");
        }
    }

    debug!("Highlighted {} sidebar links for {}", links.len(), path);
    links
}

/// Start with `#sidebar` collapsed on narrow viewports
pub fn auto_collapse(doc: &mut Document, breakpoint_px: u32) -> bool {
    if doc.viewport_width() >= breakpoint_px {
        return false;
    }
    match doc.get_element_by_id(SIDEBAR_ID) {
        Some(sidebar) => {
            doc.element_mut(sidebar).remove_class("show");
            true
        }
        None => false,
    }
}
