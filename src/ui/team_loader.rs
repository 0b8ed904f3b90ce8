//! Dependent team dropdown of the create/edit user pages

use crate::core::cache::parse_selection;
use crate::core::client::AdminApi;
use crate::ui::dom::{Document, SelectOption};
use crate::ui::render::TEAM_PLACEHOLDER;
use tracing::{debug, error};

pub const DEPARTMENT_ID: &str = "department";
pub const TEAM_ID: &str = "team";

/// Both selectors are present on the page
pub fn is_bound(doc: &Document) -> bool {
    doc.get_element_by_id(DEPARTMENT_ID).is_some() && doc.get_element_by_id(TEAM_ID).is_some()
}

/// Repopulate `#team` for the department in `#department`
///
/// Failures are logged only; the dropdown stays at its placeholder.
pub async fn reload_teams(api: &dyn AdminApi, doc: &mut Document) {
    let (Some(department), Some(team)) = (
        doc.get_element_by_id(DEPARTMENT_ID),
        doc.get_element_by_id(TEAM_ID),
    ) else {
        return;
    };

    doc.element_mut(team)
        .set_options(vec![SelectOption::placeholder(TEAM_PLACEHOLDER)]);

    let Some(department_id) = parse_selection(&doc.element(department).value) else {
        return;
    };

    match api.teams_by_department(department_id).await {
        Ok(teams) => {
            debug!("Loaded {} teams for department {}", teams.len(), department_id);
            let select = doc.element_mut(team);
            select
                .options
                .extend(teams.iter().map(|t| SelectOption::new(t.id.to_string(), &t.name)));
        }
        Err(e) => {
            error!("Error loading teams: {}", e);
        }
    }
}
