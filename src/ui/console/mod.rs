//! The admin console
//!
//! One [`AdminConsole`] owns everything the page scripts used to keep in
//! globals: the document, the entity cache, filter state, notifications and
//! the action registry. Events are dispatched one at a time; each handler
//! runs to completion, awaiting any network call, before the next one.


use crate::config::UiConfig;
use crate::core::cache::{EntityCache, FilterState, FilteredViews, parse_selection};
use crate::core::client::AdminApi;
use crate::ui::actions::ActionRegistry;
use crate::ui::dom::{Document, NodeId};
use crate::ui::events::{ConsoleEvent, UiEvent};
use crate::ui::forms::{FormKind, SubmitOutcome, submit_form};
use crate::ui::host::Host;
use crate::ui::notifications::{NotificationCenter, Severity};
use crate::ui::panel::{self, PanelController};
use crate::ui::{render, sidebar, team_loader};
use crate::utils::error::Result;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

pub const LOAD_ERROR_MESSAGE: &str = "Error loading data";

const DEPARTMENT_SELECTORS: [&str; 2] = ["departmentSelect", "departmentFilter"];
const TEAM_SELECTORS: [&str; 2] = ["teamSelect", "teamFilter"];
const ROLE_SELECTORS: [&str; 2] = ["roleSelect", "roleFilter"];
const SEARCH_INPUT: &str = "searchInput";

const TEAM_SELECT: &str = "teamSelect";
const USER_SELECT: &str = "userSelect";
const ROLE_PERMISSIONS: &str = "rolePermissions";
const USER_ASSIGNMENTS: &str = "userAssignments";

const FILTER_TOGGLE_CLASS: &str = "filter-toggle";
const SHOW_FILTERS: &str = r#"<i class="fas fa-filter me-2"></i>Show Filters"#;
const HIDE_FILTERS: &str = r#"<i class="fas fa-filter me-2"></i>Hide Filters"#;

/// Headless admin console bound to one page
pub struct AdminConsole<H: Host> {
    config: UiConfig,
    api: Arc<dyn AdminApi>,
    host: H,
    document: Document,
    panel: PanelController,
    cache: EntityCache,
    filter: FilterState,
    notifications: NotificationCenter,
    actions: ActionRegistry,
    events: VecDeque<ConsoleEvent>,
}

impl<H: Host> AdminConsole<H> {
    /// Bind to `document`: create the panel overlay, highlight the sidebar
    /// and collapse it on narrow viewports
    pub fn new(config: UiConfig, api: Arc<dyn AdminApi>, host: H, mut document: Document) -> Self {
        let panel = PanelController::attach(&mut document);
        sidebar::auto_collapse(&mut document, config.mobile_breakpoint_px);
        sidebar::highlight(&mut document);

        Self {
            notifications: NotificationCenter::new(config.notification_dismiss()),
            config,
            api,
            host,
            document,
            panel,
            cache: EntityCache::new(),
            filter: FilterState::new(),
            actions: ActionRegistry::new(),
            events: VecDeque::new(),
        }
    }

    /// Load the entity collections
    ///
    /// A failed load leaves the cache empty and shows an error notification;
    /// the console stays usable.
    pub async fn start(&mut self) {
        info!("Starting admin console at {}", self.document.location_path());
        if self.cache.load(self.api.as_ref()).await.is_err() {
            self.notify(Severity::Error, LOAD_ERROR_MESSAGE);
        }
    }

    /// Handle one event; returns whether anything was bound to it
    pub async fn dispatch(&mut self, event: UiEvent) -> Result<bool> {
        debug!("Dispatching {:?}", event);
        let handled = match event {
            UiEvent::Change { target, value } => self.on_change(&target, value).await,
            UiEvent::Input { target, value } => self.on_input(&target, value),
            UiEvent::Click { target } => self.on_click(target),
            UiEvent::KeyDown { key } => self.panel.handle_key(&mut self.document, &key),
            UiEvent::Submit { form } => self.on_submit(&form).await,
            UiEvent::Action { name, args } => {
                let outcome = self
                    .actions
                    .run(&name, self.api.as_ref(), &mut self.host, args)
                    .await?;
                debug!("Action {} {}", name, outcome);
                true
            }
            UiEvent::CollapseShown { target } => {
                panel::rotate_chevrons(&mut self.document, &target, true);
                true
            }
            UiEvent::CollapseHidden { target } => {
                panel::rotate_chevrons(&mut self.document, &target, false);
                true
            }
        };
        Ok(handled)
    }

    /// Drop an expired notification
    pub fn tick(&mut self, now: Instant) {
        if self.notifications.dismiss_expired(now) {
            self.notifications.render(&mut self.document);
        }
    }

    pub fn notify(&mut self, severity: Severity, message: impl Into<String>) {
        self.notifications.show(severity, message, Instant::now());
        self.notifications.render(&mut self.document);
    }

    /// Recompute the filtered views and redraw every derived display
    pub fn refresh(&mut self) {
        let views = self.cache.views(&self.filter);
        let doc = &mut self.document;

        if let Some(node) = doc.get_element_by_id(TEAM_SELECT) {
            doc.element_mut(node)
                .set_options(render::team_options(&views.teams));
        }
        if let Some(node) = doc.get_element_by_id(USER_SELECT) {
            doc.element_mut(node)
                .set_options(render::user_options(&views.users));
        }
        if let Some(node) = doc.get_element_by_id(ROLE_PERMISSIONS) {
            doc.element_mut(node).inner_html =
                render::permission_badges(self.cache.selected_role(&self.filter));
        }
        if let Some(node) = doc.get_element_by_id(USER_ASSIGNMENTS) {
            doc.element_mut(node).inner_html =
                render::assignment_cards(&self.cache.assignments(&self.filter));
        }

        debug!(
            "Recomputed views: {} teams, {} users",
            views.teams.len(),
            views.users.len()
        );
    }

    async fn on_change(&mut self, target: &str, value: String) -> bool {
        if let Some(node) = self.document.get_element_by_id(target) {
            self.document.element_mut(node).value = value.clone();
        }

        let event = if DEPARTMENT_SELECTORS.contains(&target) {
            self.filter.department = parse_selection(&value);
            ConsoleEvent::DepartmentChanged {
                department_id: value,
            }
        } else if TEAM_SELECTORS.contains(&target) {
            self.filter.team = parse_selection(&value);
            ConsoleEvent::TeamChanged { team_id: value }
        } else if ROLE_SELECTORS.contains(&target) {
            self.filter.role = parse_selection(&value);
            ConsoleEvent::RoleChanged { role_id: value }
        } else if target == team_loader::DEPARTMENT_ID && team_loader::is_bound(&self.document) {
            team_loader::reload_teams(self.api.as_ref(), &mut self.document).await;
            return true;
        } else {
            return false;
        };

        self.refresh();
        debug!("Emitting {}", event);
        self.events.push_back(event);
        true
    }

    fn on_input(&mut self, target: &str, value: String) -> bool {
        if target != SEARCH_INPUT {
            return false;
        }
        if let Some(node) = self.document.get_element_by_id(target) {
            self.document.element_mut(node).value = value.clone();
        }
        self.filter.set_search(&value);
        self.refresh();
        true
    }

    fn on_click(&mut self, target: NodeId) -> bool {
        if self.panel.handle_click(&mut self.document, target) {
            return true;
        }

        let Some(toggle) = self.document.closest(target, FILTER_TOGGLE_CLASS) else {
            return false;
        };
        let filter = self
            .document
            .element(toggle)
            .attr("data-filter")
            .map(str::to_string);
        match filter {
            Some(filter) => {
                self.toggle_filter(&filter);
                true
            }
            None => false,
        }
    }

    /// Show or hide `#{filter}Filters` and relabel its toggles
    fn toggle_filter(&mut self, filter: &str) {
        let doc = &mut self.document;
        let Some(container) = doc.get_element_by_id(&format!("{filter}Filters")) else {
            return;
        };

        let visible = doc.element(container).style("display") != Some("none");
        doc.element_mut(container)
            .set_style("display", if visible { "none" } else { "block" });

        let label = if visible { SHOW_FILTERS } else { HIDE_FILTERS };
        for toggle in doc.query_attr("data-filter") {
            if doc.element(toggle).attr("data-filter") == Some(filter) {
                doc.element_mut(toggle).inner_html = label.to_string();
            }
        }
    }

    async fn on_submit(&mut self, form_id: &str) -> bool {
        let Some(kind) = FormKind::from_form_id(form_id) else {
            return false;
        };
        let Some(mut form) = self.document.take_form(form_id) else {
            return false;
        };

        info!("Submitting {}", form_id);
        let outcome = submit_form(self.api.as_ref(), kind, &mut form).await;
        self.document.add_form(form);

        match outcome {
            SubmitOutcome::Invalid(e) => {
                self.notify(Severity::Error, e.validation_messages().join(", "))
            }
            SubmitOutcome::Created(kind) => {
                self.notify(Severity::Success, kind.success_message());
                self.host
                    .navigate_after(&kind.redirect_path(), self.config.redirect_delay());
            }
            SubmitOutcome::Rejected { message, .. } => self.notify(Severity::Error, message),
            SubmitOutcome::Failed { kind, .. } => self.notify(Severity::Error, kind.error_message()),
            SubmitOutcome::Native => self.host.submit_native(form_id),
        }
        true
    }

    /// Console events emitted since the last call, oldest first
    pub fn take_events(&mut self) -> Vec<ConsoleEvent> {
        self.events.drain(..).collect()
    }

    pub fn views(&self) -> FilteredViews<'_> {
        self.cache.views(&self.filter)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn cache(&self) -> &EntityCache {
        &self.cache
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn actions_mut(&mut self) -> &mut ActionRegistry {
        &mut self.actions
    }
}
