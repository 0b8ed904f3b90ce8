//! Console integration tests
//!
//! Startup, filtering and the rendered displays against a mock server.

#[cfg(test)]
mod tests {
    use crate::common::{AdminServer, pages};
    use org_admin_rs::ui::render;
    use org_admin_rs::{AdminConsole, ConsoleEvent, LoadState, RecordingHost, Severity, UiEvent};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    fn labels(console: &AdminConsole<RecordingHost>, id: &str) -> Vec<String> {
        let doc = console.document();
        let node = doc.get_element_by_id(id).unwrap();
        doc.element(node)
            .options
            .iter()
            .map(|o| o.label.clone())
            .collect()
    }

    fn html(console: &AdminConsole<RecordingHost>, id: &str) -> String {
        let doc = console.document();
        doc.element(doc.get_element_by_id(id).unwrap())
            .inner_html
            .clone()
    }

    // ==================== Startup ====================

    /// Test that a broken collection leaves everything empty and notifies
    #[tokio::test]
    async fn test_load_failure_shows_error_notification() {
        let admin = AdminServer::start().await;
        admin.serve("/api/departments", serde_json::json!([])).await;
        Mock::given(method("GET"))
            .and(path("/api/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&admin.server)
            .await;

        let console = admin.started_console(pages::filter_page()).await;

        assert_eq!(console.cache().state(), LoadState::LoadFailed);
        assert!(console.cache().departments().is_empty());
        let current = console.notifications().current().unwrap();
        assert_eq!(current.severity, Severity::Error);
        assert_eq!(current.message, "Error loading data");
    }

    // ==================== Filtering ====================

    /// Test that department 3 plus "alpha" composes instead of overriding
    #[tokio::test]
    async fn test_department_and_search_compose() {
        let admin = AdminServer::with_sample_org().await;
        let mut console = admin.started_console(pages::filter_page()).await;

        console
            .dispatch(UiEvent::change("departmentFilter", "3"))
            .await
            .unwrap();
        console
            .dispatch(UiEvent::input("searchInput", "alpha"))
            .await
            .unwrap();

        let teams: Vec<i64> = console.views().teams.iter().map(|t| t.id).collect();
        assert_eq!(teams, vec![10]);
        assert_eq!(
            labels(&console, "teamSelect"),
            vec!["Select Team", "Alpha Squad (Engineering)"]
        );

        console.dispatch(UiEvent::change("departmentFilter", "")).await.unwrap();
        let teams: Vec<i64> = console.views().teams.iter().map(|t| t.id).collect();
        assert_eq!(teams, vec![10, 12, 13]);
    }

    /// Test that recomputing with unchanged state yields identical views
    #[tokio::test]
    async fn test_filtering_is_idempotent() {
        let admin = AdminServer::with_sample_org().await;
        let mut console = admin.started_console(pages::filter_page()).await;

        for term in ["", "a", "ALPHA", "@example.com", "zzz"] {
            console.dispatch(UiEvent::input("searchInput", term)).await.unwrap();
            let first = labels(&console, "userSelect");
            console.dispatch(UiEvent::input("searchInput", term)).await.unwrap();
            assert_eq!(labels(&console, "userSelect"), first, "term {term:?}");
        }
    }

    /// Test that clearing the search restores every collection
    #[tokio::test]
    async fn test_clearing_search_restores_everything() {
        let admin = AdminServer::with_sample_org().await;
        let mut console = admin.started_console(pages::filter_page()).await;

        console.dispatch(UiEvent::input("searchInput", "hopper")).await.unwrap();
        assert_eq!(console.views().users.len(), 1);
        assert!(console.views().teams.is_empty());

        console.dispatch(UiEvent::input("searchInput", "   ")).await.unwrap();
        let views = console.views();
        assert_eq!(views.departments.len(), 3);
        assert_eq!(views.teams.len(), 5);
        assert_eq!(views.roles.len(), 3);
        assert_eq!(views.users.len(), 4);
    }

    /// Test that unparseable selections are treated as cleared
    #[tokio::test]
    async fn test_non_numeric_selection_means_none() {
        let admin = AdminServer::with_sample_org().await;
        let mut console = admin.started_console(pages::filter_page()).await;

        console.dispatch(UiEvent::change("teamFilter", "10")).await.unwrap();
        assert_eq!(console.views().users.len(), 1);

        console.dispatch(UiEvent::change("teamFilter", "ten")).await.unwrap();
        assert_eq!(console.filter().team, None);
        assert_eq!(console.views().users.len(), 4);
    }

    // ==================== Displays ====================

    /// Test the permission badges for selected, bare and unknown roles
    #[tokio::test]
    async fn test_role_permissions_display() {
        let admin = AdminServer::with_sample_org().await;
        let mut console = admin.started_console(pages::filter_page()).await;

        console.dispatch(UiEvent::change("roleFilter", "2")).await.unwrap();
        assert_eq!(html(&console, "rolePermissions").matches("badge").count(), 1);

        console.dispatch(UiEvent::change("roleFilter", "3")).await.unwrap();
        assert_eq!(html(&console, "rolePermissions"), render::NO_PERMISSIONS);
    }

    /// Test that absent and empty role lists each render one placeholder
    #[tokio::test]
    async fn test_users_without_roles_render_placeholder() {
        let admin = AdminServer::with_sample_org().await;
        let mut console = admin.started_console(pages::filter_page()).await;

        console.dispatch(UiEvent::change("teamFilter", "12")).await.unwrap();
        let linus = html(&console, "userAssignments");
        assert!(linus.contains("Linus Torvalds"));
        assert_eq!(linus.matches("No roles assigned").count(), 1);

        console.dispatch(UiEvent::change("teamFilter", "")).await.unwrap();
        let all = html(&console, "userAssignments");
        assert_eq!(all.matches("user-assignment-card").count(), 4);
        assert_eq!(all.matches("No roles assigned").count(), 2);
    }

    /// Test the assignment view across department and role selections
    #[tokio::test]
    async fn test_assignment_view_selection() {
        let admin = AdminServer::with_sample_org().await;
        let mut console = admin.started_console(pages::filter_page()).await;

        console
            .dispatch(UiEvent::change("departmentFilter", "3"))
            .await
            .unwrap();
        console.dispatch(UiEvent::change("roleFilter", "1")).await.unwrap();

        let cards = html(&console, "userAssignments");
        assert_eq!(cards.matches("user-assignment-card").count(), 1);
        assert!(cards.contains("Admin (Engineering) [Alpha Squad]"));

        console.dispatch(UiEvent::change("departmentFilter", "1")).await.unwrap();
        assert_eq!(html(&console, "userAssignments"), render::NO_ASSIGNMENTS);
    }

    /// Test that selection changes are emitted with their raw values
    #[tokio::test]
    async fn test_console_events_carry_raw_values() {
        let admin = AdminServer::with_sample_org().await;
        let mut console = admin.started_console(pages::filter_page()).await;

        console.dispatch(UiEvent::change("departmentFilter", "3")).await.unwrap();
        console.dispatch(UiEvent::change("teamFilter", "")).await.unwrap();
        console.dispatch(UiEvent::change("roleFilter", "x")).await.unwrap();

        let events = console.take_events();
        assert_eq!(
            events,
            vec![
                ConsoleEvent::DepartmentChanged {
                    department_id: "3".to_string()
                },
                ConsoleEvent::TeamChanged {
                    team_id: String::new()
                },
                ConsoleEvent::RoleChanged {
                    role_id: "x".to_string()
                },
            ]
        );
        assert!(console.take_events().is_empty());
    }

    // ==================== Team Loader ====================

    /// Test that a failed team reload stays silent while a failed create notifies
    #[tokio::test]
    async fn test_team_loader_failure_is_log_only() {
        let admin = AdminServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/teams"))
            .and(query_param("departmentId", "3"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&admin.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/admin/teams/create"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&admin.server)
            .await;

        let mut console = admin.console(pages::user_create_page());
        console.dispatch(UiEvent::change("department", "3")).await.unwrap();

        assert_eq!(labels(&console, "team"), vec![render::TEAM_PLACEHOLDER]);
        assert!(console.notifications().current().is_none());

        let form = console.document_mut().form_mut("teamForm").unwrap();
        form.set_value("name", "Platform");
        form.set_value("departmentId", "3");
        console.dispatch(UiEvent::submit("teamForm")).await.unwrap();

        let current = console.notifications().current().unwrap();
        assert_eq!(current.severity, Severity::Error);
        assert_eq!(current.message, "Failed to create team");
    }
}
