//! Create-form integration tests
//!
//! Validation blocking, request bodies and the notifications that follow.

#[cfg(test)]
mod tests {
    use crate::common::{AdminServer, pages};
    use org_admin_rs::config::{ApiConfig, UiConfig};
    use org_admin_rs::{AdminConsole, HttpAdminClient, RecordingHost, Severity, UiEvent};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{body_json, body_string, header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    // ==================== Validation ====================

    /// Test that a required-field failure never reaches the server
    #[tokio::test]
    async fn test_validation_failure_makes_no_request() {
        let admin = AdminServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/teams/create"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&admin.server)
            .await;

        let mut console = admin.console(pages::forms_page());
        console
            .document_mut()
            .form_mut("teamForm")
            .unwrap()
            .set_value("name", "Core Infra");
        console.dispatch(UiEvent::submit("teamForm")).await.unwrap();

        let current = console.notifications().current().unwrap();
        assert_eq!(current.severity, Severity::Error);
        assert_eq!(current.message, "departmentId is required");
        let form = console.document().form("teamForm").unwrap();
        assert!(form.field("departmentId").unwrap().invalid);
        assert!(!form.field("name").unwrap().invalid);
    }

    /// Test that a malformed email blocks the user form
    #[tokio::test]
    async fn test_user_form_rejects_bad_email() {
        let admin = AdminServer::start().await;
        let mut console = admin.console(pages::forms_page());
        let form = console.document_mut().form_mut("userForm").unwrap();
        form.set_value("firstName", "Ada");
        form.set_value("lastName", "Lovelace");
        form.set_value("username", "ada");
        form.set_value("email", "foo@bar");

        console.dispatch(UiEvent::submit("userForm")).await.unwrap();
        assert_eq!(
            console.notifications().current().unwrap().message,
            "Invalid email format"
        );
        assert!(console.host().native_submissions.is_empty());

        console
            .document_mut()
            .form_mut("userForm")
            .unwrap()
            .set_value("email", "foo@bar.com");
        console.dispatch(UiEvent::submit("userForm")).await.unwrap();
        assert_eq!(console.host().native_submissions, vec!["userForm"]);
        let form = console.document().form("userForm").unwrap();
        assert!(form.invalid_fields().is_empty());
        let button = form.submit.as_ref().unwrap();
        assert!(!button.disabled);
        assert_eq!(button.inner_html, "Create User");
    }

    // ==================== Team Form ====================

    /// Test the URL-encoded team request and the delayed redirect
    #[tokio::test]
    async fn test_team_form_success() {
        let admin = AdminServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/teams/create"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("name=Core+Infra&departmentId=3&description=SRE"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&admin.server)
            .await;

        let mut console = admin.console(pages::forms_page());
        let form = console.document_mut().form_mut("teamForm").unwrap();
        form.set_value("name", "Core Infra");
        form.set_value("departmentId", "3");
        form.set_value("description", "SRE");
        console.dispatch(UiEvent::submit("teamForm")).await.unwrap();

        let current = console.notifications().current().unwrap();
        assert_eq!(current.severity, Severity::Success);
        assert_eq!(current.message, "Team created successfully!");

        let navigation = console.host().last_navigation().unwrap();
        assert_eq!(navigation.url, "/admin/teams");
        assert_eq!(navigation.delay, Some(Duration::from_millis(1500)));

        let form = console.document().form("teamForm").unwrap();
        assert_eq!(form.field("name").unwrap().value, "");
        let button = form.submit.as_ref().unwrap();
        assert!(!button.disabled);
        assert_eq!(button.inner_html, "Create Team");
    }

    /// Test that the server's rejection text is shown verbatim
    #[tokio::test]
    async fn test_team_form_rejection_text() {
        let admin = AdminServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/teams/create"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Team name already exists"))
            .mount(&admin.server)
            .await;

        let mut console = admin.console(pages::forms_page());
        let form = console.document_mut().form_mut("teamForm").unwrap();
        form.set_value("name", "Platform");
        form.set_value("departmentId", "3");
        console.dispatch(UiEvent::submit("teamForm")).await.unwrap();

        assert_eq!(
            console.notifications().current().unwrap().message,
            "Team name already exists"
        );
        assert!(console.host().navigations.is_empty());
        let form = console.document().form("teamForm").unwrap();
        assert_eq!(form.field("name").unwrap().value, "Platform");
    }

    /// Test that an unreachable server yields the generic error message
    #[tokio::test]
    async fn test_team_form_transport_failure() {
        let config = ApiConfig::default().with_base_url("http://127.0.0.1:9");
        let api = Arc::new(HttpAdminClient::new(&config).unwrap());
        let mut console = AdminConsole::new(
            UiConfig::default(),
            api,
            RecordingHost::new(),
            pages::forms_page(),
        );

        let form = console.document_mut().form_mut("teamForm").unwrap();
        form.set_value("name", "Platform");
        form.set_value("departmentId", "3");
        console.dispatch(UiEvent::submit("teamForm")).await.unwrap();

        assert_eq!(
            console.notifications().current().unwrap().message,
            "Error creating team"
        );
        let button = console
            .document()
            .form("teamForm")
            .unwrap()
            .submit
            .clone()
            .unwrap();
        assert!(!button.disabled);
    }

    // ==================== Role Form ====================

    /// Test that checked permissions are sent as an ordered array
    #[tokio::test]
    async fn test_role_form_sends_permission_array() {
        let admin = AdminServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/roles/create"))
            .and(body_json(json!({
                "name": "Editor",
                "description": "Edits things",
                "permissions": ["read", "write"],
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&admin.server)
            .await;

        let mut console = admin.console(pages::forms_page());
        let form = console.document_mut().form_mut("roleForm").unwrap();
        form.set_value("name", "Editor");
        form.set_value("description", "Edits things");
        form.set_checked("permissions", "read", true);
        form.set_checked("permissions", "write", true);
        console.dispatch(UiEvent::submit("roleForm")).await.unwrap();

        assert_eq!(
            console.notifications().current().unwrap().message,
            "Role created successfully!"
        );
        assert_eq!(console.host().last_navigation().unwrap().url, "/admin/roles");
        let form = console.document().form("roleForm").unwrap();
        assert!(form.checked_values("permissions").is_empty());
    }

    /// Test the fallback message when the server rejects without a body
    #[tokio::test]
    async fn test_role_form_empty_rejection() {
        let admin = AdminServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/roles/create"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&admin.server)
            .await;

        let mut console = admin.console(pages::forms_page());
        console
            .document_mut()
            .form_mut("roleForm")
            .unwrap()
            .set_value("name", "Editor");
        console.dispatch(UiEvent::submit("roleForm")).await.unwrap();

        assert_eq!(
            console.notifications().current().unwrap().message,
            "Failed to create role"
        );
    }
}
