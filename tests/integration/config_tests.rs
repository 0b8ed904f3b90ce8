//! Configuration integration tests
//!
//! File loading, validation failures and config flowing into the console.

#[cfg(test)]
mod tests {
    use crate::common::{AdminServer, pages};
    use org_admin_rs::config::{ApiConfig, LogFormat, UiConfig};
    use org_admin_rs::{AdminConsole, AdminError, Config, HttpAdminClient, RecordingHost, UiEvent};
    use std::io::Write;
    use std::sync::Arc;
    use std::time::Duration;
    use tempfile::NamedTempFile;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    // ==================== Loading ====================

    /// Test loading a complete YAML file from disk
    #[tokio::test]
    async fn test_from_file() {
        let file = write_config(
            r#"
api:
  base_url: https://admin.example.com
  user_agent: console-tests
ui:
  redirect_delay_ms: 250
logging:
  level: org_admin_rs=debug
  format: json
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.api().base_url, "https://admin.example.com");
        assert_eq!(config.api().user_agent, "console-tests");
        assert_eq!(config.api().timeout(), None);
        assert_eq!(config.ui().redirect_delay(), Duration::from_millis(250));
        assert_eq!(config.ui().notification_dismiss_ms, 5000);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    /// Test that a missing file surfaces as an IO error
    #[tokio::test]
    async fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path().join("absent.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::Io(_)));
    }

    /// Test that broken YAML surfaces as a YAML error
    #[tokio::test]
    async fn test_from_file_broken_yaml() {
        let file = write_config("api:\n  base_url: [\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, AdminError::Yaml(_)));
    }

    // ==================== Validation ====================

    /// Test that each invalid section is rejected with its section named
    #[tokio::test]
    async fn test_invalid_sections_rejected() {
        let cases = [
            ("api:\n  base_url: not a url\n", "API config error"),
            ("api:\n  timeout_secs: 0\n", "API config error"),
            ("ui:\n  notification_dismiss_ms: 0\n", "UI config error"),
            ("logging:\n  level: org_admin_rs=loud\n", "Logging config error"),
        ];

        for (yaml, section) in cases {
            let file = write_config(yaml);
            let err = Config::from_file(file.path()).await.unwrap_err();
            assert!(err.to_string().contains(section), "{yaml:?}: {err}");
        }
    }

    /// Test that an unknown log format in the environment is rejected
    #[test]
    fn test_lookup_rejects_unknown_log_format() {
        let err = Config::from_lookup(|key| {
            (key == "ORG_ADMIN_LOG_FORMAT").then(|| "xml".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("Unknown log format"));
    }

    // ==================== Console ====================

    /// Test that the configured redirect delay is used after a create
    #[tokio::test]
    async fn test_redirect_delay_reaches_console() {
        let admin = AdminServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/teams/create"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&admin.server)
            .await;

        let config = Config::from_lookup(|key| match key {
            "ORG_ADMIN_BASE_URL" => Some(admin.server.uri()),
            "ORG_ADMIN_REDIRECT_DELAY_MS" => Some("40".to_string()),
            _ => None,
        })
        .unwrap();

        let api = Arc::new(HttpAdminClient::new(config.api()).unwrap());
        let mut console = AdminConsole::new(
            config.ui().clone(),
            api,
            RecordingHost::new(),
            pages::forms_page(),
        );
        let form = console.document_mut().form_mut("teamForm").unwrap();
        form.set_value("name", "Platform");
        form.set_value("departmentId", "3");
        console.dispatch(UiEvent::submit("teamForm")).await.unwrap();

        let navigation = console.host().last_navigation().unwrap();
        assert_eq!(navigation.delay, Some(Duration::from_millis(40)));
    }

    /// Test that a client can be built from a default configuration
    #[test]
    fn test_defaults_build_a_client() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(HttpAdminClient::new(&config).is_ok());
        assert_eq!(UiConfig::default().mobile_breakpoint_px, 768);
    }
}
