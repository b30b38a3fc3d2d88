//! Terraform Cloud URL construction.

use crate::config::{Config, Selector};

/// Base URL of the Terraform Cloud web UI, up to the org segment.
pub const TFC_BASE_URL: &str = "https://app.terraform.io/app/";

/// Path of the private module registry, relative to an org.
pub const REGISTRY_URI: &str = "/registry/private/modules";

/// Build the path fragment below the org segment.
///
/// Selector precedence is workspace, then search, then project; a config
/// with no selector yields an empty fragment (the org landing page). Values
/// are substituted verbatim -- no percent-encoding is applied, so a search
/// term with spaces or `&` produces a technically malformed URL. Known
/// limitation.
pub fn workspaces_uri(config: &Config) -> String {
    match config.selector() {
        Some(Selector::Workspace(workspace)) => format!("/workspaces/{workspace}"),
        Some(Selector::Search(term)) => format!("/workspaces?search={term}"),
        Some(Selector::Project(project)) => format!("/projects/{project}/workspaces"),
        None => String::new(),
    }
}

/// Compose the final app URL from an org and a path fragment.
pub fn compose_url(org: &str, uri: &str) -> String {
    format!("{TFC_BASE_URL}{org}{uri}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspaces_uri_templates() {
        let cases = [
            (
                Config {
                    workspace: Some("ws".to_string()),
                    ..Config::default()
                },
                "/workspaces/ws",
            ),
            (
                Config {
                    search: Some("foo".to_string()),
                    ..Config::default()
                },
                "/workspaces?search=foo",
            ),
            (
                Config {
                    project: Some("bar".to_string()),
                    ..Config::default()
                },
                "/projects/bar/workspaces",
            ),
            (Config::default(), ""),
        ];

        for (config, want) in cases {
            assert_eq!(workspaces_uri(&config), want, "config: {:?}", config);
        }
    }

    #[test]
    fn test_workspaces_uri_precedence() {
        let config = Config {
            workspace: Some("ws".to_string()),
            search: Some("foo".to_string()),
            project: Some("bar".to_string()),
            org: None,
        };
        assert_eq!(workspaces_uri(&config), "/workspaces/ws");

        let config = Config {
            workspace: None,
            search: Some("foo".to_string()),
            project: Some("bar".to_string()),
            org: None,
        };
        assert_eq!(workspaces_uri(&config), "/workspaces?search=foo");
    }

    #[test]
    fn test_compose_url() {
        assert_eq!(
            compose_url("acme", "/workspaces/demo"),
            "https://app.terraform.io/app/acme/workspaces/demo"
        );
        assert_eq!(
            compose_url("acme", REGISTRY_URI),
            "https://app.terraform.io/app/acme/registry/private/modules"
        );
        assert_eq!(compose_url("acme", ""), "https://app.terraform.io/app/acme");
    }
}
