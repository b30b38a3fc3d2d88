use serde::{Deserialize, Serialize};

/// Values parsed from a `.tfcopen` marker file.
///
/// All keys are optional and unknown keys are ignored. `workspace`,
/// `search`, and `project` select what the generated URL points at; `org`
/// names the Terraform Cloud organization.
///
/// Example YAML:
/// ```yaml
/// workspace: my-workspace
/// org: my-org
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub workspace: Option<String>,

    #[serde(default)]
    pub search: Option<String>,

    #[serde(default)]
    pub project: Option<String>,

    #[serde(default)]
    pub org: Option<String>,
}

/// The selector key a config resolves to, in fixed precedence order:
/// workspace wins over search, search wins over project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    Workspace(&'a str),
    Search(&'a str),
    Project(&'a str),
}

impl Config {
    /// A config synthesized from a git repository directory name. The name
    /// becomes the workspace search term; the org is left for the
    /// environment to supply.
    pub fn from_repo_name(name: impl Into<String>) -> Self {
        Self {
            search: Some(name.into()),
            ..Self::default()
        }
    }

    /// The selector this config resolves to, if any. Empty string values
    /// count as unset.
    pub fn selector(&self) -> Option<Selector<'_>> {
        if let Some(workspace) = set_value(&self.workspace) {
            Some(Selector::Workspace(workspace))
        } else if let Some(search) = set_value(&self.search) {
            Some(Selector::Search(search))
        } else if let Some(project) = set_value(&self.project) {
            Some(Selector::Project(project))
        } else {
            None
        }
    }

    /// True when at least one selector key holds a non-empty value.
    pub fn has_selector(&self) -> bool {
        self.selector().is_some()
    }
}

fn set_value(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
