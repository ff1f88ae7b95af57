//! Project listing. Serves two callers: the host's polling loop (full
//! records) and dynamic dropdowns on other steps (`{id, label}` options).
//! The caller picks via `ListMode` instead of relying on convention.

use once_cell::sync::Lazy;
use serde_json::json;
use tracing::error;

use crate::client::request::{ApiRequest, WistiaClient};
use crate::error::{Result, WistiaError};
use crate::fields::{Display, FieldDef, FieldType, TriggerDescriptor};
use crate::models::models::{Bundle, DropdownOption, Project};

const PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    Polling,
    Dropdown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectList {
    Records(Vec<Project>),
    Options(Vec<DropdownOption>),
}

pub async fn perform(
    client: &WistiaClient,
    bundle: &Bundle<()>,
    mode: ListMode,
) -> Result<ProjectList> {
    let projects = fetch_projects(client, bundle).await?;
    Ok(match mode {
        ListMode::Polling => ProjectList::Records(projects),
        ListMode::Dropdown => ProjectList::Options(dropdown_options(&projects)),
    })
}

/// One page of up to 100 projects. Non-2xx is a hard failure; the caller
/// does not retry.
pub async fn fetch_projects(client: &WistiaClient, bundle: &Bundle<()>) -> Result<Vec<Project>> {
    let request = ApiRequest::get("/projects").param("per_page", PER_PAGE);
    let response = client.request(request, bundle.credentials()).await?;

    if !response.is_success() {
        error!(status = response.status.as_u16(), "project listing failed");
        return Err(WistiaError::Remote(
            "Failed to fetch projects from Wistia".to_string(),
        ));
    }

    response.json()
}

/// Dropdown UIs must never render a blank option, so a nameless project
/// falls back to "Project <id>".
pub fn dropdown_options(projects: &[Project]) -> Vec<DropdownOption> {
    projects
        .iter()
        .map(|project| DropdownOption {
            id: project.id,
            label: if project.name.is_empty() {
                format!("Project {}", project.id)
            } else {
                project.name.clone()
            },
        })
        .collect()
}

pub static TRIGGER: Lazy<TriggerDescriptor> = Lazy::new(|| TriggerDescriptor {
    key: "projects",
    noun: "Projects",
    display: Display {
        label: "List Projects",
        description: "Triggers when we need a list of Wistia projects (used internally for dropdowns).",
    },
    input_fields: &[],
    output_fields: &[
        FieldDef {
            key: "id",
            label: "Project ID",
            field_type: FieldType::Number,
            required: false,
            help_text: None,
            dynamic: None,
        },
        FieldDef {
            key: "name",
            label: "Project Name",
            field_type: FieldType::String,
            required: false,
            help_text: None,
            dynamic: None,
        },
    ],
    sample: json!({
        "id": 10092556,
        "public": true,
        "description": "Get started by adding a video to your folder - you can always delete it later!",
        "name": "Malforime's first folder",
        "mediaCount": 2,
        "created": "2025-09-05T11:13:03+00:00",
        "updated": "2025-09-05T13:22:15+00:00",
        "hashedId": "so2dkxq9i6",
        "anonymousCanUpload": false,
        "anonymousCanDownload": false,
        "publicId": "so2dkxq9i6"
    }),
});

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u64, name: &str) -> Project {
        serde_json::from_value(json!({"id": id, "hashedId": "h", "name": name})).unwrap()
    }

    #[test]
    fn dropdown_label_uses_project_name() {
        let options = dropdown_options(&[project(7, "Marketing")]);
        assert_eq!(
            options,
            vec![DropdownOption {
                id: 7,
                label: "Marketing".to_string()
            }]
        );
    }

    #[test]
    fn dropdown_label_falls_back_for_blank_name() {
        let options = dropdown_options(&[project(10092556, "")]);
        assert_eq!(options[0].label, "Project 10092556");
    }

    #[test]
    fn sample_deserializes_into_project() {
        let sample: Project = serde_json::from_value(TRIGGER.sample.clone()).unwrap();
        assert_eq!(sample.id, 10092556);
        assert_eq!(sample.media_count, 2);
        assert!(sample.public);
    }
}
