//! Create-project action: validate input, one POST, map or diagnose the
//! response. This is the only handler that assembles error detail from the
//! provider's body.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::client::request::{ApiRequest, WistiaClient};
use crate::error::{Result, WistiaError};
use crate::fields::{CreateDescriptor, Display, FieldDef, FieldType};
use crate::models::models::{Bundle, Project};

const WRAP_PREFIX: &str = "Project creation failed:";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProjectInput {
    pub name: Option<String>,
    #[serde(rename = "adminEmail")]
    pub admin_email: Option<String>,
    pub public: Option<bool>,
}

pub async fn perform(
    client: &WistiaClient,
    bundle: &Bundle<CreateProjectInput>,
) -> Result<Project> {
    // Validation happens before any network call.
    let body = build_request_body(&bundle.input_data)?;
    debug!(name = %body["name"], "creating Wistia project");

    let request = ApiRequest::post("/projects").json_body(body);
    let response = client
        .request(request, bundle.credentials())
        .await
        .map_err(rewrap)?;

    if !response.is_success() {
        let detail = assemble_error_message(response.status.as_u16(), &response.body);
        return Err(WistiaError::Remote(format!("{WRAP_PREFIX} {detail}")));
    }

    let project: Project = response.json().map_err(rewrap)?;
    info!(id = project.id, hashed_id = %project.hashed_id, "project created");
    Ok(project)
}

/// Trimmed request body. `adminEmail` is omitted when blank and `public`
/// when absent, so the provider's own defaults apply.
fn build_request_body(input: &CreateProjectInput) -> Result<Value> {
    let name = input.name.as_deref().unwrap_or("").trim();
    if name.is_empty() {
        return Err(WistiaError::Validation(
            "Project name is required and cannot be empty".to_string(),
        ));
    }

    let mut body = Map::new();
    body.insert("name".to_string(), Value::String(name.to_string()));

    if let Some(email) = input.admin_email.as_deref() {
        let email = email.trim();
        if !email.is_empty() {
            body.insert("adminEmail".to_string(), Value::String(email.to_string()));
        }
    }

    if let Some(public) = input.public {
        body.insert("public".to_string(), Value::Bool(public));
    }

    Ok(Value::Object(body))
}

/// Human-readable diagnosis of a non-2xx create response. Every one of the
/// provider's known error fields that is present gets appended, in a fixed
/// order; a body that fails to parse is appended raw.
fn assemble_error_message(status: u16, body: &str) -> String {
    let mut message = format!("Project creation failed with status {status}");

    let parsed = if body.trim().is_empty() {
        Ok(Value::Object(Map::new()))
    } else {
        serde_json::from_str::<Value>(body)
    };

    match parsed {
        Ok(Value::Object(fields)) => {
            if let Some(code) = text_field(&fields, "code") {
                message.push_str(&format!(" ({code})"));
            }
            if let Some(detail) = text_field(&fields, "detail") {
                message.push_str(&format!(": {detail}"));
            }
            if let Some(error) = text_field(&fields, "error") {
                message.push_str(&format!(": {error}"));
            }
            if let Some(text) = text_field(&fields, "message") {
                message.push_str(&format!(": {text}"));
            }
        }
        // Parsed but not an object: nothing useful to extract.
        Ok(_) => {}
        Err(_) => {
            message.push_str(&format!(". Raw response: {body}"));
        }
    }

    message
}

fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Wrap failures with the action's prefix exactly once. Typed authentication
/// and validation failures keep their category so the host can still tell
/// them apart.
fn rewrap(err: WistiaError) -> WistiaError {
    match err {
        err @ WistiaError::Authentication { .. } => err,
        err @ WistiaError::Validation(_) => err,
        WistiaError::Remote(message) if message.contains(WRAP_PREFIX) => {
            WistiaError::Remote(message)
        }
        other => WistiaError::Remote(format!("{WRAP_PREFIX} {other}")),
    }
}

pub static CREATE: Lazy<CreateDescriptor> = Lazy::new(|| CreateDescriptor {
    key: "upload",
    noun: "Project",
    display: Display {
        label: "Create New Project",
        description: "Create a new project in Wistia for organizing your videos.",
    },
    input_fields: &[
        FieldDef {
            key: "name",
            label: "Project Name",
            field_type: FieldType::String,
            required: true,
            help_text: Some("The name of the project you want to create."),
            dynamic: None,
        },
        FieldDef {
            key: "adminEmail",
            label: "Admin Email",
            field_type: FieldType::String,
            required: false,
            help_text: Some("The email address of the person you want to set as the owner of this project. Defaults to the Wistia Account Owner."),
            dynamic: None,
        },
        FieldDef {
            key: "public",
            label: "Public Project",
            field_type: FieldType::Boolean,
            required: false,
            help_text: Some("Set to true to make this project public, false to keep it private. Defaults to false."),
            dynamic: None,
        },
    ],
    output_fields: &[
        FieldDef { key: "id", label: "Project ID", field_type: FieldType::Integer, required: false, help_text: None, dynamic: None },
        FieldDef { key: "hashedId", label: "Hashed ID", field_type: FieldType::String, required: false, help_text: None, dynamic: None },
        FieldDef { key: "name", label: "Project Name", field_type: FieldType::String, required: false, help_text: None, dynamic: None },
        FieldDef { key: "description", label: "Description", field_type: FieldType::String, required: false, help_text: None, dynamic: None },
        FieldDef { key: "mediaCount", label: "Media Count", field_type: FieldType::Integer, required: false, help_text: None, dynamic: None },
        FieldDef { key: "created", label: "Created Date", field_type: FieldType::Datetime, required: false, help_text: None, dynamic: None },
        FieldDef { key: "updated", label: "Updated Date", field_type: FieldType::Datetime, required: false, help_text: None, dynamic: None },
        FieldDef { key: "public", label: "Public Project", field_type: FieldType::Boolean, required: false, help_text: None, dynamic: None },
        FieldDef { key: "anonymousCanUpload", label: "Anonymous Can Upload", field_type: FieldType::Boolean, required: false, help_text: None, dynamic: None },
        FieldDef { key: "anonymousCanDownload", label: "Anonymous Can Download", field_type: FieldType::Boolean, required: false, help_text: None, dynamic: None },
        FieldDef { key: "adminEmail", label: "Admin Email", field_type: FieldType::String, required: false, help_text: None, dynamic: None },
    ],
    sample: json!({
        "id": 123456,
        "hashedId": "abc123xyz789",
        "name": "My New Project",
        "description": "",
        "mediaCount": 0,
        "created": "2024-01-15T14:20:00Z",
        "updated": "2024-01-15T14:20:00Z",
        "public": false,
        "anonymousCanUpload": false,
        "anonymousCanDownload": false,
        "adminEmail": "admin@example.com"
    }),
});
