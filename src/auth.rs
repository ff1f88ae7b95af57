//! Custom API-key authentication: the descriptor the host renders at
//! connect time and the probe that verifies a candidate key.

use serde_json::Value;
use tracing::info;

use crate::client::request::{ApiRequest, WistiaClient};
use crate::error::{Result, WistiaError};
use crate::fields::{AuthenticationDescriptor, FieldDef, FieldType};
use crate::models::models::Bundle;

pub static AUTHENTICATION: AuthenticationDescriptor = AuthenticationDescriptor {
    auth_type: "custom",
    fields: &[FieldDef {
        key: "apiKey",
        label: "Go to the [API Key details](https://tenant.wistia.com/account/api) screen from your\nWebsite Dashboard to find your API Key. Use subdomain instead of tenant.",
        field_type: FieldType::String,
        required: true,
        help_text: None,
        dynamic: None,
    }],
    // The host substitutes fields of the probe's response body.
    connection_label: "{{json.username}}",
};

/// Credential check run once when an account is connected. The provider has
/// no whoami endpoint, so the probe lists a single media item instead: any
/// account can call it and one record keeps it cheap. The body is returned
/// verbatim so the host can derive a connection label from it.
pub async fn test_auth(client: &WistiaClient, bundle: &Bundle<()>) -> Result<Value> {
    let request = ApiRequest::get("/medias.json").param("per_page", 1);
    let response = client.request(request, bundle.credentials()).await?;

    if response.status.as_u16() != 200 {
        return Err(WistiaError::Remote(
            "Authentication failed. Please check your API token.".to_string(),
        ));
    }

    info!("Wistia credentials verified");
    response.json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_declares_one_required_api_key_field() {
        assert_eq!(AUTHENTICATION.auth_type, "custom");
        assert_eq!(AUTHENTICATION.fields.len(), 1);
        let field = &AUTHENTICATION.fields[0];
        assert_eq!(field.key, "apiKey");
        assert!(field.required);
        assert!(field.label.contains("API Key"));
        assert!(field.label.contains("https://"));
        assert!(field.label.contains("[API Key details]"));
        assert!(field.label.contains("wistia.com/account/api"));
        assert!(field.label.contains("subdomain instead of tenant"));
    }
}
