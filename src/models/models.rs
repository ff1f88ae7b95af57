use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// API key supplied once per connected account by the host runtime.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

// The key must never leak into diagnostic output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Per-invocation context handed to every handler: stored credentials plus
/// whatever input the user mapped into the step. Always passed explicitly,
/// never ambient.
#[derive(Debug, Clone)]
pub struct Bundle<I> {
    pub auth_data: Option<Credentials>,
    pub input_data: I,
}

impl<I> Bundle<I> {
    pub fn new(auth_data: Option<Credentials>, input_data: I) -> Self {
        Self {
            auth_data,
            input_data,
        }
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.auth_data.as_ref()
    }
}

/// A Wistia project (folder). Identity (`id`/`hashed_id`) is minted by the
/// remote service; this crate only reads and re-shapes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    #[serde(default)]
    pub hashed_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub media_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub anonymous_can_upload: bool,
    #[serde(default)]
    pub anonymous_can_download: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
}

/// A media record as the videos endpoint returns it. Only the fields the host
/// schemas name are typed; everything else rides along in `extra` so polling
/// output stays verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: u64,
    #[serde(default)]
    pub hashed_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<Asset>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

/// Nested inside `Video`; no identity of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    #[serde(rename = "type", default)]
    pub asset_type: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(rename = "fileSize", default)]
    pub file_size: u64,
    #[serde(rename = "contentType", default)]
    pub content_type: String,
    #[serde(default)]
    pub url: String,
}

/// Ephemeral projection of `Project` used to populate host dropdowns; never
/// sent back to the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DropdownOption {
    pub id: u64,
    pub label: String,
}
