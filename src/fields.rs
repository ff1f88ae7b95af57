//! Declarative metadata the host UI consumes: field definitions, display
//! text, and sample payloads. Plain immutable records, no behavior.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Integer,
    Boolean,
    Datetime,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldDef {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<&'static str>,
    /// `trigger_key.field` reference backing a dynamic dropdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Display {
    pub label: &'static str,
    pub description: &'static str,
}

/// Custom-auth descriptor: the one field the user fills in, the probe's
/// connection-label template, and nothing else.
#[derive(Debug, Clone)]
pub struct AuthenticationDescriptor {
    pub auth_type: &'static str,
    pub fields: &'static [FieldDef],
    pub connection_label: &'static str,
}

#[derive(Debug, Clone)]
pub struct TriggerDescriptor {
    pub key: &'static str,
    pub noun: &'static str,
    pub display: Display,
    pub input_fields: &'static [FieldDef],
    pub output_fields: &'static [FieldDef],
    pub sample: Value,
}

#[derive(Debug, Clone)]
pub struct CreateDescriptor {
    pub key: &'static str,
    pub noun: &'static str,
    pub display: Display,
    pub input_fields: &'static [FieldDef],
    pub output_fields: &'static [FieldDef],
    pub sample: Value,
}
