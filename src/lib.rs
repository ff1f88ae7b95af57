//! Wistia integration pipeline: API-key authentication, two polling
//! triggers (recent videos in a project, project listing with a dropdown
//! projection), one create action, and the declarative field/sample
//! metadata a host automation platform consumes.
//!
//! Every handler is straight-line glue: build a request, await one network
//! call, normalize the response, shape the result. Credentials and input
//! arrive in an explicit [`models::models::Bundle`]; nothing is global.

pub mod app;
pub mod auth;
pub mod client;
pub mod creates;
pub mod error;
pub mod fields;
pub mod models;
pub mod triggers;
pub mod utils;

pub use app::{app, App};
pub use client::request::{ApiRequest, ApiResponse, WistiaClient, API_BASE};
pub use error::{Result, WistiaError};
pub use models::models::{Bundle, Credentials, DropdownOption, Project, Video};
