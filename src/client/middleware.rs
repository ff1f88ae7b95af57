//! Fixed hook pipeline run around every outbound exchange: `BEFORES` mutate
//! the request before the transport sends it, `AFTERS` inspect the response
//! before it reaches a handler. The set is small and static, so plain
//! function tables are enough.

use tracing::warn;

use crate::client::request::{ApiRequest, ApiResponse};
use crate::error::{Result, WistiaError};
use crate::models::models::Credentials;

pub type BeforeRequest = fn(ApiRequest, Option<&Credentials>) -> ApiRequest;
pub type AfterResponse = fn(ApiResponse) -> Result<ApiResponse>;

pub const BEFORES: &[BeforeRequest] = &[include_api_key];
pub const AFTERS: &[AfterResponse] = &[handle_bad_responses];

/// Attach the bearer token when credentials are present; otherwise the
/// request goes out unauthenticated and the remote service rejects it.
pub fn include_api_key(
    mut request: ApiRequest,
    credentials: Option<&Credentials>,
) -> ApiRequest {
    if let Some(creds) = credentials {
        request
            .headers
            .push(("Authorization", format!("Bearer {}", creds.api_key)));
    }
    request
}

/// 401 means bad credentials on every endpoint, so it becomes a typed
/// authentication failure here. Any other status passes through; handlers
/// interpret non-2xx statuses endpoint by endpoint.
pub fn handle_bad_responses(response: ApiResponse) -> Result<ApiResponse> {
    if response.status.as_u16() == 401 {
        warn!("Wistia rejected the stored credentials");
        return Err(WistiaError::authentication(
            "The API Key you supplied is incorrect",
            response.status.as_u16(),
        ));
    }
    Ok(response)
}
