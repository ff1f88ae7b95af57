use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::client::middleware::{AFTERS, BEFORES};
use crate::error::Result;
use crate::models::models::Credentials;

/// Fixed base of the remote API surface this crate consumes.
pub const API_BASE: &str = "https://api.wistia.com/v1";

/// An outbound request before the transport executes it. Paths are relative
/// to the client's base URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub path: String,
    pub method: Method,
    pub params: Vec<(&'static str, String)>,
    pub body: Option<Value>,
    pub headers: Vec<(&'static str, String)>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self::with_method(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::with_method(Method::POST, path)
    }

    fn with_method(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            params: Vec::new(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    pub fn json_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Status and raw body of an executed exchange. Handlers decide what any
/// non-401 status means for their endpoint.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Thin wrapper over `reqwest::Client` that runs the fixed before/after hook
/// pipeline around every exchange. Cheap to clone; owns no other resources.
#[derive(Debug, Clone)]
pub struct WistiaClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for WistiaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WistiaClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE)
    }

    /// Point the client at a different base URL. Used by tests to target a
    /// local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Run one exchange: before-hooks, the network call, after-hooks.
    pub async fn request(
        &self,
        request: ApiRequest,
        credentials: Option<&Credentials>,
    ) -> Result<ApiResponse> {
        let mut request = request;
        for before in BEFORES {
            request = before(request, credentials);
        }

        let mut response = self.execute(request).await?;
        for after in AFTERS {
            response = after(response)?;
        }
        Ok(response)
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(method = %request.method, path = %request.path, "sending Wistia API request");

        let mut builder = self.http.request(request.method, &url);
        if !request.params.is_empty() {
            builder = builder.query(&request.params);
        }
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), "Wistia API response received");

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_request_defaults() {
        let request = ApiRequest::get("/projects");
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/projects");
        assert!(request.params.is_empty());
        assert!(request.body.is_none());
        assert!(request.headers.is_empty());
    }

    #[test]
    fn params_accumulate_in_order() {
        let request = ApiRequest::get("/medias")
            .param("tag", 42)
            .param("per_page", 10)
            .param("sort_by", "created");
        let keys: Vec<_> = request.params.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["tag", "per_page", "sort_by"]);
        assert_eq!(request.params[0].1, "42");
    }

    #[test]
    fn response_json_surfaces_parse_errors() {
        let response = ApiResponse {
            status: StatusCode::OK,
            body: "not json".to_string(),
        };
        assert!(response.json::<serde_json::Value>().is_err());
    }
}
