//! HTTP transport behind the list controller
//!
//! [`GlooTransport`] talks to the browser's fetch via `gloo-net`; tests swap in
//! an in-memory implementation of [`Transport`].

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use super::api_utils::{HttpMethod, RequestSpec};
use super::unified_list::ListError;

/// Raw reply: status code and undecoded body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ListError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Maps 401 and other non-2xx codes to errors, keeping 2xx replies.
    ///
    /// For non-2xx replies the `message` or `status` field of a JSON body, or a
    /// short plain-text body, becomes the error detail.
    pub fn into_success(self) -> Result<Self, ListError> {
        match self.status {
            401 => Err(ListError::Unauthorized),
            _ if self.ok() => Ok(self),
            code => Err(ListError::Status {
                code,
                detail: self.declared_detail(),
            }),
        }
    }

    fn declared_detail(&self) -> Option<String> {
        if let Ok(value) = serde_json::from_slice::<serde_json::Value>(&self.body) {
            return ["message", "status", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string);
        }
        let text = self.text();
        let text = text.trim();
        (!text.is_empty() && text.len() <= 200 && !text.starts_with('<')).then(|| text.to_string())
    }
}

/// Sends a [`RequestSpec`] and returns the raw reply
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: RequestSpec) -> Result<HttpResponse, ListError>;
}

/// Browser fetch through `gloo-net`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn send(&self, request: RequestSpec) -> Result<HttpResponse, ListError> {
        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| ListError::Serialize(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ListError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|e| ListError::Transport(e.to_string()))?;

        log::debug!("{} {} -> {}", request.method.as_str(), request.url, status);
        Ok(HttpResponse { status, body })
    }
}
