//! Request builder for the list API
//!
//! Every call goes through [`RequestBuilder::build`], which attaches the JSON
//! content type, the anti-forgery header (when the page declares one) and the
//! bearer token (when the session store holds one).

use crate::system::auth::storage::SessionStore;
use serde::Serialize;

use super::unified_list::ListError;

pub const CSRF_TOKEN_META: &str = "meta[name='_csrf']";
pub const CSRF_HEADER_META: &str = "meta[name='_csrf_header']";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Anti-forgery header name and value taken from page metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfHeader {
    pub name: String,
    pub value: String,
}

impl CsrfHeader {
    /// Both parts are required, otherwise no header is sent
    pub fn from_parts(name: Option<String>, value: Option<String>) -> Option<Self> {
        match (name, value) {
            (Some(name), Some(value)) if !name.is_empty() && !value.is_empty() => {
                Some(Self { name, value })
            }
            _ => None,
        }
    }

    /// Reads `<meta name="_csrf_header">` and `<meta name="_csrf">` from the document
    pub fn from_document() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let content = |selector: &str| {
            document
                .query_selector(selector)
                .ok()
                .flatten()
                .and_then(|meta| meta.get_attribute("content"))
        };
        Self::from_parts(content(CSRF_HEADER_META), content(CSRF_TOKEN_META))
    }
}

/// Fully described HTTP request, ready for a [`crate::shared::http_client::Transport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestSpec {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub struct RequestBuilder<S> {
    csrf: Option<CsrfHeader>,
    session: S,
}

impl<S: SessionStore> RequestBuilder<S> {
    pub fn new(csrf: Option<CsrfHeader>, session: S) -> Self {
        Self { csrf, session }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Request without body
    pub fn build(&self, method: HttpMethod, url: impl Into<String>) -> RequestSpec {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];

        if let Some(csrf) = &self.csrf {
            headers.push((csrf.name.clone(), csrf.value.clone()));
        }

        // token is read on every call, never cached
        if let Some(token) = self.session.access_token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        RequestSpec {
            method,
            url: url.into(),
            headers,
            body: None,
        }
    }

    /// Request with a JSON body
    pub fn build_json<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        url: impl Into<String>,
        body: &B,
    ) -> Result<RequestSpec, ListError> {
        let body = serde_json::to_string(body).map_err(|e| ListError::Serialize(e.to_string()))?;
        let mut request = self.build(method, url);
        request.body = Some(body);
        Ok(request)
    }
}
