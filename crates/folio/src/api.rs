//! The request primitive behind every admin screen.
//!
//! [`AdminClient`] turns a path and [`RequestOptions`] into an HTTP exchange
//! through a [`Transport`], attaching session cookies and the CSRF header from a
//! [`SessionContext`]. Whatever happens on the wire, the caller gets an
//! [`Envelope`] back: failures are data, never panics or `Err`s.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::errors::TransportError;

/// Cookie holding Django's anti-forgery token.
pub const CSRF_COOKIE: &str = "csrftoken";
/// Header the BFF expects the token in on state-changing requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Everything except GET mutates server state and needs the CSRF token.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request headers with case-insensitive lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiHeaders(BTreeMap<String, String>);

impl ApiHeaders {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets a header, replacing any existing value under the same name
    /// regardless of case.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.delete(&key);
        self.0.insert(key, value.into());
    }

    pub fn delete(&mut self, key: &str) {
        self.0.retain(|name, _| !name.eq_ignore_ascii_case(key));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<ApiHeaders> for gloo_net::http::Headers {
    fn from(val: ApiHeaders) -> Self {
        let headers = gloo_net::http::Headers::new();
        for (key, value) in val.0 {
            headers.set(&key, &value);
        }
        headers
    }
}

/// Method, body and extra headers for one call. Defaults to a bare GET.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<String>,
    pub headers: ApiHeaders,
}

impl RequestOptions {
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Serializes `body` as the JSON request body.
    pub fn json<B>(mut self, body: &B) -> Result<Self, serde_json::Error>
    where
        B: Serialize + ?Sized,
    {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key, value);
        self
    }
}

/// A fully resolved request, as handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: ApiHeaders,
    pub body: Option<String>,
}

/// What came back over the wire, before any JSON handling.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
    /// Raw `Set-Cookie` values. Always empty in the browser, which keeps its
    /// own cookie jar.
    pub set_cookies: Vec<String>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            set_cookies: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Sends requests with credentials included.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}

/// Session and CSRF cookies available to the client.
pub trait SessionContext {
    /// Decoded value of the named cookie.
    fn cookie(&self, name: &str) -> Option<String>;

    /// A `Cookie` header to send explicitly. Browsers attach cookies
    /// themselves, so only out-of-browser jars return one.
    fn cookie_header(&self) -> Option<String> {
        None
    }

    /// Records a `Set-Cookie` value from a response.
    fn absorb_set_cookie(&self, _header: &str) {}
}

/// Finds `name` in a `document.cookie` style string and percent-decodes its
/// value.
pub fn parse_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
        .map(|value| {
            percent_encoding::percent_decode_str(value)
                .decode_utf8_lossy()
                .into_owned()
        })
}

/// How the response body was interpreted.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BodyState {
    /// No body at all, or no response (transport failure).
    #[default]
    Empty,
    /// Valid JSON, decoded into `data` or `errors`.
    Json,
    /// Not JSON. Tolerated, but kept visible instead of silently dropped.
    Malformed(String),
    /// Valid JSON that does not match the expected shape.
    Mismatch(String),
}

/// The uniform `{ok, status, data?, errors?}` result of every client call.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub ok: bool,
    /// HTTP status, or `0` when the request never completed.
    pub status: u16,
    pub data: Option<T>,
    pub errors: Option<Vec<String>>,
    pub body: BodyState,
}

impl<T> Envelope<T> {
    /// A request that never produced a response.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            status: 0,
            data: None,
            errors: Some(vec![message.into()]),
            body: BodyState::Empty,
        }
    }

    pub fn first_error(&self) -> Option<&str> {
        self.errors
            .as_deref()
            .and_then(|errors| errors.first())
            .map(String::as_str)
    }

    /// Banner text: the first reported error, or `fallback`.
    pub fn first_error_or(&self, fallback: &str) -> String {
        self.first_error().unwrap_or(fallback).to_string()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            ok: self.ok,
            status: self.status,
            data: self.data.map(f),
            errors: self.errors,
            body: self.body,
        }
    }

    /// `Ok(data)` when the call succeeded with a body, otherwise the banner
    /// message built from `fallback`.
    pub fn into_result(self, fallback: &str) -> Result<T, String> {
        if !self.ok {
            return Err(self.first_error_or(fallback));
        }
        let message = self.first_error_or(fallback);
        self.data.ok_or(message)
    }
}

impl<T> Envelope<T>
where
    T: DeserializeOwned,
{
    /// Interprets a status and body the way every admin screen expects:
    /// an `errors` array wins over data, and bodies that are not JSON leave
    /// both absent.
    pub fn decode(status: u16, body: &str) -> Self {
        let ok = (200..=299).contains(&status);
        let mut envelope = Self {
            ok,
            status,
            data: None,
            errors: None,
            body: BodyState::Empty,
        };

        if body.trim().is_empty() {
            return envelope;
        }

        let value: Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(status, "ignoring non-JSON response body: {err}");
                envelope.body = BodyState::Malformed(err.to_string());
                return envelope;
            }
        };

        if let Some(Value::Array(items)) = value.get("errors") {
            envelope.errors = Some(items.iter().map(error_text).collect());
            envelope.body = BodyState::Json;
            return envelope;
        }

        match serde_json::from_value::<T>(value) {
            Ok(data) => {
                envelope.data = Some(data);
                envelope.body = BodyState::Json;
            }
            Err(err) => {
                tracing::warn!(status, "response body does not match the expected shape: {err}");
                envelope.body = BodyState::Mismatch(err.to_string());
            }
        }
        envelope
    }
}

fn error_text(value: &Value) -> String {
    match value {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    }
}

#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    /// The core primitive. Never fails; see [`Envelope`].
    async fn request<T>(&self, path: &str, options: RequestOptions) -> Envelope<T>
    where
        T: DeserializeOwned;

    async fn get<T>(&self, path: &str) -> Envelope<T>
    where
        T: DeserializeOwned,
    {
        self.request(path, RequestOptions::default()).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Envelope<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request_with_body(HttpMethod::Post, path, body).await
    }

    async fn put<T, B>(&self, path: &str, body: &B) -> Envelope<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request_with_body(HttpMethod::Put, path, body).await
    }

    async fn patch<T, B>(&self, path: &str, body: &B) -> Envelope<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request_with_body(HttpMethod::Patch, path, body).await
    }

    async fn delete<T>(&self, path: &str) -> Envelope<T>
    where
        T: DeserializeOwned,
    {
        self.request(path, RequestOptions::new(HttpMethod::Delete))
            .await
    }

    async fn request_with_body<T, B>(&self, method: HttpMethod, path: &str, body: &B) -> Envelope<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        match RequestOptions::new(method).json(body) {
            Ok(options) => self.request(path, options).await,
            Err(err) => Envelope::failure(format!("Failed to encode request body: {err}")),
        }
    }
}

/// Client for the BFF admin API. Cheap to clone; clones share the transport
/// and the session context.
#[derive(Clone)]
pub struct AdminClient {
    config: ClientConfig,
    transport: Rc<dyn Transport>,
    session: Rc<dyn SessionContext>,
}

impl AdminClient {
    pub fn new(
        config: ClientConfig,
        transport: Rc<dyn Transport>,
        session: Rc<dyn SessionContext>,
    ) -> Self {
        Self {
            config,
            transport,
            session,
        }
    }

    /// Browser client: `fetch` with `credentials: include` and
    /// `document.cookie` as the session context.
    #[cfg(target_arch = "wasm32")]
    pub fn browser(config: ClientConfig) -> Self {
        Self::new(
            config,
            Rc::new(browser::GlooTransport),
            Rc::new(browser::DocumentCookies),
        )
    }

    /// Native client backed by reqwest. `origin` resolves relative paths the
    /// way a browser resolves them against the page it runs on.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn native(
        config: ClientConfig,
        origin: Option<String>,
        cookies: native::MemoryCookies,
    ) -> Self {
        Self::new(
            config,
            Rc::new(native::ReqwestTransport::new(origin)),
            Rc::new(cookies),
        )
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn prepare(&self, path: &str, options: RequestOptions) -> ApiRequest {
        let RequestOptions {
            method,
            body,
            mut headers,
        } = options;

        if method.is_mutating() {
            if !headers.contains("Content-Type") {
                headers.insert("Content-Type", "application/json");
            }
            match self.session.cookie(CSRF_COOKIE) {
                Some(token) if !token.is_empty() => headers.insert(CSRF_HEADER, token),
                _ => tracing::debug!(
                    "no {CSRF_COOKIE} cookie, sending {method} without {CSRF_HEADER}"
                ),
            }
        }

        if let Some(cookies) = self.session.cookie_header() {
            headers.insert("Cookie", cookies);
        }

        ApiRequest {
            method,
            url: self.config.url_for(path),
            headers,
            body,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for AdminClient {
    async fn request<T>(&self, path: &str, options: RequestOptions) -> Envelope<T>
    where
        T: DeserializeOwned,
    {
        let request = self.prepare(path, options);
        tracing::debug!(method = %request.method, url = %request.url, "admin api request");

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(path, "admin api unreachable: {err}");
                return Envelope::failure(format!(
                    "Unable to reach the admin API at {}: {err}",
                    self.config.describe()
                ));
            }
        };

        for header in &response.set_cookies {
            self.session.absorb_set_cookie(header);
        }

        Envelope::decode(response.status, &response.body)
    }
}

#[cfg(target_arch = "wasm32")]
pub mod browser {
    //! `fetch`-based transport and `document.cookie` session for the console.

    use gloo_net::http::Request;
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlDocument, RequestCredentials};

    use super::*;

    pub struct GlooTransport;

    #[async_trait::async_trait(?Send)]
    impl Transport for GlooTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
            let builder = match request.method {
                HttpMethod::Get => Request::get(&request.url),
                HttpMethod::Post => Request::post(&request.url),
                HttpMethod::Put => Request::put(&request.url),
                HttpMethod::Patch => Request::patch(&request.url),
                HttpMethod::Delete => Request::delete(&request.url),
            }
            .credentials(RequestCredentials::Include)
            .headers(request.headers.into());

            let response = match request.body {
                Some(body) => builder.body(body)?.send().await?,
                None => builder.send().await?,
            };

            let status = response.status();
            let body = response.text().await.unwrap_or_else(|err| {
                tracing::debug!(status, "failed to read response body: {err}");
                String::new()
            });

            Ok(RawResponse::new(status, body))
        }
    }

    /// Reads cookies from the current document.
    pub struct DocumentCookies;

    impl SessionContext for DocumentCookies {
        fn cookie(&self, name: &str) -> Option<String> {
            let document = web_sys::window()?.document()?;
            let cookies = document.dyn_into::<HtmlDocument>().ok()?.cookie().ok()?;
            parse_cookie(&cookies, name)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod native {
    //! reqwest transport and an in-memory cookie jar, for tools and tests
    //! running outside the browser.

    use std::cell::RefCell;

    use reqwest::header::SET_COOKIE;

    use super::*;

    pub struct ReqwestTransport {
        client: reqwest::Client,
        origin: Option<String>,
    }

    impl ReqwestTransport {
        pub fn new(origin: Option<String>) -> Self {
            Self {
                client: reqwest::Client::new(),
                origin: origin.map(|o| crate::config::normalize_base_url(&o)),
            }
        }

        fn resolve(&self, url: &str) -> Result<String, TransportError> {
            if !url.starts_with('/') {
                return Ok(url.to_string());
            }
            self.origin
                .as_ref()
                .map(|origin| format!("{origin}{url}"))
                .ok_or_else(|| {
                    TransportError::InvalidRequest(format!(
                        "relative URL {url} needs an origin to resolve against"
                    ))
                })
        }
    }

    #[async_trait::async_trait(?Send)]
    impl Transport for ReqwestTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
            let url = self.resolve(&request.url)?;
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
                HttpMethod::Put => reqwest::Method::PUT,
                HttpMethod::Patch => reqwest::Method::PATCH,
                HttpMethod::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self.client.request(method, url);
            for (key, value) in request.headers.iter() {
                builder = builder.header(key, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let set_cookies = response
                .headers()
                .get_all(SET_COOKIE)
                .iter()
                .filter_map(|value| value.to_str().ok())
                .map(String::from)
                .collect();
            let body = response.text().await.unwrap_or_else(|err| {
                tracing::debug!(status, "failed to read response body: {err}");
                String::new()
            });

            Ok(RawResponse {
                status,
                body,
                set_cookies,
            })
        }
    }

    /// In-memory cookie jar. Clones share the same jar.
    #[derive(Debug, Clone, Default)]
    pub struct MemoryCookies {
        jar: Rc<RefCell<BTreeMap<String, String>>>,
    }

    impl MemoryCookies {
        pub fn new() -> Self {
            Self::default()
        }

        /// Stores a raw (still percent-encoded) cookie value.
        pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
            self.jar.borrow_mut().insert(name.into(), value.into());
        }

        pub fn remove(&self, name: &str) {
            self.jar.borrow_mut().remove(name);
        }

        pub fn is_empty(&self) -> bool {
            self.jar.borrow().is_empty()
        }
    }

    impl SessionContext for MemoryCookies {
        fn cookie(&self, name: &str) -> Option<String> {
            let jar = self.jar.borrow();
            let raw = jar.get(name)?;
            Some(
                percent_encoding::percent_decode_str(raw)
                    .decode_utf8_lossy()
                    .into_owned(),
            )
        }

        fn cookie_header(&self) -> Option<String> {
            let jar = self.jar.borrow();
            if jar.is_empty() {
                return None;
            }
            Some(
                jar.iter()
                    .map(|(name, value)| format!("{name}={value}"))
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        }

        fn absorb_set_cookie(&self, header: &str) {
            let mut parts = header.split(';');
            let Some((name, value)) = parts.next().and_then(|pair| pair.split_once('=')) else {
                return;
            };
            let (name, value) = (name.trim(), value.trim().trim_matches('"'));
            if name.is_empty() {
                return;
            }

            let expired = parts.any(|attribute| {
                attribute
                    .trim()
                    .to_ascii_lowercase()
                    .replace(' ', "")
                    .starts_with("max-age=0")
            });
            if expired || value.is_empty() {
                self.remove(name);
            } else {
                self.set(name, value);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use serde::Deserialize;

    use super::*;

    /// Replays canned responses and records every request it was given.
    #[derive(Default)]
    pub(crate) struct FakeTransport {
        responses: RefCell<VecDeque<Result<RawResponse, TransportError>>>,
        pub(crate) seen: RefCell<Vec<ApiRequest>>,
    }

    impl FakeTransport {
        pub(crate) fn respond(&self, status: u16, body: &str) {
            self.responses
                .borrow_mut()
                .push_back(Ok(RawResponse::new(status, body)));
        }

        pub(crate) fn fail(&self, message: &str) {
            self.responses
                .borrow_mut()
                .push_back(Err(TransportError::Network(message.to_string())));
        }

        pub(crate) fn last(&self) -> ApiRequest {
            self.seen.borrow().last().cloned().expect("no request sent")
        }
    }

    #[async_trait::async_trait(?Send)]
    impl Transport for FakeTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
            self.seen.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(RawResponse::new(200, "{}")))
        }
    }

    /// A fixed `document.cookie` string.
    pub(crate) struct StaticCookies(pub(crate) &'static str);

    impl SessionContext for StaticCookies {
        fn cookie(&self, name: &str) -> Option<String> {
            parse_cookie(self.0, name)
        }
    }

    pub(crate) fn client_with(
        base: &str,
        cookies: &'static str,
    ) -> (AdminClient, Rc<FakeTransport>) {
        let transport = Rc::new(FakeTransport::default());
        let client = AdminClient::new(
            ClientConfig::new(base),
            transport.clone(),
            Rc::new(StaticCookies(cookies)),
        );
        (client, transport)
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Named {
        name: String,
    }

    #[tokio::test]
    async fn csrf_header_is_sent_on_mutations_when_cookie_present() {
        let (client, transport) = client_with("", "sessionid=s1; csrftoken=tok%3D1");

        let named = Named { name: "Go".into() };
        let _: Envelope<Value> = client.post("/api/admin/skills", &named).await;
        let request = transport.last();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.headers.get("x-csrftoken"), Some("tok=1"));
        assert_eq!(request.headers.get("content-type"), Some("application/json"));
        assert_eq!(request.body.as_deref(), Some(r#"{"name":"Go"}"#));

        let _: Envelope<Value> = client.delete("/api/admin/skills/1").await;
        assert_eq!(transport.last().headers.get(CSRF_HEADER), Some("tok=1"));
    }

    #[tokio::test]
    async fn get_requests_carry_no_csrf_or_content_type() {
        let (client, transport) = client_with("", "csrftoken=abc");

        let _: Envelope<Value> = client.get("/api/admin/session").await;
        let request = transport.last();
        assert_eq!(request.method, HttpMethod::Get);
        assert!(!request.headers.contains(CSRF_HEADER));
        assert!(!request.headers.contains("Content-Type"));
    }

    #[tokio::test]
    async fn csrf_header_omitted_without_cookie() {
        let (client, transport) = client_with("", "sessionid=s1");

        let named = Named { name: "Rust".into() };
        let _: Envelope<Value> = client.patch("/api/admin/skills/1", &named).await;
        assert!(!transport.last().headers.contains(CSRF_HEADER));

        let (client, transport) = client_with("", "csrftoken=");
        let _: Envelope<Value> = client.delete("/api/admin/skills/1").await;
        assert!(!transport.last().headers.contains(CSRF_HEADER));
    }

    #[tokio::test]
    async fn caller_content_type_is_kept() {
        let (client, transport) = client_with("", "");

        let options = RequestOptions::new(HttpMethod::Post).header("content-type", "text/plain");
        let _: Envelope<Value> = client.request("/api/admin/logout", options).await;
        let request = transport.last();
        assert_eq!(request.headers.get("Content-Type"), Some("text/plain"));
        let content_types = request
            .headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .count();
        assert_eq!(content_types, 1);
    }

    #[tokio::test]
    async fn url_is_resolved_against_base() {
        let (client, transport) = client_with("http://localhost:8001/", "");
        let _: Envelope<Value> = client.get("/api/admin/pages").await;
        assert_eq!(transport.last().url, "http://localhost:8001/api/admin/pages");

        let (client, transport) = client_with("", "");
        let _: Envelope<Value> = client.get("/api/admin/pages").await;
        assert_eq!(transport.last().url, "/api/admin/pages");
    }

    #[tokio::test]
    async fn transport_failure_names_the_base() {
        let (client, transport) = client_with("http://localhost:8001", "");
        transport.fail("connection refused");

        let envelope: Envelope<Value> = client.get("/api/admin/session").await;
        assert!(!envelope.ok);
        assert_eq!(envelope.status, 0);
        assert_eq!(envelope.data, None);
        let errors = envelope.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("http://localhost:8001"));
        assert!(errors[0].contains("connection refused"));
    }

    #[tokio::test]
    async fn transport_failure_with_relative_base_mentions_routing() {
        let (client, transport) = client_with("", "");
        transport.fail("offline");

        let envelope: Envelope<Value> = client.get("/api/admin/session").await;
        assert_eq!(envelope.status, 0);
        assert!(envelope.first_error().unwrap().contains("relative /api"));
    }

    #[test]
    fn errors_array_replaces_data() {
        let envelope = Envelope::<Value>::decode(404, r#"{"errors":["not found"]}"#);
        assert!(!envelope.ok);
        assert_eq!(envelope.status, 404);
        assert_eq!(envelope.data, None);
        assert_eq!(envelope.errors, Some(vec!["not found".to_string()]));

        let envelope = Envelope::<Value>::decode(400, r#"{"errors":["bad", 3, {"field":"x"}]}"#);
        assert_eq!(
            envelope.errors,
            Some(vec!["bad".to_string(), "3".to_string(), r#"{"field":"x"}"#.to_string()])
        );
    }

    #[test]
    fn errors_array_wins_even_on_success_status() {
        let envelope = Envelope::<Value>::decode(200, r#"{"errors":["partial"],"pages":[]}"#);
        assert!(envelope.ok);
        assert_eq!(envelope.data, None);
        assert_eq!(envelope.first_error(), Some("partial"));
    }

    #[test]
    fn non_json_body_is_not_fatal() {
        let envelope = Envelope::<Value>::decode(502, "<html>Bad Gateway</html>");
        assert!(!envelope.ok);
        assert_eq!(envelope.status, 502);
        assert_eq!(envelope.data, None);
        assert_eq!(envelope.errors, None);
        assert!(matches!(envelope.body, BodyState::Malformed(_)));

        let envelope = Envelope::<Value>::decode(200, "OK");
        assert!(envelope.ok);
        assert_eq!(envelope.data, None);
        assert_eq!(envelope.errors, None);
    }

    #[test]
    fn empty_body_is_distinguished_from_malformed() {
        let envelope = Envelope::<Value>::decode(204, "");
        assert!(envelope.ok);
        assert_eq!(envelope.body, BodyState::Empty);
    }

    #[test]
    fn shape_mismatch_keeps_envelope_status() {
        let envelope = Envelope::<Named>::decode(200, r#"{"title":"no name"}"#);
        assert!(envelope.ok);
        assert_eq!(envelope.data, None);
        assert_eq!(envelope.errors, None);
        assert!(matches!(envelope.body, BodyState::Mismatch(_)));
    }

    #[test]
    fn into_result_prefers_reported_error() {
        let envelope = Envelope::<Value>::decode(403, r#"{"errors":["Admin access required."]}"#);
        assert_eq!(
            envelope.into_result("Failed to load skills."),
            Err("Admin access required.".to_string())
        );

        let envelope = Envelope::<Value>::decode(500, "");
        assert_eq!(
            envelope.into_result("Failed to load skills."),
            Err("Failed to load skills.".to_string())
        );
    }

    #[test]
    fn parse_cookie_finds_exact_name() {
        let cookies = "xcsrftoken=nope; csrftoken=a%20b; other=1";
        assert_eq!(parse_cookie(cookies, "csrftoken"), Some("a b".to_string()));
        assert_eq!(parse_cookie(cookies, "missing"), None);
        assert_eq!(parse_cookie("", "csrftoken"), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod memory_cookies {
        use super::super::native::MemoryCookies;
        use super::*;

        #[test]
        fn absorbs_and_expires_cookies() {
            let jar = MemoryCookies::new();
            jar.absorb_set_cookie(
                "csrftoken=abc123; expires=Thu, 01 Jan 2099 00:00:00 GMT; Path=/; SameSite=Lax",
            );
            jar.absorb_set_cookie("sessionid=s1; HttpOnly; Path=/");
            assert_eq!(jar.cookie("csrftoken"), Some("abc123".to_string()));
            assert_eq!(
                jar.cookie_header(),
                Some("csrftoken=abc123; sessionid=s1".to_string())
            );

            jar.absorb_set_cookie(
                r#"sessionid=""; expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0; Path=/"#,
            );
            assert_eq!(jar.cookie("sessionid"), None);
            assert_eq!(jar.cookie_header(), Some("csrftoken=abc123".to_string()));
        }

        #[tokio::test]
        async fn client_forwards_jar_and_records_set_cookie() {
            let jar = MemoryCookies::new();
            jar.set("sessionid", "s1");
            let transport = Rc::new(FakeTransport::default());
            transport.responses.borrow_mut().push_back(Ok(RawResponse {
                status: 200,
                body: r#"{"csrfToken":"fresh"}"#.to_string(),
                set_cookies: vec!["csrftoken=fresh; Path=/".to_string()],
            }));
            let client = AdminClient::new(
                ClientConfig::relative(),
                transport.clone(),
                Rc::new(jar.clone()),
            );

            let _: Envelope<Value> = client.get("/api/admin/csrf").await;
            assert_eq!(transport.last().headers.get("Cookie"), Some("sessionid=s1"));
            assert_eq!(jar.cookie(CSRF_COOKIE), Some("fresh".to_string()));

            let _: Envelope<Value> = client.post("/api/admin/logout", &serde_json::json!({})).await;
            let request = transport.last();
            assert_eq!(request.headers.get(CSRF_HEADER), Some("fresh"));
            assert_eq!(request.headers.get("Cookie"), Some("csrftoken=fresh; sessionid=s1"));
        }
    }
}
