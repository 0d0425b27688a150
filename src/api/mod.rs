use crate::config::WidgetSettings;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    Network,
    Http,
    Parse,
    /// The endpoint answered with its own `{status, error}` failure payload.
    Server,
}

#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
        }
    }

    fn server(status: u16, error: Option<String>, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Server,
            message: error.unwrap_or_else(|| format!("{ctx} (status {status})")),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

pub const CSRF_COOKIE: &str = "csrftoken";
pub const UPLOAD_FIELD: &str = "markdown-image-upload";

/// `{status, name, link}` on success, `{status, error}` on failure.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UploadResponse {
    pub status: u16,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedImage {
    pub name: String,
    pub link: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserEntry {
    pub username: String,
}

/// `{status: 200, data: [{username}]}` or `{status: 204, error}` when nobody matches.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SearchUsersResponse {
    pub status: u16,
    #[serde(default)]
    pub data: Vec<UserEntry>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Client for the three server endpoints the widget talks to.
#[derive(Clone, Debug)]
pub struct MarkdownClient {
    pub(crate) base_url: String,
    pub(crate) markdownify_url: String,
    pub(crate) upload_url: String,
    pub(crate) search_users_url: String,
    pub(crate) csrf_token: Option<String>,
}

impl MarkdownClient {
    pub fn new(base_url: String, settings: &WidgetSettings) -> Self {
        Self {
            base_url,
            markdownify_url: settings.markdownify_url.clone(),
            upload_url: settings.upload_url.clone(),
            search_users_url: settings.search_users_url.clone(),
            csrf_token: None,
        }
    }

    /// Client for the current page: same origin, CSRF token taken from `document.cookie`.
    pub fn for_page(settings: &WidgetSettings) -> Self {
        let mut client = Self::new(page_origin(), settings);
        client.set_csrf_token(read_csrf_token());
        client
    }

    pub fn set_csrf_token(&mut self, token: Option<String>) {
        self.csrf_token = token;
    }

    /// Endpoint URLs are usually site-relative; reqwest needs absolute ones.
    pub(crate) fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{}", self.base_url.trim_end_matches('/'), url)
        } else {
            format!("{}/{}", self.base_url.trim_end_matches('/'), url)
        }
    }

    fn with_csrf_headers(
        mut req: reqwest::RequestBuilder,
        token: Option<&String>,
    ) -> reqwest::RequestBuilder {
        if let Some(token) = token {
            req = req.header("X-CSRFToken", token.as_str());
        }
        req.header("X-Requested-With", "XMLHttpRequest")
    }

    /// POST the document to the markdownify endpoint; returns the rendered HTML fragment.
    pub async fn markdownify(&self, content: &str) -> ApiResult<String> {
        let client = reqwest::Client::new();
        let token = self.csrf_token.clone().unwrap_or_default();
        let req = client
            .post(self.resolve(&self.markdownify_url))
            .form(&[("content", content), ("csrfmiddlewaretoken", token.as_str())]);
        let req = Self::with_csrf_headers(req, self.csrf_token.as_ref());

        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            res.text().await.map_err(ApiError::parse)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, "Preview failed"))
        }
    }

    pub async fn upload_image(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<UploadedImage> {
        let mut part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        if !mime.is_empty() {
            part = part.mime_str(mime).map_err(ApiError::parse)?;
        }

        let mut form = reqwest::multipart::Form::new().part(UPLOAD_FIELD, part);
        if let Some(token) = &self.csrf_token {
            form = form.text("csrfmiddlewaretoken", token.clone());
        }

        let client = reqwest::Client::new();
        let req = client.post(self.resolve(&self.upload_url)).multipart(form);
        let req = Self::with_csrf_headers(req, self.csrf_token.as_ref());

        let res = req.send().await.map_err(ApiError::network)?;
        let status = res.status();
        let body = res.text().await.map_err(ApiError::network)?;

        if !status.is_success() {
            return Err(ApiError::http(status, body, "Upload failed"));
        }
        Self::parse_upload_response(&body)
    }

    pub async fn search_users(&self, username: &str) -> ApiResult<Vec<String>> {
        let username = username.trim();
        // The endpoint rejects empty names and names with spaces anyway.
        if username.is_empty() || username.contains(' ') {
            return Ok(vec![]);
        }

        let client = reqwest::Client::new();
        let req = client
            .get(self.resolve(&self.search_users_url))
            .query(&[("username", username)]);
        let req = Self::with_csrf_headers(req, self.csrf_token.as_ref());

        let res = req.send().await.map_err(ApiError::network)?;
        if res.status().is_success() {
            let body = res.text().await.map_err(ApiError::network)?;
            Self::parse_search_users_response(&body)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, "User search failed"))
        }
    }

    pub(crate) fn parse_upload_response(body: &str) -> ApiResult<UploadedImage> {
        let parsed: UploadResponse = serde_json::from_str(body)
            .map_err(|_| ApiError::parse(format!("Unexpected upload response: {body}")))?;

        if parsed.status != 200 {
            return Err(ApiError::server(parsed.status, parsed.error, "Upload failed"));
        }

        match (parsed.name, parsed.link) {
            (Some(name), Some(link)) if !link.trim().is_empty() => Ok(UploadedImage { name, link }),
            _ => Err(ApiError::parse(format!(
                "Upload succeeded but response is missing name/link: {body}"
            ))),
        }
    }

    pub(crate) fn parse_search_users_response(body: &str) -> ApiResult<Vec<String>> {
        let parsed: SearchUsersResponse = serde_json::from_str(body).map_err(ApiError::parse)?;
        if parsed.status != 200 {
            log::debug!(
                "user search returned {}: {}",
                parsed.status,
                parsed.error.unwrap_or_default()
            );
            return Ok(vec![]);
        }

        Ok(parsed
            .data
            .into_iter()
            .map(|u| u.username)
            .filter(|u| !u.trim().is_empty())
            .collect())
    }
}

/// Value of `name` in a `document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(|c| c.trim())
        .find_map(|c| c.strip_prefix(name)?.strip_prefix('='))
        .map(|v| {
            urlencoding::decode(v)
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| v.to_string())
        })
}

pub fn read_csrf_token() -> Option<String> {
    use wasm_bindgen::JsCast;

    let doc = web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?;
    let cookies = doc.cookie().ok()?;
    cookie_value(&cookies, CSRF_COOKIE)
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetSettings;

    fn client() -> MarkdownClient {
        MarkdownClient::new(
            "http://localhost:8000".to_string(),
            &WidgetSettings::from_attrs("content", |_| None),
        )
    }

    #[test]
    fn test_upload_response_success_contract() {
        let json = r#"{"status": 200, "name": "cat.png", "link": "http://x/cat.png"}"#;
        let img = MarkdownClient::parse_upload_response(json).expect("upload should parse");
        assert_eq!(
            img,
            UploadedImage {
                name: "cat.png".to_string(),
                link: "http://x/cat.png".to_string(),
            }
        );
    }

    #[test]
    fn test_upload_response_server_error_is_surfaced() {
        let json = r#"{"status": 400, "error": "File too large"}"#;
        let err = MarkdownClient::parse_upload_response(json).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Server);
        assert_eq!(err.to_string(), "File too large");
    }

    #[test]
    fn test_upload_response_malformed_keeps_raw_text() {
        let err = MarkdownClient::parse_upload_response("Invalid request!").unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Parse);
        assert!(err.message.contains("Invalid request!"));
    }

    #[test]
    fn test_upload_response_missing_link_is_an_error() {
        let err = MarkdownClient::parse_upload_response(r#"{"status": 200, "name": "a.png"}"#)
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Parse);
    }

    #[test]
    fn test_search_users_contract() {
        let json = r#"{"status": 200, "data": [{"username": "john"}, {"username": "albert"}]}"#;
        let users = MarkdownClient::parse_search_users_response(json).expect("should parse");
        assert_eq!(users, vec!["john", "albert"]);
    }

    #[test]
    fn test_search_users_no_match_is_empty() {
        let json = r#"{"status": 204, "error": "No users registered as `zed`"}"#;
        let users = MarkdownClient::parse_search_users_response(json).expect("should parse");
        assert!(users.is_empty());
    }

    #[test]
    fn test_resolve_relative_and_absolute_urls() {
        let c = client();
        assert_eq!(
            c.resolve("/martor/markdownify/"),
            "http://localhost:8000/martor/markdownify/"
        );
        assert_eq!(c.resolve("md/"), "http://localhost:8000/md/");
        assert_eq!(c.resolve("https://cdn.example/up"), "https://cdn.example/up");
    }

    #[test]
    fn test_client_takes_endpoints_from_settings() {
        let c = client();
        assert_eq!(c.markdownify_url, crate::config::DEFAULT_MARKDOWNIFY_URL);
        assert_eq!(c.upload_url, crate::config::DEFAULT_UPLOAD_URL);
        assert!(c.csrf_token.is_none());
    }

    #[test]
    fn test_cookie_value_finds_and_decodes_token() {
        let cookies = "sessionid=abc; csrftoken=a%2Bb; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("a+b"));
        assert_eq!(cookie_value(cookies, "missing"), None);
    }

    #[test]
    fn test_cookie_value_does_not_match_name_prefix() {
        assert_eq!(cookie_value("csrftokenx=1", "csrftoken"), None);
    }
}
