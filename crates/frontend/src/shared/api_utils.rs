//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and reading the
//! client-side configuration overrides kept in localStorage.

/// localStorage key overriding the API base URL.
const API_BASE_KEY: &str = "inventory.api_base";

/// localStorage key toggling the login gate ("true"/"false").
const AUTH_ENABLED_KEY: &str = "inventory.auth_enabled";

/// Get the base URL for API requests
///
/// The inventory backend listens on port 8081 and serves everything under
/// `/api`. The host is taken from the current window location so the same
/// build works on localhost and on a deployed host. A full base URL stored
/// under `inventory.api_base` wins over the derived one.
///
/// # Example
/// ```rust,no_run
/// # use frontend::shared::api_utils::api_base;
/// # let id = 1;
/// let url = format!("{}/articles/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    if let Some(stored) = read_local_storage(API_BASE_KEY) {
        if !stored.trim().is_empty() {
            return stored.trim_end_matches('/').to_string();
        }
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return "http://localhost:8081/api".to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:8081/api", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path relative to the base (should start with "/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Whether the login gate is active.
///
/// Defaults to false so a fresh checkout talks to an unsecured backend
/// without any setup. Set `inventory.auth_enabled` to "true" to require
/// a session.
pub fn auth_enabled() -> bool {
    matches!(read_local_storage(AUTH_ENABLED_KEY).as_deref(), Some("true"))
}

fn read_local_storage(key: &str) -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(key)
        .ok()
        .flatten()
}

/// Query string for the Spring-style paginated list endpoints. The filter
/// text travels as `search` and is omitted when blank.
pub fn paged_query(page: usize, size: usize, query: &str) -> String {
    let mut qs = format!("page={}&size={}", page, size);
    if !query.trim().is_empty() {
        qs.push_str("&search=");
        qs.push_str(&urlencoding::encode(query.trim()));
    }
    qs
}

fn with_auth(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    if auth_enabled() {
        if let Some(token) = crate::system::auth::storage::get_access_token() {
            return request.header("Authorization", &format!("Bearer {}", token));
        }
    }
    request
}

/// GET a JSON payload from `path` (relative to the API base).
pub async fn get_json<T>(path: &str) -> Result<T, String>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let response = with_auth(gloo_net::http::Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST a JSON body, expecting a JSON payload back.
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, String>
where
    B: serde::Serialize,
    T: for<'de> serde::Deserialize<'de>,
{
    let response = with_auth(gloo_net::http::Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST a JSON body where the response body does not matter.
pub async fn post_json_discard<B>(path: &str, body: &B) -> Result<(), String>
where
    B: serde::Serialize,
{
    let response = with_auth(gloo_net::http::Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    Ok(())
}

/// PUT without a body (status-change endpoints).
pub async fn put_empty(path: &str) -> Result<(), String> {
    let response = with_auth(gloo_net::http::Request::put(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    Ok(())
}
