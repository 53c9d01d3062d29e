//! API utilities for frontend-service communication
//!
//! Every `api.rs` goes through these helpers so that all calls share the
//! same base URL, cache policy, logging and error mapping.

use contracts::shared::{ApiError, ClientConfig};
use gloo_net::http::{Request, RequestBuilder, Response};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{FormData, RequestCache};

/// Read once from the compile-time `API_URL` variable.
static CONFIG: Lazy<ClientConfig> =
    Lazy::new(|| ClientConfig::from_env_value(option_env!("API_URL")));

/// Get the base URL for API requests, e.g. "http://192.168.237.85:8000"
pub fn api_base() -> String {
    CONFIG.service_base_url.clone()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/cadgss");
/// ```
pub fn api_url(path: &str) -> String {
    CONFIG.url(path)
}

fn unreachable(method: &str, url: &str, err: gloo_net::Error) -> ApiError {
    log::error!("{} {} failed: {}", method, url, err);
    ApiError::Unreachable {
        base_url: api_base(),
    }
}

async fn check(method: &str, url: &str, response: Response) -> Result<Response, ApiError> {
    log::debug!("{} {} -> {}", method, url, response.status());
    if response.ok() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_response(response.status(), &response.status_text(), &body);
    log::error!("{} {} failed: {}", method, url, err);
    Err(err)
}

async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| {
        log::error!("Failed to decode response of {}: {}", url, e);
        ApiError::Decode(e.to_string())
    })
}

async fn send(method: &str, url: &str, builder: RequestBuilder) -> Result<Response, ApiError> {
    log::debug!("{} {}", method, url);
    let response = builder
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| unreachable(method, url, e))?;
    check(method, url, response).await
}

async fn send_json<B: Serialize>(
    method: &str,
    url: &str,
    builder: RequestBuilder,
    body: &B,
) -> Result<Response, ApiError> {
    log::debug!("{} {}", method, url);
    let request = builder
        .cache(RequestCache::NoStore)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| unreachable(method, url, e))?;
    check(method, url, response).await
}

/// `GET path` decoded as `T`.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    let response = send("GET", &url, Request::get(&url)).await?;
    decode(&url, response).await
}

/// `GET path`, success meaning any 2xx answer. Used by connectivity probes.
pub async fn probe(path: &str) -> Result<(), ApiError> {
    let url = api_url(path);
    send("GET", &url, Request::get(&url)).await.map(|_| ())
}

/// `POST path` with a JSON body, response decoded as `T`.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let url = api_url(path);
    let response = send_json("POST", &url, Request::post(&url), body).await?;
    decode(&url, response).await
}

/// `POST path` with a JSON body; the response body is ignored.
pub async fn post_json_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = api_url(path);
    send_json("POST", &url, Request::post(&url), body)
        .await
        .map(|_| ())
}

/// `POST path` without a body; the response body is ignored.
pub async fn post_empty(path: &str) -> Result<(), ApiError> {
    let url = api_url(path);
    send("POST", &url, Request::post(&url)).await.map(|_| ())
}

/// `POST path` with a multipart body.
pub async fn post_form(path: &str, form: FormData) -> Result<(), ApiError> {
    let url = api_url(path);
    let builder = Request::post(&url).cache(RequestCache::NoStore);
    log::debug!("POST {} (multipart)", url);
    let request = builder
        .body(form)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| unreachable("POST", &url, e))?;
    check("POST", &url, response).await.map(|_| ())
}

/// `DELETE path`; the response body is ignored.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let url = api_url(path);
    send("DELETE", &url, Request::delete(&url)).await.map(|_| ())
}
