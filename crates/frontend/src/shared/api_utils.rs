//! API utilities for frontend-backend communication
//!
//! URL construction for the REST resources plus thin `gloo-net` wrappers that
//! map every failure onto [`ApiError`]. Error bodies are never parsed: a
//! non-2xx status is a failure and nothing more.

use contracts::domain::common::EntityId;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// The only recognised failure kind: the request did not produce a usable 2xx
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("failed to send request: {0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Serialize(String),
}

/// Collection URL, e.g. `http://host:5000/api/movies`
pub fn resource_url(base: &str, resource: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), resource)
}

/// Item URL, e.g. `http://host:5000/api/movies/7`
pub fn item_url(base: &str, resource: &str, id: EntityId) -> String {
    format!("{}/{}", resource_url(base, resource), id)
}

/// Paginated, filtered list URL.
///
/// The search parameter is sent only when the term is non-empty and `page`
/// only past the first page, so the first unfiltered page is the bare
/// collection URL.
pub fn list_url(base: &str, resource: &str, search_param: &str, page: u32, term: &str) -> String {
    let mut params: Vec<String> = Vec::new();
    if !term.is_empty() {
        params.push(format!("{}={}", search_param, urlencoding::encode(term)));
    }
    if page > 1 {
        params.push(format!("page={}", page));
    }

    let url = resource_url(base, resource);
    if params.is_empty() {
        url
    } else {
        format!("{}?{}", url, params.join("&"))
    }
}

async fn send(request: Request) -> Result<gloo_net::http::Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

/// `GET url` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);

    let request = Request::get(url)
        .header("Accept", "application/json")
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;

    send(request)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send `body` as JSON with the given builder's method and decode the reply
pub async fn send_json<B, T>(builder: RequestBuilder, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = builder
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?;

    send(request)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    log::debug!("POST {}", url);
    send_json(Request::post(url), body).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    log::debug!("PUT {}", url);
    send_json(Request::put(url), body).await
}

/// `DELETE url`; any 2xx (typically 204) is success
pub async fn delete(url: &str) -> Result<(), ApiError> {
    log::debug!("DELETE {}", url);

    let request = Request::delete(url)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send(request).await?;
    Ok(())
}
