//! HTTP plumbing shared by the per-domain API modules.
//!
//! Every call goes through [`get_json`], [`post_json`], [`put_json`] or
//! [`put_optional`], which map transport failures, non-2xx answers and bad
//! payloads onto [`ApiError`]. Nothing here retries: the user re-triggers.

use contracts::domain::common::ApiMessage;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Used when `VENTAS_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

fn resolve_base(configured: Option<&str>) -> String {
    configured
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .to_string()
}

/// Base URL of the sales backend.
pub fn api_base() -> String {
    resolve_base(option_env!("VENTAS_API_BASE_URL"))
}

/// Build a full API URL from a path starting with `/`.
///
/// ```ignore
/// let url = api_url("/vendedores/12");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never got an answer.
    #[error("No se pudo conectar con el servidor. Verifique su conexión e intente nuevamente.")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    /// 404 on a lookup.
    #[error("{0}")]
    NotFound(String),
    /// 400 on a lookup: the backend refused on a business rule.
    #[error("{0}")]
    Rejected(String),
    #[error("Respuesta inesperada del servidor: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build the error for a non-2xx answer. `operation` completes the
    /// sentence "Error al ..." when the body carries no message.
    pub fn from_response(status: u16, body: &str, operation: &str) -> Self {
        let message = serde_json::from_str::<ApiMessage>(body)
            .ok()
            .and_then(|m| m.text().map(str::to_string))
            .unwrap_or_else(|| format!("Error al {} (HTTP {})", operation, status));
        ApiError::Http { status, message }
    }

    /// Reclassify 404/400 for endpoints where those are expected outcomes
    /// rendered inline rather than as failures.
    pub fn into_lookup(self) -> Self {
        match self {
            ApiError::Http { status: 404, message } => ApiError::NotFound(message),
            ApiError::Http { status: 400, message } => ApiError::Rejected(message),
            other => other,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::NotFound(_) => Some(404),
            ApiError::Rejected(_) => Some(400),
            _ => None,
        }
    }

    pub fn is_business_outcome(&self) -> bool {
        matches!(self, ApiError::NotFound(_) | ApiError::Rejected(_))
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    log::warn!("request failed: {}", e);
    ApiError::Network(e.to_string())
}

async fn check(response: Response, operation: &str) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("{} {} -> HTTP {}", operation, response.url(), status);
    Err(ApiError::from_response(status, &body, operation))
}

async fn read_json<T: DeserializeOwned>(
    response: Response,
    operation: &str,
) -> Result<T, ApiError> {
    check(response, operation)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Empty bodies (204, or 200 with nothing) yield `None`.
async fn read_optional_json<T: DeserializeOwned>(
    response: Response,
    operation: &str,
) -> Result<Option<T>, ApiError> {
    let text = check(response, operation)
        .await?
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str, operation: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(network)?;
    read_json(response, operation).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    operation: &str,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(network)?;
    read_json(response, operation).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    operation: &str,
) -> Result<T, ApiError> {
    let response = Request::put(&api_url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(network)?;
    read_json(response, operation).await
}

/// `PUT` without a body; the answer may or may not carry the updated record.
pub async fn put_optional<T: DeserializeOwned>(
    path: &str,
    operation: &str,
) -> Result<Option<T>, ApiError> {
    let response = Request::put(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(network)?;
    read_optional_json(response, operation).await
}

/// `?page=0&size=10` plus any extra pairs, values URL-encoded.
pub fn page_query(page: usize, size: usize, extra: &[(&str, &str)]) -> String {
    let mut query = format!("?page={}&size={}", page, size);
    for (key, value) in extra {
        query.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_base() {
        assert_eq!(resolve_base(None), DEFAULT_API_BASE);
        assert_eq!(resolve_base(Some("")), DEFAULT_API_BASE);
        assert_eq!(
            resolve_base(Some("https://ventas.example.pe/api/")),
            "https://ventas.example.pe/api"
        );
    }

    #[test]
    fn test_error_uses_server_message() {
        let err =
            ApiError::from_response(409, r#"{"message":"El código ya existe"}"#, "crear el cupón");
        assert_eq!(err.to_string(), "El código ya existe");

        let err =
            ApiError::from_response(400, r#"{"mensaje":"Vendedor inactivo"}"#, "buscar vendedor");
        assert_eq!(err.to_string(), "Vendedor inactivo");
    }

    #[test]
    fn test_error_fallback_names_status_and_operation() {
        let err = ApiError::from_response(500, "<html>oops</html>", "actualizar el cupón");
        assert_eq!(err.to_string(), "Error al actualizar el cupón (HTTP 500)");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_lookup_reclassification() {
        let not_found = ApiError::from_response(404, "", "buscar vendedor").into_lookup();
        assert!(matches!(not_found, ApiError::NotFound(_)));
        assert!(not_found.is_business_outcome());

        let rejected = ApiError::from_response(400, r#"{"message":"Inactivo"}"#, "buscar vendedor")
            .into_lookup();
        assert_eq!(rejected, ApiError::Rejected("Inactivo".into()));

        let server = ApiError::from_response(503, "", "buscar vendedor").into_lookup();
        assert!(!server.is_business_outcome());
    }

    #[test]
    fn test_page_query_encodes_values() {
        assert_eq!(
            page_query(2, 10, &[("sortBy", "fechaVentaCreada"), ("sortDir", "desc")]),
            "?page=2&size=10&sortBy=fechaVentaCreada&sortDir=desc"
        );
        assert_eq!(page_query(0, 5, &[("q", "Juan Pérez")]), "?page=0&size=5&q=Juan%20P%C3%A9rez");
    }
}
