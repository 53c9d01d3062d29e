use serde::Deserialize;
use thiserror::Error;

/// Shown when the service sends neither a detail nor a status text
/// (HTTP/2 responses carry no reason phrase).
pub const UNKNOWN_HTTP_ERROR: &str = "Erro desconhecido do servidor";

/// Failure of a single call to the departmentalization service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never reached the service (fetch rejected).
    #[error("Não foi possível conectar com a API em {base_url}. Verifique se o servidor está rodando.")]
    Unreachable { base_url: String },

    /// The service answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The body could not be decoded into the expected type.
    #[error("Resposta inválida da API: {0}")]
    Decode(String),

    /// The request could not be built (body serialization, form data).
    #[error("Falha ao montar a requisição: {0}")]
    Request(String),
}

impl ApiError {
    /// Build an HTTP error from the raw response body.
    ///
    /// The service reports failures as `{ "detail": ... }`; when the body has
    /// no usable detail the status text is used instead.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let message = ErrorBody::parse(body)
            .and_then(|b| b.detail)
            .map(|d| d.message())
            .filter(|m| !m.is_empty())
            .or_else(|| Some(status_text.trim().to_string()).filter(|t| !t.is_empty()))
            .unwrap_or_else(|| UNKNOWN_HTTP_ERROR.to_string());
        ApiError::Http { status, message }
    }

    /// Message suitable for a notification body; HTTP failures keep their
    /// status, e.g. "HTTP 400: Banco não encontrado".
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

impl ErrorBody {
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetailItem {
    pub msg: String,
}

/// `detail` is either a plain message or a list of validation items.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Items(Vec<ErrorDetailItem>),
    Other(serde_json::Value),
}

impl ErrorDetail {
    pub fn message(&self) -> String {
        match self {
            ErrorDetail::Message(m) => m.clone(),
            ErrorDetail::Items(items) => items
                .iter()
                .map(|i| i.msg.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            ErrorDetail::Other(v) => v.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        let err = ApiError::from_response(400, "Bad Request", r#"{"detail":"Banco não encontrado"}"#);
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                message: "Banco não encontrado".to_string()
            }
        );
        assert_eq!(err.user_message(), "HTTP 400: Banco não encontrado");
    }

    #[test]
    fn test_list_detail_is_joined() {
        let body = r#"{"detail":[{"msg":"campo obrigatório","loc":["body","nome_banco"]},{"msg":"valor inválido"}]}"#;
        let err = ApiError::from_response(422, "Unprocessable Entity", body);
        assert_eq!(err.user_message(), "HTTP 422: campo obrigatório, valor inválido");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_other_detail_is_rendered_as_json() {
        let err = ApiError::from_response(500, "Internal Server Error", r#"{"detail":{"code":7}}"#);
        assert_eq!(err.user_message(), r#"HTTP 500: {"code":7}"#);
    }

    #[test]
    fn test_missing_detail_falls_back_to_status_text() {
        let err = ApiError::from_response(502, "Bad Gateway", "<html>proxy</html>");
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
        assert_eq!(err.user_message(), "HTTP 502: Bad Gateway");

        let err = ApiError::from_response(404, "Not Found", r#"{"other":1}"#);
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn test_empty_status_text_keeps_status_in_message() {
        let err = ApiError::from_response(502, "", "<html>proxy</html>");
        assert_eq!(err.user_message(), format!("HTTP 502: {}", UNKNOWN_HTTP_ERROR));

        let err = ApiError::from_response(503, "  ", "");
        assert!(err.user_message().starts_with("HTTP 503: "));
        assert!(!err.user_message().ends_with(": "));
    }

    #[test]
    fn test_unreachable_embeds_base_url() {
        let err = ApiError::Unreachable {
            base_url: "http://10.0.0.1:8000".to_string(),
        };
        assert!(err.user_message().contains("http://10.0.0.1:8000"));
        assert_eq!(err.status(), None);
    }
}
