use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

#[async_trait]
pub trait RateDataSource: Sync + Send {
    async fn fetch_rate(&self) -> RateResult;
}

/// Outcome of one fetch. Exactly one of price or message is present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RateResult {
    Success { price: String },
    Failure { message: String },
}

pub const STATUS_MESSAGE: &str = "No se pudo obtener el precio del dólar.";
pub const UNREACHABLE_MESSAGE: &str = "No se pudo conectar con el servidor.";
pub const MALFORMED_MESSAGE: &str = "Respuesta inesperada del servidor.";
pub const INTERRUPTED_MESSAGE: &str = "No se pudo completar la consulta.";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Unreachable(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl FetchError {
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Unreachable(_) => UNREACHABLE_MESSAGE,
            FetchError::Status(_) => STATUS_MESSAGE,
            FetchError::Malformed(_) => MALFORMED_MESSAGE,
        }
    }
}

impl From<FetchError> for RateResult {
    fn from(e: FetchError) -> RateResult {
        RateResult::Failure {
            message: e.user_message().to_owned(),
        }
    }
}
