use std::{str::FromStr, sync::Arc};

use async_trait::async_trait;
use log::{error, info};
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::datasource::{FetchError, RateDataSource, RateResult};

pub const DOLARAPI_URL: &str = "https://ve.dolarapi.com/v1/dolares";

pub struct DolarApiRateDataSource {
    client: Arc<Client>,
    url: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct DollarQuote {
    fuente: Option<String>,
    #[serde(default)]
    promedio: JsonValue,
    fecha_actualizacion: Option<String>,
}

impl DolarApiRateDataSource {
    pub fn new(client: Arc<Client>, url: String) -> DolarApiRateDataSource {
        DolarApiRateDataSource { client, url }
    }

    async fn run_query(&self) -> Result<String, FetchError> {
        let resp_payload = self.client.get(&self.url).send().await?;
        info!("DolarApi response code: {}", resp_payload.status());
        if resp_payload.status() != StatusCode::OK {
            return Err(FetchError::Status(resp_payload.status()));
        }
        let body = resp_payload.text().await?;
        let quotes: Vec<DollarQuote> =
            serde_json::from_str(&body).map_err(|e| FetchError::Malformed(e.to_string()))?;
        let quote = quotes
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::Malformed("no records".to_owned()))?;
        info!(
            "DolarApi: {} {} ({})",
            quote.fuente.as_deref().unwrap_or("?"),
            quote.promedio,
            quote.fecha_actualizacion.as_deref().unwrap_or("?")
        );
        average_text(&quote.promedio)
    }
}

/// Text of `promedio` exactly as written upstream, provided it is a plain
/// decimal. Exponent forms and padded strings are rejected.
fn average_text(value: &JsonValue) -> Result<String, FetchError> {
    let text = match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Null => return Err(FetchError::Malformed("missing promedio".to_owned())),
        other => return Err(FetchError::Malformed(format!("promedio is {}", other))),
    };
    Decimal::from_str(&text)
        .map_err(|e| FetchError::Malformed(format!("promedio {:?}: {}", text, e)))?;
    Ok(text)
}

#[async_trait]
impl RateDataSource for DolarApiRateDataSource {
    async fn fetch_rate(&self) -> RateResult {
        match self.run_query().await {
            Ok(price) => RateResult::Success { price },
            Err(e) => {
                error!("DolarApi: {}", e);
                e.into()
            }
        }
    }
}
