//! Alpha Vantage API client for monthly adjusted price history.
//!
//! Note: the free tier has very limited rate limits (25 requests/day,
//! 5/minute); throttle notices arrive as a 200 response with a `Note` or
//! `Information` body instead of an error status.

use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::types::RawObservation;

const ALPHA_VANTAGE_URL: &str = "https://www.alphavantage.co/query";

/// Monthly adjusted time series response.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthlyAdjustedResponse {
    #[serde(rename = "Meta Data")]
    pub meta_data: Option<MetaData>,
    #[serde(rename = "Monthly Adjusted Time Series")]
    pub time_series: Option<HashMap<String, MonthlyPoint>>,
    #[serde(rename = "Note")]
    pub note: Option<String>,
    #[serde(rename = "Information")]
    pub information: Option<String>,
    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,
}

/// Time series meta data.
#[derive(Debug, Clone, Deserialize)]
pub struct MetaData {
    #[serde(rename = "1. Information")]
    pub information: Option<String>,
    #[serde(rename = "2. Symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "3. Last Refreshed")]
    pub last_refreshed: Option<String>,
}

/// One month of adjusted OHLC data. Alpha Vantage serializes every number
/// as a string.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthlyPoint {
    #[serde(rename = "1. open")]
    pub open: String,
    #[serde(rename = "2. high")]
    pub high: String,
    #[serde(rename = "3. low")]
    pub low: String,
    #[serde(rename = "4. close")]
    pub close: String,
    #[serde(rename = "5. adjusted close")]
    pub adjusted_close: String,
    #[serde(rename = "6. volume")]
    pub volume: String,
    #[serde(rename = "7. dividend amount")]
    pub dividend_amount: String,
}

/// Alpha Vantage API client.
pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
}

impl AlphaVantageClient {
    /// Create a new Alpha Vantage client.
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Fetch the full monthly adjusted close history for a symbol.
    ///
    /// Returns unordered observations; the normalizer owns ordering,
    /// deduplication, and windowing. No retry on failure.
    pub async fn monthly_adjusted(
        &self,
        symbol: &str,
    ) -> Result<Vec<RawObservation>, FetchError> {
        let url = format!(
            "{}?function=TIME_SERIES_MONTHLY_ADJUSTED&symbol={}&apikey={}",
            ALPHA_VANTAGE_URL, symbol, self.api_key
        );

        debug!(symbol, "fetching monthly adjusted series");
        let response = self.client.get(&url).send().await?;
        let response = response.error_for_status()?;
        let text = response.text().await?;
        let body: MonthlyAdjustedResponse = serde_json::from_str(&text)?;

        parse_monthly_response(body, symbol)
    }
}

/// Map an Alpha Vantage response body onto observations or a typed error.
///
/// Alpha Vantage reports throttling and bad symbols inside a 200 body, so
/// the shape of the payload is the real error surface.
pub fn parse_monthly_response(
    body: MonthlyAdjustedResponse,
    symbol: &str,
) -> Result<Vec<RawObservation>, FetchError> {
    if let Some(note) = body.note {
        return Err(FetchError::RateLimited(note));
    }
    if let Some(information) = body.information {
        return Err(FetchError::RateLimited(information));
    }
    if let Some(message) = body.error_message {
        return Err(FetchError::InvalidSymbol(message));
    }

    let series = body
        .time_series
        .ok_or_else(|| FetchError::NoData(format!("no monthly series for {}", symbol)))?;
    if series.is_empty() {
        return Err(FetchError::NoData(format!("empty monthly series for {}", symbol)));
    }

    let observations: Vec<RawObservation> = series
        .into_iter()
        .filter_map(|(date_str, point)| {
            let date = chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                .map_err(|e| warn!(date = %date_str, "skipping unparseable date: {}", e))
                .ok()?;
            let adjusted_close: f64 = point
                .adjusted_close
                .parse()
                .map_err(|e| warn!(date = %date_str, "skipping unparseable close: {}", e))
                .ok()?;
            Some(RawObservation::new(date, adjusted_close))
        })
        .collect();

    if observations.is_empty() {
        return Err(FetchError::NoData(format!(
            "no parseable observations for {}",
            symbol
        )));
    }

    debug!(symbol, count = observations.len(), "parsed monthly series");
    Ok(observations)
}
