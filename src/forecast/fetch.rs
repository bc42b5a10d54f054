// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;

use percent_encoding::AsciiSet;
use percent_encoding::CONTROLS;
use percent_encoding::utf8_percent_encode;

use crate::config::WeatherConfig;
use crate::forecast::error::ForecastError;
use crate::forecast::payload::RawForecastPayload;
use crate::forecast::resolve::ForecastSample;
use crate::forecast::resolve::resolve;

const HOURLY_FIELDS: &str = "temperature_2m,weathercode,precipitation_probability";
const DAILY_FIELDS: &str = "sunrise,sunset";

/// Characters escaped in query values. Commas stay literal, since the API
/// takes comma-separated field lists.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Builds the request for two days of hourly and daily data, in Fahrenheit,
/// in the location's own time zone.
pub fn forecast_url(config: &WeatherConfig) -> String {
    let params: [(&str, String); 7] = [
        ("latitude", format!("{:.4}", config.latitude)),
        ("longitude", format!("{:.4}", config.longitude)),
        ("hourly", HOURLY_FIELDS.to_string()),
        ("daily", DAILY_FIELDS.to_string()),
        ("temperature_unit", "fahrenheit".to_string()),
        ("timezone", "auto".to_string()),
        ("forecast_days", "2".to_string()),
    ];
    let query: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, QUERY_VALUE)))
        .collect();
    format!("{}?{}", config.endpoint, query.join("&"))
}

/// Performs the single forecast request. There are no retries.
pub async fn fetch_payload(config: &WeatherConfig) -> Result<RawForecastPayload, ForecastError> {
    let url = forecast_url(config);
    log::debug!("Fetching forecast from {url}");
    let client = reqwest::Client::builder()
        .timeout(config.timeout())
        .build()
        .map_err(fetch_failed)?;
    let response = client.get(&url).send().await.map_err(fetch_failed)?;
    let status = response.status();
    if !status.is_success() {
        return Err(ForecastError::FetchFailed(format!("HTTP {status}")));
    }
    let body = response.text().await.map_err(fetch_failed)?;
    serde_json::from_str(&body).map_err(fetch_failed)
}

/// Fetches the forecast and resolves tomorrow morning from it.
pub async fn load_forecast(config: &WeatherConfig) -> Result<ForecastSample, ForecastError> {
    let payload = fetch_payload(config).await?;
    resolve(&payload)
}

fn fetch_failed(e: impl Display) -> ForecastError {
    ForecastError::FetchFailed(e.to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use axum::Router;
    use axum::http::StatusCode;
    use axum::http::header::CONTENT_TYPE;
    use axum::routing::get;
    use tokio::net::TcpListener;
    use tokio::spawn;

    use super::*;
    use crate::error::ErrorReport;
    use crate::error::Fallible;
    use crate::forecast::condition::Condition;

    pub const FIXTURE: &str = include_str!("../../test/forecast.json");

    /// Serves the fixture at `/v1/forecast`, a 500 at `/broken`, and
    /// non-JSON at `/garbage`. `/flaky` fails its first request and serves
    /// the fixture after that. Returns the bound address.
    pub async fn start_stub() -> Fallible<SocketAddr> {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route(
                "/v1/forecast",
                get(|| async { (StatusCode::OK, [(CONTENT_TYPE, "application/json")], FIXTURE) }),
            )
            .route(
                "/broken",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "oops") }),
            )
            .route("/garbage", get(|| async { (StatusCode::OK, "<html>") }))
            .route(
                "/flaky",
                get(move || {
                    let hits = hits.clone();
                    async move {
                        if hits.fetch_add(1, Ordering::SeqCst) == 0 {
                            (StatusCode::SERVICE_UNAVAILABLE, [(CONTENT_TYPE, "text/plain")], "busy")
                        } else {
                            (StatusCode::OK, [(CONTENT_TYPE, "application/json")], FIXTURE)
                        }
                    }
                }),
            );
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        spawn(async move { axum::serve(listener, app).await });
        Ok(addr)
    }

    fn config(endpoint: String) -> WeatherConfig {
        WeatherConfig {
            endpoint,
            ..WeatherConfig::default()
        }
    }

    #[test]
    fn test_forecast_url() {
        let url = forecast_url(&WeatherConfig::default());
        assert_eq!(
            url,
            "https://api.open-meteo.com/v1/forecast?latitude=35.9940&longitude=-78.8986\
             &hourly=temperature_2m,weathercode,precipitation_probability\
             &daily=sunrise,sunset&temperature_unit=fahrenheit&timezone=auto&forecast_days=2"
        );
    }

    #[tokio::test]
    async fn test_load_forecast() -> Fallible<()> {
        let addr = start_stub().await?;
        let sample = load_forecast(&config(format!("http://{addr}/v1/forecast"))).await?;
        assert_eq!(sample.temperature, 58);
        assert_eq!(sample.condition, Condition::RainShowers);
        assert_eq!(sample.precipitation_probability, 65);
        assert_eq!(sample.sunrise, "6:29 AM");
        Ok(())
    }

    #[tokio::test]
    async fn test_error_status() -> Fallible<()> {
        let addr = start_stub().await?;
        let result = fetch_payload(&config(format!("http://{addr}/broken"))).await;
        assert!(matches!(result, Err(ForecastError::FetchFailed(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_undecodable_body() -> Fallible<()> {
        let addr = start_stub().await?;
        let result = fetch_payload(&config(format!("http://{addr}/garbage"))).await;
        assert!(matches!(result, Err(ForecastError::FetchFailed(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_flaky_endpoint_recovers() -> Fallible<()> {
        let addr = start_stub().await?;
        let config = config(format!("http://{addr}/flaky"));
        assert!(matches!(
            load_forecast(&config).await,
            Err(ForecastError::FetchFailed(_))
        ));
        assert_eq!(load_forecast(&config).await?.temperature, 58);
        Ok(())
    }

    #[tokio::test]
    async fn test_connection_refused() -> Fallible<()> {
        let port = portpicker::pick_unused_port().ok_or_else(|| ErrorReport::new("no free port"))?;
        let result = fetch_payload(&config(format!("http://127.0.0.1:{port}/v1/forecast"))).await;
        assert!(matches!(result, Err(ForecastError::FetchFailed(_))));
        Ok(())
    }
}
