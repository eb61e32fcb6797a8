//! HG Brasil weather API client

use reqwest::Client;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::state::{ForecastDay, WeatherReport};

pub use crate::error::FetchError;

// ============================================================================
// Payload
// ============================================================================

/// Error flag the service sets instead of `results` (bad key, quota, ...)
#[derive(Debug, Default, Deserialize)]
struct ServiceStatus {
    #[serde(default)]
    error: bool,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReportEnvelope {
    results: ResultsPayload,
}

#[derive(Debug, Deserialize)]
struct ResultsPayload {
    city: String,
    temp: f32,
    description: String,
    humidity: u8,
    wind_speedy: String,
    sunrise: String,
    sunset: String,
    forecast: Vec<ForecastPayload>,
}

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    weekday: String,
    date: String,
    description: String,
    min: f32,
    max: f32,
}

impl From<ForecastPayload> for ForecastDay {
    fn from(day: ForecastPayload) -> Self {
        ForecastDay {
            weekday: day.weekday,
            date: day.date,
            description: day.description,
            min: day.min,
            max: day.max,
        }
    }
}

impl From<ResultsPayload> for WeatherReport {
    fn from(results: ResultsPayload) -> Self {
        WeatherReport {
            city: results.city,
            temp: results.temp,
            description: results.description,
            humidity: results.humidity,
            wind_speedy: results.wind_speedy,
            sunrise: results.sunrise,
            sunset: results.sunset,
            forecast: results.forecast.into_iter().map(ForecastDay::from).collect(),
        }
    }
}

/// Validate a response body and turn it into a report.
///
/// Missing or mistyped fields are a [`FetchError::Payload`]; an explicit
/// `"error": true` from the service is a [`FetchError::Api`].
pub fn parse_report(body: &str) -> Result<WeatherReport, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    let status = ServiceStatus::deserialize(&value).unwrap_or_default();
    if status.error {
        let message = status
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(FetchError::Api(message));
    }

    let envelope: ReportEnvelope = serde_json::from_value(value)?;
    Ok(envelope.results.into())
}

// ============================================================================
// Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    config: ApiConfig,
}

impl WeatherClient {
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Full request URL for a city, relay prefix included when configured
    pub fn request_url(&self, city: &str) -> String {
        let mut params = Vec::with_capacity(2);
        if let Some(key) = &self.config.api_key {
            params.push(format!("key={}", urlencoding::encode(key)));
        }
        params.push(format!("city_name={}", urlencoding::encode(city)));
        let target = format!("{}?{}", self.config.endpoint, params.join("&"));

        match &self.config.relay_url {
            Some(relay) if relay.ends_with('/') => format!("{relay}{target}"),
            Some(relay) => format!("{relay}/{target}"),
            None => target,
        }
    }

    /// Fetch current conditions and forecast for a city
    pub async fn fetch_report(&self, city: &str) -> Result<WeatherReport, FetchError> {
        tracing::debug!(city, relay = self.config.relay_url.is_some(), "fetching weather");

        let response = self.http.get(self.request_url(city)).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(city, %status, "weather request failed");
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let report = parse_report(&body).inspect_err(|e| {
            tracing::warn!(city, error = %e, "weather payload rejected");
        })?;

        tracing::info!(
            city,
            resolved = %report.city,
            days = report.forecast.len(),
            "weather loaded"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RECIFE: &str = r#"{
        "by": "default",
        "valid_key": true,
        "results": {
            "city": "Recife",
            "temp": 28,
            "description": "sol",
            "humidity": 60,
            "wind_speedy": "10 km/h",
            "sunrise": "05:30",
            "sunset": "17:45",
            "condition_slug": "clear_day",
            "forecast": [
                {"weekday": "Seg", "date": "01/01", "description": "nublado", "min": 20, "max": 27},
                {"weekday": "Ter", "date": "02/01", "description": "chuva", "min": 22, "max": 26}
            ]
        }
    }"#;

    fn client(config: ApiConfig) -> WeatherClient {
        WeatherClient::new(config).unwrap()
    }

    #[test]
    fn test_parse_report() {
        let report = parse_report(RECIFE).unwrap();
        assert_eq!(report.city, "Recife");
        assert_eq!(report.temp, 28.0);
        assert_eq!(report.humidity, 60);
        assert_eq!(report.wind_speedy, "10 km/h");
        let weekdays: Vec<_> = report.forecast.iter().map(|d| d.weekday.as_str()).collect();
        assert_eq!(weekdays, vec!["Seg", "Ter"]);
    }

    #[test]
    fn test_parse_report_missing_field_is_payload_error() {
        let body = r#"{"results": {"city": "Recife", "temp": 28}}"#;
        assert!(matches!(parse_report(body), Err(FetchError::Payload(_))));
    }

    #[test]
    fn test_parse_report_wrong_type_is_payload_error() {
        let body = RECIFE.replace(r#""temp": 28"#, r#""temp": "hot""#);
        assert!(matches!(parse_report(&body), Err(FetchError::Payload(_))));
    }

    #[test]
    fn test_parse_report_service_error_flag() {
        let body = r#"{"error": true, "message": "Chave inválida"}"#;
        match parse_report(body) {
            Err(FetchError::Api(message)) => assert_eq!(message, "Chave inválida"),
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_report_not_json() {
        assert!(matches!(
            parse_report("<html>Too Many Requests</html>"),
            Err(FetchError::Payload(_))
        ));
    }

    #[test]
    fn test_request_url_direct() {
        let api = client(ApiConfig {
            api_key: Some("abc".into()),
            ..ApiConfig::new("https://api.example/weather")
        });
        assert_eq!(
            api.request_url("São Paulo,SP"),
            "https://api.example/weather?key=abc&city_name=S%C3%A3o%20Paulo%2CSP"
        );
    }

    #[test]
    fn test_request_url_without_key() {
        let api = client(ApiConfig::new("https://api.example/weather"));
        assert_eq!(
            api.request_url("Recife"),
            "https://api.example/weather?city_name=Recife"
        );
    }

    #[test]
    fn test_request_url_through_relay() {
        let api = client(ApiConfig {
            relay_url: Some("https://relay.example".into()),
            ..ApiConfig::new("https://api.example/weather")
        });
        assert_eq!(
            api.request_url("Recife"),
            "https://relay.example/https://api.example/weather?city_name=Recife"
        );
    }
}
