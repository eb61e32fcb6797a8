//! Runtime configuration, injected from the command line and environment

use std::path::PathBuf;
use std::time::Duration;

use crate::state::DEFAULT_CITY;

pub const DEFAULT_ENDPOINT: &str = "https://api.hgbrasil.com/weather";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Command line flags for the weather service connection
#[derive(clap::Args, Debug, Clone)]
pub struct ConfigArgs {
    /// City to show on startup (e.g. "Recife,PE")
    #[arg(long, short, default_value = DEFAULT_CITY)]
    pub city: String,

    /// HG Brasil API key; without one the service may ignore the city and
    /// answer for its default location
    #[arg(long, env = "HG_WEATHER_KEY")]
    pub api_key: Option<String>,

    /// Weather endpoint
    #[arg(long, env = "CLIMA_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// CORS relay prefixed to every request (direct call when unset)
    #[arg(long, env = "CLIMA_RELAY_URL")]
    pub relay: Option<String>,

    /// Page that grants temporary access to the relay (defaults to <relay>/corsdemo)
    #[arg(long, env = "CLIMA_RELAY_ACCESS_URL")]
    pub relay_access_url: Option<String>,

    /// Request timeout in seconds (minimum 1)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Write logs to this file (the terminal belongs to the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Everything the HTTP client needs to build a request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub relay_url: Option<String>,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            relay_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub city: String,
    pub api: ApiConfig,
    pub relay_access_url: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl From<ConfigArgs> for Config {
    fn from(args: ConfigArgs) -> Self {
        let relay_url = non_blank(args.relay);
        let relay_access_url = non_blank(args.relay_access_url).or_else(|| {
            relay_url
                .as_deref()
                .map(|relay| format!("{}/corsdemo", relay.trim_end_matches('/')))
        });
        let city = match args.city.trim() {
            "" => DEFAULT_CITY.to_string(),
            city => city.to_string(),
        };

        Self {
            city,
            api: ApiConfig {
                endpoint: args.endpoint,
                api_key: non_blank(args.api_key),
                relay_url,
                timeout: Duration::from_secs(args.timeout),
            },
            relay_access_url,
            log_file: args.log_file,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["clima"];
        argv.extend_from_slice(args);
        TestCli::parse_from(argv).config.into()
    }

    #[test]
    fn test_endpoint_and_timeout_defaults() {
        let config = parse(&["--endpoint", DEFAULT_ENDPOINT]);
        assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.api.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_relay_derives_access_page() {
        let config = parse(&["--relay", "https://relay.example/"]);
        assert_eq!(config.api.relay_url.as_deref(), Some("https://relay.example/"));
        assert_eq!(
            config.relay_access_url.as_deref(),
            Some("https://relay.example/corsdemo")
        );
    }

    #[test]
    fn test_explicit_access_page_wins() {
        let config = parse(&[
            "--relay",
            "https://relay.example",
            "--relay-access-url",
            "https://relay.example/unlock",
        ]);
        assert_eq!(
            config.relay_access_url.as_deref(),
            Some("https://relay.example/unlock")
        );
    }

    #[test]
    fn test_blank_city_falls_back_to_default() {
        let config = parse(&["--city", "   "]);
        assert_eq!(config.city, DEFAULT_CITY);
    }

    #[test]
    fn test_api_key_help_warns_about_keyless_queries() {
        use clap::CommandFactory;

        let command = TestCli::command();
        let help = command
            .get_arguments()
            .find(|arg| arg.get_id() == "api_key")
            .and_then(|arg| arg.get_help())
            .map(ToString::to_string)
            .unwrap_or_default();
        assert!(help.contains("default location"), "help was: {help}");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(TestCli::try_parse_from(["clima", "--timeout", "0"]).is_err());
    }
}
