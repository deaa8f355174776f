use std::env;

use axum::http::HeaderValue;
use thiserror::Error;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("PORT must be an integer between 0 and 65535, got '{0}'")]
    InvalidPort(String),
    #[error("CORS origin '{0}' is not a valid header value")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub cors_origins: Vec<String>,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cors_origins: split_origins(DEFAULT_CORS_ORIGINS),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    ///
    /// Reads `CORS_ORIGINS`, `HOST` and `PORT` from the environment,
    /// loading a `.env` file first if one exists.
    ///
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|origins| split_origins(&origins))
            .unwrap_or(defaults.cors_origins);
        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|_| Error::InvalidPort(port))?,
            None => defaults.port,
        };

        Ok(Self { cors_origins, host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    ///
    /// Allows the configured origins with credentials. Methods and headers
    /// are mirrored from the request, since credentials rule out `*`.
    /// A `*` origin mirrors the request origin as well.
    ///
    pub fn cors_layer(&self) -> Result<CorsLayer> {
        let allow_origin = if self.cors_origins.iter().any(|o| o == "*") {
            AllowOrigin::mirror_request()
        } else {
            let origins = self.cors_origins.iter()
                .map(|o| HeaderValue::from_str(o).map_err(|_| Error::InvalidOrigin(o.clone())))
                .collect::<Result<Vec<_>>>()?;
            AllowOrigin::list(origins)
        };

        Ok(
            CorsLayer::new()
                .allow_origin(allow_origin)
                .allow_credentials(true)
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
        )
    }
}

fn split_origins(origins: &str) -> Vec<String> {
    origins.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::{Config, Error};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() -> anyhow::Result<()> {
        let config = Config::from_lookup(lookup(&[]))?;

        assert_eq!(vec![String::from("http://localhost:3000")], config.cors_origins);
        assert_eq!("0.0.0.0:8000", config.bind_addr());
        assert_eq!(Config::default(), config);

        Ok(())
    }

    #[test]
    fn test_overrides() -> anyhow::Result<()> {
        let config = Config::from_lookup(lookup(&[
            ("CORS_ORIGINS", "http://a.example, https://b.example,,"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9001"),
        ]))?;

        assert_eq!(
            vec![String::from("http://a.example"), String::from("https://b.example")],
            config.cors_origins
        );
        assert_eq!("127.0.0.1:9001", config.bind_addr());

        Ok(())
    }

    #[test]
    fn test_invalid_port() {
        let res = Config::from_lookup(lookup(&[("PORT", "eighty")]));
        assert!(matches!(res, Err(Error::InvalidPort(port)) if port == "eighty"));

        let res = Config::from_lookup(lookup(&[("PORT", "70000")]));
        assert!(matches!(res, Err(Error::InvalidPort(_))));
    }

    #[test]
    fn test_cors_layer() -> anyhow::Result<()> {
        Config::default().cors_layer()?;
        Config::from_lookup(lookup(&[("CORS_ORIGINS", "*")]))?.cors_layer()?;

        let res = Config::from_lookup(lookup(&[("CORS_ORIGINS", "http://bad\norigin")]))?.cors_layer();
        assert!(matches!(res, Err(Error::InvalidOrigin(_))));

        Ok(())
    }
}
