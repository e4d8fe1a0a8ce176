use std::fmt::Display;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use folio::config::{normalize_base_path, normalize_base_url};
use folio::errors::ConfigError;
use folio::log::{info, warn};

pub const DEFAULT_BFF_BASE_URL: &str = "http://localhost:8001";

#[derive(Debug, Clone, PartialEq)]
pub struct ProxyConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Origin every `/api/*` request is forwarded to, without trailing slash.
    pub bff_base_url: String,
    /// Directory holding the built admin console.
    pub static_dir: PathBuf,
    /// Mount point of the whole app, e.g. `/admin`. Empty mounts at `/`.
    pub base_path: String,
}

impl ProxyConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Loads from an arbitrary variable source.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bff_base_url = normalize_base_url(&try_load::<String>(
            &lookup,
            "BFF_BASE_URL",
            DEFAULT_BFF_BASE_URL,
        )?);
        if !(bff_base_url.starts_with("http://") || bff_base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "BFF_BASE_URL".to_string(),
                reason: format!("{bff_base_url:?} is not an http(s) URL"),
            });
        }

        Ok(Self {
            host: try_load(&lookup, "FOLIO_PROXY_HOST", "127.0.0.1")?,
            port: try_load(&lookup, "FOLIO_PROXY_PORT", "3000")?,
            bff_base_url,
            static_dir: try_load(&lookup, "FOLIO_STATIC_DIR", "crates/folio-admin/dist")?,
            base_path: normalize_base_path(&try_load::<String>(
                &lookup,
                "FOLIO_BASE_PATH",
                "",
            )?),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default:?}");
        default.to_string()
    });
    raw.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key: key.to_string(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ProxyConfig::load_from(lookup(&[])).unwrap();
        assert_eq!(config.addr(), "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.bff_base_url, DEFAULT_BFF_BASE_URL);
        assert_eq!(config.static_dir, PathBuf::from("crates/folio-admin/dist"));
        assert_eq!(config.base_path, "");
    }

    #[test]
    fn bff_url_and_base_path_are_normalized() {
        let config = ProxyConfig::load_from(lookup(&[
            ("BFF_BASE_URL", "https://bff.example.com//"),
            ("FOLIO_BASE_PATH", "admin/"),
            ("FOLIO_PROXY_PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.bff_base_url, "https://bff.example.com");
        assert_eq!(config.base_path, "/admin");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = ProxyConfig::load_from(lookup(&[("FOLIO_PROXY_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("FOLIO_PROXY_PORT"));

        let err =
            ProxyConfig::load_from(lookup(&[("BFF_BASE_URL", "localhost:8001")])).unwrap_err();
        assert!(err.to_string().contains("BFF_BASE_URL"));
    }
}
