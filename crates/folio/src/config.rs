//! Client configuration.

/// Environment variable naming the BFF origin, e.g. `http://localhost:8001`.
pub const BFF_BASE_URL_VAR: &str = "FOLIO_BFF_BASE_URL";

/// Environment variable naming the path the console is mounted under, e.g. `/admin`.
pub const BASE_PATH_VAR: &str = "FOLIO_BASE_PATH";

/// Where the admin client sends requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Builds a config from an explicit base URL. Trailing slashes are dropped;
    /// a blank value selects relative routing.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()),
        }
    }

    /// Relative routing: requests go to `/api/...` on the page's own origin.
    pub fn relative() -> Self {
        Self::default()
    }

    /// Relative routing under a mount point: `/admin` sends requests to
    /// `/admin/api/...`, which is where the proxy nests its `/api` route.
    pub fn mounted_at(base_path: &str) -> Self {
        Self {
            base_url: normalize_base_path(base_path),
        }
    }

    /// Reads [`BFF_BASE_URL_VAR`] and [`BASE_PATH_VAR`]. In the browser build
    /// both values are baked in at compile time.
    pub fn from_env() -> Self {
        #[cfg(target_arch = "wasm32")]
        let (configured, base_path) = (
            option_env!("FOLIO_BFF_BASE_URL").map(str::to_string),
            option_env!("FOLIO_BASE_PATH").map(str::to_string),
        );
        #[cfg(not(target_arch = "wasm32"))]
        let (configured, base_path) = (
            std::env::var(BFF_BASE_URL_VAR).ok(),
            std::env::var(BASE_PATH_VAR).ok(),
        );

        Self::from_values(configured.as_deref(), base_path.as_deref())
    }

    /// An explicit BFF origin wins; otherwise requests stay relative to the
    /// console's mount point.
    pub fn from_values(bff_base_url: Option<&str>, base_path: Option<&str>) -> Self {
        match bff_base_url {
            Some(value) => Self::new(value),
            None => {
                let config = Self::mounted_at(base_path.unwrap_or_default());
                tracing::debug!(
                    "{BFF_BASE_URL_VAR} not set, using relative {}/api routing",
                    config.base_url
                );
                config
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// True when requests resolve against the page's origin, with or without
    /// a mount prefix.
    pub fn is_relative(&self) -> bool {
        self.base_url.is_empty() || self.base_url.starts_with('/')
    }

    /// Joins the base with an absolute path such as `/api/admin/session`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Human readable description of the endpoint, used in transport errors.
    pub fn describe(&self) -> String {
        if self.is_relative() {
            format!(
                "relative {}/api routing (no {BFF_BASE_URL_VAR} configured; check the /api proxy)",
                self.base_url
            )
        } else {
            self.base_url.clone()
        }
    }
}

/// Trims whitespace and trailing slashes.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// `admin/` and `/admin/` both become `/admin`; blank stays blank.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = ClientConfig::new("http://localhost:8001///");
        assert_eq!(config.base_url(), "http://localhost:8001");
        assert_eq!(
            config.url_for("/api/admin/session"),
            "http://localhost:8001/api/admin/session"
        );
    }

    #[test]
    fn test_blank_base_is_relative() {
        let config = ClientConfig::new("   ");
        assert!(config.is_relative());
        assert_eq!(config.url_for("/api/admin/pages"), "/api/admin/pages");
        assert!(config.describe().contains("relative /api"));
    }

    #[test]
    fn test_describe_names_the_base() {
        let config = ClientConfig::new("https://bff.example.com");
        assert_eq!(config.describe(), "https://bff.example.com");
    }

    #[test]
    fn test_mount_point_prefixes_relative_requests() {
        let config = ClientConfig::from_values(None, Some("admin/"));
        assert!(config.is_relative());
        assert_eq!(config.base_url(), "/admin");
        assert_eq!(
            config.url_for("/api/admin/session"),
            "/admin/api/admin/session"
        );
        assert!(config.describe().contains("relative /admin/api"));
    }

    #[test]
    fn test_explicit_origin_ignores_mount_point() {
        let config = ClientConfig::from_values(Some("http://localhost:8001/"), Some("/admin"));
        assert!(!config.is_relative());
        assert_eq!(
            config.url_for("/api/admin/skills"),
            "http://localhost:8001/api/admin/skills"
        );
    }

    #[test]
    fn test_blank_mount_point_is_plain_relative() {
        assert_eq!(ClientConfig::from_values(None, Some(" / ")), ClientConfig::relative());
        assert_eq!(ClientConfig::from_values(None, None), ClientConfig::relative());
    }
}
