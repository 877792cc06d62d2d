//! Application-level configuration constants and the statistics endpoint settings.

use crate::dimension::Dimension;
use crate::error::StatsError;
use std::time::Duration;
use url::Url;

// Environment settings
pub const STATISTICS_BASE_URL_VAR: &str = "GENDER_STATISTICS_API_BASE_URL";

// Network
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_REST_COUNTRIES_BASE_URL: &str = "https://restcountries.com/v3.1/alpha/";
pub const DEFAULT_COORDINATES_OUTPUT: &str = "assets/country_coordinates.json";

// Map view
pub const MAP_CONTAINER_ID: &str = "map";
pub const MAP_CENTER_LAT: f64 = 40.731253;
pub const MAP_CENTER_LNG: f64 = -73.996139;
pub const MAP_DEFAULT_ZOOM: u8 = 12;
pub const MAP_COUNTRY_ZOOM: u8 = 4;
pub const MAP_TILE_SIZE: u32 = 512;
pub const MAP_ZOOM_OFFSET: i32 = -1;
pub const MAP_MIN_ZOOM: u8 = 1;

/// Compile-time value of `var`, which is how a browser build receives its
/// environment. Native builds may override it from the process environment.
macro_rules! build_env {
    ($var:literal) => {{
        let baked: Option<&'static str> = option_env!($var);
        #[cfg(not(target_arch = "wasm32"))]
        let value = std::env::var($var).ok().or_else(|| baked.map(str::to_string));
        #[cfg(target_arch = "wasm32")]
        let value = baked.map(str::to_string);
        value
    }};
}

/// Where the statistics API lives and how long a request may take.
///
/// The base URL is kept raw and only validated when a request is built, so a
/// missing or broken value shows up as an error on the first fetch instead of
/// preventing startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub base_url: Option<String>,
    pub request_timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl SourceConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: build_env!("GENDER_STATISTICS_API_BASE_URL"),
            ..Self::default()
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Validated base URL, always ending in `/` so joins keep its path.
    pub fn base(&self) -> Result<Url, StatsError> {
        let raw = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                StatsError::Configuration(format!("{STATISTICS_BASE_URL_VAR} is not set"))
            })?;

        let mut url = Url::parse(raw).map_err(|e| {
            StatsError::Configuration(format!("{STATISTICS_BASE_URL_VAR} is not a valid URL: {e}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(StatsError::Configuration(format!(
                "{STATISTICS_BASE_URL_VAR} must be an http(s) URL, got {raw}"
            )));
        }
        ensure_trailing_slash(&mut url);
        Ok(url)
    }

    /// Full URL of the endpoint serving `dimension`.
    pub fn endpoint(&self, dimension: Dimension) -> Result<Url, StatsError> {
        self.base()?
            .join(dimension.segment())
            .map_err(|e| StatsError::Configuration(e.to_string()))
    }
}

/// Append `/` to the path of `url` so that `join` extends it instead of
/// replacing its last segment.
pub fn ensure_trailing_slash(url: &mut Url) {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
}

/// MapTiler key baked into the build, empty when absent.
pub fn maptiler_api_key() -> String {
    build_env!("MAPTILER_API_KEY").unwrap_or_default()
}
