//! Country coordinates for the map view.
//!
//! The dashboard ships a pre-resolved `assets/country_coordinates.json`
//! (`code -> [longitude, latitude]`). It is produced offline by the
//! `fetch_coordinates` binary, which asks a REST-countries style API for each
//! code and keeps whatever resolves.

use crate::config::ensure_trailing_slash;
use log::{error, info};
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;
use url::Url;

const BUNDLED_COORDINATES: &str = include_str!("../assets/country_coordinates.json");

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Error)]
pub enum CoordinatesError {
    #[error("invalid coordinates file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid countries endpoint: {0}")]
    Url(#[from] url::ParseError),
}

/// Country code to `[longitude, latitude]`, kept in code order so the file
/// written by the offline tool is stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryCoordinates {
    entries: BTreeMap<String, [f64; 2]>,
}

impl CountryCoordinates {
    pub fn from_json(json: &str) -> Result<Self, CoordinatesError> {
        Ok(Self {
            entries: serde_json::from_str(json)?,
        })
    }

    /// Coordinates compiled into the application.
    pub fn bundled() -> Result<Self, CoordinatesError> {
        Self::from_json(BUNDLED_COORDINATES)
    }

    pub fn get(&self, code: &str) -> Option<LonLat> {
        self.entries
            .get(code)
            .map(|&[lon, lat]| LonLat { lon, lat })
    }

    pub fn insert(&mut self, code: impl Into<String>, at: LonLat) {
        self.entries.insert(code.into(), [at.lon, at.lat]);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String, CoordinatesError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

#[derive(Deserialize)]
struct CountryEntry {
    #[serde(default)]
    latlng: Option<Vec<f64>>,
}

/// Resolve every code in `codes` against `<base>/<code>`.
///
/// Codes that fail or come back without `latlng` are logged and left out.
pub async fn fetch_coordinates(
    client: &Client,
    base: &str,
    codes: &[&str],
) -> Result<CountryCoordinates, CoordinatesError> {
    let mut base = Url::parse(base)?;
    ensure_trailing_slash(&mut base);
    let mut coordinates = CountryCoordinates::default();

    for &code in codes {
        match fetch_one(client, &base, code).await {
            Ok(Some(at)) => coordinates.insert(code, at),
            Ok(None) => error!("No coordinates found for country code: {code}"),
            Err(e) => error!("Error fetching coordinates for country code {code}: {e}"),
        }
    }

    info!(
        "Resolved coordinates for {}/{} countries",
        coordinates.len(),
        codes.len()
    );
    Ok(coordinates)
}

async fn fetch_one(client: &Client, base: &Url, code: &str) -> Result<Option<LonLat>, String> {
    let url = base.join(code).map_err(|e| e.to_string())?;
    let resp = client.get(url).send().await.map_err(|e| e.to_string())?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("status {status}"));
    }
    let entries: Vec<CountryEntry> = resp.json().await.map_err(|e| e.to_string())?;
    let at = entries
        .into_iter()
        .next()
        .and_then(|entry| entry.latlng)
        .and_then(|latlng| match latlng[..] {
            [lat, lon, ..] => Some(LonLat { lon, lat }),
            _ => None,
        });
    Ok(at)
}
