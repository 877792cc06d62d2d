//! Statistics source: one request per dimension against the statistics API.

use crate::config::SourceConfig;
use crate::dimension::Dimension;
use crate::error::{FetchCause, StatsError};
use crate::record::StatRecord;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use log::debug;
use reqwest::{Client, Response};

/// Anything able to produce the full record list for a dimension.
///
/// Futures are `'static` but not `Send`: the dashboard runs on the browser's
/// single thread and the cache stores them in its slots.
pub trait StatisticsSource {
    fn fetch_dimension(
        &self,
        dimension: Dimension,
    ) -> LocalBoxFuture<'static, Result<Vec<StatRecord>, StatsError>>;
}

/// [`StatisticsSource`] backed by the REST statistics API.
#[derive(Clone, Debug)]
pub struct HttpStatisticsSource {
    client: Client,
    config: SourceConfig,
}

impl HttpStatisticsSource {
    pub fn new(config: SourceConfig) -> Result<Self, StatsError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .user_agent(concat!("film-gender-stats/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout);
        let client = builder
            .build()
            .map_err(|e| StatsError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    async fn get(client: Client, config: SourceConfig, dimension: Dimension) -> Result<Vec<StatRecord>, StatsError> {
        let url = config.endpoint(dimension)?;
        debug!("GET {url}");

        let resp = client.get(url).send().await.map_err(|e| {
            debug!("Error fetching {dimension} data: {e}");
            StatsError::fetch(dimension, FetchCause::Transport(e.to_string()))
        })?;

        let records = Self::handle(dimension, resp).await.map_err(|cause| {
            debug!("Error fetching {dimension} data: {cause}");
            StatsError::fetch(dimension, cause)
        })?;
        debug!("Received {} {dimension} records", records.len());
        Ok(records)
    }

    async fn handle(dimension: Dimension, resp: Response) -> Result<Vec<StatRecord>, FetchCause> {
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FetchCause::Transport(e.to_string()))?;
        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            return Err(FetchCause::Status {
                status: status.as_u16(),
                body,
            });
        }
        let records: Vec<StatRecord> =
            serde_json::from_slice(&bytes).map_err(|e| FetchCause::Decode(e.to_string()))?;
        if let Some(pos) = records.iter().position(|r| r.key(dimension).is_none()) {
            return Err(FetchCause::Decode(format!(
                "record {pos} has no `{}` key",
                dimension.key_field()
            )));
        }
        Ok(records)
    }
}

impl StatisticsSource for HttpStatisticsSource {
    fn fetch_dimension(
        &self,
        dimension: Dimension,
    ) -> LocalBoxFuture<'static, Result<Vec<StatRecord>, StatsError>> {
        Self::get(self.client.clone(), self.config.clone(), dimension).boxed_local()
    }
}
