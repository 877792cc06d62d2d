//! Statistics layer of the film gender-representation dashboard.
//!
//! The dashboard shows gender counts sliced by [`Dimension`]. Each
//! dimension's dataset is requested once through a [`StatisticsSource`] and
//! kept in the [`StatisticsCache`] for the rest of the session; views read
//! from the cache by key.

pub mod cache;
pub mod config;
pub mod countries;
pub mod dimension;
pub mod error;
pub mod geo;
pub mod logging;
pub mod record;
pub mod source;
pub mod utils;

pub use cache::{CacheStats, FetchStatus, StatisticsCache};
pub use dimension::Dimension;
pub use error::{FetchCause, StatsError};
pub use record::StatRecord;
pub use source::{HttpStatisticsSource, StatisticsSource};
