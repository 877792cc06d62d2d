//! Custom hooks connecting components to the statistics cache.

use film_gender_stats::cache::{FetchStatus, Records, StatisticsCache};
use film_gender_stats::Dimension;
use log::warn;
use yew::prelude::*;

/// Snapshot of what the dashboard needs to render one dimension.
#[derive(Clone, PartialEq)]
pub struct DimensionStatistics {
    pub dimension: Dimension,
    /// Cached records, `None` until the first successful fetch.
    pub records: Option<Records>,
    pub status: FetchStatus,
    /// Shared session flags, as shown in the status banner.
    pub is_loading: bool,
    pub error: Option<String>,
    pub selected_country: String,
}

/// Re-render the calling component whenever the cache changes.
#[hook]
pub fn use_cache_updates(cache: &StatisticsCache) {
    let update = use_force_update();
    use_effect_with(cache.clone(), move |cache| {
        let listener = cache.on_change(move || update.force_update());
        let cache = cache.clone();
        move || {
            cache.remove_listener(listener);
        }
    });
}

/// Load `dimension` into the cache on first use and expose its state.
#[hook]
pub fn use_dimension_statistics(cache: &StatisticsCache, dimension: Dimension) -> DimensionStatistics {
    use_cache_updates(cache);

    {
        let cache = cache.clone();
        use_effect_with(dimension, move |&dimension| {
            wasm_bindgen_futures::spawn_local(async move {
                // The banner shows the failure; nothing else to do here.
                if let Err(err) = cache.ensure_loaded(dimension).await {
                    warn!("{err}");
                }
            });
            || ()
        });
    }

    DimensionStatistics {
        dimension,
        records: cache.records(dimension),
        status: cache.status(dimension),
        is_loading: cache.is_loading(),
        error: cache.error(),
        selected_country: cache.selected_country(),
    }
}
