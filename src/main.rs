//! Gender statistics dashboard built with Yew.
//! Wires the statistics cache, the per-dimension panels and the country map.

use film_gender_stats::cache::StatisticsCache;
use film_gender_stats::config::{maptiler_api_key, SourceConfig};
use film_gender_stats::geo::CountryCoordinates;
use film_gender_stats::source::HttpStatisticsSource;
use film_gender_stats::{logging, Dimension, StatsError};
use log::{error, info, LevelFilter};
use std::rc::Rc;
use yew::prelude::*;

mod components;
mod hooks;
mod map;

use components::{
    render_stats_table, CountryDetail, CountryMap, CountrySelect, DimensionTabs, LookupForm,
    StatusBanner,
};
use hooks::use_dimension_statistics;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub cache: StatisticsCache,
    pub coordinates: Rc<CountryCoordinates>,
    pub maptiler_key: String,
}

/// Primary dashboard component: tabs, status banner and the active panel.
#[function_component(Dashboard)]
fn dashboard(props: &DashboardProps) -> Html {
    let active = use_state(|| Dimension::Country);
    let stats = use_dimension_statistics(&props.cache, *active);

    let onselect = {
        let active = active.clone();
        Callback::from(move |dimension: Dimension| active.set(dimension))
    };

    let onretry = {
        let cache = props.cache.clone();
        let dimension = *active;
        Callback::from(move |_: ()| {
            let cache = cache.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = cache.ensure_loaded(dimension).await {
                    error!("Retry failed: {err}");
                }
            });
        })
    };

    let on_country = {
        let cache = props.cache.clone();
        Callback::from(move |name: String| cache.set_selected_country(&name))
    };

    let panel = match &stats.records {
        None => html! {},
        Some(records) if stats.dimension == Dimension::Country => html! {
            <>
                <div class="country-panel">
                    <div>
                        <CountrySelect selected={stats.selected_country.clone()} onchange={on_country} />
                        <CountryDetail cache={props.cache.clone()} code={stats.selected_country.clone()} />
                    </div>
                    <CountryMap
                        coordinates={props.coordinates.clone()}
                        code={stats.selected_country.clone()}
                        api_key={props.maptiler_key.clone()}
                    />
                </div>
                { render_stats_table(stats.dimension, records) }
            </>
        },
        Some(records) => html! {
            <>
                <LookupForm cache={props.cache.clone()} dimension={stats.dimension} />
                { render_stats_table(stats.dimension, records) }
            </>
        },
    };

    html! {
        <div class="container">
            <h1>{ "Gender Representation in Film" }</h1>
            <DimensionTabs active={*active} {onselect} />
            <StatusBanner
                is_loading={stats.is_loading}
                error={stats.error.clone()}
                status={stats.status.clone()}
                {onretry}
            />
            <div class="results-area">{ panel }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub cache: StatisticsCache,
    pub coordinates: Rc<CountryCoordinates>,
}

#[function_component]
pub fn App(props: &AppProps) -> Html {
    let maptiler_key = use_memo((), |_| maptiler_api_key());
    html! {
        <Dashboard
            cache={props.cache.clone()}
            coordinates={props.coordinates.clone()}
            maptiler_key={(*maptiler_key).clone()}
        />
    }
}

fn build_props() -> Result<AppProps, StatsError> {
    let source = HttpStatisticsSource::new(SourceConfig::from_env())?;
    let coordinates = CountryCoordinates::bundled().unwrap_or_else(|e| {
        error!("Country map disabled: {e}");
        CountryCoordinates::default()
    });
    Ok(AppProps {
        cache: StatisticsCache::new(source),
        coordinates: Rc::new(coordinates),
    })
}

/// Entry point: installs logging and renders the dashboard.
fn main() {
    console_error_panic_hook::set_once();
    logging::init(LevelFilter::Info);

    match build_props() {
        Ok(props) => {
            info!("Starting dashboard");
            yew::Renderer::<App>::with_props(props).render();
        }
        Err(err) => error!("Failed to start dashboard: {err}"),
    }
}
