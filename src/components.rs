//! Yew view components for the statistics dashboard.
//!
//! Everything here renders from props; state lives in the statistics cache.

use crate::map;
use film_gender_stats::cache::{FetchStatus, StatisticsCache};
use film_gender_stats::geo::CountryCoordinates;
use film_gender_stats::utils::{
    display_order, female_share, format_share, validate_lookup_key, FEMALE_FIELD, MALE_FIELD,
};
use film_gender_stats::{countries, Dimension, StatRecord};
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

fn count_cell(record: &StatRecord, field: &str) -> String {
    record
        .count(field)
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Renders the table of every record cached for a dimension.
pub fn render_stats_table(dimension: Dimension, records: &[StatRecord]) -> Html {
    if records.is_empty() {
        return html! {
            <p class="no-results-message">{ "No statistics available" }</p>
        };
    }

    html! {
        <table class="stats-table">
            <thead>
                <tr>
                    <th>{ dimension.label() }</th>
                    <th>{ "Male" }</th>
                    <th>{ "Female" }</th>
                    <th>{ "Female share" }</th>
                </tr>
            </thead>
            <tbody>
                { display_order(dimension, records).into_iter().map(|record| {
                    render_stats_row(dimension, record)
                }).collect::<Html>() }
            </tbody>
        </table>
    }
}

fn render_stats_row(dimension: Dimension, record: &StatRecord) -> Html {
    let key = record.key(dimension).unwrap_or_default();
    let label = match (dimension, countries::name_for_code(&key)) {
        (Dimension::Country, Some(name)) => format!("{name} ({key})"),
        _ => key,
    };

    html! {
        <tr>
            <td>{ label }</td>
            <td>{ count_cell(record, MALE_FIELD) }</td>
            <td>{ count_cell(record, FEMALE_FIELD) }</td>
            <td>{ format_share(female_share(record)) }</td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
pub struct DimensionTabsProps {
    pub active: Dimension,
    pub onselect: Callback<Dimension>,
}

#[function_component(DimensionTabs)]
pub fn dimension_tabs(props: &DimensionTabsProps) -> Html {
    html! {
        <nav class="dimension-tabs">
            { Dimension::ALL.into_iter().map(|dimension| {
                let onselect = props.onselect.clone();
                html! {
                    <button
                        class={classes!((dimension == props.active).then_some("active"))}
                        onclick={Callback::from(move |_| onselect.emit(dimension))}
                    >
                        { dimension.label() }
                    </button>
                }
            }).collect::<Html>() }
        </nav>
    }
}

/// Loading indicator and the most recent fetch error.
#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub is_loading: bool,
    pub error: Option<String>,
    pub status: FetchStatus,
    pub onretry: Callback<()>,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    html! {
        <div class="status-banner">
            if props.is_loading {
                <p class="status-loading">{ "Loading statistics..." }</p>
            }
            if let Some(err) = &props.error {
                <p class="status-error">{ err }</p>
            }
            if let FetchStatus::Failed(_) = props.status {
                <button class="btn-secondary small" onclick={props.onretry.reform(|_| ())}>
                    { "Retry" }
                </button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CountrySelectProps {
    pub selected: String,
    pub onchange: Callback<String>,
}

#[function_component(CountrySelect)]
pub fn country_select(props: &CountrySelectProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            onchange.emit(select.value());
        })
    };

    html! {
        <div class="form-group">
            <label for="country-select">{ "Country:" }</label>
            <select id="country-select" {onchange}>
                <option value="" selected={props.selected.is_empty()}>{ "Select a country" }</option>
                { countries::names().map(|name| {
                    let selected = countries::code_for_name(name) == Some(props.selected.as_str());
                    html! { <option value={name} selected={selected}>{ name }</option> }
                }).collect::<Html>() }
            </select>
        </div>
    }
}

/// Statistics of the selected country, looked up from the cached slot.
#[derive(Properties, PartialEq)]
pub struct CountryDetailProps {
    pub cache: StatisticsCache,
    pub code: String,
}

#[function_component(CountryDetail)]
pub fn country_detail(props: &CountryDetailProps) -> Html {
    if props.code.is_empty() {
        return html! { <p class="no-results-message">{ "Pick a country to see its numbers." }</p> };
    }

    match props.cache.lookup(Dimension::Country, &props.code) {
        Ok(record) => html! {
            <dl class="country-detail">
                <dt>{ "Male" }</dt><dd>{ count_cell(&record, MALE_FIELD) }</dd>
                <dt>{ "Female" }</dt><dd>{ count_cell(&record, FEMALE_FIELD) }</dd>
                <dt>{ "Female share" }</dt><dd>{ format_share(female_share(&record)) }</dd>
            </dl>
        },
        Err(err) => html! { <p class="status-error">{ err.to_string() }</p> },
    }
}

/// Keyed lookup for the non-country dimensions.
#[derive(Properties, PartialEq)]
pub struct LookupFormProps {
    pub cache: StatisticsCache,
    pub dimension: Dimension,
}

#[function_component(LookupForm)]
pub fn lookup_form(props: &LookupFormProps) -> Html {
    let text = use_state(String::new);
    let result = use_state(|| None::<Result<StatRecord, String>>);

    {
        let text = text.clone();
        let result = result.clone();
        use_effect_with(props.dimension, move |_| {
            text.set(String::new());
            result.set(None);
            || ()
        });
    }

    let oninput = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text.set(input.value());
        })
    };

    let onsubmit = {
        let text = text.clone();
        let result = result.clone();
        let cache = props.cache.clone();
        let dimension = props.dimension;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let outcome = validate_lookup_key(dimension, &text)
                .and_then(|key| cache.lookup(dimension, &key).map_err(|err| err.to_string()));
            result.set(Some(outcome));
        })
    };

    html! {
        <form class="lookup-form" {onsubmit}>
            <input type="text" value={(*text).clone()} {oninput}
                placeholder={format!("Look up a {}", props.dimension.label().to_lowercase())} />
            <button type="submit">{ "Look up" }</button>
            { match &*result {
                Some(Ok(record)) => html! {
                    <p class="lookup-result">
                        { format!("{}: {} male, {} female ({} female)",
                            record.key(props.dimension).unwrap_or_default(),
                            count_cell(record, MALE_FIELD),
                            count_cell(record, FEMALE_FIELD),
                            format_share(female_share(record))) }
                    </p>
                },
                Some(Err(err)) => html! { <div class="input-error">{ err }</div> },
                None => html! {},
            } }
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct CountryMapProps {
    pub coordinates: Rc<CountryCoordinates>,
    pub code: String,
    pub api_key: String,
}

/// Leaflet map that follows the selected country.
#[function_component(CountryMap)]
pub fn country_map(props: &CountryMapProps) -> Html {
    {
        let api_key = props.api_key.clone();
        use_effect_with(api_key, |api_key| {
            map::init_map(film_gender_stats::config::MAP_CONTAINER_ID, api_key);
            || ()
        });
    }
    {
        let coordinates = props.coordinates.clone();
        use_effect_with(props.code.clone(), move |code| {
            match coordinates.get(code) {
                Some(at) => {
                    let label = countries::name_for_code(code).unwrap_or(code.as_str());
                    map::focus_country(at, label);
                }
                None => map::clear_country(),
            }
            || ()
        });
    }

    html! { <div id={film_gender_stats::config::MAP_CONTAINER_ID}></div> }
}
