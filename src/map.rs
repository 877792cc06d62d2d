//! JavaScript interop for the Leaflet country map.
//! Provides Rust bindings to the helpers defined in map_helpers.js.

use film_gender_stats::config::{
    MAP_CENTER_LAT, MAP_CENTER_LNG, MAP_COUNTRY_ZOOM, MAP_DEFAULT_ZOOM, MAP_MIN_ZOOM,
    MAP_TILE_SIZE, MAP_ZOOM_OFFSET,
};
use film_gender_stats::geo::LonLat;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/map_helpers.js")]
extern "C" {
    #[wasm_bindgen(js_name = initMap)]
    fn init_map_js(
        container_id: &str,
        lat: f64,
        lng: f64,
        zoom: u8,
        tile_url: &str,
        tile_size: u32,
        zoom_offset: i32,
        min_zoom: u8,
    );

    #[wasm_bindgen(js_name = focusCountry)]
    fn focus_country_js(lat: f64, lng: f64, zoom: u8, label: &str);

    #[wasm_bindgen(js_name = clearCountry)]
    pub fn clear_country();
}

pub fn tile_url(api_key: &str) -> String {
    format!("https://api.maptiler.com/maps/streets-v2/{{z}}/{{x}}/{{y}}.png?key={api_key}")
}

/// Create (or recreate) the map inside `container_id` at the default view.
pub fn init_map(container_id: &str, api_key: &str) {
    init_map_js(
        container_id,
        MAP_CENTER_LAT,
        MAP_CENTER_LNG,
        MAP_DEFAULT_ZOOM,
        &tile_url(api_key),
        MAP_TILE_SIZE,
        MAP_ZOOM_OFFSET,
        MAP_MIN_ZOOM,
    );
}

/// Center the map on a country and drop a labelled marker there.
pub fn focus_country(at: LonLat, label: &str) {
    focus_country_js(at.lat, at.lon, MAP_COUNTRY_ZOOM, label);
}
