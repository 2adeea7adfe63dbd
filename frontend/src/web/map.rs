//! Leaflet 地图 FFI
//!
//! 只做 JS 调用的包装。Leaflet 由 index.html 通过 script 标签加载，
//! 未加载时渲染函数返回 false，页面仍然显示站点列表。

use charger_club::shared::ChargingStation;
use charger_club::stations::{self, DEFAULT_MAP_ZOOM};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = r#"
let map = null;
let layer = null;
let handler = null;

export function render_station_map(containerId, lat, lng, zoom, markersJson, onDetails) {
    const L = window.L;
    const el = document.getElementById(containerId);
    if (!L || !el) {
        return false;
    }
    handler = onDetails;
    if (!map || map.getContainer() !== el) {
        if (map) {
            map.remove();
        }
        map = L.map(el);
        L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
            attribution: "&copy; OpenStreetMap contributors",
        }).addTo(map);
        layer = L.layerGroup().addTo(map);
        map.on("popupopen", (event) => {
            const button = event.popup.getElement().querySelector("button[data-station-id]");
            if (button && handler) {
                button.onclick = () => handler(button.dataset.stationId);
            }
        });
    }
    map.setView([lat, lng], zoom);
    layer.clearLayers();
    for (const m of JSON.parse(markersJson)) {
        L.marker([m.lat, m.lng]).bindPopup(m.popup_html).addTo(layer);
    }
    return true;
}
"#)]
extern "C" {
    fn render_station_map(
        container_id: &str,
        lat: f64,
        lng: f64,
        zoom: u8,
        markers_json: &str,
        on_details: &js_sys::Function,
    ) -> bool;
}

/// 在容器中渲染站点标记，点击弹窗中的按钮时以站点 id 调用 `on_details`
pub fn render_stations(
    container_id: &str,
    stations_list: &[ChargingStation],
    on_details: &js_sys::Function,
) -> bool {
    let markers = stations::markers(stations_list);
    let markers_json = match serde_json::to_string(&markers) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("failed to serialize map markers: {}", e);
            return false;
        }
    };
    let (lat, lng) = stations::map_center(stations_list);
    let rendered = render_station_map(
        container_id,
        lat,
        lng,
        DEFAULT_MAP_ZOOM,
        &markers_json,
        on_details,
    );
    if !rendered {
        log::warn!("map provider not available, showing list only");
    }
    rendered
}
