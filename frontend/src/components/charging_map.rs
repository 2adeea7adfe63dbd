use crate::auth::use_auth;
use crate::components::alert::ErrorAlert;
use crate::components::icons::{MapPin, Search};
use crate::web::map::render_stations;
use charger_club::shared::{ChargingStation, DEFAULT_SEARCH_RADIUS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;

const MAP_CONTAINER_ID: &str = "station-map";

#[component]
pub fn ChargingMapPage() -> impl IntoView {
    let auth = use_auth();

    let (postcode, set_postcode) = signal(String::new());
    let (radius, set_radius) = signal(DEFAULT_SEARCH_RADIUS.to_string());
    let (stations, set_stations) = signal(Vec::<ChargingStation>::new());
    let (selected, set_selected) = signal(Option::<ChargingStation>::None);
    let (is_searching, set_is_searching) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let show_details = move |station_id: String| {
        let service = auth.service();
        spawn_local(async move {
            match service.station_details(&station_id).await {
                Ok(station) => set_selected.set(Some(station)),
                Err(e) => {
                    log::warn!("loading station {} failed: {}", station_id, e);
                    set_error_msg.set(Some(e.to_string()));
                }
            }
        });
    };

    // 地图弹窗按钮的回调，页面存续期间有效
    let on_marker_details: js_sys::Function = Closure::<dyn Fn(String)>::new(show_details)
        .into_js_value()
        .unchecked_into();
    let on_marker_details = StoredValue::new_local(on_marker_details);

    // 站点列表变化时重绘标记
    Effect::new(move |_| {
        stations.with(|list| {
            on_marker_details.with_value(|cb| render_stations(MAP_CONTAINER_ID, list, cb));
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_searching.set(true);
        set_error_msg.set(None);
        set_selected.set(None);

        let service = auth.service();
        let (postcode, radius) = (postcode.get(), radius.get());
        spawn_local(async move {
            match service.search_stations(&postcode, &radius).await {
                Ok(found) => {
                    log::info!("found {} stations near {}", found.len(), postcode.trim());
                    set_stations.set(found);
                }
                Err(e) => {
                    log::warn!("station search failed: {}", e);
                    set_error_msg.set(Some(e.to_string()));
                }
            }
            set_is_searching.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-7xl mx-auto space-y-6">
                <form class="card bg-base-100 shadow-xl" on:submit=on_submit>
                    <div class="card-body">
                        <h1 class="card-title text-2xl gap-2">
                            <MapPin attr:class="h-6 w-6 text-primary" />
                            "Find a Charging Point"
                        </h1>
                        <ErrorAlert message=error_msg />
                        <div class="flex flex-col md:flex-row gap-2 md:items-end">
                            <div class="form-control flex-1">
                                <label class="label" for="postcode">
                                    <span class="label-text">"Postcode"</span>
                                </label>
                                <input
                                    id="postcode"
                                    type="text"
                                    placeholder="SW1A 1AA"
                                    on:input=move |ev| set_postcode.set(event_target_value(&ev))
                                    prop:value=postcode
                                    class="input input-bordered"
                                />
                            </div>
                            <div class="form-control md:w-40">
                                <label class="label" for="radius">
                                    <span class="label-text">"Radius (miles)"</span>
                                </label>
                                <input
                                    id="radius"
                                    type="number"
                                    min="1"
                                    on:input=move |ev| set_radius.set(event_target_value(&ev))
                                    prop:value=radius
                                    class="input input-bordered"
                                />
                            </div>
                            <button class="btn btn-primary gap-2" disabled=move || is_searching.get()>
                                {move || if is_searching.get() {
                                    view! { <span class="loading loading-spinner"></span> }.into_any()
                                } else {
                                    view! { <Search attr:class="h-4 w-4" /> }.into_any()
                                }}
                                "Search"
                            </button>
                        </div>
                    </div>
                </form>

                <div class="grid gap-6 lg:grid-cols-3">
                    <div class="card bg-base-100 shadow-xl lg:col-span-2 overflow-hidden">
                        <div id=MAP_CONTAINER_ID class="h-[480px] w-full"></div>
                    </div>

                    <div class="space-y-4">
                        <Show when=move || selected.with(Option::is_some)>
                            {move || selected.get().map(|s| view! {
                                <div class="card bg-primary text-primary-content shadow-xl">
                                    <div class="card-body">
                                        <h2 class="card-title">{s.name}</h2>
                                        <p>"Price: " {s.price}</p>
                                        <p>"Status: " {s.status}</p>
                                        <p class="text-xs opacity-70">
                                            {format!("{:.5}, {:.5}", s.latitude, s.longitude)}
                                        </p>
                                    </div>
                                </div>
                            })}
                        </Show>

                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body p-0">
                                <ul class="menu w-full">
                                    <Show when=move || stations.with(Vec::is_empty)>
                                        <li class="p-4 text-center text-base-content/50">
                                            "No stations to show. Search by postcode to begin."
                                        </li>
                                    </Show>
                                    <For
                                        each=move || stations.get()
                                        key=|s| s.id.clone()
                                        children=move |s| {
                                            let id = s.id.clone();
                                            view! {
                                                <li>
                                                    <button on:click=move |_| show_details(id.clone())>
                                                        <div class="flex flex-col items-start">
                                                            <span class="font-medium">{s.name}</span>
                                                            <span class="text-xs text-base-content/60">
                                                                {s.price} " · " {s.status}
                                                            </span>
                                                        </div>
                                                    </button>
                                                </li>
                                            }
                                        }
                                    />
                                </ul>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
