use common::{circle_ring, Coordinate, TradeArea, DEFAULT_RING_POINTS};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::hooks::{use_map_library, LibraryState};
use crate::mapbox::bindings::{self, Map, Marker};
use crate::settings;

const RING_SOURCE_ID: &str = "trade-area";
const RING_COLOR: &str = "#5E63E5";

const MARKER_SVG: &str = r##"<svg width="32" height="32" viewBox="0 0 32 32" fill="none" xmlns="http://www.w3.org/2000/svg"><circle cx="16" cy="16" r="12" fill="#5E63E5" stroke="#fff" stroke-width="2"/><circle cx="16" cy="16" r="5" fill="#fff"/></svg>"##;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub trade_area: TradeArea,
}

/// The trade-area map panel.
///
/// Lifecycle: AwaitingLibrary until the mapping library broadcast, then a
/// single guarded transition to Initialized; the held map handle keeps
/// re-renders from constructing a second map. A missing access token, a
/// library-load timeout, or rejected geometry lands in a visible
/// fallback instead. A center change after first mount has no effect;
/// initialization is explicitly once-per-instance.
#[function_component(TradeAreaMap)]
pub fn trade_area_map(props: &Props) -> Html {
    let library = use_map_library();
    let container_ref = use_node_ref();
    let map_handle = use_mut_ref(|| Option::<Map>::None);
    let init_error = use_state(|| Option::<String>::None);

    let token_missing = settings::get_settings().mapbox_access_token.is_empty();

    {
        let trade_area = props.trade_area.clone();
        let map_handle = map_handle.clone();
        let init_error = init_error.clone();
        use_effect_with(
            (library.clone(), container_ref.clone()),
            move |(library, container_ref)| {
                if library.is_ready() && !token_missing && map_handle.borrow().is_none() {
                    if let Some(container) = container_ref.cast::<HtmlElement>() {
                        match initialize_map(&container, &trade_area) {
                            Ok(map) => {
                                log::info!(
                                    "trade-area map initialized at ({}, {})",
                                    trade_area.center.lng,
                                    trade_area.center.lat
                                );
                                *map_handle.borrow_mut() = Some(map);
                            }
                            Err(message) => init_error.set(Some(message)),
                        }
                    }
                }
                || ()
            },
        );
    }

    let body = if token_missing {
        html! {
            <ErrorDisplay
                title="Map unavailable"
                message="No map access token is configured."
            />
        }
    } else if let Some(message) = (*init_error).clone() {
        html! { <ErrorDisplay title="Map unavailable" message={message} /> }
    } else {
        match &library {
            LibraryState::Unavailable(reason) => html! {
                <ErrorDisplay title="Map unavailable" message={reason.clone()} />
            },
            LibraryState::Loading => html! { <Loading text="Loading map..." /> },
            LibraryState::Ready => html! {
                <div
                    ref={container_ref}
                    class="w-full h-full rounded-lg"
                    style="min-height: 250px;"
                ></div>
            },
        }
    };

    html! {
        <div class="card bg-base-100 shadow h-full">
            <div class="card-body">
                <h2 class="card-title text-sm">
                    {format!("Trade Area ({})", props.trade_area.area_label)}
                </h2>
                {body}
            </div>
        </div>
    }
}

/// Constructs the map and schedules marker + ring drawing for its `load`
/// event. Geometry is validated up front so a bad center fails before any
/// provider call.
fn initialize_map(container: &HtmlElement, trade_area: &TradeArea) -> Result<Map, String> {
    let settings = settings::get_settings();

    let center = Coordinate::new(trade_area.center.lng, trade_area.center.lat)
        .map_err(|err| err.to_string())?;
    let ring = circle_ring(center, trade_area.radius_miles, DEFAULT_RING_POINTS)
        .map_err(|err| err.to_string())?;

    bindings::set_access_token(&settings.mapbox_access_token).map_err(describe_js_error)?;

    let options = js_sys::Object::new();
    let set = |key: &str, value: &JsValue| {
        js_sys::Reflect::set(&options, &JsValue::from_str(key), value).map(|_| ())
    };
    set("container", container.as_ref()).map_err(describe_js_error)?;
    set("style", &JsValue::from_str(&settings.map_style_url)).map_err(describe_js_error)?;
    set(
        "center",
        &serde_wasm_bindgen::to_value(&center.to_lng_lat())
            .map_err(|err| err.to_string())?,
    )
    .map_err(describe_js_error)?;
    set("zoom", &JsValue::from_f64(settings.map_zoom)).map_err(describe_js_error)?;

    let map = Map::new(&options.into());

    let decorate = {
        let map = map.clone();
        Closure::once(move || {
            if let Err(err) = add_overlays(&map, center, &ring) {
                log::error!("Failed to draw trade-area overlay: {:?}", err);
            }
        })
    };
    map.on("load", decorate.as_ref().unchecked_ref());
    decorate.forget();

    Ok(map)
}

/// Adds the center marker and the filled + outlined ring polygon. Runs on
/// the map's own `load` event, once per map instance.
fn add_overlays(map: &Map, center: Coordinate, ring: &[Coordinate]) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    let marker_el: HtmlElement = document.create_element("div")?.dyn_into()?;
    marker_el.set_inner_html(MARKER_SVG);
    marker_el.set_attribute(
        "style",
        "width:32px;height:32px;display:flex;align-items:center;justify-content:center;",
    )?;

    let lng_lat = serde_wasm_bindgen::to_value(&center.to_lng_lat()).map_err(JsValue::from)?;
    Marker::new(&marker_el).set_lng_lat(&lng_lat).add_to(map);

    let coordinates: Vec<[f64; 2]> = ring.iter().map(|c| c.to_lng_lat()).collect();
    let source = serde_json::json!({
        "type": "geojson",
        "data": {
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {"type": "Polygon", "coordinates": [coordinates]},
                "properties": {}
            }]
        }
    });
    map.add_source(
        RING_SOURCE_ID,
        &serde_wasm_bindgen::to_value(&source).map_err(JsValue::from)?,
    );

    let fill_layer = serde_json::json!({
        "id": "trade-area-fill",
        "type": "fill",
        "source": RING_SOURCE_ID,
        "layout": {},
        "paint": {"fill-color": RING_COLOR, "fill-opacity": 0.3}
    });
    map.add_layer(&serde_wasm_bindgen::to_value(&fill_layer).map_err(JsValue::from)?);

    let outline_layer = serde_json::json!({
        "id": "trade-area-outline",
        "type": "line",
        "source": RING_SOURCE_ID,
        "layout": {},
        "paint": {"line-color": RING_COLOR, "line-width": 2}
    });
    map.add_layer(&serde_wasm_bindgen::to_value(&outline_layer).map_err(JsValue::from)?);

    Ok(())
}

fn describe_js_error(err: JsValue) -> String {
    err.as_string()
        .unwrap_or_else(|| format!("map provider error: {:?}", err))
}
