//! Browser half of the map loader: script-tag injection and imperative
//! `google.maps` construction.
//!
//! The Maps JS API has no typed binding, so construction goes through
//! `js_sys::Reflect` against the `google.maps` namespace. Exceptions come
//! back as `Err(JsValue)` and are classified into [`MapError`].

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::config;
use crate::map::error::{MapError, classify_js_error};
use crate::map::loader;
use crate::map::{ALERT_RADIUS_METERS, MAP_CENTER_LAT, MAP_CENTER_LNG, MAP_ZOOM};

/// Circle overlay styling, matching the provider's RGB hex format.
const CIRCLE_COLOR: &str = "#FF0000";
const CIRCLE_STROKE_OPACITY: f64 = 0.8;
const CIRCLE_STROKE_WEIGHT: f64 = 2.0;
const CIRCLE_FILL_OPACITY: f64 = 0.35;

/// Register the global ready callback and append the provider script tag
/// to the document head. Called by the one subscriber the registry told
/// to inject.
///
/// # Errors
///
/// Returns [`MapError::ScriptLoad`] if the document is unavailable or the
/// tag cannot be created; the caller reports that through
/// [`loader::script_failed`] so all waiters hear about it.
pub fn inject_script() -> Result<(), MapError> {
    let window = web_sys::window().ok_or(MapError::ScriptLoad)?;
    let document = window.document().ok_or(MapError::ScriptLoad)?;

    install_ready_callback(&window);

    let script: web_sys::HtmlScriptElement = document
        .create_element("script")
        .map_err(|_| MapError::ScriptLoad)?
        .dyn_into()
        .map_err(|_| MapError::ScriptLoad)?;
    script.set_src(&config::maps_script_url());
    script.set_async(true);
    script.set_defer(true);

    let onerror = Closure::<dyn FnMut()>::new(|| {
        log::error!("Google Maps script failed to load");
        loader::script_failed();
    });
    script.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    document
        .head()
        .ok_or(MapError::ScriptLoad)?
        .append_child(&script)
        .map_err(|_| MapError::ScriptLoad)?;
    Ok(())
}

/// Expose the registry's ready signal as the named global the provider
/// calls once its script has evaluated. The hook removes itself after
/// firing; it is only needed once per load.
fn install_ready_callback(window: &web_sys::Window) {
    let callback = Closure::<dyn FnMut()>::new(|| {
        if let Some(window) = web_sys::window() {
            let _ = js_sys::Reflect::delete_property(
                &window,
                &JsValue::from_str(config::MAPS_READY_CALLBACK),
            );
        }
        loader::script_ready();
    });
    let installed = js_sys::Reflect::set(
        window,
        &JsValue::from_str(config::MAPS_READY_CALLBACK),
        callback.as_ref(),
    );
    if installed.is_err() {
        log::error!("could not register the Maps ready callback");
    }
    callback.forget();
}

/// Build the map session: a map centered on the fixed coordinate plus the
/// fixed-radius alert circle. The engine populates `container` in place.
///
/// # Errors
///
/// Any exception thrown by the engine is classified into the error
/// taxonomy and logged.
pub fn initialize(container: &web_sys::HtmlElement) -> Result<(), MapError> {
    build_session(container).map_err(|thrown| {
        let err = classify_js_error(&thrown);
        log::error!("Google Maps error: {err}");
        err
    })
}

fn build_session(container: &web_sys::HtmlElement) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let maps = js_sys::Reflect::get(&window, &JsValue::from_str("google"))
        .and_then(|google| js_sys::Reflect::get(&google, &JsValue::from_str("maps")))?;

    let map_ctor: js_sys::Function =
        js_sys::Reflect::get(&maps, &JsValue::from_str("Map"))?.dyn_into()?;
    let map_options = js_sys::Object::new();
    set(&map_options, "center", &lat_lng()?)?;
    set(&map_options, "zoom", &JsValue::from_f64(MAP_ZOOM))?;
    let map = js_sys::Reflect::construct(
        &map_ctor,
        &js_sys::Array::of2(container.as_ref(), &map_options),
    )?;

    let circle_ctor: js_sys::Function =
        js_sys::Reflect::get(&maps, &JsValue::from_str("Circle"))?.dyn_into()?;
    let circle_options = js_sys::Object::new();
    set(&circle_options, "strokeColor", &JsValue::from_str(CIRCLE_COLOR))?;
    set(&circle_options, "strokeOpacity", &JsValue::from_f64(CIRCLE_STROKE_OPACITY))?;
    set(&circle_options, "strokeWeight", &JsValue::from_f64(CIRCLE_STROKE_WEIGHT))?;
    set(&circle_options, "fillColor", &JsValue::from_str(CIRCLE_COLOR))?;
    set(&circle_options, "fillOpacity", &JsValue::from_f64(CIRCLE_FILL_OPACITY))?;
    set(&circle_options, "map", &map)?;
    set(&circle_options, "center", &lat_lng()?)?;
    set(&circle_options, "radius", &JsValue::from_f64(ALERT_RADIUS_METERS))?;
    js_sys::Reflect::construct(&circle_ctor, &js_sys::Array::of1(&circle_options))?;

    Ok(())
}

fn lat_lng() -> Result<JsValue, JsValue> {
    let center = js_sys::Object::new();
    set(&center, "lat", &JsValue::from_f64(MAP_CENTER_LAT))?;
    set(&center, "lng", &JsValue::from_f64(MAP_CENTER_LNG))?;
    Ok(center.into())
}

fn set(target: &js_sys::Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}
