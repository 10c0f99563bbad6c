//! Leaflet bindings and the on-demand loader for its script and stylesheet.
//!
//! The library is pulled from a CDN the first time a map is needed. The load
//! promise is cached for the lifetime of the page, so every later caller
//! awaits the same request instead of injecting another tag. A failed load
//! takes its tags back out of `<head>` and clears the cache.

use std::cell::RefCell;

use js_sys::{Promise, Reflect};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Document, HtmlElement, HtmlLinkElement, HtmlScriptElement};

const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
pub const TILE_MAX_ZOOM: u8 = 19;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    pub type LeafletMap;
    pub type Layer;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn new_map(container: &HtmlElement, options: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8) -> LeafletMap;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &LeafletMap);

    #[wasm_bindgen(method)]
    pub fn remove(this: &LeafletMap);

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(at: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn div_icon(options: &JsValue) -> JsValue;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, html: &str) -> Layer;
}

#[derive(Debug, Error)]
pub enum MapError {
    #[error("no browser window available")]
    NoWindow,
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("failed to load {0}")]
    LoadFailed(&'static str),
    #[error("leaflet script loaded but `L` is not defined")]
    LibraryMissing,
    #[error("invalid map options: {0}")]
    Options(String),
}

impl From<JsValue> for MapError {
    fn from(value: JsValue) -> Self {
        MapError::Dom(format!("{:?}", value))
    }
}

impl From<serde_wasm_bindgen::Error> for MapError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        MapError::Options(e.to_string())
    }
}

/// An in-flight load and the tags it put in `<head>`.
#[derive(Clone)]
struct PendingLoad {
    done: Promise,
    tags: Vec<HtmlElement>,
}

impl PendingLoad {
    fn discard(&self) {
        for tag in &self.tags {
            tag.remove();
        }
    }
}

impl PartialEq for PendingLoad {
    fn eq(&self, other: &Self) -> bool {
        let mine: &JsValue = self.done.as_ref();
        let theirs: &JsValue = other.done.as_ref();
        mine == theirs
    }
}

/// Page-wide memo of the one load in flight.
struct LoadSlot<T> {
    current: Option<T>,
}

impl<T: Clone + PartialEq> LoadSlot<T> {
    const fn new() -> Self {
        Self { current: None }
    }

    fn get_or_start<E>(&mut self, start: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        if let Some(current) = &self.current {
            return Ok(current.clone());
        }
        let started = start()?;
        self.current = Some(started.clone());
        Ok(started)
    }

    /// Forgets `failed` if it is still the current load and hands it back
    /// for cleanup. A newer load is left alone.
    fn fail(&mut self, failed: &T) -> Option<T> {
        if self.current.as_ref() == Some(failed) {
            self.current.take()
        } else {
            None
        }
    }
}

thread_local! {
    static PENDING_LOAD: RefCell<LoadSlot<PendingLoad>> = RefCell::new(LoadSlot::new());
}

fn library_present() -> bool {
    window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("L")).unwrap_or(false))
        .unwrap_or(false)
}

/// Resolves once `window.L` is usable, injecting the tags on first call.
pub async fn ensure_loaded() -> Result<(), MapError> {
    if library_present() {
        return Ok(());
    }

    let pending = PENDING_LOAD.with(|slot| slot.borrow_mut().get_or_start(inject))?;

    if let Err(e) = JsFuture::from(pending.done.clone()).await {
        // Let a later visit try again from a clean <head>.
        if let Some(failed) = PENDING_LOAD.with(|slot| slot.borrow_mut().fail(&pending)) {
            failed.discard();
        }
        log::debug!("leaflet load rejected: {:?}", e);
        return Err(MapError::LoadFailed("leaflet"));
    }

    if library_present() {
        Ok(())
    } else {
        Err(MapError::LibraryMissing)
    }
}

fn inject() -> Result<PendingLoad, MapError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(MapError::NoWindow)?;
    let head = document
        .head()
        .ok_or_else(|| MapError::Dom("document has no <head>".into()))?;

    let (stylesheet, link) = tag_loaded(&document, Tag::Stylesheet(LEAFLET_CSS), &head)?;
    let (script, script_loaded) = match tag_loaded(&document, Tag::Script(LEAFLET_JS), &head) {
        Ok(tag) => tag,
        Err(e) => {
            stylesheet.remove();
            return Err(e);
        }
    };

    let both = js_sys::Array::of2(&link, &script_loaded);
    Ok(PendingLoad {
        done: Promise::all(&both),
        tags: vec![stylesheet, script],
    })
}

enum Tag {
    Stylesheet(&'static str),
    Script(&'static str),
}

fn tag_loaded(
    document: &Document,
    tag: Tag,
    head: &HtmlElement,
) -> Result<(HtmlElement, Promise), MapError> {
    let element: HtmlElement = match tag {
        Tag::Stylesheet(href) => {
            let link: HtmlLinkElement = document
                .create_element("link")?
                .dyn_into()
                .map_err(|_| MapError::Dom("<link> is not an HtmlLinkElement".into()))?;
            link.set_rel("stylesheet");
            link.set_href(href);
            link.unchecked_into()
        }
        Tag::Script(src) => {
            let script: HtmlScriptElement = document
                .create_element("script")?
                .dyn_into()
                .map_err(|_| MapError::Dom("<script> is not an HtmlScriptElement".into()))?;
            script.set_src(src);
            script.set_async(true);
            script.unchecked_into()
        }
    };

    let promise = Promise::new(&mut |resolve, reject| {
        element.set_onload(Some(&resolve));
        element.set_onerror(Some(&reject));
    });

    head.append_child(&element)?;
    Ok((element, promise))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    scroll_wheel_zoom: bool,
    zoom_control: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions<'a> {
    attribution: &'a str,
    max_zoom: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DivIconOptions<'a> {
    class_name: &'a str,
    html: &'a str,
    icon_size: (u16, u16),
    icon_anchor: (u16, u16),
    popup_anchor: (i16, i16),
}

/// What goes on the map: a centre, a zoom level and a single pinned place.
pub struct Pin<'a> {
    pub lat: f64,
    pub lon: f64,
    pub zoom: u8,
    pub popup_html: &'a str,
}

const PIN_HTML: &str = r#"<div class="office-pin"><span></span></div>"#;

/// Builds the map inside `container`. Requires `ensure_loaded` to have succeeded.
pub fn mount(container: &HtmlElement, pin: &Pin<'_>) -> Result<LeafletMap, MapError> {
    let center = serde_wasm_bindgen::to_value(&(pin.lat, pin.lon))?;

    let map = new_map(
        container,
        &serde_wasm_bindgen::to_value(&MapOptions {
            scroll_wheel_zoom: false,
            zoom_control: true,
        })?,
    );
    map.set_view(&center, pin.zoom);

    tile_layer(
        TILE_URL,
        &serde_wasm_bindgen::to_value(&TileOptions {
            attribution: TILE_ATTRIBUTION,
            max_zoom: TILE_MAX_ZOOM,
        })?,
    )
    .add_to(&map);

    let icon = div_icon(&serde_wasm_bindgen::to_value(&DivIconOptions {
        class_name: "office-pin-icon",
        html: PIN_HTML,
        icon_size: (36, 36),
        icon_anchor: (18, 36),
        popup_anchor: (0, -34),
    })?);
    let marker_options = js_sys::Object::new();
    Reflect::set(&marker_options, &JsValue::from_str("icon"), &icon)?;

    marker(&center, &marker_options)
        .add_to(&map)
        .bind_popup(pin.popup_html);

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concurrent_callers_share_one_load() {
        let mut slot = LoadSlot::new();
        let mut started = 0;
        for _ in 0..3 {
            let load = slot
                .get_or_start(|| -> Result<u32, ()> {
                    started += 1;
                    Ok(7)
                })
                .unwrap();
            assert_eq!(load, 7);
        }
        assert_eq!(started, 1);
    }

    #[test]
    fn failed_load_is_handed_back_once_for_cleanup() {
        let mut slot = LoadSlot::new();
        let load = slot.get_or_start(|| -> Result<u32, ()> { Ok(1) }).unwrap();

        assert_eq!(slot.fail(&load), Some(1));
        // A second waiter on the same load finds nothing left to clean.
        assert_eq!(slot.fail(&load), None);

        let retry = slot.get_or_start(|| -> Result<u32, ()> { Ok(2) }).unwrap();
        assert_eq!(retry, 2);
    }

    #[test]
    fn stale_failure_keeps_newer_load() {
        let mut slot = LoadSlot::new();
        let first = slot.get_or_start(|| -> Result<u32, ()> { Ok(1) }).unwrap();
        slot.fail(&first);
        let second = slot.get_or_start(|| -> Result<u32, ()> { Ok(2) }).unwrap();

        assert_eq!(slot.fail(&first), None);
        assert_eq!(slot.get_or_start(|| -> Result<u32, ()> { Ok(3) }), Ok(second));
    }

    #[test]
    fn start_error_leaves_slot_empty() {
        let mut slot: LoadSlot<u32> = LoadSlot::new();
        assert_eq!(slot.get_or_start(|| Err("no head")), Err("no head"));
        assert_eq!(slot.get_or_start(|| -> Result<u32, &str> { Ok(4) }), Ok(4));
    }
}
