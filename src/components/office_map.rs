use std::cell::Cell;
use std::rc::Rc;

use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlElement, ResizeObserver};
use yew::prelude::*;

use crate::content::{
    maps_search_url, ADDRESS_LINE_1, ADDRESS_LINE_2, FIRM_NAME, MAIN_PHONE, OFFICE_LAT,
    OFFICE_LON, OFFICE_ZOOM,
};
use crate::leaflet::{self, LeafletMap, MapError, Pin};

/// A mounted map plus the observer keeping it sized to its container.
struct LiveMap {
    map: LeafletMap,
    observer: ResizeObserver,
    _on_resize: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for LiveMap {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.map.remove();
    }
}

fn popup_html() -> String {
    format!(
        "<div class=\"office-popup\"><strong>{}</strong><br/>{}<br/>{}<br/>{}</div>",
        FIRM_NAME, ADDRESS_LINE_1, ADDRESS_LINE_2, MAIN_PHONE
    )
}

fn attach(container: &HtmlElement) -> Result<LiveMap, MapError> {
    let popup = popup_html();
    let map = leaflet::mount(
        container,
        &Pin {
            lat: OFFICE_LAT,
            lon: OFFICE_LON,
            zoom: OFFICE_ZOOM,
            popup_html: &popup,
        },
    )?;

    let on_resize = {
        let map = map.clone();
        Closure::wrap(Box::new(move |_entries: js_sys::Array| {
            map.invalidate_size();
        }) as Box<dyn FnMut(js_sys::Array)>)
    };
    let observer = match ResizeObserver::new(on_resize.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(e) => {
            map.remove();
            return Err(e.into());
        }
    };
    observer.observe(container);

    Ok(LiveMap {
        map,
        observer,
        _on_resize: on_resize,
    })
}

#[function_component(OfficeMap)]
pub fn office_map() -> Html {
    let container = use_node_ref();
    let loaded = use_state(|| false);
    let live = use_mut_ref(|| None::<LiveMap>);

    {
        let container = container.clone();
        let loaded = loaded.clone();
        let live = live.clone();
        use_effect_with_deps(
            move |_| {
                let cancelled = Rc::new(Cell::new(false));
                {
                    let cancelled = cancelled.clone();
                    let live = live.clone();
                    spawn_local(async move {
                        if let Err(e) = leaflet::ensure_loaded().await {
                            error!("Map library unavailable: {}", e);
                            return;
                        }
                        if cancelled.get() {
                            debug!("Map container gone before leaflet loaded");
                            return;
                        }
                        let Some(element) = container.cast::<HtmlElement>() else {
                            return;
                        };
                        match attach(&element) {
                            Ok(map) => {
                                *live.borrow_mut() = Some(map);
                                loaded.set(true);
                            }
                            Err(e) => error!("Failed to build office map: {}", e),
                        }
                    });
                }

                move || {
                    cancelled.set(true);
                    live.borrow_mut().take();
                }
            },
            (),
        );
    }

    let open_in_maps = Callback::from(|_: MouseEvent| {
        let url = maps_search_url(OFFICE_LAT, OFFICE_LON);
        if let Some(window) = window() {
            if let Err(e) = window.open_with_url_and_target_and_features(&url, "_blank", "noopener,noreferrer") {
                error!("Failed to open maps link: {:?}", e);
            }
        }
    });

    html! {
        <div class="office-map-card rise rise-2">
            <div class="office-map-frame">
                <div ref={container} class="office-map"></div>
                if !*loaded {
                    <div class="office-map-placeholder">
                        <span class="office-map-placeholder-icon">{"📍"}</span>
                        <p>{"Loading map..."}</p>
                    </div>
                }
            </div>
            <button class="btn btn-primary btn-block" onclick={open_in_maps}>
                {"↗ Open in Maps"}
            </button>
        </div>
    }
}
