use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use gloo_timers::callback::Timeout;

mod config;
mod content;
mod carousel;
mod inquiry;
mod dispatch;
mod leaflet;
mod components {
    pub mod splash;
    pub mod page_hero;
    pub mod cta;
    pub mod stats;
    pub mod slideshow;
    pub mod office_map;
    pub mod whatsapp;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod about;
    pub mod contact;
}

use components::{footer::Footer, splash::Splash, whatsapp::WhatsAppWidget};
use pages::{about::About, contact::Contact, home::Home, services::Services};

const SPLASH_MS: u32 = 2_000;
const SCROLLED_OFFSET_PX: i32 = 50;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

static NAV_ITEMS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::Services, "Services"),
    (Route::About, "About"),
    (Route::Contact, "Contact"),
];

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::Home);
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let offset = window
                        .as_ref()
                        .and_then(|w| w.document())
                        .and_then(|d| d.document_element())
                        .map(|root| root.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(offset > SCROLLED_OFFSET_PX);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-mark">{"⚖"}</span>
                    <span class="nav-logo-text">
                        <span class="nav-logo-name">{"Blacksuit"}</span>
                        <span class="nav-logo-tag">{"SOLICITORS"}</span>
                    </span>
                </Link<Route>>

                <button class={classes!("burger-menu", (*menu_open).then(|| "open"))} onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().map(|(target, label)| {
                        let active = route == *target;
                        html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={target.clone()} classes={classes!("nav-link", active.then(|| "active"))}>
                                    {*label}
                                </Link<Route>>
                            </div>
                        }
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-cta">
                            {"Get Consultation"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Puts the viewport back at the top whenever the path changes.
#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let path = use_location().map(|l| l.path().to_string()).unwrap_or_default();

    use_effect_with_deps(
        move |_| {
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        path,
    );

    html! {}
}

#[function_component(Shell)]
fn shell() -> Html {
    let loading = use_state(|| true);

    {
        let loading = loading.clone();
        use_effect_with_deps(move |_| {
            let timeout = Timeout::new(SPLASH_MS, move || loading.set(false));
            move || drop(timeout)
        }, ());
    }

    if *loading {
        return html! { <Splash /> };
    }

    html! {
        <div class="site">
            <ScrollToTop />
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <WhatsAppWidget />
            <Footer />
        </div>
    }
}

#[function_component]
fn App() -> Html {
    // The router sits outside the splash so navigation during it is kept.
    html! {
        <BrowserRouter>
            <Shell />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
