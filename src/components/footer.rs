use chrono::{Datelike, Utc};
use log::info;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{EMAIL, EMERGENCY_PHONE, FIRM_NAME};
use crate::Route;

const SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing to our newsletter!";

static QUICK_LINKS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::About, "About Us"),
    (Route::Services, "Our Services"),
    (Route::Contact, "Contact Us"),
];

static SERVICE_LINKS: [&str; 5] = [
    "Technology Law",
    "IP & Data Protection",
    "Corporate Services",
    "Real Estate Law",
    "ADR Services",
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let email = use_state(String::new);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    // Subscriptions are not stored anywhere yet, the visitor only gets a
    // confirmation.
    let on_subscribe = {
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Newsletter signup submitted");
            if let Some(window) = window() {
                let _ = window.alert_with_message(SUBSCRIBED_MESSAGE);
            }
            email.set(String::new());
        })
    };

    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-newsletter">
                <div class="container footer-newsletter-grid">
                    <div>
                        <h3>{"Stay Updated"}</h3>
                        <p>{"Get the latest legal insights, industry updates, and regulatory changes delivered to your inbox."}</p>
                    </div>
                    <form class="newsletter-form" onsubmit={on_subscribe}>
                        <input
                            type="email"
                            required=true
                            placeholder="Enter your email address"
                            value={(*email).clone()}
                            oninput={on_email}
                        />
                        <button type="submit" class="btn btn-light">{"➤ Subscribe"}</button>
                    </form>
                </div>
            </div>

            <div class="container footer-main">
                <div class="footer-brand">
                    <div class="footer-logo">
                        <span class="nav-logo-mark">{"⚖"}</span>
                        <div>
                            <h3>{FIRM_NAME}</h3>
                            <p class="footer-tagline">{"LEGAL EXCELLENCE"}</p>
                        </div>
                    </div>
                    <p>
                        {"Leading legal innovation in Africa with specialized solutions for modern businesses, technology companies, and forward-thinking organizations. We combine legal excellence with industry insight to protect your interests and unlock opportunities."}
                    </p>
                </div>

                <div class="footer-column">
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for QUICK_LINKS.iter().map(|(target, label)| html! {
                            <li>
                                <Link<Route> to={target.clone()}>{*label}</Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{"Legal Services"}</h4>
                    <ul>
                        { for SERVICE_LINKS.iter().map(|label| html! {
                            <li>
                                <Link<Route> to={Route::Services}>{*label}</Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{"Contact Info"}</h4>
                    <p>{"📍 123 Legal Avenue"}<br />{"Victoria Island, Lagos"}<br />{"Nigeria"}</p>
                    <p>{format!("📞 {}", EMERGENCY_PHONE)}</p>
                    <p>{format!("✉ {}", EMAIL)}</p>
                    <p>{"🕘 Mon-Fri: 8AM-6PM"}</p>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="container">
                    <p>{format!("© {} {}. All rights reserved.", year, FIRM_NAME)}</p>
                </div>
            </div>
        </footer>
    }
}
