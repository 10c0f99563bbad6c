use chrono::Utc;
use gloo_timers::callback::Timeout;
use log::{debug, error, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{office_map::OfficeMap, page_hero::PageTitleHero};
use crate::content::{
    service_options, tel_href, ADDRESS_LINE_1, ADDRESS_LINE_2, EMAIL, EMERGENCY_PHONE,
    MAIN_PHONE, URGENCY_OPTIONS,
};
use crate::dispatch;
use crate::inquiry::{Field, InquiryDesk, SubmissionStatus, SubmitRefused, STATUS_DISPLAY_MS};

static CONTACT_CARDS: [(&str, &str, &str, &str, &str); 4] = [
    ("📞", "Call Us", MAIN_PHONE, "24/7 Emergency Legal Hotline", "tone-blue"),
    ("✉", "Email Us", EMAIL, "We'll respond within 24 hours", "tone-green"),
    ("📍", "Visit Our Office", ADDRESS_LINE_1, "Lagos, Nigeria", "tone-orange"),
    (
        "🕘",
        "Office Hours",
        "Monday - Friday: 8:00 AM - 6:00 PM",
        "Saturday: 9:00 AM - 2:00 PM",
        "tone-purple",
    ),
];

static FAQ: [(&str, &str); 3] = [
    (
        "How quickly can I expect a response?",
        "We respond to all inquiries within 24 hours. Urgent matters receive same-day attention.",
    ),
    (
        "Do you offer free consultations?",
        "Yes, we offer a complimentary 30-minute initial consultation to discuss your legal needs.",
    ),
    (
        "What payment methods do you accept?",
        "We accept bank transfers, card payments, and offer flexible payment plans for ongoing legal services.",
    ),
];

static DIRECTIONS: [&str; 4] = [
    "5 minutes from Tafawa Balewa Square",
    "10 minutes from Lagos Island",
    "Accessible via public transport",
    "Near major banks and corporate offices",
];

fn status_banner(status: SubmissionStatus) -> Html {
    let (class, icon, headline, detail) = match status {
        SubmissionStatus::Success => (
            "status-banner success",
            "✔",
            "Message Sent Successfully!",
            "Thank you for contacting us. We'll respond within 24 hours.",
        ),
        SubmissionStatus::Error => (
            "status-banner error",
            "✖",
            "Failed to Send Message",
            "Please try again or contact us directly via phone or email.",
        ),
        SubmissionStatus::Idle | SubmissionStatus::Sending => return html! {},
    };

    html! {
        <div class={class} role="status">
            <span class="status-icon">{icon}</span>
            <div>
                <p class="status-headline">{headline}</p>
                <p class="status-detail">{detail}</p>
            </div>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    // The desk lives outside yew's state so a second submit in the same tick
    // already sees `Sending`.
    let desk = use_mut_ref(InquiryDesk::default);
    let redraw = use_force_update();
    let alive = use_mut_ref(|| true);
    let revert_timer = use_mut_ref(|| None::<Timeout>);

    {
        let alive = alive.clone();
        let revert_timer = revert_timer.clone();
        use_unmount(move || {
            *alive.borrow_mut() = false;
            revert_timer.borrow_mut().take();
        });
    }

    let on_edit = |field: Field| {
        let desk = desk.clone();
        let redraw = redraw.clone();
        Callback::from(move |value: String| {
            if desk.borrow_mut().edit(field, value) {
                redraw.force_update();
            }
        })
    };
    let input_for = |field: Field| {
        on_edit(field).reform(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input.value()
        })
    };
    let select_for = |field: Field| {
        on_edit(field).reform(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            select.value()
        })
    };
    let on_message = on_edit(Field::Message).reform(|e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        area.value()
    });

    let onsubmit = {
        let desk = desk.clone();
        let redraw = redraw.clone();
        let alive = alive.clone();
        let revert_timer = revert_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let params = match desk.borrow_mut().begin(Utc::now()) {
                Ok(params) => params,
                Err(SubmitRefused::InFlight) => {
                    debug!("Ignoring submit while a message is already sending");
                    return;
                }
                Err(err) => {
                    warn!("Inquiry not sent: {}", err);
                    return;
                }
            };
            revert_timer.borrow_mut().take();
            redraw.force_update();

            let desk = desk.clone();
            let redraw = redraw.clone();
            let alive = alive.clone();
            let revert_timer = revert_timer.clone();
            spawn_local(async move {
                let outcome = dispatch::deliver(&params).await;
                if !*alive.borrow() {
                    debug!("Contact page closed before the send finished, dropping the outcome");
                    return;
                }

                match &outcome {
                    Ok(()) => gloo_console::log!("Inquiry sent:", params.service_requested.clone()),
                    Err(err) => error!("Failed to send inquiry: {}", err),
                }
                desk.borrow_mut().finish(&outcome);
                redraw.force_update();

                let timeout = {
                    let desk = desk.clone();
                    let redraw = redraw.clone();
                    Timeout::new(STATUS_DISPLAY_MS, move || {
                        if desk.borrow_mut().revert() {
                            redraw.force_update();
                        }
                    })
                };
                *revert_timer.borrow_mut() = Some(timeout);
            });
        })
    };

    let (form, status, disabled) = {
        let view = desk.borrow();
        (view.form().clone(), view.status(), view.inputs_disabled())
    };

    html! {
        <div class="page page-contact">
            <PageTitleHero
                title="Contact Us"
                subtitle="Ready to discuss your legal needs? Get in touch with our expert team today"
                quote={AttrValue::from("The first duty of society is justice")}
                author={AttrValue::from("Alexander Hamilton")}
                background_image="https://images.unsplash.com/photo-1556761175-b413da4baf72?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80"
            />

            <section class="contact-main">
                <div class="container contact-grid">
                    <div class="contact-form-card slide-in">
                        <h2>{"Get Legal Consultation"}</h2>
                        { status_banner(status) }

                        <form class="contact-form" {onsubmit}>
                            <div class="form-row">
                                <label>
                                    <span>{"Full Name *"}</span>
                                    <input
                                        type="text"
                                        required=true
                                        placeholder="Your full name"
                                        value={form.name.clone()}
                                        oninput={input_for(Field::Name)}
                                        {disabled}
                                    />
                                </label>
                                <label>
                                    <span>{"Email Address *"}</span>
                                    <input
                                        type="email"
                                        required=true
                                        placeholder="your.email@company.com"
                                        value={form.email.clone()}
                                        oninput={input_for(Field::Email)}
                                        {disabled}
                                    />
                                </label>
                            </div>

                            <div class="form-row">
                                <label>
                                    <span>{"Company/Organization"}</span>
                                    <input
                                        type="text"
                                        placeholder="Your company name"
                                        value={form.company.clone()}
                                        oninput={input_for(Field::Company)}
                                        {disabled}
                                    />
                                </label>
                                <label>
                                    <span>{"Phone Number"}</span>
                                    <input
                                        type="tel"
                                        placeholder={MAIN_PHONE}
                                        value={form.phone.clone()}
                                        oninput={input_for(Field::Phone)}
                                        {disabled}
                                    />
                                </label>
                            </div>

                            <div class="form-row">
                                <label>
                                    <span>{"Service Needed *"}</span>
                                    <select required=true onchange={select_for(Field::Service)} {disabled}>
                                        <option value="" selected={form.service.is_empty()}>{"Select a service"}</option>
                                        { for service_options().map(|option| html! {
                                            <option value={option} selected={form.service == option}>{option}</option>
                                        }) }
                                    </select>
                                </label>
                                <label>
                                    <span>{"Urgency Level"}</span>
                                    <select onchange={select_for(Field::Urgency)} {disabled}>
                                        <option value="" selected={form.urgency.is_empty()}>{"Select urgency"}</option>
                                        { for URGENCY_OPTIONS.iter().map(|option| html! {
                                            <option value={*option} selected={form.urgency == *option}>{*option}</option>
                                        }) }
                                    </select>
                                </label>
                            </div>

                            <label>
                                <span>{"Message *"}</span>
                                <textarea
                                    required=true
                                    rows="6"
                                    placeholder="Please describe your legal needs, any specific challenges you're facing, and how we can help you..."
                                    value={form.message.clone()}
                                    oninput={on_message}
                                    {disabled}
                                />
                            </label>

                            <button type="submit" class={classes!("btn", "btn-primary", "btn-block", disabled.then(|| "sending"))} {disabled}>
                                if disabled {
                                    <span class="spinner"></span>
                                    <span>{"Sending..."}</span>
                                } else {
                                    <span>{"➤ Send Message"}</span>
                                }
                            </button>
                            <p class="form-note">
                                {"* Required fields. We'll respond within 24 hours for standard inquiries."}
                            </p>
                        </form>
                    </div>

                    <div class="contact-info rise rise-2">
                        <h3>{"Get In Touch"}</h3>
                        <p class="contact-intro">
                            {"We're here to help you navigate complex legal challenges. Our team of expert solicitors is ready to provide the strategic counsel and legal support your business needs to thrive."}
                        </p>

                        <div class="contact-cards">
                            { for CONTACT_CARDS.iter().enumerate().map(|(i, (icon, title, primary, secondary, tone))| html! {
                                <div class="contact-card rise" style={format!("animation-delay: {}ms;", i * 100)}>
                                    <div class={classes!("contact-card-icon", *tone)}>{*icon}</div>
                                    <div>
                                        <h4>{*title}</h4>
                                        <p class="contact-card-primary">{*primary}</p>
                                        <p class="contact-card-secondary">{*secondary}</p>
                                    </div>
                                </div>
                            }) }
                        </div>

                        <div class="emergency-panel">
                            <h4>{"⚠ Emergency Legal Support"}</h4>
                            <p>{"Need urgent legal assistance? Our emergency response team is available 24/7 for critical legal matters."}</p>
                            <div class="emergency-line">
                                <div>
                                    <p class="emergency-label">{"Emergency Hotline:"}</p>
                                    <p class="emergency-number">{EMERGENCY_PHONE}</p>
                                </div>
                                <a class="btn btn-light" href={tel_href(EMERGENCY_PHONE)}>{"Call Now"}</a>
                            </div>
                        </div>

                        <div class="faq">
                            <h4>{"Frequently Asked Questions"}</h4>
                            { for FAQ.iter().map(|(question, answer)| html! {
                                <div class="faq-item">
                                    <h5>{*question}</h5>
                                    <p>{*answer}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <section class="location">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Our Location"}</h2>
                        <p>{"Conveniently located in the heart of Lagos business district"}</p>
                    </div>
                    <div class="location-grid">
                        <div class="location-details">
                            <h3>{"Visit Our Office"}</h3>
                            <div class="location-row">
                                <span class="location-icon">{"📍"}</span>
                                <div>
                                    <p class="location-label">{"Address:"}</p>
                                    <p>{ADDRESS_LINE_1}<br />{ADDRESS_LINE_2}</p>
                                </div>
                            </div>
                            <div class="location-row">
                                <span class="location-icon">{"🕘"}</span>
                                <div>
                                    <p class="location-label">{"Business Hours:"}</p>
                                    <p>
                                        {"Monday - Friday: 8:00 AM - 6:00 PM"}<br />
                                        {"Saturday: 9:00 AM - 2:00 PM"}<br />
                                        {"Sunday: Emergency Only"}
                                    </p>
                                </div>
                            </div>
                            <div class="location-row">
                                <span class="location-icon">{"🚗"}</span>
                                <div>
                                    <p class="location-label">{"Parking:"}</p>
                                    <p>{"Free client parking available"}<br />{"Valet service upon request"}</p>
                                </div>
                            </div>
                            <div class="directions">
                                <h4>{"Getting Here"}</h4>
                                <ul>
                                    { for DIRECTIONS.iter().map(|line| html! { <li>{*line}</li> }) }
                                </ul>
                            </div>
                        </div>

                        <OfficeMap />
                    </div>
                </div>
            </section>
        </div>
    }
}
