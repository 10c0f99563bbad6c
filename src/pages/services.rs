use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{cta::AnimatedCta, page_hero::PageTitleHero};
use crate::content::{ServiceDescriptor, SERVICES};
use crate::Route;

const STAGGER_MS: usize = 100;

static PROCESS: [(&str, &str, &str, &str); 4] = [
    ("01", "Consultation", "Initial meeting to understand your needs", "💬"),
    ("02", "Analysis", "Thorough analysis of your legal requirements", "📊"),
    ("03", "Strategy", "Develop customized legal strategy", "🎯"),
    ("04", "Execution", "Implement and monitor legal solutions", "✔"),
];

fn staggered(items: &'static [&'static str], class: &'static str, marker: &'static str) -> Html {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| html! {
            <li class={classes!(class, "slide-in")} style={format!("animation-delay: {}ms;", i * STAGGER_MS)}>
                <span class="list-marker">{marker}</span>
                {*item}
            </li>
        })
        .collect::<Html>()
}

#[derive(Properties, PartialEq)]
struct ServiceDetailProps {
    service: &'static ServiceDescriptor,
}

#[function_component(ServiceDetail)]
fn service_detail(props: &ServiceDetailProps) -> Html {
    let service = props.service;

    html! {
        <div class="service-detail">
            <div class="service-summary">
                <div class="service-heading">
                    <div class="service-icon">{service.icon}</div>
                    <div>
                        <h2>{service.title}</h2>
                        <p class="service-short">{service.short_desc}</p>
                    </div>
                </div>
                <p class="service-full">{service.full_description}</p>

                <div class="service-columns">
                    <div class="service-box">
                        <h4>{"Key Benefits"}</h4>
                        <ul>{ staggered(service.key_benefits, "benefit", "✔") }</ul>
                    </div>
                    <div class="service-box">
                        <h4>{"Case Studies"}</h4>
                        <ul>{ staggered(service.case_studies, "case-study", "★") }</ul>
                    </div>
                </div>

                <Link<Route> to={Route::Contact} classes="btn btn-primary">
                    {"Get Expert Consultation"}
                </Link<Route>>
            </div>

            <div class="service-features">
                <h3>{"Service Features"}</h3>
                <ul>{ staggered(service.features, "feature", "✔") }</ul>
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let selected = use_state(|| 0usize);
    let service = SERVICES.get(*selected).unwrap_or(&SERVICES[0]);

    html! {
        <div class="page page-services">
            <PageTitleHero
                title="Our Legal Services"
                subtitle="Comprehensive legal solutions tailored for modern businesses and technology-driven organizations"
                quote={AttrValue::from("The law is reason, free from passion")}
                author={AttrValue::from("Aristotle")}
                background_image="https://images.unsplash.com/photo-1589829545856-d10d557cf95f?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80"
            />

            <section class="service-picker">
                <div class="container">
                    { for SERVICES.iter().enumerate().map(|(i, s)| {
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| selected.set(i))
                        };
                        html! {
                            <button class={classes!("service-tab", (i == *selected).then(|| "active"))} {onclick}>
                                {s.title}
                            </button>
                        }
                    }) }
                </div>
            </section>

            <section class="service-stage">
                <div class="container">
                    // Keyed so the pane is rebuilt, replaying its fade on every switch.
                    <div key={selected.to_string()} class="crossfade">
                        <ServiceDetail service={service} />
                    </div>
                </div>
            </section>

            <section class="process">
                <div class="container">
                    <div class="section-heading on-dark">
                        <h2>{"Our Process"}</h2>
                        <p>{"A systematic approach to delivering exceptional legal services"}</p>
                    </div>
                    <div class="process-grid">
                        { for PROCESS.iter().enumerate().map(|(i, (step, title, desc, icon))| html! {
                            <div class="process-step rise" style={format!("animation-delay: {}ms;", i * 200)}>
                                <div class="process-icon">{*icon}</div>
                                <div class="process-number">{*step}</div>
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <AnimatedCta
                title="Need Legal Assistance?"
                description="Our expert team is ready to provide the legal support your business needs to thrive."
                button_text="Schedule Consultation"
            />
        </div>
    }
}
