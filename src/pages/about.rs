use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{cta::AnimatedCta, page_hero::PageTitleHero};
use crate::Route;

static VALUES: [(&str, &str, &str); 3] = [
    (
        "🛡",
        "Integrity",
        "We maintain the highest ethical standards in all our professional dealings, ensuring transparency and honesty in every client relationship.",
    ),
    (
        "⚡",
        "Innovation",
        "We embrace technology and modern approaches to deliver efficient, cutting-edge legal solutions that meet today's business challenges.",
    ),
    (
        "❤",
        "Excellence",
        "We are committed to delivering exceptional results through meticulous attention to detail and unwavering dedication to client success.",
    ),
];

static REASONS: [(&str, &str, &str); 6] = [
    (
        "📖",
        "Technology-First Approach",
        "We leverage cutting-edge technology and digital tools to deliver efficient, modern legal solutions that keep pace with your business.",
    ),
    (
        "📚",
        "Deep Industry Expertise",
        "Specialized knowledge in fintech, data protection, technology law, and emerging regulatory frameworks across Africa.",
    ),
    (
        "👥",
        "Client-Centric Service",
        "Personalized attention and strategic counsel tailored to your specific business needs and growth objectives.",
    ),
    (
        "📄",
        "Regulatory Excellence",
        "Deep understanding of Nigerian and international regulations, ensuring compliance while enabling business innovation.",
    ),
    (
        "🤝",
        "Strategic Partnership",
        "We don't just provide legal services, we become your strategic partner in navigating complex business challenges.",
    ),
    (
        "🏆",
        "Proven Track Record",
        "15+ years of excellence with a 98% client satisfaction rate and successful outcomes across diverse industries.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="page page-about">
            <PageTitleHero
                title="About Blacksuit Solicitors"
                subtitle="Leading legal innovation in Africa with specialized solutions for modern businesses"
                quote={AttrValue::from("Justice delayed is justice denied")}
                author={AttrValue::from("William E. Gladstone")}
                background_image="https://images.unsplash.com/photo-1560472354-b33ff0c44a43?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80"
            />

            <section class="overview">
                <div class="container overview-grid">
                    <div class="overview-copy slide-in">
                        <h2>{"Who We Are"}</h2>
                        <p>
                            {"At Blacksuit Solicitors, we specialize in helping modern businesses, founders, and institutions stay ahead of legal risks in an increasingly digital, data-driven world. From fintech regulation to real estate structuring, data protection to intellectual property, we offer clear, strategic, and tech-savvy legal support built around your growth."}
                        </p>
                        <p>
                            {"Our team combines deep legal expertise with cutting-edge industry knowledge to provide comprehensive solutions that protect your interests while enabling innovation and growth. We understand the unique challenges facing businesses in Nigeria's dynamic economy."}
                        </p>
                        <p>
                            {"Founded on principles of excellence, integrity, and innovation, we have grown to become one of Nigeria's most trusted legal partners for technology-driven businesses and forward-thinking organizations."}
                        </p>
                        <div class="overview-figures">
                            <div class="overview-figure">
                                <div class="overview-figure-value">{"15+"}</div>
                                <div class="overview-figure-label">{"Years Experience"}</div>
                            </div>
                            <div class="overview-figure">
                                <div class="overview-figure-value">{"500+"}</div>
                                <div class="overview-figure-label">{"Clients Served"}</div>
                            </div>
                        </div>
                        <Link<Route> to={Route::Contact} classes="btn btn-primary">
                            {"Partner With Us"}
                        </Link<Route>>
                    </div>
                    <div class="overview-media rise rise-2">
                        <img
                            src="https://images.unsplash.com/photo-1556157382-97eda2d62296?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80"
                            alt="Professional legal team"
                        />
                        <div class="overview-badge">
                            <div class="overview-badge-value">{"98%"}</div>
                            <div class="overview-badge-label">{"Client Satisfaction Rate"}</div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="values">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Our Core Values"}</h2>
                        <p>{"The principles that guide everything we do"}</p>
                    </div>
                    <div class="values-grid">
                        { for VALUES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                            <div class="value-card rise" style={format!("animation-delay: {}ms;", i * 200)}>
                                <div class="value-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="reasons">
                <div class="container">
                    <div class="section-heading on-dark">
                        <h2>{"Why Choose Blacksuit Solicitors?"}</h2>
                        <p>{"We deliver exceptional legal services through innovation, expertise, and unwavering commitment"}</p>
                    </div>
                    <div class="reasons-grid">
                        { for REASONS.iter().enumerate().map(|(i, (icon, title, description))| html! {
                            <div class="reason-card rise" style={format!("animation-delay: {}ms;", i * 100)}>
                                <div class="reason-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <AnimatedCta
                title="Ready to Experience Excellence?"
                description="Join hundreds of satisfied clients who trust Blacksuit Solicitors for their legal needs."
                button_text="Start Your Journey"
            />
        </div>
    }
}
