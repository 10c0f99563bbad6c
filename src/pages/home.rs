use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{cta::AnimatedCta, slideshow::Slideshow, stats::StatsSection};
use crate::content::SLIDES;
use crate::Route;

static PREVIEW: [(&str, &str, &str, &str); 3] = [
    (
        "🌐",
        "Technology & Innovation Law",
        "Fintech advisory, regulatory compliance, cybersecurity, AI law, and legal audits for tech platforms",
        "tone-blue",
    ),
    (
        "🛡",
        "IP & Data Protection",
        "Trademark, copyright, patent advisory, data protection strategy, and breach response services",
        "tone-green",
    ),
    (
        "🏢",
        "Corporate & Compliance",
        "Business incorporation, ESG governance, regulatory licensing, and ongoing compliance advisory",
        "tone-orange",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page page-home">
            <Slideshow slides={SLIDES} />

            <StatsSection />

            <section class="foundation">
                <div class="container">
                    <div class="section-heading on-dark">
                        <h2>{"Our Foundation"}</h2>
                        <p>{"Built on principles of excellence, innovation, and unwavering commitment to our clients"}</p>
                    </div>
                    <div class="foundation-grid">
                        <div class="foundation-card rise rise-1">
                            <h3>{"🎯 Our Mission"}</h3>
                            <p>
                                {"To provide forward-thinking, business-aligned legal solutions that help clients confidently navigate technology, finance, compliance, and innovation. We combine legal excellence with industry insight to protect your interests, unlock opportunities, and support sustainable success."}
                            </p>
                        </div>
                        <div class="foundation-card rise rise-2">
                            <h3>{"👁 Our Vision"}</h3>
                            <p>
                                {"To be Africa's trusted legal partner for technology-driven businesses shaping the future of law through innovation, ethical counsel, and a deep understanding of data, compliance, and impact."}
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="services-preview">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"What We Do"}</h2>
                        <p>{"Comprehensive legal services tailored for the modern business landscape"}</p>
                    </div>
                    <div class="preview-grid">
                        { for PREVIEW.iter().enumerate().map(|(i, (icon, title, description, tone))| html! {
                            <div class="preview-card rise" style={format!("animation-delay: {}ms;", i * 200)}>
                                <Link<Route> to={Route::Services}>
                                    <div class={classes!("preview-icon", *tone)}>{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                    <span class="preview-more">{"Learn More →"}</span>
                                </Link<Route>>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <AnimatedCta
                title="Ready to Get Started?"
                description="Schedule a consultation with our expert legal team and discover how we can help protect and grow your business."
                button_text="Schedule Consultation"
            />
        </div>
    }
}
