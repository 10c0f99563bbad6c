use yew::prelude::*;

static STATS: [(&str, &str, &str); 4] = [
    ("500+", "Clients Served", "👥"),
    ("98%", "Success Rate", "📈"),
    ("10+", "Years Experience", "🏆"),
    ("24/7", "Client Support", "✔"),
];

#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    html! {
        <section class="stats">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Our Track Record"}</h2>
                    <p>{"Proven excellence in legal services"}</p>
                </div>
                <div class="stats-grid">
                    { for STATS.iter().enumerate().map(|(i, (number, label, icon))| html! {
                        <div class="stat-card rise" style={format!("animation-delay: {}ms;", i * 100)}>
                            <div class="stat-icon">{*icon}</div>
                            <div class="stat-number">{*number}</div>
                            <div class="stat-label">{*label}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
