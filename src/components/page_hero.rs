use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageTitleHeroProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    // Accepted for every page but not shown in the current design.
    #[prop_or_default]
    pub quote: Option<AttrValue>,
    #[prop_or_default]
    pub author: Option<AttrValue>,
    pub background_image: AttrValue,
}

#[function_component(PageTitleHero)]
pub fn page_title_hero(props: &PageTitleHeroProps) -> Html {
    let background = format!("background-image: url('{}');", props.background_image);

    html! {
        <section class="page-hero">
            <div class="page-hero-bg" style={background}></div>
            <div class="page-hero-shade"></div>
            <div class="page-hero-content">
                <h1 class="rise rise-1">{props.title.clone()}</h1>
                <p class="rise rise-2">{props.subtitle.clone()}</p>
                if props.quote.is_some() {
                    <div class="page-hero-rule rise rise-3"></div>
                }
            </div>
        </section>
    }
}
