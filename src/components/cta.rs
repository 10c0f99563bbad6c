use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct AnimatedCtaProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub button_text: AttrValue,
    #[prop_or(Route::Contact)]
    pub button_link: Route,
}

#[function_component(AnimatedCta)]
pub fn animated_cta(props: &AnimatedCtaProps) -> Html {
    html! {
        <section class="cta-band">
            <div class="container">
                <h2 class="rise rise-1">{props.title.clone()}</h2>
                <p class="rise rise-2">{props.description.clone()}</p>
                <div class="rise rise-3">
                    <Link<Route> to={props.button_link.clone()} classes="btn btn-light">
                        {props.button_text.clone()}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}
