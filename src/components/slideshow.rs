use gloo_timers::callback::{Interval, Timeout};
use web_sys::AnimationEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::carousel::{Carousel, CarouselAction, AUTO_ADVANCE_MS, LOCK_FALLBACK_MS};
use crate::content::Slide;
use crate::Route;

const CROSSFADE_ANIMATION: &str = "slide-crossfade";

#[derive(Properties, PartialEq)]
pub struct SlideshowProps {
    pub slides: &'static [Slide],
}

#[function_component(Slideshow)]
pub fn slideshow(props: &SlideshowProps) -> Html {
    let slides = props.slides;
    let carousel = use_reducer(|| Carousel::new(slides.len()));

    // Auto-advance. Restarted on every index change, so a manual move gets a
    // full period before the next automatic one.
    {
        let carousel = carousel.clone();
        let index = carousel.index();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(AUTO_ADVANCE_MS, move || {
                    carousel.dispatch(CarouselAction::Tick);
                });
                move || drop(interval)
            },
            index,
        );
    }

    // Fallback release in case the cross-fade never reports its end.
    {
        let carousel = carousel.clone();
        let transition_id = carousel.transition_id();
        use_effect_with_deps(
            move |transition: &Option<u32>| {
                let timeout = transition.map(|id| {
                    Timeout::new(LOCK_FALLBACK_MS, move || {
                        carousel.dispatch(CarouselAction::Release(id));
                    })
                });
                move || drop(timeout)
            },
            transition_id,
        );
    }

    let Some(slide) = slides.get(carousel.index()) else {
        return html! {};
    };
    let disabled = carousel.controls_disabled();

    let on_crossfade_end = {
        let carousel = carousel.clone();
        let transition = carousel.transition_id();
        Callback::from(move |e: AnimationEvent| {
            if e.animation_name() != CROSSFADE_ANIMATION {
                return;
            }
            if let Some(id) = transition {
                carousel.dispatch(CarouselAction::Release(id));
            }
        })
    };

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Prev))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };

    let key = carousel.index().to_string();

    html! {
        <section class={classes!("hero-slideshow", carousel.is_locked().then(|| "transitioning"))}>
            <div
                key={format!("bg-{}", key)}
                class="slide-bg"
                style={format!("background-image: url('{}');", slide.image)}
                onanimationend={on_crossfade_end}
            >
                <div class="slide-shade"></div>
            </div>

            <div key="content" class="slide-content">
                <div class="container">
                    <h1 key={format!("title-{}", key)} class="slide-title rise rise-1">{slide.title}</h1>
                    <p key={format!("subtitle-{}", key)} class="slide-subtitle rise rise-2">{slide.subtitle}</p>
                    <div key={format!("quote-{}", key)} class="slide-quote rise rise-3">
                        <span class="slide-quote-mark">{"“"}</span>
                        <blockquote>{format!("\"{}\"", slide.quote)}</blockquote>
                        <cite>{format!("— {}", slide.author)}</cite>
                    </div>
                    <div key="actions" class="slide-actions rise rise-4">
                        <Link<Route> to={Route::Contact} classes="btn btn-primary">
                            {"Get Legal Consultation →"}
                        </Link<Route>>
                        <Link<Route> to={Route::Services} classes="btn btn-outline">
                            {"Explore Our Services"}
                        </Link<Route>>
                    </div>
                </div>
            </div>

            <div key="dots" class="slide-dots">
                { for (0..carousel.len()).map(|i| {
                    let onclick = {
                        let carousel = carousel.clone();
                        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(i)))
                    };
                    html! {
                        <button
                            class={classes!("slide-dot", (i == carousel.index()).then(|| "active"))}
                            aria-label={format!("Show slide {}", i + 1)}
                            {disabled}
                            {onclick}
                        />
                    }
                }) }
            </div>

            <button key="prev" class="slide-arrow slide-arrow-prev" aria-label="Previous slide" {disabled} onclick={on_prev}>{"‹"}</button>
            <button key="next" class="slide-arrow slide-arrow-next" aria-label="Next slide" {disabled} onclick={on_next}>{"›"}</button>
        </section>
    }
}
