use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Object, Reflect};
use web_sys::{Element, Event, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::carousel::{CarouselSurface, HeroCarousel, HeroVisibility};
use crate::config;
use crate::context::{use_clock, use_ready};
use crate::debounce::Debouncer;
use crate::intro::hero_reveal_delays;
use crate::components::anchor::on_anchor_click;

pub const HERO_IMAGES: &[&str] = &[
    "/assets/hero/office.jpg",
    "/assets/hero/team.jpg",
    "/assets/hero/workshop.jpg",
    "/assets/hero/skyline.jpg",
];

/// The hero's images, looked up through the section's node ref on every call
/// so the carousel can be built before the section is mounted.
pub struct HeroImageStrip {
    section: NodeRef,
}

impl HeroImageStrip {
    pub fn new(section: NodeRef) -> Self {
        Self { section }
    }

    fn images(&self) -> Vec<HtmlElement> {
        let Some(section) = self.section.cast::<Element>() else {
            return Vec::new();
        };
        let Ok(nodes) = section.query_selector_all(".hero-image") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }
}

impl CarouselSurface for HeroImageStrip {
    fn set_flowing(&self, flowing: bool) {
        for image in self.images() {
            let classes = image.class_list();
            let _ = if flowing {
                classes.add_1("flowing")
            } else {
                classes.remove_1("flowing")
            };
        }
    }

    fn reflow(&self) {
        if let Some(image) = self.images().first() {
            let _ = image.offset_height();
        }
    }

    fn set_paused(&self, paused: bool) {
        let state = if paused { "paused" } else { "running" };
        for image in self.images() {
            let _ = image.style().set_property("animation-play-state", state);
        }
    }
}

/// Publishes the carousel controls on `window.heroAnimationControl`.
pub fn publish_control(carousel: &HeroCarousel) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let control = Object::new();

    let actions: [(&str, fn(&HeroCarousel)); 4] = [
        ("stop", HeroCarousel::stop),
        ("start", HeroCarousel::start),
        ("pause", HeroCarousel::pause),
        ("resume", HeroCarousel::resume),
    ];
    for (name, action) in actions {
        let carousel = carousel.clone();
        let callback = Closure::<dyn Fn()>::new(move || action(&carousel));
        let _ = Reflect::set(&control, &JsValue::from_str(name), callback.as_ref());
        callback.forget();
    }

    let carousel = carousel.clone();
    let is_running = Closure::<dyn Fn() -> bool>::new(move || carousel.is_running());
    let _ = Reflect::set(&control, &JsValue::from_str("isRunning"), is_running.as_ref());
    is_running.forget();

    let _ = Reflect::set(&window, &JsValue::from_str("heroAnimationControl"), &control);
    debug!("Hero carousel control published");
}

fn measure_visibility(section: &NodeRef) -> Option<HeroVisibility> {
    let window = web_sys::window()?;
    let rect = section.cast::<Element>()?.get_bounding_client_rect();
    Some(HeroVisibility {
        top: rect.top(),
        bottom: rect.bottom(),
        viewport_height: window.inner_height().ok()?.as_f64()?,
        tab_hidden: window.document().map_or(false, |d| d.hidden()),
    })
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub section_ref: NodeRef,
    pub carousel: HeroCarousel,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let ready = use_ready();
    let scheduler = use_clock();
    let revealed = use_state(|| 0usize);

    // Stagger the hero copy in once the intro is done.
    {
        let revealed = revealed.setter();
        let scheduler = scheduler.clone();
        use_effect_with_deps(
            move |ready| {
                if ready.is_ready() {
                    for (i, delay) in hero_reveal_delays(HERO_COPY_ITEMS).enumerate() {
                        let revealed = revealed.clone();
                        scheduler.schedule(delay, Box::new(move || revealed.set(i + 1)));
                    }
                }
                || ()
            },
            ready,
        );
    }

    let visibility_check = {
        let section = props.section_ref.clone();
        let carousel = props.carousel.clone();
        use_memo(
            move |_| {
                Debouncer::new(scheduler, config::HERO_VISIBILITY_DEBOUNCE_MS, move |()| {
                    if let Some(visibility) = measure_visibility(&section) {
                        carousel.sync_visibility(visibility);
                    }
                })
            },
            (),
        )
    };

    {
        let visibility_check = visibility_check.clone();
        use_event_with_window("scroll", move |_: Event| {
            if ready.is_ready() {
                visibility_check.call(());
            }
        });
    }

    {
        let carousel = props.carousel.clone();
        use_event_with_window("beforeunload", move |_: Event| {
            info!("Page unloading, stopping hero carousel");
            carousel.teardown();
        });
    }

    // Tab visibility reacts immediately, not through the scroll debounce.
    {
        let section = props.section_ref.clone();
        let carousel = props.carousel.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let listener = Closure::<dyn Fn()>::new(move || {
                    if let Some(visibility) = measure_visibility(&section) {
                        carousel.sync_visibility(visibility);
                    }
                });
                if let Some(document) = &document {
                    let _ = document
                        .add_event_listener_with_callback("visibilitychange", listener.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "visibilitychange",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let on_image_settled = {
        let carousel = props.carousel.clone();
        Callback::from(move |_: Event| carousel.image_settled())
    };

    let copy_class = |i: usize| classes!("fade-in", (*revealed > i).then_some("visible"));

    html! {
        <section id="home" class="hero" ref={props.section_ref.clone()}>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        color: #fff;
                    }
                    .hero-track {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        z-index: -1;
                    }
                    .hero-image {
                        flex: 0 0 100%;
                        height: 100%;
                        object-fit: cover;
                        filter: brightness(0.55);
                    }
                    .hero-image.flowing {
                        animation: heroFlow 40s linear forwards;
                    }
                    @keyframes heroFlow {
                        from { transform: translateX(0); }
                        to { transform: translateX(-300%); }
                    }
                    .hero-content {
                        max-width: 720px;
                        margin: 0 auto;
                        padding: 0 24px;
                        text-align: center;
                    }
                    .hero-content h1 {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .hero-cta {
                        display: inline-block;
                        margin-top: 2rem;
                        padding: 14px 36px;
                        border-radius: 999px;
                        background: #1e6fff;
                        color: #fff;
                        text-decoration: none;
                    }
                "#}
            </style>
            <div class="hero-track">
                { for HERO_IMAGES.iter().map(|src| html! {
                    <img
                        class="hero-image"
                        src={*src}
                        alt=""
                        onload={on_image_settled.clone()}
                        onerror={on_image_settled.clone()}
                    />
                }) }
            </div>
            <div class="hero-content">
                <h1 class={copy_class(0)}>{"Build the business you imagined"}</h1>
                <p class={copy_class(1)}>
                    {"Strategy, design and engineering for teams that want to move faster."}
                </p>
                <a href="#contact" class={classes!("hero-cta", copy_class(2))} onclick={on_anchor_click("#contact")}>
                    {"Talk to us"}
                </a>
            </div>
        </section>
    }
}

const HERO_COPY_ITEMS: usize = 3;
