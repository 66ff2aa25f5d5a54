use log::info;
use web_sys::window;
use yew::prelude::*;

mod carousel;
mod config;
mod context;
mod counter;
mod debounce;
mod effects;
mod intro;
mod scheduler;
mod contact {
    pub mod submission;
    pub mod validation;
}
mod components {
    pub mod anchor;
    pub mod contact_form;
    pub mod hero;
    pub mod intro_overlay;
    pub mod nav;
    pub mod pricing;
    pub mod reveal;
    pub mod stats;
}
mod pages {
    pub mod landing;
}

use carousel::HeroCarousel;
use components::hero::{publish_control, HeroImageStrip, HERO_IMAGES};
use components::intro_overlay::IntroOverlay;
use context::{Clock, ReadyFlag};
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    let clock = use_memo(|_| Clock::browser(), ());
    let ready = use_state(ReadyFlag::default);
    let hero_ref = use_node_ref();

    let carousel = {
        let scheduler = clock.scheduler();
        let hero_ref = hero_ref.clone();
        use_memo(
            move |_| HeroCarousel::new(scheduler, HeroImageStrip::new(hero_ref), HERO_IMAGES.len()),
            (),
        )
    };

    {
        let carousel = (*carousel).clone();
        use_effect_with_deps(
            move |_| {
                publish_control(&carousel);
                || ()
            },
            (),
        );
    }

    let on_revealed = {
        let ready = ready.clone();
        let carousel = (*carousel).clone();
        Callback::from(move |_: ()| {
            if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let _ = body.class_list().remove_1("loading");
            }
            ready.set(ReadyFlag::READY);
            carousel.initialize();
            info!("Page revealed");
        })
    };

    html! {
        <ContextProvider<Clock> context={(*clock).clone()}>
            <ContextProvider<ReadyFlag> context={*ready}>
                <IntroOverlay {on_revealed} />
                <Landing hero_ref={hero_ref} carousel={(*carousel).clone()} />
            </ContextProvider<ReadyFlag>>
        </ContextProvider<Clock>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
