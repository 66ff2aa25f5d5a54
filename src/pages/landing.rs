use yew::prelude::*;

use crate::carousel::HeroCarousel;
use crate::components::contact_form::ContactForm;
use crate::components::hero::Hero;
use crate::components::nav::Header;
use crate::components::pricing::Pricing;
use crate::components::reveal::use_fade_in_reveal;
use crate::components::stats::Stats;

const SERVICES: &[(&str, &str)] = &[
    ("Brand strategy", "Positioning and messaging workshops that give the whole team one story to tell."),
    ("Web design", "Fast, accessible sites designed around the decisions your customers need to make."),
    ("Product engineering", "Small senior teams shipping production software in two-week increments."),
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub hero_ref: NodeRef,
    pub carousel: HeroCarousel,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    use_fade_in_reveal();

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    body.loading {
                        overflow: hidden;
                    }
                    .landing-page {
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #0b1320;
                    }
                    .fade-in {
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .fade-in.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .section-title {
                        text-align: center;
                        font-size: 2rem;
                        margin-bottom: 48px;
                    }
                    .about, .services {
                        padding: 96px 24px;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .about p {
                        max-width: 720px;
                        margin: 0 auto 1rem;
                        line-height: 1.7;
                        text-align: center;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 24px;
                    }
                    .service {
                        padding: 28px;
                        border-radius: 16px;
                        background: #f5f7fb;
                    }
                    footer {
                        padding: 32px 24px;
                        text-align: center;
                        font-size: 0.9rem;
                        opacity: 0.7;
                    }
                "#}
            </style>
            <Header />
            <Hero section_ref={props.hero_ref.clone()} carousel={props.carousel.clone()} />

            <section id="about" class="about">
                <h2 class="section-title fade-in">{"About us"}</h2>
                <p class="fade-in">
                    {"We are a small studio of strategists, designers and engineers. Since 2012 we have helped companies of every size launch products their customers love."}
                </p>
                <p class="fade-in">
                    {"Every engagement is run by the people doing the work, with no hand-offs and no surprises."}
                </p>
            </section>

            <section id="services" class="services">
                <h2 class="section-title fade-in">{"Services"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|(title, body)| html! {
                        <div class="service fade-in">
                            <h3>{ *title }</h3>
                            <p>{ *body }</p>
                        </div>
                    }) }
                </div>
            </section>

            <Stats />
            <Pricing />
            <ContactForm />

            <footer>
                {"© Northwind Studio. All rights reserved."}
            </footer>
        </div>
    }
}
