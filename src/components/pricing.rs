use yew::prelude::*;

use crate::components::anchor::on_anchor_click;
use crate::config;
use crate::context::use_ready;

struct Plan {
    name: &'static str,
    price: &'static str,
    features: &'static [&'static str],
    featured: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "$490 / mo",
        features: &["Monthly strategy call", "Landing page refresh", "Email support"],
        featured: false,
    },
    Plan {
        name: "Growth",
        price: "$1,290 / mo",
        features: &["Weekly strategy call", "Design and build sprints", "Analytics reporting"],
        featured: true,
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        features: &["Dedicated team", "Integration work", "Priority support"],
        featured: false,
    },
];

/// Opacity of plan `index` while `hovered` is under the pointer.
pub fn plan_opacity(index: usize, hovered: Option<usize>, ready: bool) -> f64 {
    match hovered {
        Some(h) if ready && h != index => config::DIMMED_PLAN_OPACITY,
        _ => 1.0,
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let ready = use_ready();
    let hovered = use_state(|| None::<usize>);

    let plans = PLANS.iter().enumerate().map(|(index, plan)| {
        let on_enter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
        };
        let on_leave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };
        // Full opacity is left to the stylesheet so the fade-in still applies.
        let opacity = plan_opacity(index, *hovered, ready.is_ready());
        let style = (opacity < 1.0).then(|| format!("opacity: {};", opacity));

        html! {
            <div
                class={classes!("plan", "fade-in", plan.featured.then_some("featured"))}
                {style}
                onmouseenter={on_enter}
                onmouseleave={on_leave}
            >
                <h3>{ plan.name }</h3>
                <div class="plan-price">{ plan.price }</div>
                <ul>
                    { for plan.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                </ul>
                <a href="#contact" class="plan-cta" onclick={on_anchor_click("#contact")}>{"Get started"}</a>
            </div>
        }
    });

    html! {
        <section id="pricing" class="pricing">
            <style>
                {r#"
                    .pricing {
                        padding: 96px 24px;
                    }
                    .plans {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 24px;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .plan {
                        padding: 32px;
                        border: 1px solid #e3e7ee;
                        border-radius: 16px;
                        transition: opacity 0.3s ease, transform 0.3s ease;
                    }
                    .plan.featured {
                        border-color: #1e6fff;
                        box-shadow: 0 12px 32px rgba(30, 111, 255, 0.15);
                    }
                    .plan-price {
                        font-size: 1.75rem;
                        font-weight: 700;
                        margin: 12px 0 20px;
                    }
                "#}
            </style>
            <h2 class="section-title fade-in">{"Pricing"}</h2>
            <div class="plans">{ for plans }</div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hovering_dims_only_siblings() {
        assert_eq!(plan_opacity(0, Some(1), true), 0.7);
        assert_eq!(plan_opacity(1, Some(1), true), 1.0);
        assert_eq!(plan_opacity(2, Some(1), true), 0.7);
    }

    #[test]
    fn leaving_or_not_ready_keeps_full_opacity() {
        assert_eq!(plan_opacity(0, None, true), 1.0);
        assert_eq!(plan_opacity(0, Some(1), false), 1.0);
    }
}
